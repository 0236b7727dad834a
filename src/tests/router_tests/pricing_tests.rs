// src/tests/router_tests/pricing_tests.rs
use crate::api::PricingResponse;
use crate::router::handle;
use crate::tests::utils::{
    body_string, card, context, get, open_session, post_form, two_region_cards, Call, FakeApi,
    Page, VIN,
};

#[test]
fn results_render_summary_and_both_regions() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = context(FakeApi::pricing(two_region_cards()));
    let token = open_session(&ctx);

    let resp = handle(
        post_form("/results", Some(&token), &format!("vin={VIN}&odometer=50000")),
        &ctx,
    )?;
    let page = Page::from_response(resp);

    assert_eq!(ctx.api.calls(), vec![Call::Pricing(VIN.into(), 50_000)]);
    assert!(!page.is_hidden("resultsContainer"));
    assert_eq!(page.text("lowestPrice"), "$15,000");
    assert_eq!(page.text("averagePrice"), "$16,000");
    assert_eq!(page.text("highestPrice"), "$17,000");
    assert_eq!(page.text("lowestKms"), "50,000 km");
    assert_eq!(page.text("averageKms"), "55,000 km");
    assert_eq!(page.text("highestKms"), "60,000 km");
    assert!(page.has_children("ontarioPricingCard"));
    assert!(page.has_children("quebecPricingCard"));
    assert!(page.text("ontarioPricingCard").contains("2003 Honda Accord"));
    assert_eq!(
        page.attr("resultsContainer", "data-scroll-delay-ms").as_deref(),
        Some("100")
    );
    assert_eq!(page.text("successMessage"), "Pricing data retrieved successfully!");
    Ok(())
}

#[test]
fn scroll_request_is_rendered_once() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = context(FakeApi::pricing(two_region_cards()));
    let token = open_session(&ctx);
    handle(
        post_form("/results", Some(&token), &format!("vin={VIN}&odometer=50000")),
        &ctx,
    )?;

    let page = Page::from_response(handle(get("/", Some(&token)), &ctx)?);

    assert!(!page.is_hidden("resultsContainer"));
    assert_eq!(page.attr("resultsContainer", "data-scroll-delay-ms"), None);
    Ok(())
}

#[test]
fn empty_cards_keep_panel_hidden() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = context(FakeApi::pricing(Vec::new()));
    let token = open_session(&ctx);

    let page = Page::from_response(handle(
        post_form("/results", Some(&token), &format!("vin={VIN}&odometer=50000")),
        &ctx,
    )?);

    assert!(page.is_hidden("resultsContainer"));
    assert_eq!(page.text("errorMessage"), "Failed to fetch pricing data");
    assert_eq!(page.text("lowestPrice"), "--");
    Ok(())
}

#[test]
fn missing_region_renders_empty_container() -> Result<(), Box<dyn std::error::Error>> {
    let mut ontario = card("Ontario", 42_000, None);
    ontario.publish_date = None;
    let ctx = context(FakeApi::pricing(vec![ontario]));
    let token = open_session(&ctx);

    let page = Page::from_response(handle(
        post_form("/results", Some(&token), &format!("vin={VIN}&odometer=42000")),
        &ctx,
    )?);

    assert!(page.has_children("ontarioPricingCard"));
    assert!(!page.has_children("quebecPricingCard"));
    let ontario_text = page.text("ontarioPricingCard");
    assert!(ontario_text.contains("$0"));
    assert!(ontario_text.contains("N/A"));
    assert!(ontario_text.contains("42,000"));
    assert_eq!(page.text("lowestPrice"), "--");
    assert_eq!(page.text("lowestKms"), "42,000 km");
    Ok(())
}

#[test]
fn results_without_vin_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = context(FakeApi::pricing(two_region_cards()));
    let token = open_session(&ctx);

    let body = body_string(handle(
        post_form("/results", Some(&token), "vin=&odometer=50000"),
        &ctx,
    )?);
    let page = Page::parse(&body);

    assert!(ctx.api.calls().is_empty());
    assert_eq!(
        page.text("errorMessage"),
        "Please enter a valid 17-character VIN first and decode it"
    );
    Ok(())
}

#[test]
fn odometer_falls_back_to_stored_slider_value() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = context(FakeApi::pricing(two_region_cards()));
    let token = open_session(&ctx);

    handle(post_form("/results", Some(&token), &format!("vin={VIN}")), &ctx)?;

    assert_eq!(ctx.api.calls(), vec![Call::Pricing(VIN.into(), 100_000)]);
    Ok(())
}

#[test]
fn odometer_above_slider_ceiling_is_capped() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = context(FakeApi::pricing(two_region_cards()));
    let token = open_session(&ctx);

    let page = Page::from_response(handle(
        post_form("/results", Some(&token), &format!("vin={VIN}&odometer=999999")),
        &ctx,
    )?);

    assert_eq!(ctx.api.calls(), vec![Call::Pricing(VIN.into(), 200_000)]);
    assert_eq!(page.attr("odometerSlider", "value").as_deref(), Some("200000"));
    Ok(())
}

#[test]
fn cards_with_null_fields_still_render() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeApi::new().on_pricing(|_, _| {
        serde_json::from_str::<PricingResponse>(
            r#"{"cards":[
                {"province":"Ontario","year":2003,"make":"Honda","model":null,
                 "vin":null,"mileage":50000.0,"adjusted_whole_clean":15000,"publish_date":null},
                {"province":"Quebec","year":2003,"make":"Honda","model":"Accord",
                 "vin":"1HGCM82633A004352","mileage":60000,"adjusted_whole_clean":17000}
            ]}"#,
        )
        .map_err(|e| crate::api::ApiError::Decode(e.to_string()))
    });
    let ctx = context(api);
    let token = open_session(&ctx);

    let page = Page::from_response(handle(
        post_form("/results", Some(&token), &format!("vin={VIN}&odometer=50000")),
        &ctx,
    )?);

    assert!(!page.is_hidden("resultsContainer"));
    assert!(page.has_children("ontarioPricingCard"));
    assert!(page.has_children("quebecPricingCard"));
    assert!(page.text("ontarioPricingCard").contains("2003 Honda"));
    assert_eq!(page.text("lowestKms"), "50,000 km");
    assert_eq!(page.text("averagePrice"), "$16,000");
    Ok(())
}
