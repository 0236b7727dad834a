// src/tests/router_tests/decode_tests.rs
use crate::api::ApiError;
use crate::domain::VinRecord;
use crate::router::handle;
use crate::tests::utils::{context, open_session, post_form, Call, FakeApi, Page, VIN};

fn accord() -> VinRecord {
    VinRecord {
        year: Some(2020),
        make: Some("Honda".into()),
        model: Some("Accord".into()),
        series: Some("EX-L".into()),
        ..VinRecord::default()
    }
}

#[test]
fn decode_fills_filters_with_new_options() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = context(FakeApi::decoding(accord()));
    let token = open_session(&ctx);

    let resp = handle(post_form("/decode", Some(&token), &format!("vin={VIN}")), &ctx)?;
    let page = Page::from_response(resp);

    assert_eq!(ctx.api.calls(), vec![Call::Decode(VIN.into())]);
    assert_eq!(page.selected_option("make").as_deref(), Some("Honda"));
    assert!(page
        .options("make")
        .contains(&("Honda".to_string(), "Honda".to_string())));
    assert_eq!(page.selected_option("model").as_deref(), Some("Accord"));
    assert_eq!(page.selected_option("trim").as_deref(), Some("EX-L"));
    assert_eq!(page.attr("yearMin", "value").as_deref(), Some("2020"));
    assert_eq!(page.text("yearMinDisplay"), "2020");
    assert_eq!(page.text("yearMaxDisplay"), "2020");
    assert_eq!(
        page.text("successMessage"),
        "✓ VIN has been decoded into the filters below!"
    );
    assert!(page.is_hidden("errorMessage"));
    assert_eq!(page.text("decodedVehicle"), "Last decoded: 2020 Honda Accord EX-L");
    assert!(!page.attr("loadingIndicator", "class").unwrap_or_default().contains("htmx-request"));
    Ok(())
}

#[test]
fn short_vin_shows_error_and_skips_backend() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = context(FakeApi::decoding(accord()));
    let token = open_session(&ctx);

    let page = Page::from_response(handle(post_form("/decode", Some(&token), "vin=1HGCM"), &ctx)?);

    assert!(ctx.api.calls().is_empty());
    assert!(!page.is_hidden("errorMessage"));
    assert_eq!(page.text("errorMessage"), "VIN must be exactly 17 characters");
    assert!(page.is_hidden("successMessage"));
    Ok(())
}

#[test]
fn backend_down_shows_network_error() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeApi::new().on_decode(|_| Err(ApiError::Transport("connection refused".into())));
    let ctx = context(api);
    let token = open_session(&ctx);

    let page = Page::from_response(handle(
        post_form("/decode", Some(&token), &format!("vin={VIN}")),
        &ctx,
    )?);

    assert_eq!(page.text("errorMessage"), "Network error: Unable to decode VIN");
    assert_eq!(page.attr("decodedVehicle", "id"), None);
    assert_eq!(page.selected_option("make").as_deref(), Some(""));
    assert_eq!(page.attr("decodeBtn", "disabled"), None);
    Ok(())
}

#[test]
fn decoded_options_survive_clear() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = context(FakeApi::decoding(accord()));
    let token = open_session(&ctx);
    handle(post_form("/decode", Some(&token), &format!("vin={VIN}")), &ctx)?;

    let page = Page::from_response(handle(post_form("/clear", Some(&token), ""), &ctx)?);

    assert_eq!(page.selected_option("make").as_deref(), Some(""));
    assert!(page.options("make").iter().any(|(value, _)| value == "Honda"));
    Ok(())
}

#[test]
fn sessions_do_not_share_form_state() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = context(FakeApi::decoding(accord()));
    let alice = open_session(&ctx);
    let bob = open_session(&ctx);

    handle(post_form("/decode", Some(&alice), &format!("vin={VIN}")), &ctx)?;
    let page = Page::from_response(handle(post_form("/vin", Some(&bob), "vin="), &ctx)?);

    assert_eq!(page.attr("vin", "value").as_deref(), Some(""));
    assert_eq!(ctx.sessions.len(), 2);
    Ok(())
}
