use crate::api::PricingApi;
use crate::controller::{FormController, FormInput};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp, SESSION_COOKIE};
use crate::session::SessionStore;
use crate::templates::components::filters::{odometer_labels, vin_input, year_labels};
use crate::templates::pages::form_page;
use astra::Request;
use serde_json::json;
use std::io::Read;
use tracing::debug;

const MAX_FORM_BYTES: u64 = 16 * 1024;

/// What the handler needs besides the request.
pub struct AppContext<A> {
    pub api: A,
    pub sessions: SessionStore,
}

/// Which part of the page a route answers with.
enum View {
    Page,
    VinInput,
    YearLabels,
    OdometerLabels,
}

pub fn handle<A: PricingApi>(mut req: Request, ctx: &AppContext<A>) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/health") => json_response(
            200,
            &json!({ "status": "healthy", "service": "VIN Pricing Form" }),
        ),

        ("GET", "/") => with_session(&mut req, ctx, View::Page, |_, _, _| {}),

        // keystrokes in the VIN box
        ("POST", "/vin") => with_session(&mut req, ctx, View::VinInput, |c, input, _| {
            c.input_vin(input.vin.as_deref().unwrap_or_default());
        }),

        // workflow errors are already on the page as the error message
        ("POST", "/decode") => with_session(&mut req, ctx, View::Page, |c, input, api| {
            c.apply_input(input);
            if let Err(e) = c.decode_vin(api) {
                debug!(error = %e, "decode not applied");
            }
        }),

        ("POST", "/results") => with_session(&mut req, ctx, View::Page, |c, input, api| {
            c.apply_input(input);
            let raw_mileage = input
                .odometer
                .clone()
                .unwrap_or_else(|| c.filters.odometer.to_string());
            match c.lookup_pricing(api, &raw_mileage) {
                Ok(cards) => debug!(cards, "pricing shown"),
                Err(e) => debug!(error = %e, "pricing not shown"),
            }
        }),

        ("POST", "/clear") => with_session(&mut req, ctx, View::Page, |c, _, _| c.clear()),

        ("POST", "/filters/year") => {
            with_session(&mut req, ctx, View::YearLabels, |c, input, _| {
                if let Some(year) = input.year_value() {
                    c.slide_year(year);
                }
            })
        }

        ("POST", "/filters/odometer") => {
            with_session(&mut req, ctx, View::OdometerLabels, |c, input, _| {
                if let Some(km) = input.odometer_value() {
                    c.slide_odometer(km);
                }
            })
        }

        ("POST", "/filters/more") => {
            with_session(&mut req, ctx, View::Page, |c, _, _| c.more_filters())
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Load (or start) the caller's session, run `action` on its controller
/// and render `view` from the result.
fn with_session<A, F>(req: &mut Request, ctx: &AppContext<A>, view: View, action: F) -> ResultResp
where
    A: PricingApi,
    F: FnOnce(&mut FormController, &FormInput, &A),
{
    let input = if req.method().as_str() == "POST" {
        read_form(req)?
    } else {
        FormInput::default()
    };

    let token = session_token(req);
    let session = ctx.sessions.open(token.as_deref())?;
    let mut controller = session
        .controller
        .lock()
        .map_err(|_| ServerError::Internal("form session lock poisoned".into()))?;

    action(&mut *controller, &input, &ctx.api);

    let markup = match view {
        View::Page => {
            let scroll = controller.take_scroll();
            form_page(&controller, scroll)
        }
        View::VinInput => vin_input(&controller.filters.vin),
        View::YearLabels => year_labels(&controller.filters),
        View::OdometerLabels => odometer_labels(&controller.filters),
    };

    html_response(markup, session.is_new.then_some(session.token.as_str()))
}

/// Bodies past `MAX_FORM_BYTES` are refused rather than cut short.
fn read_form(req: &mut Request) -> Result<FormInput, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest(format!(
            "form body over {MAX_FORM_BYTES} bytes"
        )));
    }

    Ok(FormInput::from_urlencoded(&body))
}

fn session_token(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}
