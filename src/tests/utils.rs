use crate::api::{ApiError, DecodeResponse, PricingApi, PricingResponse};
use crate::domain::{PricingCard, VinRecord};
use crate::router::{handle, AppContext};
use crate::session::{SessionLimits, SessionStore};
use astra::{Body, Response};
use http::{Method, Request};
use scraper::{Html, Selector};
use std::io::Read;
use std::sync::Mutex;
use std::time::Duration;

pub const VIN: &str = "1HGCM82633A004352";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Decode(String),
    Pricing(String, i64),
}

type DecodeReply = Box<dyn Fn(&str) -> Result<DecodeResponse, ApiError> + Send + Sync>;
type PricingReply = Box<dyn Fn(&str, i64) -> Result<PricingResponse, ApiError> + Send + Sync>;

/// In-memory backend that records every call.
pub struct FakeApi {
    decode: DecodeReply,
    pricing: PricingReply,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            decode: Box::new(|_| Ok(DecodeResponse::failed("no decode reply configured"))),
            pricing: Box::new(|_, _| Ok(PricingResponse::failed("no pricing reply configured"))),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn on_decode<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<DecodeResponse, ApiError> + Send + Sync + 'static,
    {
        self.decode = Box::new(f);
        self
    }

    pub fn on_pricing<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, i64) -> Result<PricingResponse, ApiError> + Send + Sync + 'static,
    {
        self.pricing = Box::new(f);
        self
    }

    pub fn decoding(record: VinRecord) -> Self {
        Self::new().on_decode(move |_| Ok(DecodeResponse::decoded(record.clone())))
    }

    pub fn pricing(cards: Vec<PricingCard>) -> Self {
        Self::new().on_pricing(move |_, _| Ok(PricingResponse::with_cards(cards.clone())))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl PricingApi for FakeApi {
    fn decode_vin(&self, vin: &str) -> Result<DecodeResponse, ApiError> {
        self.calls.lock().unwrap().push(Call::Decode(vin.to_string()));
        (self.decode)(vin)
    }

    fn pricing_cards(&self, vin: &str, mileage: i64) -> Result<PricingResponse, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Pricing(vin.to_string(), mileage));
        (self.pricing)(vin, mileage)
    }
}

pub fn card(province: &str, mileage: i64, price: Option<f64>) -> PricingCard {
    PricingCard {
        province: province.to_string(),
        year: Some(2003),
        make: "Honda".into(),
        model: "Accord".into(),
        vin: VIN.into(),
        mileage,
        adjusted_whole_clean: price,
        publish_date: Some("2025-01-06".into()),
    }
}

pub fn two_region_cards() -> Vec<PricingCard> {
    vec![
        card("Ontario", 50_000, Some(15_000.0)),
        card("Quebec", 60_000, Some(17_000.0)),
    ]
}

pub fn context(api: FakeApi) -> AppContext<FakeApi> {
    AppContext {
        api,
        sessions: SessionStore::new(
            SessionLimits {
                ttl: Duration::from_secs(600),
                max_sessions: 64,
            },
            Duration::from_millis(100),
        ),
    }
}

pub fn get(uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("form_session={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, session: Option<&str>, form: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("form_session={token}"));
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

/// Token from a `Set-Cookie: form_session=...` header, if one was sent.
pub fn new_session_token(resp: &Response) -> Option<String> {
    let cookie = resp.headers().get("Set-Cookie")?.to_str().ok()?;
    let value = cookie.split(';').next()?.strip_prefix("form_session=")?;
    Some(value.to_string())
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Start a session with a GET / and return its token.
pub fn open_session(ctx: &AppContext<FakeApi>) -> String {
    let resp = handle(get("/", None), ctx).expect("Handler failed");
    new_session_token(&resp).expect("new session should set a cookie")
}

/// Parsed page with lookups by element id.
pub struct Page {
    doc: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    pub fn from_response(resp: Response) -> Self {
        Self::parse(&body_string(resp))
    }

    fn one(&self, css: &str) -> Option<scraper::ElementRef<'_>> {
        let sel = Selector::parse(css).unwrap();
        self.doc.select(&sel).next()
    }

    pub fn text(&self, id: &str) -> String {
        self.one(&format!("#{id}"))
            .map(|e| e.text().collect::<String>().trim().to_string())
            .unwrap_or_else(|| panic!("no element #{id}"))
    }

    pub fn attr(&self, id: &str, name: &str) -> Option<String> {
        self.one(&format!("#{id}"))
            .and_then(|e| e.value().attr(name).map(str::to_string))
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.attr(id, "style")
            .map(|s| s.replace(' ', "").contains("display:none"))
            .unwrap_or(false)
    }

    pub fn has_children(&self, id: &str) -> bool {
        self.one(&format!("#{id}"))
            .map(|e| e.children().any(|c| c.value().is_element()))
            .unwrap_or_else(|| panic!("no element #{id}"))
    }

    /// `(value, label)` of every option in the select `#id`.
    pub fn options(&self, id: &str) -> Vec<(String, String)> {
        let sel = Selector::parse(&format!("#{id} option")).unwrap();
        self.doc
            .select(&sel)
            .map(|o| {
                (
                    o.value().attr("value").unwrap_or_default().to_string(),
                    o.text().collect::<String>(),
                )
            })
            .collect()
    }

    pub fn selected_option(&self, id: &str) -> Option<String> {
        self.one(&format!("#{id} option[selected]"))
            .and_then(|o| o.value().attr("value").map(str::to_string))
    }
}
