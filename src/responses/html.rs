use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub const SESSION_COOKIE: &str = "form_session";

pub fn html_response(markup: Markup, new_session: Option<&str>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8");

    if let Some(token) = new_session {
        builder = builder.header(
            "Set-Cookie",
            format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax"),
        );
    }

    builder
        .body(Body::from(markup.into_string()))
        .map_err(|e| ServerError::Internal(format!("building html response: {e}")))
}
