use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};
use tracing::debug;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Error, message)
    }
}

/// Single-use messages carried across one redirect in a cookie.
///
/// Messages left by the previous response are read on extraction. Rendering
/// them through [`Flash::take`] clears the cookie, so they show exactly once.
pub struct Flash {
    cookies: Cookies,
    pending: Vec<FlashMessage>,
    present: bool,
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .cloned()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

        let received = cookies.get(FLASH_COOKIE);
        let present = received.is_some();
        let pending = received
            .map(|cookie| decode(cookie.value()))
            .unwrap_or_default();

        Ok(Flash { cookies, pending, present })
    }
}

impl Flash {
    /// Pending messages followed by `extra`, for rendering in this response.
    /// A received cookie is cleared even when it held nothing readable.
    pub fn take(self, extra: Vec<FlashMessage>) -> Vec<FlashMessage> {
        if self.present {
            self.cookies.remove(flash_cookie(String::new()));
        }
        let mut messages = self.pending;
        messages.extend(extra);
        messages
    }

    /// Stores `messages`, after any still pending, for the page the client is
    /// redirected to.
    pub fn redirect_with(self, messages: Vec<FlashMessage>) {
        let mut all = self.pending;
        all.extend(messages);
        match encode(&all) {
            Some(value) => self.cookies.add(flash_cookie(value)),
            None => debug!("Dropping flash messages that failed to encode"),
        }
    }
}

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .build()
}

fn encode(messages: &[FlashMessage]) -> Option<String> {
    serde_json::to_vec(messages)
        .ok()
        .map(|json| URL_SAFE_NO_PAD.encode(json))
}

fn decode(value: &str) -> Vec<FlashMessage> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_else(|| {
            debug!("Ignoring malformed flash cookie");
            Vec::new()
        })
}
