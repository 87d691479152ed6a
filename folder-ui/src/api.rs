use gloo_net::http::Request;
use shared_types::{CodesResponse, OptionEntry, ASSEMBLY_CODES_PATH, COMPANY_CODES_PATH};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Port the admin lookup service listens on during local development
const DEV_API_BASE: &str = "http://localhost:5000";

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:5000
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    api_base_for_host(&hostname).to_string()
}

pub fn api_base_for_host(hostname: &str) -> &'static str {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        DEV_API_BASE
    } else {
        ""
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

// ============================================================================
// Lookup Configuration
// ============================================================================

/// Which option set a lookup populates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Companies,
    AssemblyCodes,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Companies => write!(f, "companies"),
            LookupKind::AssemblyCodes => write!(f, "assembly codes"),
        }
    }
}

/// Absolute URLs of the two lookup endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEndpoints {
    pub company_codes: String,
    pub assembly_codes: String,
}

impl LookupEndpoints {
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            company_codes: format!("{base}{COMPANY_CODES_PATH}"),
            assembly_codes: format!("{base}{ASSEMBLY_CODES_PATH}"),
        }
    }

    pub fn url_for(&self, kind: LookupKind) -> &str {
        match kind {
            LookupKind::Companies => &self.company_codes,
            LookupKind::AssemblyCodes => &self.assembly_codes,
        }
    }
}

impl Default for LookupEndpoints {
    fn default() -> Self {
        Self::with_base(api_base())
    }
}

// ============================================================================
// Lookup API Functions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Request failed: {0}")]
    Request(String),

    /// Non-2xx response; `message` already carries the status
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse JSON: {0}")]
    Decode(String),
}

/// Build the error text for a non-2xx response, preferring the `error` or
/// `message` field of a JSON body.
pub fn describe_http_error(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({error})");
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({message})");
        }
    }

    format!("HTTP error: {status} ({body})")
}

pub fn decode_codes(body: &str) -> Result<Vec<OptionEntry>, LookupError> {
    let data: CodesResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;
    Ok(data.into_codes())
}

/// Turn a lookup response into codes. A non-2xx status is a failure even
/// when the body would decode.
pub fn codes_from_response(
    status: u16,
    ok: bool,
    body: &str,
) -> Result<Vec<OptionEntry>, LookupError> {
    if !ok {
        return Err(LookupError::Status {
            status,
            message: describe_http_error(status, body),
        });
    }

    decode_codes(body)
}

pub async fn fetch_codes(url: &str) -> Result<Vec<OptionEntry>, LookupError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LookupError::Request(e.to_string()))?;

    let ok = response.ok();
    let body = if ok {
        response
            .text()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?
    } else {
        response.text().await.unwrap_or_default()
    };

    codes_from_response(response.status(), ok, &body)
}

pub async fn fetch_lookup(
    endpoints: &LookupEndpoints,
    kind: LookupKind,
) -> Result<Vec<OptionEntry>, LookupError> {
    fetch_codes(endpoints.url_for(kind)).await
}

pub async fn fetch_company_codes(
    endpoints: &LookupEndpoints,
) -> Result<Vec<OptionEntry>, LookupError> {
    fetch_lookup(endpoints, LookupKind::Companies).await
}

pub async fn fetch_assembly_codes(
    endpoints: &LookupEndpoints,
) -> Result<Vec<OptionEntry>, LookupError> {
    fetch_lookup(endpoints, LookupKind::AssemblyCodes).await
}
