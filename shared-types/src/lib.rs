//! Shared types between frontend and backend
//!
//! These types are used by both:
//! - the lookup endpoints (company codes, assembly codes)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Lookup Types
// ============================================================================

/// A selectable `(code, name)` pair returned by a lookup endpoint.
///
/// `code` is the value submitted by a selector; `name` is only displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../folder-ui/src/types/generated.ts")]
pub struct OptionEntry {
    pub code: String,
    pub name: String,
}

impl OptionEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Selector label, e.g. `"C1 - Acme Corp"`
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

/// Body of `GET /api/admin/company-codes` and `GET /api/admin/assembly-codes`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, TS)]
#[ts(export, export_to = "../../folder-ui/src/types/generated.ts")]
pub struct CodesResponse {
    /// Missing or `null` means the endpoint has no codes
    #[serde(default)]
    pub codes: Option<Vec<OptionEntry>>,
}

impl CodesResponse {
    pub fn into_codes(self) -> Vec<OptionEntry> {
        self.codes.unwrap_or_default()
    }
}

// ============================================================================
// Endpoint Paths
// ============================================================================

pub const COMPANY_CODES_PATH: &str = "/api/admin/company-codes";
pub const ASSEMBLY_CODES_PATH: &str = "/api/admin/assembly-codes";
