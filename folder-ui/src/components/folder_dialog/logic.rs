//! Folder dialog pure logic functions — no RSX, no signals

use chrono::{Datelike, Local};

use super::types::{ErrorMap, FormField, FormFields};

pub const FOLDER_NAME_SEPARATOR: &str = "-";
pub const UNTITLED_FOLDER: &str = "Untitled-Folder";
pub const YEAR_OPTION_COUNT: i32 = 10;

pub fn required_message(field: FormField) -> String {
    format!("{} is required", field.label())
}

/// Check every required field in one pass; `custom_name` is never checked.
pub fn validate(fields: &FormFields) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in FormField::REQUIRED {
        if fields.get(field).is_empty() {
            errors.insert(field, required_message(field));
        }
    }
    errors
}

/// Join the non-empty fields as `[CustomName-]Year-CompanyCode-AssemblyCode`.
///
/// Values are not sanitized: a custom name that contains the separator merges
/// visually with it.
pub fn compose_folder_name(fields: &FormFields) -> String {
    let parts: Vec<&str> = [
        fields.custom_name.as_str(),
        fields.year.as_str(),
        fields.company_code.as_str(),
        fields.assembly_code.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();

    if parts.is_empty() {
        UNTITLED_FOLDER.to_string()
    } else {
        parts.join(FOLDER_NAME_SEPARATOR)
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// `current_year` and the nine years before it, newest first
pub fn year_options(current_year: i32) -> Vec<String> {
    (0..YEAR_OPTION_COUNT)
        .map(|offset| (current_year - offset).to_string())
        .collect()
}
