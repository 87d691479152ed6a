//! Folder dialog data types

use std::collections::BTreeMap;

/// One input of the folder form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    CustomName,
    Year,
    CompanyCode,
    AssemblyCode,
}

impl FormField {
    /// Fields that must be non-empty before a folder can be created
    pub const REQUIRED: [FormField; 3] = [
        FormField::Year,
        FormField::CompanyCode,
        FormField::AssemblyCode,
    ];

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::CustomName)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::CustomName => "Custom Folder Name",
            FormField::Year => "Year",
            FormField::CompanyCode => "Company Code",
            FormField::AssemblyCode => "Assembly Code",
        }
    }

    /// Placeholder shown as the empty choice of a selector, or as the hint of
    /// the free-text input
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::CustomName => "Custom Folder Name",
            FormField::Year => "Select Year",
            FormField::CompanyCode => "Select Company Code",
            FormField::AssemblyCode => "Select Assembly Code",
        }
    }

    /// Stable key used for element ids
    pub fn key(self) -> &'static str {
        match self {
            FormField::CustomName => "customName",
            FormField::Year => "year",
            FormField::CompanyCode => "companyCode",
            FormField::AssemblyCode => "assemblyCode",
        }
    }
}

/// Current values of the four form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub custom_name: String,
    pub year: String,
    pub company_code: String,
    pub assembly_code: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CustomName => &self.custom_name,
            FormField::Year => &self.year,
            FormField::CompanyCode => &self.company_code,
            FormField::AssemblyCode => &self.assembly_code,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::CustomName => &mut self.custom_name,
            FormField::Year => &mut self.year,
            FormField::CompanyCode => &mut self.company_code,
            FormField::AssemblyCode => &mut self.assembly_code,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        self.custom_name.is_empty()
            && self.year.is_empty()
            && self.company_code.is_empty()
            && self.assembly_code.is_empty()
    }
}

/// Validation messages keyed by field. An empty message counts as no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FormField, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.get(field).is_some()
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    pub fn len(&self) -> usize {
        self.0.values().filter(|message| !message.is_empty()).count()
    }
}

/// Messages emitted by the dialog's inputs and buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    SetField(FormField, String),
    Submit,
    Cancel,
}

/// Work the view performs on behalf of the state, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEffect {
    /// Hand the composed name to `on_create`
    Create(String),
    /// Ask the host to close the dialog via `on_close`
    Close,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(String),
    Invalid,
}
