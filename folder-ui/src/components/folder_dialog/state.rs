use dioxus_logger::tracing::error;
use shared_types::OptionEntry;

use super::logic::{compose_folder_name, validate};
use super::types::{DialogAction, DialogEffect, ErrorMap, FormField, FormFields, SubmitOutcome};
use crate::api::{LookupError, LookupKind};

/// Local state of one mounted folder dialog
#[derive(Debug, Clone, PartialEq)]
pub struct FolderDialogState {
    pub fields: FormFields,
    pub errors: ErrorMap,
    pub companies: Vec<OptionEntry>,
    pub assembly_codes: Vec<OptionEntry>,
}

impl Default for FolderDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderDialogState {
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            errors: ErrorMap::new(),
            companies: Vec::new(),
            assembly_codes: Vec::new(),
        }
    }

    pub fn options(&self, kind: LookupKind) -> &[OptionEntry] {
        match kind {
            LookupKind::Companies => &self.companies,
            LookupKind::AssemblyCodes => &self.assembly_codes,
        }
    }

    /// Store a lookup result. Failures are logged and leave the list as it
    /// was.
    pub fn apply_lookup(
        &mut self,
        kind: LookupKind,
        result: Result<Vec<OptionEntry>, LookupError>,
    ) {
        match result {
            Ok(codes) => match kind {
                LookupKind::Companies => self.companies = codes,
                LookupKind::AssemblyCodes => self.assembly_codes = codes,
            },
            Err(e) => {
                error!("Error fetching {}: {}", kind, e);
            }
        }
    }

    /// Update a field. A required field's error is cleared without
    /// re-validating the new value.
    pub fn set_field(&mut self, field: FormField, value: String) {
        self.fields.set(field, value);
        if field.is_required() {
            self.errors.clear(field);
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate(&self.fields);
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        let name = compose_folder_name(&self.fields);
        self.reset();
        SubmitOutcome::Created(name)
    }

    /// Back to empty fields and no errors. Lookup lists are kept.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.errors = ErrorMap::new();
    }

    pub fn handle(&mut self, action: DialogAction) -> Vec<DialogEffect> {
        match action {
            DialogAction::SetField(field, value) => {
                self.set_field(field, value);
                Vec::new()
            }
            DialogAction::Submit => match self.submit() {
                SubmitOutcome::Created(name) => {
                    vec![DialogEffect::Create(name), DialogEffect::Close]
                }
                SubmitOutcome::Invalid => Vec::new(),
            },
            // Fields and errors stay as they are until the next create.
            DialogAction::Cancel => vec![DialogEffect::Close],
        }
    }
}
