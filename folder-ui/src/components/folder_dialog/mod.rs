//! Folder Creation Dialog
//!
//! Composes `[CustomName-]Year-CompanyCode-AssemblyCode` from one free-text
//! input and three selectors. Company and assembly codes come from the admin
//! lookup endpoints, loaded once per mount.

pub mod effects;
pub mod logic;
pub mod state;
pub mod styles;
pub mod types;
pub mod view;

pub use effects::LookupScope;
pub use state::FolderDialogState;
pub use types::{DialogAction, DialogEffect, ErrorMap, FormField, FormFields, SubmitOutcome};
pub use view::FolderCreationDialog;

#[cfg(test)]
mod tests {
    use super::effects::{deliver_lookup, LookupScope};
    use super::logic::{
        compose_folder_name, current_year, validate, year_options, UNTITLED_FOLDER,
    };
    use super::state::FolderDialogState;
    use super::types::{DialogAction, DialogEffect, FormField, FormFields, SubmitOutcome};
    use crate::api::{codes_from_response, LookupError, LookupKind};
    use chrono::{Datelike, Local};
    use shared_types::OptionEntry;

    fn fields(custom_name: &str, year: &str, company_code: &str, assembly_code: &str) -> FormFields {
        FormFields {
            custom_name: custom_name.to_string(),
            year: year.to_string(),
            company_code: company_code.to_string(),
            assembly_code: assembly_code.to_string(),
        }
    }

    fn filled_state(custom_name: &str) -> FolderDialogState {
        let mut state = FolderDialogState::new();
        state.set_field(FormField::CustomName, custom_name.to_string());
        state.set_field(FormField::Year, "2024".to_string());
        state.set_field(FormField::CompanyCode, "C1".to_string());
        state.set_field(FormField::AssemblyCode, "A1".to_string());
        state
    }

    #[test]
    fn compose_includes_custom_name_first() {
        assert_eq!(
            compose_folder_name(&fields("Proj", "2024", "C1", "A1")),
            "Proj-2024-C1-A1"
        );
    }

    #[test]
    fn compose_skips_empty_custom_name() {
        assert_eq!(
            compose_folder_name(&fields("", "2024", "C1", "A1")),
            "2024-C1-A1"
        );
    }

    #[test]
    fn compose_falls_back_to_untitled() {
        assert_eq!(compose_folder_name(&FormFields::default()), UNTITLED_FOLDER);
        assert_eq!(UNTITLED_FOLDER, "Untitled-Folder");
    }

    #[test]
    fn compose_keeps_separator_inside_custom_name() {
        assert_eq!(
            compose_folder_name(&fields("my-proj", "2023", "C9", "A7")),
            "my-proj-2023-C9-A7"
        );
    }

    #[test]
    fn validate_reports_every_missing_required_field() {
        let errors = validate(&fields("Proj", "", "", ""));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(FormField::Year), Some("Year is required"));
        assert_eq!(
            errors.get(FormField::CompanyCode),
            Some("Company Code is required")
        );
        assert_eq!(
            errors.get(FormField::AssemblyCode),
            Some("Assembly Code is required")
        );
        assert!(!errors.contains(FormField::CustomName));
    }

    #[test]
    fn validate_ignores_custom_name() {
        assert!(validate(&fields("", "2024", "C1", "A1")).is_empty());
    }

    #[test]
    fn validate_reports_only_the_missing_field() {
        let errors = validate(&fields("", "2024", "", "A1"));
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(FormField::CompanyCode));
    }

    #[test]
    fn year_options_are_ten_descending_years() {
        let years = year_options(2026);
        assert_eq!(years.len(), 10);
        assert_eq!(years.first().map(String::as_str), Some("2026"));
        assert_eq!(years.last().map(String::as_str), Some("2017"));
        assert!(years
            .windows(2)
            .all(|pair| pair[0].parse::<i32>().unwrap() == pair[1].parse::<i32>().unwrap() + 1));
    }

    #[test]
    fn year_options_start_at_current_year() {
        let this_year = Local::now().year();
        assert_eq!(current_year(), this_year);

        let years = year_options(current_year());
        assert_eq!(years.len(), 10);
        assert_eq!(years[0], this_year.to_string());
        assert_eq!(years[9], (this_year - 9).to_string());
    }

    #[test]
    fn submit_with_required_fields_creates_and_resets() {
        let mut state = filled_state("Proj");

        let effects = state.handle(DialogAction::Submit);

        assert_eq!(
            effects,
            vec![
                DialogEffect::Create("Proj-2024-C1-A1".to_string()),
                DialogEffect::Close
            ]
        );
        assert!(state.fields.is_empty());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn submit_creates_exactly_once_per_valid_form() {
        let mut state = filled_state("");
        let effects = state.handle(DialogAction::Submit);
        let created: Vec<_> = effects
            .iter()
            .filter(|effect| matches!(effect, DialogEffect::Create(_)))
            .collect();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0], &DialogEffect::Create("2024-C1-A1".to_string()));
    }

    #[test]
    fn submit_with_missing_fields_is_blocked() {
        let mut state = FolderDialogState::new();
        state.set_field(FormField::CustomName, "Proj".to_string());
        state.set_field(FormField::Year, "2024".to_string());

        let effects = state.handle(DialogAction::Submit);

        assert!(effects.is_empty());
        assert_eq!(state.errors.len(), 2);
        assert!(state.errors.contains(FormField::CompanyCode));
        assert!(state.errors.contains(FormField::AssemblyCode));
        assert_eq!(state.fields.custom_name, "Proj");
        assert_eq!(state.fields.year, "2024");
    }

    #[test]
    fn changing_field_clears_only_its_error() {
        let mut state = FolderDialogState::new();
        assert_eq!(state.submit(), SubmitOutcome::Invalid);
        assert_eq!(state.errors.len(), 3);

        state.handle(DialogAction::SetField(FormField::Year, "2025".to_string()));

        assert!(!state.errors.contains(FormField::Year));
        assert!(state.errors.contains(FormField::CompanyCode));
        assert!(state.errors.contains(FormField::AssemblyCode));
    }

    #[test]
    fn changing_field_clears_error_without_revalidating() {
        let mut state = FolderDialogState::new();
        state.submit();

        state.set_field(FormField::CompanyCode, String::new());

        assert!(!state.errors.contains(FormField::CompanyCode));
        assert_eq!(state.submit(), SubmitOutcome::Invalid);
        assert!(state.errors.contains(FormField::CompanyCode));
    }

    #[test]
    fn custom_name_change_leaves_errors() {
        let mut state = FolderDialogState::new();
        state.submit();

        state.set_field(FormField::CustomName, "Proj".to_string());

        assert_eq!(state.errors.len(), 3);
    }

    #[test]
    fn cancel_closes_but_keeps_fields_and_errors() {
        let mut state = FolderDialogState::new();
        state.set_field(FormField::CustomName, "Draft".to_string());
        state.submit();

        let effects = state.handle(DialogAction::Cancel);

        assert_eq!(effects, vec![DialogEffect::Close]);
        assert_eq!(state.fields.custom_name, "Draft");
        assert_eq!(state.errors.len(), 3);
    }

    #[test]
    fn reset_keeps_lookup_lists() {
        let mut state = filled_state("Proj");
        state.apply_lookup(
            LookupKind::Companies,
            Ok(vec![OptionEntry::new("C1", "Acme")]),
        );

        state.reset();

        assert!(state.fields.is_empty());
        assert_eq!(state.companies.len(), 1);
    }

    #[test]
    fn lookup_success_replaces_list() {
        let mut state = FolderDialogState::new();

        state.apply_lookup(
            LookupKind::AssemblyCodes,
            Ok(vec![
                OptionEntry::new("A1", "Frame"),
                OptionEntry::new("A2", "Hull"),
            ]),
        );

        assert_eq!(state.options(LookupKind::AssemblyCodes).len(), 2);
        assert!(state.options(LookupKind::Companies).is_empty());
    }

    #[test]
    fn lookup_failure_leaves_list_and_form_usable() {
        let mut state = FolderDialogState::new();

        state.apply_lookup(
            LookupKind::Companies,
            Err(LookupError::Request("connection refused".to_string())),
        );
        assert!(state.companies.is_empty());

        state.set_field(FormField::Year, "2024".to_string());
        state.set_field(FormField::CompanyCode, "C1".to_string());
        state.set_field(FormField::AssemblyCode, "A1".to_string());
        assert_eq!(
            state.submit(),
            SubmitOutcome::Created("2024-C1-A1".to_string())
        );
    }

    #[test]
    fn lookup_failure_keeps_previous_list() {
        let mut state = FolderDialogState::new();
        state.apply_lookup(
            LookupKind::Companies,
            Ok(vec![OptionEntry::new("C1", "Acme")]),
        );

        state.apply_lookup(
            LookupKind::Companies,
            Err(LookupError::Decode("expected value".to_string())),
        );

        assert_eq!(state.companies, vec![OptionEntry::new("C1", "Acme")]);
    }

    #[test]
    fn server_error_status_keeps_previous_list() {
        let mut state = FolderDialogState::new();
        state.apply_lookup(
            LookupKind::AssemblyCodes,
            Ok(vec![OptionEntry::new("A1", "Frame")]),
        );

        let result = codes_from_response(500, false, r#"{"codes":[]}"#);
        assert!(matches!(result, Err(LookupError::Status { status: 500, .. })));
        state.apply_lookup(LookupKind::AssemblyCodes, result);

        assert_eq!(state.assembly_codes, vec![OptionEntry::new("A1", "Frame")]);
    }

    #[test]
    fn live_scope_delivers_lookup() {
        let scope = LookupScope::new();
        let mut state = FolderDialogState::new();

        let delivered = deliver_lookup(
            &scope,
            &mut state,
            LookupKind::Companies,
            Ok(vec![OptionEntry::new("C1", "Acme")]),
        );

        assert!(delivered);
        assert_eq!(state.companies.len(), 1);
    }

    #[test]
    fn closed_scope_discards_late_response() {
        let scope = LookupScope::new();
        let in_flight = scope.clone();
        let mut state = FolderDialogState::new();

        // Unmount closes the scope while the request is still pending.
        scope.close();

        let delivered = deliver_lookup(
            &in_flight,
            &mut state,
            LookupKind::Companies,
            Ok(vec![OptionEntry::new("C1", "Acme")]),
        );

        assert!(!delivered);
        assert!(!in_flight.is_alive());
        assert!(state.companies.is_empty());
    }

    #[test]
    fn remount_gets_a_fresh_scope() {
        let first = LookupScope::new();
        first.close();

        let second = LookupScope::new();

        assert!(!first.is_alive());
        assert!(second.is_alive());
    }

    #[test]
    fn reopen_after_create_starts_empty() {
        let mut state = filled_state("Proj");
        state.handle(DialogAction::Submit);

        // Same mount: the host flips is_open back to true, state is reused.
        assert_eq!(state.fields, FormFields::default());
        assert!(state.errors.is_empty());
    }
}
