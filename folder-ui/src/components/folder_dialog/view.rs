//! Folder creation dialog component

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use super::effects::{spawn_lookups, LookupScope};
use super::logic::{current_year, year_options};
use super::state::FolderDialogState;
use super::styles::FOLDER_DIALOG_STYLES;
use super::types::{DialogAction, DialogEffect, FormField};
use crate::api::{LookupEndpoints, LookupKind};

/// `(value, label)` pairs for a selector
type SelectOptions = Vec<(String, String)>;

/// Modal dialog that composes a folder name and passes it to `on_create`.
///
/// Visibility is owned by the host through `is_open`; the component stays
/// mounted while closed so its lookups and field values survive a reopen.
#[component]
pub fn FolderCreationDialog(
    is_open: bool,
    on_close: EventHandler<()>,
    on_create: EventHandler<String>,
    #[props(default)] endpoints: LookupEndpoints,
) -> Element {
    let mut state = use_signal(FolderDialogState::new);
    let mut lookups_started = use_signal(|| false);
    let lookup_scope = use_hook(LookupScope::new);

    {
        let lookup_scope = lookup_scope.clone();
        use_drop(move || {
            lookup_scope.close();
        });
    }

    // Load lookups once per mount
    use_effect(move || {
        if lookups_started() {
            return;
        }
        lookups_started.set(true);
        spawn_lookups(endpoints.clone(), lookup_scope.clone(), state);
    });

    let mut dispatch = move |action: DialogAction| {
        let effects = state.write().handle(action);
        for effect in effects {
            match effect {
                DialogEffect::Create(name) => {
                    info!("Creating folder {}", name);
                    on_create.call(name);
                }
                DialogEffect::Close => on_close.call(()),
            }
        }
    };

    if !is_open {
        return rsx! {};
    }

    let current = state.read().clone();
    let years: SelectOptions = year_options(current_year())
        .into_iter()
        .map(|year| (year.clone(), year))
        .collect();
    let companies: SelectOptions = current
        .options(LookupKind::Companies)
        .iter()
        .map(|entry| (entry.code.clone(), entry.label()))
        .collect();
    let assembly_codes: SelectOptions = current
        .options(LookupKind::AssemblyCodes)
        .iter()
        .map(|entry| (entry.code.clone(), entry.label()))
        .collect();

    rsx! {
        style { {FOLDER_DIALOG_STYLES} }
        div {
            class: "folder-dialog-backdrop",
            div {
                class: "folder-dialog",
                role: "dialog",
                h3 { class: "folder-dialog-title", "Create New Folder" }

                input {
                    id: FormField::CustomName.key(),
                    class: "folder-dialog-input",
                    r#type: "text",
                    placeholder: FormField::CustomName.placeholder(),
                    value: "{current.fields.custom_name}",
                    oninput: move |e: FormEvent| {
                        dispatch(DialogAction::SetField(FormField::CustomName, e.value()));
                    }
                }

                RequiredSelect {
                    field: FormField::Year,
                    value: current.fields.year.clone(),
                    error: current.errors.get(FormField::Year).map(str::to_string),
                    options: years,
                    on_change: move |value: String| {
                        dispatch(DialogAction::SetField(FormField::Year, value));
                    },
                }

                RequiredSelect {
                    field: FormField::CompanyCode,
                    value: current.fields.company_code.clone(),
                    error: current.errors.get(FormField::CompanyCode).map(str::to_string),
                    options: companies,
                    on_change: move |value: String| {
                        dispatch(DialogAction::SetField(FormField::CompanyCode, value));
                    },
                }

                RequiredSelect {
                    field: FormField::AssemblyCode,
                    value: current.fields.assembly_code.clone(),
                    error: current.errors.get(FormField::AssemblyCode).map(str::to_string),
                    options: assembly_codes,
                    on_change: move |value: String| {
                        dispatch(DialogAction::SetField(FormField::AssemblyCode, value));
                    },
                }

                div {
                    class: "folder-dialog-actions",
                    button {
                        class: "folder-dialog-button cancel",
                        onclick: move |_| dispatch(DialogAction::Cancel),
                        "Cancel"
                    }
                    button {
                        class: "folder-dialog-button create",
                        onclick: move |_| dispatch(DialogAction::Submit),
                        "Create"
                    }
                }
            }
        }
    }
}

/// Selector with an empty placeholder choice and an inline error line
#[component]
fn RequiredSelect(
    field: FormField,
    value: String,
    #[props(!optional)] error: Option<String>,
    options: SelectOptions,
    on_change: EventHandler<String>,
) -> Element {
    let class = if error.is_some() {
        "folder-dialog-input has-error"
    } else {
        "folder-dialog-input"
    };

    rsx! {
        select {
            id: field.key(),
            class,
            value: "{value}",
            onchange: move |e: FormEvent| on_change.call(e.value()),
            option { value: "", "{field.placeholder()}" }
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    value: "{option_value}",
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
        if let Some(message) = error {
            p { class: "folder-dialog-error", "{message}" }
        }
    }
}
