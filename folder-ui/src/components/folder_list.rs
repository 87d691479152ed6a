use dioxus::prelude::*;

use super::folder_dialog::FolderCreationDialog;
use crate::api::LookupEndpoints;

/// Host view: a "New Folder" button, the dialog, and the folders created so far.
#[component]
pub fn FolderList(#[props(default)] endpoints: LookupEndpoints) -> Element {
    let mut is_open = use_signal(|| false);
    let mut folders = use_signal(Vec::<String>::new);
    let names = folders.read().clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.75rem; max-width: 32rem;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                h2 { style: "margin: 0; font-size: 1.25rem;", "Folders" }
                button {
                    style: "background: #2563eb; border: none; color: white; cursor: pointer; padding: 0.5rem 1rem; border-radius: 0.5rem;",
                    onclick: move |_| is_open.set(true),
                    "New Folder"
                }
            }
            if names.is_empty() {
                p { style: "color: #9ca3af; font-size: 0.875rem;", "No folders yet" }
            } else {
                ul {
                    style: "margin: 0; padding-left: 1.25rem;",
                    for (index, name) in names.into_iter().enumerate() {
                        li { key: "{index}", "📁 {name}" }
                    }
                }
            }
            FolderCreationDialog {
                is_open: is_open(),
                on_close: move |_| is_open.set(false),
                on_create: move |name: String| folders.write().push(name),
                endpoints: endpoints.clone(),
            }
        }
    }
}
