pub mod folder_dialog;
pub mod folder_list;

pub use folder_dialog::{
    FolderCreationDialog, FolderDialogState, FormField, FormFields, LookupScope,
};
pub use folder_list::FolderList;
