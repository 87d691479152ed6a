use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use shared_types::OptionEntry;

use super::state::FolderDialogState;
use crate::api::{
    fetch_assembly_codes, fetch_company_codes, LookupEndpoints, LookupError, LookupKind,
};

/// Alive flag shared between a mounted dialog and its in-flight lookups.
///
/// Lives outside the state signal so it outlasts the component; cleared on
/// unmount.
#[derive(Debug, Clone)]
pub struct LookupScope {
    alive: Rc<Cell<bool>>,
}

impl Default for LookupScope {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupScope {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn close(&self) {
        self.alive.set(false);
    }
}

/// Hand a lookup result to the state unless its scope has closed.
/// Returns false when the result was discarded.
pub fn deliver_lookup(
    scope: &LookupScope,
    state: &mut FolderDialogState,
    kind: LookupKind,
    result: Result<Vec<OptionEntry>, LookupError>,
) -> bool {
    if !scope.is_alive() {
        debug!("Discarding late {} lookup response", kind);
        return false;
    }
    state.apply_lookup(kind, result);
    true
}

fn store_lookup(
    scope: &LookupScope,
    mut state: Signal<FolderDialogState>,
    kind: LookupKind,
    result: Result<Vec<OptionEntry>, LookupError>,
) {
    if !scope.is_alive() {
        debug!("Discarding late {} lookup response", kind);
        return;
    }
    // The signal is gone once the dialog has been dropped.
    if let Ok(mut state) = state.try_write() {
        deliver_lookup(scope, &mut state, kind, result);
    }
}

/// Start both lookups as independent tasks. Neither waits on the other.
pub fn spawn_lookups(
    endpoints: LookupEndpoints,
    scope: LookupScope,
    state: Signal<FolderDialogState>,
) {
    {
        let endpoints = endpoints.clone();
        let scope = scope.clone();
        spawn(async move {
            let result = fetch_company_codes(&endpoints).await;
            store_lookup(&scope, state, LookupKind::Companies, result);
        });
    }

    spawn(async move {
        let result = fetch_assembly_codes(&endpoints).await;
        store_lookup(&scope, state, LookupKind::AssemblyCodes, result);
    });
}
