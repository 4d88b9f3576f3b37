use std::{
    cell::Cell,
    panic::{self, AssertUnwindSafe},
    sync::Once,
};

use serde::{Deserialize, Serialize};

use super::{ResourceCollection, ResourceTable};

pub const NOT_FOUND_MESSAGE: &str = "Translation not found for the entered sentence.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An error occurred while processing the input.";

/// Outcome of a lookup. Failures are reported here, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// The translation, or a message explaining why there is none.
    pub message: String,
    /// True when `message` is not a translation.
    pub error: bool,
}

impl LookupResult {
    pub fn found(value: impl Into<String>) -> Self {
        Self {
            message: value.into(),
            error: false,
        }
    }

    pub fn not_found() -> Self {
        Self {
            message: NOT_FOUND_MESSAGE.to_string(),
            error: true,
        }
    }

    pub fn failed() -> Self {
        Self {
            message: UNEXPECTED_ERROR_MESSAGE.to_string(),
            error: true,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.error
    }
}

/// A key match together with the table that provided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupMatch<'a> {
    pub table: &'a ResourceTable,
    pub value: &'a str,
}

/// Read-only search over a loaded [`ResourceCollection`].
#[derive(Debug, Clone, Default)]
pub struct TranslationLookup {
    collection: ResourceCollection,
}

impl TranslationLookup {
    pub fn new(collection: ResourceCollection) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &ResourceCollection {
        &self.collection
    }

    /// Find the first table, in load order, that contains `key`.
    ///
    /// Keys are matched exactly and case-sensitively. Later tables holding
    /// the same key are never consulted.
    pub fn find(&self, key: &str) -> Option<LookupMatch<'_>> {
        self.collection.iter().find_map(|table| {
            table.get(key).map(|value| LookupMatch { table, value })
        })
    }

    /// Search all tables for `key`, first match wins.
    ///
    /// Never fails: a miss yields the not-found result, and any unexpected
    /// failure during the scan yields the generic error result.
    pub fn search(&self, key: &str) -> LookupResult {
        guarded(|| self.find(key).map(|m| m.value.to_string()))
    }
}

thread_local! {
    static IN_SCAN: Cell<bool> = const { Cell::new(false) };
}

static QUIET_PANIC_HOOK: Once = Once::new();

/// Chain a panic hook that stays silent for panics raised inside [`guarded`].
///
/// Panics anywhere else still reach the previously installed hook.
fn install_quiet_panic_hook() {
    QUIET_PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !IN_SCAN.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Run a scan, turning a panic into the generic error result.
fn guarded(scan: impl FnOnce() -> Option<String>) -> LookupResult {
    install_quiet_panic_hook();

    let was_scanning = IN_SCAN.with(|flag| flag.replace(true));
    let outcome = panic::catch_unwind(AssertUnwindSafe(scan));
    IN_SCAN.with(|flag| flag.set(was_scanning));

    match outcome {
        Ok(Some(value)) => LookupResult::found(value),
        Ok(None) => LookupResult::not_found(),
        Err(_) => LookupResult::failed(),
    }
}
