//! Persisted fiscal year-end selection.

use p29_core::FiscalYearEnd;
use tracing::warn;

use crate::adapter::KeyValueStore;
use crate::error::StorageResult;

/// Key the selection is stored under.
pub const SELECTION_KEY: &str = "p29-fiscal-year-end";

/// Reads and writes the user's fiscal year-end.
///
/// The calculator never consults this; callers load the selection and pass
/// it in explicitly.
pub struct FiscalYearSelection;

impl FiscalYearSelection {
    /// Loads the stored selection.
    ///
    /// Returns [`FiscalYearEnd::December`] when nothing is stored or the
    /// stored value is not a known year-end.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> StorageResult<FiscalYearEnd> {
        let Some(raw) = store.get(SELECTION_KEY)? else {
            return Ok(FiscalYearEnd::default());
        };

        match raw.parse() {
            Ok(year_end) => Ok(year_end),
            Err(err) => {
                warn!(
                    backend = store.backend_name(),
                    value = %raw,
                    error = %err,
                    "ignoring stored fiscal year-end"
                );
                Ok(FiscalYearEnd::default())
            }
        }
    }

    /// Returns the stored selection only if one is present and valid.
    pub fn stored<S: KeyValueStore + ?Sized>(store: &S) -> StorageResult<Option<FiscalYearEnd>> {
        Ok(store
            .get(SELECTION_KEY)?
            .and_then(|raw| raw.parse::<FiscalYearEnd>().ok()))
    }

    /// Persists `year_end`.
    pub fn save<S: KeyValueStore + ?Sized>(store: &S, year_end: FiscalYearEnd) -> StorageResult<()> {
        store.set(SELECTION_KEY, year_end.as_str())
    }

    /// Removes the stored selection. Returns true if one was present.
    pub fn clear<S: KeyValueStore + ?Sized>(store: &S) -> StorageResult<bool> {
        store.remove(SELECTION_KEY)
    }
}
