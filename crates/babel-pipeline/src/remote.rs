//! The external page source collaborator.
//!
//! Remote page retrieval is deliberately out of scope here: only the
//! contract is defined. A real deployment supplies its own
//! [`RemotePageSource`] implementation; this crate ships only the trait
//! and a null implementation used when none is configured.

use crate::error::PipelineError;

/// Fetches a page for `address` from some external source.
///
/// `remote` mode calls this for every candidate and skips (logging) any
/// candidate whose fetch fails. `hybrid` mode falls back to the local
/// generator on failure instead of skipping.
pub trait RemotePageSource: Send + Sync {
    fn fetch_page(&self, address: &str) -> Result<String, PipelineError>;
}

/// A source that always fails. The default when no external collaborator
/// is wired in; `remote` mode degrades to empty results, `hybrid` mode
/// degrades to pure local generation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRemoteSource;

impl RemotePageSource for NullRemoteSource {
    fn fetch_page(&self, address: &str) -> Result<String, PipelineError> {
        Err(PipelineError::RemoteUnavailable(format!(
            "no remote page source configured for address {address}"
        )))
    }
}
