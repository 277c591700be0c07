//! Collaborator contracts around the extraction core.
//!
//! Retrieval of raw records and persistence of notices live outside this
//! crate. They are expressed as traits so that a harvester can plug its own
//! HTTP client and storage in; [`process_one`] composes fetch, parse, filter
//! and store for a single catalog id. There is no retry here: a failing
//! collaborator surfaces as [`NoticeError::Source`].

use crate::assembler::assemble;
use crate::config::NoticeConfig;
use crate::error::{NoticeError, Result};
use crate::filter::{should_exclude, FilterDecision};
use crate::notice::Notice;
use crate::record::RawRecord;
use tracing::debug;

/// Retrieves the raw Sudoc XML of a catalog record.
pub trait RecordSource {
    /// Fetch the document of `catalog_id`.
    ///
    /// # Errors
    ///
    /// Any retrieval failure (network, missing record, ...).
    fn fetch(&self, catalog_id: &str) -> anyhow::Result<String>;
}

/// Persists an accepted notice alongside its raw document.
pub trait NoticeSink {
    /// Store one notice.
    ///
    /// # Errors
    ///
    /// Any storage failure.
    fn store(&mut self, notice: &Notice, raw_document: &str) -> anyhow::Result<()>;
}

/// Result of processing one catalog id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// The assembled notice, whether or not it was stored
    pub notice: Notice,
    /// Filter outcome; the notice was stored iff `!decision.excluded`
    pub decision: FilterDecision,
}

/// Fetch, parse, filter and (when accepted) store one record.
///
/// # Errors
///
/// Returns [`NoticeError::Source`] when fetching or storing fails and
/// [`NoticeError::MalformedDocument`] when the fetched document is not XML.
pub fn process_one<S, K>(
    catalog_id: &str,
    source: &S,
    sink: &mut K,
    config: &NoticeConfig,
) -> Result<Processed>
where
    S: RecordSource + ?Sized,
    K: NoticeSink + ?Sized,
{
    let raw = source.fetch(catalog_id).map_err(NoticeError::from)?;
    let record = RawRecord::from_xml(&raw)?;
    let decision = should_exclude(&record, config);
    let notice = assemble(catalog_id, &record, config);

    if decision.excluded {
        debug!(catalog_id, reason = ?decision.reason, "notice excluded");
    } else {
        sink.store(&notice, &raw).map_err(NoticeError::from)?;
    }

    Ok(Processed { notice, decision })
}
