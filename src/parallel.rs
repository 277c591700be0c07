//! Parallel notice assembly using Rayon.
//!
//! Assembly is pure and shares no state between records, so a batch of
//! `(catalog_id, document)` pairs is split into one task per record on
//! Rayon's work-stealing pool. Results come back in input order, one per
//! record: a malformed document fails only its own entry.
//!
//! # Examples
//!
//! ```
//! use sudoc_notice::{parallel::parse_batch_parallel, NoticeConfig};
//!
//! let batch = vec![
//!     ("1".to_string(), "<record/>".to_string()),
//!     ("2".to_string(), "<record><leader></record>".to_string()),
//! ];
//! let results = parse_batch_parallel(&batch, &NoticeConfig::default());
//! assert!(results[0].is_ok());
//! assert!(results[1].is_err());
//! ```

use crate::assembler::{assemble, parse_notice};
use crate::config::NoticeConfig;
use crate::error::Result;
use crate::filter::{should_exclude, FilterDecision};
use crate::notice::Notice;
use crate::record::RawRecord;
use rayon::prelude::*;

/// Assemble a batch of documents in parallel.
///
/// Uses the global Rayon pool, which respects `RAYON_NUM_THREADS`.
#[must_use]
pub fn parse_batch_parallel(
    documents: &[(String, String)],
    config: &NoticeConfig,
) -> Vec<Result<Notice>> {
    documents
        .par_iter()
        .map(|(catalog_id, xml)| parse_notice(catalog_id, xml, config))
        .collect()
}

/// Assemble and filter a batch of documents in parallel.
#[must_use]
pub fn parse_and_filter_batch_parallel(
    documents: &[(String, String)],
    config: &NoticeConfig,
) -> Vec<Result<(Notice, FilterDecision)>> {
    documents
        .par_iter()
        .map(|(catalog_id, xml)| {
            let record = RawRecord::from_xml(xml)?;
            let decision = should_exclude(&record, config);
            Ok((assemble(catalog_id, &record, config), decision))
        })
        .collect()
}
