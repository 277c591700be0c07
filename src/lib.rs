#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # sudoc-notice: UNIMARC record normalization
//!
//! Turns Sudoc UNIMARC XML records into canonical notices for indexing, and
//! decides which records are worth publishing.
//!
//! ## Quick Start
//!
//! ```
//! use sudoc_notice::{filter, parse_notice, NoticeConfig, RawRecord};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = r#"<record>
//!   <controlfield tag="008">Aax3</controlfield>
//!   <datafield tag="017" ind1="7" ind2="0"><subfield code="a">10.3917/DEC.BLOCH.2006.01</subfield></datafield>
//!   <datafield tag="200" ind1="1" ind2=" "><subfield code="a">Apologie pour l'histoire</subfield></datafield>
//!   <datafield tag="210" ind1=" " ind2=" "><subfield code="d">impr. 2006</subfield></datafield>
//! </record>"#;
//!
//! let config = NoticeConfig::default();
//! let record = RawRecord::from_xml(xml)?;
//! if !filter::should_exclude(&record, &config).excluded {
//!     let notice = parse_notice("123456789", xml, &config)?;
//!     assert_eq!(notice.id, "doi10.3917/dec.bloch.2006.01");
//!     println!("{}", notice.to_json_string()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`record`]: Exchange record structures (`RawRecord`, `Field`, `Subfield`, `TagGroup`)
//! - [`unimarc_xml`]: Sudoc XML parsing and writing
//! - [`identifiers`]: DOI, notice id and external identifiers
//! - [`dates`]: Publication date inference
//! - [`genre`]: Genre classification
//! - [`filter`]: Re-edition, non-text and thesis exclusion
//! - [`agents`]: Authors and contributors
//! - [`assembler`]: Notice assembly
//! - [`notice`]: Output notice types
//! - [`config`]: Context metadata and extraction policies
//! - [`parallel`]: Parallel batch assembly
//! - [`jsonl`]: JSON Lines export
//! - [`harvest`]: Record source / notice sink contracts
//! - [`error`]: Error types and result type

pub mod agents;
pub mod assembler;
pub mod config;
pub mod dates;
pub mod error;
pub mod filter;
pub mod genre;
pub mod harvest;
pub mod identifiers;
pub mod jsonl;
pub mod notice;
pub mod parallel;
pub mod record;
pub mod unimarc_xml;

pub use agents::{Agent, Role};
pub use assembler::{assemble, parse_notice, parse_notice_lenient};
pub use config::{DateSentinel, NoticeConfig, ThesisFilterPolicy, ThesisGenrePolicy};
pub use error::{NoticeError, Result};
pub use filter::{should_exclude, should_exclude_xml, ExclusionReason, FilterDecision};
pub use genre::Genre;
pub use harvest::{process_one, NoticeSink, RecordSource};
pub use identifiers::{ExternalId, IdType};
pub use notice::{Notice, Source, Thematic};
pub use record::{ControlField, Field, FieldBuilder, RawRecord, RawRecordBuilder, Subfield, TagGroup};
