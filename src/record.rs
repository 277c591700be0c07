//! UNIMARC exchange record structures and lookups.
//!
//! This module provides the read-side model of a Sudoc exchange record:
//! - [`RawRecord`]: leader, control fields and data fields in document order
//! - [`Field`]: a tagged data field with indicators and subfields
//! - [`Subfield`]: a coded data element within a field
//! - [`TagGroup`]: closed sets of tags looked up together
//!
//! Tags are not unique within a record and subfield codes are not unique within
//! a field. Every lookup returns an `Option` or an iterator; an absent tag or
//! code is a normal state, never an error.
//!
//! # Examples
//!
//! ```
//! use sudoc_notice::{Field, RawRecord};
//!
//! let record = RawRecord::builder()
//!     .control_field_str("008", "Aa")
//!     .field(
//!         Field::builder("200", '1', ' ')
//!             .subfield_str('a', "Histoire")
//!             .subfield_str('e', "essai")
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(record.subfield("200", 'e'), Some("essai"));
//! assert_eq!(record.subfield("210", 'd'), None);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A parsed exchange-format record.
///
/// Fields are kept in document order in a single sequence so that lookups
/// spanning several tags (see [`TagGroup`]) preserve encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Record leader, when the document carries one
    pub leader: Option<String>,
    /// Control fields (positional content, no subfields)
    pub control_fields: Vec<ControlField>,
    /// Data fields in document order
    pub fields: Vec<Field>,
}

/// A control field: a tag with fixed-offset content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlField {
    /// Field tag (e.g. "001", "008")
    pub tag: String,
    /// Positional content
    pub value: String,
}

/// A data field in an exchange record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field tag (3 characters)
    pub tag: String,
    /// First indicator
    pub indicator1: char,
    /// Second indicator
    pub indicator2: char,
    /// Subfields (stored in `SmallVec` to avoid allocation for typical fields with 4 or fewer subfields)
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
}

/// Closed sets of tags that are looked up together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagGroup {
    /// Personal names with primary, alternative and secondary responsibility
    Responsibility,
    /// Coded data fields that only occur on non-textual material
    /// (maps, sound recordings, projected and visual material, ...)
    NonTextualMedium,
}

impl TagGroup {
    /// Tags belonging to this group.
    #[must_use]
    pub const fn tags(self) -> &'static [&'static str] {
        match self {
            Self::Responsibility => &["700", "701", "702"],
            Self::NonTextualMedium => &[
                "110", "115", "116", "117", "120", "121", "123", "124", "125", "126", "127",
                "128", "129",
            ],
        }
    }

    /// Whether `tag` is a member of this group.
    #[must_use]
    pub fn contains(self, tag: &str) -> bool {
        self.tags().contains(&tag)
    }
}

impl RawRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for fluently constructing records
    #[must_use]
    pub fn builder() -> RawRecordBuilder {
        RawRecordBuilder {
            record: RawRecord::new(),
        }
    }

    /// Whether the record has neither control nor data fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.control_fields.is_empty() && self.fields.is_empty()
    }

    /// Add a control field
    pub fn add_control_field(&mut self, tag: String, value: String) {
        self.control_fields.push(ControlField { tag, value });
    }

    /// Add a control field using string slices
    pub fn add_control_field_str(&mut self, tag: &str, value: &str) {
        self.add_control_field(tag.to_string(), value.to_string());
    }

    /// Get the content of the first control field with a given tag
    #[must_use]
    pub fn get_control_field(&self, tag: &str) -> Option<&str> {
        self.control_fields
            .iter()
            .find(|cf| cf.tag == tag)
            .map(|cf| cf.value.as_str())
    }

    /// Add a data field at the end of the record
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Get first field with a given tag
    #[must_use]
    pub fn get_field(&self, tag: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.tag == tag)
    }

    /// Whether at least one field carries the given tag
    #[must_use]
    pub fn has_field(&self, tag: &str) -> bool {
        self.get_field(tag).is_some()
    }

    /// Iterate over all data fields in document order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Iterate over fields matching a specific tag, in document order
    ///
    /// # Examples
    ///
    /// ```ignore
    /// for field in record.fields_by_tag("035") {
    ///     if let Some(id) = field.get_subfield('a') {
    ///         println!("System number: {}", id);
    ///     }
    /// }
    /// ```
    pub fn fields_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields.iter().filter(move |f| f.tag == tag)
    }

    /// Iterate over fields whose tag is any of `tags`, in document order.
    pub fn fields_matching_any<'a>(
        &'a self,
        tags: &'a [&'a str],
    ) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields
            .iter()
            .filter(move |f| tags.contains(&f.tag.as_str()))
    }

    /// Iterate over fields belonging to a [`TagGroup`], in document order.
    ///
    /// Encounter order is kept across tags: a 701 placed before a 700 in the
    /// document is yielded first.
    pub fn fields_in_group(&self, group: TagGroup) -> impl Iterator<Item = &Field> {
        self.fields_matching_any(group.tags())
    }

    /// First subfield `code` of the first field tagged `tag`.
    ///
    /// Only the first field with the tag is consulted, so a later field
    /// carrying the code does not count.
    #[must_use]
    pub fn subfield(&self, tag: &str, code: char) -> Option<&str> {
        self.get_field(tag).and_then(|f| f.get_subfield(code))
    }
}

/// Builder for [`RawRecord`], mostly used by tests and fixtures.
#[derive(Debug)]
pub struct RawRecordBuilder {
    record: RawRecord,
}

impl RawRecordBuilder {
    /// Set the leader
    #[must_use]
    pub fn leader(mut self, leader: &str) -> Self {
        self.record.leader = Some(leader.to_string());
        self
    }

    /// Add a control field
    #[must_use]
    pub fn control_field_str(mut self, tag: &str, value: &str) -> Self {
        self.record.add_control_field_str(tag, value);
        self
    }

    /// Add a data field
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> RawRecord {
        self.record
    }
}

impl Field {
    /// Create a new data field
    #[must_use]
    pub fn new(tag: impl Into<String>, indicator1: char, indicator2: char) -> Self {
        Field {
            tag: tag.into(),
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Create a builder for constructing fields fluently
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoc_notice::Field;
    ///
    /// let field = Field::builder("700", ' ', '1')
    ///     .subfield_str('a', "Febvre")
    ///     .subfield_str('b', "Lucien")
    ///     .build();
    /// assert_eq!(field.get_subfield('b'), Some("Lucien"));
    /// ```
    #[must_use]
    pub fn builder(tag: impl Into<String>, indicator1: char, indicator2: char) -> FieldBuilder {
        FieldBuilder {
            field: Field::new(tag, indicator1, indicator2),
        }
    }

    /// Add a subfield
    pub fn add_subfield(&mut self, code: char, value: String) {
        self.subfields.push(Subfield { code, value });
    }

    /// Add a subfield using a string slice
    pub fn add_subfield_str(&mut self, code: char, value: &str) {
        self.add_subfield(code, value.to_string());
    }

    /// Get first value for a subfield code
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Whether the field carries at least one subfield with `code`
    #[must_use]
    pub fn has_subfield(&self, code: char) -> bool {
        self.subfields.iter().any(|sf| sf.code == code)
    }

    /// Iterate over subfields with a specific code
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }
}

/// Builder for [`Field`]
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Add a subfield
    #[must_use]
    pub fn subfield(mut self, code: char, value: String) -> Self {
        self.field.add_subfield(code, value);
        self
    }

    /// Add a subfield using a string slice
    #[must_use]
    pub fn subfield_str(mut self, code: char, value: &str) -> Self {
        self.field.add_subfield_str(code, value);
        self
    }

    /// Build the field
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}
