//! Author and contributor extraction from the 700/701/702 personal name fields.

use crate::record::{Field, RawRecord, TagGroup};
use serde::{Deserialize, Serialize};

/// Prefix of person identifiers taken from the authority link (`$3`).
const IDREF_PREFIX: &str = "idref";

/// Role of an agent. Only authors are extracted today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Author or contributor
    #[default]
    Author,
}

/// A person associated with a notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Role of the person
    pub role: Role,
    /// Authority identifier (`idref<ppn>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// `"<first> <last>"`, trimmed. Empty when the agent only has an id.
    pub full_name: String,
}

impl Agent {
    /// Build an agent from one personal name field.
    ///
    /// Returns `None` when the field has neither an authority link nor a
    /// family name: a lone given name does not identify anybody.
    #[must_use]
    pub fn from_field(field: &Field) -> Option<Self> {
        let id = field.get_subfield('3').map(|ppn| format!("{IDREF_PREFIX}{ppn}"));
        let last_name = field.get_subfield('a').map(str::to_string);
        let first_name = field.get_subfield('b').map(str::to_string);

        if id.is_none() && last_name.is_none() {
            return None;
        }

        let full_name = format!(
            "{} {}",
            first_name.as_deref().unwrap_or_default(),
            last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string();

        Some(Agent {
            role: Role::Author,
            id,
            last_name,
            first_name,
            full_name,
        })
    }

    /// Whether the agent is linked to an authority record.
    #[must_use]
    pub fn is_identified(&self) -> bool {
        self.id.is_some()
    }
}

/// Agents of a record together with the notice-level identification flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agents {
    /// Agents in field encounter order
    pub agents: Vec<Agent>,
    /// Whether any agent carries an authority identifier
    pub persons_identified: bool,
}

/// Extract agents from every [`TagGroup::Responsibility`] field.
#[must_use]
pub fn extract_agents(record: &RawRecord) -> Agents {
    let agents: Vec<Agent> = record
        .fields_in_group(TagGroup::Responsibility)
        .filter_map(Agent::from_field)
        .collect();
    let persons_identified = agents.iter().any(Agent::is_identified);

    Agents {
        agents,
        persons_identified,
    }
}
