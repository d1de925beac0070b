// 🏛️ Member Normalizer
// Raw congress.gov member records → one stable internal record
//
// The API has renamed and reshaped the same concepts across versions
// (party vs partyName vs parties[0], leadership as string / list / objects).
// Every drifting field is decoded leniently so a single odd record never
// fails the batch.

use crate::chamber::Chamber;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const AT_LARGE: &str = "At-Large";

const SPEAKER_KEYWORD: &str = "speaker";
const FLOOR_LEADER_KEYWORDS: [&str; 2] = ["majority leader", "minority leader"];

// ============================================================================
// PARTY
// ============================================================================

/// Party affiliation. Declaration order is the sort order used by layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartyCode {
    Democratic,
    Independent,
    Republican,
    Unknown,
}

impl PartyCode {
    pub const ALL: [PartyCode; 4] = [
        PartyCode::Democratic,
        PartyCode::Independent,
        PartyCode::Republican,
        PartyCode::Unknown,
    ];

    /// Recognize a two-letter code or a party label, case-insensitively
    pub fn from_label(label: &str) -> PartyCode {
        match label.trim().to_lowercase().as_str() {
            "d" | "dem" | "democrat" | "democratic" => PartyCode::Democratic,
            "r" | "rep" | "gop" | "republican" => PartyCode::Republican,
            "i" | "id" | "ind" | "independent" | "independent democrat" => PartyCode::Independent,
            _ => PartyCode::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PartyCode::Democratic => "Democratic",
            PartyCode::Independent => "Independent",
            PartyCode::Republican => "Republican",
            PartyCode::Unknown => "Unknown",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PartyCode::Democratic => "D",
            PartyCode::Independent => "I",
            PartyCode::Republican => "R",
            PartyCode::Unknown => "?",
        }
    }

    /// Fill color (hex) used by the SVG renderer
    pub fn color(&self) -> &'static str {
        match self {
            PartyCode::Democratic => "#3b82f6",
            PartyCode::Independent => "#eab308",
            PartyCode::Republican => "#ef4444",
            PartyCode::Unknown => "#6b7280",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PartyCode::Democratic => "party-democratic",
            PartyCode::Independent => "party-independent",
            PartyCode::Republican => "party-republican",
            PartyCode::Unknown => "party-unknown",
        }
    }
}

// ============================================================================
// RAW (API-SHAPED) RECORDS
// ============================================================================

/// A member record as the API sends it. Every field is optional and
/// tolerant of type drift (numbers where strings were expected, etc).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMember {
    #[serde(default, deserialize_with = "lenient_string")]
    pub bioguide_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub party: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub party_name: Option<String>,
    #[serde(default)]
    pub parties: Option<PartyList>,
    #[serde(default)]
    pub party_history: Option<PartyList>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub district: Option<String>,

    #[serde(default)]
    pub leadership: Option<LeadershipField>,
    #[serde(default)]
    pub leadership_role: Option<LeadershipField>,
}

/// `parties` / `partyHistory`: normally a list, tolerated as anything
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartyList {
    List(Vec<PartyEntry>),
    Other(Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartyEntry {
    Label(String),
    Record {
        #[serde(default, deserialize_with = "lenient_string")]
        name: Option<String>,
        #[serde(default, rename = "partyName", deserialize_with = "lenient_string")]
        party_name: Option<String>,
        #[serde(default, rename = "partyAbbreviation", deserialize_with = "lenient_string")]
        abbreviation: Option<String>,
    },
    Other(Value),
}

impl PartyEntry {
    fn label(&self) -> Option<&str> {
        match self {
            PartyEntry::Label(label) => Some(label.as_str()),
            PartyEntry::Record {
                name,
                party_name,
                abbreviation,
            } => name
                .as_deref()
                .or(party_name.as_deref())
                .or(abbreviation.as_deref()),
            PartyEntry::Other(_) => None,
        }
    }
}

impl PartyList {
    fn first_label(&self) -> Option<&str> {
        match self {
            PartyList::List(entries) => entries.first().and_then(PartyEntry::label),
            PartyList::Other(_) => None,
        }
    }
}

/// `leadership` / `leadershipRole`: a single title, a list of titles, or a
/// list of `{ "type": ..., "current": ... }` objects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeadershipField {
    Title(String),
    Roles(Vec<LeadershipRole>),
    Other(Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeadershipRole {
    Title(String),
    Record {
        #[serde(default, rename = "type", alias = "title", deserialize_with = "lenient_string")]
        kind: Option<String>,
        #[serde(default)]
        current: Option<bool>,
    },
    Other(Value),
}

impl LeadershipField {
    fn titles(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            LeadershipField::Title(title) => vec![title.as_str()],
            LeadershipField::Roles(roles) => roles
                .iter()
                .filter_map(|role| match role {
                    LeadershipRole::Title(title) => Some(title.as_str()),
                    // Past roles don't make someone a leader today
                    LeadershipRole::Record { current: Some(false), .. } => None,
                    LeadershipRole::Record { kind, .. } => kind.as_deref(),
                    LeadershipRole::Other(_) => None,
                })
                .collect(),
            LeadershipField::Other(_) => Vec::new(),
        };

        raw.into_iter()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Accept strings, numbers and booleans as text; anything else becomes None
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Which field a party came from, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyShape<'a> {
    /// `party` - a two-letter code (or, in older payloads, a label)
    Code(&'a str),
    /// `partyName`
    Name(&'a str),
    /// First entry of `parties` / `partyHistory`
    FirstListed(&'a str),
}

impl PartyShape<'_> {
    pub fn party(&self) -> PartyCode {
        match self {
            PartyShape::Code(s) | PartyShape::Name(s) | PartyShape::FirstListed(s) => {
                PartyCode::from_label(s)
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl RawMember {
    /// Decode one record; anything that isn't an object yields an empty record
    pub fn from_value(value: Value) -> RawMember {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// The first present, non-blank party field
    pub fn party_shape(&self) -> Option<PartyShape<'_>> {
        if let Some(code) = non_blank(self.party.as_deref()) {
            return Some(PartyShape::Code(code));
        }
        if let Some(name) = non_blank(self.party_name.as_deref()) {
            return Some(PartyShape::Name(name));
        }
        // An empty `parties` list must not hide a usable `partyHistory`
        [&self.parties, &self.party_history]
            .into_iter()
            .flatten()
            .find_map(|list| non_blank(list.first_label()))
            .map(PartyShape::FirstListed)
    }

    pub fn display_name(&self) -> String {
        if let Some(name) = non_blank(self.name.as_deref()) {
            return name.to_string();
        }

        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .filter_map(non_blank)
            .collect();
        parts.join(" ")
    }

    pub fn leadership_titles(&self) -> Vec<String> {
        let mut titles = Vec::new();
        for field in [&self.leadership, &self.leadership_role].into_iter().flatten() {
            for title in field.titles() {
                if !titles.contains(&title) {
                    titles.push(title);
                }
            }
        }
        titles
    }
}

// ============================================================================
// NORMALIZED RECORDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMember {
    pub id: Option<String>,
    pub display_name: String,
    pub party: PartyCode,
    pub state: String,
    pub district: String,
    pub is_party_leader: bool,
    pub is_speaker: bool,
    pub leadership_titles: Vec<String>,
}

impl NormalizedMember {
    /// Holds a majority or minority leader post
    pub fn is_floor_leader(&self) -> bool {
        self.leadership_titles
            .iter()
            .any(|t| contains_any(t, &FLOOR_LEADER_KEYWORDS))
    }

    /// Layout ordering: party, then state, then district (as text)
    pub fn sort_key(&self) -> (PartyCode, &str, &str) {
        (self.party, self.state.as_str(), self.district.as_str())
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

fn normalize_district(district: Option<&str>) -> String {
    match non_blank(district) {
        None | Some("0") => AT_LARGE.to_string(),
        Some(d) if d.eq_ignore_ascii_case("at-large") || d.eq_ignore_ascii_case("at large") => {
            AT_LARGE.to_string()
        }
        Some(d) => d.to_string(),
    }
}

/// Map one raw record to its normalized form. Never fails.
pub fn normalize_member(raw: &RawMember, chamber: Chamber) -> NormalizedMember {
    let party = raw
        .party_shape()
        .map(|shape| shape.party())
        .unwrap_or(PartyCode::Unknown);

    let leadership_titles = raw.leadership_titles();
    let is_speaker = chamber == Chamber::House
        && leadership_titles
            .iter()
            .any(|t| contains_any(t, &[SPEAKER_KEYWORD]));

    NormalizedMember {
        id: non_blank(raw.bioguide_id.as_deref())
            .or(non_blank(raw.id.as_deref()))
            .map(str::to_string),
        display_name: raw.display_name(),
        party,
        state: raw.state.as_deref().map(str::trim).unwrap_or("").to_string(),
        district: normalize_district(raw.district.as_deref()),
        is_party_leader: !leadership_titles.is_empty(),
        is_speaker,
        leadership_titles,
    }
}

/// One normalized record per raw record, in input order
pub fn normalize_members(raws: &[RawMember], chamber: Chamber) -> Vec<NormalizedMember> {
    raws.iter().map(|raw| normalize_member(raw, chamber)).collect()
}

// ============================================================================
// DISTINGUISHED OFFICERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfficerRole {
    Speaker,
    VicePresident,
}

impl OfficerRole {
    pub fn title(&self) -> &'static str {
        match self {
            OfficerRole::Speaker => "Speaker of the House",
            OfficerRole::VicePresident => "Vice President (Tie-breaking vote)",
        }
    }
}

/// Drawn outside the seat layout as an emphasized singleton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistinguishedOfficer {
    pub name: String,
    pub party: PartyCode,
    pub role: OfficerRole,
}

impl DistinguishedOfficer {
    pub fn from_member(member: &NormalizedMember, role: OfficerRole) -> Self {
        DistinguishedOfficer {
            name: member.display_name.clone(),
            party: member.party,
            role,
        }
    }
}

/// Democrats and Republicans hold the same number of seats
pub fn is_evenly_split(members: &[NormalizedMember]) -> bool {
    let democrats = members
        .iter()
        .filter(|m| m.party == PartyCode::Democratic)
        .count();
    let republicans = members
        .iter()
        .filter(|m| m.party == PartyCode::Republican)
        .count();
    democrats > 0 && democrats == republicans
}
