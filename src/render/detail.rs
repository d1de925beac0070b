use crate::chamber::Chamber;
use crate::member::{DistinguishedOfficer, NormalizedMember, AT_LARGE};
use serde::Serialize;

/// Tooltip content for one seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatDetail {
    pub heading: String,
    pub lines: Vec<String>,
}

impl SeatDetail {
    /// Heading and lines joined one per line
    pub fn tooltip(&self) -> String {
        std::iter::once(self.heading.as_str())
            .chain(self.lines.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn heading(name: &str, party: &str) -> String {
    let name = if name.is_empty() { "Unknown member" } else { name };
    format!("{} ({})", name, party)
}

pub fn member_detail(member: &NormalizedMember, chamber: Chamber) -> SeatDetail {
    let mut lines = Vec::new();

    if !member.state.is_empty() {
        lines.push(member.state.clone());
    }

    if chamber == Chamber::House {
        if member.district == AT_LARGE {
            lines.push(AT_LARGE.to_string());
        } else {
            lines.push(format!("District {}", member.district));
        }
    }

    if member.is_party_leader {
        let label = if member.is_floor_leader() { "Floor Leader" } else { "Party Leader" };
        lines.push(label.to_string());
        lines.extend(member.leadership_titles.iter().cloned());
    }

    SeatDetail {
        heading: heading(&member.display_name, member.party.name()),
        lines,
    }
}

pub fn officer_detail(officer: &DistinguishedOfficer) -> SeatDetail {
    SeatDetail {
        heading: heading(&officer.name, officer.party.name()),
        lines: vec![officer.role.title().to_string()],
    }
}
