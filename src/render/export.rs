// CSV export of a laid-out chart - one row per seat, officer last

use crate::layout::ChartLayout;
use crate::loader::Roster;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Serialize)]
pub struct SeatRecord {
    pub seat: usize,
    pub name: String,
    pub party: String,
    pub state: String,
    pub district: String,
    pub x: String,
    pub y: String,
    pub style_class: String,
    pub party_leader: bool,
    pub floor_leader: bool,
    pub role: String,
}

/// Flatten a layout into CSV rows in placement order
pub fn seat_records(roster: &Roster, layout: &ChartLayout) -> Vec<SeatRecord> {
    let mut records: Vec<SeatRecord> = layout
        .seats
        .iter()
        .enumerate()
        .map(|(i, seat)| {
            let member = &roster.members[seat.member_index];
            SeatRecord {
                seat: i + 1,
                name: member.display_name.clone(),
                party: member.party.name().to_string(),
                state: member.state.clone(),
                district: member.district.clone(),
                x: format!("{:.3}", seat.x),
                y: format!("{:.3}", seat.y),
                style_class: seat.style_class.clone(),
                party_leader: member.is_party_leader,
                floor_leader: member.is_floor_leader(),
                role: member.leadership_titles.join("; "),
            }
        })
        .collect();

    if let Some(officer) = &layout.officer {
        records.push(SeatRecord {
            seat: 0,
            name: officer.officer.name.clone(),
            party: officer.officer.party.name().to_string(),
            state: String::new(),
            district: String::new(),
            x: format!("{:.3}", officer.x),
            y: format!("{:.3}", officer.y),
            style_class: officer.style_class.clone(),
            party_leader: false,
            floor_leader: false,
            role: officer.officer.role.title().to_string(),
        });
    }

    records
}

pub fn write_seats_csv<W: Write>(roster: &Roster, layout: &ChartLayout, writer: W) -> Result<usize> {
    let records = seat_records(roster, layout);
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in &records {
        csv_writer
            .serialize(record)
            .with_context(|| format!("Failed to write seat {}", record.seat))?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;

    Ok(records.len())
}
