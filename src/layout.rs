// 🪑 Seat Layout Engine
// Normalized roster → one positioned, styled seat per member
//
// Coordinates are abstract chart units: origin top-left, y grows downward,
// neighbouring seats about 1.0 apart. Renderers scale to their own surface.

use crate::chamber::Chamber;
use crate::loader::Roster;
use crate::member::{DistinguishedOfficer, NormalizedMember, OfficerRole, PartyCode};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Drawn radius of an ordinary seat
pub const SEAT_RADIUS: f64 = 0.4;
/// Drawn radius of the officer singleton
pub const OFFICER_RADIUS: f64 = 0.7;

const MARGIN: f64 = 0.5;
const OFFICER_BAND: f64 = 1.5;
const AISLE: f64 = 1.0;
const SCATTER_DEPTH: f64 = 0.4;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Interchangeable placements of the same roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutStrategy {
    /// Fixed column count, row-major fill
    Grid { columns: usize },
    /// Semicircle of `rows` bands, outer band first
    Arc { rows: usize },
    /// Deterministically jittered points along a half-ellipse
    Scatter { seed: u64 },
    /// Two half-regions split by party; `left` parties sit on the left
    Split {
        columns_per_side: usize,
        left: Vec<PartyCode>,
    },
}

impl LayoutStrategy {
    pub const NAMES: [&'static str; 4] = ["arc", "grid", "scatter", "split"];

    pub fn default_for(chamber: Chamber) -> Self {
        LayoutStrategy::Arc {
            rows: chamber.arc_rows(),
        }
    }

    /// Strategy by short name, sized for the chamber
    pub fn named(name: &str, chamber: Chamber) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "arc" | "semicircle" => Some(LayoutStrategy::default_for(chamber)),
            "grid" => Some(LayoutStrategy::Grid {
                columns: chamber.grid_columns(),
            }),
            "scatter" => Some(LayoutStrategy::Scatter { seed: 2024 }),
            "split" | "bicameral" => Some(LayoutStrategy::Split {
                columns_per_side: chamber.grid_columns() / 2,
                left: vec![PartyCode::Democratic, PartyCode::Independent],
            }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LayoutStrategy::Arc { .. } => "arc",
            LayoutStrategy::Grid { .. } => "grid",
            LayoutStrategy::Scatter { .. } => "scatter",
            LayoutStrategy::Split { .. } => "split",
        }
    }

    /// Next strategy in [`Self::NAMES`] order, wrapping around
    pub fn cycle(&self, chamber: Chamber) -> Self {
        let i = Self::NAMES
            .iter()
            .position(|n| *n == self.name())
            .unwrap_or(0);
        let next = Self::NAMES[(i + 1) % Self::NAMES.len()];
        LayoutStrategy::named(next, chamber).unwrap_or_else(|| LayoutStrategy::default_for(chamber))
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatBorder {
    None,
    PartyLeader,
    /// Majority or minority leader
    FloorLeader,
    Officer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatStyle {
    pub party: PartyCode,
    pub border: SeatBorder,
}

impl SeatStyle {
    pub fn for_member(member: &NormalizedMember) -> Self {
        SeatStyle {
            party: member.party,
            border: if member.is_floor_leader() {
                SeatBorder::FloorLeader
            } else if member.is_party_leader {
                SeatBorder::PartyLeader
            } else {
                SeatBorder::None
            },
        }
    }

    pub fn for_officer(officer: &DistinguishedOfficer) -> Self {
        SeatStyle {
            party: officer.party,
            border: SeatBorder::Officer,
        }
    }

    /// Border stroke color, if the seat has one
    pub fn stroke(&self) -> Option<&'static str> {
        match self.border {
            SeatBorder::None => None,
            SeatBorder::PartyLeader => Some("#a855f7"),
            SeatBorder::FloorLeader => Some("#6b21a8"),
            SeatBorder::Officer => Some("#facc15"),
        }
    }

    pub fn class(&self) -> String {
        let mut class = format!("seat {}", self.party.css_class());
        match self.border {
            SeatBorder::None => {}
            SeatBorder::PartyLeader => class.push_str(" leader"),
            SeatBorder::FloorLeader => class.push_str(" leader floor-leader"),
            SeatBorder::Officer => class.push_str(" officer"),
        }
        class
    }
}

/// One member's place in the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatPosition {
    /// Index into `Roster::members`
    pub member_index: usize,
    pub x: f64,
    pub y: f64,
    pub style: SeatStyle,
    pub style_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficerSeat {
    pub officer: DistinguishedOfficer,
    pub x: f64,
    pub y: f64,
    pub style: SeatStyle,
    pub style_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub chamber: Chamber,
    pub strategy: LayoutStrategy,
    pub width: f64,
    pub height: f64,
    /// In placement order (left to right for arcs)
    pub seats: Vec<SeatPosition>,
    pub officer: Option<OfficerSeat>,
}

impl ChartLayout {
    pub fn seat_for_member(&self, member_index: usize) -> Option<&SeatPosition> {
        self.seats.iter().find(|s| s.member_index == member_index)
    }

    /// Closest seat to a chart-space point
    pub fn nearest_seat(&self, x: f64, y: f64) -> Option<usize> {
        self.seats
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (a.x - x).powi(2) + (a.y - y).powi(2);
                let db = (b.x - x).powi(2) + (b.y - y).powi(2);
                da.total_cmp(&db)
            })
            .map(|(i, _)| i)
    }
}

// ============================================================================
// ORDERING
// ============================================================================

/// Member indices sorted by (party, state, district). Stable on ties.
pub fn seat_order(members: &[NormalizedMember], excluded: Option<usize>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..members.len())
        .filter(|i| Some(*i) != excluded)
        .collect();
    order.sort_by(|a, b| members[*a].sort_key().cmp(&members[*b].sort_key()));
    order
}

/// The member lifted out of the layout, if any
fn excluded_member(roster: &Roster) -> Option<usize> {
    match &roster.officer {
        Some(officer) if officer.role == OfficerRole::Speaker => {
            roster.members.iter().position(|m| m.is_speaker)
        }
        _ => None,
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Geometry of one strategy for `n` seats
struct Placement {
    points: Vec<(f64, f64)>,
    width: f64,
    height: f64,
    officer_at: (f64, f64),
}

/// Place every member of the roster. The Speaker (if any) is lifted out
/// into the officer seat, so a House roster of N yields N − 1 seats.
pub fn layout_roster(roster: &Roster, strategy: &LayoutStrategy) -> ChartLayout {
    let excluded = excluded_member(roster);
    let order = seat_order(&roster.members, excluded);
    let has_officer = roster.officer.is_some();

    let placement = match strategy {
        LayoutStrategy::Grid { columns } => grid(order.len(), *columns, has_officer),
        LayoutStrategy::Arc { rows } => arc(order.len(), *rows),
        LayoutStrategy::Scatter { seed } => scatter(order.len(), *seed),
        LayoutStrategy::Split {
            columns_per_side,
            left,
        } => {
            let on_left: Vec<bool> = order
                .iter()
                .map(|i| left.contains(&roster.members[*i].party))
                .collect();
            split(&on_left, *columns_per_side, has_officer)
        }
    };

    let seats = order
        .iter()
        .zip(placement.points.iter())
        .map(|(&member_index, &(x, y))| {
            let style = SeatStyle::for_member(&roster.members[member_index]);
            SeatPosition {
                member_index,
                x,
                y,
                style_class: style.class(),
                style,
            }
        })
        .collect();

    let officer = roster.officer.as_ref().map(|officer| {
        let style = SeatStyle::for_officer(officer);
        OfficerSeat {
            officer: officer.clone(),
            x: placement.officer_at.0,
            y: placement.officer_at.1,
            style_class: style.class(),
            style,
        }
    });

    ChartLayout {
        chamber: roster.chamber,
        strategy: strategy.clone(),
        width: placement.width,
        height: placement.height,
        seats,
        officer,
    }
}

fn grid(n: usize, columns: usize, has_officer: bool) -> Placement {
    let columns = columns.max(1);
    let rows = n.div_ceil(columns);
    let top = if has_officer { OFFICER_BAND } else { 0.0 };

    let points = (0..n)
        .map(|i| {
            let col = (i % columns) as f64;
            let row = (i / columns) as f64;
            (col + 0.5, top + row + 0.5)
        })
        .collect();

    Placement {
        points,
        width: columns as f64,
        height: top + rows as f64,
        officer_at: (columns as f64 / 2.0, OFFICER_BAND / 2.0),
    }
}

/// Outer radius giving roughly unit spacing for `n` seats over `rows` bands
fn outer_radius(n: usize, rows: usize) -> f64 {
    let rows_f = rows as f64;
    let needed = (n as f64 / PI + rows_f * (rows_f - 1.0) / 2.0) / rows_f;
    // Innermost band keeps at least one unit of clearance for the officer
    needed.max(rows_f)
}

/// Split `n` seats across bands in proportion to radius (largest remainder)
fn seats_per_band(n: usize, radii: &[f64]) -> Vec<usize> {
    let total: f64 = radii.iter().sum();
    if total <= 0.0 {
        return vec![0; radii.len()];
    }

    let quotas: Vec<f64> = radii.iter().map(|r| n as f64 * r / total).collect();
    let mut counts: Vec<usize> = quotas.iter().map(|q| q.floor() as usize).collect();
    let mut remaining = n - counts.iter().sum::<usize>();

    let mut by_remainder: Vec<usize> = (0..radii.len()).collect();
    by_remainder.sort_by(|a, b| {
        let ra = quotas[*a] - quotas[*a].floor();
        let rb = quotas[*b] - quotas[*b].floor();
        rb.total_cmp(&ra).then(a.cmp(b))
    });

    for band in by_remainder.into_iter().cycle() {
        if remaining == 0 {
            break;
        }
        counts[band] += 1;
        remaining -= 1;
    }
    counts
}

fn arc(n: usize, rows: usize) -> Placement {
    let rows = rows.clamp(1, n.max(1));
    let outer = outer_radius(n, rows);
    let center = (outer + MARGIN, outer + MARGIN);

    let radii: Vec<f64> = (0..rows).map(|band| outer - band as f64).collect();
    let counts = seats_per_band(n, &radii);

    // (angle, band, point)
    let mut slots: Vec<(f64, usize, (f64, f64))> = Vec::with_capacity(n);
    for (band, (&radius, &count)) in radii.iter().zip(counts.iter()).enumerate() {
        for j in 0..count {
            let angle = PI * (1.0 - (j as f64 + 0.5) / count as f64);
            let x = center.0 + radius * angle.cos();
            let y = center.1 - radius * angle.sin();
            slots.push((angle, band, (x, y)));
        }
    }

    // Sweep left to right across all bands so party blocks form wedges
    slots.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));

    Placement {
        points: slots.into_iter().map(|(_, _, p)| p).collect(),
        width: 2.0 * (outer + MARGIN),
        height: center.1 + OFFICER_RADIUS + MARGIN,
        officer_at: center,
    }
}

/// xorshift64, seeded per seat so positions don't depend on roster order upstream
struct Jitter(u64);

impl Jitter {
    fn new(seed: u64, index: usize) -> Self {
        let mixed = seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        // Avoid the all-zero state
        Jitter(if mixed == 0 { 0x2545_F491_4F6C_DD1D } else { mixed })
    }

    /// Uniform in [0, 1)
    fn next_unit(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn scatter(n: usize, seed: u64) -> Placement {
    let a = outer_radius(n, 4);
    let b = a * 0.8;
    let center = (a + MARGIN, b + MARGIN);

    let points = (0..n)
        .map(|i| {
            let mut rng = Jitter::new(seed, i);
            let t = (i as f64 + 0.5) / n as f64;
            let angle_jitter = (rng.next_unit() - 0.5) * (PI / n as f64);
            let angle = PI * (1.0 - t) + angle_jitter;
            let depth = 1.0 - SCATTER_DEPTH * rng.next_unit();
            (
                center.0 + a * depth * angle.cos(),
                center.1 - b * depth * angle.sin(),
            )
        })
        .collect();

    Placement {
        points,
        width: 2.0 * (a + MARGIN),
        height: center.1 + OFFICER_RADIUS + MARGIN,
        officer_at: center,
    }
}

fn split(on_left: &[bool], columns_per_side: usize, has_officer: bool) -> Placement {
    let columns = columns_per_side.max(1);
    let left_total = on_left.iter().filter(|l| **l).count();
    let right_total = on_left.len() - left_total;
    let rows = left_total.div_ceil(columns).max(right_total.div_ceil(columns));

    let width = 2.0 * columns as f64 + AISLE;
    let top = if has_officer { OFFICER_BAND } else { 0.0 };

    let mut left_seen = 0;
    let mut right_seen = 0;
    let points = on_left
        .iter()
        .map(|&left| {
            if left {
                let i = left_seen;
                left_seen += 1;
                ((i % columns) as f64 + 0.5, top + (i / columns) as f64 + 0.5)
            } else {
                let i = right_seen;
                right_seen += 1;
                (width - (i % columns) as f64 - 0.5, top + (i / columns) as f64 + 0.5)
            }
        })
        .collect();

    Placement {
        points,
        width,
        height: top + rows as f64,
        officer_at: (width / 2.0, OFFICER_BAND / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::AT_LARGE;
    use chrono::Utc;
    use std::collections::HashSet;

    fn member(party: PartyCode, state: &str, district: &str) -> NormalizedMember {
        NormalizedMember {
            id: None,
            display_name: format!("{} {} {}", party.code(), state, district),
            party,
            state: state.to_string(),
            district: district.to_string(),
            is_party_leader: false,
            is_speaker: false,
            leadership_titles: vec![],
        }
    }

    fn roster(chamber: Chamber, members: Vec<NormalizedMember>) -> Roster {
        Roster {
            chamber,
            members,
            officer: None,
            fetched_at: Utc::now(),
        }
    }

    fn house(n: usize) -> Roster {
        let members = (0..n)
            .map(|i| {
                let party = match i % 3 {
                    0 => PartyCode::Republican,
                    1 => PartyCode::Democratic,
                    _ => PartyCode::Unknown,
                };
                member(party, &format!("S{}", i % 50), &(i % 12).to_string())
            })
            .collect();
        roster(Chamber::House, members)
    }

    fn all_strategies(chamber: Chamber) -> Vec<LayoutStrategy> {
        LayoutStrategy::NAMES
            .iter()
            .map(|n| LayoutStrategy::named(n, chamber).unwrap())
            .collect()
    }

    #[test]
    fn test_every_strategy_places_every_member() {
        for n in [0, 1, 2, 7, 100, 435] {
            let roster = house(n);
            for strategy in all_strategies(Chamber::House) {
                let layout = layout_roster(&roster, &strategy);
                assert_eq!(layout.seats.len(), n, "{} with {} members", strategy.name(), n);

                let indices: HashSet<usize> = layout.seats.iter().map(|s| s.member_index).collect();
                assert_eq!(indices.len(), n, "each member placed once");
            }
        }
    }

    #[test]
    fn test_speaker_is_lifted_out() {
        let mut roster = house(10);
        roster.members[4].is_speaker = true;
        roster.members[4].is_party_leader = true;
        roster.officer = Some(DistinguishedOfficer::from_member(&roster.members[4], OfficerRole::Speaker));

        for strategy in all_strategies(Chamber::House) {
            let layout = layout_roster(&roster, &strategy);
            assert_eq!(layout.seats.len(), 9);
            assert!(layout.seat_for_member(4).is_none());

            let officer = layout.officer.as_ref().unwrap();
            assert_eq!(officer.style.border, SeatBorder::Officer);
            assert!(officer.style_class.contains("officer"));
        }
    }

    #[test]
    fn test_vice_president_adds_officer_without_removing_seat() {
        let mut roster = roster(
            Chamber::Senate,
            vec![member(PartyCode::Democratic, "CA", AT_LARGE), member(PartyCode::Republican, "TX", AT_LARGE)],
        );
        roster.officer = Some(DistinguishedOfficer {
            name: "VP".to_string(),
            party: PartyCode::Democratic,
            role: OfficerRole::VicePresident,
        });

        let layout = layout_roster(&roster, &LayoutStrategy::default_for(Chamber::Senate));
        assert_eq!(layout.seats.len(), 2);
        assert!(layout.officer.is_some());
    }

    #[test]
    fn test_grid_cells_never_collide() {
        let roster = house(435);
        let layout = layout_roster(&roster, &LayoutStrategy::Grid { columns: 25 });

        let cells: HashSet<(i64, i64)> = layout
            .seats
            .iter()
            .map(|s| (s.x.floor() as i64, s.y.floor() as i64))
            .collect();
        assert_eq!(cells.len(), 435);
        assert_eq!(layout.width, 25.0);
        assert_eq!(layout.height, 18.0);
    }

    #[test]
    fn test_grid_row_major() {
        let roster = house(5);
        let layout = layout_roster(&roster, &LayoutStrategy::Grid { columns: 2 });
        let points: Vec<(f64, f64)> = layout.seats.iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(points, vec![(0.5, 0.5), (1.5, 0.5), (0.5, 1.5), (1.5, 1.5), (0.5, 2.5)]);
    }

    #[test]
    fn test_split_cells_never_collide_and_sides_hold() {
        let roster = house(100);
        let strategy = LayoutStrategy::named("split", Chamber::Senate).unwrap();
        let layout = layout_roster(&roster, &strategy);

        let cells: HashSet<(i64, i64)> = layout
            .seats
            .iter()
            .map(|s| (s.x.floor() as i64, s.y.floor() as i64))
            .collect();
        assert_eq!(cells.len(), 100);

        let mid = layout.width / 2.0;
        for seat in &layout.seats {
            let party = roster.members[seat.member_index].party;
            if party == PartyCode::Democratic {
                assert!(seat.x < mid);
            } else {
                assert!(seat.x > mid);
            }
        }
    }

    #[test]
    fn test_split_right_side_is_right_justified() {
        let roster = roster(Chamber::Senate, vec![member(PartyCode::Republican, "TX", AT_LARGE)]);
        let layout = layout_roster(
            &roster,
            &LayoutStrategy::Split {
                columns_per_side: 5,
                left: vec![PartyCode::Democratic],
            },
        );
        assert_eq!(layout.seats[0].x, layout.width - 0.5);
    }

    #[test]
    fn test_arc_seats_stay_inside_bounds_and_off_each_other() {
        let roster = house(435);
        let layout = layout_roster(&roster, &LayoutStrategy::Arc { rows: 8 });

        for seat in &layout.seats {
            assert!(seat.x >= 0.0 && seat.x <= layout.width);
            assert!(seat.y >= 0.0 && seat.y <= layout.height);
        }

        let min_gap = layout
            .seats
            .iter()
            .enumerate()
            .flat_map(|(i, a)| layout.seats[i + 1..].iter().map(move |b| ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()))
            .fold(f64::INFINITY, f64::min);
        assert!(min_gap > 0.5, "seats too close: {}", min_gap);
    }

    #[test]
    fn test_arc_sweeps_parties_left_to_right() {
        let members = vec![
            member(PartyCode::Republican, "TX", "1"),
            member(PartyCode::Democratic, "CA", "1"),
            member(PartyCode::Republican, "OK", "1"),
            member(PartyCode::Democratic, "NY", "1"),
        ];
        let layout = layout_roster(&roster(Chamber::Senate, members), &LayoutStrategy::Arc { rows: 1 });

        let xs: Vec<f64> = layout.seats.iter().map(|s| s.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        // Democrats first (CA, NY), then Republicans (OK, TX)
        let order: Vec<usize> = layout.seats.iter().map(|s| s.member_index).collect();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_seats_per_band_sums_exactly() {
        for n in [0, 1, 5, 99, 100, 435] {
            let radii = [10.0, 9.0, 8.0, 7.0];
            assert_eq!(seats_per_band(n, &radii).iter().sum::<usize>(), n);
        }
        let counts = seats_per_band(100, &[10.0, 9.0, 8.0, 7.0]);
        assert!(counts[0] >= counts[3], "outer bands hold more seats");
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let roster = house(50);
        let a = layout_roster(&roster, &LayoutStrategy::Scatter { seed: 7 });
        let b = layout_roster(&roster, &LayoutStrategy::Scatter { seed: 7 });
        let c = layout_roster(&roster, &LayoutStrategy::Scatter { seed: 8 });
        assert_eq!(a, b);
        assert_ne!(a.seats, c.seats);
    }

    #[test]
    fn test_sort_order_is_lexicographic() {
        let members = vec![
            member(PartyCode::Republican, "AL", "1"),
            member(PartyCode::Democratic, "CA", "2"),
            member(PartyCode::Democratic, "CA", "10"),
            member(PartyCode::Democratic, "AZ", "3"),
            member(PartyCode::Independent, "VT", AT_LARGE),
        ];
        // "10" sorts before "2"
        assert_eq!(seat_order(&members, None), vec![3, 2, 1, 4, 0]);
        assert_eq!(seat_order(&members, Some(2)), vec![3, 1, 4, 0]);
    }

    #[test]
    fn test_leader_style() {
        let mut m = member(PartyCode::Republican, "KY", AT_LARGE);
        m.is_party_leader = true;
        let style = SeatStyle::for_member(&m);
        assert_eq!(style.border, SeatBorder::PartyLeader);
        assert_eq!(style.class(), "seat party-republican leader");
        assert!(style.stroke().is_some());

        m.leadership_titles = vec!["Minority Leader".to_string()];
        let floor = SeatStyle::for_member(&m);
        assert_eq!(floor.border, SeatBorder::FloorLeader);
        assert_eq!(floor.class(), "seat party-republican leader floor-leader");
        assert_ne!(floor.stroke(), style.stroke());

        let plain = SeatStyle::for_member(&member(PartyCode::Unknown, "GU", AT_LARGE));
        assert_eq!(plain.class(), "seat party-unknown");
        assert!(plain.stroke().is_none());
    }

    #[test]
    fn test_strategy_names_and_cycle() {
        for name in LayoutStrategy::NAMES {
            let strategy = LayoutStrategy::named(name, Chamber::Senate).unwrap();
            assert_eq!(strategy.name(), name);
        }
        assert!(LayoutStrategy::named("spiral", Chamber::Senate).is_none());

        let arc = LayoutStrategy::default_for(Chamber::House);
        assert_eq!(arc.cycle(Chamber::House).name(), "grid");
        assert_eq!(
            LayoutStrategy::named("split", Chamber::House).unwrap().cycle(Chamber::House).name(),
            "arc"
        );
    }

    #[test]
    fn test_nearest_seat() {
        let roster = house(4);
        let layout = layout_roster(&roster, &LayoutStrategy::Grid { columns: 2 });
        assert_eq!(layout.nearest_seat(1.4, 1.6), Some(3));
        assert_eq!(layout.nearest_seat(0.0, 0.0), Some(0));
    }
}
