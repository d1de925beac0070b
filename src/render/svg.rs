// SVG chart - one circle per seat, hover tooltips via <title>

use super::detail::{member_detail, officer_detail};
use crate::error::ChartError;
use crate::layout::{ChartLayout, OFFICER_RADIUS, SEAT_RADIUS};
use crate::loader::Roster;
use crate::member::PartyCode;

#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Pixels per chart unit
    pub scale: f64,
    pub background: String,
    pub show_legend: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            scale: 24.0,
            background: "#f3f4f6".to_string(),
            show_legend: true,
        }
    }
}

const LEGEND_HEIGHT: f64 = 28.0;

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn stroke_attrs(stroke: Option<&str>, width: f64) -> String {
    match stroke {
        Some(color) => format!(r#" stroke="{}" stroke-width="{:.1}""#, color, width),
        None => String::new(),
    }
}

/// Render a laid-out roster as a standalone SVG document
pub fn render_svg(roster: &Roster, layout: &ChartLayout, options: &SvgOptions) -> String {
    let s = options.scale;
    let width = layout.width * s;
    let chart_height = layout.height * s;
    let height = chart_height + if options.show_legend { LEGEND_HEIGHT } else { 0.0 };

    let mut seats = String::new();
    for seat in &layout.seats {
        let member = &roster.members[seat.member_index];
        let tooltip = member_detail(member, roster.chamber).tooltip();
        seats.push_str(&format!(
            r#"  <circle class="{}" cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"{}><title>{}</title></circle>
"#,
            seat.style_class,
            seat.x * s,
            seat.y * s,
            SEAT_RADIUS * s,
            seat.style.party.color(),
            stroke_attrs(seat.style.stroke(), s * 0.12),
            escape_xml(&tooltip),
        ));
    }

    let mut officer = String::new();
    if let Some(seat) = &layout.officer {
        officer.push_str(&format!(
            r#"  <circle class="{}" cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"{}><title>{}</title></circle>
"#,
            seat.style_class,
            seat.x * s,
            seat.y * s,
            OFFICER_RADIUS * s,
            seat.style.party.color(),
            stroke_attrs(seat.style.stroke(), s * 0.2),
            escape_xml(&officer_detail(&seat.officer).tooltip()),
        ));
    }

    let mut legend = String::new();
    if options.show_legend {
        let y = chart_height + LEGEND_HEIGHT / 2.0;
        let mut x = 10.0;
        for (party, count) in roster.party_breakdown() {
            legend.push_str(&format!(
                r#"  <circle cx="{:.1}" cy="{:.1}" r="6" fill="{}"/><text x="{:.1}" y="{:.1}" font-size="12" font-family="sans-serif">{} {}</text>
"#,
                x + 6.0,
                y,
                party.color(),
                x + 16.0,
                y + 4.0,
                party.name(),
                count,
            ));
            x += legend_width(party, count);
        }
    }

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}" role="img" aria-label="{}">
  <rect width="100%" height="100%" fill="{}" rx="8"/>
{}{}{}</svg>
"#,
        width,
        height,
        width,
        height,
        escape_xml(&format!("{} seating chart", roster.chamber.title())),
        options.background,
        seats,
        officer,
        legend,
    )
}

fn legend_width(party: PartyCode, count: usize) -> f64 {
    let label = format!("{} {}", party.name(), count);
    24.0 + label.len() as f64 * 7.0 + 12.0
}

/// Notice shown instead of a chart when a load failed
pub fn render_notice_svg(err: &ChartError) -> String {
    let color = if err.is_empty_data() { "#374151" } else { "#b91c1c" };
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="480" height="80" role="alert">
  <rect width="100%" height="100%" fill="#fef2f2" stroke="{}" rx="8"/>
  <text x="16" y="30" font-size="16" font-weight="bold" font-family="sans-serif" fill="{}">{}</text>
  <text x="16" y="56" font-size="13" font-family="sans-serif" fill="{}">{}</text>
</svg>
"##,
        color,
        color,
        escape_xml(err.title()),
        color,
        escape_xml(&err.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chamber::Chamber;
    use crate::layout::{layout_roster, LayoutStrategy};
    use crate::member::{DistinguishedOfficer, NormalizedMember, OfficerRole, AT_LARGE};
    use chrono::Utc;

    fn roster() -> Roster {
        let member = |name: &str, party| NormalizedMember {
            id: None,
            display_name: name.to_string(),
            party,
            state: "CA".to_string(),
            district: AT_LARGE.to_string(),
            is_party_leader: false,
            is_speaker: false,
            leadership_titles: vec![],
        };
        Roster {
            chamber: Chamber::Senate,
            members: vec![
                member("Pat <O'Brien> & Co", PartyCode::Democratic),
                member("Sam Smith", PartyCode::Republican),
            ],
            officer: Some(DistinguishedOfficer {
                name: "Veep".to_string(),
                party: PartyCode::Democratic,
                role: OfficerRole::VicePresident,
            }),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_one_circle_per_seat_plus_officer() {
        let roster = roster();
        let layout = layout_roster(&roster, &LayoutStrategy::default_for(Chamber::Senate));
        let svg = render_svg(&roster, &layout, &SvgOptions { show_legend: false, ..Default::default() });

        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("<title>").count(), 3);
        assert!(svg.contains("Vice President (Tie-breaking vote)"));
        assert!(svg.contains(r##"stroke="#facc15""##));
    }

    #[test]
    fn test_tooltips_are_escaped() {
        let roster = roster();
        let layout = layout_roster(&roster, &LayoutStrategy::default_for(Chamber::Senate));
        let svg = render_svg(&roster, &layout, &SvgOptions::default());

        assert!(svg.contains("Pat &lt;O&apos;Brien&gt; &amp; Co (Democratic)"));
        assert!(!svg.contains("<O'Brien>"));
    }

    #[test]
    fn test_legend_lists_parties() {
        let roster = roster();
        let layout = layout_roster(&roster, &LayoutStrategy::default_for(Chamber::Senate));
        let svg = render_svg(&roster, &layout, &SvgOptions::default());
        assert!(svg.contains("Democratic 1"));
        assert!(svg.contains("Republican 1"));
        assert!(!svg.contains("Independent"));
    }

    #[test]
    fn test_floor_leader_ring() {
        let mut roster = roster();
        roster.members[1].is_party_leader = true;
        roster.members[1].leadership_titles = vec!["Minority Leader".to_string()];
        let layout = layout_roster(&roster, &LayoutStrategy::default_for(Chamber::Senate));
        let svg = render_svg(&roster, &layout, &SvgOptions::default());

        assert!(svg.contains("party-republican leader floor-leader"));
        assert!(svg.contains(r##"stroke="#6b21a8""##));
        assert!(svg.contains("Floor Leader\nMinority Leader"));
    }

    #[test]
    fn test_notice_svg() {
        let svg = render_notice_svg(&ChartError::fetch(Some(500), "Failed to fetch senate members (500): Internal Server Error"));
        assert!(svg.contains("Internal Server Error"));
        assert!(svg.contains(">Error<"));
        assert!(!svg.contains("<circle"));
    }
}
