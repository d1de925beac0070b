// Renderers - turn a ChartLayout into something a person can look at
//
// - detail: per-seat tooltip text shared by every front end
// - svg:    standalone SVG with hover tooltips
// - export: CSV of seat positions

pub mod detail;
pub mod export;
pub mod svg;

pub use detail::{member_detail, officer_detail, SeatDetail};
pub use export::{write_seats_csv, SeatRecord};
pub use svg::{render_notice_svg, render_svg, SvgOptions};
