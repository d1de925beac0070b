// Congress Seats - Core Library
// Exposes all modules for use in the terminal chart, API server, and tests

pub mod chamber;
pub mod config;
pub mod error;
pub mod member;  // Normalizer - raw API records → NormalizedMember
pub mod source;  // Member sources - congress.gov, fixture files
pub mod loader;  // Roster loading, caching, load state machine
pub mod layout;  // Seat Layout Engine - grid, arc, scatter, split
pub mod render;  // SVG, CSV, tooltip text

#[cfg(feature = "server")]
pub mod api;    // HTTP API - axum router

// Re-export commonly used types
pub use chamber::Chamber;
pub use config::ApiConfig;
pub use error::{ChartError, Result};
pub use member::{
    DistinguishedOfficer, NormalizedMember, OfficerRole, PartyCode, RawMember,
    is_evenly_split, normalize_member, normalize_members,
};
pub use source::{CongressApi, FixtureFile, FixtureSource, MemberSource};
pub use loader::{load_roster, LoadOutcome, LoadState, Roster, RosterCache, RosterLoader};
pub use layout::{
    ChartLayout, LayoutStrategy, OfficerSeat, SeatBorder, SeatPosition, SeatStyle,
    layout_roster, seat_order,
};
pub use render::{
    member_detail, officer_detail, render_notice_svg, render_svg, write_seats_csv,
    SeatDetail, SvgOptions,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
