// ⏳ Roster Loader
// fetch → normalize → resolve distinguished officer, cached per chamber
//
// Load lifecycle for one chart: Idle → Loading → Ready(roster) | Failed(error).
// Failures are never cached; the next trigger fetches again.

use crate::chamber::Chamber;
use crate::config::ApiConfig;
use crate::error::{ChartError, Result};
use crate::member::{
    is_evenly_split, normalize_member, normalize_members, DistinguishedOfficer, NormalizedMember,
    OfficerRole, PartyCode,
};
use crate::source::{CongressApi, MemberSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{info, warn};

// ============================================================================
// ROSTER
// ============================================================================

/// Everything one chart needs from a single load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub chamber: Chamber,
    pub members: Vec<NormalizedMember>,
    pub officer: Option<DistinguishedOfficer>,
    pub fetched_at: DateTime<Utc>,
}

impl Roster {
    pub fn party_count(&self, party: PartyCode) -> usize {
        self.members.iter().filter(|m| m.party == party).count()
    }

    /// (party, seats) for every party present, in sort order
    pub fn party_breakdown(&self) -> Vec<(PartyCode, usize)> {
        PartyCode::ALL
            .iter()
            .map(|p| (*p, self.party_count(*p)))
            .filter(|(_, n)| *n > 0)
            .collect()
    }

    pub fn is_evenly_split(&self) -> bool {
        is_evenly_split(&self.members)
    }

    pub fn leaders(&self) -> impl Iterator<Item = &NormalizedMember> {
        self.members.iter().filter(|m| m.is_party_leader)
    }
}

/// Run the whole pipeline for one chamber. Any failed call fails the load.
pub async fn load_roster(source: &dyn MemberSource, chamber: Chamber) -> Result<Roster> {
    let raws = source.fetch_members(chamber).await?;
    if raws.is_empty() {
        return Err(ChartError::EmptyData(chamber));
    }

    let members = normalize_members(&raws, chamber);

    let officer = match chamber {
        Chamber::House => members
            .iter()
            .find(|m| m.is_speaker)
            .map(|m| DistinguishedOfficer::from_member(m, OfficerRole::Speaker)),
        Chamber::Senate if is_evenly_split(&members) => {
            match source.fetch_vice_president().await? {
                Some(raw) => {
                    let vp = normalize_member(&raw, Chamber::Senate);
                    Some(DistinguishedOfficer::from_member(&vp, OfficerRole::VicePresident))
                }
                None => {
                    warn!("senate is evenly split but no Vice President was returned");
                    None
                }
            }
        }
        Chamber::Senate => None,
    };

    info!(
        chamber = %chamber,
        source = source.name(),
        members = members.len(),
        officer = officer.as_ref().map(|o| o.name.as_str()).unwrap_or("-"),
        "roster loaded"
    );

    Ok(Roster {
        chamber,
        members,
        officer,
        fetched_at: Utc::now(),
    })
}

// ============================================================================
// CACHE
// ============================================================================

/// Rosters keyed by chamber, valid for `ttl` after they were fetched
#[derive(Debug)]
pub struct RosterCache {
    entries: HashMap<Chamber, Arc<Roster>>,
    ttl: chrono::Duration,
}

impl RosterCache {
    pub fn new(ttl: chrono::Duration) -> Self {
        RosterCache {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, chamber: Chamber, now: DateTime<Utc>) -> Option<Arc<Roster>> {
        self.entries
            .get(&chamber)
            .filter(|roster| now - roster.fetched_at < self.ttl)
            .cloned()
    }

    pub fn insert(&mut self, roster: Arc<Roster>) {
        self.entries.insert(roster.chamber, roster);
    }

    pub fn invalidate(&mut self, chamber: Chamber) {
        self.entries.remove(&chamber);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// LOADER
// ============================================================================

/// Shared by every chart in a process. Each chamber has its own load gate,
/// so a chamber never has two requests in flight and a slow House fetch
/// never holds up the Senate. The cache lock is only held for lookups and
/// inserts.
pub struct RosterLoader {
    source: Arc<dyn MemberSource>,
    cache: Mutex<RosterCache>,
    house_gate: Mutex<()>,
    senate_gate: Mutex<()>,
}

impl RosterLoader {
    /// congress.gov-backed loader; fails with a configuration error before any I/O
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let api = CongressApi::new(config.clone())?;
        Ok(RosterLoader::with_source(Arc::new(api), config.cache_ttl()))
    }

    pub fn with_source(source: Arc<dyn MemberSource>, ttl: chrono::Duration) -> Self {
        RosterLoader {
            source,
            cache: Mutex::new(RosterCache::new(ttl)),
            house_gate: Mutex::new(()),
            senate_gate: Mutex::new(()),
        }
    }

    fn gate(&self, chamber: Chamber) -> &Mutex<()> {
        match chamber {
            Chamber::House => &self.house_gate,
            Chamber::Senate => &self.senate_gate,
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Cached roster if still valid, otherwise a fresh load. `refresh` skips the cache.
    pub async fn load(&self, chamber: Chamber, refresh: bool) -> Result<Arc<Roster>> {
        // Waiters on the same chamber pick up the roster the first load cached
        let _gate = self.gate(chamber).lock().await;

        {
            let mut cache = self.cache.lock().await;
            if refresh {
                cache.invalidate(chamber);
            } else if let Some(roster) = cache.get(chamber, Utc::now()) {
                return Ok(roster);
            }
        }

        let roster = Arc::new(load_roster(self.source.as_ref(), chamber).await?);
        self.cache.lock().await.insert(roster.clone());
        Ok(roster)
    }

    /// Run a load on the runtime and report the outcome on `tx`
    pub fn spawn_load(
        self: &Arc<Self>,
        chamber: Chamber,
        refresh: bool,
        tx: mpsc::UnboundedSender<LoadOutcome>,
    ) -> tokio::task::JoinHandle<()> {
        let loader = Arc::clone(self);
        tokio::spawn(async move {
            let result = loader.load(chamber, refresh).await;
            // Receiver gone means the view was torn down
            let _ = tx.send(LoadOutcome { chamber, result });
        })
    }
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub chamber: Chamber,
    pub result: Result<Arc<Roster>>,
}

// ============================================================================
// STATE MACHINE
// ============================================================================

#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(Arc<Roster>),
    Failed(ChartError),
}

impl LoadState {
    /// Idle, Ready or Failed → Loading. Returns false if a load is already running.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = LoadState::Loading;
        true
    }

    /// Loading → Ready | Failed. Outcomes arriving in any other state are dropped.
    pub fn finish(&mut self, result: Result<Arc<Roster>>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(roster) => LoadState::Ready(roster),
            Err(err) => LoadState::Failed(err),
        };
        true
    }

    /// Terminal failure without ever loading (e.g. bad configuration)
    pub fn fail(&mut self, err: ChartError) {
        *self = LoadState::Failed(err);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn roster(&self) -> Option<&Arc<Roster>> {
        match self {
            LoadState::Ready(roster) => Some(roster),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ChartError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
