// 🌐 Member Sources
// Where raw member records come from: the congress.gov API or a local fixture file

use crate::chamber::Chamber;
use crate::config::ApiConfig;
use crate::error::{ChartError, Result};
use crate::member::RawMember;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

// ============================================================================
// CORE TRAIT
// ============================================================================

/// MemberSource - anything that can hand back raw member records
///
/// Both calls are all-or-nothing: a source never returns a partial list.
#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Every member of a chamber
    async fn fetch_members(&self, chamber: Chamber) -> Result<Vec<RawMember>>;

    /// The sitting Vice President, if the source knows one
    async fn fetch_vice_president(&self) -> Result<Option<RawMember>>;

    /// Short label for logs
    fn name(&self) -> &str;
}

/// One page of `GET /member`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberListResponse {
    #[serde(default)]
    pub members: Option<Vec<Value>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
}

impl MemberListResponse {
    pub fn into_raw_members(self) -> Vec<RawMember> {
        self.members
            .unwrap_or_default()
            .into_iter()
            .map(RawMember::from_value)
            .collect()
    }
}

// ============================================================================
// CONGRESS.GOV
// ============================================================================

/// HTTP source backed by the congress.gov v3 API
pub struct CongressApi {
    client: Client,
    config: ApiConfig,
}

impl CongressApi {
    /// Validates the config first; a missing key never produces a client
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("congress-seats/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ChartError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(CongressApi { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_page(&self, url: &str, query: &[(&str, String)], what: &str) -> Result<MemberListResponse> {
        let api_key = self.config.api_key()?;
        debug!(url = %url, what, "requesting member page");

        let mut request = self.client.get(url).query(query);
        if !url.contains("api_key=") {
            request = request.query(&[("api_key", api_key)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ChartError::fetch(None, format!("Failed to fetch {}: {}", what, e)))?;

        let response = check_status(response, what).await?;

        response
            .json::<MemberListResponse>()
            .await
            .map_err(|e| ChartError::fetch(None, format!("Failed to decode {}: {}", what, e)))
    }
}

/// Turn a non-success status into a fetch error carrying the stated reason
async fn check_status(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let reason = stated_reason(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
    });

    Err(ChartError::fetch(
        Some(status.as_u16()),
        format!("Failed to fetch {} ({}): {}", what, status.as_u16(), reason),
    ))
}

/// congress.gov reports errors as `{"error": {"message": ...}}` or `{"message": ...}`
fn stated_reason(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/message")
        .or_else(|| value.get("message"))
        .or_else(|| value.get("error"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl MemberSource for CongressApi {
    async fn fetch_members(&self, chamber: Chamber) -> Result<Vec<RawMember>> {
        let what = format!("{} members", chamber.api_name());
        let first_url = self.config.endpoint("member");
        let query = [
            ("chamber", chamber.api_name().to_string()),
            ("limit", self.config.page_limit.to_string()),
            ("format", "json".to_string()),
        ];

        let mut page = self.get_page(&first_url, &query, &what).await?;
        let mut members = Vec::new();
        let mut pages = 1;

        loop {
            let next = page.pagination.as_ref().and_then(|p| p.next.clone());
            members.extend(page.into_raw_members());

            match next {
                Some(url) if pages < self.config.max_pages => {
                    page = self.get_page(&url, &[], &what).await?;
                    pages += 1;
                }
                _ => break,
            }
        }

        debug!(chamber = %chamber, pages, count = members.len(), "fetched member list");
        Ok(members)
    }

    async fn fetch_vice_president(&self) -> Result<Option<RawMember>> {
        let url = self.config.endpoint("member");
        let query = [
            ("position", "vice-president".to_string()),
            ("format", "json".to_string()),
        ];

        let page = self
            .get_page(&url, &query, "Vice President information")
            .await?;
        Ok(page.into_raw_members().into_iter().next())
    }

    fn name(&self) -> &str {
        "congress.gov"
    }
}

// ============================================================================
// FIXTURE FILE
// ============================================================================

/// On-disk shape: `{ "house": [...], "senate": [...], "vicePresident": {...} }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureFile {
    #[serde(default)]
    pub house: Vec<Value>,
    #[serde(default)]
    pub senate: Vec<Value>,
    #[serde(default)]
    pub vice_president: Option<Value>,
}

/// Offline source for demos and tests. Counts calls so callers can
/// assert which lookups actually happened.
pub struct FixtureSource {
    fixture: FixtureFile,
    member_calls: AtomicUsize,
    vice_president_calls: AtomicUsize,
}

impl FixtureSource {
    pub fn new(fixture: FixtureFile) -> Self {
        FixtureSource {
            fixture,
            member_calls: AtomicUsize::new(0),
            vice_president_calls: AtomicUsize::new(0),
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture: {}", path.display()))?;
        let fixture: FixtureFile = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse fixture: {}", path.display()))?;
        Ok(FixtureSource::new(fixture))
    }

    pub fn member_calls(&self) -> usize {
        self.member_calls.load(Ordering::SeqCst)
    }

    pub fn vice_president_calls(&self) -> usize {
        self.vice_president_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MemberSource for FixtureSource {
    async fn fetch_members(&self, chamber: Chamber) -> Result<Vec<RawMember>> {
        self.member_calls.fetch_add(1, Ordering::SeqCst);
        let values = match chamber {
            Chamber::House => &self.fixture.house,
            Chamber::Senate => &self.fixture.senate,
        };
        Ok(values.iter().cloned().map(RawMember::from_value).collect())
    }

    async fn fetch_vice_president(&self) -> Result<Option<RawMember>> {
        self.vice_president_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.fixture.vice_president.clone().map(RawMember::from_value))
    }

    fn name(&self) -> &str {
        "fixture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_stated_reason_nested() {
        let body = r#"{"error": {"code": "API_KEY_INVALID", "message": "An invalid api_key was supplied."}}"#;
        assert_eq!(stated_reason(body).as_deref(), Some("An invalid api_key was supplied."));
    }

    #[test]
    fn test_stated_reason_flat_and_missing() {
        assert_eq!(stated_reason(r#"{"message": "Rate limited"}"#).as_deref(), Some("Rate limited"));
        assert_eq!(stated_reason(r#"{"error": "Bad key"}"#).as_deref(), Some("Bad key"));
        assert_eq!(stated_reason("<html>oops</html>"), None);
        assert_eq!(stated_reason(""), None);
    }

    #[test]
    fn test_response_without_members_is_empty() {
        let page: MemberListResponse = serde_json::from_value(json!({"members": null})).unwrap();
        assert!(page.into_raw_members().is_empty());

        let page: MemberListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(page.into_raw_members().is_empty());
    }

    #[test]
    fn test_api_client_requires_key() {
        let result = CongressApi::new(ApiConfig::new(None));
        assert!(matches!(result, Err(ChartError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_fixture_source_counts_calls() {
        let source = FixtureSource::new(FixtureFile {
            house: vec![json!({"name": "A"}), json!({"name": "B"})],
            senate: vec![],
            vice_president: None,
        });

        let house = source.fetch_members(Chamber::House).await.unwrap();
        assert_eq!(house.len(), 2);
        assert_eq!(source.member_calls(), 1);
        assert!(source.fetch_vice_president().await.unwrap().is_none());
        assert_eq!(source.vice_president_calls(), 1);
    }

    #[test]
    fn test_fixture_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"senate": [{{"name": "S", "partyName": "Republican"}}], "vicePresident": {{"firstName": "V", "lastName": "P"}}}}"#
        )
        .unwrap();

        let source = FixtureSource::load(file.path()).unwrap();
        assert_eq!(source.fixture.senate.len(), 1);
        assert!(source.fixture.house.is_empty());
        assert!(source.fixture.vice_president.is_some());
    }

    #[test]
    fn test_fixture_load_missing_file() {
        let err = FixtureSource::load(Path::new("/nonexistent/fixture.json")).err().unwrap();
        assert!(err.to_string().contains("Failed to read fixture"));
    }
}
