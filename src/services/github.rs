use crate::models::CandidateProfile;
use crate::services::source::{CandidateSource, ProfileDirectory, SourceError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = concat!("trace-match/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API client
///
/// Serves two collaborator roles:
/// - live candidate search over `/search/users`
/// - declared-location lookup over `/users/{handle}`
pub struct GithubClient {
    base_url: String,
    token: Option<String>,
    per_page: u8,
    client: Client,
}

impl GithubClient {
    /// Create a new GitHub client
    pub fn new(base_url: String, token: Option<String>, per_page: u8, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            token: token.filter(|t| !t.is_empty()),
            per_page,
            client,
        }
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn build_search_query(text: &str, skill: Option<&str>, location: Option<&str>) -> String {
        let mut terms = Vec::new();
        if !text.trim().is_empty() {
            terms.push(text.trim().to_string());
        }
        if let Some(skill) = skill {
            terms.push(format!("language:{}", quote_qualifier(skill)));
        }
        if let Some(location) = location {
            terms.push(format!("location:{}", quote_qualifier(location)));
        }
        terms.join(" ")
    }

    fn to_profile(item: &Value, skill: Option<&str>, location: Option<&str>) -> Option<CandidateProfile> {
        let login = item.get("login")?.as_str()?;
        let html_url = item
            .get("html_url")
            .and_then(|u| u.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("https://github.com/{}", login));

        Some(CandidateProfile {
            id: format!("github-{}", login),
            name: login.to_string(),
            role: "GitHub Developer".to_string(),
            skills: skill.map(|s| vec![s.to_string()]).unwrap_or_default(),
            location: location.unwrap_or_default().to_string(),
            verified: false,
            score: 0,
            links: vec![html_url],
            bio: None,
            experience: None,
            avatar: item
                .get("avatar_url")
                .and_then(|a| a.as_str())
                .map(str::to_string),
        })
    }
}

/// Multi-word qualifiers must be quoted for the search syntax
fn quote_qualifier(value: &str) -> String {
    let value = value.trim();
    if value.contains(char::is_whitespace) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

#[async_trait]
impl CandidateSource for GithubClient {
    async fn search(
        &self,
        text: &str,
        skill: Option<&str>,
        location: Option<&str>,
    ) -> Result<Vec<CandidateProfile>, SourceError> {
        let query = Self::build_search_query(text, skill, location);
        let url = format!(
            "{}/search/users?q={}&per_page={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&query),
            self.per_page
        );

        tracing::debug!("Searching users: {}", url);

        let response = self.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "Failed to search users: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let items = json
            .get("items")
            .and_then(|i| i.as_array())
            .ok_or_else(|| SourceError::InvalidResponse("Missing items array".into()))?;

        let profiles: Vec<CandidateProfile> = items
            .iter()
            .filter_map(|item| Self::to_profile(item, skill, location))
            .collect();

        tracing::debug!(
            "User search returned {} profiles (total: {})",
            profiles.len(),
            json.get("total_count").and_then(|t| t.as_u64()).unwrap_or(0)
        );

        Ok(profiles)
    }
}

#[async_trait]
impl ProfileDirectory for GithubClient {
    async fn lookup_location(&self, handle: &str) -> Result<Option<String>, SourceError> {
        let url = format!(
            "{}/users/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(handle)
        );

        tracing::debug!("Fetching profile for handle: {}", handle);

        let response = self.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(SourceError::NotFound(format!("Profile not found for {}", handle)));
            }
            status if !status.is_success() => {
                return Err(SourceError::Api(format!("Failed to fetch profile: {}", status)));
            }
            _ => {}
        }

        let json: Value = response.json().await?;

        Ok(json
            .get("location")
            .and_then(|l| l.as_str())
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string))
    }
}
