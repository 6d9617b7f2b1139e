use serde::{Deserialize, Serialize};
use validator::Validate;

/// Candidate profile as returned by any search tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "isVerified", default)]
    pub verified: bool,
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl CandidateProfile {
    /// Case-insensitive substring test over name, role and skills
    pub fn mentions(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.role.to_lowercase().contains(&needle)
            || self
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&needle))
    }
}

/// Requirements a candidate is scored against
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequirements {
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Result of scoring one candidate skill set against requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub reason: String,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
}

/// Heuristic read of a free-text interview response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseAnalysis {
    pub confidence: f64,
    pub sentiment: String,
    pub feedback: String,
}

/// Candidate search parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl SearchQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn skill_filter(&self) -> Option<&str> {
        non_blank(self.skill.as_deref())
    }

    pub fn location_filter(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    /// True when there is nothing to search for and the caller is browsing
    pub fn is_browse(&self) -> bool {
        self.text.trim().is_empty() && self.skill_filter().is_none() && self.location_filter().is_none()
    }

    /// Term used by the degraded tiers: the skill filter if set, else the free text
    pub fn primary_term(&self) -> &str {
        self.skill_filter().unwrap_or_else(|| self.text.trim())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Which source produced a set of search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTier {
    Live,
    Synthetic,
    StaticFallback,
    Browse,
}

impl SearchTier {
    /// Only live results come from a real external source
    pub fn is_authoritative(&self) -> bool {
        matches!(self, SearchTier::Live)
    }
}

/// Tagged candidate list returned by the orchestrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub tier: SearchTier,
    pub candidates: Vec<CandidateProfile>,
}

impl SearchOutcome {
    pub fn new(tier: SearchTier, candidates: Vec<CandidateProfile>) -> Self {
        Self { tier, candidates }
    }
}

/// Result of a location-scoped candidate search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyResult {
    pub success: bool,
    pub location: Option<String>,
    pub tier: Option<SearchTier>,
    pub candidates: Vec<CandidateProfile>,
    pub message: String,
}

/// Raw record shape requested from the text generator
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeneratedCandidate {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[validate(length(min = 3, max = 5))]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[validate(range(min = 75, max = 98))]
    pub score: i64,
    #[serde(rename = "isVerified", alias = "verified", default)]
    pub verified: bool,
}

impl GeneratedCandidate {
    pub fn into_profile(self) -> CandidateProfile {
        CandidateProfile {
            id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: self.name,
            role: self.role,
            skills: self.skills,
            location: self.location,
            verified: self.verified,
            score: self.score.clamp(0, 100) as u8,
            links: vec![],
            bio: self.bio,
            experience: self.experience,
            avatar: self.avatar,
        }
    }
}
