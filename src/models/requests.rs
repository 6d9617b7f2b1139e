use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::JobRequirements;

/// Request to score a candidate skill set against job requirements
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(max = 100), custom(function = "validate_skill_labels"))]
    #[serde(
        alias = "candidate_skills",
        alias = "userSkills",
        alias = "user_skills",
        rename = "candidateSkills"
    )]
    pub candidate_skills: Vec<String>,
    #[validate(length(max = 100), custom(function = "validate_skill_labels"))]
    #[serde(alias = "required_skills", rename = "requiredSkills")]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl MatchRequest {
    pub fn requirements(&self) -> JobRequirements {
        JobRequirements {
            skills: self.required_skills.clone(),
            description: self.description.clone(),
        }
    }
}

/// Request to analyze an interview response
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1, max = 20000))]
    pub text: String,
}

/// Query string for candidate search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Request to find candidates near a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyRequest {
    #[serde(default, alias = "githubUsername")]
    pub handle: String,
    #[validate(length(min = 1))]
    pub skill: String,
    #[serde(default, alias = "manualLocation")]
    pub location: Option<String>,
}

fn validate_skill_labels(skills: &[String]) -> Result<(), ValidationError> {
    if skills.iter().any(|s| s.trim().is_empty()) {
        return Err(ValidationError::new("blank_skill"));
    }
    Ok(())
}
