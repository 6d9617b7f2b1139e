use crate::models::{CandidateProfile, GeneratedCandidate};
use crate::services::source::{with_deadline, SourceError, TextGenerator};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

/// Id of the placeholder record returned when generation fails
pub const PLACEHOLDER_ID: &str = "ai-fallback-1";

/// Score assigned to the placeholder record
pub const PLACEHOLDER_SCORE: u8 = 85;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("text source failed: {0}")]
    Source(#[from] SourceError),

    #[error("generated output is not a JSON array: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("generated output contained no valid records")]
    NoValidRecords,
}

/// Produces plausible candidate records from a generative text source
#[derive(Clone)]
pub struct SyntheticGenerator {
    text: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl SyntheticGenerator {
    pub fn new(text: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { text, timeout }
    }

    /// Generate `count` candidates for `skill` in `location`
    ///
    /// Never fails: on any collaborator or parse failure a single placeholder
    /// record is returned instead.
    pub async fn generate(&self, skill: &str, location: &str, count: usize) -> Vec<CandidateProfile> {
        match self.try_generate(skill, location, count).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!("Synthetic generation failed for {} in {}: {}", skill, location, e);
                vec![placeholder_candidate(skill, location)]
            }
        }
    }

    /// Generate candidates, reporting failure instead of substituting the placeholder
    pub async fn try_generate(
        &self,
        skill: &str,
        location: &str,
        count: usize,
    ) -> Result<Vec<CandidateProfile>, GenerationError> {
        let prompt = build_prompt(skill, location, count);
        let raw = with_deadline(self.timeout, self.text.generate_text(&prompt)).await?;

        let candidates = parse_candidates(&raw)?;
        if candidates.len() != count {
            tracing::debug!("Requested {} synthetic candidates, got {}", count, candidates.len());
        }

        Ok(candidates)
    }
}

/// Instruction asking the model for `count` structured candidate records
pub fn build_prompt(skill: &str, location: &str, count: usize) -> String {
    format!(
        r#"Generate exactly {count} realistic software professional profiles skilled in {skill} and located in or near {location}.
Return ONLY a JSON array with no commentary. Each element must be an object with these fields:
- "id": short unique string
- "name": full name
- "role": job title
- "bio": one sentence professional summary
- "skills": array of 3 to 5 skills, including {skill}
- "experience": years of experience, e.g. "5 years"
- "location": city and region near {location}
- "avatar": avatar image URL
- "score": integer between 75 and 98
- "isVerified": true"#
    )
}

/// Body of the first ```json ... ``` or ``` ... ``` fence, or the trimmed text if unfenced
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(open) = text.find("```") else {
        return text;
    };

    let inner = &text[open + 3..];
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    match inner.find("```") {
        Some(close) => inner[..close].trim(),
        None => inner.trim(),
    }
}

/// Span holding the JSON array in a model reply, tolerating surrounding prose
pub fn extract_json_array(text: &str) -> &str {
    let body = strip_code_fences(text);
    if body.starts_with('[') {
        return body;
    }

    match (body.find('['), body.rfind(']')) {
        (Some(start), Some(end)) if start < end => &body[start..=end],
        _ => body,
    }
}

/// Parse generator output into validated candidate profiles
///
/// The array must parse; individual records that do not match the requested
/// schema (including unverified ones) are dropped. An array with no surviving
/// record is an error.
pub fn parse_candidates(raw: &str) -> Result<Vec<CandidateProfile>, GenerationError> {
    let records: Vec<Value> = serde_json::from_str(extract_json_array(raw))?;

    let candidates: Vec<CandidateProfile> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let generated: GeneratedCandidate = match serde_json::from_value(record) {
                Ok(g) => g,
                Err(e) => {
                    tracing::warn!("Dropping generated record {}: {}", index, e);
                    return None;
                }
            };

            if let Err(e) = generated.validate() {
                tracing::warn!("Dropping generated record {}: {}", index, e);
                return None;
            }

            if !generated.verified {
                tracing::warn!("Dropping generated record {}: not marked verified", index);
                return None;
            }

            Some(generated.into_profile())
        })
        .collect();

    if candidates.is_empty() {
        return Err(GenerationError::NoValidRecords);
    }

    Ok(candidates)
}

/// Deterministic stand-in returned when generation is unavailable
pub fn placeholder_candidate(skill: &str, location: &str) -> CandidateProfile {
    CandidateProfile {
        id: PLACEHOLDER_ID.to_string(),
        name: "AI Candidate".to_string(),
        role: format!("Senior {} Developer", skill),
        skills: vec![skill.to_string()],
        location: location.to_string(),
        verified: true,
        score: PLACEHOLDER_SCORE,
        links: vec![],
        bio: Some(format!("Experienced {} developer based in {}.", skill, location)),
        experience: None,
        avatar: None,
    }
}
