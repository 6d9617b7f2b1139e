use crate::models::CandidateProfile;

/// Normalized form used for skill comparison: trimmed and lowercased
#[inline]
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Candidate skills that also appear in the required skills
///
/// Membership is case-insensitive and ignores surrounding whitespace. Results
/// keep the candidate's spelling and order; duplicates in the candidate list
/// are each reported.
pub fn matched_skills(candidate_skills: &[String], required_skills: &[String]) -> Vec<String> {
    let required: Vec<String> = required_skills.iter().map(|s| normalize_skill(s)).collect();

    candidate_skills
        .iter()
        .filter(|skill| required.contains(&normalize_skill(skill)))
        .cloned()
        .collect()
}

/// Keep the candidates whose name, role or skills contain `term` (case-insensitive)
///
/// A blank term keeps everything.
pub fn filter_by_term(candidates: Vec<CandidateProfile>, term: &str) -> Vec<CandidateProfile> {
    let term = term.trim();
    if term.is_empty() {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|candidate| candidate.mentions(term))
        .collect()
}
