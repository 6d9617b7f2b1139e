use crate::models::{JobRequirements, MatchResult, ResponseAnalysis};
use crate::core::filters::matched_skills;
use rand::Rng;

/// Points awarded per overlapping skill
pub const POINTS_PER_SKILL: i32 = 20;

/// Inclusive bounds of the heuristic score adjustment
pub const ADJUSTMENT_RANGE: (i32, i32) = (-5, 15);

/// Inclusive bounds of the reported response confidence
pub const CONFIDENCE_RANGE: (f64, f64) = (0.70, 0.99);

/// Terms that signal a substantive interview response
pub const RESPONSE_LEXICON: [&str; 6] = ["experience", "team", "lead", "solve", "python", "react"];

const POSITIVE_FEEDBACK: &str = "Good technical understanding.";
const NEUTRAL_FEEDBACK: &str = "Could be more specific.";
const SENTIMENT: &str = "positive";

/// Calculate a match score (0-100) for a candidate skill set against required skills
///
/// Scoring formula:
/// score = clamp(20 * matched + adjustment, 0, 100)
///
/// where `adjustment` is drawn uniformly from [-5, 15], so identical inputs
/// may score differently between calls.
pub fn compute_match_score(candidate_skills: &[String], required_skills: &[String]) -> MatchResult {
    compute_match_score_with(&mut rand::thread_rng(), candidate_skills, required_skills)
}

/// Score a candidate skill set against a job's required skills
///
/// The job description does not influence the score.
pub fn match_against(candidate_skills: &[String], job: &JobRequirements) -> MatchResult {
    compute_match_score(candidate_skills, &job.skills)
}

/// [`compute_match_score`] with a caller-supplied randomness source
pub fn compute_match_score_with<R: Rng>(
    rng: &mut R,
    candidate_skills: &[String],
    required_skills: &[String],
) -> MatchResult {
    let matched = matched_skills(candidate_skills, required_skills);
    let adjustment = rng.gen_range(ADJUSTMENT_RANGE.0..=ADJUSTMENT_RANGE.1);

    MatchResult {
        score: score_from_overlap(matched.len(), adjustment),
        reason: format!(
            "Matched {} core skills. AI analysis suggests good cultural fit.",
            matched.len()
        ),
        matched_skills: matched,
    }
}

/// Clamp `20 * matched_count + adjustment` into [0, 100]
#[inline]
pub fn score_from_overlap(matched_count: usize, adjustment: i32) -> u8 {
    let matched = i32::try_from(matched_count).unwrap_or(i32::MAX);
    let base = matched.saturating_mul(POINTS_PER_SKILL);
    base.saturating_add(adjustment).clamp(0, 100) as u8
}

/// Heuristic analysis of an interview response
///
/// Confidence is random within [0.70, 0.99] regardless of content and the
/// sentiment is always "positive"; only the feedback depends on the text.
pub fn score_response_text(text: &str) -> ResponseAnalysis {
    score_response_text_with(&mut rand::thread_rng(), text)
}

/// [`score_response_text`] with a caller-supplied randomness source
pub fn score_response_text_with<R: Rng>(rng: &mut R, text: &str) -> ResponseAnalysis {
    let hits = keyword_hits(text);

    let feedback = if hits > 2 {
        POSITIVE_FEEDBACK
    } else {
        NEUTRAL_FEEDBACK
    };

    ResponseAnalysis {
        confidence: rng.gen_range(CONFIDENCE_RANGE.0..=CONFIDENCE_RANGE.1),
        sentiment: SENTIMENT.to_string(),
        feedback: feedback.to_string(),
    }
}

/// Number of lexicon terms present in `text` (case-insensitive, each term once)
pub fn keyword_hits(text: &str) -> usize {
    let lowered = text.to_lowercase();
    RESPONSE_LEXICON
        .iter()
        .filter(|term| lowered.contains(*term))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_from_overlap_clamps() {
        assert_eq!(score_from_overlap(0, -5), 0);
        assert_eq!(score_from_overlap(0, 15), 15);
        assert_eq!(score_from_overlap(2, 3), 43);
        assert_eq!(score_from_overlap(5, 15), 100);
        assert_eq!(score_from_overlap(usize::MAX, 15), 100);
    }

    #[test]
    fn test_match_score_bounds() {
        let candidate = skills(&["Rust", "Go", "SQL"]);
        let required = skills(&["rust", "sql"]);

        for _ in 0..200 {
            let result = compute_match_score(&candidate, &required);
            assert_eq!(result.matched_skills, vec!["Rust", "SQL"]);
            assert!((35..=55).contains(&result.score), "score {} out of range", result.score);
        }
    }

    #[test]
    fn test_match_score_with_fixed_rng() {
        // StepRng yielding zero maps to the low end of the range
        let mut rng = StepRng::new(0, 0);
        let result = compute_match_score_with(&mut rng, &skills(&["Go"]), &skills(&["Go"]));
        assert_eq!(result.score, 15);
        assert_eq!(result.reason, "Matched 1 core skills. AI analysis suggests good cultural fit.");
    }

    #[test]
    fn test_empty_inputs() {
        let result = compute_match_score(&[], &skills(&["Rust"]));
        assert!(result.matched_skills.is_empty());
        assert!(result.score <= 15);

        let result = compute_match_score(&skills(&["Rust"]), &[]);
        assert!(result.matched_skills.is_empty());
        assert!(result.score <= 15);
    }

    #[test]
    fn test_match_against_ignores_description() {
        let job = JobRequirements {
            skills: skills(&["Go", "Kubernetes"]),
            description: "Rust Rust Rust".to_string(),
        };

        let result = match_against(&skills(&["Rust", "Go"]), &job);
        assert_eq!(result.matched_skills, vec!["Go"]);
    }

    #[test]
    fn test_keyword_hits() {
        assert_eq!(keyword_hits(""), 0);
        assert_eq!(keyword_hits("I LEAD a Team"), 2);
        assert_eq!(keyword_hits("team team team"), 1);
    }

    #[test]
    fn test_response_feedback_threshold() {
        let positive = score_response_text("My experience leading a team to solve problems");
        assert_eq!(positive.feedback, POSITIVE_FEEDBACK);

        let neutral = score_response_text("I worked with a team on python");
        assert_eq!(neutral.feedback, NEUTRAL_FEEDBACK);
        assert_eq!(neutral.sentiment, "positive");
    }

    #[test]
    fn test_confidence_bounds() {
        for _ in 0..200 {
            let analysis = score_response_text("anything");
            assert!(analysis.confidence >= 0.70 && analysis.confidence <= 0.99);
        }
    }
}
