// Unit tests for the scoring engine and local filters

use trace_match::core::{
    filters::{filter_by_term, matched_skills},
    generator::{parse_candidates, placeholder_candidate, strip_code_fences},
    scoring::{compute_match_score, keyword_hits, score_from_overlap, score_response_text},
    static_candidates,
};

fn skills(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_match_score_follows_overlap_formula() {
    let candidate = skills(&["Rust", "Go", "Python", "SQL", "Docker", "AWS"]);

    for k in 0..=6 {
        let required: Vec<String> = candidate[..k].to_vec();
        let low = score_from_overlap(k, -5);
        let high = score_from_overlap(k, 15);

        for _ in 0..50 {
            let result = compute_match_score(&candidate, &required);
            assert_eq!(result.matched_skills.len(), k);
            assert!(
                result.score >= low && result.score <= high,
                "k={} score={} outside [{}, {}]",
                k,
                result.score,
                low,
                high
            );
        }
    }
}

#[test]
fn test_match_score_never_exceeds_bounds() {
    let many: Vec<String> = (0..20).map(|i| format!("skill-{}", i)).collect();

    for _ in 0..100 {
        let result = compute_match_score(&many, &many);
        assert_eq!(result.score, 100);
    }
}

#[test]
fn test_empty_skill_sets() {
    let result = compute_match_score(&[], &[]);
    assert!(result.matched_skills.is_empty());
    assert!(result.score <= 15);
    assert_eq!(result.reason, "Matched 0 core skills. AI analysis suggests good cultural fit.");
}

#[test]
fn test_duplicate_candidate_skills_inflate_overlap() {
    let matched = matched_skills(&skills(&["Go", "go", "GO"]), &skills(&["Go"]));
    assert_eq!(matched.len(), 3);

    let result = compute_match_score(&skills(&["Go", "go", "GO"]), &skills(&["Go"]));
    assert!(result.score >= 55 && result.score <= 75);
}

#[test]
fn test_response_analysis_ranges() {
    for text in ["", "team lead", "experience team lead solve python react"] {
        let analysis = score_response_text(text);
        assert!(analysis.confidence >= 0.70 && analysis.confidence <= 0.99);
        assert_eq!(analysis.sentiment, "positive");

        let positive = analysis.feedback == "Good technical understanding.";
        assert_eq!(positive, keyword_hits(text) > 2, "feedback mismatch for {:?}", text);
    }
}

#[test]
fn test_static_filter_is_case_insensitive() {
    let lower = filter_by_term(static_candidates(), "python");
    let upper = filter_by_term(static_candidates(), "PYTHON");
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 2);

    // Name and role are searched as well as skills
    assert_eq!(filter_by_term(static_candidates(), "rivera").len(), 1);
    assert_eq!(filter_by_term(static_candidates(), "backend engineer").len(), 1);
}

#[test]
fn test_generator_helpers() {
    assert_eq!(strip_code_fences("```json\n[]\n```"), "[]");

    let parsed = parse_candidates(
        r#"[{"name":"Kofi Mensah","role":"Data Engineer","skills":["Python","Spark","Airflow"],"location":"Accra","score":88,"isVerified":true}]"#,
    )
    .unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].location, "Accra");

    let placeholder = placeholder_candidate("Kotlin", "remote");
    assert!(placeholder.verified);
    assert_eq!(placeholder.score, 85);
    assert_eq!(placeholder.skills, vec!["Kotlin"]);
}
