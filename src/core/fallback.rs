use crate::models::CandidateProfile;

/// Built-in candidate set served when browsing or when every source fails
pub fn static_candidates() -> Vec<CandidateProfile> {
    vec![
        candidate(
            "static-1",
            "Sarah Chen",
            "Senior React Developer",
            &["React", "TypeScript", "Node.js", "GraphQL"],
            "San Francisco, CA",
            "6 years",
            96,
        ),
        candidate(
            "static-2",
            "Marcus Johnson",
            "Backend Engineer",
            &["Go", "Kubernetes", "PostgreSQL", "gRPC"],
            "Austin, TX",
            "8 years",
            91,
        ),
        candidate(
            "static-3",
            "Priya Patel",
            "Full Stack Developer",
            &["Python", "Django", "React", "AWS"],
            "Bangalore, India",
            "5 years",
            88,
        ),
        candidate(
            "static-4",
            "Alex Rivera",
            "Machine Learning Engineer",
            &["Python", "PyTorch", "TensorFlow", "MLOps"],
            "Remote",
            "4 years",
            84,
        ),
    ]
}

fn candidate(
    id: &str,
    name: &str,
    role: &str,
    skills: &[&str],
    location: &str,
    experience: &str,
    score: u8,
) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        location: location.to_string(),
        verified: true,
        score,
        links: vec![],
        bio: Some(format!("{} based in {}.", role, location)),
        experience: Some(experience.to_string()),
        avatar: None,
    }
}
