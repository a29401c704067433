// Unit tests for Jobmatch

use jobmatch::core::{
    extract::{extract_json_region, join_picks, parse_picks},
    scoring::{calculate_job_score, calculate_skill_score, describe_match},
    FallbackRecommender, MAX_RECOMMENDATIONS,
};
use jobmatch::models::{FallbackWeights, JobPosting, JobType, PreferredJobType, UserProfile};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn create_profile(skills: &[&str], preferred: PreferredJobType) -> UserProfile {
    UserProfile {
        location: "Seattle".to_string(),
        years_of_experience: 5.0,
        skills: strings(skills),
        preferred_job_type: preferred,
    }
}

fn create_job(id: &str, skills: &[&str], job_type: JobType, location: &str) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: format!("Job {}", id),
        company: "DataMinds".to_string(),
        location: location.to_string(),
        description: "Analyze datasets".to_string(),
        skills: strings(skills),
        job_type,
    }
}

#[test]
fn test_perfect_skill_overlap_scores_100() {
    let profile = create_profile(&["Python", "SQL"], PreferredJobType::Onsite);
    let job = create_job("ds", &["Python", "SQL"], JobType::Onsite, "Boston, MA");

    let score = calculate_job_score(&profile, &job, &FallbackWeights::skills_and_type());

    assert_eq!(score.skill_score, 100.0);
    assert_eq!(score.job_type_score, 100.0);
    assert_eq!(score.score, 100);
}

#[test]
fn test_no_overlap_open_preference_scores_30() {
    let profile = create_profile(&["COBOL"], PreferredJobType::Any);
    let job = create_job("py", &["Python"], JobType::Hybrid, "Austin, TX");

    let score = calculate_job_score(&profile, &job, &FallbackWeights::skills_and_type());

    assert_eq!(score.skill_score, 0.0);
    assert_eq!(score.job_type_score, 100.0);
    assert_eq!(score.score, 30);
}

#[test]
fn test_location_mismatch_costs_half_the_location_weight() {
    let profile = create_profile(&["Python", "SQL"], PreferredJobType::Remote);
    let here = create_job("here", &["Python", "SQL"], JobType::Remote, "Seattle, WA");
    let there = create_job("there", &["Python", "SQL"], JobType::Remote, "Miami, FL");
    let weights = FallbackWeights::location_aware();

    assert_eq!(calculate_job_score(&profile, &here, &weights).score, 100);
    assert_eq!(calculate_job_score(&profile, &there, &weights).score, 90);
}

#[test]
fn test_skill_score_thirds() {
    let (score, matching) = calculate_skill_score(
        &strings(&["React", "Node.js"]),
        &strings(&["React", "Node.js", "MongoDB"]),
    );

    assert!((score - 66.666).abs() < 0.01);
    assert_eq!(matching, strings(&["React", "Node.js"]));
}

#[test]
fn test_reason_mentions_location_only_when_matching() {
    let profile = create_profile(&["AWS"], PreferredJobType::Hybrid);
    let weights = FallbackWeights::location_aware();
    let job = create_job("ops", &["AWS", "Docker"], JobType::Onsite, "Chicago, IL");

    let score = calculate_job_score(&profile, &job, &weights);
    let reason = describe_match(&profile, &job, &score);

    assert_eq!(reason, "This job matches 1 of your skills (AWS)");
}

#[test]
fn test_fallback_empty_inputs() {
    let fallback = FallbackRecommender::default();
    let profile = create_profile(&[], PreferredJobType::Any);

    assert!(fallback.rank_jobs(&profile, &[]).is_empty());

    let jobs = vec![
        create_job("a", &[], JobType::Remote, "Seattle, WA"),
        create_job("b", &["Go"], JobType::Onsite, "Denver, CO"),
    ];
    let results = fallback.rank_jobs(&profile, &jobs);

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.match_score <= 100));
}

#[test]
fn test_fallback_is_deterministic() {
    let fallback = FallbackRecommender::default();
    let profile = create_profile(&["Python", "Git"], PreferredJobType::Remote);
    let jobs: Vec<JobPosting> = (0..10)
        .map(|i| {
            let skills: &[&str] = if i % 2 == 0 { &["Python", "Git"] } else { &["Java"] };
            create_job(&format!("job{}", i), skills, JobType::Remote, "Seattle, WA")
        })
        .collect();

    let first = fallback.rank_jobs(&profile, &jobs);
    let second = fallback.rank_jobs(&profile, &jobs);

    assert_eq!(first, second);
    assert_eq!(first.len(), MAX_RECOMMENDATIONS);
    assert!(first.windows(2).all(|w| w[0].match_score >= w[1].match_score));
}

#[test]
fn test_model_output_pipeline() {
    let jobs = vec![
        create_job("a", &["Python"], JobType::Remote, "Seattle, WA"),
        create_job("b", &["SQL"], JobType::Onsite, "Boston, MA"),
    ];
    let content = "Sure! Here are my picks:\n```json\n[\n  {\"jobId\": \"b\", \"matchScore\": 64, \"matchReason\": \"SQL fit\"},\n  {\"jobId\": \"ghost\", \"matchScore\": 99, \"matchReason\": \"?\"},\n  {\"jobId\": \"a\", \"matchScore\": 88, \"matchReason\": \"Python fit\"}\n]\n```";

    assert!(extract_json_region(content).unwrap().starts_with('['));

    let picks = parse_picks(content).unwrap();
    assert_eq!(picks.len(), 3);

    let joined = join_picks(&picks, &jobs);
    let ids: Vec<&str> = joined.iter().map(|r| r.job.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(joined[0].match_reason, "Python fit");
}

#[test]
fn test_profile_and_job_wire_format() {
    let profile: UserProfile = serde_json::from_str(
        r#"{"location": "Austin", "yearsOfExperience": 2.5, "skills": ["Go"]}"#,
    )
    .unwrap();
    assert_eq!(profile.preferred_job_type, PreferredJobType::Any);
    assert_eq!(profile.years_of_experience, 2.5);

    let job: JobPosting = serde_json::from_str(
        r#"{"_id": "65f0", "title": "Backend Engineer", "company": "DataSystems",
            "location": "New York, NY", "jobType": "onsite"}"#,
    )
    .unwrap();
    assert_eq!(job.id, "65f0");
    assert_eq!(job.job_type, JobType::Onsite);
    assert!(job.skills.is_empty());

    let invalid = serde_json::from_str::<JobPosting>(
        r#"{"id": "x", "title": "t", "company": "c", "location": "l", "jobType": "freelance"}"#,
    );
    assert!(invalid.is_err());
}
