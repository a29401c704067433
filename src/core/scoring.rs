use crate::models::{FallbackWeights, JobPosting, PreferredJobType, UserProfile};
use std::collections::HashSet;

/// Score awarded to a factor that is satisfied
const FULL_MATCH: f64 = 100.0;
/// Score awarded to a job type or location factor that is not satisfied
const PARTIAL_MATCH: f64 = 50.0;

/// Breakdown of a fallback score for one job
#[derive(Debug, Clone, PartialEq)]
pub struct JobScore {
    /// Composite score (0-100)
    pub score: u8,
    pub skill_score: f64,
    pub job_type_score: f64,
    /// `None` when the weights ignore location
    pub location_score: Option<f64>,
    /// Profile skills the job asks for, in profile order
    pub matching_skills: Vec<String>,
}

/// Calculate the fallback match score (0-100) for a job
///
/// Scoring formula:
/// score = round(
///     skill_score * weights.skills +        # share of the job's skills the user has
///     location_score * weights.location +   # 100 if the job is in the user's location, else 50
///     job_type_score * weights.job_type     # 100 if the type fits the preference, else 50
/// )
pub fn calculate_job_score(
    profile: &UserProfile,
    job: &JobPosting,
    weights: &FallbackWeights,
) -> JobScore {
    let (skill_score, matching_skills) = calculate_skill_score(&profile.skills, &job.skills);

    let job_type_score = if profile.preferred_job_type.accepts(job.job_type) {
        FULL_MATCH
    } else {
        PARTIAL_MATCH
    };

    let location_score = weights.considers_location().then(|| {
        if location_matches(&profile.location, &job.location) {
            FULL_MATCH
        } else {
            PARTIAL_MATCH
        }
    });

    let total = skill_score * weights.skills
        + location_score.unwrap_or(0.0) * weights.location
        + job_type_score * weights.job_type;

    JobScore {
        score: total.round().clamp(0.0, 100.0) as u8,
        skill_score,
        job_type_score,
        location_score,
        matching_skills,
    }
}

/// Calculate skill score (0-100)
///
/// Both skill lists are treated as sets with exact, case-sensitive comparison.
/// A job that lists no skills scores 0.
pub fn calculate_skill_score(profile_skills: &[String], job_skills: &[String]) -> (f64, Vec<String>) {
    let required: HashSet<&str> = job_skills.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let matching: Vec<String> = profile_skills
        .iter()
        .filter(|skill| seen.insert(skill.as_str()))
        .filter(|skill| required.contains(skill.as_str()))
        .cloned()
        .collect();

    if required.is_empty() {
        return (0.0, matching);
    }

    let score = matching.len() as f64 / required.len() as f64 * FULL_MATCH;
    (score, matching)
}

/// Case-insensitive check that the job location mentions the user's location
#[inline]
pub fn location_matches(profile_location: &str, job_location: &str) -> bool {
    job_location
        .to_lowercase()
        .contains(&profile_location.to_lowercase())
}

/// Build the human-readable explanation for a fallback score
pub fn describe_match(profile: &UserProfile, job: &JobPosting, score: &JobScore) -> String {
    let mut reason = format!(
        "This job matches {} of your skills",
        score.matching_skills.len()
    );

    if !score.matching_skills.is_empty() {
        reason.push_str(&format!(" ({})", score.matching_skills.join(", ")));
    }

    if profile.preferred_job_type.is_exactly(job.job_type) {
        reason.push_str(&format!(
            " and matches your preferred job type ({})",
            job.job_type
        ));
    } else if profile.preferred_job_type == PreferredJobType::Any {
        reason.push_str(" and you're open to any job type");
    }

    if score.location_score == Some(FULL_MATCH) {
        reason.push_str(". The job is in your preferred location.");
    }

    reason
}
