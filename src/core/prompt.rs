use crate::models::{JobPosting, UserProfile};
use serde::{Deserialize, Serialize};

/// Fixed instruction sent as the system message
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful AI career advisor.";

/// A role-tagged chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Build the message list for a recommendation request
pub fn build_messages(profile: &UserProfile, jobs: &[JobPosting]) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::user(build_prompt(profile, jobs)),
    ]
}

/// Build the user prompt embedding the profile and every job in the corpus
pub fn build_prompt(profile: &UserProfile, jobs: &[JobPosting]) -> String {
    let job_sections: Vec<String> = jobs
        .iter()
        .enumerate()
        .map(|(index, job)| format_job(index + 1, job))
        .collect();

    format!(
        "You are an AI career advisor helping match job seekers with appropriate job listings.

User Profile:
- Location: {location}
- Years of Experience: {experience}
- Skills: {skills}
- Preferred Job Type: {job_type}

Available Jobs:
{jobs}

Based on the user's profile, analyze each job and provide the top 3 most suitable matches. For each match, provide:
1. The job ID
2. A match score from 0-100
3. A brief explanation of why this job is a good match for the user

Consider the following factors in your analysis:
- Skill match: How many of the user's skills match the job requirements
- Location match: Is the job in the same location as the user
- Job type match: Does the job type match the user's preference
- Experience level: Is the user's experience appropriate for the job

Return your response in JSON format with an array of objects, each containing jobId, matchScore, and matchReason.
Example:
[
  {{
    \"jobId\": \"job123\",
    \"matchScore\": 85,
    \"matchReason\": \"Strong skill match with 5 overlapping skills. Job type matches preference.\"
  }},
  ...
]
",
        location = profile.location,
        experience = profile.years_of_experience,
        skills = profile.skills.join(", "),
        job_type = profile.preferred_job_type,
        jobs = job_sections.join("\n"),
    )
}

fn format_job(number: usize, job: &JobPosting) -> String {
    format!(
        "Job {number} (ID: {id}):
- Title: {title}
- Company: {company}
- Location: {location}
- Job Type: {job_type}
- Skills Required: {skills}
- Description: {description}
",
        id = job.id,
        title = job.title,
        company = job.company,
        location = job.location,
        job_type = job.job_type,
        skills = job.skills.join(", "),
        description = job.description,
    )
}
