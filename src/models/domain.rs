use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Work arrangement offered by a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Remote,
    Onsite,
    Hybrid,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Remote => "remote",
            JobType::Onsite => "onsite",
            JobType::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work arrangement a user is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredJobType {
    Remote,
    Onsite,
    Hybrid,
    #[default]
    Any,
}

impl PreferredJobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredJobType::Remote => "remote",
            PreferredJobType::Onsite => "onsite",
            PreferredJobType::Hybrid => "hybrid",
            PreferredJobType::Any => "any",
        }
    }

    /// True when the preference names exactly this job type (`Any` never does)
    pub fn is_exactly(&self, job_type: JobType) -> bool {
        self.as_str() == job_type.as_str()
    }

    /// True when a job of this type satisfies the preference
    pub fn accepts(&self, job_type: JobType) -> bool {
        *self == PreferredJobType::Any || self.is_exactly(job_type)
    }
}

impl fmt::Display for PreferredJobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job seeker profile used as matching input
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub location: String,
    #[validate(range(min = 0.0))]
    #[serde(rename = "yearsOfExperience", default)]
    pub years_of_experience: f64,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "preferredJobType", default)]
    pub preferred_job_type: PreferredJobType,
}

/// Open job posting from the job corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "jobType")]
    pub job_type: JobType,
}

/// A recommended job with its score and rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub job: JobPosting,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchReason")]
    pub match_reason: String,
}

/// Weights for the local fallback scorer
///
/// A zero `location` weight means the job location is not considered at all,
/// neither in the composite score nor in the generated reason.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackWeights {
    pub skills: f64,
    pub location: f64,
    pub job_type: f64,
}

impl FallbackWeights {
    /// skills 0.6, location 0.2, job type 0.2
    pub fn location_aware() -> Self {
        Self {
            skills: 0.6,
            location: 0.2,
            job_type: 0.2,
        }
    }

    /// skills 0.7, job type 0.3, location ignored
    pub fn skills_and_type() -> Self {
        Self {
            skills: 0.7,
            location: 0.0,
            job_type: 0.3,
        }
    }

    pub fn considers_location(&self) -> bool {
        self.location > 0.0
    }
}

impl Default for FallbackWeights {
    fn default() -> Self {
        Self::location_aware()
    }
}
