use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{JobPosting, UserProfile};

/// Request to rank a job corpus against a profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(nested)]
    pub profile: UserProfile,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
}
