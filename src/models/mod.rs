// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{UserProfile, JobPosting, JobType, PreferredJobType, MatchResult, FallbackWeights};
pub use requests::RecommendRequest;
pub use responses::{HealthResponse, ErrorResponse};
