//! Jobmatch - job recommendation service
//!
//! This library ranks a job corpus against a job seeker's profile. It asks an
//! external language model for the top matches and falls back to a
//! deterministic weighted scorer whenever that call fails or returns unusable
//! output.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{RecommendationEngine, Recommender, LlmRecommender, FallbackRecommender, MAX_RECOMMENDATIONS};
pub use crate::models::{UserProfile, JobPosting, JobType, PreferredJobType, MatchResult, FallbackWeights};
