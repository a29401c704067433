// Core algorithm exports
pub mod extract;
pub mod prompt;
pub mod recommender;
pub mod scoring;

pub use extract::{extract_json_region, parse_picks, join_picks, ExtractError, ModelPick};
pub use prompt::{build_messages, build_prompt, ChatMessage};
pub use recommender::{
    Recommender, RecommendationEngine, LlmRecommender, FallbackRecommender, RecommendError,
    MAX_RECOMMENDATIONS,
};
pub use scoring::{calculate_job_score, describe_match, JobScore};
