use crate::core::{extract, prompt, scoring};
use crate::core::extract::ExtractError;
use crate::models::{FallbackWeights, JobPosting, MatchResult, UserProfile};
use crate::services::{LlmClient, LlmError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Maximum number of recommendations returned per request
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Reasons a recommendation strategy can fail
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("text-generation call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("text-generation service returned no content")]
    EmptyResponse,

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// A strategy that ranks a job corpus for a profile
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Rank the jobs, returning at most `MAX_RECOMMENDATIONS` results sorted
    /// by descending score
    async fn recommend(
        &self,
        profile: &UserProfile,
        jobs: &[JobPosting],
    ) -> Result<Vec<MatchResult>, RecommendError>;
}

/// Sort by score (descending, stable) and keep the top results
fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    results.truncate(MAX_RECOMMENDATIONS);
    results
}

/// Primary strategy: asks an external language model to rank the jobs
pub struct LlmRecommender {
    client: LlmClient,
}

impl LlmRecommender {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Recommender for LlmRecommender {
    fn name(&self) -> &str {
        "llm"
    }

    async fn recommend(
        &self,
        profile: &UserProfile,
        jobs: &[JobPosting],
    ) -> Result<Vec<MatchResult>, RecommendError> {
        let messages = prompt::build_messages(profile, jobs);
        let content = self.client.complete(&messages).await?;

        if content.trim().is_empty() {
            return Err(RecommendError::EmptyResponse);
        }

        let picks = extract::parse_picks(&content)?;
        tracing::debug!("Model returned {} usable picks", picks.len());

        Ok(rank(extract::join_picks(&picks, jobs)))
    }
}

/// Fallback strategy: deterministic local weighted scoring
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackRecommender {
    weights: FallbackWeights,
}

impl FallbackRecommender {
    pub fn new(weights: FallbackWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &FallbackWeights {
        &self.weights
    }

    /// Score every job and return the top matches. Never fails.
    pub fn rank_jobs(&self, profile: &UserProfile, jobs: &[JobPosting]) -> Vec<MatchResult> {
        let results = jobs
            .iter()
            .map(|job| {
                let score = scoring::calculate_job_score(profile, job, &self.weights);
                MatchResult {
                    job: job.clone(),
                    match_score: score.score,
                    match_reason: scoring::describe_match(profile, job, &score),
                }
            })
            .collect();

        rank(results)
    }
}

#[async_trait]
impl Recommender for FallbackRecommender {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn recommend(
        &self,
        profile: &UserProfile,
        jobs: &[JobPosting],
    ) -> Result<Vec<MatchResult>, RecommendError> {
        Ok(self.rank_jobs(profile, jobs))
    }
}

/// Main recommendation orchestrator
///
/// Tries the primary strategy first; any failure is logged and answered by
/// the fallback scorer, so callers always receive a (possibly empty) list.
#[derive(Clone)]
pub struct RecommendationEngine {
    primary: Arc<dyn Recommender>,
    fallback: FallbackRecommender,
}

impl RecommendationEngine {
    pub fn new(primary: Arc<dyn Recommender>, fallback: FallbackRecommender) -> Self {
        Self { primary, fallback }
    }

    pub fn fallback(&self) -> &FallbackRecommender {
        &self.fallback
    }

    /// Recommend up to three jobs for a profile
    pub async fn recommend(&self, profile: &UserProfile, jobs: &[JobPosting]) -> Vec<MatchResult> {
        match self.primary.recommend(profile, jobs).await {
            Ok(results) => {
                tracing::info!(
                    "Strategy '{}' produced {} recommendations",
                    self.primary.name(),
                    results.len()
                );
                results
            }
            Err(e) => {
                tracing::warn!(
                    "Strategy '{}' failed, falling back to local scoring: {}",
                    self.primary.name(),
                    e
                );
                self.fallback.rank_jobs(profile, jobs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobType, PreferredJobType};

    struct FailingRecommender;

    #[async_trait]
    impl Recommender for FailingRecommender {
        fn name(&self) -> &str {
            "failing"
        }

        async fn recommend(
            &self,
            _profile: &UserProfile,
            _jobs: &[JobPosting],
        ) -> Result<Vec<MatchResult>, RecommendError> {
            Err(RecommendError::EmptyResponse)
        }
    }

    fn create_profile(skills: &[&str], preferred: PreferredJobType) -> UserProfile {
        UserProfile {
            location: "Seattle".to_string(),
            years_of_experience: 3.0,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            preferred_job_type: preferred,
        }
    }

    fn create_job(id: &str, skills: &[&str], job_type: JobType) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: format!("Job {}", id),
            company: "TechCorp".to_string(),
            location: "Seattle, WA".to_string(),
            description: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            job_type,
        }
    }

    #[test]
    fn test_rank_is_stable_and_bounded() {
        let fallback = FallbackRecommender::new(FallbackWeights::skills_and_type());
        let profile = create_profile(&["Rust"], PreferredJobType::Any);
        let jobs: Vec<JobPosting> = (0..5)
            .map(|i| create_job(&i.to_string(), &["Go"], JobType::Remote))
            .collect();

        let results = fallback.rank_jobs(&profile, &jobs);

        assert_eq!(results.len(), MAX_RECOMMENDATIONS);
        let ids: Vec<&str> = results.iter().map(|r| r.job.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_fallback_orders_by_score() {
        let fallback = FallbackRecommender::default();
        let profile = create_profile(&["Python", "SQL"], PreferredJobType::Remote);
        let jobs = vec![
            create_job("none", &["Java"], JobType::Onsite),
            create_job("both", &["Python", "SQL"], JobType::Remote),
            create_job("half", &["Python", "Docker"], JobType::Remote),
        ];

        let results = fallback.rank_jobs(&profile, &jobs);

        let ids: Vec<&str> = results.iter().map(|r| r.job.id.as_str()).collect();
        assert_eq!(ids, vec!["both", "half", "none"]);
        assert_eq!(results[0].match_score, 100);
    }

    #[test]
    fn test_fallback_trait_call_never_fails() {
        let fallback = FallbackRecommender::default();
        let profile = create_profile(&[], PreferredJobType::Hybrid);

        let result = tokio_test::block_on(fallback.recommend(&profile, &[]));

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_engine_falls_back_on_primary_failure() {
        let fallback = FallbackRecommender::default();
        let engine = RecommendationEngine::new(Arc::new(FailingRecommender), fallback);
        let profile = create_profile(&["Python"], PreferredJobType::Any);
        let jobs = vec![
            create_job("a", &["Python"], JobType::Remote),
            create_job("b", &["Go"], JobType::Onsite),
        ];

        let results = engine.recommend(&profile, &jobs).await;

        assert_eq!(results, fallback.rank_jobs(&profile, &jobs));
    }
}
