use crate::models::{JobPosting, MatchResult};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Reason attached to a pick whose `matchReason` is missing or blank
const NO_REASON: &str = "No explanation was provided for this match.";

/// Structural problems with the model's output
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("response contained no JSON array or object")]
    NoJsonFound,

    #[error("response JSON could not be parsed: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("response JSON has an unexpected shape: {0}")]
    UnexpectedShape(String),
}

/// One entry as the model wrote it, before validation
#[derive(Debug, Deserialize)]
struct RawPick {
    #[serde(rename = "jobId", alias = "job_id")]
    job_id: Option<Value>,
    #[serde(rename = "matchScore", alias = "match_score")]
    match_score: Option<Value>,
    #[serde(rename = "matchReason", alias = "match_reason")]
    match_reason: Option<String>,
}

/// A validated recommendation from the model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPick {
    pub job_id: String,
    /// Clamped to 0-100
    pub match_score: u8,
    pub match_reason: String,
}

/// Find the first balanced JSON array or object in free text
///
/// Brackets inside JSON string literals are ignored. Returns `None` if no
/// opening bracket exists or the first region never closes.
pub fn extract_json_region(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c == '[' || c == '{')?;
    let mut stack = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '[' => stack.push(']'),
            '{' => stack.push('}'),
            ']' | '}' => {
                if stack.pop() != Some(ch) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse model output into validated picks
///
/// Accepts a bare array, an object wrapping an array (e.g. `{"matches": [...]}`)
/// or a single pick object. Entries without a usable id or numeric score are
/// dropped.
pub fn parse_picks(content: &str) -> Result<Vec<ModelPick>, ExtractError> {
    let region = extract_json_region(content).ok_or(ExtractError::NoJsonFound)?;
    let value: Value = serde_json::from_str(region)?;

    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(map) if is_pick(&map) => vec![Value::Object(map)],
        Value::Object(map) => unwrap_pick_list(map)?,
        other => {
            return Err(ExtractError::UnexpectedShape(format!(
                "expected an array or object, got {}",
                other
            )))
        }
    };

    let picks = entries
        .into_iter()
        .filter_map(|entry| {
            let raw: RawPick = match serde_json::from_value(entry) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::debug!("Dropping malformed recommendation entry: {}", e);
                    return None;
                }
            };
            validate_pick(raw)
        })
        .collect();

    Ok(picks)
}

/// Object keys a model commonly wraps its pick list in
const LIST_KEYS: [&str; 4] = ["recommendations", "matches", "results", "jobs"];

fn is_pick(map: &Map<String, Value>) -> bool {
    map.contains_key("jobId") || map.contains_key("job_id")
}

/// Pick the field holding the recommendation list out of a wrapper object
///
/// An array holding pick objects wins over sibling arrays regardless of key
/// order. Failing that, a known list key is accepted even when empty.
fn unwrap_pick_list(mut map: Map<String, Value>) -> Result<Vec<Value>, ExtractError> {
    let holds_picks = |entries: &[Value]| {
        entries
            .iter()
            .any(|entry| matches!(entry, Value::Object(obj) if is_pick(obj)))
    };

    let key = map
        .iter()
        .find(|(_, v)| matches!(v, Value::Array(entries) if holds_picks(entries.as_slice())))
        .map(|(k, _)| k.clone())
        .or_else(|| {
            LIST_KEYS
                .iter()
                .find(|k| matches!(map.get(**k), Some(Value::Array(_))))
                .map(|k| k.to_string())
        });

    match key.and_then(|k| map.remove(&k)) {
        Some(Value::Array(entries)) => Ok(entries),
        _ => Err(ExtractError::UnexpectedShape(
            "object holds neither a recommendation list nor a jobId".to_string(),
        )),
    }
}

fn validate_pick(raw: RawPick) -> Option<ModelPick> {
    let job_id = match raw.job_id? {
        Value::String(id) => id,
        Value::Number(n) => n.to_string(),
        other => {
            tracing::debug!("Dropping recommendation with non-scalar jobId: {}", other);
            return None;
        }
    };

    let score = match raw.match_score? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok(),
        _ => None,
    }
    .filter(|s| s.is_finite());

    let Some(score) = score else {
        tracing::debug!("Dropping recommendation for {} without a numeric score", job_id);
        return None;
    };

    let match_reason = raw
        .match_reason
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| NO_REASON.to_string());

    Some(ModelPick {
        job_id,
        match_score: score.round().clamp(0.0, 100.0) as u8,
        match_reason,
    })
}

/// Join picks against the corpus, keeping corpus order for equal scores
///
/// Unknown ids are dropped. If the model names a job twice, its first pick wins.
pub fn join_picks(picks: &[ModelPick], jobs: &[JobPosting]) -> Vec<MatchResult> {
    for pick in picks {
        if !jobs.iter().any(|job| job.id == pick.job_id) {
            tracing::debug!("Model referenced unknown job id {}, ignoring", pick.job_id);
        }
    }

    jobs.iter()
        .filter_map(|job| {
            picks
                .iter()
                .find(|pick| pick.job_id == job.id)
                .map(|pick| MatchResult {
                    job: job.clone(),
                    match_score: pick.match_score,
                    match_reason: pick.match_reason.clone(),
                })
        })
        .collect()
}
