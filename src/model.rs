//! Request and response envelope types
//!
//! Requests wrap their payload in `{"data": {...}}`; an empty payload tells
//! the server to compute from stored data. Responses are deserialized
//! defensively: every nested field is optional, and fields the server may
//! emit as either a single value or a list go through [`OneOrMany`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sample::{self, ActivityRecord, DEFAULT_HISTORY_DAYS};

/// Request envelope: `{"data": <payload>}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Payload for `POST /ai/insights`.
#[derive(Debug, Default, Serialize)]
pub struct InsightsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_metrics: Option<ActivityMetrics>,
}

#[derive(Debug, Serialize)]
pub struct ActivityMetrics {
    pub daily_steps: u32,
    pub active_minutes: u32,
    pub distance: f64,
}

impl InsightsRequest {
    /// Fixed sample metrics for `--sample-data` runs.
    pub fn sample() -> Self {
        Self {
            activity_metrics: Some(ActivityMetrics {
                daily_steps: 8542,
                active_minutes: 35,
                distance: 6.83,
            }),
        }
    }

    /// Empty payload: the server computes from stored data.
    pub fn stored() -> Self {
        Self::default()
    }
}

/// Payload for `POST /ai/predict`.
#[derive(Debug, Default, Serialize)]
pub struct PredictionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_history: Option<Vec<ActivityRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Goals>,
}

#[derive(Debug, Serialize)]
pub struct Goals {
    pub daily_steps: u32,
    pub weekly_active_minutes: u32,
}

impl PredictionsRequest {
    /// 14 days of synthetic history plus fixed goals.
    pub fn sample() -> Self {
        Self {
            activity_history: Some(sample::activity_history(DEFAULT_HISTORY_DAYS).collect()),
            goals: Some(Goals {
                daily_steps: 10_000,
                weekly_active_minutes: 150,
            }),
        }
    }

    /// Empty payload: the server computes from stored data.
    pub fn stored() -> Self {
        Self::default()
    }
}

/// Response envelope: `{"data": {...}}`.
#[derive(Debug, Default, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub data: ResponseData,
}

impl ResponseEnvelope {
    /// Parse a response body, degrading to the empty envelope when the body
    /// does not match the expected shape. HTTP 200 is the only success
    /// criterion; an unparseable body renders as "no data found".
    pub fn parse(body: &str) -> ResponseData {
        serde_json::from_str::<ResponseEnvelope>(body)
            .map(|envelope| envelope.data)
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseData {
    #[serde(default)]
    pub is_fallback: bool,
    #[serde(default)]
    pub insights: Option<Insights>,
    #[serde(default)]
    pub predictions: Option<Predictions>,
}

#[derive(Debug, Deserialize)]
pub struct Insights {
    pub summary: Option<Value>,
    pub health_impact: Option<OneOrMany<Value>>,
    pub recommendations: Option<OneOrMany<Value>>,
    pub next_steps: Option<OneOrMany<Value>>,
}

#[derive(Debug, Deserialize)]
pub struct Predictions {
    pub goal_achievement: Option<GoalAchievement>,
    pub anomaly_detection: Option<AnomalyDetection>,
    #[serde(default)]
    pub future_projections: Vec<Projection>,
    pub actionable_insights: Option<OneOrMany<Value>>,
}

#[derive(Debug, Deserialize)]
pub struct GoalAchievement {
    pub daily_step_goal: Option<Value>,
    pub step_goal_likelihood: Option<Value>,
    pub weekly_active_minutes_goal: Option<Value>,
    pub active_minutes_goal_likelihood: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct AnomalyDetection {
    /// `None` when the server omitted the list entirely; `Some(vec![])`
    /// when it looked for anomalies and found none.
    pub anomalies: Option<Vec<Anomaly>>,
}

#[derive(Debug, Deserialize)]
pub struct Anomaly {
    pub date: Option<Value>,
    pub reason: Option<Value>,
    pub steps: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct Projection {
    pub date: Option<Value>,
    pub day_of_week: Option<Value>,
    pub projected_steps: Option<Value>,
    pub projected_active_minutes: Option<Value>,
}

/// A field the server may emit as a single value or a sequence.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Many(items) => items.as_slice(),
            OneOrMany::One(item) => std::slice::from_ref(item),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, OneOrMany::Many(items) if items.is_empty())
    }
}

/// Render a possibly-absent scalar field, defaulting to "N/A".
pub fn display(value: Option<&Value>) -> String {
    display_or(value, "N/A")
}

/// Render a possibly-absent scalar field with an explicit default.
pub fn display_or(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
