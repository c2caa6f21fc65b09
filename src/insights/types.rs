//! Insights request payload types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound insights request.
///
/// The BI frontend sends `projectId`, `topic`, `texts` and `sentiment`.
/// Only `projectId` shapes the downstream call; the rest are carried as
/// opaque JSON and never interpreted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRequest {
    #[serde(default)]
    pub project_id: Option<Value>,
    #[serde(default)]
    pub topic: Value,
    #[serde(default)]
    pub texts: Value,
    #[serde(default)]
    pub sentiment: Value,
}

impl InsightsRequest {
    /// Render the project ID as a URL path segment.
    ///
    /// Accepts a non-empty string or a number; anything else has no sane
    /// path rendering and is rejected upstream with a 400.
    pub fn project_path_segment(&self) -> Option<String> {
        match self.project_id.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The reshaped `{topic, texts, sentiment}` view of the payload.
    pub fn to_project_query(&self) -> ProjectQuery {
        ProjectQuery {
            topic: self.topic.clone(),
            texts: self.texts.clone(),
            sentiment: self.sentiment.clone(),
        }
    }
}

/// Reshaped payload subset, logged for diagnostics.
///
/// The downstream call is a bodiless GET, so this is never sent on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectQuery {
    pub topic: Value,
    pub texts: Value,
    pub sentiment: Value,
}
