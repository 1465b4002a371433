use serde::{Deserialize, Serialize};

/// A job record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Short JD excerpt embedded in outreach bodies.
    #[serde(default)]
    pub jd_snippet: Option<String>,
    /// Preferred outreach tone for this role, e.g. "friendly".
    #[serde(default)]
    pub tone: Option<String>,
}
