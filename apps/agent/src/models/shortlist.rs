use serde::{Deserialize, Serialize};

/// A named, ordered set of candidate references.
/// The name is the identity: saving under an existing name overwrites.
/// Survives across sessions via the data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortlist {
    pub name: String,
    pub candidate_ids: Vec<String>,
}
