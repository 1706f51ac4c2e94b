use serde::{Deserialize, Serialize};

/// A single to-do entry. Ids start at 1 and are unique within a collection;
/// `created_at` is an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}
