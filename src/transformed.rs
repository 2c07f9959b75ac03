use super::*;

/// A rewritten document together with its rewritten title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformed {
  pub content: String,
  pub title: String,
}
