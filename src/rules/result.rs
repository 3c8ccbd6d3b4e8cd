//! Action outcomes.

use serde::{Deserialize, Serialize};

/// How an action ended.
///
/// - `Invalid`: a precondition failed. Nothing changed.
/// - `Failure`: the action was legal but went badly (misplay, hint with no
///   match, empty deck). State may have changed.
/// - `Success`: the action completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
    Invalid,
}

/// Outcome plus the message shown to players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub outcome: Outcome,
    pub message: String,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self::with(Outcome::Success, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::with(Outcome::Failure, message)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::with(Outcome::Invalid, message)
    }

    fn with(outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.outcome == Outcome::Failure
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.outcome == Outcome::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(ActionResult::success("ok").is_success());
        assert!(ActionResult::failure("no").is_failure());
        assert!(ActionResult::invalid("nope").is_invalid());
        assert_eq!(ActionResult::failure("Wrong card!").message, "Wrong card!");
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(ActionResult::invalid("Invalid card index.")).unwrap();
        assert_eq!(json["outcome"], "invalid");
        assert_eq!(json["message"], "Invalid card index.");
    }
}
