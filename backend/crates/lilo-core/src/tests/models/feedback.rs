use crate::{CoreError, Feedback};

use std::str::FromStr;

#[test]
fn test_feedback_as_str() {
    assert_eq!(Feedback::Liked.as_str(), "liked");
    assert_eq!(Feedback::Disliked.as_str(), "disliked");
    assert_eq!(Feedback::Neutral.as_str(), "neutral");
}

#[test]
fn test_feedback_from_str() {
    assert_eq!(Feedback::from_str("liked").unwrap(), Feedback::Liked);
    assert_eq!(Feedback::from_str("disliked").unwrap(), Feedback::Disliked);
    assert_eq!(Feedback::from_str("neutral").unwrap(), Feedback::Neutral);
}

#[test]
fn test_feedback_from_str_rejects_unknown_value() {
    let result = Feedback::from_str("loved");

    assert!(matches!(result, Err(CoreError::InvalidFeedback { ref value, .. }) if value == "loved"));
}

#[test]
fn test_feedback_serializes_as_snake_case() {
    let json = serde_json::to_string(&Feedback::Disliked).unwrap();
    assert_eq!(json, "\"disliked\"");
}
