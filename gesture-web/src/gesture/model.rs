//! Gesture labels

use serde::{Deserialize, Serialize};

/// Gesture labels (order matches the JS-side `HandGestureType` union)
pub const GESTURE_LABELS: [&str; 4] = ["no_hand", "fist", "open", "transition"];

/// Hand gesture for one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandGesture {
    /// No landmarks supplied
    NoHand,
    /// All tracked fingers curled
    Fist,
    /// All tracked fingers extended
    Open,
    /// Anything in between
    Transition,
}

impl HandGesture {
    pub fn as_str(&self) -> &'static str {
        GESTURE_LABELS[self.index()]
    }

    pub fn index(&self) -> usize {
        match self {
            HandGesture::NoHand => 0,
            HandGesture::Fist => 1,
            HandGesture::Open => 2,
            HandGesture::Transition => 3,
        }
    }

    /// Whether a hand was seen at all
    pub fn has_hand(&self) -> bool {
        !matches!(self, HandGesture::NoHand)
    }
}

impl std::fmt::Display for HandGesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [HandGesture; 4] = [
        HandGesture::NoHand,
        HandGesture::Fist,
        HandGesture::Open,
        HandGesture::Transition,
    ];

    #[test]
    fn test_serde_uses_label_strings() {
        for gesture in ALL {
            let json = serde_json::to_string(&gesture).unwrap();
            assert_eq!(json, format!("\"{}\"", gesture.as_str()));
            let back: HandGesture = serde_json::from_str(&json).unwrap();
            assert_eq!(back, gesture);
        }
    }

    #[test]
    fn test_display_matches_labels() {
        assert_eq!(HandGesture::NoHand.to_string(), "no_hand");
        assert_eq!(HandGesture::Transition.to_string(), "transition");
    }

    #[test]
    fn test_has_hand() {
        assert!(!HandGesture::NoHand.has_hand());
        assert!(HandGesture::Fist.has_hand());
        assert!(HandGesture::Open.has_hand());
    }
}
