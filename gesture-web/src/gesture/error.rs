use thiserror::Error;

use super::bend::Finger;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GestureError {
    #[error("Invalid hand landmark count: {found} (expected 21)")]
    WrongLandmarkCount { found: usize },

    #[error("Hand landmark {index} has a non-finite coordinate")]
    NonFiniteLandmark { index: usize },

    #[error("Degenerate {finger} finger: joint path length {extended} gives no finite bend")]
    DegenerateFinger { finger: Finger, extended: f32 },
}

impl GestureError {
    /// Input was not a hand skeleton at all (as opposed to a hand with bad geometry)
    pub fn is_structural(&self) -> bool {
        matches!(self, GestureError::WrongLandmarkCount { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_wrong_count_is_structural() {
        assert!(GestureError::WrongLandmarkCount { found: 3 }.is_structural());
        assert!(!GestureError::NonFiniteLandmark { index: 8 }.is_structural());
        assert!(!GestureError::DegenerateFinger { finger: Finger::Index, extended: 0.0 }.is_structural());
    }
}
