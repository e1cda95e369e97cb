//! Fist / open-palm classification from finger bend scores
//!
//! - All four fingers bent past `fist` → Fist
//! - All four fingers straighter than `open` → Open
//! - Otherwise → Transition
//!
//! Fist is checked before Open, both comparisons are strict.

use super::bend::{finger_reach, TRACKED_FINGERS};
use super::error::GestureError;
use super::landmark::{HandLandmark, HandLandmarks};
use super::model::HandGesture;

/// A finger counts as curled above this bend (tip pulled ~30% toward the wrist)
pub const FIST_BEND_THRESHOLD: f32 = 0.3;

/// A finger counts as extended below this bend (path nearly a straight line)
pub const OPEN_BEND_THRESHOLD: f32 = 0.05;

/// Bend cutoffs for the two definite gestures
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// Every finger must bend more than this for a fist
    pub fist: f32,
    /// Every finger must bend less than this for an open palm
    pub open: f32,
}

impl GestureThresholds {
    pub fn new(fist: f32, open: f32) -> Self {
        Self { fist, open }
    }
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self::new(FIST_BEND_THRESHOLD, OPEN_BEND_THRESHOLD)
    }
}

/// Stateless gesture classifier
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureClassifier {
    thresholds: GestureThresholds,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: GestureThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> GestureThresholds {
        self.thresholds
    }

    /// Map four bend scores (index, middle, ring, pinky) to a gesture
    ///
    /// NaN scores fail both comparisons and land on Transition.
    pub fn gesture_from_bends(&self, bends: &[f32; 4]) -> HandGesture {
        if bends.iter().all(|bend| *bend > self.thresholds.fist) {
            return HandGesture::Fist;
        }
        if bends.iter().all(|bend| *bend < self.thresholds.open) {
            return HandGesture::Open;
        }
        HandGesture::Transition
    }

    /// Classify a complete skeleton, rejecting degenerate fingers
    ///
    /// A finger is degenerate when its bend is not finite, which only
    /// happens for a zero-length joint path. Small hands are fine.
    pub fn classify_hand(&self, landmarks: &HandLandmarks) -> Result<HandGesture, GestureError> {
        if let Some(index) = landmarks.iter().position(|lm| !lm.is_finite()) {
            return Err(GestureError::NonFiniteLandmark { index });
        }

        let mut bends = [0.0; 4];
        for (slot, finger) in TRACKED_FINGERS.iter().enumerate() {
            let (tip_to_wrist, extended) = finger_reach(landmarks, *finger);
            let bend = 1.0 - tip_to_wrist / extended;
            if !bend.is_finite() {
                return Err(GestureError::DegenerateFinger { finger: *finger, extended });
            }
            bends[slot] = bend;
        }

        let gesture = self.gesture_from_bends(&bends);
        log::debug!("bends {:?} -> {}", bends, gesture);
        Ok(gesture)
    }

    /// Classify an untyped landmark sequence
    ///
    /// Empty input is NoHand; anything else must be exactly 21 points.
    pub fn try_classify(&self, landmarks: &[HandLandmark]) -> Result<HandGesture, GestureError> {
        if landmarks.is_empty() {
            return Ok(HandGesture::NoHand);
        }
        let hand = <&HandLandmarks>::try_from(landmarks)
            .map_err(|_| GestureError::WrongLandmarkCount { found: landmarks.len() })?;
        self.classify_hand(hand)
    }

    /// Best-effort classification that never fails
    ///
    /// A wrong landmark count degrades to NoHand. A present hand with
    /// unusable geometry degrades to Transition.
    pub fn classify(&self, landmarks: &[HandLandmark]) -> HandGesture {
        match self.try_classify(landmarks) {
            Ok(gesture) => gesture,
            Err(e) if e.is_structural() => {
                log::warn!("{}", e);
                HandGesture::NoHand
            }
            Err(e) => {
                log::debug!("{}", e);
                HandGesture::Transition
            }
        }
    }
}

/// Classify with the default thresholds
pub fn classify(landmarks: &[HandLandmark]) -> HandGesture {
    GestureClassifier::default().classify(landmarks)
}

/// Classify with the default thresholds, reporting malformed input
pub fn try_classify(landmarks: &[HandLandmark]) -> Result<HandGesture, GestureError> {
    GestureClassifier::default().try_classify(landmarks)
}

/// Classify an optional frame (absent = no hand)
pub fn classify_frame(landmarks: Option<&[HandLandmark]>) -> HandGesture {
    landmarks.map_or(HandGesture::NoHand, classify)
}
