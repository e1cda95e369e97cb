//! Gesture module - fist / open-palm detection from hand landmarks
//!
//! Re-exports only. All logic in submodules.

mod bend;
mod classifier;
mod error;
pub mod landmark;
mod model;

#[cfg(test)]
mod fixtures;

pub use bend::{finger_bend, finger_bends, finger_reach, Finger, TRACKED_FINGERS};
pub use classifier::{
    classify, classify_frame, try_classify,
    GestureClassifier, GestureThresholds,
    FIST_BEND_THRESHOLD, OPEN_BEND_THRESHOLD,
};
pub use error::GestureError;
pub use landmark::{HandLandmark, HandLandmarks, HAND_LANDMARK_COUNT};
pub use model::{HandGesture, GESTURE_LABELS};
