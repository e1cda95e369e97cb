//! Hand landmark intake from JavaScript
//!
//! Accepts either MediaPipe's flat Float32Array (21 × xyz) or its landmark
//! object array and returns the gesture label string for that frame.

use serde::{Deserialize, Deserializer};
use wasm_bindgen::prelude::*;
use crate::gesture::{self, HandGesture, HandLandmark, HandLandmarks, HAND_LANDMARK_COUNT};

/// Floats per hand in the flat layout (21 landmarks × x, y, z)
pub const FLAT_HAND_LEN: usize = HAND_LANDMARK_COUNT * 3;

// ============================================================================
// PARSING
// ============================================================================

/// Parse one hand from a flat `[x0, y0, z0, x1, ...]` array
///
/// Returns None unless the array holds exactly one hand.
pub fn parse_flat_hand(flat_data: &[f32]) -> Option<HandLandmarks> {
    if flat_data.len() != FLAT_HAND_LEN {
        return None;
    }

    let mut landmarks = [HandLandmark::default(); HAND_LANDMARK_COUNT];
    for (lm, xyz) in landmarks.iter_mut().zip(flat_data.chunks_exact(3)) {
        *lm = HandLandmark::new(xyz[0], xyz[1], xyz[2]);
    }
    Some(landmarks)
}

/// Classify a flat frame; empty means no hand, a bad length is logged
pub fn gesture_from_flat(flat_data: &[f32]) -> HandGesture {
    if flat_data.is_empty() {
        return HandGesture::NoHand;
    }
    match parse_flat_hand(flat_data) {
        Some(landmarks) => gesture::classify(&landmarks),
        None => {
            log::warn!(
                "Invalid hand landmark data length: {} (expected {})",
                flat_data.len(),
                FLAT_HAND_LEN
            );
            HandGesture::NoHand
        }
    }
}

/// Classify a MediaPipe landmark array (`null` / `undefined` = no hand)
pub fn gesture_from_objects<'de, D>(deserializer: D) -> Result<HandGesture, D::Error>
where
    D: Deserializer<'de>,
{
    let landmarks = Option::<Vec<HandLandmark>>::deserialize(deserializer)?;
    Ok(gesture::classify_frame(landmarks.as_deref()))
}

// ============================================================================
// WASM API
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 63 values
#[wasm_bindgen]
pub fn classify_hand_gesture(flat_data: &[f32]) -> String {
    gesture_from_flat(flat_data).as_str().to_string()
}

/// Called from JavaScript with MediaPipe's landmark array (or null)
#[wasm_bindgen]
pub fn classify_hand_landmarks(landmarks: JsValue) -> Result<String, JsValue> {
    let gesture = gesture_from_objects(serde_wasm_bindgen::Deserializer::from(landmarks))
        .map_err(|e| JsValue::from_str(&format!("Invalid hand landmarks: {}", e)))?;
    Ok(gesture.as_str().to_string())
}

/// Raw bend scores (index, middle, ring, pinky) for the debug overlay
///
/// Empty when the frame does not hold exactly one hand.
#[wasm_bindgen]
pub fn get_finger_bends(flat_data: &[f32]) -> Vec<f32> {
    parse_flat_hand(flat_data)
        .map(|landmarks| gesture::finger_bends(&landmarks).to_vec())
        .unwrap_or_default()
}
