//! Gesture Web - fist / open-palm detection from MediaPipe hand landmarks
//!
//! Classification lives in `gesture`, the JS-callable functions in the
//! bridge (re-exported here). This file only wires up the start hook.

mod bridge;
pub mod gesture;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    classify_hand_gesture, classify_hand_landmarks, get_finger_bends,
    gesture_from_flat, gesture_from_objects, parse_flat_hand, FLAT_HAND_LEN,
};
pub use gesture::{classify, try_classify, GestureError, HandGesture, HandLandmark};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("✅ Hand gesture classifier loaded");
}
