//! Bridge module - JS ↔ Rust communication
//! 
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod hand_landmarks;

pub use hand_landmarks::{
    // WASM entry points
    classify_hand_gesture,
    classify_hand_landmarks,
    get_finger_bends,
    // Internal API
    gesture_from_flat,
    gesture_from_objects,
    parse_flat_hand,
    // Constants
    FLAT_HAND_LEN,
};
