//! Synthetic hand poses shared by the unit tests

use super::bend::{Finger, TRACKED_FINGERS};
use super::landmark::{HandLandmark, HandLandmarks, HAND_LANDMARK_COUNT, THUMB_CMC, THUMB_TIP};

/// Fan-out slope of each finger's ray from the wrist (index → pinky)
const FINGER_SLOPES: [f32; 4] = [-0.3, -0.1, 0.1, 0.3];

/// Unit direction of a finger's ray in the xy plane
fn direction(finger: Finger) -> (f32, f32) {
    let slope = FINGER_SLOPES[finger_slot(finger)];
    let len = (1.0 + slope * slope).sqrt();
    (1.0 / len, slope / len)
}

fn finger_slot(finger: Finger) -> usize {
    TRACKED_FINGERS
        .iter()
        .position(|f| *f == finger)
        .unwrap_or_default()
}

fn along(dir: (f32, f32), t: f32) -> HandLandmark {
    HandLandmark::new(dir.0 * t, dir.1 * t, 0.0)
}

/// Wrist at the origin, every finger laid straight along its own ray
pub fn open_hand() -> HandLandmarks {
    let mut hand = [HandLandmark::default(); HAND_LANDMARK_COUNT];
    for (k, i) in (THUMB_CMC..=THUMB_TIP).enumerate() {
        hand[i] = HandLandmark::new(0.05 * (k as f32 + 1.0), -0.4, 0.0);
    }
    for finger in TRACKED_FINGERS {
        let dir = direction(finger);
        let b = finger.base_index();
        hand[b] = along(dir, 0.1);
        hand[b + 1] = along(dir, 0.2);
        hand[b + 2] = along(dir, 0.3);
        hand[b + 3] = along(dir, 0.4);
    }
    hand
}

/// Folds the finger so its tip sits on its MCP (bend = 2/3)
pub fn with_curled(mut hand: HandLandmarks, finger: Finger) -> HandLandmarks {
    let b = finger.base_index();
    hand[b + 3] = hand[b];
    hand
}

/// Tilts the tip sideways off the ray (bend ≈ 0.19)
pub fn with_half_bent(mut hand: HandLandmarks, finger: Finger) -> HandLandmarks {
    let dir = direction(finger);
    let perp = (-dir.1, dir.0);
    let b = finger.base_index();
    hand[b + 3] = HandLandmark::new(
        dir.0 * 0.25 + perp.0 * 0.15,
        dir.1 * 0.25 + perp.1 * 0.15,
        0.0,
    );
    hand
}

/// Every tracked finger curled
pub fn fist_hand() -> HandLandmarks {
    TRACKED_FINGERS
        .iter()
        .fold(open_hand(), |hand, finger| with_curled(hand, *finger))
}
