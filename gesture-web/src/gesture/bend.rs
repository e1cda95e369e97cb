//! Finger bend score from joint path length
//!
//! A straight finger puts its tip as far from the wrist as the summed
//! wrist→MCP→PIP→TIP path, so the ratio is ~1 and the bend ~0. Curling
//! pulls the tip toward the wrist while the path stays the same length,
//! so the bend rises toward 1.

use super::landmark::{HandLandmarks, INDEX_MCP, MIDDLE_MCP, PINKY_MCP, RING_MCP, WRIST};

/// Offset from a finger's MCP to its PIP
const PIP_OFFSET: usize = 1;

/// Offset from a finger's MCP to its tip
const TIP_OFFSET: usize = 3;

/// The four fingers that take part in classification (thumb excluded)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

/// Tracked fingers in landmark order
pub const TRACKED_FINGERS: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

impl Finger {
    /// Landmark index of the finger's MCP (base) joint
    pub fn base_index(&self) -> usize {
        match self {
            Finger::Index => INDEX_MCP,
            Finger::Middle => MIDDLE_MCP,
            Finger::Ring => RING_MCP,
            Finger::Pinky => PINKY_MCP,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Straight-line tip→wrist distance and the wrist→MCP→PIP→TIP path length
pub fn finger_reach(landmarks: &HandLandmarks, finger: Finger) -> (f32, f32) {
    let b = finger.base_index();
    let wrist = &landmarks[WRIST];
    let base = &landmarks[b];
    let mid = &landmarks[b + PIP_OFFSET];
    let tip = &landmarks[b + TIP_OFFSET];

    let tip_to_wrist = tip.distance(wrist);
    let extended = base.distance(wrist) + mid.distance(base) + tip.distance(mid);

    (tip_to_wrist, extended)
}

/// Bend score for one finger: 0 = extended, 1 = curled
///
/// Not clamped and not guarded: a zero-length joint path yields NaN or
/// infinity.
pub fn finger_bend(landmarks: &HandLandmarks, finger: Finger) -> f32 {
    let (tip_to_wrist, extended) = finger_reach(landmarks, finger);
    1.0 - tip_to_wrist / extended
}

/// Bend scores for index, middle, ring, pinky
pub fn finger_bends(landmarks: &HandLandmarks) -> [f32; 4] {
    TRACKED_FINGERS.map(|finger| finger_bend(landmarks, finger))
}
