//! MediaPipe hand landmark layout and point geometry
//!
//! 21 points per hand: wrist at 0, thumb 1-4, then four points
//! (MCP, PIP, DIP, TIP) for each of index, middle, ring and pinky.

use nalgebra::Point3;
use serde::Deserialize;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in one hand skeleton
pub const HAND_LANDMARK_COUNT: usize = 21;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single tracked hand point (normalized coordinates)
///
/// Deserializes from MediaPipe's `{x, y, z, visibility?}` objects; extra
/// fields are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct HandLandmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
    pub z: f32,  // Relative depth
}

/// One complete hand skeleton
pub type HandLandmarks = [HandLandmark; HAND_LANDMARK_COUNT];

impl HandLandmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn point(&self) -> Point3<f32> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Euclidean 3D distance
    pub fn distance(&self, other: &HandLandmark) -> f32 {
        (self.point() - other.point()).norm()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
