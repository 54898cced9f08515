//! Hand landmark layout and validation.

use std::{error::Error, fmt};

use crate::landmark::{Landmark, Landmarks};

/// Names for the hand pose landmarks.
///
/// The numbering follows MediaPipe's hand landmark model, which is also what most other hand
/// landmark detectors emit.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **IP**: Interphalangeal joint, the thumb's only joint between MCP and tip.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl From<LandmarkIdx> for usize {
    #[inline]
    fn from(idx: LandmarkIdx) -> usize {
        idx as usize
    }
}

const NUM_LANDMARKS: usize = 21;

/// The landmarks of one hand, copied out of a detector's [`Landmarks`].
///
/// Detectors may report more than [`HandLandmarks::NUM_LANDMARKS`] points per hand. Only the first
/// [`HandLandmarks::NUM_LANDMARKS`] are copied, so construction never allocates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    positions: [[f32; 3]; NUM_LANDMARKS],
}

impl HandLandmarks {
    /// Number of landmarks making up a hand.
    pub const NUM_LANDMARKS: usize = NUM_LANDMARKS;

    /// Validates that `landmarks` covers every [`LandmarkIdx`].
    pub fn new(landmarks: &Landmarks) -> Result<Self, LandmarkCountError> {
        match landmarks.positions().get(..Self::NUM_LANDMARKS) {
            Some(head) => {
                let mut positions = [[0.0; 3]; Self::NUM_LANDMARKS];
                positions.copy_from_slice(head);
                Ok(Self { positions })
            }
            None => Err(LandmarkCountError {
                found: landmarks.len(),
            }),
        }
    }

    /// Returns the named landmark.
    #[inline]
    pub fn get(&self, idx: LandmarkIdx) -> Landmark {
        Landmark::new(self.positions[usize::from(idx)])
    }

    pub fn positions(&self) -> &[[f32; 3]; NUM_LANDMARKS] {
        &self.positions
    }
}

impl TryFrom<&Landmarks> for HandLandmarks {
    type Error = LandmarkCountError;

    fn try_from(landmarks: &Landmarks) -> Result<Self, Self::Error> {
        Self::new(landmarks)
    }
}

/// Error returned when a landmark collection is too short to describe a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkCountError {
    found: usize,
}

impl LandmarkCountError {
    /// Returns the number of landmarks that was supplied.
    pub fn found(&self) -> usize {
        self.found
    }
}

impl fmt::Display for LandmarkCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "not enough hand landmarks: expected at least {}, got {}",
            HandLandmarks::NUM_LANDMARKS,
            self.found
        )
    }
}

impl Error for LandmarkCountError {}
