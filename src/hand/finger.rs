//! Finger state extraction.

use std::fmt;

use itertools::Itertools;

use super::landmark::{HandLandmarks, LandmarkIdx};

/// The five fingers of a hand, in anatomical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// The landmark at the end of the finger.
    pub fn tip(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbTip,
            Finger::Index => LandmarkIdx::IndexFingerTip,
            Finger::Middle => LandmarkIdx::MiddleFingerTip,
            Finger::Ring => LandmarkIdx::RingFingerTip,
            Finger::Pinky => LandmarkIdx::PinkyTip,
        }
    }

    /// The joint the tip is compared against.
    ///
    /// This is the PIP joint for the four fingers. The thumb has no PIP, so its IP joint is used.
    pub fn reference_joint(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbIp,
            Finger::Index => LandmarkIdx::IndexFingerPip,
            Finger::Middle => LandmarkIdx::MiddleFingerPip,
            Finger::Ring => LandmarkIdx::RingFingerPip,
            Finger::Pinky => LandmarkIdx::PinkyPip,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }

    /// Returns whether this finger is extended in `hand`.
    ///
    /// A finger counts as extended when its tip is strictly above its reference joint in image
    /// coordinates, ie. has the smaller Y coordinate. There is no tolerance band, so poses right at
    /// the boundary may flip between frames.
    pub fn is_extended(self, hand: &HandLandmarks) -> bool {
        hand.get(self.tip()).y() < hand.get(self.reference_joint()).y()
    }
}

/// The extended/flexed state of all five fingers of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HandPose {
    /// Indexed by `Finger as usize`.
    extended: [bool; 5],
}

impl HandPose {
    /// Number of distinct poses.
    pub const COUNT: usize = 1 << 5;

    pub const fn new(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        Self {
            extended: [thumb, index, middle, ring, pinky],
        }
    }

    /// Derives the pose of `hand` from its landmarks.
    pub fn from_landmarks(hand: &HandLandmarks) -> Self {
        let pose = Self {
            extended: Finger::ALL.map(|finger| finger.is_extended(hand)),
        };
        log::trace!("finger states: {}", pose);
        pose
    }

    /// Iterates over all [`HandPose::COUNT`] possible poses.
    ///
    /// Bit `n` of the iteration counter is the state of the `n`th finger in [`Finger::ALL`], so the
    /// closed fist comes first and the open hand comes last.
    pub fn all() -> impl Iterator<Item = HandPose> + Clone {
        (0..Self::COUNT).map(|bits| Self {
            extended: [0, 1, 2, 3, 4].map(|n| bits & (1 << n) != 0),
        })
    }

    #[inline]
    pub fn is_extended(&self, finger: Finger) -> bool {
        self.extended[finger as usize]
    }

    /// Returns the states in [`Finger::ALL`] order.
    #[inline]
    pub const fn to_array(self) -> [bool; 5] {
        self.extended
    }

    pub fn extended_fingers(&self) -> impl Iterator<Item = Finger> + '_ {
        Finger::ALL
            .into_iter()
            .filter(|&finger| self.is_extended(finger))
    }
}

impl fmt::Display for HandPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let states = Finger::ALL.iter().format_with(", ", |&finger, f| {
            let state = if self.is_extended(finger) { "up" } else { "down" };
            f(&format_args!("{}={}", finger.name(), state))
        });
        write!(f, "{}", states)
    }
}
