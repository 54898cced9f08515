//! Per-frame letter recognition from detector output.
//!
//! This is the entry point a host application calls once per camera frame, passing whatever the
//! landmark detector found. Only the first detected hand is looked at.
//!
//! Recognition never fails: no hand, a malformed hand, and an unknown pose all produce "no letter".
//! Callers that need to tell a malformed hand apart can validate it themselves with
//! [`HandLandmarks::new`].

use crate::{
    alphabet::{Letter, RuleTable, ARABIC},
    hand::{finger::HandPose, landmark::HandLandmarks},
    landmark::Landmarks,
};

/// Classifies hand landmarks using a [`RuleTable`].
///
/// This holds no mutable state and may be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct Recognizer {
    table: &'static RuleTable,
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer {
    /// Creates a recognizer using the built-in [`ARABIC`] table.
    pub fn new() -> Self {
        Self::with_table(&ARABIC)
    }

    pub const fn with_table(table: &'static RuleTable) -> Self {
        Self { table }
    }

    /// Maps a [`HandPose`] to a letter.
    pub fn classify(&self, pose: HandPose) -> Option<Letter> {
        let letter = self.table.classify(pose);
        match letter {
            Some(letter) => log::debug!("classified as {}", letter),
            None => log::debug!("unrecognized pose: {}", pose),
        }
        letter
    }

    /// Extracts the finger states of a validated hand and classifies them.
    pub fn classify_hand(&self, hand: &HandLandmarks) -> Option<Letter> {
        self.classify(HandPose::from_landmarks(hand))
    }

    /// Classifies a single, unvalidated landmark collection.
    ///
    /// Returns [`None`] if the collection has fewer than [`HandLandmarks::NUM_LANDMARKS`] entries.
    pub fn classify_landmarks(&self, landmarks: &Landmarks) -> Option<Letter> {
        match HandLandmarks::new(landmarks) {
            Ok(hand) => self.classify_hand(&hand),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    /// Recognizes the letter shown by the first hand in `hands`.
    ///
    /// Additional hands are ignored.
    pub fn recognize(&self, hands: &[Landmarks]) -> Option<Letter> {
        log::trace!("hands detected: {}", hands.len());
        let first = hands.first()?;
        self.classify_landmarks(first)
    }

    /// Like [`Recognizer::recognize`], but renders the result as a string.
    ///
    /// "No letter" is the empty string.
    pub fn recognize_str(&self, hands: &[Landmarks]) -> &'static str {
        self.recognize(hands).map_or("", Letter::as_str)
    }
}

/// Recognizes the first hand in `hands` using the built-in table.
///
/// See [`Recognizer::recognize`].
pub fn recognize(hands: &[Landmarks]) -> Option<Letter> {
    Recognizer::new().recognize(hands)
}

/// Recognizes the first hand in `hands` using the built-in table, returning `""` if there is no
/// letter.
pub fn recognize_str(hands: &[Landmarks]) -> &'static str {
    Recognizer::new().recognize_str(hands)
}
