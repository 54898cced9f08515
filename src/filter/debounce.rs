use crate::alphabet::Letter;

use super::Filter;

/// Suppresses classification flicker by requiring a result to repeat before it is reported.
///
/// A new raw result only replaces the reported result after it was pushed `frames` times in a row.
/// This applies to "no letter" ([`None`]) as well, so a single dropped frame does not clear the
/// current letter either.
#[derive(Debug, Clone)]
pub struct Debounce {
    frames: usize,
    candidate: Option<Letter>,
    /// Number of consecutive pushes of `candidate`.
    streak: usize,
    stable: Option<Letter>,
}

impl Debounce {
    /// Creates a filter that reports a result once it was seen in `frames` consecutive frames.
    ///
    /// # Panics
    ///
    /// This method will panic if `frames` is 0.
    pub fn new(frames: usize) -> Self {
        assert!(frames > 0, "`Debounce` needs a window of at least 1 frame");
        Self {
            frames,
            candidate: None,
            streak: 0,
            stable: None,
        }
    }

    /// Returns the currently reported result.
    pub fn current(&self) -> Option<Letter> {
        self.stable
    }
}

impl Filter<Option<Letter>> for Debounce {
    fn push(&mut self, value: Option<Letter>) -> Option<Letter> {
        if self.streak > 0 && value == self.candidate {
            self.streak = self.streak.saturating_add(1);
        } else {
            self.candidate = value;
            self.streak = 1;
        }

        if self.streak >= self.frames && self.stable != self.candidate {
            log::debug!(
                "stable result changed: {:?} -> {:?}",
                self.stable,
                self.candidate
            );
            self.stable = self.candidate;
        }

        self.stable
    }

    fn reset(&mut self) {
        self.candidate = None;
        self.streak = 0;
        self.stable = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce() {
        let mut debounce = Debounce::new(3);
        assert_eq!(debounce.push(Some(Letter::Alef)), None);
        assert_eq!(debounce.push(Some(Letter::Alef)), None);
        assert_eq!(debounce.push(Some(Letter::Alef)), Some(Letter::Alef));

        // a flicker doesn't change the reported letter
        assert_eq!(debounce.push(Some(Letter::Ba)), Some(Letter::Alef));
        assert_eq!(debounce.push(None), Some(Letter::Alef));
        assert_eq!(debounce.push(Some(Letter::Alef)), Some(Letter::Alef));

        assert_eq!(debounce.push(None), Some(Letter::Alef));
        assert_eq!(debounce.push(None), Some(Letter::Alef));
        assert_eq!(debounce.push(None), None);
        assert_eq!(debounce.current(), None);
    }

    #[test]
    fn test_single_frame_passes_through() {
        let mut debounce = Debounce::new(1);
        for value in [Some(Letter::Lam), None, Some(Letter::Waw), Some(Letter::Waw)] {
            assert_eq!(debounce.push(value), value);
        }
    }

    #[test]
    fn test_reset() {
        let mut debounce = Debounce::new(2);
        debounce.push(Some(Letter::Ha));
        debounce.push(Some(Letter::Ha));
        assert_eq!(debounce.current(), Some(Letter::Ha));

        debounce.reset();
        assert_eq!(debounce.current(), None);
        assert_eq!(debounce.push(Some(Letter::Ha)), None);
    }

    #[test]
    #[should_panic]
    fn test_zero_frames() {
        Debounce::new(0);
    }
}
