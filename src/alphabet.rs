//! Mapping from hand poses to letters.
//!
//! The mapping is an ordered [`RuleTable`]. Each [`Rule`] pairs a [`Pattern`] over the five finger
//! states with the [`Letter`] it produces, and the first rule whose pattern matches wins. Poses not
//! matched by any rule are unrecognized.

use std::fmt;

use crate::hand::finger::{Finger, HandPose};

/// The letters the built-in table can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    Alef,
    Ba,
    Jim,
    Dal,
    Ha,
    Waw,
    Ya,
    Lam,
    Mim,
    Nun,
    Ta,
    Sin,
    Kaf,
    Shin,
    Ra,
    Zay,
}

impl Letter {
    /// Returns the letter as it is written.
    pub fn as_str(self) -> &'static str {
        match self {
            Letter::Alef => "أ",
            Letter::Ba => "ب",
            Letter::Jim => "ج",
            Letter::Dal => "د",
            Letter::Ha => "ه",
            Letter::Waw => "و",
            Letter::Ya => "ي",
            Letter::Lam => "ل",
            Letter::Mim => "م",
            Letter::Nun => "ن",
            Letter::Ta => "ت",
            Letter::Sin => "س",
            Letter::Kaf => "ك",
            Letter::Shin => "ش",
            Letter::Ra => "ر",
            Letter::Zay => "ز",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirement a [`Pattern`] places on a single finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Req {
    /// The finger must be extended.
    Up,
    /// The finger must be flexed.
    Down,
    /// The finger may be in either state.
    Any,
}

impl Req {
    #[inline]
    fn accepts(self, extended: bool) -> bool {
        match self {
            Req::Up => extended,
            Req::Down => !extended,
            Req::Any => true,
        }
    }
}

/// A (possibly partial) description of a [`HandPose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// Indexed by `Finger as usize`.
    reqs: [Req; 5],
}

impl Pattern {
    /// Creates a pattern from per-finger requirements in thumb, index, middle, ring, pinky order.
    pub const fn new(reqs: [Req; 5]) -> Self {
        Self { reqs }
    }

    /// A pattern that matches exactly one pose.
    pub fn exact(pose: HandPose) -> Self {
        Self {
            reqs: pose
                .to_array()
                .map(|extended| if extended { Req::Up } else { Req::Down }),
        }
    }

    pub fn requirement(&self, finger: Finger) -> Req {
        self.reqs[finger as usize]
    }

    pub fn matches(&self, pose: HandPose) -> bool {
        Finger::ALL
            .into_iter()
            .all(|finger| self.requirement(finger).accepts(pose.is_extended(finger)))
    }
}

/// A single entry of a [`RuleTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Pattern,
    pub letter: Letter,
}

impl Rule {
    pub const fn new(pattern: Pattern, letter: Letter) -> Self {
        Self { pattern, letter }
    }
}

/// An ordered list of [`Rule`]s, evaluated first-match-wins.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    rules: &'static [Rule],
}

impl RuleTable {
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Returns the index and entry of the first rule matching `pose`.
    pub fn find(&self, pose: HandPose) -> Option<(usize, &'static Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.pattern.matches(pose))
    }

    /// Classifies `pose`, returning [`None`] if no rule matches.
    pub fn classify(&self, pose: HandPose) -> Option<Letter> {
        self.find(pose).map(|(_, rule)| rule.letter)
    }
}

/// The built-in Arabic letter table.
///
/// Every rule pins all five fingers, so no two rules can match the same pose, and 16 of the 32
/// possible poses are left unrecognized.
pub static ARABIC: RuleTable = RuleTable::new(ARABIC_RULES);

const ARABIC_RULES: &[Rule] = {
    use Letter::*;
    use Req::{Down as D, Up as U};
    // thumb, index, middle, ring, pinky
    &[
        // single finger
        Rule::new(Pattern::new([D, U, D, D, D]), Alef),
        // two fingers / peace sign
        Rule::new(Pattern::new([D, U, U, D, D]), Ba),
        Rule::new(Pattern::new([D, U, U, U, D]), Jim),
        // four fingers, thumb folded
        Rule::new(Pattern::new([D, U, U, U, U]), Dal),
        // fist
        Rule::new(Pattern::new([D, D, D, D, D]), Ha),
        // open hand
        Rule::new(Pattern::new([U, U, U, U, U]), Waw),
        Rule::new(Pattern::new([U, D, D, D, D]), Ya),
        // L shape
        Rule::new(Pattern::new([U, U, D, D, D]), Lam),
        // rock sign
        Rule::new(Pattern::new([D, U, D, D, U]), Mim),
        Rule::new(Pattern::new([U, U, U, D, D]), Nun),
        Rule::new(Pattern::new([U, D, D, D, U]), Ta),
        Rule::new(Pattern::new([U, U, D, D, U]), Sin),
        Rule::new(Pattern::new([D, D, U, D, D]), Kaf),
        Rule::new(Pattern::new([D, D, U, U, D]), Shin),
        Rule::new(Pattern::new([D, D, D, U, D]), Ra),
        Rule::new(Pattern::new([D, D, D, D, U]), Zay),
    ]
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_pattern_matches() {
        use Req::*;
        let pattern = Pattern::new([Any, Up, Down, Any, Any]);
        assert!(pattern.matches(HandPose::new(false, true, false, false, false)));
        assert!(pattern.matches(HandPose::new(true, true, false, true, true)));
        assert!(!pattern.matches(HandPose::new(true, true, true, true, true)));
        assert!(!pattern.matches(HandPose::new(false, false, false, false, false)));

        let any = Pattern::new([Any; 5]);
        assert!(HandPose::all().all(|pose| any.matches(pose)));
    }

    #[test]
    fn test_exact_pattern() {
        for pose in HandPose::all() {
            let pattern = Pattern::exact(pose);
            assert_eq!(
                HandPose::all().filter(|&p| pattern.matches(p)).collect::<Vec<_>>(),
                [pose]
            );
        }
    }

    #[test]
    fn test_arabic_is_partition() {
        for pose in HandPose::all() {
            let matching = ARABIC
                .rules()
                .iter()
                .filter(|rule| rule.pattern.matches(pose))
                .count();
            assert!(matching <= 1, "{} rules match {}", matching, pose);
        }

        let recognized = HandPose::all()
            .filter(|&pose| ARABIC.classify(pose).is_some())
            .count();
        assert_eq!(recognized, 16);
    }

    #[test]
    fn test_arabic_letters_unique() {
        let letters = ARABIC
            .rules()
            .iter()
            .map(|rule| rule.letter)
            .collect::<HashSet<_>>();
        assert_eq!(letters.len(), ARABIC.rules().len());
    }

    #[test]
    fn test_first_match_wins() {
        const INDEX_ONLY: Rule = Rule::new(
            Pattern::new([Req::Down, Req::Up, Req::Down, Req::Down, Req::Down]),
            Letter::Alef,
        );
        const INDEX_ANY: Rule = Rule::new(
            Pattern::new([Req::Any, Req::Up, Req::Any, Req::Any, Req::Any]),
            Letter::Lam,
        );
        const PINNED_FIRST: &[Rule] = &[INDEX_ONLY, INDEX_ANY];
        const WILDCARD_FIRST: &[Rule] = &[INDEX_ANY, INDEX_ONLY];

        let index_only = HandPose::new(false, true, false, false, false);
        assert_eq!(
            RuleTable::new(PINNED_FIRST).find(index_only),
            Some((0, &PINNED_FIRST[0]))
        );
        assert_eq!(
            RuleTable::new(WILDCARD_FIRST).classify(index_only),
            Some(Letter::Lam)
        );

        // Poses only the wildcard matches are unaffected by the order.
        let l_shape = HandPose::new(true, true, false, false, false);
        assert_eq!(RuleTable::new(PINNED_FIRST).classify(l_shape), Some(Letter::Lam));
        assert_eq!(RuleTable::new(WILDCARD_FIRST).classify(l_shape), Some(Letter::Lam));
    }

    #[test]
    fn test_empty_table() {
        let table = RuleTable::new(&[]);
        assert!(HandPose::all().all(|pose| table.classify(pose).is_none()));
    }

    #[test]
    fn test_letter_display() {
        assert_eq!(Letter::Alef.to_string(), "أ");
        assert_eq!(Letter::Shin.to_string(), "ش");
    }
}
