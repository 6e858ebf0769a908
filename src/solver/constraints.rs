//! Constraint model built from accumulated feedback
//!
//! Each board position is either pinned to a confirmed letter or must avoid a
//! set of letters. On top of that, letters reported present elsewhere (and
//! not yet pinned anywhere) must occur somewhere in the word.

use crate::core::{GuessedCharacter, Mark};
use rustc_hash::FxHashSet;

/// Constraint on a single board position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionRule {
    /// The position holds exactly this letter
    Pinned(char),
    /// The position holds none of these letters
    Avoid(FxHashSet<char>),
}

impl PositionRule {
    #[inline]
    #[must_use]
    pub fn allows(&self, ch: char) -> bool {
        match self {
            Self::Pinned(pinned) => *pinned == ch,
            Self::Avoid(excluded) => !excluded.contains(&ch),
        }
    }
}

/// Per-position rules plus required letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    rules: Vec<PositionRule>,
    required: Vec<char>,
}

impl ConstraintSet {
    /// Build the constraints implied by `records` for words of `length` letters
    ///
    /// # Examples
    /// ```
    /// use solvify::core::{GuessedCharacter, Mark};
    /// use solvify::solver::ConstraintSet;
    ///
    /// let records = [
    ///     GuessedCharacter::new(0, 'c', Mark::PositionalMatch),
    ///     GuessedCharacter::new(1, 'r', Mark::PresentElsewhere),
    ///     GuessedCharacter::new(2, 'a', Mark::Absent),
    /// ];
    /// let constraints = ConstraintSet::from_records(&records, 5);
    ///
    /// assert!(constraints.matches("corny"));
    /// assert!(!constraints.matches("crony")); // r cannot be at position 1
    /// assert!(!constraints.matches("cloud")); // r is required
    /// assert!(!constraints.matches("carry")); // a is absent
    /// ```
    #[must_use]
    pub fn from_records(records: &[GuessedCharacter], length: usize) -> Self {
        let absent: FxHashSet<char> = records
            .iter()
            .filter(|r| r.mark == Mark::Absent)
            .map(|r| r.character)
            .collect();

        let rules = (0..length)
            .map(|position| {
                let pinned = records
                    .iter()
                    .find(|r| r.position == position && r.mark == Mark::PositionalMatch);

                if let Some(record) = pinned {
                    return PositionRule::Pinned(record.character);
                }

                let mut avoid = absent.clone();
                avoid.extend(
                    records
                        .iter()
                        .filter(|r| r.position == position && r.mark == Mark::PresentElsewhere)
                        .map(|r| r.character),
                );
                PositionRule::Avoid(avoid)
            })
            .collect();

        let pinned_letters: FxHashSet<char> = records
            .iter()
            .filter(|r| r.mark == Mark::PositionalMatch)
            .map(|r| r.character)
            .collect();

        let mut required: Vec<char> = records
            .iter()
            .filter(|r| r.mark == Mark::PresentElsewhere && !pinned_letters.contains(&r.character))
            .map(|r| r.character)
            .collect();
        required.sort_unstable();
        required.dedup();

        Self { rules, required }
    }

    /// Rule for one position, if within the word length
    #[inline]
    #[must_use]
    pub fn rule(&self, position: usize) -> Option<&PositionRule> {
        self.rules.get(position)
    }

    /// Letters that must occur somewhere in the word
    #[inline]
    #[must_use]
    pub fn required(&self) -> &[char] {
        &self.required
    }

    /// Check a folded word against every position rule and required letter
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let mut len = 0;
        for (position, ch) in word.chars().enumerate() {
            match self.rules.get(position) {
                Some(rule) if rule.allows(ch) => len += 1,
                _ => return false,
            }
        }

        len == self.rules.len() && self.required.iter().all(|&ch| word.contains(ch))
    }
}

/// Check a new mark against all earlier records
///
/// Returns a description of the first contradiction found, naming the letter
/// and the 1-based position.
#[must_use]
pub fn find_inconsistency(
    records: &[GuessedCharacter],
    position: usize,
    character: char,
    mark: Mark,
) -> Option<String> {
    let human_position = position + 1;
    let same_letter = || records.iter().filter(move |r| r.character == character);

    if mark.is_present() && same_letter().any(|r| r.mark == Mark::Absent) {
        return Some(format!(
            "Letter '{character}' at position {human_position} was marked as not in word before."
        ));
    }

    if mark == Mark::Absent && same_letter().any(|r| r.mark.is_present()) {
        return Some(format!(
            "Letter '{character}' at position {human_position} was marked as in word before."
        ));
    }

    if let Some(other) = records.iter().find(|r| {
        r.position == position && r.mark == Mark::PositionalMatch && r.character != character
    }) {
        return Some(format!(
            "Letter '{}' was marked as correct at position {human_position} before, so '{character}' cannot be judged there.",
            other.character
        ));
    }

    if mark == Mark::PositionalMatch
        && same_letter().any(|r| r.position == position && r.mark == Mark::PresentElsewhere)
    {
        return Some(format!(
            "Letter '{character}' was marked as not at position {human_position} before."
        ));
    }

    if mark == Mark::PresentElsewhere
        && same_letter().any(|r| r.position == position && r.mark == Mark::PositionalMatch)
    {
        return Some(format!(
            "Letter '{character}' was marked as correct at position {human_position} before."
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(position: usize, character: char, mark: Mark) -> GuessedCharacter {
        GuessedCharacter::new(position, character, mark)
    }

    #[test]
    fn empty_records_match_any_word_of_right_length() {
        let constraints = ConstraintSet::from_records(&[], 5);
        assert!(constraints.matches("crane"));
        assert!(constraints.matches("zzzzz"));
        assert!(!constraints.matches("cran"));
        assert!(!constraints.matches("cranes"));
        assert!(constraints.required().is_empty());
    }

    #[test]
    fn positional_match_pins_position() {
        let constraints = ConstraintSet::from_records(&[rec(2, 'a', Mark::PositionalMatch)], 5);
        assert_eq!(constraints.rule(2), Some(&PositionRule::Pinned('a')));
        assert!(constraints.matches("crane"));
        assert!(!constraints.matches("crone"));
    }

    #[test]
    fn absent_letter_excluded_everywhere_unpinned() {
        let records = [rec(0, 'c', Mark::PositionalMatch), rec(4, 'e', Mark::Absent)];
        let constraints = ConstraintSet::from_records(&records, 5);

        for position in 1..5 {
            assert!(!constraints.rule(position).unwrap().allows('e'));
        }
        assert!(constraints.matches("clown"));
        assert!(!constraints.matches("cheat"));
    }

    #[test]
    fn present_elsewhere_excludes_only_its_position() {
        let constraints = ConstraintSet::from_records(&[rec(0, 's', Mark::PresentElsewhere)], 5);

        assert!(!constraints.rule(0).unwrap().allows('s'));
        assert!(constraints.rule(1).unwrap().allows('s'));
        assert_eq!(constraints.required(), &['s']);
        assert!(constraints.matches("roast"));
        assert!(!constraints.matches("slate"));
        assert!(!constraints.matches("crane"));
    }

    #[test]
    fn pinned_letter_not_required_again() {
        let records = [
            rec(0, 's', Mark::PresentElsewhere),
            rec(4, 's', Mark::PositionalMatch),
        ];
        let constraints = ConstraintSet::from_records(&records, 5);
        assert!(constraints.required().is_empty());
        assert!(constraints.matches("bliss"));
    }

    #[test]
    fn required_letters_are_deduplicated() {
        let records = [
            rec(0, 'r', Mark::PresentElsewhere),
            rec(1, 'r', Mark::PresentElsewhere),
        ];
        let constraints = ConstraintSet::from_records(&records, 5);
        assert_eq!(constraints.required(), &['r']);
    }

    #[test]
    fn rule_out_of_range() {
        let constraints = ConstraintSet::from_records(&[], 5);
        assert!(constraints.rule(5).is_none());
    }

    #[test]
    fn present_after_absent_is_inconsistent() {
        let records = [rec(1, 'a', Mark::Absent)];
        let detail = find_inconsistency(&records, 3, 'a', Mark::PresentElsewhere).unwrap();
        assert!(detail.contains("'a'"));
        assert!(detail.contains("position 4"));
        assert!(find_inconsistency(&records, 3, 'a', Mark::PositionalMatch).is_some());
    }

    #[test]
    fn absent_after_present_is_inconsistent() {
        let records = [rec(0, 'e', Mark::PresentElsewhere)];
        assert!(find_inconsistency(&records, 4, 'e', Mark::Absent).is_some());

        let records = [rec(0, 'e', Mark::PositionalMatch)];
        assert!(find_inconsistency(&records, 4, 'e', Mark::Absent).is_some());
    }

    #[test]
    fn different_pinned_letter_is_inconsistent() {
        let records = [rec(2, 'a', Mark::PositionalMatch)];
        assert!(find_inconsistency(&records, 2, 'o', Mark::Absent).is_some());
        assert!(find_inconsistency(&records, 2, 'o', Mark::PresentElsewhere).is_some());
        assert!(find_inconsistency(&records, 2, 'o', Mark::PositionalMatch).is_some());
    }

    #[test]
    fn pinned_then_present_at_same_position_is_inconsistent() {
        let records = [rec(2, 'a', Mark::PositionalMatch)];
        assert!(find_inconsistency(&records, 2, 'a', Mark::PresentElsewhere).is_some());
        assert!(find_inconsistency(&records, 2, 'a', Mark::PositionalMatch).is_none());
    }

    #[test]
    fn present_then_pinned_at_same_position_is_inconsistent() {
        let records = [rec(1, 'r', Mark::PresentElsewhere)];
        assert!(find_inconsistency(&records, 1, 'r', Mark::PositionalMatch).is_some());
        assert!(find_inconsistency(&records, 3, 'r', Mark::PositionalMatch).is_none());
    }

    #[test]
    fn unrelated_records_are_consistent() {
        let records = [
            rec(0, 'c', Mark::Absent),
            rec(1, 'r', Mark::PresentElsewhere),
            rec(2, 'a', Mark::PositionalMatch),
        ];
        assert!(find_inconsistency(&records, 0, 's', Mark::Absent).is_none());
        assert!(find_inconsistency(&records, 0, 'r', Mark::PositionalMatch).is_none());
        assert!(find_inconsistency(&records, 2, 'a', Mark::PositionalMatch).is_none());
    }
}
