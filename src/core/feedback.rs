//! Feedback symbols and per-position marks
//!
//! Feedback for a guess is a string with one symbol per letter:
//! - `*` = positional match (letter in the correct position)
//! - `+` = present elsewhere (letter in word, wrong position)
//! - `-` = absent (letter not in word)
//!
//! A single `x` instead rejects the guessed word entirely. The symbols are
//! configurable through [`FeedbackSymbols`]; everything past parsing works on
//! [`Mark`] values.

/// Evaluation of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter is correct and in the correct position
    PositionalMatch,
    /// Letter is in the word but not at this position
    PresentElsewhere,
    /// Letter does not occur in the word
    Absent,
}

impl Mark {
    /// Whether this mark states that the letter occurs in the word
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Characters used to enter feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackSymbols {
    pub positional_match: char,
    pub present_elsewhere: char,
    pub absent: char,
    pub reject_word: char,
}

impl Default for FeedbackSymbols {
    fn default() -> Self {
        Self {
            positional_match: '*',
            present_elsewhere: '+',
            absent: '-',
            reject_word: 'x',
        }
    }
}

impl FeedbackSymbols {
    /// Map a feedback symbol to its mark
    ///
    /// Returns `None` for anything but the three mark symbols.
    #[inline]
    #[must_use]
    pub fn mark_for(&self, symbol: char) -> Option<Mark> {
        if symbol == self.positional_match {
            Some(Mark::PositionalMatch)
        } else if symbol == self.present_elsewhere {
            Some(Mark::PresentElsewhere)
        } else if symbol == self.absent {
            Some(Mark::Absent)
        } else {
            None
        }
    }

    /// Symbol used to enter the given mark
    #[inline]
    #[must_use]
    pub const fn symbol_for(&self, mark: Mark) -> char {
        match mark {
            Mark::PositionalMatch => self.positional_match,
            Mark::PresentElsewhere => self.present_elsewhere,
            Mark::Absent => self.absent,
        }
    }

    /// Check whether the input is exactly the reject-word marker
    #[must_use]
    pub fn is_reject(&self, input: &str) -> bool {
        let mut chars = input.chars();
        chars.next() == Some(self.reject_word) && chars.next().is_none()
    }

    /// Parse a feedback string into marks
    ///
    /// Returns `None` if any character is not one of the three mark symbols.
    ///
    /// # Examples
    /// ```
    /// use solvify::core::{FeedbackSymbols, Mark};
    ///
    /// let symbols = FeedbackSymbols::default();
    /// let marks = symbols.parse("*+-").unwrap();
    /// assert_eq!(marks, vec![Mark::PositionalMatch, Mark::PresentElsewhere, Mark::Absent]);
    ///
    /// assert!(symbols.parse("*?-").is_none());
    /// ```
    #[must_use]
    pub fn parse(&self, input: &str) -> Option<Vec<Mark>> {
        input.chars().map(|symbol| self.mark_for(symbol)).collect()
    }

    /// Render marks back into a feedback string
    #[must_use]
    pub fn render(&self, marks: &[Mark]) -> String {
        marks.iter().map(|&mark| self.symbol_for(mark)).collect()
    }
}

/// Feedback calculation for automatic play
pub struct Feedback;

impl Feedback {
    /// Calculate the marks `answer` produces for `guess`
    ///
    /// Both words are expected in lower case. A letter that occurs anywhere
    /// in the answer is never marked absent, so repeated letters always get a
    /// consistent mark.
    ///
    /// # Examples
    /// ```
    /// use solvify::core::{Feedback, FeedbackSymbols};
    ///
    /// let marks = Feedback::calculate("crane", "slate");
    /// assert_eq!(FeedbackSymbols::default().render(&marks), "--*-*");
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, answer: &str) -> Vec<Mark> {
        let answer: Vec<char> = answer.chars().collect();

        guess
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                if answer.get(i) == Some(&ch) {
                    Mark::PositionalMatch
                } else if answer.contains(&ch) {
                    Mark::PresentElsewhere
                } else {
                    Mark::Absent
                }
            })
            .collect()
    }

    /// Check whether every mark is a positional match
    #[must_use]
    pub fn is_win(marks: &[Mark]) -> bool {
        !marks.is_empty() && marks.iter().all(|&m| m == Mark::PositionalMatch)
    }

    /// Convert marks to an emoji string like "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(marks: &[Mark]) -> String {
        marks
            .iter()
            .map(|mark| match mark {
                Mark::PositionalMatch => '🟩',
                Mark::PresentElsewhere => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_symbols() {
        let symbols = FeedbackSymbols::default();
        assert_eq!(symbols.mark_for('*'), Some(Mark::PositionalMatch));
        assert_eq!(symbols.mark_for('+'), Some(Mark::PresentElsewhere));
        assert_eq!(symbols.mark_for('-'), Some(Mark::Absent));
        assert_eq!(symbols.mark_for('x'), None);
        assert_eq!(symbols.mark_for('a'), None);
    }

    #[test]
    fn custom_symbols() {
        let symbols = FeedbackSymbols {
            positional_match: 'g',
            present_elsewhere: 'y',
            absent: '.',
            reject_word: '!',
        };
        assert_eq!(
            symbols.parse("gy."),
            Some(vec![
                Mark::PositionalMatch,
                Mark::PresentElsewhere,
                Mark::Absent
            ])
        );
        assert!(symbols.is_reject("!"));
        assert!(!symbols.is_reject("x"));
        assert_eq!(symbols.render(&[Mark::Absent, Mark::PositionalMatch]), ".g");
    }

    #[test]
    fn reject_marker_must_be_alone() {
        let symbols = FeedbackSymbols::default();
        assert!(symbols.is_reject("x"));
        assert!(!symbols.is_reject("xx"));
        assert!(!symbols.is_reject("x-"));
        assert!(!symbols.is_reject(""));
    }

    #[test]
    fn parse_rejects_letters() {
        let symbols = FeedbackSymbols::default();
        assert!(symbols.parse("ap+le").is_none());
        assert_eq!(symbols.parse(""), Some(vec![]));
    }

    #[test]
    fn calculate_all_absent() {
        let marks = Feedback::calculate("abcde", "fghij");
        assert!(marks.iter().all(|&m| m == Mark::Absent));
    }

    #[test]
    fn calculate_perfect() {
        let marks = Feedback::calculate("crane", "crane");
        assert!(Feedback::is_win(&marks));
    }

    #[test]
    fn calculate_repeated_letters_stay_present() {
        // SPEED vs ERASE: both E's are present, never absent
        let marks = Feedback::calculate("speed", "erase");
        assert_eq!(
            marks,
            vec![
                Mark::PresentElsewhere,
                Mark::Absent,
                Mark::PresentElsewhere,
                Mark::PresentElsewhere,
                Mark::Absent,
            ]
        );
    }

    #[test]
    fn calculate_mixed() {
        let marks = Feedback::calculate("robot", "floor");
        let rendered = FeedbackSymbols::default().render(&marks);
        assert_eq!(rendered, "++-*-");
    }

    #[test]
    fn empty_marks_are_not_a_win() {
        assert!(!Feedback::is_win(&[]));
    }

    #[test]
    fn emoji_rendering() {
        let marks = [Mark::PositionalMatch, Mark::PresentElsewhere, Mark::Absent];
        assert_eq!(Feedback::to_emoji(&marks), "🟩🟨⬜");
    }
}
