use crate::regex::{zero, Regex};

use super::automaton::FiniteAutomaton;

/// Reads the regex off an automaton collapsed to one or two states.
pub struct AutomatonToRegexConverter<'a> {
    pub automaton: &'a FiniteAutomaton,
}

impl<'a> AutomatonToRegexConverter<'a> {
    pub fn new(automaton: &'a FiniteAutomaton) -> Self {
        Self { automaton }
    }

    /// `(a+b+...)*` over the automaton's alphabet.
    pub fn always_true_regex(&self) -> Regex {
        self.automaton
            .alphabet()
            .iter()
            .fold(zero(), |r, c| r + Regex::Char(*c))
            .star()
    }

    fn label(&self, from: usize, to: usize) -> Regex {
        self.automaton.states()[from]
            .transitions
            .iter()
            .filter(|t| t.target == to)
            .fold(zero(), |r, t| r + t.regex.clone())
    }

    /// Language of the paths from `start` to `end`:
    /// `f* fw (b + bk f* fw)*` with `f`, `b` the loops on `start` and `end`
    /// and `fw`, `bk` the transitions between them.
    pub fn regex_for_states(&self, start: usize, end: usize) -> Regex {
        let start_loop = self.label(start, start).star();
        let end_loop = self.label(end, end);
        let forward = self.label(start, end);
        let backward = self.label(end, start);

        let round_trip = backward * start_loop.clone() * forward.clone();
        start_loop * forward * (end_loop + round_trip).star()
    }

    pub fn convert(&self) -> Regex {
        let states = self.automaton.states();
        assert!(
            !states.is_empty() && states.len() <= 2,
            "expected a collapsed automaton, got {} states",
            states.len()
        );

        if states.len() == 1 {
            return if states[0].is_final {
                self.label(0, 0).star()
            } else {
                zero()
            };
        }

        let start = self.automaton.start_state_index();
        let end = 1 - start;
        assert!(
            !states[start].is_final && states[end].is_final,
            "expected a non-final start state and a final end state"
        );
        self.regex_for_states(start, end)
    }
}
