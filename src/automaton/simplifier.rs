use crate::regex::{eps, Regex};

use super::automaton::FiniteAutomaton;

/// Rewrites every transition with a composite label into transitions on
/// single letters and ε, adding intermediate states where needed.
pub struct AutomatonSimplifier<'a> {
    pub automaton: &'a mut FiniteAutomaton,
}

impl<'a> AutomatonSimplifier<'a> {
    pub fn new(automaton: &'a mut FiniteAutomaton) -> Self {
        Self { automaton }
    }

    pub fn simplify(&mut self) {
        while let Some((state, transition)) = self.long_transition() {
            self.shorten_transition(state, transition);
        }
        debug_assert!(self.automaton.is_simple());
    }

    /// First transition whose label is not a single `Char`.
    pub fn long_transition(&self) -> Option<(usize, usize)> {
        self.automaton
            .states()
            .iter()
            .enumerate()
            .find_map(|(s, state)| {
                state
                    .transitions
                    .iter()
                    .position(|t| !t.regex.is_char())
                    .map(|i| (s, i))
            })
    }

    pub fn shorten_transition(&mut self, state: usize, transition: usize) {
        let a = &mut *self.automaton;
        let t = a.remove_transition(state, transition);
        match t.regex {
            Regex::Char(c) => panic!("{c:?} is not a long transition"),
            Regex::Concat(mut es) => match es.pop() {
                None => a.add_transition(state, t.target, eps()),
                Some(last) => {
                    let mut from = state;
                    for e in es {
                        let next = a.add_state(false);
                        a.add_transition(from, next, e);
                        from = next;
                    }
                    a.add_transition(from, t.target, last);
                }
            },
            Regex::Sum(es) => {
                for e in es {
                    a.add_transition(state, t.target, e);
                }
            }
            Regex::Star(e) => {
                let loop_start = a.add_state(false);
                let loop_end = a.add_state(false);
                a.add_transition(loop_start, loop_end, *e);
                a.add_transition(state, loop_start, eps());
                a.add_transition(loop_end, loop_start, eps());
                a.add_transition(loop_start, t.target, eps());
            }
        }
    }
}
