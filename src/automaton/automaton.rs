use std::collections::BTreeSet;
use std::fmt::Display;

use crate::regex::{Regex, EPSILON};

use super::simplifier::AutomatonSimplifier;

/// Consume a word matching `regex`, then move to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub target: usize,
    pub regex: Regex,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct State {
    pub is_final: bool,
    pub transitions: Vec<Transition>,
}

/// A finite automaton whose transitions may carry arbitrary regexes.
///
/// States are addressed by their position in `states`. Removing a state
/// shifts every later state (and every transition target, and the start
/// index) down by one, so indices held across a removal are stale.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FiniteAutomaton {
    states: Vec<State>,
    start_state_index: usize,
    alphabet: BTreeSet<char>,
}

impl From<&Regex> for FiniteAutomaton {
    fn from(regex: &Regex) -> Self {
        let mut automaton = FiniteAutomaton::new();
        let start = automaton.add_state(false);
        let end = automaton.add_state(true);
        automaton.add_transition(start, end, regex.clone());
        automaton
    }
}

impl From<Regex> for FiniteAutomaton {
    fn from(regex: Regex) -> Self {
        FiniteAutomaton::from(&regex)
    }
}

impl FiniteAutomaton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }
    pub fn start_state_index(&self) -> usize {
        self.start_state_index
    }
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }
    pub fn transition(&self, state: usize, transition: usize) -> &Transition {
        &self.states[state].transitions[transition]
    }

    pub fn add_state(&mut self, is_final: bool) -> usize {
        self.states.push(State {
            is_final,
            transitions: vec![],
        });
        self.states.len() - 1
    }
    pub fn add_transition(&mut self, from: usize, to: usize, regex: Regex) {
        assert!(
            from < self.states.len() && to < self.states.len(),
            "transition {from} -> {to} leaves the automaton ({} states)",
            self.states.len()
        );
        regex.fill_alphabet(&mut self.alphabet);
        self.states[from]
            .transitions
            .push(Transition { target: to, regex });
    }
    pub fn remove_transition(&mut self, state: usize, transition: usize) -> Transition {
        self.states[state].transitions.remove(transition)
    }
    pub fn make_state_final(&mut self, state: usize, is_final: bool) {
        self.states[state].is_final = is_final;
    }
    pub fn set_start_state(&mut self, state: usize) {
        assert!(state < self.states.len(), "start state {state} does not exist");
        self.start_state_index = state;
    }
    pub fn extend_alphabet(&mut self, alphabet: impl IntoIterator<Item = char>) {
        self.alphabet
            .extend(alphabet.into_iter().filter(|c| *c != EPSILON));
    }
    pub(crate) fn transitions_mut(&mut self, state: usize) -> &mut Vec<Transition> {
        &mut self.states[state].transitions
    }

    /// Removes `state` with every transition into it and renumbers the rest.
    pub fn remove_state(&mut self, state: usize) {
        assert!(
            state != self.start_state_index,
            "cannot remove the start state {state}"
        );
        for s in &mut self.states {
            s.transitions.retain(|t| t.target != state);
            for t in &mut s.transitions {
                if t.target > state {
                    t.target -= 1;
                }
            }
        }
        self.states.remove(state);
        if self.start_state_index > state {
            self.start_state_index -= 1;
        }
    }

    pub fn final_state_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_final).count()
    }
    pub fn find_transition(&self, c: char, state: usize) -> Option<usize> {
        self.states[state]
            .transitions
            .iter()
            .position(|t| t.regex == Regex::Char(c))
    }
    pub fn find_transition_to(&self, c: char, state: usize, target: usize) -> Option<usize> {
        self.states[state]
            .transitions
            .iter()
            .position(|t| t.target == target && t.regex == Regex::Char(c))
    }
    pub fn count_transitions(&self, c: char, state: usize) -> usize {
        self.states[state]
            .transitions
            .iter()
            .filter(|t| t.regex == Regex::Char(c))
            .count()
    }
    /// Target of the first transition of `state` on letter `c`.
    pub fn step(&self, state: usize, c: char) -> Option<usize> {
        self.find_transition(c, state)
            .map(|i| self.states[state].transitions[i].target)
    }

    // Structural predicates

    pub fn is_simple(&self) -> bool {
        self.states
            .iter()
            .all(|s| s.transitions.iter().all(|t| t.regex.is_char()))
    }
    pub fn is_complete(&self) -> bool {
        self.is_simple()
            && (0..self.states.len()).all(|s| {
                self.alphabet
                    .iter()
                    .all(|c| self.find_transition(*c, s).is_some())
            })
    }
    pub fn is_deterministic(&self) -> bool {
        self.is_simple()
            && (0..self.states.len()).all(|s| {
                self.alphabet
                    .iter()
                    .all(|c| self.count_transitions(*c, s) <= 1)
            })
    }
    pub fn has_epsilon_transitions(&self) -> bool {
        self.states
            .iter()
            .any(|s| s.transitions.iter().any(|t| t.regex.is_empty()))
    }

    // Simulation

    pub fn epsilon_closure(&self, states: &mut BTreeSet<usize>) {
        let mut stack = states.iter().cloned().collect::<Vec<_>>();
        while let Some(s) = stack.pop() {
            for t in &self.states[s].transitions {
                if t.regex.is_empty() && states.insert(t.target) {
                    stack.push(t.target);
                }
            }
        }
    }

    /// Whether `word` is in the language. Automata with composite labels are
    /// simplified on a copy first.
    pub fn accepts(&self, word: &str) -> bool {
        if !self.is_simple() {
            let mut simple = self.clone();
            AutomatonSimplifier::new(&mut simple).simplify();
            return simple.accepts(word);
        }
        if self.states.is_empty() {
            return false;
        }
        let mut current = BTreeSet::from([self.start_state_index]);
        self.epsilon_closure(&mut current);
        for c in word.chars() {
            let mut next = BTreeSet::new();
            for s in &current {
                for t in &self.states[*s].transitions {
                    if t.regex.as_letter() == Some(c) {
                        next.insert(t.target);
                    }
                }
            }
            if next.is_empty() {
                return false;
            }
            self.epsilon_closure(&mut next);
            current = next;
        }
        current.iter().any(|s| self.states[*s].is_final)
    }
}

impl Display for FiniteAutomaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "init: {}", self.start_state_index)?;
        let finals = (0..self.states.len())
            .filter(|s| self.states[*s].is_final)
            .collect::<Vec<_>>();
        writeln!(f, "finals: {:?}", finals)?;
        writeln!(f, "alphabet: {}", self.alphabet.iter().collect::<String>())?;
        writeln!(f, "states:")?;
        for (s, state) in self.states.iter().enumerate() {
            writeln!(f, "  {s}:")?;
            for t in &state.transitions {
                writeln!(f, "    {}: {}", t.target, t.regex)?;
            }
        }
        Ok(())
    }
}
