//! The stages chained into whole algorithms.

use std::collections::{BTreeSet, VecDeque};
use std::fmt::Display;

use clap::ValueEnum;

use crate::regex::Regex;

use super::{
    AutomatonCollapser, AutomatonCompleter, AutomatonDeterminator, AutomatonInverter,
    AutomatonMinifier, AutomatonOptimizer, AutomatonSimplifier, AutomatonToRegexConverter,
    EpsilonRemover, FiniteAutomaton,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Stage {
    /// The automaton built directly from the regex.
    Initial,
    Simplify,
    RemoveEpsilon,
    Optimize,
    Complete,
    Determine,
    Minify,
    Invert,
    Collapse,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Initial => "INITIAL",
            Stage::Simplify => "SIMPLIFIED",
            Stage::RemoveEpsilon => "EPSILON-FREE",
            Stage::Optimize => "OPTIMIZED",
            Stage::Complete => "COMPLETE",
            Stage::Determine => "DETERMINISTIC",
            Stage::Minify => "MINIMAL",
            Stage::Invert => "INVERTED",
            Stage::Collapse => "COLLAPSED",
        };
        write!(f, "{s}")
    }
}

/// Stages turning a freshly built automaton into a complete DFA.
pub const DFA_STAGES: [Stage; 5] = [
    Stage::Simplify,
    Stage::RemoveEpsilon,
    Stage::Optimize,
    Stage::Complete,
    Stage::Determine,
];

pub fn apply(automaton: &mut FiniteAutomaton, stage: Stage) {
    match stage {
        Stage::Initial => {}
        Stage::Simplify => AutomatonSimplifier::new(automaton).simplify(),
        Stage::RemoveEpsilon => EpsilonRemover::new(automaton).remove(),
        Stage::Optimize => AutomatonOptimizer::new(automaton).optimize(),
        Stage::Complete => AutomatonCompleter::new(automaton).complete(),
        Stage::Determine => *automaton = AutomatonDeterminator::new(automaton).determine(),
        Stage::Minify => *automaton = AutomatonMinifier::new(automaton).minify(),
        Stage::Invert => AutomatonInverter::new(automaton).invert(),
        Stage::Collapse => AutomatonCollapser::new(automaton).collapse(),
    }
}

/// Applies `stages` in order, handing the automaton to `trace` after each.
pub fn run_stages(
    automaton: &mut FiniteAutomaton,
    stages: &[Stage],
    mut trace: impl FnMut(Stage, &FiniteAutomaton),
) {
    for stage in stages {
        apply(automaton, *stage);
        trace(*stage, automaton);
    }
}

/// Automaton of `regex` with `alphabet` added to the letters it mentions.
pub fn automaton_over(regex: &Regex, alphabet: &BTreeSet<char>) -> FiniteAutomaton {
    let mut automaton = FiniteAutomaton::from(regex);
    automaton.extend_alphabet(alphabet.iter().cloned());
    automaton
}

pub fn to_dfa(regex: &Regex, alphabet: &BTreeSet<char>) -> FiniteAutomaton {
    let mut automaton = automaton_over(regex, alphabet);
    run_stages(&mut automaton, &DFA_STAGES, |_, _| {});
    automaton
}

pub fn minimal_dfa(regex: &Regex, alphabet: &BTreeSet<char>) -> FiniteAutomaton {
    let mut automaton = to_dfa(regex, alphabet);
    apply(&mut automaton, Stage::Minify);
    automaton
}

/// Regex of a deterministic `automaton`, which is left untouched.
pub fn to_regex(automaton: &FiniteAutomaton) -> Regex {
    let mut collapsed = automaton.clone();
    AutomatonCollapser::new(&mut collapsed).collapse();
    AutomatonToRegexConverter::new(&collapsed).convert()
}

/// Regex equivalent to `regex`, read back from its minimal DFA.
pub fn round_trip(regex: &Regex, alphabet: &BTreeSet<char>) -> Regex {
    to_regex(&minimal_dfa(regex, alphabet))
}

/// Regex of every word over the letters of `regex` and `alphabet` that
/// `regex` does not match.
pub fn complement_regex(regex: &Regex, alphabet: &BTreeSet<char>) -> Regex {
    let mut automaton = to_dfa(regex, alphabet);
    apply(&mut automaton, Stage::Invert);
    to_regex(&automaton)
}

/// Length of the shortest path from `state` to a final state.
pub fn distance_to_final(automaton: &FiniteAutomaton, state: usize) -> Option<usize> {
    let mut seen = vec![false; automaton.states().len()];
    let mut queue = VecDeque::from([(state, 0)]);
    seen[state] = true;
    while let Some((s, d)) = queue.pop_front() {
        if automaton.states()[s].is_final {
            return Some(d);
        }
        for t in &automaton.states()[s].transitions {
            if !seen[t.target] {
                seen[t.target] = true;
                queue.push_back((t.target, d + 1));
            }
        }
    }
    None
}

/// Length of the shortest word matching `regex` that ends in `k` copies of
/// `ch`, if there is one and its length fits in a `usize`.
///
/// Works on the reversed language: after reading `ch^k` from the start of
/// its DFA, the rest of the shortest word is a shortest path to a final
/// state.
pub fn shortest_word_with_suffix(
    regex: &Regex,
    ch: char,
    k: usize,
    alphabet: &BTreeSet<char>,
) -> Option<usize> {
    let mut alphabet = alphabet.clone();
    alphabet.insert(ch);
    let dfa = to_dfa(&regex.reversed(), &alphabet);
    let state = walk(&dfa, ch, k)?;
    distance_to_final(&dfa, state)?.checked_add(k)
}

/// State reached from the start after reading `ch` `k` times. The walk is
/// cut short once it enters a cycle, so it takes at most one step per state.
fn walk(dfa: &FiniteAutomaton, ch: char, k: usize) -> Option<usize> {
    let mut first_seen = vec![None; dfa.states().len()];
    let mut state = dfa.start_state_index();
    let mut steps = 0;
    while steps < k {
        if let Some(first) = first_seen[state] {
            let period = steps - first;
            for _ in 0..(k - steps) % period {
                state = dfa.step(state, ch)?;
            }
            return Some(state);
        }
        first_seen[state] = Some(steps);
        state = dfa.step(state, ch)?;
        steps += 1;
    }
    Some(state)
}

pub fn has_word_with_suffix(
    regex: &Regex,
    ch: char,
    k: usize,
    alphabet: &BTreeSet<char>,
) -> bool {
    shortest_word_with_suffix(regex, ch, k, alphabet).is_some()
}
