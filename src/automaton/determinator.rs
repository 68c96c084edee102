use std::collections::{BTreeSet, HashMap};

use crate::regex::char_;

use super::automaton::FiniteAutomaton;

/// A set of simultaneously active states of the source automaton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Superposition {
    pub states: BTreeSet<usize>,
    pub is_final: bool,
}

impl Superposition {
    fn new(states: BTreeSet<usize>, automaton: &FiniteAutomaton) -> Self {
        let is_final = states.iter().any(|s| automaton.states()[*s].is_final);
        Superposition { states, is_final }
    }
}

/// Subset construction over a complete automaton without ε-transitions.
pub struct AutomatonDeterminator<'a> {
    pub automaton: &'a FiniteAutomaton,
}

impl<'a> AutomatonDeterminator<'a> {
    pub fn new(automaton: &'a FiniteAutomaton) -> Self {
        Self { automaton }
    }

    /// Targets of any state in `from` on the letter `c`.
    fn successors(&self, from: &Superposition, c: char) -> BTreeSet<usize> {
        from.states
            .iter()
            .flat_map(|s| self.automaton.states()[*s].transitions.iter())
            .filter(|t| t.regex.as_letter() == Some(c))
            .map(|t| t.target)
            .collect()
    }

    /// Every superposition reachable from the start state, in discovery
    /// order, with the transitions `(from, letter, to)` between them.
    pub fn superpositions(&self) -> (Vec<Superposition>, Vec<(usize, char, usize)>) {
        let src = self.automaton;
        let start = BTreeSet::from([src.start_state_index()]);
        let mut found = vec![Superposition::new(start.clone(), src)];
        let mut ids = HashMap::from([(start, 0)]);
        let mut transitions = vec![];

        let mut next = 0;
        while next < found.len() {
            for c in src.alphabet() {
                let targets = self.successors(&found[next], *c);
                let id = match ids.get(&targets) {
                    Some(id) => *id,
                    None => {
                        found.push(Superposition::new(targets.clone(), src));
                        ids.insert(targets, found.len() - 1);
                        found.len() - 1
                    }
                };
                transitions.push((next, *c, id));
            }
            next += 1;
        }
        (found, transitions)
    }

    pub fn determine(&self) -> FiniteAutomaton {
        let src = self.automaton;
        assert!(
            !src.has_epsilon_transitions(),
            "determinization needs an automaton without epsilon transitions"
        );
        assert!(
            src.is_complete(),
            "determinization needs a complete automaton"
        );
        assert!(!src.states().is_empty(), "determinization needs a start state");

        let (found, transitions) = self.superpositions();
        let mut dfa = FiniteAutomaton::new();
        dfa.extend_alphabet(src.alphabet().iter().cloned());
        for superposition in &found {
            dfa.add_state(superposition.is_final);
        }
        for (from, c, to) in transitions {
            dfa.add_transition(from, to, char_(c));
        }
        dfa
    }
}
