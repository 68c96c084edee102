use std::collections::HashMap;

use crate::regex::char_;

use super::automaton::FiniteAutomaton;

/// Per-state key for one refinement round: the state's current class and the
/// class reached on every letter, letters in ascending order.
type Signature = (usize, Vec<(char, usize)>);

/// Moore-style partition refinement of a complete DFA.
pub struct AutomatonMinifier<'a> {
    pub automaton: &'a FiniteAutomaton,
}

impl<'a> AutomatonMinifier<'a> {
    pub fn new(automaton: &'a FiniteAutomaton) -> Self {
        Self { automaton }
    }

    fn signature(&self, state: usize, classes: &[usize]) -> Signature {
        let a = self.automaton;
        let targets = a
            .alphabet()
            .iter()
            .map(|c| {
                let target = a
                    .step(state, *c)
                    .unwrap_or_else(|| panic!("state {state} has no transition on {c:?}"));
                (*c, classes[target])
            })
            .collect();
        (classes[state], targets)
    }

    /// One refinement round. Classes are numbered in the order their first
    /// member appears.
    fn refine(&self, classes: &[usize]) -> (Vec<usize>, usize) {
        let mut ids: HashMap<Signature, usize> = HashMap::new();
        let refined = (0..classes.len())
            .map(|s| {
                let n = ids.len();
                *ids.entry(self.signature(s, classes)).or_insert(n)
            })
            .collect();
        (refined, ids.len())
    }

    /// Class index of every state once the partition is stable, and the
    /// number of classes.
    pub fn equivalence_classes(&self) -> (Vec<usize>, usize) {
        let a = self.automaton;
        let mut classes = a
            .states()
            .iter()
            .map(|s| usize::from(s.is_final))
            .collect::<Vec<_>>();
        let mut count = 0;
        loop {
            // Refinement only ever splits classes, so an unchanged count
            // means an unchanged partition.
            let (refined, refined_count) = self.refine(&classes);
            classes = refined;
            if refined_count == count {
                return (classes, count);
            }
            count = refined_count;
        }
    }

    pub fn minify(&self) -> FiniteAutomaton {
        let a = self.automaton;
        assert!(
            a.is_deterministic() && a.is_complete(),
            "minimization needs a complete deterministic automaton"
        );
        assert!(!a.states().is_empty(), "minimization needs a start state");

        let (classes, count) = self.equivalence_classes();
        // Classes are numbered by first member, so each new class shows up
        // right after the previous one.
        let mut representatives: Vec<usize> = Vec::with_capacity(count);
        for (s, class) in classes.iter().enumerate() {
            if *class == representatives.len() {
                representatives.push(s);
            }
        }
        debug_assert_eq!(representatives.len(), count);

        let mut result = FiniteAutomaton::new();
        result.extend_alphabet(a.alphabet().iter().cloned());
        for rep in &representatives {
            result.add_state(a.states()[*rep].is_final);
        }
        for (class, &rep) in representatives.iter().enumerate() {
            for c in a.alphabet() {
                if let Some(target) = a.step(rep, *c) {
                    result.add_transition(class, classes[target], char_(*c));
                }
            }
        }
        result.set_start_state(classes[a.start_state_index()]);
        result
    }
}
