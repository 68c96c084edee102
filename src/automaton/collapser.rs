use crate::regex::{eps, zero, Regex};

use super::automaton::{FiniteAutomaton, Transition};

/// State elimination: shrinks a DFA to its start state plus at most one
/// final state, labelling the remaining transitions with regexes.
pub struct AutomatonCollapser<'a> {
    pub automaton: &'a mut FiniteAutomaton,
}

impl<'a> AutomatonCollapser<'a> {
    pub fn new(automaton: &'a mut FiniteAutomaton) -> Self {
        Self { automaton }
    }

    pub fn collapse(&mut self) {
        assert!(
            self.automaton.is_deterministic(),
            "collapsing needs a deterministic automaton"
        );
        self.ensure_one_output();
        for s in 0..self.automaton.states().len() {
            self.collapse_multiple_edges(s);
        }
        while let Some(s) = self.pick_state_to_collapse() {
            self.collapse_state(s);
        }
    }

    /// Funnels several final states into a single new one via ε-transitions.
    pub fn ensure_one_output(&mut self) {
        let a = &mut *self.automaton;
        if a.final_state_count() <= 1 {
            return;
        }
        let output = a.add_state(true);
        for s in 0..output {
            if a.states()[s].is_final {
                a.make_state_final(s, false);
                a.add_transition(s, output, eps());
            }
        }
    }

    pub fn pick_state_to_collapse(&self) -> Option<usize> {
        let a = &*self.automaton;
        (0..a.states().len()).find(|s| !a.states()[*s].is_final && *s != a.start_state_index())
    }

    /// Merges parallel transitions of `state` into one labelled by the union
    /// of their labels. Returns whether anything was merged.
    pub fn collapse_multiple_edges(&mut self, state: usize) -> bool {
        let transitions = self.automaton.transitions_mut(state);
        let before = transitions.len();
        let mut merged: Vec<Transition> = vec![];
        for t in transitions.drain(..) {
            match merged.iter().position(|m| m.target == t.target) {
                Some(i) => merged[i].regex.union_with(t.regex),
                None => merged.push(t),
            }
        }
        let changed = merged.len() != before;
        *transitions = merged;
        changed
    }

    /// Union of the labels of all transitions `from -> to`, ∅ if there are none.
    pub fn label(&self, from: usize, to: usize) -> Regex {
        self.automaton.states()[from]
            .transitions
            .iter()
            .filter(|t| t.target == to)
            .fold(zero(), |r, t| r + t.regex.clone())
    }

    /// Removes `state`, replacing every path `a -> state -> c` with a direct
    /// transition `a -> c` labelled `L1 loop* L2`.
    pub fn collapse_state(&mut self, state: usize) {
        let loop_regex = self.label(state, state);
        let outgoing = self.automaton.states()[state]
            .transitions
            .iter()
            .filter(|t| t.target != state)
            .cloned()
            .collect::<Vec<_>>();
        let incoming = self
            .automaton
            .states()
            .iter()
            .enumerate()
            .filter(|(s, _)| *s != state)
            .flat_map(|(s, st)| {
                st.transitions
                    .iter()
                    .filter(|t| t.target == state)
                    .map(move |t| (s, t.regex.clone()))
            })
            .collect::<Vec<_>>();

        // ∅* is ε, which drops out of the concatenation below.
        let through = loop_regex.star();
        let mut sources = vec![];
        for (src, r1) in &incoming {
            for out in &outgoing {
                let regex = r1.clone() * through.clone() * out.regex.clone();
                self.automaton.add_transition(*src, out.target, regex);
            }
            if !outgoing.is_empty() && !sources.contains(src) {
                sources.push(*src);
            }
        }
        for src in sources {
            while self.collapse_multiple_edges(src) {}
        }
        self.automaton.remove_state(state);
    }
}
