use crate::regex::Regex;

use super::automaton::FiniteAutomaton;

/// Eliminates ε-transitions from a simple automaton.
///
/// Cycles of ε-transitions are merged into a single state first; the
/// remaining ε-transitions form a DAG (plus self-loops) and are removed by
/// copying the target's transitions onto the source.
pub struct EpsilonRemover<'a> {
    pub automaton: &'a mut FiniteAutomaton,
}

impl<'a> EpsilonRemover<'a> {
    pub fn new(automaton: &'a mut FiniteAutomaton) -> Self {
        Self { automaton }
    }

    pub fn remove(&mut self) {
        assert!(
            self.automaton.is_simple(),
            "epsilon removal needs a simple automaton"
        );
        loop {
            // Merging renumbers states, so everything is looked up again.
            if let Some(cycle) = self.find_epsilon_cycle() {
                self.merge_states(cycle);
                continue;
            }
            match self.epsilon_transition() {
                Some((state, transition)) => self.remove_epsilon_transition(state, transition),
                None => break,
            }
        }
        debug_assert!(!self.automaton.has_epsilon_transitions());
    }

    fn epsilon_transition(&self) -> Option<(usize, usize)> {
        self.automaton
            .states()
            .iter()
            .enumerate()
            .find_map(|(s, state)| {
                state
                    .transitions
                    .iter()
                    .position(|t| t.regex.is_empty())
                    .map(|i| (s, i))
            })
    }

    /// States of some cycle of length at least two made of ε-transitions, in
    /// path order.
    pub fn find_epsilon_cycle(&self) -> Option<Vec<usize>> {
        let n = self.automaton.states().len();
        let mut visited = vec![false; n];
        let mut on_path = vec![false; n];
        let mut path = vec![];
        for s in 0..n {
            if !visited[s] {
                if let Some(cycle) = self.dfs(s, &mut visited, &mut on_path, &mut path) {
                    return Some(cycle);
                }
            }
        }
        None
    }

    fn dfs(
        &self,
        s: usize,
        visited: &mut Vec<bool>,
        on_path: &mut Vec<bool>,
        path: &mut Vec<usize>,
    ) -> Option<Vec<usize>> {
        visited[s] = true;
        on_path[s] = true;
        path.push(s);
        for t in &self.automaton.states()[s].transitions {
            if !t.regex.is_empty() || t.target == s {
                continue;
            }
            if on_path[t.target] {
                let begin = path.iter().position(|p| *p == t.target).unwrap_or(0);
                return Some(path[begin..].to_vec());
            }
            if !visited[t.target] {
                if let Some(cycle) = self.dfs(t.target, visited, on_path, path) {
                    return Some(cycle);
                }
            }
        }
        path.pop();
        on_path[s] = false;
        None
    }

    /// Replaces `group` by one fresh state carrying all their transitions.
    pub fn merge_states(&mut self, mut group: Vec<usize>) {
        let a = &mut *self.automaton;
        let is_final = group.iter().any(|s| a.states()[*s].is_final);
        let merged = a.add_state(is_final);

        let mut redirected: Vec<(usize, usize, Regex)> = vec![];
        for (src, state) in a.states().iter().enumerate() {
            let src_merged = group.contains(&src);
            for t in &state.transitions {
                match (src_merged, group.contains(&t.target)) {
                    (false, true) => redirected.push((src, merged, t.regex.clone())),
                    (true, false) => redirected.push((merged, t.target, t.regex.clone())),
                    (true, true) if !t.regex.is_empty() => {
                        redirected.push((merged, merged, t.regex.clone()))
                    }
                    _ => {}
                }
            }
        }
        for (from, to, regex) in redirected {
            a.add_transition(from, to, regex);
        }

        if group.contains(&a.start_state_index()) {
            a.set_start_state(merged);
        }
        group.sort_by(|x, y| y.cmp(x));
        for s in group {
            a.remove_state(s);
        }
    }

    /// Removes the ε-transition `transition` of `state` after giving `state`
    /// every transition of its target.
    pub fn remove_epsilon_transition(&mut self, state: usize, transition: usize) {
        let a = &mut *self.automaton;
        let target = a.transition(state, transition).target;
        if target == state {
            a.remove_transition(state, transition);
            return;
        }
        let copied = a.states()[target]
            .transitions
            .iter()
            .filter(|t| !(t.regex.is_empty() && t.target == target))
            .cloned()
            .collect::<Vec<_>>();
        for t in copied {
            a.add_transition(state, t.target, t.regex);
        }
        if a.states()[target].is_final {
            a.make_state_final(state, true);
        }
        a.remove_transition(state, transition);
    }
}
