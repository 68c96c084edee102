use super::automaton::FiniteAutomaton;

/// Drops ∅-labelled transitions and states the start state cannot reach.
pub struct AutomatonOptimizer<'a> {
    pub automaton: &'a mut FiniteAutomaton,
}

impl<'a> AutomatonOptimizer<'a> {
    pub fn new(automaton: &'a mut FiniteAutomaton) -> Self {
        Self { automaton }
    }

    pub fn optimize(&mut self) {
        self.remove_zero_transitions();
        self.remove_unreachable_states();
    }

    pub fn remove_zero_transitions(&mut self) {
        for s in 0..self.automaton.states().len() {
            self.automaton
                .transitions_mut(s)
                .retain(|t| !t.regex.is_zero());
        }
    }

    pub fn reachable_states(&self) -> Vec<bool> {
        let a = &*self.automaton;
        let mut reachable = vec![false; a.states().len()];
        if a.states().is_empty() {
            return reachable;
        }
        let mut stack = vec![a.start_state_index()];
        reachable[a.start_state_index()] = true;
        while let Some(s) = stack.pop() {
            for t in &a.states()[s].transitions {
                if !reachable[t.target] {
                    reachable[t.target] = true;
                    stack.push(t.target);
                }
            }
        }
        reachable
    }

    pub fn remove_unreachable_states(&mut self) {
        let reachable = self.reachable_states();
        for s in (0..reachable.len()).rev() {
            if !reachable[s] {
                self.automaton.remove_state(s);
            }
        }
    }
}
