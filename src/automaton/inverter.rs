use super::automaton::FiniteAutomaton;

/// Complements the language of a complete DFA by flipping every final flag.
/// On any other automaton the result is not the complement.
pub struct AutomatonInverter<'a> {
    pub automaton: &'a mut FiniteAutomaton,
}

impl<'a> AutomatonInverter<'a> {
    pub fn new(automaton: &'a mut FiniteAutomaton) -> Self {
        Self { automaton }
    }

    pub fn invert(&mut self) {
        for s in 0..self.automaton.states().len() {
            let is_final = self.automaton.states()[s].is_final;
            self.automaton.make_state_final(s, !is_final);
        }
    }
}
