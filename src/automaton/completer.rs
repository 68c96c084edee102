use crate::regex::char_;

use super::automaton::FiniteAutomaton;

/// Routes every missing (state, letter) pair into an absorbing trap state.
pub struct AutomatonCompleter<'a> {
    pub automaton: &'a mut FiniteAutomaton,
}

impl<'a> AutomatonCompleter<'a> {
    pub fn new(automaton: &'a mut FiniteAutomaton) -> Self {
        Self { automaton }
    }

    pub fn complete(&mut self) {
        let a = &mut *self.automaton;
        assert!(a.is_simple(), "completion needs a simple automaton");
        if a.states().is_empty() {
            return;
        }
        let alphabet = a.alphabet().clone();
        let trap = a.add_state(false);
        let mut trap_used = false;

        for s in 0..trap {
            for c in &alphabet {
                if a.find_transition(*c, s).is_none() {
                    a.add_transition(s, trap, char_(*c));
                    trap_used = true;
                }
            }
        }

        if trap_used {
            for c in alphabet {
                a.add_transition(trap, trap, char_(c));
            }
        } else {
            a.remove_state(trap);
        }
        debug_assert!(a.is_complete());
    }
}
