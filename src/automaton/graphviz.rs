use std::fmt::Display;

use super::automaton::FiniteAutomaton;

/// `Display`s an automaton as a Graphviz `digraph`.
pub struct AutomatonGraphvizPrinter<'a> {
    pub automaton: &'a FiniteAutomaton,
}

impl<'a> AutomatonGraphvizPrinter<'a> {
    pub fn new(automaton: &'a FiniteAutomaton) -> Self {
        Self { automaton }
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl<'a> Display for AutomatonGraphvizPrinter<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let states = self.automaton.states();
        writeln!(f, "digraph finite_state_machine {{")?;
        writeln!(f, "    rankdir=LR;")?;
        writeln!(f, "    size=\"8,5\"")?;
        write!(f, "    node [shape = doublecircle]; ")?;
        for (i, state) in states.iter().enumerate() {
            if state.is_final {
                write!(f, "{i} ")?;
            }
        }
        writeln!(f, ";")?;
        writeln!(f, "    node [shape = circle];")?;
        writeln!(f, "    start [label=\"\", shape = none];")?;
        if !states.is_empty() {
            writeln!(f, "    start -> {};", self.automaton.start_state_index())?;
        }
        for (i, state) in states.iter().enumerate() {
            for t in &state.transitions {
                writeln!(
                    f,
                    "    {i} -> {} [ label = \"{}\" ];",
                    t.target,
                    escape(&t.regex.to_string())
                )?;
            }
        }
        writeln!(f, "}}")
    }
}
