use std::collections::BTreeSet;
use std::process::exit;

use clap::Parser;

use refa::{
    args::{Args, Command, RegexInput},
    automaton::{
        pipeline::{self, Stage, DFA_STAGES},
        AutomatonGraphvizPrinter, FiniteAutomaton,
    },
    error_reporting::{report_error, IErr},
    regex::{polish, Regex},
};

fn main() {
    let args = Args::parse();
    let (src_path, src) = match args.cmd.input().load() {
        Ok(loaded) => loaded,
        Err(e) => {
            report_error("", "", IErr::Io(e.to_string()));
            exit(1)
        }
    };
    if let Err(e) = run(&args, &src) {
        report_error(&src_path, &src, e);
        exit(1)
    }
}

pub fn run(args: &Args, src: &str) -> Result<(), IErr> {
    let input = args.cmd.input();
    if args.verbose {
        println!("===== SRC =====");
        println!("{src}");
        println!();
    }
    let regex = parse(input, src)?;
    let alphabet = input.alphabet.chars().collect::<BTreeSet<_>>();
    if args.verbose {
        println!("===== REGEX =====");
        println!("{regex}");
        println!();
    }

    match &args.cmd {
        Command::Accepts { word, .. } => {
            let dfa = trace_dfa(&regex, &alphabet, &[], args.verbose);
            if dfa.accepts(word) {
                println!("ACCEPT");
            } else {
                println!("REJECT");
            }
        }
        Command::Complement { .. } => {
            let dfa = trace_dfa(&regex, &alphabet, &[Stage::Invert], args.verbose);
            println!("{}", pipeline::to_regex(&dfa));
        }
        Command::Minimize { .. } => {
            let dfa = trace_dfa(&regex, &alphabet, &[Stage::Minify], args.verbose);
            println!("===== MINIMAL DFA =====");
            println!("{dfa}");
            println!("===== REGEX =====");
            println!("{}", pipeline::to_regex(&dfa));
        }
        Command::Dot { stage, .. } => {
            let mut automaton = pipeline::automaton_over(&regex, &alphabet);
            let stages = stages_until(*stage);
            pipeline::run_stages(&mut automaton, &stages, |stage, a| {
                trace(args.verbose, stage, a)
            });
            println!("{}", AutomatonGraphvizPrinter::new(&automaton));
        }
        Command::Suffix { ch, k, .. } => {
            match pipeline::shortest_word_with_suffix(&regex, *ch, *k, &alphabet) {
                Some(len) => println!("{len}"),
                None => println!("-1"),
            }
        }
    }
    Ok(())
}

fn parse(input: &RegexInput, src: &str) -> Result<Regex, IErr> {
    if input.polish {
        polish::parse(src).map_err(IErr::Polish)
    } else {
        Regex::parse(src).map_err(IErr::Parser)
    }
}

fn trace(verbose: bool, stage: Stage, automaton: &FiniteAutomaton) {
    if verbose {
        println!("===== {stage} =====");
        println!("{automaton}");
    }
}

/// DFA of `regex` followed by `extra` stages, dumping each step if `verbose`.
fn trace_dfa(
    regex: &Regex,
    alphabet: &BTreeSet<char>,
    extra: &[Stage],
    verbose: bool,
) -> FiniteAutomaton {
    let mut automaton = pipeline::automaton_over(regex, alphabet);
    trace(verbose, Stage::Initial, &automaton);
    let stages = DFA_STAGES.iter().chain(extra).cloned().collect::<Vec<_>>();
    pipeline::run_stages(&mut automaton, &stages, |stage, a| trace(verbose, stage, a));
    automaton
}

/// Stages needed to reach `stage`; `Invert` and `Collapse` start from the
/// minimal DFA.
fn stages_until(stage: Stage) -> Vec<Stage> {
    let minimal = DFA_STAGES
        .iter()
        .chain(&[Stage::Minify])
        .cloned()
        .collect::<Vec<_>>();
    match minimal.iter().position(|s| *s == stage) {
        Some(i) => minimal[..=i].to_vec(),
        None if stage == Stage::Initial => vec![],
        None => minimal.into_iter().chain([stage]).collect(),
    }
}
