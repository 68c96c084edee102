use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::automaton::pipeline::Stage;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Print every intermediate automaton.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decide whether WORD matches the expression.
    Accepts {
        #[command(flatten)]
        input: RegexInput,

        /// Word to test; omit for the empty word.
        #[arg(long, short = 'w', default_value = "")]
        word: String,
    },
    /// Print a regex for the complement of the language.
    Complement {
        #[command(flatten)]
        input: RegexInput,
    },
    /// Print the minimal DFA and the regex read back from it.
    Minimize {
        #[command(flatten)]
        input: RegexInput,
    },
    /// Print the automaton after STAGE in Graphviz format.
    Dot {
        #[command(flatten)]
        input: RegexInput,

        #[arg(long, value_enum, default_value_t = Stage::Minify)]
        stage: Stage,
    },
    /// Length of the shortest matching word ending in K copies of CH, or -1.
    Suffix {
        #[command(flatten)]
        input: RegexInput,

        /// Letter the word must end with.
        #[arg(short = 'c', long = "char", value_name = "CH")]
        ch: char,

        /// How many times the word must end with CH.
        #[arg(short = 'k', long = "count", value_name = "K")]
        k: usize,
    },
}

#[derive(clap::Args)]
pub struct RegexInput {
    /// Regular expression, e.g. `(ab+ba)*(ε+a+ba)`.
    #[arg(value_name = "REGEX", required_unless_present = "file")]
    pub regex: Option<String>,

    /// Read the expression from FILE instead.
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "regex")]
    pub file: Option<PathBuf>,

    /// The expression is in reverse Polish notation, e.g. `ab.ba.+*`.
    #[arg(short = 'p', long = "polish")]
    pub polish: bool,

    /// Extra letters of the alphabet, besides those in the expression.
    #[arg(short = 'a', long = "alphabet", default_value = "")]
    pub alphabet: String,
}

impl Command {
    pub fn input(&self) -> &RegexInput {
        match self {
            Command::Accepts { input, .. }
            | Command::Complement { input }
            | Command::Minimize { input }
            | Command::Dot { input, .. }
            | Command::Suffix { input, .. } => input,
        }
    }
}

impl RegexInput {
    /// Name for error reports and the expression's source text.
    pub fn load(&self) -> std::io::Result<(String, String)> {
        match (&self.file, &self.regex) {
            (Some(path), _) => {
                let src = std::fs::read_to_string(path)?;
                Ok((path.to_string_lossy().to_string(), src.trim_end().to_string()))
            }
            (None, Some(regex)) => Ok(("<regex>".to_string(), regex.clone())),
            (None, None) => Ok(("<regex>".to_string(), String::new())),
        }
    }
}
