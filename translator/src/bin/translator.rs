//! Translate arithmetic expressions to postfix notation and evaluate them.
//!
//! Usage:
//!   translator `<expr>`...            - translate once, words are joined
//!   translator -- `<expr>`...         - same, for words starting with '-'
//!   translator [--history `<path>`]   - interactive prompt
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod repl {
    use rustyline::error::ReadlineError;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use tracing::warn;
    use translator::{Expression, TranslationError};

    /// Print the translation of `input`, or what went wrong. Returns
    /// whether it succeeded.
    pub fn translate(input: &str, quiet: bool) -> bool {
        let outcome = Expression::new(input)
            .map_err(TranslationError::from)
            .and_then(|expr| expr.translate().map(|t| {
                if quiet {
                    println!("{}", t.answer);
                } else {
                    println!("{}", t);
                }
            }));
        match outcome {
            Ok(()) => true,
            Err(e) => {
                eprintln!("{}", e);
                false
            }
        }
    }

    /// Feed lines from `read` to `translate` until the user quits or the
    /// terminal fails. Non-empty lines are handed to `remember` first.
    pub fn session<R, H>(mut read: R, mut remember: H, quiet: bool) -> Result<(), String>
    where
        R: FnMut() -> Result<String, ReadlineError>,
        H: FnMut(&str),
    {
        loop {
            match read() {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
                Err(e) => return Err(format!("Readline err: {:?}", e)),
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    remember(input);
                    translate(input, quiet);
                }
            }
        }
    }

    pub fn run(history: Option<PathBuf>, quiet: bool) -> Result<(), String> {
        let rl = RefCell::new(rustyline::DefaultEditor::new().map_err(|e| e.to_string())?);
        if let Some(path) = &history {
            // a missing history file is normal on first run
            let _ = rl.borrow_mut().load_history(path);
        }
        let outcome = session(
            || rl.borrow_mut().readline(">> "),
            |input| {
                if let Err(e) = rl.borrow_mut().add_history_entry(input) {
                    warn!("couldn't add {:?} to history: {}", input, e);
                }
            },
            quiet,
        );
        // keep what was typed even if the terminal went away
        if let Some(path) = &history {
            if let Err(e) = rl.borrow_mut().save_history(path) {
                warn!("couldn't save history to {}: {}", path.display(), e);
            }
        }
        outcome
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cli() -> Command {
    Command::new("translator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate arithmetic expressions to postfix notation and evaluate them")
        .arg(
            Arg::new("expr")
                .help("Expression to translate, e.g. '(2+2)*2+1'. Starts a prompt if omitted")
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only print the answer")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .value_name("PATH")
                .help("Prompt history file (default: ~/.translator_history)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn main() -> ExitCode {
    init_logging();
    let matches = cli().get_matches();
    let quiet = matches.get_flag("quiet");

    if let Some(words) = matches.get_many::<String>("expr") {
        let input = words.map(String::as_str).collect::<String>();
        return if repl::translate(&input, quiet) { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let history = matches
        .get_one::<PathBuf>("history")
        .cloned()
        .or_else(|| dirs::home_dir().map(|home| home.join(".translator_history")));
    match repl::run(history, quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
