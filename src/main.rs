use calcdescent::{
    cli::{Command, HELP_TEXT, format_result, interpret_line},
    evaluate,
    util::logging,
};
use clap::{ArgAction, Parser};
use tracing::warn;
use rustyline::{DefaultEditor, error::ReadlineError};

/// calcdescent evaluates arithmetic expressions such as `2 + 3 * 4` or
/// `log(2, pow(2, 10))`.
///
/// Without an expression it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates this expression once and exits instead of starting the
    /// prompt.
    expression: Option<String>,

    /// Increases log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Skips the help text normally printed when the prompt starts.
    #[arg(long)]
    no_help_banner: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Failed to install the logger: {e}");
    }

    if let Some(expression) = args.expression {
        match evaluate(&expression) {
            Ok(value) => println!("{}", format_result(value)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = run_prompt(!args.no_help_banner) {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}

fn run_prompt(show_banner: bool) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;
    if show_banner {
        println!("{HELP_TEXT}");
    }

    loop {
        let line = match editor.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        };

        match interpret_line(&line) {
            Command::Empty => {},
            Command::Help => println!("{HELP_TEXT}"),
            Command::Quit => return Ok(()),
            Command::Evaluate(expression) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    warn!("could not record history: {e}");
                }
                match evaluate(&expression) {
                    Ok(value) => println!("== {}", format_result(value)),
                    Err(e) => println!("!! {e}"),
                }
            },
        }
    }
}
