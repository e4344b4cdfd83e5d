use std::io::{self, IsTerminal};

use clap::Parser;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;
use varcalc::{
    cli::{CliError, LineReader, LineSource, PromptMode, Session, Settings},
    interpreter::context::AngleMode,
};

/// varcalc evaluates arithmetic and trigonometric expressions, asking for the
/// value of every variable they use.
///
/// Without an expression it starts an interactive prompt; type `exit` to
/// leave.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Ask for a variable every time it occurs instead of once per name.
    #[arg(short, long)]
    every_occurrence: bool,

    /// Print only the result, without the `where` block listing the values.
    #[arg(short = 'q', long)]
    no_bindings: bool,

    /// Unit of angles for sin, cos, tan, csc, cot and their inverses.
    #[arg(short, long, value_enum, default_value_t = AngleMode::Radians)]
    angle: AngleMode,

    /// Log more; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Its words are joined with spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings { prompt_mode:   if self.every_occurrence {
                                      PromptMode::EveryOccurrence
                                  } else {
                                      PromptMode::OncePerName
                                  },
                   show_bindings: !self.no_bindings,
                   angle_mode:    self.angle, }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn run<S: LineSource>(source: S, args: &Args) -> Result<bool, CliError> {
    let mut session = Session::new(source, io::stdout(), io::stderr(), args.settings());

    if args.expression.is_empty() {
        session.run_repl()?;
        return Ok(true);
    }

    match session.run_once(&args.expression.join(" ")) {
        Ok(report) => {
            println!("{report}");
            Ok(true)
        },
        Err(e) => {
            eprintln!("{e}");
            Ok(false)
        },
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let outcome = if io::stdin().is_terminal() {
        DefaultEditor::new().map_err(CliError::from)
                            .and_then(|editor| run(editor, &args))
    } else {
        run(LineReader::new(io::stdin().lock()), &args)
    };

    match outcome {
        Ok(true) => {},
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
