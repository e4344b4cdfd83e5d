use std::{
    fmt,
    io::{self, BufRead, Write},
};

use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{debug, info};

use crate::{
    Node, VariableContext, collect_variables, compile, evaluate,
    interpreter::{constants::is_constant, context::AngleMode},
    unique_variables,
};

/// Prompt shown when waiting for an expression.
pub const EXPRESSION_PROMPT: &str = "math> ";
/// Line that ends an interactive session.
pub const EXIT_COMMAND: &str = "exit";

/// Failures that end a session.
///
/// A bad expression is not one of them: it is reported and the session
/// carries on. See [`SessionError`].
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The line editor failed.
    #[error("Failed to read input: {0}")]
    Readline(#[from] ReadlineError),
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Why a single evaluation did not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The expression could not be compiled or evaluated.
    #[error(transparent)]
    Expression(#[from] crate::Error),
    /// Input ended while a variable value was being asked for.
    #[error("Input closed before a value for '{0}' was given.")]
    InputClosed(String),
    /// The session itself failed.
    #[error(transparent)]
    Cli(#[from] CliError),
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        Self::Cli(CliError::Io(e))
    }
}

/// How often a variable is asked for when it occurs several times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptMode {
    /// Once per distinct name, in order of first occurrence.
    #[default]
    OncePerName,
    /// Once per occurrence; the last answer for a name is the one used.
    EveryOccurrence,
}

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// How repeated variables are prompted for.
    pub prompt_mode:   PromptMode,
    /// Whether reports list the variable values under a `where` line.
    pub show_bindings: bool,
    /// The unit of angles for trigonometric functions.
    pub angle_mode:    AngleMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self { prompt_mode:   PromptMode::default(),
               show_bindings: true,
               angle_mode:    AngleMode::default(), }
    }
}

/// Where a session reads its lines from.
pub trait LineSource {
    /// Shows `prompt` and reads one line without its line ending.
    ///
    /// Returns `Ok(None)` once no more input will come.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads lines from any buffered reader, e.g. piped standard input.
///
/// Prompts are not shown, since nobody is looking at them.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps `reader`.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// The outcome of one evaluation, ready to be printed.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The evaluated tree.
    pub expression:    Node,
    /// Each distinct variable with the value it was evaluated with, in order
    /// of first occurrence.
    pub bindings:      Vec<(String, f64)>,
    /// The result.
    pub result:        f64,
    /// Whether [`fmt::Display`] lists the bindings.
    pub show_bindings: bool,
}

impl fmt::Display for Report {
    /// Without variables: `\t<expr> = <result>`.
    /// With variables: the expression, a `where` line, one `\t<name> =
    /// <value>` line per variable, then ` = <result>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bindings.is_empty() || !self.show_bindings {
            return write!(f, "\t{} = {}", self.expression, self.result);
        }
        writeln!(f, "\t{}", self.expression)?;
        writeln!(f, "where")?;
        for (name, value) in &self.bindings {
            writeln!(f, "\t{name} = {value}")?;
        }
        write!(f, " = {}", self.result)
    }
}

/// Drives evaluations: reads expressions and values from a [`LineSource`],
/// writes reports to `out` and problems to `err`.
pub struct Session<S, W, E> {
    source:   S,
    out:      W,
    err:      E,
    settings: Settings,
}

impl<S: LineSource, W: Write, E: Write> Session<S, W, E> {
    /// Creates a session.
    pub const fn new(source: S, out: W, err: E, settings: Settings) -> Self {
        Self { source,
               out,
               err,
               settings }
    }

    /// Runs the read-eval-print loop.
    ///
    /// Each line is evaluated and its report printed. A line that fails to
    /// compile or evaluate is reported on the error stream and the loop goes
    /// on. The loop ends on the line `exit` or when input runs out.
    pub fn run_repl(&mut self) -> Result<(), CliError> {
        info!("starting interactive session");
        while let Some(line) = self.source.read_line(EXPRESSION_PROMPT)? {
            let line = line.trim();
            if line == EXIT_COMMAND {
                break;
            }
            if line.is_empty() {
                continue;
            }

            match self.run_once(line) {
                Ok(report) => writeln!(self.out, "{report}")?,
                Err(SessionError::Expression(e)) => writeln!(self.err, "{e}")?,
                Err(SessionError::InputClosed(name)) => {
                    debug!(%name, "input closed while prompting");
                    break;
                },
                Err(SessionError::Cli(e)) => return Err(e),
            }
        }
        info!("interactive session ended");
        Ok(())
    }

    /// Compiles and evaluates one expression, prompting for its variables.
    pub fn run_once(&mut self, source: &str) -> Result<Report, SessionError> {
        let expression = compile(source)?;
        let context = self.solicit(&expression)?;
        let result = evaluate(&expression, &context).map_err(crate::Error::from)?;

        let bindings = unique_variables(&expression).into_iter()
                                                    .filter_map(|name| {
                                                        context.get(&name).map(|v| (name, v))
                                                    })
                                                    .collect();

        Ok(Report { expression,
                    bindings,
                    result,
                    show_bindings: self.settings.show_bindings })
    }

    /// Asks for a value for each variable of `expression`; constants are not
    /// asked for.
    fn solicit(&mut self, expression: &Node) -> Result<VariableContext, SessionError> {
        let names = match self.settings.prompt_mode {
            PromptMode::OncePerName => unique_variables(expression),
            PromptMode::EveryOccurrence => collect_variables(expression),
        };

        let mut context = VariableContext::new().with_angle_mode(self.settings.angle_mode);
        for name in names.into_iter().filter(|name| !is_constant(name)) {
            let value = self.read_value(&name)?;
            context.insert(name, value);
        }
        Ok(context)
    }

    /// Prompts until a line parses as a number.
    fn read_value(&mut self, name: &str) -> Result<f64, SessionError> {
        let prompt = format!("input> {name} = ");
        loop {
            let Some(line) = self.source.read_line(&prompt)? else {
                return Err(SessionError::InputClosed(name.to_string()));
            };
            match line.trim().parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.err, "'{}' is not a number.", line.trim())?,
            }
        }
    }

    /// Consumes the session, returning its output streams.
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}
