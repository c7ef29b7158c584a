use std::io::{BufRead, Write};

use anyhow::Context;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::calculator::{OperationError, ParseError, StackCalculator, UnaryOp};

mod command;
pub use command::Command;

const HELP: &str = "\
numbers      enter a number onto the stack
+ - * /      add, subtract, multiply, divide the top two numbers
sin cos tan  trigonometric functions of the top number, in degrees
sqrt         square root of the top number
=            enter the pending number
c            clear the pending entry
ac           clear everything
.            show the stack
q            quit";

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Replace the result display with this text.
    Show(String),
    /// Leave the display as it is.
    Silent,
    Quit,
}

/// How values are written to the result display.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Format {
    pub precision: Option<usize>,
}

impl Format {
    pub fn value(&self, v: f64) -> String {
        match self.precision {
            Some(p) => format!("{:.*}", p, v),
            None => format!("{}", v),
        }
    }
}

/// Terminal stand-in for a calculator keypad.
///
/// Owns the pending entry text, which the engine knows nothing about, and
/// turns engine results and errors into the text shown to the user.
#[derive(Debug, Default)]
pub struct Console {
    calc: StackCalculator,
    pending: String,
    format: Format,
}

impl Console {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    pub fn calculator(&self) -> &StackCalculator {
        &self.calc
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        debug!("command: {:?}", command);

        match command {
            Command::Entry(text) => {
                self.pending = text;
                self.enter()
            }
            Command::Enter => self.enter(),
            Command::Binary(op) => match self.calc.binary_operation(op) {
                Ok(_) => self.show_stack(),
                Err(e) => Outcome::Show(describe_binary_error(&e).to_string()),
            },
            Command::Unary(op) => match self.calc.unary_scientific_operation(op) {
                Ok(_) => self.show_stack(),
                Err(e) => Outcome::Show(describe_unary_error(&e).to_string()),
            },
            Command::ClearEntry => {
                self.calc.clear_entry();
                self.pending.clear();

                Outcome::Silent
            }
            Command::ClearAll => {
                self.calc.clear_all();
                self.pending.clear();

                Outcome::Show("0".to_string())
            }
            Command::Show => self.show_stack(),
            Command::Help => Outcome::Show(HELP.to_string()),
            Command::Quit => Outcome::Quit,
        }
    }

    /// Executes every command on `line`, stopping early on quit.
    pub fn execute_line(&mut self, line: &str) -> Vec<Outcome> {
        let mut outcomes = Vec::new();

        for command in Command::parse_line(line) {
            let outcome = self.execute(command);
            let quit = outcome == Outcome::Quit;

            outcomes.push(outcome);

            if quit {
                break;
            }
        }

        outcomes
    }

    /// Reads commands from `input` until it is exhausted or the user quits,
    /// writing each display update to `out`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut out: W,
        prompt: bool,
    ) -> anyhow::Result<()> {
        let mut lines = input.lines();

        loop {
            if prompt {
                write!(out, "> ").context("Failed to write prompt")?;
                out.flush().context("Failed to flush output")?;
            }

            let line = match lines.next() {
                Some(line) => line.context("Failed to read input")?,
                None => break,
            };

            for outcome in self.execute_line(&line) {
                match outcome {
                    Outcome::Show(text) => {
                        writeln!(out, "{}", text).context("Failed to write output")?
                    }
                    Outcome::Silent => {}
                    Outcome::Quit => {
                        info!("quitting on request");

                        return Ok(());
                    }
                }
            }
        }

        if prompt {
            writeln!(out).context("Failed to write output")?;
        }

        info!("end of input");

        Ok(())
    }

    fn enter(&mut self) -> Outcome {
        match self.calc.push_value(&self.pending) {
            Ok(()) => {
                self.pending.clear();
                self.show_stack()
            }
            Err(e) => Outcome::Show(describe_parse_error(&e).to_string()),
        }
    }

    fn show_stack(&self) -> Outcome {
        let values = self
            .calc
            .snapshot()
            .into_iter()
            .map(|v| self.format.value(v))
            .collect::<Vec<_>>();

        Outcome::Show(format!("Stack: {}", values.join(", ")))
    }
}

pub fn describe_parse_error(e: &ParseError) -> &'static str {
    match e {
        ParseError::EmptyInput => "Enter a number first",
        ParseError::InvalidNumber(_) => "Invalid number",
    }
}

pub fn describe_binary_error(e: &OperationError) -> &'static str {
    #[rustfmt::skip]
    let text = match e {
        OperationError::InsufficientOperands(_) => "Need 2 numbers",
        OperationError::DivisionByZero          => "Divide by zero",
        OperationError::InvalidDomain { .. }    => "Invalid input",
        OperationError::UnknownOperator(_)      => "Unknown op",
    };

    text
}

pub fn describe_unary_error(e: &OperationError) -> &'static str {
    #[rustfmt::skip]
    let text = match e {
        OperationError::InsufficientOperands(_) => "Need a number",
        OperationError::DivisionByZero          => "Divide by zero",
        OperationError::InvalidDomain { op, .. } => match op {
            UnaryOp::Sqrt => "Invalid input for sqrt",
            _             => "Invalid input",
        },
        OperationError::UnknownOperator(_)      => "Unknown operation",
    };

    text
}
