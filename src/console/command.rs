use crate::calculator::{BinaryOp, UnaryOp};

/// A single keypress-equivalent read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text to be entered as a number.
    Entry(String),
    /// Push whatever is pending.
    Enter,
    Binary(BinaryOp),
    Unary(UnaryOp),
    ClearEntry,
    ClearAll,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Interprets one whitespace-free token.
    ///
    /// Anything that is not a known keyword or operator is an entry attempt,
    /// so garbage is reported as an invalid number rather than ignored.
    pub fn parse(token: &str) -> Self {
        #[rustfmt::skip]
        let command = match token.to_ascii_lowercase().as_str() {
            "=" | "enter"                => Command::Enter,
            "c" | "ce"                   => Command::ClearEntry,
            "ac" | "clear"               => Command::ClearAll,
            "." | "stack"                => Command::Show,
            "?" | "help"                 => Command::Help,
            "q" | "quit" | "exit"        => Command::Quit,
            _ => {
                if let Ok(op) = token.parse::<BinaryOp>() {
                    Command::Binary(op)
                } else if let Ok(op) = token.parse::<UnaryOp>() {
                    Command::Unary(op)
                } else {
                    Command::Entry(token.to_string())
                }
            }
        };

        command
    }

    /// Splits a line into commands.
    pub fn parse_line(line: &str) -> Vec<Self> {
        line.split_whitespace().map(Command::parse).collect()
    }
}
