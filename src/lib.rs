//! A reverse polish notation calculator.
//!
//! [`calculator::StackCalculator`] holds the operand stack and applies
//! arithmetic and scientific operations to it; [`console::Console`] drives it
//! from line-oriented text input.

pub mod calculator;
pub mod console;
