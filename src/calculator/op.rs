use std::fmt;
use std::str::FromStr;

use super::error::OperationError;

/// Operators taking the two topmost values of the stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Scientific functions taking the topmost value of the stack.
///
/// The trigonometric functions read their operand in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sin,
    Cos,
    Tan,
    Sqrt,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
    ];

    /// `a` is the second value from the top, `b` the top.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, OperationError> {
        use BinaryOp::*;

        #[rustfmt::skip]
        let res = match self {
            Add      => a + b,
            Subtract => a - b,
            Multiply => a * b,
            Divide   => {
                if b == 0.0 {
                    return Err(OperationError::DivisionByZero);
                }

                a / b
            }
        };

        Ok(res)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 4] = [UnaryOp::Sin, UnaryOp::Cos, UnaryOp::Tan, UnaryOp::Sqrt];

    pub fn apply(self, a: f64) -> Result<f64, OperationError> {
        use UnaryOp::*;

        #[rustfmt::skip]
        let res = match self {
            Sin  => a.to_radians().sin(),
            Cos  => a.to_radians().cos(),
            Tan  => a.to_radians().tan(),
            Sqrt => {
                // NaN is rejected along with negatives
                if a.is_nan() || a < 0.0 {
                    return Err(OperationError::InvalidDomain { op: self, operand: a });
                }

                a.sqrt()
            }
        };

        Ok(res)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOp::*;

        #[rustfmt::skip]
        let name = match self {
            Add      => "add",
            Subtract => "subtract",
            Multiply => "multiply",
            Divide   => "divide",
        };

        write!(f, "{}", name)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use UnaryOp::*;

        #[rustfmt::skip]
        let name = match self {
            Sin  => "sin",
            Cos  => "cos",
            Tan  => "tan",
            Sqrt => "sqrt",
        };

        write!(f, "{}", name)
    }
}

impl FromStr for BinaryOp {
    type Err = OperationError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        use BinaryOp::*;

        match tag.to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Add),
            "-" | "sub" | "subtract" => Ok(Subtract),
            "*" | "x" | "mul" | "multiply" => Ok(Multiply),
            "/" | "div" | "divide" => Ok(Divide),
            _ => Err(OperationError::UnknownOperator(tag.to_string())),
        }
    }
}

impl FromStr for UnaryOp {
    type Err = OperationError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        use UnaryOp::*;

        match tag.to_ascii_lowercase().as_str() {
            "sin" => Ok(Sin),
            "cos" => Ok(Cos),
            "tan" => Ok(Tan),
            "sqrt" => Ok(Sqrt),
            _ => Err(OperationError::UnknownOperator(tag.to_string())),
        }
    }
}
