//! The binary operation waiting for its second operand.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A pending binary operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Binary percent. Accepted as a pending operation but never evaluates;
    /// the percent key uses the immediate divide-by-100 shortcut instead.
    Percent,
}

/// Returned when a token does not name an operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown operation: {0:?}")]
pub struct UnknownOperation(pub String);

impl Operation {
    /// The four arithmetic operations offered on the keypad.
    pub const ARITHMETIC: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Symbol shown in the history line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Percent => "%",
        }
    }

    /// Evaluate `prev OP current` with IEEE semantics.
    ///
    /// Returns `None` for `Percent`, which has no binary meaning.
    pub fn apply(self, prev: f64, current: f64) -> Option<f64> {
        match self {
            Self::Add => Some(prev + current),
            Self::Subtract => Some(prev - current),
            Self::Multiply => Some(prev * current),
            Self::Divide => Some(prev / current),
            Self::Percent => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "×" | "*" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            "%" => Ok(Self::Percent),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}
