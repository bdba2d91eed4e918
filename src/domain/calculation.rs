// ============================================================================
// Calculation Domain Model
// ============================================================================

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationId(Uuid);

impl CalculationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CalculationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CalculationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Sub,
    Mul,
}

impl Operation {
    /// Lowercase command name ("add", "sub", "mul").
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '*',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Accepts the command name or the operator symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" | "+" => Ok(Operation::Add),
            "sub" | "-" => Ok(Operation::Sub),
            "mul" | "*" => Ok(Operation::Mul),
            other => Err(format!(
                "unknown operation '{}': expected add, sub or mul",
                other
            )),
        }
    }
}

// ============================================================================
// Calculation Request
// ============================================================================

/// One arithmetic request: an operation, two digit strings and an optional base.
///
/// When `base` is `None` the evaluating calculator's configured radix is used.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calculation {
    pub id: CalculationId,
    pub operation: Operation,
    pub base: Option<u32>,
    pub lhs: String,
    pub rhs: String,
}

impl Calculation {
    pub fn new(operation: Operation, lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self {
            id: CalculationId::new(),
            operation,
            base: None,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn add(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self::new(Operation::Add, lhs, rhs)
    }

    pub fn sub(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self::new(Operation::Sub, lhs, rhs)
    }

    pub fn mul(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self::new(Operation::Mul, lhs, rhs)
    }

    /// Builder method: evaluate in an explicit base
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = Some(base);
        self
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operation.symbol(), self.rhs)?;
        if let Some(base) = self.base {
            write!(f, " (base {})", base)?;
        }
        Ok(())
    }
}
