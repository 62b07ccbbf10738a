#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The right operand of `/` evaluated to zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        offset: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// Byte offset of the operator that overflowed.
        offset: usize,
    },
    /// The evaluator reached a state a well-formed tree cannot produce.
    Internal {
        /// What went wrong.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { offset } => {
                write!(f, "Error at offset {offset}: Division by zero.")
            },
            Self::Overflow { offset } => write!(f,
                                                "Error at offset {offset}: Integer overflow while trying to compute result."),
            Self::Internal { details } => write!(f, "Internal evaluator error: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
