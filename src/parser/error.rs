use thiserror::Error;

/// The three failure classes of the pipeline, in precedence order.
/// None of these are recovered internally: the first one raised aborts
/// the run with no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Header absent, malformed, or not the first logical content line.
    #[error("header error: {0}")]
    Header(String),

    /// A token anywhere in the body failing grammar, arity, or
    /// permitted-kind checks, including unknown opcodes.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// A condition not attributable to the input: an I/O failure reading
    /// the source, or an invariant violation caught during serialization.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ParseError {
    /// Process exit status corresponding to this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::Header(_) => 21,
            ParseError::Syntax(_) => 23,
            ParseError::Internal(_) => 99,
        }
    }
}
