// ABOUTME: Error types for scan, parse, semantic, and runtime failures

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CoizError {
    /// The scanner already printed one diagnostic per lexical error; this
    /// marker only tells the caller the pass failed.
    #[error("scanning failed")]
    ScanFailed,

    /// Syntactic error with file/line context, formatted like the scanner's
    /// diagnostics.
    #[error("[{file}, line {line}] Error: {message}")]
    Syntax {
        file: String,
        line: usize,
        message: String,
    },

    #[error("Undefined name '{0}'.")]
    UndefinedName(String),

    #[error("Duplicate declaration of '{0}' in the same scope.")]
    DuplicateName(String),

    #[error("'{0}' is not an array and cannot be indexed.")]
    NotIndexable(String),

    #[error("'{0}' is not a function.")]
    NotCallable(String),

    #[error("{name}: expected {expected} argument{}, got {actual}.", if *.expected == 1 { "" } else { "s" })]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A value of the wrong kind reached an operation.
    #[error("{context}: expected {expected}, got {actual}.")]
    TypeMismatch {
        context: String,
        expected: String,
        actual: String,
    },

    #[error("Unsupported operands for '{op}': {lhs} and {rhs}.")]
    InvalidOperands {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("Division by zero.")]
    DivisionByZero,

    #[error("Index {index} out of range for length {len}.")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("print: {0}")]
    Format(String),

    #[error("'return' outside of a function.")]
    ReturnOutsideFunction,

    #[error("Embedded code blocks are not supported: no host evaluator is available.")]
    EmbeddedCodeUnsupported,

    #[error("Cannot import '{file}': {reason}")]
    ImportFailed { file: String, reason: String },
}

impl CoizError {
    /// Create a syntax error with file/line context.
    pub fn syntax(file: &str, line: usize, message: impl Into<String>) -> Self {
        CoizError::Syntax {
            file: file.to_string(),
            line,
            message: message.into(),
        }
    }

    /// Create a type mismatch error for a named operation.
    pub fn type_mismatch(context: &str, expected: &str, actual: &str) -> Self {
        CoizError::TypeMismatch {
            context: context.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an arity error for a named function.
    pub fn arity(name: &str, expected: usize, actual: usize) -> Self {
        CoizError::ArityMismatch {
            name: name.to_string(),
            expected,
            actual,
        }
    }
}
