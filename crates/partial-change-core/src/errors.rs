use crate::matcher::Evaluation;
use thiserror::Error;

/// Result type alias using PartialChangeError
pub type Result<T> = std::result::Result<T, PartialChangeError>;

/// Fixed message carried by every negated-usage error.
pub const NEGATED_USAGE_MESSAGE: &str = "partial_change does not support negated usage; \
     assert the exact set of changed paths with the positive form instead";

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and for log assertions in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    EmptyPath,
    NotAStructure,

    // Usage
    /// The matcher was invoked in negated form
    NegatedUsage,

    // Verdict
    /// The evaluation completed and its verdict was false
    AssertionFailed,

    // Integration
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::EmptyPath => "ERR_EMPTY_PATH",
            ExErrorKind::NotAStructure => "ERR_NOT_A_STRUCTURE",
            ExErrorKind::NegatedUsage => "ERR_NEGATED_USAGE",
            ExErrorKind::AssertionFailed => "ERR_ASSERTION_FAILED",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and optional
/// context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add path context (dot-joined form)
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for partial-change evaluation
///
/// Errors raised by the caller's mutating block are never represented here:
/// they are returned to the caller as their own type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartialChangeError {
    // ===== Input Errors =====
    /// A path was built from zero keys
    #[error("Path must contain at least one key")]
    EmptyPath,

    /// A target or partial expectation is not a map at its root
    #[error("{role} must be a map-like structure, found {found}")]
    NotAStructure { role: String, found: String },

    // ===== Usage Errors =====
    /// The matcher was invoked in negated form
    #[error("{}", NEGATED_USAGE_MESSAGE)]
    NegatedUsage,

    // ===== Verdict =====
    /// The mutation did not change exactly the declared paths, or a
    /// `from`/`to` expectation did not hold
    #[error("{message}")]
    AssertionFailed {
        message: String,
        evaluation: Box<Evaluation>,
    },

    // ===== Integration Errors =====
    /// A typed target could not be turned into a structure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl PartialChangeError {
    /// Evaluation retained by an assertion failure, if any
    pub fn evaluation(&self) -> Option<&Evaluation> {
        match self {
            PartialChangeError::AssertionFailed { evaluation, .. } => Some(evaluation),
            _ => None,
        }
    }
}

/// Conversion from PartialChangeError to ExError
impl From<PartialChangeError> for ExError {
    fn from(err: PartialChangeError) -> Self {
        match err {
            PartialChangeError::EmptyPath => ExError::new(ExErrorKind::EmptyPath)
                .with_message("Path must contain at least one key"),

            PartialChangeError::NotAStructure { role, found } => {
                ExError::new(ExErrorKind::NotAStructure)
                    .with_message(format!("{} must be a map, found {}", role, found))
            }

            PartialChangeError::NegatedUsage => ExError::new(ExErrorKind::NegatedUsage)
                .with_op(partial_change_core_types::schema::OP_EVALUATE_NEGATED)
                .with_message(NEGATED_USAGE_MESSAGE),

            PartialChangeError::AssertionFailed { message, evaluation } => {
                let mut ex = ExError::new(ExErrorKind::AssertionFailed)
                    .with_op(partial_change_core_types::schema::OP_EVALUATE)
                    .with_message(message);
                if let Some(first) = evaluation.unexpected_changes().iter().next() {
                    ex = ex.with_path(first.to_string());
                } else if let Some(first) = evaluation.missing_changes().iter().next() {
                    ex = ex.with_path(first.to_string());
                }
                ex
            }

            PartialChangeError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to PartialChangeError
impl From<serde_json::Error> for PartialChangeError {
    fn from(err: serde_json::Error) -> Self {
        PartialChangeError::Serialization {
            message: err.to_string(),
        }
    }
}
