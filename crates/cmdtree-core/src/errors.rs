use cmdtree_core_types::RequestId;
use thiserror::Error;

/// Result type alias using CompileError
pub type Result<T> = std::result::Result<T, CompileError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that hosts can match on without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    MissingField,

    // Contract
    /// A caller broke a precondition the compiler itself never violates
    InvariantViolation,

    // Integration
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context for
/// debugging. Built from a [`CompileError`] at the host boundary.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a rendered command path or a field name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
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

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised while compiling a command tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// A tree node below the root is not a mapping
    #[error("Malformed command tree node at {path:?}: expected a mapping, found {found}")]
    MalformedNode { path: Vec<String>, found: String },

    /// The tree root is not a mapping
    #[error("Malformed command tree: root must be a mapping, found {found}")]
    MalformedRoot { found: String },

    /// A zero-length path reached an operation that requires a leaf path
    #[error("Empty command path passed to {op}")]
    EmptyPath { op: String },

    /// The resource document could not be decoded
    #[error("Resource decode failed: {message}")]
    ResourceDecode { message: String },

    /// A required field is absent or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Serialization of compiler output failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<CompileError> for ExError {
    fn from(err: CompileError) -> Self {
        match err {
            CompileError::MalformedNode { path, found } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_entity_id(path.join(" > "))
                    .with_message(format!("Expected a mapping, found {}", found))
            }

            CompileError::MalformedRoot { found } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Root must be a mapping, found {}", found)),

            CompileError::EmptyPath { op } => ExError::new(ExErrorKind::InvariantViolation)
                .with_op(op)
                .with_message("Command path must not be empty"),

            CompileError::ResourceDecode { message } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            CompileError::MissingField { field } => ExError::new(ExErrorKind::MissingField)
                .with_entity_id(field)
                .with_message("Required field is missing"),

            CompileError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for CompileError {
    fn from(err: serde_json::Error) -> Self {
        CompileError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CompileError {
    fn from(err: serde_yaml::Error) -> Self {
        CompileError::ResourceDecode {
            message: err.to_string(),
        }
    }
}
