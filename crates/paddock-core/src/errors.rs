use crate::correlation::RequestId;
use thiserror::Error;

/// Result type alias using the canonical structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error that crosses a crate boundary is classified by one of these
/// kinds. Each kind maps to a stable error code used by the transport layer
/// and by tests that need to tell "no such record" apart from "query failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A by-id lookup matched zero rows
    NotFound,
    /// A row was present but one of its fields failed to convert
    Mapping,
    /// Connection or query execution failure
    Persistence,
    /// Schema creation or seeding failed on the first attempt
    Initialization,
    /// Malformed input at the transport boundary
    InvalidInput,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Mapping => "ERR_MAPPING",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Initialization => "ERR_INITIALIZATION",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity, request) for debugging. Cloneable so that a
/// one-time initialization outcome can be handed to every caller.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
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
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
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

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ExErrorKind::NotFound
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
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain-level failures raised while reading races and matches
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaddockError {
    /// No race with the requested id
    #[error("Race not found: {race_id}")]
    RaceNotFound { race_id: i64 },

    /// No match with the requested id
    #[error("Match not found: {match_id}")]
    MatchNotFound { match_id: i64 },

    /// A stored timestamp could not be parsed
    #[error("Invalid timestamp in column {column}: {value:?}")]
    InvalidTimestamp { column: String, value: String },

    /// A stored race status is neither OPEN nor CLOSED
    #[error("Invalid race status: {value:?}")]
    InvalidRaceStatus { value: String },
}

impl From<PaddockError> for ExError {
    fn from(err: PaddockError) -> Self {
        let message = err.to_string();
        match err {
            PaddockError::RaceNotFound { race_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(race_id.to_string())
                .with_message(message),

            PaddockError::MatchNotFound { match_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(match_id.to_string())
                .with_message(message),

            PaddockError::InvalidTimestamp { .. } | PaddockError::InvalidRaceStatus { .. } => {
                ExError::new(ExErrorKind::Mapping)
                    .with_op("map_row")
                    .with_message(message)
            }
        }
    }
}
