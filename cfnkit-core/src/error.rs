//! Error types

/// Error raised while reading an intrinsic function from JSON
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntrinsicError {
    #[error("Unknown intrinsic function '{name}'")]
    UnknownFunction { name: String },

    #[error("Invalid arguments for {function}: {message}")]
    InvalidArguments {
        function: &'static str,
        message: String,
    },
}

impl IntrinsicError {
    pub(crate) fn invalid(function: &'static str, message: impl Into<String>) -> Self {
        IntrinsicError::InvalidArguments {
            function,
            message: message.into(),
        }
    }
}

/// Error raised by `Fn::GetAtt` helpers on typed resources
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttributeError {
    #[error(
        "{resource_type} has no attribute '{attribute}', expected one of: {}",
        expected.join(", ")
    )]
    UnknownAttribute {
        resource_type: &'static str,
        attribute: String,
        expected: Vec<&'static str>,
    },
}

/// Template error
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Invalid logical ID '{logical_id}': must be non-empty and alphanumeric")]
    InvalidLogicalId { logical_id: String },

    #[error("Duplicate logical ID '{logical_id}' in {section}")]
    DuplicateLogicalId {
        logical_id: String,
        section: &'static str,
    },

    #[error("Resource '{logical_id}' not found")]
    ResourceNotFound { logical_id: String },

    #[error("Resource '{logical_id}' has type {found}, expected {expected}")]
    TypeMismatch {
        logical_id: String,
        expected: &'static str,
        found: String,
    },

    #[error("Resource '{logical_id}': {source}")]
    InvalidResource {
        logical_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read template: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Schema conformance violation found by [`crate::conformance`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConformanceError {
    #[error("{type_name}: {variant} sample rejected: {message}")]
    SampleRejected {
        type_name: &'static str,
        variant: &'static str,
        message: String,
    },

    #[error("{type_name}: {variant} sample does not round-trip")]
    RoundTripMismatch {
        type_name: &'static str,
        variant: &'static str,
    },

    #[error("{type_name}: required property '{pointer}' can be omitted")]
    RequiredNotEnforced {
        type_name: &'static str,
        pointer: String,
    },

    #[error("{type_name}: property '{pointer}' does not accept an intrinsic: {message}")]
    IntrinsicRejected {
        type_name: &'static str,
        pointer: String,
        message: String,
    },

    #[error("{type_name}: resource accepted with Type '{found}'")]
    TypeNotEnforced {
        type_name: &'static str,
        found: &'static str,
    },

    #[error("{type_name}: unknown property accepted at '{pointer}'")]
    UnknownPropertyAccepted {
        type_name: &'static str,
        pointer: String,
    },
}
