//! Error types for Covenant kernel operations.

use crate::context::FailureContext;
use crate::requirement::RequirementType;

/// A violated requirement, as returned by every failing check.
///
/// The built-in variants always carry the rendered message as their
/// `Display` output and (except for collaborator guards) the failure context
/// as structured data.
#[derive(Debug, thiserror::Error)]
pub enum ContractViolation {
    /// A precondition found a required value or collaborator absent.
    ///
    /// `data` is `None` for collaborator guards, which fail before any
    /// failure context is built.
    #[error("{message}")]
    ArgumentNull {
        parameter: String,
        message: String,
        data: Option<FailureContext>,
    },

    /// A precondition found a value outside an ordered or length bound.
    #[error("{message}")]
    ArgumentOutOfRange {
        parameter: String,
        actual_value: String,
        message: String,
        data: FailureContext,
    },

    /// Any other violated precondition.
    #[error("{message}")]
    ArgumentInvalid {
        parameter: String,
        message: String,
        data: FailureContext,
    },

    /// A violated postcondition.
    #[error("{message}")]
    PostconditionFailed {
        message: String,
        data: FailureContext,
    },

    /// Whatever a caller-supplied exception factory built.
    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ContractViolation {
    /// The failure context, when the error carries one.
    pub fn data(&self) -> Option<&FailureContext> {
        match self {
            Self::ArgumentNull { data, .. } => data.as_ref(),
            Self::ArgumentOutOfRange { data, .. }
            | Self::ArgumentInvalid { data, .. }
            | Self::PostconditionFailed { data, .. } => Some(data),
            Self::Custom(_) => None,
        }
    }

    /// The offending parameter's source expression, for precondition errors.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::ArgumentNull { parameter, .. }
            | Self::ArgumentOutOfRange { parameter, .. }
            | Self::ArgumentInvalid { parameter, .. } => Some(parameter),
            Self::PostconditionFailed { .. } | Self::Custom(_) => None,
        }
    }

    pub fn actual_value(&self) -> Option<&str> {
        match self {
            Self::ArgumentOutOfRange { actual_value, .. } => Some(actual_value),
            _ => None,
        }
    }

    /// Which side of the contract failed, read back from the context.
    ///
    /// `None` for factory-built errors and collaborator guards.
    pub fn requirement_type(&self) -> Option<RequirementType> {
        match self.data()?.get("RequirementType")? {
            "Precondition" => Some(RequirementType::Precondition),
            "Postcondition" => Some(RequirementType::Postcondition),
            _ => None,
        }
    }

    pub fn requirement_name(&self) -> Option<&str> {
        self.data().and_then(|data| data.get("RequirementName"))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Borrow a factory-built error as its concrete type.
    pub fn downcast_custom_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Custom(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Recover a factory-built error as its concrete type.
    pub fn downcast_custom<E: std::error::Error + 'static>(self) -> Result<E, Self> {
        match self {
            Self::Custom(inner) => inner
                .downcast::<E>()
                .map(|boxed| *boxed)
                .map_err(Self::Custom),
            other => Err(other),
        }
    }
}

/// Errors raised while building or installing the requirement registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("the requirement registry is already initialized")]
    AlreadyInitialized,

    #[error("unknown requirement in template overrides: {0}")]
    UnknownRequirement(String),
}

/// Errors raised while reading template override documents.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid template overrides: {0}")]
    Parse(#[from] toml::de::Error),
}
