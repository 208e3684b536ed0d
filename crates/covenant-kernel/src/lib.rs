//! # Covenant Kernel
//!
//! The reporting engine behind every requirement check: when a check fails,
//! the kernel describes the failure and builds the error handed back to the
//! caller.
//!
//! The kernel is **predicate-agnostic**: it never decides whether a
//! requirement holds and never looks at the checked value again. It only
//! receives the already-rendered facts of a failure.
//!
//! ## Architecture
//!
//! ```text
//! Arg<T> / arg!        ← value + caller source text, captured at compile time
//!     │
//! Facts                ← typed facts, one variant per schema
//!     │
//! FailureContext       ← flattened, ordered key/value bag
//!     │
//! Registry + template  ← default template lookup and `{Key}` rendering
//!     │
//! report               ← caller factory, or (type, subkind) dispatch table
//!     │
//! ContractViolation    ← message + structured data
//! ```

pub mod arg;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod facts;
pub mod registry;
pub mod requirement;
pub mod template;

pub use arg::Arg;
pub use config::TemplateOverrides;
pub use context::{FactKey, FailureContext};
pub use dispatch::{BoxedError, CheckOptions, ExceptionFactory, null_collaborator, report};
pub use error::{ConfigError, ContractViolation, RegistryError};
pub use facts::{Facts, Operand};
pub use registry::{
    Registry, RequirementDescriptor, install_overrides, registry, registry_json,
};
pub use requirement::{FactSchema, FailureSubkind, Requirement, RequirementType};
