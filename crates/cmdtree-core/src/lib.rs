//! cmdtree Core - command-tree compiler
//!
//! Compiles a nested tree of configuration commands into self-contained
//! operation descriptors:
//! - Deterministic leaf-path traversal over an arena tree
//! - Undo-path derivation (leaf negation or container removal)
//! - Presence predicates over the observed running configuration
//! - Stable, length-bounded identifiers per leaf
//! - Descriptor assembly, compilation digest and identifier diff
//!
//! Every operation is a pure function of its arguments.

pub mod assemble;
pub mod config;
pub mod diff;
pub mod digest;
pub mod errors;
pub mod identity;
pub mod inverse;
pub mod logging_facility;
pub mod model;
pub mod predicate;
pub mod resource;
pub mod traversal;

// Used by the logging macros
pub use cmdtree_core_types;

// Re-export commonly used types
pub use assemble::{assemble, compile, Compilation};
pub use config::{ConnectionConfig, EnvironmentDoc, Protocol, SecretDoc};
pub use diff::{diff_compilations, diff_ids, CompilationDiff};
pub use errors::{CompileError, ExError, ExErrorKind, Result};
pub use identity::derive_name;
pub use inverse::{invert, toggle};
pub use model::{CommandBatch, CommandPath, CommandTree, OperationDescriptor};
pub use predicate::{compile_predicates, Predicate, PredicatePair};
pub use resource::CommandResource;
pub use traversal::walk;
