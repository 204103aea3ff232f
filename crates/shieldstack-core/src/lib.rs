//! Core data model for the Shieldstack attenuation library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! material property record, the layer input/output records, the cumulative
//! depth/intensity trace, and the error types shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod material;
pub mod stack;

pub use error::{BuilderError, CatalogError, ComputeError};
pub use material::MaterialProperties;
pub use stack::{LayerResult, LayerSpec, StackOutput, Trace, TracePoint};
