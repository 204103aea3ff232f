//! Shieldstack: quick engineering estimates of radiation attenuation
//! through layered shielding stacks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Shieldstack sub-crates. For most users, adding `shieldstack` as a
//! single dependency is sufficient.
//!
//! The model is the simplified exponential attenuation law
//! `I = I₀·B·e^(−μx)` applied layer by layer, with an optional first-order
//! linear build-up factor `B = 1 + μx` approximating scattered radiation.
//! It is intended for quick estimates, not certified shielding design.
//!
//! # Quick start
//!
//! ```rust
//! use shieldstack::prelude::*;
//!
//! let catalog = MaterialCatalog::reference();
//! let stack = vec![
//!     LayerSpec::new("Lead (Pure)", 2.0),
//!     LayerSpec::new("Standard Concrete", 10.0),
//! ];
//!
//! let engine = Attenuator::builder().buildup(true).build().unwrap();
//! let output = engine.compute(&stack, 1000.0, &catalog).unwrap();
//!
//! assert_eq!(output.results.len(), 2);
//! assert_eq!(output.trace.len(), 3);
//! assert!(output.final_intensity < 1000.0);
//!
//! match engine.assess(&output) {
//!     TransmissionVerdict::Effective => println!("shielding sufficient"),
//!     TransmissionVerdict::Excessive => println!("add thickness or high-Z layers"),
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `shieldstack-core` | Data records, trace, error types |
//! | [`materials`] | `shieldstack-materials` | Material catalog and reference data |
//! | [`engine`] | `shieldstack-engine` | Attenuator, physics formulas, assessment |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data records and error types (`shieldstack-core`).
///
/// Contains [`types::MaterialProperties`], the layer input/output records,
/// the [`types::Trace`] alias, and the error enums.
pub use shieldstack_core as types;

/// Material catalog and built-in reference data (`shieldstack-materials`).
///
/// [`materials::MaterialCatalog`] is the validated name → properties table;
/// [`materials::MaterialCatalog::reference`] builds the five-material
/// built-in catalog.
pub use shieldstack_materials as materials;

/// The attenuation engine (`shieldstack-engine`).
///
/// [`engine::Attenuator`] performs the per-layer fold;
/// [`engine::physics`] exposes the individual formulas.
pub use shieldstack_engine as engine;

/// Common imports for typical Shieldstack usage.
///
/// ```rust
/// use shieldstack::prelude::*;
/// ```
pub mod prelude {
    // Core records
    pub use shieldstack_core::{
        LayerResult, LayerSpec, MaterialProperties, StackOutput, Trace, TracePoint,
    };

    // Errors
    pub use shieldstack_core::{BuilderError, CatalogError, ComputeError};

    // Catalog
    pub use shieldstack_materials::MaterialCatalog;

    // Engine
    pub use shieldstack_engine::{Attenuator, AttenuatorBuilder, TransmissionVerdict};
}
