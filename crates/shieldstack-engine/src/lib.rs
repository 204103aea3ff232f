//! Layer attenuation engine for the Shieldstack library.
//!
//! The [`Attenuator`] folds an ordered stack of material layers left to
//! right, applying the exponential attenuation law `I = I₀·B·e^(−μx)` per
//! layer, and produces per-layer results plus a cumulative depth/intensity
//! trace. An optional first-order build-up factor `B = 1 + μx` approximates
//! the contribution of scattered radiation.
//!
//! The computation is pure: no I/O, no state across calls, safe to invoke
//! concurrently against a shared read-only catalog.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assessment;
pub mod attenuator;
pub mod physics;

pub use assessment::TransmissionVerdict;
pub use attenuator::{Attenuator, AttenuatorBuilder, DEFAULT_TRANSMISSION_THRESHOLD};
