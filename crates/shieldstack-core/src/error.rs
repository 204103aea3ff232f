//! Error types for the Shieldstack workspace.
//!
//! Organized by subsystem: catalog construction, engine configuration, and
//! the compute fold itself. All errors are fatal to the single operation
//! that raised them; there is no retry and no partial result.

use std::error::Error;
use std::fmt;

/// Errors from the engine's compute operation, one per rejected input
/// condition.
///
/// Validation is fail-fast per layer: the fold stops at the first offending
/// layer and returns, fabricating nothing for the layers after it.
#[derive(Clone, Debug, PartialEq)]
pub enum ComputeError {
    /// A layer references a material name absent from the catalog.
    UnknownMaterial {
        /// The unresolved material name.
        name: String,
        /// Zero-based index of the offending layer.
        layer: usize,
    },
    /// A layer's thickness is zero or negative.
    NonPositiveThickness {
        /// Zero-based index of the offending layer.
        layer: usize,
        /// The rejected thickness, cm.
        thickness_cm: f64,
    },
    /// A layer's thickness is NaN or infinite.
    NonFiniteThickness {
        /// Zero-based index of the offending layer.
        layer: usize,
    },
    /// The resolved linear attenuation coefficient is not positive, so the
    /// half-value length would be undefined.
    NonPositiveAttenuation {
        /// The material whose coefficient collapsed.
        material: String,
        /// Zero-based index of the offending layer.
        layer: usize,
        /// The computed μ value, 1/cm.
        mu: f64,
    },
    /// The initial intensity is NaN or infinite.
    NonFiniteIntensity,
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMaterial { name, layer } => {
                write!(f, "layer {layer}: unknown material '{name}'")
            }
            Self::NonPositiveThickness {
                layer,
                thickness_cm,
            } => {
                write!(
                    f,
                    "layer {layer}: thickness must be positive, got {thickness_cm} cm"
                )
            }
            Self::NonFiniteThickness { layer } => {
                write!(f, "layer {layer}: thickness must be finite")
            }
            Self::NonPositiveAttenuation {
                material,
                layer,
                mu,
            } => {
                write!(
                    f,
                    "layer {layer}: material '{material}' has non-positive linear \
                     attenuation coefficient ({mu} 1/cm)"
                )
            }
            Self::NonFiniteIntensity => {
                write!(f, "initial intensity must be finite")
            }
        }
    }
}

impl Error for ComputeError {}

/// Errors from inserting an entry into a material catalog.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogError {
    /// The material name is empty.
    EmptyName,
    /// The catalog already holds an entry under this name.
    DuplicateMaterial {
        /// The colliding name.
        name: String,
    },
    /// Density is zero, negative, NaN, or infinite.
    NonPositiveDensity {
        /// The offending material name.
        name: String,
        /// The rejected density, g/cm³.
        density: f64,
    },
    /// Mass attenuation coefficient is zero, negative, NaN, or infinite.
    NonPositiveMuRho {
        /// The offending material name.
        name: String,
        /// The rejected coefficient, cm²/g.
        mu_rho: f64,
    },
    /// Atomic number is zero.
    ZeroAtomicNumber {
        /// The offending material name.
        name: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "material name must not be empty"),
            Self::DuplicateMaterial { name } => {
                write!(f, "material '{name}' is already in the catalog")
            }
            Self::NonPositiveDensity { name, density } => {
                write!(
                    f,
                    "material '{name}': density must be positive and finite, got {density} g/cm3"
                )
            }
            Self::NonPositiveMuRho { name, mu_rho } => {
                write!(
                    f,
                    "material '{name}': mass attenuation coefficient must be positive \
                     and finite, got {mu_rho} cm2/g"
                )
            }
            Self::ZeroAtomicNumber { name } => {
                write!(f, "material '{name}': atomic number must be at least 1")
            }
        }
    }
}

impl Error for CatalogError {}

/// Errors from building an engine with invalid configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum BuilderError {
    /// The transmission threshold is outside the open interval (0, 1) or
    /// not finite.
    InvalidThreshold {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold { value } => {
                write!(
                    f,
                    "transmission threshold must be a finite fraction in (0, 1), got {value}"
                )
            }
        }
    }
}

impl Error for BuilderError {}
