//! The validated, insertion-ordered material lookup table.

use indexmap::IndexMap;
use shieldstack_core::{CatalogError, MaterialProperties};

/// Name → properties table for shielding materials.
///
/// Backed by an insertion-ordered map, so iterating the catalog (and any
/// report or selection list built from it) is deterministic and matches the
/// order entries were registered. Entries are validated at insertion: every
/// stored material has a positive, finite density and mass attenuation
/// coefficient, so the linear attenuation coefficient derived from any
/// entry is positive.
///
/// The catalog is built once at startup and read concurrently thereafter;
/// it holds no interior mutability.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialCatalog {
    entries: IndexMap<String, MaterialProperties>,
}

impl MaterialCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register a material under `name`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `name` is empty
    /// - the catalog already holds an entry under `name`
    /// - `density` or `mu_rho` is zero, negative, NaN, or infinite
    /// - `atomic_number` is zero
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        props: MaterialProperties,
    ) -> Result<(), CatalogError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if self.entries.contains_key(&name) {
            return Err(CatalogError::DuplicateMaterial { name });
        }
        if !props.density.is_finite() || props.density <= 0.0 {
            return Err(CatalogError::NonPositiveDensity {
                name,
                density: props.density,
            });
        }
        if !props.mu_rho.is_finite() || props.mu_rho <= 0.0 {
            return Err(CatalogError::NonPositiveMuRho {
                name,
                mu_rho: props.mu_rho,
            });
        }
        if props.atomic_number == 0 {
            return Err(CatalogError::ZeroAtomicNumber { name });
        }
        self.entries.insert(name, props);
        Ok(())
    }

    /// Look up a material by name.
    pub fn get(&self, name: &str) -> Option<&MaterialProperties> {
        self.entries.get(name)
    }

    /// Whether the catalog holds an entry under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered materials.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, properties)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MaterialProperties)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over material names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
