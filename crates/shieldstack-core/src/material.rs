//! Shielding material property records.

/// Physical properties of a shielding material.
///
/// Entries are static reference data: built once when the catalog is
/// constructed and immutable for the process lifetime. Range validation
/// (positive density, positive attenuation coefficient) happens at catalog
/// insertion, not here.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialProperties {
    /// Bulk density, g/cm³.
    pub density: f64,
    /// Mass attenuation coefficient μ/ρ, cm²/g.
    pub mu_rho: f64,
    /// Atomic number Z.
    ///
    /// Informational only: captured for future scatter modeling and not
    /// consumed by the current attenuation formulas.
    pub atomic_number: u32,
}

impl MaterialProperties {
    /// Create a material property record.
    pub fn new(density: f64, mu_rho: f64, atomic_number: u32) -> Self {
        Self {
            density,
            mu_rho,
            atomic_number,
        }
    }
}
