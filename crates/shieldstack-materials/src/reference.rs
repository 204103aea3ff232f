//! The built-in reference catalog.

use shieldstack_core::MaterialProperties;

use crate::MaterialCatalog;

impl MaterialCatalog {
    /// The built-in catalog of five common shielding materials.
    ///
    /// Densities are in g/cm³, mass attenuation coefficients in cm²/g,
    /// representative of broad-beam gamma attenuation. Iteration order is
    /// the registration order below.
    pub fn reference() -> Self {
        let mut catalog = Self::new();
        for (name, density, mu_rho, z) in [
            ("Tungsten-Polymer", 11.0, 0.066, 74),
            ("Borated Polyethylene", 0.95, 0.082, 6),
            ("Lead (Pure)", 11.34, 0.071, 82),
            ("Bismuth-Composite", 9.78, 0.075, 83),
            ("Standard Concrete", 2.35, 0.064, 11),
        ] {
            catalog
                .insert(name, MaterialProperties::new(density, mu_rho, z))
                .expect("reference catalog entries are valid");
        }
        catalog
    }
}
