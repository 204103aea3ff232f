//! Benchmark profiles for the Shieldstack attenuation library.
//!
//! Provides deterministic stack builders shared by the criterion benches:
//!
//! - [`reference_stack`]: cycles through the built-in catalog materials
//! - [`uniform_stack`]: repeats a single material

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use shieldstack_core::LayerSpec;
use shieldstack_materials::MaterialCatalog;

/// Build an `n`-layer stack cycling through the reference catalog's
/// materials in order, with thicknesses stepping through 1..=5 cm.
pub fn reference_stack(n: usize) -> Vec<LayerSpec> {
    let catalog = MaterialCatalog::reference();
    let names: Vec<String> = catalog.names().map(String::from).collect();
    (0..n)
        .map(|i| {
            let thickness_cm = (i % 5 + 1) as f64;
            LayerSpec::new(names[i % names.len()].clone(), thickness_cm)
        })
        .collect()
}

/// Build an `n`-layer stack of a single material with fixed thickness.
pub fn uniform_stack(material: &str, n: usize, thickness_cm: f64) -> Vec<LayerSpec> {
    (0..n)
        .map(|_| LayerSpec::new(material, thickness_cm))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shieldstack_engine::Attenuator;

    #[test]
    fn reference_stack_is_computable() {
        let catalog = MaterialCatalog::reference();
        let stack = reference_stack(25);
        assert_eq!(stack.len(), 25);
        Attenuator::new(true)
            .compute(&stack, 1000.0, &catalog)
            .unwrap();
    }

    #[test]
    fn uniform_stack_repeats_material() {
        let stack = uniform_stack("Lead (Pure)", 3, 2.0);
        assert!(stack.iter().all(|l| l.material == "Lead (Pure)"));
        assert!(stack.iter().all(|l| l.thickness_cm == 2.0));
    }
}
