//! Attenuation formulas shared by the engine fold.

use shieldstack_core::MaterialProperties;

/// Linear attenuation coefficient μ = (μ/ρ)·ρ, 1/cm.
pub fn linear_attenuation(props: &MaterialProperties) -> f64 {
    props.mu_rho * props.density
}

/// Half-value length ln(2)/μ, cm: the thickness that halves the primary
/// beam intensity. A property of the material alone.
pub fn half_value_length(mu: f64) -> f64 {
    std::f64::consts::LN_2 / mu
}

/// First-order linear build-up factor B = 1 + μx.
///
/// A crude stand-in for tabulated scatter build-up factors: it grows
/// without bound in optical depth and is only credible for moderate `mfp`.
/// Known limitation of the model, kept deliberately.
pub fn linear_buildup(mfp: f64) -> f64 {
    1.0 + mfp
}
