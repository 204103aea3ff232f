//! The sequential per-layer attenuation engine.
//!
//! [`Attenuator::compute`] folds an ordered layer stack strictly left to
//! right: each layer's input intensity is the previous layer's output, so
//! order matters. Validation is fail-fast per layer: the fold stops at the
//! first offending layer and returns an error with no partial output.
//!
//! Constructed via the builder pattern: [`Attenuator::builder`].

use shieldstack_core::{
    BuilderError, ComputeError, LayerResult, LayerSpec, StackOutput, Trace, TracePoint,
};
use shieldstack_materials::MaterialCatalog;

use crate::assessment::TransmissionVerdict;
use crate::physics::{half_value_length, linear_attenuation, linear_buildup};

/// Default fraction of the initial intensity above which the final
/// transmission is judged [`Excessive`](TransmissionVerdict::Excessive).
pub const DEFAULT_TRANSMISSION_THRESHOLD: f64 = 0.01;

/// The layer attenuation engine.
///
/// Each layer is attenuated as:
/// ```text
/// exit = current · B · exp(−μ·x)      μ = (μ/ρ)·ρ,  B = 1 + μ·x or 1
/// ```
/// where `x` is the layer thickness and `B` is the build-up factor when
/// enabled. The transmitted fraction is never clamped. With build-up on, a
/// stack always exits with more intensity than the same stack without it;
/// that overshoot is part of the model.
///
/// # Construction
///
/// ```
/// use shieldstack_engine::Attenuator;
///
/// let engine = Attenuator::builder()
///     .buildup(true)
///     .transmission_threshold(0.01)
///     .build()
///     .unwrap();
/// assert!(engine.uses_buildup());
/// ```
#[derive(Clone, Debug)]
pub struct Attenuator {
    use_buildup: bool,
    transmission_threshold: f64,
}

/// Builder for [`Attenuator`].
///
/// Defaults: build-up disabled, transmission threshold 1%.
#[derive(Clone, Debug)]
pub struct AttenuatorBuilder {
    use_buildup: bool,
    transmission_threshold: f64,
}

impl Attenuator {
    /// Create a new builder for configuring an `Attenuator`.
    pub fn builder() -> AttenuatorBuilder {
        AttenuatorBuilder {
            use_buildup: false,
            transmission_threshold: DEFAULT_TRANSMISSION_THRESHOLD,
        }
    }

    /// Engine with the given build-up setting and the default transmission
    /// threshold.
    pub fn new(use_buildup: bool) -> Self {
        Self {
            use_buildup,
            transmission_threshold: DEFAULT_TRANSMISSION_THRESHOLD,
        }
    }

    /// Whether the linear build-up correction is applied.
    pub fn uses_buildup(&self) -> bool {
        self.use_buildup
    }

    /// The configured transmission threshold fraction.
    pub fn transmission_threshold(&self) -> f64 {
        self.transmission_threshold
    }

    /// Compute per-layer attenuation through `layers`, starting from
    /// `initial_intensity`.
    ///
    /// Layers are processed in input order; each layer's material is
    /// resolved against `catalog` as it is reached. The returned trace has
    /// one point per layer boundary plus the front face, so
    /// `trace.len() == results.len() + 1` and the first point is
    /// `(0, initial_intensity)`.
    ///
    /// Negative initial intensities are accepted mechanically (the formula
    /// is linear-homogeneous) but are a domain misuse the caller should
    /// prevent.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `initial_intensity` is NaN or infinite
    /// - a layer's thickness is non-finite or not positive
    /// - a layer's material is not in `catalog`
    /// - a material's linear attenuation coefficient collapses to zero
    ///   (possible by underflow even though the catalog validates its
    ///   entries)
    pub fn compute(
        &self,
        layers: &[LayerSpec],
        initial_intensity: f64,
        catalog: &MaterialCatalog,
    ) -> Result<StackOutput, ComputeError> {
        if !initial_intensity.is_finite() {
            return Err(ComputeError::NonFiniteIntensity);
        }

        let mut current = initial_intensity;
        let mut depth_cm = 0.0;
        let mut trace = Trace::new();
        trace.push(TracePoint {
            depth_cm,
            intensity: initial_intensity,
        });
        let mut results = Vec::with_capacity(layers.len());

        for (index, layer) in layers.iter().enumerate() {
            if !layer.thickness_cm.is_finite() {
                return Err(ComputeError::NonFiniteThickness { layer: index });
            }
            if layer.thickness_cm <= 0.0 {
                return Err(ComputeError::NonPositiveThickness {
                    layer: index,
                    thickness_cm: layer.thickness_cm,
                });
            }
            let props =
                catalog
                    .get(&layer.material)
                    .ok_or_else(|| ComputeError::UnknownMaterial {
                        name: layer.material.clone(),
                        layer: index,
                    })?;
            let mu = linear_attenuation(props);
            if mu <= 0.0 {
                return Err(ComputeError::NonPositiveAttenuation {
                    material: layer.material.clone(),
                    layer: index,
                    mu,
                });
            }

            let mfp = mu * layer.thickness_cm;
            let buildup = if self.use_buildup {
                linear_buildup(mfp)
            } else {
                1.0
            };
            let exit = current * buildup * (-mfp).exp();
            let efficiency_percent = if current == 0.0 {
                0.0
            } else {
                (1.0 - exit / current) * 100.0
            };

            depth_cm += layer.thickness_cm;
            results.push(LayerResult {
                material: layer.material.clone(),
                half_value_length_cm: half_value_length(mu),
                exit_intensity: exit,
                efficiency_percent,
            });
            trace.push(TracePoint {
                depth_cm,
                intensity: exit,
            });
            current = exit;
        }

        Ok(StackOutput {
            results,
            trace,
            final_intensity: current,
        })
    }

    /// Classify a computed stack's final transmission against the
    /// configured threshold.
    ///
    /// Reads the initial intensity from the output's first trace point.
    pub fn assess(&self, output: &StackOutput) -> TransmissionVerdict {
        if output.final_intensity > self.transmission_threshold * output.initial_intensity() {
            TransmissionVerdict::Excessive
        } else {
            TransmissionVerdict::Effective
        }
    }
}

impl AttenuatorBuilder {
    /// Enable or disable the linear build-up correction (default off).
    pub fn buildup(mut self, enabled: bool) -> Self {
        self.use_buildup = enabled;
        self
    }

    /// Set the transmission threshold fraction (default 0.01). Must be
    /// finite and strictly between 0 and 1.
    pub fn transmission_threshold(mut self, threshold: f64) -> Self {
        self.transmission_threshold = threshold;
        self
    }

    /// Build the engine, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the transmission threshold is NaN, infinite, or
    /// outside the open interval (0, 1).
    pub fn build(self) -> Result<Attenuator, BuilderError> {
        if !self.transmission_threshold.is_finite()
            || self.transmission_threshold <= 0.0
            || self.transmission_threshold >= 1.0
        {
            return Err(BuilderError::InvalidThreshold {
                value: self.transmission_threshold,
            });
        }
        Ok(Attenuator {
            use_buildup: self.use_buildup,
            transmission_threshold: self.transmission_threshold,
        })
    }
}
