//! Layer stack input and output records.

use smallvec::SmallVec;

/// One position in a shielding stack: a material name and a thickness.
///
/// The material name must resolve against the catalog passed to the engine
/// at compute time. Thickness must be a positive, finite number of
/// centimetres; the engine rejects anything else, regardless of any range
/// constraints an input form may additionally enforce.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerSpec {
    /// Catalog key of the layer's material.
    pub material: String,
    /// Layer thickness, cm.
    pub thickness_cm: f64,
}

impl LayerSpec {
    /// Create a layer specification.
    pub fn new(material: impl Into<String>, thickness_cm: f64) -> Self {
        Self {
            material: material.into(),
            thickness_cm,
        }
    }
}

/// Per-layer computation result, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerResult {
    /// Material name, echoed from the input layer.
    pub material: String,
    /// Half-value length ln(2)/μ for this layer's material, cm.
    ///
    /// A property of the material alone; two layers of the same material
    /// report the same value whatever their thicknesses.
    pub half_value_length_cm: f64,
    /// Intensity after traversing this layer.
    pub exit_intensity: f64,
    /// Fraction of the incoming intensity removed by this layer, as a
    /// percentage. Defined as 0 when the incoming intensity is zero.
    pub efficiency_percent: f64,
}

/// One point on the cumulative depth/intensity curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TracePoint {
    /// Cumulative depth from the front face of the stack, cm.
    pub depth_cm: f64,
    /// Intensity at that depth.
    pub intensity: f64,
}

/// The depth/intensity curve for a stack: one point per layer boundary,
/// plus the front face at depth 0.
///
/// Inline storage covers the typical 1–5 layer stack (≤ 6 points) without
/// heap allocation; deeper stacks spill transparently.
pub type Trace = SmallVec<[TracePoint; 8]>;

/// Complete output of one attenuation computation.
#[derive(Clone, Debug, PartialEq)]
pub struct StackOutput {
    /// Per-layer results, one per input layer, in input order.
    pub results: Vec<LayerResult>,
    /// Depth/intensity curve; always `results.len() + 1` points, strictly
    /// increasing in depth.
    pub trace: Trace,
    /// Intensity after the last layer. Equals the last trace point's
    /// intensity.
    pub final_intensity: f64,
}

impl StackOutput {
    /// The intensity at the front face of the stack, from the first trace
    /// point.
    pub fn initial_intensity(&self) -> f64 {
        self.trace.first().map_or(0.0, |p| p.intensity)
    }

    /// Total stack depth, cm, from the last trace point.
    pub fn total_depth_cm(&self) -> f64 {
        self.trace.last().map_or(0.0, |p| p.depth_cm)
    }
}
