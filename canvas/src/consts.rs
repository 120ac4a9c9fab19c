//! Tuning constants for the particle-graph animation.

/// Number of nodes generated for a full-size graph.
pub const NODE_COUNT: usize = 50;

/// Velocity scale: per-axis speed is uniform in `±VELOCITY_SCALE / 2`.
pub const VELOCITY_SCALE: f64 = 0.5;

/// Node dot radius in CSS pixels.
pub const NODE_RADIUS: f64 = 2.0;

/// Probability that any given node pair is linked.
pub const LINK_PROBABILITY: f64 = 0.1;

/// Links further apart than this many pixels are not drawn.
pub const LINK_DISTANCE: f64 = 100.0;

/// Peak link opacity before strength/distance scaling.
pub const LINK_BASE_ALPHA: f64 = 0.3;

/// Alpha of the black fade rect painted each frame (motion trails).
pub const TRAIL_FADE_ALPHA: f64 = 0.05;

/// Node fill color.
pub const NODE_COLOR: &str = "rgba(59, 130, 246, 0.8)";
