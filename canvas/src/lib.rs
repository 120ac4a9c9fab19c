//! Animated particle-graph background for the marketing site hero.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the decorative canvas: generating a random node graph,
//! advancing the motion simulation each frame, and drawing the scene to a 2D
//! context. The host UI layer is responsible only for mounting the canvas
//! element and driving [`engine::Engine::tick`] from an animation-frame loop.
//!
//! The animation is purely decorative: it reads nothing from and writes
//! nothing to the rest of the application.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-bound engine driving the frame loop |
//! | [`sim`] | Browser-free node/link simulation |
//! | [`render`] | Scene drawing against `CanvasRenderingContext2d` |
//! | [`consts`] | Shared tuning constants (counts, radii, colors) |

pub mod consts;
pub mod engine;
pub mod render;
pub mod sim;
