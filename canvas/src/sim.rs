//! Node/link simulation for the particle graph.
//!
//! All logic here is browser-free so it can be unit tested on the host. The
//! only external input is a caller-supplied random source: the browser passes
//! `js_sys::Math::random`, tests pass a deterministic closure.

use crate::consts::{LINK_BASE_ALPHA, LINK_DISTANCE, LINK_PROBABILITY, NODE_COUNT, VELOCITY_SCALE};

#[cfg(test)]
#[path = "sim_test.rs"]
mod sim_test;

/// A moving point in the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// An undirected link between two nodes, by index into [`Graph::nodes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    /// Per-link opacity weight in `[0, 1)`.
    pub strength: f64,
}

/// The full animated graph plus its viewport bounds.
#[derive(Debug, Clone)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub width: f64,
    pub height: f64,
}

impl Graph {
    /// Generate a full-size graph with [`NODE_COUNT`] nodes.
    pub fn generate(width: f64, height: f64, rng: &mut dyn FnMut() -> f64) -> Self {
        Self::generate_with(NODE_COUNT, width, height, rng)
    }

    /// Generate a graph with an explicit node count.
    ///
    /// Nodes are placed uniformly within the viewport with per-axis velocity
    /// in `±VELOCITY_SCALE / 2`. Each unordered node pair is linked with
    /// probability [`LINK_PROBABILITY`] and a random strength.
    pub fn generate_with(count: usize, width: f64, height: f64, rng: &mut dyn FnMut() -> f64) -> Self {
        let nodes: Vec<Node> = (0..count)
            .map(|_| Node {
                x: rng() * width,
                y: rng() * height,
                vx: (rng() - 0.5) * VELOCITY_SCALE,
                vy: (rng() - 0.5) * VELOCITY_SCALE,
            })
            .collect();

        let mut links = Vec::new();
        for from in 0..count {
            for to in (from + 1)..count {
                if rng() < LINK_PROBABILITY {
                    links.push(Link { from, to, strength: rng() });
                }
            }
        }

        Self { nodes, links, width, height }
    }

    /// Advance every node one frame: integrate position, reflect velocity at
    /// the viewport edges, and clamp positions back into bounds.
    pub fn step(&mut self) {
        for node in &mut self.nodes {
            node.x += node.vx;
            node.y += node.vy;

            if node.x < 0.0 || node.x > self.width {
                node.vx = -node.vx;
            }
            if node.y < 0.0 || node.y > self.height {
                node.vy = -node.vy;
            }

            node.x = node.x.clamp(0.0, self.width);
            node.y = node.y.clamp(0.0, self.height);
        }
    }

    /// Update viewport bounds (e.g. after a window resize) and pull any
    /// out-of-bounds nodes back inside.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for node in &mut self.nodes {
            node.x = node.x.clamp(0.0, width);
            node.y = node.y.clamp(0.0, height);
        }
    }

    /// Euclidean distance between a link's endpoints.
    #[must_use]
    pub fn link_length(&self, link: &Link) -> f64 {
        let a = self.nodes[link.from];
        let b = self.nodes[link.to];
        ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
    }
}

/// Opacity for a link of the given length: fades linearly from
/// [`LINK_BASE_ALPHA`] `× strength` at zero distance to invisible at
/// [`LINK_DISTANCE`].
#[must_use]
pub fn link_alpha(distance: f64, strength: f64) -> f64 {
    if distance >= LINK_DISTANCE {
        return 0.0;
    }
    LINK_BASE_ALPHA * strength * (1.0 - distance / LINK_DISTANCE)
}
