use super::*;

/// Deterministic random source cycling through a fixed sequence.
fn seq_rng(values: Vec<f64>) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

// =============================================================
// Generation
// =============================================================

#[test]
fn generate_produces_node_count_nodes() {
    let mut rng = seq_rng(vec![0.5]);
    let graph = Graph::generate(800.0, 600.0, &mut rng);
    assert_eq!(graph.nodes.len(), NODE_COUNT);
}

#[test]
fn generated_nodes_are_within_bounds() {
    let mut rng = seq_rng(vec![0.0, 0.25, 0.5, 0.75, 0.999]);
    let graph = Graph::generate_with(20, 640.0, 480.0, &mut rng);
    for node in &graph.nodes {
        assert!(node.x >= 0.0 && node.x <= 640.0);
        assert!(node.y >= 0.0 && node.y <= 480.0);
    }
}

#[test]
fn generated_velocities_are_bounded() {
    let mut rng = seq_rng(vec![0.0, 0.999, 0.5, 0.1, 0.9]);
    let graph = Graph::generate_with(20, 640.0, 480.0, &mut rng);
    let half = VELOCITY_SCALE / 2.0;
    for node in &graph.nodes {
        assert!(node.vx.abs() <= half, "vx {} out of range", node.vx);
        assert!(node.vy.abs() <= half, "vy {} out of range", node.vy);
    }
}

#[test]
fn all_pairs_linked_when_rng_below_threshold() {
    // rng always 0.0: every pair roll passes, every strength is 0.0.
    let mut rng = seq_rng(vec![0.0]);
    let graph = Graph::generate_with(5, 100.0, 100.0, &mut rng);
    assert_eq!(graph.links.len(), 5 * 4 / 2);
}

#[test]
fn no_pairs_linked_when_rng_above_threshold() {
    let mut rng = seq_rng(vec![0.999]);
    let graph = Graph::generate_with(5, 100.0, 100.0, &mut rng);
    assert!(graph.links.is_empty());
}

#[test]
fn link_endpoints_are_distinct_and_ordered() {
    let mut rng = seq_rng(vec![0.05, 0.5, 0.2, 0.8]);
    let graph = Graph::generate_with(8, 100.0, 100.0, &mut rng);
    for link in &graph.links {
        assert!(link.from < link.to);
        assert!(link.to < graph.nodes.len());
    }
}

// =============================================================
// Stepping
// =============================================================

fn single_node_graph(node: Node, width: f64, height: f64) -> Graph {
    Graph { nodes: vec![node], links: Vec::new(), width, height }
}

#[test]
fn step_integrates_position() {
    let mut graph = single_node_graph(Node { x: 10.0, y: 20.0, vx: 1.5, vy: -0.5 }, 100.0, 100.0);
    graph.step();
    let node = graph.nodes[0];
    assert!((node.x - 11.5).abs() < f64::EPSILON);
    assert!((node.y - 19.5).abs() < f64::EPSILON);
}

#[test]
fn step_reflects_velocity_at_right_edge() {
    let mut graph = single_node_graph(Node { x: 99.9, y: 50.0, vx: 0.25, vy: 0.0 }, 100.0, 100.0);
    graph.step();
    let node = graph.nodes[0];
    assert!(node.vx < 0.0, "vx should flip after crossing the right edge");
    assert!(node.x <= 100.0, "position should be clamped inside");
}

#[test]
fn step_reflects_velocity_at_top_edge() {
    let mut graph = single_node_graph(Node { x: 50.0, y: 0.1, vx: 0.0, vy: -0.25 }, 100.0, 100.0);
    graph.step();
    let node = graph.nodes[0];
    assert!(node.vy > 0.0, "vy should flip after crossing the top edge");
    assert!(node.y >= 0.0);
}

#[test]
fn step_keeps_interior_node_velocity() {
    let mut graph = single_node_graph(Node { x: 50.0, y: 50.0, vx: 0.2, vy: 0.1 }, 100.0, 100.0);
    graph.step();
    let node = graph.nodes[0];
    assert!((node.vx - 0.2).abs() < f64::EPSILON);
    assert!((node.vy - 0.1).abs() < f64::EPSILON);
}

#[test]
fn repeated_steps_stay_in_bounds() {
    let mut rng = seq_rng(vec![0.1, 0.9, 0.3, 0.7, 0.5]);
    let mut graph = Graph::generate_with(10, 200.0, 150.0, &mut rng);
    for _ in 0..1000 {
        graph.step();
    }
    for node in &graph.nodes {
        assert!(node.x >= 0.0 && node.x <= 200.0);
        assert!(node.y >= 0.0 && node.y <= 150.0);
    }
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_clamps_nodes_into_new_bounds() {
    let mut graph = single_node_graph(Node { x: 90.0, y: 80.0, vx: 0.0, vy: 0.0 }, 100.0, 100.0);
    graph.resize(50.0, 40.0);
    let node = graph.nodes[0];
    assert!((node.x - 50.0).abs() < f64::EPSILON);
    assert!((node.y - 40.0).abs() < f64::EPSILON);
    assert!((graph.width - 50.0).abs() < f64::EPSILON);
    assert!((graph.height - 40.0).abs() < f64::EPSILON);
}

// =============================================================
// Link alpha
// =============================================================

#[test]
fn link_alpha_zero_at_and_beyond_cutoff() {
    assert!((link_alpha(LINK_DISTANCE, 1.0)).abs() < f64::EPSILON);
    assert!((link_alpha(LINK_DISTANCE + 50.0, 1.0)).abs() < f64::EPSILON);
}

#[test]
fn link_alpha_peaks_at_zero_distance() {
    let alpha = link_alpha(0.0, 1.0);
    assert!((alpha - LINK_BASE_ALPHA).abs() < f64::EPSILON);
}

#[test]
fn link_alpha_scales_with_strength() {
    let strong = link_alpha(50.0, 1.0);
    let weak = link_alpha(50.0, 0.5);
    assert!((weak - strong / 2.0).abs() < 1e-12);
}

#[test]
fn link_alpha_decreases_with_distance() {
    assert!(link_alpha(10.0, 0.8) > link_alpha(90.0, 0.8));
}

#[test]
fn link_length_matches_euclidean_distance() {
    let graph = Graph {
        nodes: vec![
            Node { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0 },
            Node { x: 3.0, y: 4.0, vx: 0.0, vy: 0.0 },
        ],
        links: vec![Link { from: 0, to: 1, strength: 1.0 }],
        width: 10.0,
        height: 10.0,
    };
    assert!((graph.link_length(&graph.links[0]) - 5.0).abs() < f64::EPSILON);
}
