//! Integration tests for hn-network.

use hn_core::{NodeId, PipeId};
use hn_headloss::{Fluid, FrictionLaw};
use hn_network::{Direction, Loop, Network, NetworkBuilder, NetworkError};
use proptest::prelude::*;

use Direction::{Forward, Reverse};

/// Seven-node, two-loop distribution grid with a balanced initial guess.
fn two_loop_grid() -> Network {
    let mut b = NetworkBuilder::new();
    let positions = [
        (-4.0, 2.0),
        (-2.0, 2.0),
        (0.0, 2.0),
        (-2.0, 0.0),
        (0.0, 0.0),
        (-2.0, -2.0),
        (0.0, -2.0),
    ];
    let nodes: Vec<NodeId> = positions
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let demand = if i == 0 { -0.3 } else { 0.05 };
            b.add_node(format!("N{i}"), x, y, 10.0, demand).unwrap()
        })
        .collect();

    let defs = [
        (0, 1, 200.0, 0.4),
        (1, 2, 100.0, 0.2),
        (3, 4, 100.0, 0.2),
        (5, 6, 100.0, 0.2),
        (1, 3, 100.0, 0.2),
        (2, 4, 100.0, 0.2),
        (3, 5, 100.0, 0.2),
        (4, 6, 100.0, 0.2),
    ];
    let guesses = [0.3, 0.1, 0.05, 0.0, 0.15, 0.05, 0.05, 0.05];
    let pipes: Vec<PipeId> = defs
        .iter()
        .zip(guesses)
        .enumerate()
        .map(|(i, (&(s, e, l, d), q))| {
            let p = b
                .add_pipe(format!("P{i}"), nodes[s], nodes[e], l, d, 100.0)
                .unwrap();
            b.set_initial_flow(p, q).unwrap();
            p
        })
        .collect();

    b.set_loops(vec![
        Loop::new(
            "L1",
            [(pipes[1], Forward), (pipes[5], Forward), (pipes[2], Reverse), (pipes[4], Reverse)],
        ),
        Loop::new(
            "L2",
            [(pipes[2], Forward), (pipes[7], Forward), (pipes[3], Reverse), (pipes[6], Reverse)],
        ),
    ])
    .unwrap();
    b.build().unwrap()
}

#[test]
fn build_sample_grid() {
    let net = two_loop_grid();
    assert_eq!(net.nodes().len(), 7);
    assert_eq!(net.pipes().len(), 8);
    assert_eq!(net.loops().len(), 2);
    assert_eq!(net.adjacency().edge_count(), 16);

    assert_eq!(net.node_by_name("N4").unwrap().position, [0.0, 0.0]);
    assert_eq!(net.pipe_by_name("P7").unwrap().diameter(), 0.2);
    assert!(net.node_id("missing").is_none());
}

#[test]
fn initial_guess_is_mass_balanced() {
    let net = two_loop_grid();
    for node in net.nodes() {
        let r = net.node_imbalance(node.id).unwrap();
        assert!(r.abs() < 1e-12, "node {} imbalance {}", node.name, r);
    }
}

#[test]
fn derived_state_follows_flow() {
    let mut net = two_loop_grid();
    let p3 = net.pipe_id("P3").unwrap();
    assert_eq!(net.pipe(p3).unwrap().head_loss(), 0.0);

    net.set_flow(p3, -0.02).unwrap();
    let pipe = net.pipe(p3).unwrap();
    assert!(pipe.velocity() < 0.0);
    assert!(pipe.head_loss() < 0.0);
    assert_eq!(pipe.flow_quantity().value, -0.02);
    assert_eq!(pipe.velocity_quantity().value, pipe.velocity());

    let mut flows = net.flows();
    flows[3] = 0.02;
    net.set_flows(&flows).unwrap();
    assert!(net.pipe(p3).unwrap().head_loss() > 0.0);

    assert_eq!(
        net.set_flows(&[0.0; 3]),
        Err(NetworkError::FlowCountMismatch {
            expected: 8,
            got: 3
        })
    );
}

#[test]
fn loop_head_sum_uses_directions() {
    let net = two_loop_grid();
    let lp = &net.loops()[0];
    let expected: f64 = lp
        .members
        .iter()
        .map(|m| m.direction.sign() * net.pipe(m.pipe).unwrap().head_loss())
        .sum();
    assert_eq!(net.loop_head_sum(lp).unwrap(), expected);
}

#[test]
fn set_loops_rejects_open_cycle() {
    let mut net = two_loop_grid();
    let p = |name: &str| net.pipe_id(name).unwrap();
    // P1 (N1→N2) then P2 forward (N3→N4) do not connect.
    let bad = Loop::new("bad", [(p("P1"), Forward), (p("P2"), Forward)]);
    let err = net.set_loops(vec![bad]).unwrap_err();
    assert!(matches!(err, NetworkError::OpenLoop { .. }));
    // The previous loops survive a rejected replacement.
    assert_eq!(net.loops().len(), 2);
}

#[test]
fn node_head_sets_pressure() {
    let mut net = two_loop_grid();
    let n0 = net.node_id("N0").unwrap();
    net.set_node_head(n0, 50.0).unwrap();
    let node = net.node(n0).unwrap();
    assert_eq!(node.head(), 50.0);
    assert!((node.pressure() - 9.81 * 40.0).abs() < 1e-9);
    assert!((node.pressure_head() - 40.0).abs() < 1e-12);
    assert!((node.pressure_quantity().value - 392_400.0).abs() < 1e-6);

    net.reset_heads();
    assert_eq!(net.node(n0).unwrap().pressure(), 0.0);
    assert!(net.set_node_head(NodeId::from_index(99), 1.0).is_err());
}

#[test]
fn darcy_pipes_depend_on_fluid() {
    let mut b = NetworkBuilder::new().with_fluid(Fluid::water());
    let a = b.add_node("A", 0.0, 0.0, 0.0, 0.0).unwrap();
    let c = b.add_node("C", 0.0, 0.0, 0.0, 0.0).unwrap();
    let p = b
        .add_pipe_with_law("P", a, c, 100.0, 0.1, FrictionLaw::darcy_weisbach(1.5e-6))
        .unwrap();
    b.set_initial_flow(p, 0.01).unwrap();
    let mut net = b.build().unwrap();
    let h_water = net.pipe(p).unwrap().head_loss();

    net.set_fluid(Fluid::water().with_gravity(4.905));
    let h_low_g = net.pipe(p).unwrap().head_loss();
    assert!((h_low_g - 2.0 * h_water).abs() < 1e-9 * h_water);
}

proptest! {
    #[test]
    fn imbalances_sum_to_total_withdrawal(flows in prop::collection::vec(-1.0f64..1.0, 8)) {
        // Each pipe flow leaves one node and enters another, so only demand
        // survives the sum over all nodes.
        let mut net = two_loop_grid();
        net.set_flows(&flows).unwrap();
        let total: f64 = net
            .nodes()
            .iter()
            .map(|n| net.node_imbalance(n.id).unwrap())
            .sum();
        let demand: f64 = net.nodes().iter().map(|n| n.demand).sum();
        prop_assert!((total + demand).abs() < 1e-12);
    }
}
