//! Breadth-first head and pressure propagation from a source node.

use std::collections::VecDeque;

use hn_core::NodeId;
use hn_network::{Direction, Network, NetworkError};
use tracing::debug;

use crate::error::{SolverError, SolverResult};

/// Head assigned to one reached node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeHead {
    pub node: NodeId,
    /// Hydraulic head (m)
    pub head: f64,
    /// Gauge pressure (kPa)
    pub pressure: f64,
}

/// Result of a propagation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PropagationReport {
    pub source: NodeId,
    /// Reached nodes in visit order, source first.
    pub heads: Vec<NodeHead>,
    /// Nodes with no pipe path from the source. Their head and pressure are
    /// left as they were.
    pub unreached: Vec<NodeId>,
}

impl PropagationReport {
    pub fn is_complete(&self) -> bool {
        self.unreached.is_empty()
    }
}

/// Assign head and pressure to every node reachable from `source`.
///
/// Pipes are walked in both directions. Crossing a pipe from start to end
/// subtracts its head loss; crossing it from end to start adds it back. The
/// first visit to a node fixes its head, so in a looped network that is not
/// perfectly balanced the result depends on traversal order.
pub fn propagate_pressure(
    network: &mut Network,
    source: NodeId,
    source_head: f64,
) -> SolverResult<PropagationReport> {
    if network.node(source).is_none() {
        return Err(NetworkError::UnknownNode { node: source }.into());
    }
    if !source_head.is_finite() {
        return Err(SolverError::Numeric {
            what: format!("source head is {}", source_head),
        });
    }

    let node_count = network.nodes().len();
    let mut heads: Vec<Option<f64>> = vec![None; node_count];
    let mut order = Vec::with_capacity(node_count);
    let mut queue = VecDeque::new();

    heads[source.idx()] = Some(source_head);
    queue.push_back((source, source_head));

    while let Some((u, head_u)) = queue.pop_front() {
        order.push(u);
        for edge in network.adjacency().neighbors(u) {
            let v = edge.to.idx();
            if heads[v].is_some() {
                continue;
            }
            let h = network.pipes()[edge.pipe.idx()].head_loss();
            let head_v = match edge.direction {
                Direction::Forward => head_u - h,
                Direction::Reverse => head_u + h,
            };
            heads[v] = Some(head_v);
            queue.push_back((edge.to, head_v));
        }
    }

    let mut reached = Vec::with_capacity(order.len());
    for node in order {
        if let Some(head) = heads[node.idx()] {
            network.set_node_head(node, head)?;
            let pressure = network.node(node).map_or(0.0, |n| n.pressure());
            reached.push(NodeHead {
                node,
                head,
                pressure,
            });
        }
    }

    let unreached: Vec<NodeId> = network
        .nodes()
        .iter()
        .filter(|n| heads[n.id.idx()].is_none())
        .map(|n| n.id)
        .collect();
    if !unreached.is_empty() {
        debug!(
            source = %source,
            unreached = unreached.len(),
            "propagation left nodes without a path from the source"
        );
    }

    Ok(PropagationReport {
        source,
        heads: reached,
        unreached,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_network::NetworkBuilder;

    #[test]
    fn chain_heads_drop_along_flow() {
        let mut b = NetworkBuilder::new();
        let a = b.add_node("a", 0.0, 0.0, 0.0, -0.05).unwrap();
        let m = b.add_node("m", 1.0, 0.0, 2.0, 0.0).unwrap();
        let z = b.add_node("z", 2.0, 0.0, 0.0, 0.05).unwrap();
        let p1 = b.add_pipe("p1", a, m, 100.0, 0.2, 100.0).unwrap();
        // Declared against the flow.
        let p2 = b.add_pipe("p2", z, m, 100.0, 0.2, 100.0).unwrap();
        b.set_initial_flow(p1, 0.05).unwrap();
        b.set_initial_flow(p2, -0.05).unwrap();
        let mut net = b.build().unwrap();

        let h = net.pipe(p1).unwrap().head_loss();
        assert!(h > 0.0);
        let report = propagate_pressure(&mut net, a, 40.0).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.heads.len(), 3);
        assert_eq!(report.heads[0].node, a);

        let hm = net.node(m).unwrap();
        assert!((hm.head() - (40.0 - h)).abs() < 1e-12);
        assert!((hm.pressure() - 9.81 * (40.0 - h - 2.0)).abs() < 1e-9);
        let hz = net.node(z).unwrap().head();
        assert!((hz - (40.0 - 2.0 * h)).abs() < 1e-12);
    }

    #[test]
    fn unknown_source_is_an_error() {
        let mut b = NetworkBuilder::new();
        b.add_node("only", 0.0, 0.0, 0.0, 0.0).unwrap();
        let mut net = b.build().unwrap();
        let err = propagate_pressure(&mut net, NodeId::from_index(7), 10.0).unwrap_err();
        assert!(matches!(err, SolverError::Network(NetworkError::UnknownNode { .. })));
    }

    #[test]
    fn non_finite_head_is_an_error() {
        let mut b = NetworkBuilder::new();
        let a = b.add_node("only", 0.0, 0.0, 0.0, 0.0).unwrap();
        let mut net = b.build().unwrap();
        assert!(propagate_pressure(&mut net, a, f64::INFINITY).is_err());
    }
}
