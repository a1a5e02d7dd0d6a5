//! Compact node → pipe adjacency for traversals.
//!
//! Each pipe contributes two directed edges: `start → end` tagged
//! `Forward` at its start node, and `end → start` tagged `Reverse` at its end
//! node. Edges at a node keep pipe order so traversals are deterministic.

use hn_core::{NodeId, PipeId};

use crate::network::{Direction, Pipe};

/// Directed edge leaving a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub pipe: PipeId,
    /// `Forward` if the edge follows the pipe's start → end orientation.
    pub direction: Direction,
}

/// Offsets into a flat edge list: node i's edges are
/// `edges[offsets[i]..offsets[i + 1]]`.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    offsets: Vec<usize>,
    edges: Vec<Edge>,
}

impl Adjacency {
    pub fn from_pipes(node_count: usize, pipes: &[Pipe]) -> Self {
        let mut buckets: Vec<Vec<Edge>> = vec![Vec::new(); node_count];
        for pipe in pipes {
            if let Some(b) = buckets.get_mut(pipe.start.idx()) {
                b.push(Edge {
                    to: pipe.end,
                    pipe: pipe.id,
                    direction: Direction::Forward,
                });
            }
            if let Some(b) = buckets.get_mut(pipe.end.idx()) {
                b.push(Edge {
                    to: pipe.start,
                    pipe: pipe.id,
                    direction: Direction::Reverse,
                });
            }
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut edges = Vec::with_capacity(2 * pipes.len());
        offsets.push(0);
        for bucket in buckets {
            edges.extend(bucket);
            offsets.push(edges.len());
        }

        Self { offsets, edges }
    }

    /// Edges leaving `node`; empty for unknown nodes.
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        let idx = node.idx();
        if idx + 1 >= self.offsets.len() {
            return &[];
        }
        &self.edges[self.offsets[idx]..self.offsets[idx + 1]]
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
