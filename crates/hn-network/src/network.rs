//! Core network data structures.

use std::collections::HashMap;

use hn_core::units::{Pressure, Velocity, VolumeRate, constants, kpa, m3ps, mps};
use hn_core::{NodeId, PipeId};
use hn_headloss::{Fluid, FrictionLaw, HeadLossModel, PipeGeometry};

use crate::adjacency::Adjacency;
use crate::error::{NetworkError, NetworkResult};
use crate::validate;

/// Traversal direction of a pipe within a loop, relative to the pipe's
/// declared start → end orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Loop traversal agrees with start → end (+1).
    Forward,
    /// Loop traversal runs end → start (−1).
    Reverse,
}

impl Direction {
    /// +1.0 for `Forward`, −1.0 for `Reverse`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    /// Parse the ±1 convention; any other value is rejected.
    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign {
            1 => Some(Direction::Forward),
            -1 => Some(Direction::Reverse),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// A junction in the network.
///
/// `head` and `pressure` are outputs: they stay at zero until a pressure
/// propagation pass reaches the node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    /// Layout position; carried through for presentation only.
    pub position: [f64; 2],
    /// Ground elevation (m).
    pub elevation: f64,
    /// Net withdrawal (m³/s): positive leaves the network, negative is a source.
    pub demand: f64,
    pub(crate) head: f64,
    pub(crate) pressure: f64,
}

impl Node {
    /// Hydraulic head (m).
    pub fn head(&self) -> f64 {
        self.head
    }

    /// Gauge pressure (kPa).
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Gauge pressure as a unit-carrying quantity.
    pub fn pressure_quantity(&self) -> Pressure {
        kpa(self.pressure)
    }

    /// Pressure head above ground (m).
    pub fn pressure_head(&self) -> f64 {
        self.head - self.elevation
    }
}

/// A pipe between two nodes with its friction law and computed state.
///
/// `flow` is signed relative to `start → end`. `velocity` and `head_loss` are
/// derived from `flow` and always carry its sign.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub id: PipeId,
    pub name: String,
    pub start: NodeId,
    pub end: NodeId,
    pub geometry: PipeGeometry,
    pub friction: FrictionLaw,
    pub(crate) flow: f64,
    pub(crate) velocity: f64,
    pub(crate) head_loss: f64,
}

impl Pipe {
    /// Volumetric flow (m³/s).
    pub fn flow(&self) -> f64 {
        self.flow
    }

    /// Mean velocity (m/s).
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Friction head loss (m).
    pub fn head_loss(&self) -> f64 {
        self.head_loss
    }

    pub fn flow_quantity(&self) -> VolumeRate {
        m3ps(self.flow)
    }

    pub fn velocity_quantity(&self) -> Velocity {
        mps(self.velocity)
    }

    pub fn length(&self) -> f64 {
        self.geometry.length
    }

    pub fn diameter(&self) -> f64 {
        self.geometry.diameter
    }

    /// Start and end nodes as seen when traversing in `direction`.
    pub fn oriented(&self, direction: Direction) -> (NodeId, NodeId) {
        match direction {
            Direction::Forward => (self.start, self.end),
            Direction::Reverse => (self.end, self.start),
        }
    }

    /// Resistance coefficient of this pipe's friction law at `flow`.
    pub fn resistance(&self, flow: f64, fluid: &Fluid) -> f64 {
        self.friction.resistance(self.geometry, flow, fluid)
    }

    pub(crate) fn recompute(&mut self, fluid: &Fluid) {
        self.velocity = self.friction.velocity(self.geometry, self.flow);
        self.head_loss = self.friction.head_loss(self.geometry, self.flow, fluid);
    }
}

/// One pipe of a loop together with its traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopMember {
    pub pipe: PipeId,
    pub direction: Direction,
}

/// A closed cycle of pipes, in traversal order.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    pub name: String,
    pub members: Vec<LoopMember>,
}

impl Loop {
    pub fn new(
        name: impl Into<String>,
        members: impl IntoIterator<Item = (PipeId, Direction)>,
    ) -> Self {
        Self {
            name: name.into(),
            members: members
                .into_iter()
                .map(|(pipe, direction)| LoopMember { pipe, direction })
                .collect(),
        }
    }
}

/// A validated pipe network: nodes, pipes, loops and the carried fluid.
///
/// Topology is fixed once built; flows, loops and node heads can change.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) nodes: Vec<Node>,
    pub(crate) pipes: Vec<Pipe>,
    pub(crate) loops: Vec<Loop>,
    pub(crate) fluid: Fluid,
    pub(crate) node_names: HashMap<String, NodeId>,
    pub(crate) pipe_names: HashMap<String, PipeId>,
    pub(crate) adjacency: Adjacency,
}

impl Network {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    pub fn fluid(&self) -> &Fluid {
        &self.fluid
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.idx())
    }

    /// Get a pipe by ID (returns None if ID out of bounds).
    pub fn pipe(&self, id: PipeId) -> Option<&Pipe> {
        self.pipes.get(id.idx())
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.node_names.get(name).copied()
    }

    pub fn pipe_id(&self, name: &str) -> Option<PipeId> {
        self.pipe_names.get(name).copied()
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.node_id(name).and_then(|id| self.node(id))
    }

    pub fn pipe_by_name(&self, name: &str) -> Option<&Pipe> {
        self.pipe_id(name).and_then(|id| self.pipe(id))
    }

    /// Snapshot of all pipe flows, indexed by pipe.
    pub fn flows(&self) -> Vec<f64> {
        self.pipes.iter().map(|p| p.flow).collect()
    }

    /// Set one pipe's flow and re-derive its velocity and head loss.
    pub fn set_flow(&mut self, pipe: PipeId, flow: f64) -> NetworkResult<()> {
        let fluid = self.fluid;
        let p = self
            .pipes
            .get_mut(pipe.idx())
            .ok_or(NetworkError::UnknownPipe { pipe })?;
        p.flow = flow;
        p.recompute(&fluid);
        Ok(())
    }

    /// Replace every pipe flow (indexed by pipe) and re-derive all pipes.
    pub fn set_flows(&mut self, flows: &[f64]) -> NetworkResult<()> {
        if flows.len() != self.pipes.len() {
            return Err(NetworkError::FlowCountMismatch {
                expected: self.pipes.len(),
                got: flows.len(),
            });
        }
        for (p, &q) in self.pipes.iter_mut().zip(flows) {
            p.flow = q;
        }
        self.recompute_all();
        Ok(())
    }

    /// Recompute velocity and head loss of one pipe from its current flow.
    pub fn recompute_pipe_derived(&mut self, pipe: PipeId) -> NetworkResult<()> {
        let fluid = self.fluid;
        self.pipes
            .get_mut(pipe.idx())
            .ok_or(NetworkError::UnknownPipe { pipe })?
            .recompute(&fluid);
        Ok(())
    }

    /// Recompute velocity and head loss of every pipe.
    pub fn recompute_all(&mut self) {
        let fluid = self.fluid;
        for p in &mut self.pipes {
            p.recompute(&fluid);
        }
    }

    /// Change the fluid and re-derive every pipe.
    pub fn set_fluid(&mut self, fluid: Fluid) {
        self.fluid = fluid;
        self.recompute_all();
    }

    /// Replace the loop set after checking references and closure.
    pub fn set_loops(&mut self, loops: Vec<Loop>) -> NetworkResult<()> {
        validate::validate_loops(&self.pipes, &loops)?;
        self.loops = loops;
        Ok(())
    }

    /// Assign a node's head; pressure follows from its elevation.
    pub fn set_node_head(&mut self, node: NodeId, head: f64) -> NetworkResult<()> {
        let n = self
            .nodes
            .get_mut(node.idx())
            .ok_or(NetworkError::UnknownNode { node })?;
        n.head = head;
        n.pressure = constants::pressure_kpa_from_head(head, n.elevation);
        Ok(())
    }

    /// Reset every node's head and pressure to zero.
    pub fn reset_heads(&mut self) {
        for n in &mut self.nodes {
            n.head = 0.0;
            n.pressure = 0.0;
        }
    }

    /// Mass-balance residual at a node: inflow − outflow − demand (m³/s).
    ///
    /// Zero when the pipe flows exactly supply the node's demand.
    pub fn node_imbalance(&self, node: NodeId) -> NetworkResult<f64> {
        let n = self.node(node).ok_or(NetworkError::UnknownNode { node })?;
        let net_in: f64 = self
            .adjacency
            .neighbors(node)
            .iter()
            .map(|e| {
                let q = self.pipes[e.pipe.idx()].flow;
                match e.direction {
                    // Leaving along start → end.
                    Direction::Forward => -q,
                    Direction::Reverse => q,
                }
            })
            .sum();
        Ok(net_in - n.demand)
    }

    /// Signed sum of pipe head losses around a loop.
    pub fn loop_head_sum(&self, lp: &Loop) -> NetworkResult<f64> {
        lp.members.iter().try_fold(0.0, |acc, m| {
            let p = self
                .pipe(m.pipe)
                .ok_or(NetworkError::UnknownPipe { pipe: m.pipe })?;
            Ok(acc + m.direction.sign() * p.head_loss)
        })
    }
}
