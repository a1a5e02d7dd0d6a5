//! Incremental network builder.

use std::collections::HashMap;

use hn_core::{NodeId, PipeId};
use hn_headloss::{Fluid, FrictionLaw, PipeGeometry};

use crate::adjacency::Adjacency;
use crate::error::{NetworkError, NetworkResult};
use crate::network::{Loop, Network, Node, Pipe};
use crate::validate;

/// Builder for constructing a network incrementally.
///
/// Every `add_*` call fails fast on bad input (duplicate names, unknown
/// nodes, non-positive dimensions), so `build()` only has to assemble the
/// adjacency and derive the initial pipe state.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    pipes: Vec<Pipe>,
    loops: Vec<Loop>,
    fluid: Fluid,
    node_names: HashMap<String, NodeId>,
    pipe_names: HashMap<String, PipeId>,
}

impl NetworkBuilder {
    /// Create a new empty builder carrying water.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different fluid for Darcy-Weisbach pipes.
    pub fn with_fluid(mut self, fluid: Fluid) -> Self {
        self.fluid = fluid;
        self
    }

    /// Add a node and return its ID. Names must be unique.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        x: f64,
        y: f64,
        elevation: f64,
        demand: f64,
    ) -> NetworkResult<NodeId> {
        let name = name.into();
        if self.node_names.contains_key(&name) {
            return Err(NetworkError::DuplicateNode { name });
        }
        validate::finite(&name, "elevation", elevation)?;
        validate::finite(&name, "demand", demand)?;

        let id = NodeId::from_index(self.nodes.len() as u32);
        self.node_names.insert(name.clone(), id);
        self.nodes.push(Node {
            id,
            name,
            position: [x, y],
            elevation,
            demand,
            head: 0.0,
            pressure: 0.0,
        });
        Ok(id)
    }

    /// Add a Hazen-Williams pipe with roughness coefficient `c`.
    pub fn add_pipe(
        &mut self,
        name: impl Into<String>,
        start: NodeId,
        end: NodeId,
        length: f64,
        diameter: f64,
        c: f64,
    ) -> NetworkResult<PipeId> {
        self.add_pipe_with_law(name, start, end, length, diameter, FrictionLaw::hazen_williams(c))
    }

    /// Add a pipe with an explicit friction law.
    pub fn add_pipe_with_law(
        &mut self,
        name: impl Into<String>,
        start: NodeId,
        end: NodeId,
        length: f64,
        diameter: f64,
        friction: FrictionLaw,
    ) -> NetworkResult<PipeId> {
        let name = name.into();
        if self.pipe_names.contains_key(&name) {
            return Err(NetworkError::DuplicatePipe { name });
        }
        for node in [start, end] {
            if node.idx() >= self.nodes.len() {
                return Err(NetworkError::UnknownNode { node });
            }
        }
        if start == end {
            return Err(NetworkError::SelfLoop { pipe: name });
        }
        validate::positive(&name, "length", length)?;
        validate::positive(&name, "diameter", diameter)?;
        match friction {
            FrictionLaw::HazenWilliams(hw) => validate::positive(&name, "Hazen-Williams C", hw.c)?,
            // Swamee-Jain stops meaning anything once ε/D nears 3.7.
            FrictionLaw::DarcyWeisbach(dw) => {
                if !(dw.roughness.is_finite() && dw.roughness >= 0.0 && dw.roughness < diameter) {
                    return Err(NetworkError::InvalidParameter {
                        owner: name,
                        what: "absolute roughness",
                        value: dw.roughness,
                    });
                }
            }
        }

        let id = PipeId::from_index(self.pipes.len() as u32);
        self.pipe_names.insert(name.clone(), id);
        self.pipes.push(Pipe {
            id,
            name,
            start,
            end,
            geometry: PipeGeometry::new(length, diameter),
            friction,
            flow: 0.0,
            velocity: 0.0,
            head_loss: 0.0,
        });
        Ok(id)
    }

    /// Set the initial flow guess for a pipe (default 0).
    pub fn set_initial_flow(&mut self, pipe: PipeId, flow: f64) -> NetworkResult<()> {
        let p = self
            .pipes
            .get_mut(pipe.idx())
            .ok_or(NetworkError::UnknownPipe { pipe })?;
        validate::finite(&p.name, "initial flow", flow)?;
        p.flow = flow;
        Ok(())
    }

    /// Replace the loop set. Loops must reference pipes already added.
    pub fn set_loops(&mut self, loops: Vec<Loop>) -> NetworkResult<()> {
        validate::validate_loops(&self.pipes, &loops)?;
        self.loops = loops;
        Ok(())
    }

    /// Look up a node added earlier by name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.node_names.get(name).copied()
    }

    /// Look up a pipe added earlier by name.
    pub fn pipe_id(&self, name: &str) -> Option<PipeId> {
        self.pipe_names.get(name).copied()
    }

    /// Assemble the network and derive velocity/head loss from initial flows.
    pub fn build(self) -> NetworkResult<Network> {
        validate::validate_loops(&self.pipes, &self.loops)?;
        let adjacency = Adjacency::from_pipes(self.nodes.len(), &self.pipes);

        let mut network = Network {
            nodes: self.nodes,
            pipes: self.pipes,
            loops: self.loops,
            fluid: self.fluid,
            node_names: self.node_names,
            pipe_names: self.pipe_names,
            adjacency,
        };
        network.recompute_all();
        Ok(network)
    }
}
