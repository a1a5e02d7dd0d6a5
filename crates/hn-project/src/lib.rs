//! hn-project: scenario file format, validation and network compilation.

pub mod schema;
pub mod validate;

use std::path::Path;

use hn_network::{Direction, Loop, Network, NetworkBuilder, NetworkError};

pub use schema::*;
pub use validate::{ValidationError, validate_scenario};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_yaml(path: &Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_json(path: &Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a scenario, picking the format from the file extension.
///
/// `.json` is read as JSON; anything else as YAML.
pub fn load(path: &Path) -> ProjectResult<Scenario> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}

/// Build a solvable network from a validated scenario.
///
/// Nodes and pipes keep scenario order, so `NodeId`/`PipeId` indices match
/// positions in `scenario.nodes` and `scenario.pipes`. Loop closure is checked
/// here, by the network builder.
pub fn compile_network(scenario: &Scenario) -> ProjectResult<Network> {
    validate_scenario(scenario)?;

    let mut builder = NetworkBuilder::new().with_fluid(scenario.fluid.to_fluid());
    for node in &scenario.nodes {
        builder.add_node(&node.id, node.x, node.y, node.elevation, node.demand)?;
    }

    for pipe in &scenario.pipes {
        let start = lookup_node(&builder, &pipe.start)?;
        let end = lookup_node(&builder, &pipe.end)?;
        let id = builder.add_pipe_with_law(
            &pipe.id,
            start,
            end,
            pipe.length,
            pipe.diameter,
            pipe.friction.to_law(),
        )?;
        builder.set_initial_flow(id, pipe.initial_flow)?;
    }

    let mut loops = Vec::with_capacity(scenario.loops.len());
    for lp in &scenario.loops {
        let mut members = Vec::with_capacity(lp.members.len());
        for (i, member) in lp.members.iter().enumerate() {
            let pipe = builder
                .pipe_id(&member.pipe)
                .ok_or_else(|| ValidationError::MissingReference {
                    id: member.pipe.clone(),
                    context: format!("loop '{}' member {}", lp.id, i),
                })?;
            let direction = Direction::from_sign(member.direction).ok_or_else(|| {
                ValidationError::InvalidValue {
                    field: format!("loop '{}' member {} direction", lp.id, i),
                    value: member.direction.to_string(),
                    reason: "must be 1 or -1".to_string(),
                }
            })?;
            members.push((pipe, direction));
        }
        loops.push(Loop::new(lp.id.clone(), members));
    }
    builder.set_loops(loops)?;

    Ok(builder.build()?)
}

fn lookup_node(builder: &NetworkBuilder, name: &str) -> ProjectResult<hn_core::NodeId> {
    builder.node_id(name).ok_or_else(|| {
        NetworkError::UnknownNodeName {
            name: name.to_string(),
        }
        .into()
    })
}
