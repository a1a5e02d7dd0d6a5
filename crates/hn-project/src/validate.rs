//! Scenario validation logic.

use std::collections::HashSet;

use crate::schema::{FrictionDef, LATEST_VERSION, LoopDef, NodeDef, PipeDef, Scenario};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: impl Into<String>, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn require_finite(field: impl Into<String>, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn require_positive(field: impl Into<String>, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    let fluid = &scenario.fluid;
    if !(fluid.kinematic_viscosity.is_finite() && fluid.kinematic_viscosity >= 0.0) {
        return Err(invalid(
            "fluid.kinematic_viscosity",
            fluid.kinematic_viscosity,
            "must be non-negative",
        ));
    }
    require_positive("fluid.gravity", fluid.gravity)?;

    let solver = &scenario.solver;
    if !(solver.exponent.is_finite() && solver.exponent >= 1.0) {
        return Err(invalid("solver.exponent", solver.exponent, "must be at least 1"));
    }
    if !(solver.tolerance.is_finite() && solver.tolerance >= 0.0) {
        return Err(invalid("solver.tolerance", solver.tolerance, "must be non-negative"));
    }

    let mut node_ids = HashSet::new();
    for node in &scenario.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: node.id.clone(),
                context: "nodes".to_string(),
            });
        }
        validate_node(node)?;
    }

    let mut pipe_ids = HashSet::new();
    for pipe in &scenario.pipes {
        if !pipe_ids.insert(pipe.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: pipe.id.clone(),
                context: "pipes".to_string(),
            });
        }
        validate_pipe(pipe, &node_ids)?;
    }

    let mut loop_ids = HashSet::new();
    for lp in &scenario.loops {
        if !loop_ids.insert(lp.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: lp.id.clone(),
                context: "loops".to_string(),
            });
        }
        validate_loop(lp, &pipe_ids)?;
    }

    if let Some(source) = &scenario.source {
        if !node_ids.contains(source.node.as_str()) {
            return Err(ValidationError::MissingReference {
                id: source.node.clone(),
                context: "source node".to_string(),
            });
        }
        require_finite("source.head", source.head)?;
    }

    Ok(())
}

fn validate_node(node: &NodeDef) -> Result<(), ValidationError> {
    require_finite(format!("node '{}' x", node.id), node.x)?;
    require_finite(format!("node '{}' y", node.id), node.y)?;
    require_finite(format!("node '{}' elevation", node.id), node.elevation)?;
    require_finite(format!("node '{}' demand", node.id), node.demand)?;
    Ok(())
}

fn validate_pipe(pipe: &PipeDef, node_ids: &HashSet<&str>) -> Result<(), ValidationError> {
    for (end, context) in [(&pipe.start, "pipe start"), (&pipe.end, "pipe end")] {
        if !node_ids.contains(end.as_str()) {
            return Err(ValidationError::MissingReference {
                id: end.clone(),
                context: format!("{} of '{}'", context, pipe.id),
            });
        }
    }
    if pipe.start == pipe.end {
        return Err(invalid(
            format!("pipe '{}' end", pipe.id),
            &pipe.end,
            "pipe must join two different nodes",
        ));
    }
    require_positive(format!("pipe '{}' length", pipe.id), pipe.length)?;
    require_positive(format!("pipe '{}' diameter", pipe.id), pipe.diameter)?;
    require_finite(format!("pipe '{}' initial_flow", pipe.id), pipe.initial_flow)?;

    match pipe.friction {
        FrictionDef::HazenWilliams { c } => {
            require_positive(format!("pipe '{}' hazen_williams.c", pipe.id), c)?;
        }
        FrictionDef::DarcyWeisbach { roughness } => {
            if !(roughness.is_finite() && roughness >= 0.0) {
                return Err(invalid(
                    format!("pipe '{}' darcy_weisbach.roughness", pipe.id),
                    roughness,
                    "must be non-negative",
                ));
            }
            if roughness >= pipe.diameter {
                return Err(invalid(
                    format!("pipe '{}' darcy_weisbach.roughness", pipe.id),
                    roughness,
                    "must be smaller than the diameter",
                ));
            }
        }
    }
    Ok(())
}

fn validate_loop(lp: &LoopDef, pipe_ids: &HashSet<&str>) -> Result<(), ValidationError> {
    if lp.members.is_empty() {
        return Err(invalid(format!("loop '{}' members", lp.id), "[]", "loop has no pipes"));
    }
    for (i, member) in lp.members.iter().enumerate() {
        if !pipe_ids.contains(member.pipe.as_str()) {
            return Err(ValidationError::MissingReference {
                id: member.pipe.clone(),
                context: format!("loop '{}' member {}", lp.id, i),
            });
        }
        if member.direction != 1 && member.direction != -1 {
            return Err(invalid(
                format!("loop '{}' member {} direction", lp.id, i),
                member.direction,
                "must be 1 or -1",
            ));
        }
    }
    Ok(())
}
