//! Network validation logic.

use std::collections::HashSet;

use hn_core::PipeId;

use crate::error::{NetworkError, NetworkResult};
use crate::network::{Loop, Pipe};

/// Check every loop: pipes exist, none repeats, and the members close.
pub(crate) fn validate_loops(pipes: &[Pipe], loops: &[Loop]) -> NetworkResult<()> {
    for lp in loops {
        validate_loop(pipes, lp)?;
    }
    Ok(())
}

/// A loop is closed when each member's oriented end node equals the next
/// member's oriented start node, wrapping from the last member to the first.
pub(crate) fn validate_loop(pipes: &[Pipe], lp: &Loop) -> NetworkResult<()> {
    if lp.members.is_empty() {
        return Err(NetworkError::EmptyLoop {
            name: lp.name.clone(),
        });
    }

    let mut seen: HashSet<PipeId> = HashSet::with_capacity(lp.members.len());
    let mut ends = Vec::with_capacity(lp.members.len());
    for m in &lp.members {
        let pipe = pipes
            .get(m.pipe.idx())
            .ok_or(NetworkError::UnknownPipe { pipe: m.pipe })?;
        if !seen.insert(m.pipe) {
            return Err(NetworkError::RepeatedPipe {
                name: lp.name.clone(),
                pipe: m.pipe,
            });
        }
        ends.push(pipe.oriented(m.direction));
    }

    let n = ends.len();
    for i in 0..n {
        let (_, to) = ends[i];
        let (from_next, _) = ends[(i + 1) % n];
        if to != from_next {
            return Err(NetworkError::OpenLoop {
                name: lp.name.clone(),
                position: i,
                expected: to,
                found: from_next,
            });
        }
    }

    Ok(())
}

/// Check that a pipe dimension is finite and strictly positive.
pub(crate) fn positive(owner: &str, what: &'static str, value: f64) -> NetworkResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidParameter {
            owner: owner.to_string(),
            what,
            value,
        })
    }
}

/// Check that a value is finite (any sign).
pub(crate) fn finite(owner: &str, what: &'static str, value: f64) -> NetworkResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NetworkError::InvalidParameter {
            owner: owner.to_string(),
            what,
            value,
        })
    }
}
