//! Hardy Cross loop-flow correction.
//!
//! Each pass walks the loops in order and applies a uniform correction
//! `ΔQ = -Σh / Σ(dh/dQ)` to every member of a loop before moving to the next
//! loop, so later loops see the earlier corrections within the same pass.
//! Pipes that belong to no loop keep their flow.

use hn_headloss::power_law::{self, DEFAULT_EXPONENT};
use hn_network::{Loop, Network, NetworkError};
use tracing::{debug, info, warn};

use crate::error::{SolverError, SolverResult};

/// Hardy Cross solver configuration.
///
/// `exponent` is the nominal exponent of the loop correction. It is applied to
/// every pipe regardless of its own friction law, so with the default of 2 a
/// Hazen-Williams network balances to the quadratic law while reported head
/// losses use 1.852. Set it to 1.852 for an exact Hazen-Williams balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardyCrossConfig {
    /// Nominal exponent `n` in `h = K Q |Q|^(n-1)`, at least 1
    pub exponent: f64,
    /// Convergence threshold on the largest correction of a pass (m³/s)
    pub tolerance: f64,
    /// Maximum number of passes
    pub max_iterations: usize,
}

impl Default for HardyCrossConfig {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
            tolerance: 1e-5,
            max_iterations: 100,
        }
    }
}

impl HardyCrossConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if !(self.exponent.is_finite() && self.exponent >= 1.0) {
            return Err(SolverError::ProblemSetup {
                what: format!("exponent must be at least 1, got {}", self.exponent),
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(SolverError::ProblemSetup {
                what: format!("tolerance must be non-negative, got {}", self.tolerance),
            });
        }
        Ok(())
    }
}

/// Outcome of a Hardy Cross run.
#[derive(Debug, Clone, PartialEq)]
pub struct HardyCrossReport {
    /// Whether the last pass's largest correction fell below tolerance
    pub converged: bool,
    /// Number of passes performed
    pub iterations: usize,
    /// Largest correction of the last pass (0 when no pass ran)
    pub max_correction: f64,
    /// Largest correction of every pass, in order
    pub history: Vec<f64>,
}

/// Correct a flow array in place against the network's loops.
///
/// `flows` is indexed by pipe and is the initial guess on entry. The network
/// itself is only read: its geometry, friction laws, fluid and loops.
pub fn correct_flows(
    network: &Network,
    flows: &mut [f64],
    config: &HardyCrossConfig,
) -> SolverResult<HardyCrossReport> {
    config.validate()?;
    if flows.len() != network.pipes().len() {
        return Err(NetworkError::FlowCountMismatch {
            expected: network.pipes().len(),
            got: flows.len(),
        }
        .into());
    }
    if let Some((i, q)) = flows.iter().enumerate().find(|(_, q)| !q.is_finite()) {
        return Err(SolverError::Numeric {
            what: format!("initial flow of pipe {} is {}", i, q),
        });
    }

    let mut history = Vec::with_capacity(config.max_iterations.min(64));
    let mut converged = false;

    for pass in 1..=config.max_iterations {
        let mut max_correction = 0.0_f64;
        for lp in network.loops() {
            let dq = loop_correction(network, lp, flows, config.exponent)?;
            for m in &lp.members {
                flows[m.pipe.idx()] += dq * m.direction.sign();
            }
            max_correction = max_correction.max(dq.abs());
        }
        history.push(max_correction);
        debug!(pass, max_correction, "hardy cross pass");

        if max_correction < config.tolerance {
            converged = true;
            break;
        }
    }

    Ok(HardyCrossReport {
        converged,
        iterations: history.len(),
        max_correction: history.last().copied().unwrap_or(0.0),
        history,
    })
}

/// Balance the network's loop flows and re-derive every pipe.
///
/// The network's current flows are the initial guess, so calling this again on
/// a solved network is a cheap re-solve. Hitting the iteration cap is not an
/// error: the best-effort flows are kept and `converged` is false.
pub fn solve(network: &mut Network, config: &HardyCrossConfig) -> SolverResult<HardyCrossReport> {
    let mut flows = network.flows();
    let report = correct_flows(network, &mut flows, config)?;
    network.set_flows(&flows)?;

    if report.converged {
        info!(
            iterations = report.iterations,
            max_correction = report.max_correction,
            "hardy cross converged"
        );
    } else {
        warn!(
            iterations = report.iterations,
            max_correction = report.max_correction,
            tolerance = config.tolerance,
            "hardy cross hit the iteration cap without converging"
        );
    }
    Ok(report)
}

/// Uniform correction for one loop at the current flows.
fn loop_correction(network: &Network, lp: &Loop, flows: &[f64], n: f64) -> SolverResult<f64> {
    let fluid = network.fluid();
    let mut sum_h = 0.0;
    let mut sum_d = 0.0;
    for m in &lp.members {
        let pipe = network
            .pipe(m.pipe)
            .ok_or(NetworkError::UnknownPipe { pipe: m.pipe })?;
        let flow = flows[m.pipe.idx()];
        let k = pipe.resistance(flow, fluid);
        let q = flow * m.direction.sign();
        sum_h += power_law::loss(k, q, n);
        sum_d += power_law::slope(k, q, n);
    }

    // All members at zero flow (or zero resistance): nothing to correct.
    if sum_d == 0.0 {
        return Ok(0.0);
    }
    let dq = -sum_h / sum_d;
    if !dq.is_finite() {
        return Err(SolverError::Numeric {
            what: format!("loop '{}' correction is {}", lp.name, dq),
        });
    }
    Ok(dq)
}
