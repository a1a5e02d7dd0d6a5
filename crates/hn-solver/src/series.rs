//! Heads down a chain of pipes in series.
//!
//! Every pipe carries the same flow; each one drops the head by its own
//! Darcy-Weisbach loss.

use hn_core::numeric::sign;
use hn_headloss::{Fluid, darcy};

use crate::error::{SolverError, SolverResult};

/// Absolute roughness of smooth drawn tubing (m).
pub const DEFAULT_ROUGHNESS: f64 = 1.5e-6;

/// One pipe of a series chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPipe {
    pub name: String,
    pub length: f64,
    pub diameter: f64,
    /// Absolute roughness (m)
    pub roughness: f64,
}

impl SeriesPipe {
    pub fn new(name: impl Into<String>, length: f64, diameter: f64) -> Self {
        Self {
            name: name.into(),
            length,
            diameter,
            roughness: DEFAULT_ROUGHNESS,
        }
    }

    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }
}

/// State across one pipe of the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStation {
    pub name: String,
    pub velocity: f64,
    /// Signed with the flow (m)
    pub head_loss: f64,
    pub head_in: f64,
    pub head_out: f64,
}

/// Walk the chain from `inlet_head`, one station per pipe.
pub fn series_heads(
    inlet_head: f64,
    flow: f64,
    pipes: &[SeriesPipe],
    fluid: &Fluid,
) -> SolverResult<Vec<SeriesStation>> {
    if !inlet_head.is_finite() || !flow.is_finite() {
        return Err(SolverError::Numeric {
            what: format!("series inlet head {} / flow {}", inlet_head, flow),
        });
    }

    let mut head = inlet_head;
    let mut stations = Vec::with_capacity(pipes.len());
    for pipe in pipes {
        // A closed (zero-diameter) pipe passes nothing, whatever its wall.
        let wall_ok = pipe.roughness.is_finite()
            && pipe.roughness >= 0.0
            && (pipe.diameter <= 0.0 || pipe.roughness < pipe.diameter);
        if !wall_ok {
            return Err(SolverError::ProblemSetup {
                what: format!(
                    "roughness of '{}' must be in [0, {}), got {}",
                    pipe.name, pipe.diameter, pipe.roughness
                ),
            });
        }
        let velocity = darcy::velocity(flow, pipe.diameter);
        let loss = sign(flow)
            * darcy::head_loss(pipe.length, pipe.diameter, velocity, fluid, pipe.roughness);
        if !loss.is_finite() {
            return Err(SolverError::Numeric {
                what: format!("head loss in '{}' is {}", pipe.name, loss),
            });
        }
        let head_out = head - loss;
        stations.push(SeriesStation {
            name: pipe.name.clone(),
            velocity,
            head_loss: loss,
            head_in: head,
            head_out,
        });
        head = head_out;
    }
    Ok(stations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Vec<SeriesPipe> {
        vec![
            SeriesPipe::new("inlet", 20.0, 0.15),
            SeriesPipe::new("A", 50.0, 0.1),
            SeriesPipe::new("outlet", 20.0, 0.15),
        ]
    }

    #[test]
    fn heads_are_continuous_and_falling() {
        let stations = series_heads(100.0, 0.02, &chain(), &Fluid::water()).unwrap();
        assert_eq!(stations.len(), 3);
        assert_eq!(stations[0].head_in, 100.0);
        for w in stations.windows(2) {
            assert_eq!(w[0].head_out, w[1].head_in);
        }
        assert!(stations.iter().all(|s| s.head_loss > 0.0));
        // The narrow middle pipe is the fastest and loses the most.
        assert!(stations[1].velocity > stations[0].velocity);
        assert!(stations[1].head_loss > stations[0].head_loss);
        // Inlet and outlet pipes are identical.
        assert_eq!(stations[0].head_loss, stations[2].head_loss);
    }

    #[test]
    fn reversed_flow_gains_head() {
        let fwd = series_heads(100.0, 0.02, &chain(), &Fluid::water()).unwrap();
        let rev = series_heads(100.0, -0.02, &chain(), &Fluid::water()).unwrap();
        for (f, r) in fwd.iter().zip(&rev) {
            assert_eq!(f.head_loss, -r.head_loss);
        }
        assert!(rev[2].head_out > 100.0);
    }

    #[test]
    fn zero_flow_and_degenerate_pipes() {
        let stations = series_heads(50.0, 0.0, &chain(), &Fluid::water()).unwrap();
        assert!(stations.iter().all(|s| s.head_out == 50.0));

        let pipes = vec![SeriesPipe::new("closed", 10.0, 0.0)];
        let stations = series_heads(50.0, 0.01, &pipes, &Fluid::water()).unwrap();
        assert_eq!(stations[0].velocity, 0.0);
        assert_eq!(stations[0].head_out, 50.0);
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert!(series_heads(f64::NAN, 0.01, &chain(), &Fluid::water()).is_err());
        assert!(series_heads(10.0, f64::INFINITY, &chain(), &Fluid::water()).is_err());
    }

    #[test]
    fn rejects_roughness_as_large_as_the_bore() {
        let mut pipes = chain();
        pipes[1] = SeriesPipe::new("A", 50.0, 0.2).with_roughness(0.74);
        assert!(matches!(
            series_heads(100.0, 0.02, &pipes, &Fluid::water()),
            Err(SolverError::ProblemSetup { .. })
        ));
        pipes[1] = SeriesPipe::new("A", 50.0, 0.2).with_roughness(-1e-3);
        assert!(series_heads(100.0, 0.02, &pipes, &Fluid::water()).is_err());
        pipes[1] = SeriesPipe::new("A", 50.0, 0.2).with_roughness(1e-3);
        assert!(series_heads(100.0, 0.02, &pipes, &Fluid::water()).is_ok());
    }
}
