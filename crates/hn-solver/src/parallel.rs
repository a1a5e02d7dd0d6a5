//! Closed-form flow split between parallel pipes.
//!
//! Branches sharing the same end nodes see the same head loss. With a
//! quadratic friction law and a common friction factor that gives each branch
//! a share proportional to its conveyance `k = sqrt(D⁵ / L)`.

/// Lengths below this are clamped to it (m).
pub const MIN_BRANCH_LENGTH: f64 = 1e-3;

/// One parallel branch. Units only need to be consistent across branches.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub name: String,
    pub diameter: f64,
    pub length: f64,
}

impl Branch {
    pub fn new(name: impl Into<String>, diameter: f64, length: f64) -> Self {
        Self {
            name: name.into(),
            diameter,
            length,
        }
    }

    /// Conveyance `sqrt(D⁵ / L)`; zero for non-positive diameters.
    pub fn conveyance(&self) -> f64 {
        if self.diameter.is_nan() || self.diameter <= 0.0 {
            return 0.0;
        }
        let length = self.length.max(MIN_BRANCH_LENGTH);
        (self.diameter.powi(5) / length).sqrt()
    }
}

/// Flow assigned to one branch.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchFlow {
    pub name: String,
    pub flow: f64,
}

/// Split `total_q` across `branches` in proportion to their conveyance.
///
/// Output order matches input order. If no branch conveys anything, every
/// branch gets zero flow.
pub fn distribute_parallel_flow(total_q: f64, branches: &[Branch]) -> Vec<BranchFlow> {
    let ks: Vec<f64> = branches.iter().map(Branch::conveyance).collect();
    let sum: f64 = ks.iter().sum();
    branches
        .iter()
        .zip(ks)
        .map(|(b, k)| BranchFlow {
            name: b.name.clone(),
            flow: if sum > 0.0 { total_q * k / sum } else { 0.0 },
        })
        .collect()
}
