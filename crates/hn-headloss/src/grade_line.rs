//! Energy and hydraulic grade lines along a pipe path.
//!
//! Each segment starts with a minor (local) loss `K v²/2g` at its entrance,
//! followed by a linear friction loss `f (L/D) v²/2g` along its length. The
//! hydraulic grade line sits one velocity head below the energy grade line.

use crate::common::{check_finite, circle_area, velocity_head};
use crate::error::{HeadLossError, HeadLossResult};

/// Diameters at or below this (m) are treated as closed.
pub const MIN_OPEN_DIAMETER: f64 = 1e-3;

/// One straight run of pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub length: f64,
    pub diameter: f64,
    /// Minor loss coefficient applied at the segment entrance.
    pub minor_loss: f64,
}

impl Segment {
    pub fn new(length: f64, diameter: f64) -> Self {
        Self {
            length,
            diameter,
            minor_loss: 0.0,
        }
    }

    pub fn with_minor_loss(mut self, k: f64) -> Self {
        self.minor_loss = k;
        self
    }

    fn velocity(&self, flow: f64) -> f64 {
        if self.diameter <= MIN_OPEN_DIAMETER {
            0.0
        } else {
            flow / circle_area(self.diameter)
        }
    }
}

/// A point on the grade lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradePoint {
    /// Distance along the path from its start (m).
    pub station: f64,
    /// Energy grade line, total head (m).
    pub egl: f64,
    /// Hydraulic grade line, piezometric head (m).
    pub hgl: f64,
}

/// Build segments from path vertices, one diameter (and optional minor loss)
/// per span between consecutive vertices.
pub fn segments_from_path(
    points: &[[f64; 2]],
    diameters: &[f64],
    minor_losses: Option<&[f64]>,
) -> HeadLossResult<Vec<Segment>> {
    let spans = points.len().saturating_sub(1);
    if diameters.len() != spans {
        return Err(HeadLossError::InvalidArg {
            what: "one diameter per path span",
        });
    }
    if let Some(ks) = minor_losses {
        if ks.len() != spans {
            return Err(HeadLossError::InvalidArg {
                what: "one minor loss coefficient per path span",
            });
        }
    }

    Ok(points
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let length = (w[1][0] - w[0][0]).hypot(w[1][1] - w[0][1]);
            let k = minor_losses.map_or(0.0, |ks| ks[i]);
            Segment::new(length, diameters[i]).with_minor_loss(k)
        })
        .collect())
}

/// Compute EGL/HGL points for a constant flow through a chain of segments.
///
/// Returns two points per segment (entrance after its minor loss, and exit).
pub fn grade_lines(
    segments: &[Segment],
    flow: f64,
    initial_head: f64,
    friction_factor: f64,
    g: f64,
) -> HeadLossResult<Vec<GradePoint>> {
    check_finite(initial_head, "initial head")?;
    check_finite(flow, "flow")?;
    if !(g.is_finite() && g > 0.0) {
        return Err(HeadLossError::NonPhysical { what: "gravity" });
    }
    if friction_factor.is_nan() || friction_factor < 0.0 {
        return Err(HeadLossError::NonPhysical {
            what: "friction factor",
        });
    }

    let mut points = Vec::with_capacity(2 * segments.len());
    let mut egl = initial_head;
    let mut station = 0.0;

    for seg in segments {
        let v = seg.velocity(flow);
        let hv = velocity_head(v, g);

        egl -= seg.minor_loss * hv;
        points.push(GradePoint {
            station,
            egl,
            hgl: egl - hv,
        });

        if seg.diameter > MIN_OPEN_DIAMETER {
            egl -= friction_factor * (seg.length / seg.diameter) * hv;
        }
        station += seg.length;
        points.push(GradePoint {
            station,
            egl,
            hgl: egl - hv,
        });
    }

    Ok(points)
}
