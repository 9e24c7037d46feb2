//! SVG path measurement: total length and point-at-length queries, the two
//! layout facts the curve tracer needs before it can place anything.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg, Point};

use crate::error::{RevealError, RevealResult};

const ARCLEN_ACCURACY: f64 = 1e-4;

/// Measured once per path; the shape is static so lengths never go stale.
#[derive(Clone, Debug)]
pub struct PathGeometry {
    segments: Vec<PathSeg>,
    lengths: Vec<f64>,
    total: f64,
}

impl PathGeometry {
    pub fn from_svg(d: &str) -> RevealResult<Self> {
        let path = BezPath::from_svg(d)
            .map_err(|e| RevealError::geometry(format!("unparsable path data: {e}")))?;
        Self::from_path(&path)
    }

    pub fn from_path(path: &BezPath) -> RevealResult<Self> {
        let segments: Vec<PathSeg> = path.segments().collect();
        if segments.is_empty() {
            return Err(RevealError::geometry("path has no drawable segments"));
        }
        let lengths: Vec<f64> = segments
            .iter()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .collect();
        let total = lengths.iter().sum();
        Ok(Self {
            segments,
            lengths,
            total,
        })
    }

    pub fn length(&self) -> f64 {
        self.total
    }

    /// Point at `distance` along the path. Distance is clamped to
    /// `[0, length]`, so callers can feed `length * progress` directly.
    pub fn point_at(&self, distance: f64) -> Point {
        let mut remaining = distance.clamp(0.0, self.total);
        let last = self.segments.len() - 1;
        for (i, (seg, &len)) in self.segments.iter().zip(&self.lengths).enumerate() {
            if remaining <= len || i == last {
                let t = seg.inv_arclen(remaining.min(len), ARCLEN_ACCURACY);
                return seg.eval(t);
            }
            remaining -= len;
        }
        // The loop always returns on the last segment; constructor guarantees
        // at least one.
        self.segments[last].eval(1.0)
    }
}
