use crate::error::{RevealError, RevealResult};

/// Per-child delay offsets for an ordered group: `base + index * interval`.
/// Offsets are non-decreasing in index; the first equals `base`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaggerSchedule {
    delays: Vec<f64>,
}

impl StaggerSchedule {
    pub fn new(count: usize, base: f64, interval: f64) -> RevealResult<Self> {
        if !base.is_finite() || base < 0.0 {
            return Err(RevealError::validation(
                "stagger base delay must be finite and >= 0",
            ));
        }
        if !interval.is_finite() || interval < 0.0 {
            return Err(RevealError::validation(
                "stagger interval must be finite and >= 0",
            ));
        }
        let delays = (0..count).map(|i| base + i as f64 * interval).collect();
        Ok(Self { delays })
    }

    pub fn delay(&self, index: usize) -> Option<f64> {
        self.delays.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.delays.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }
}
