//! Analysis parameters

use gnat_core::CoreError;

use crate::error::Result;

/// What the first-order driver emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Directed edges whose score passes the threshold
    Gnats,
    /// The unfiltered causal score of every candidate (distance histogram)
    Cdh,
}

/// Validated parameters shared by both drivers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GnatParams {
    /// Time constant of the synaptic kernel, in ticks
    pub tau: f32,
    /// Score threshold; edges require gamma <= thresh
    pub thresh: f32,
    /// Temporal query radius, in ticks
    pub radius: f64,
}

impl GnatParams {
    /// Create a parameter set, validating each field
    pub fn new(tau: f32, thresh: f32, radius: f64) -> Result<Self> {
        if !(tau.is_finite() && tau > 0.0) {
            return Err(CoreError::invalid_parameter("tau", tau, "finite and > 0").into());
        }
        if !thresh.is_finite() {
            return Err(CoreError::invalid_parameter("thresh", thresh, "finite").into());
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(CoreError::invalid_parameter("causal_radius", radius, "finite and >= 0").into());
        }
        Ok(Self { tau, thresh, radius })
    }

    /// The 1D past window width in whole ticks
    pub fn radius_ticks(&self) -> u64 {
        self.radius as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(GnatParams::new(1.0, 0.5, 10.0).is_ok());
        assert!(GnatParams::new(0.0, 0.5, 10.0).is_err());
        assert!(GnatParams::new(-1.0, 0.5, 10.0).is_err());
        assert!(GnatParams::new(1.0, f32::INFINITY, 10.0).is_err());
        assert!(GnatParams::new(1.0, 0.5, -1.0).is_err());
    }

    #[test]
    fn test_radius_ticks_truncates() {
        let p = GnatParams::new(1.0, 0.5, 10.9).unwrap();
        assert_eq!(p.radius_ticks(), 10);
    }
}
