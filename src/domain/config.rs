//! World configuration loaded from JSON.
//!
//! Every field has a default, so `{}` is a valid configuration:
//!
//! ```json
//! {
//!   "width": 800,
//!   "height": 600,
//!   "time_scale": 1.0,
//!   "mass_policy": "ignore",
//!   "reject_overlapping_spawns": false,
//!   "cull_offscreen": false,
//!   "forces": [{ "name": "gravity", "x": 0, "y": 0.001 }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, EngineResult};

use super::force::Force;

/// How a square's mass enters the integration step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassPolicy {
    /// Forces are already mass-normalized accelerations.
    #[default]
    Ignore,
    /// Acceleration is the force sum divided by the square's mass.
    Divide,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Canvas bounds, informational unless `cull_offscreen` is set
    pub width: f32,
    pub height: f32,
    /// Host clock units -> simulation time units
    pub time_scale: f32,
    pub mass_policy: MassPolicy,
    pub reject_overlapping_spawns: bool,
    pub cull_offscreen: bool,
    /// Initial forces, in index order
    pub forces: Vec<Force>,
}

impl WorldConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: WorldConfig =
            serde_json::from_str(json).map_err(|e| EngineError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        validate_dimensions(self.width, self.height)?;
        validate_time_scale(self.time_scale)?;
        for (index, force) in self.forces.iter().enumerate() {
            if !force.acceleration().is_finite() {
                return Err(EngineError::Configuration(format!(
                    "force {index} (`{}`) has a non-finite component",
                    force.name()
                )));
            }
        }
        Ok(())
    }

    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_mass_policy(mut self, mass_policy: MassPolicy) -> Self {
        self.mass_policy = mass_policy;
        self
    }

    pub fn with_force(mut self, force: Force) -> Self {
        self.forces.push(force);
        self
    }

    pub fn with_reject_overlapping_spawns(mut self, enabled: bool) -> Self {
        self.reject_overlapping_spawns = enabled;
        self
    }

    pub fn with_cull_offscreen(mut self, enabled: bool) -> Self {
        self.cull_offscreen = enabled;
        self
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            time_scale: 1.0,
            mass_policy: MassPolicy::Ignore,
            reject_overlapping_spawns: false,
            cull_offscreen: false,
            forces: Vec::new(),
        }
    }
}

pub(crate) fn validate_dimensions(width: f32, height: f32) -> EngineResult<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(EngineError::Configuration(format!(
            "world dimensions {width}x{height} must be positive"
        )))
    }
}

pub(crate) fn validate_time_scale(time_scale: f32) -> EngineResult<()> {
    if time_scale.is_finite() && time_scale > 0.0 {
        Ok(())
    } else {
        Err(EngineError::Configuration(format!(
            "time scale {time_scale} must be positive"
        )))
    }
}
