use serde::{Deserialize, Serialize};

use crate::errors::CommandError;
use crate::math::{wrap_deg, Vec2f};

/// One azimuth unit's setting for a tick.
/// Azimuth is a compass bearing in the hull frame (0° = bow, 90° = starboard).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrusterCommand {
    pub power_pct: f32,
    pub azimuth_deg: f32,
}

impl ThrusterCommand {
    pub const fn new(power_pct: f32, azimuth_deg: f32) -> Self {
        Self { power_pct, azimuth_deg }
    }

    /// Normalized copy: azimuth wrapped into [0, 360).
    /// Power outside 0..=100 and non-finite fields are rejected, not clamped.
    pub fn validated(&self) -> Result<Self, CommandError> {
        if !self.power_pct.is_finite() {
            return Err(CommandError::NotFinite { field: "power_pct" });
        }
        if !self.azimuth_deg.is_finite() {
            return Err(CommandError::NotFinite { field: "azimuth_deg" });
        }
        if !(0.0..=100.0).contains(&self.power_pct) {
            return Err(CommandError::PowerOutOfRange { power_pct: self.power_pct });
        }
        Ok(Self::new(self.power_pct, wrap_deg(self.azimuth_deg)))
    }
}

impl Default for ThrusterCommand {
    fn default() -> Self { Self::new(0.0, 0.0) }
}

/// Everything the operator hands the solver for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlInput {
    pub port: ThrusterCommand,
    pub stbd: ThrusterCommand,
    /// Manual pivot point in hull coordinates; `None` lets the estimator run.
    pub pivot_override: Option<Vec2f>,
}

impl ControlInput {
    pub const fn new(port: ThrusterCommand, stbd: ThrusterCommand) -> Self {
        Self { port, stbd, pivot_override: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Port,
    Starboard,
}

impl Side {
    /// Sign of the lateral axis on this side: +1 starboard, −1 port.
    pub const fn lateral_sign(self) -> f32 {
        match self {
            Side::Starboard => 1.0,
            Side::Port => -1.0,
        }
    }
}

/// Canned engine order, resolved into a thruster pair by the maneuver solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineOrder {
    FullAhead,
    HalfAhead,
    FullAstern,
    HalfAstern,
    FastSideStep { side: Side },
    SlowSideStep { side: Side },
    Spin { side: Side },
}

/// A solved thruster pair, ready to be applied as control input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub port: ThrusterCommand,
    pub stbd: ThrusterCommand,
}
