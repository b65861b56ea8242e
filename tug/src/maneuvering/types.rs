use serde::{Deserialize, Serialize};

use crate::commands::ControlInput;
use crate::math::Vec2f;

/// Rigid-body state of the tug.
/// Frame conventions:
/// - Hull axes: +y toward the bow, +x to starboard.
/// - World axes: +y north, +x east; `heading_deg` is a compass heading.
/// - `r` is the yaw rate in rad/s, counter-clockwise positive, so positive
///   `r` swings the bow to port and *decreases* the compass heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TugState {
    pub position: Vec2f,
    pub heading_deg: f32,
    /// Surge velocity, m/s, positive ahead.
    pub u: f32,
    /// Sway velocity, m/s, positive to starboard.
    pub v: f32,
    pub r: f32,
}

impl TugState {
    pub const fn at_rest(position: Vec2f, heading_deg: f32) -> Self {
        Self { position, heading_deg, u: 0.0, v: 0.0, r: 0.0 }
    }
}

/// A force system reduced to one point: net force plus the moment about
/// `reference`. Moments are counter-clockwise positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resultant {
    pub force: Vec2f,
    pub moment: f32,
    pub reference: Vec2f,
}

impl Resultant {
    /// Moment about another reference via the parallel-axis relation,
    /// without revisiting the individual forces.
    pub fn moment_about(&self, reference: Vec2f) -> f32 {
        self.moment - (reference - self.reference).cross(self.force)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotRegime {
    NavigationForward,
    NavigationAstern,
    Maneuver,
    /// Manual override in force; the estimator was bypassed.
    Overridden,
}

/// Estimator output: the pivot location plus how it was derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotEstimate {
    pub point: Vec2f,
    pub regime: PivotRegime,
    /// 0 = pure maneuver estimate, 1 = fully on the navigation anchor.
    pub nav_blend: f32,
}

/// Net moment below this magnitude reads as "steady" on the console (t·m).
pub const MOMENT_SENSE_DEADBAND_TM: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationSense {
    Port,
    Steady,
    Starboard,
}

impl RotationSense {
    /// Classify a moment about the pivot; counter-clockwise turns the bow to port.
    pub fn classify(moment_tm: f32) -> Self {
        if moment_tm > MOMENT_SENSE_DEADBAND_TM {
            RotationSense::Port
        } else if moment_tm < -MOMENT_SENSE_DEADBAND_TM {
            RotationSense::Starboard
        } else {
            RotationSense::Steady
        }
    }
}

/// Which azimuth unit sits in the other's wash this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterferenceFlags {
    pub port_struck: bool,
    pub stbd_struck: bool,
}

impl InterferenceFlags {
    pub const fn any(self) -> bool {
        self.port_struck || self.stbd_struck
    }
}

/// Everything the console layer displays for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickOutputs {
    /// Net thrust in the hull frame after wash derating (tonnes).
    pub net_force_t: Vec2f,
    pub force_magnitude_t: f32,
    /// Compass direction of the net thrust, [0, 360).
    pub force_heading_deg: f32,
    /// Moment about the active pivot, counter-clockwise positive (t·m).
    pub net_moment_tm: f32,
    pub rotation: RotationSense,
    pub pivot: Vec2f,
    pub pivot_regime: PivotRegime,
    pub interference: InterferenceFlags,
    /// Where the net-force arrow is drawn from: the thrust-line crossing,
    /// or the power-weighted centroid when the lines are parallel.
    pub force_origin: Vec2f,
}

/// One pose along a predicted track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub t: f32,
    pub position: Vec2f,
    pub heading_deg: f32,
}

/// Term-by-term telemetry for one integration step.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepDebug {
    pub dt: f32,
    pub inputs: ControlInput,
    // Thrust path
    pub force_port_t: Vec2f,
    pub force_stbd_t: Vec2f,
    pub eff_port_t: Vec2f,
    pub eff_stbd_t: Vec2f,
    pub interference: InterferenceFlags,
    pub net_force_t: Vec2f,
    pub moment_center_tm: f32,
    // Pivot path
    pub pivot: Vec2f,
    pub nav_blend: f32,
    pub moment_pivot_tm: f32,
    // Hull reaction (newtons, N·m)
    pub grip: f32,
    pub w_skeg: f32,
    pub w_stern: f32,
    pub f_skeg_n: f32,
    pub f_stern_n: f32,
    pub f_surge_drag_n: f32,
    pub tau_stations_nm: f32,
    pub tau_damp_nm: f32,
    // Integration
    pub du: f32,
    pub dv: f32,
    pub dr: f32,
    pub world_vel: Vec2f,
}
