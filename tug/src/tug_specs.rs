use serde::{Deserialize, Serialize};

use crate::errors::CommandError;
use crate::math::Vec2f;

/// Precomputed maneuvering parameters for a specific tug hull class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TugPhysicsSpec {
    pub m: f32,
    pub i_z: f32,
    pub length: f32,
    pub beam: f32,
    /// Static thrust of one azimuth unit at 100% power (tonnes).
    pub bollard_pull_t: f32,
    pub thruster_port: Vec2f,
    pub thruster_stbd: Vec2f,
    /// Bow skeg lateral control point; also the forward pivot anchor.
    pub skeg_y: f32,
    /// Stern lateral control point; also the astern pivot anchor.
    pub stern_y: f32,
    pub k_surge: f32,
    pub k_skeg: f32,
    pub k_stern: f32,
    pub k_yaw: f32,
    pub d_surge: f32,
    pub d_sway: f32,
    pub d_yaw: f32,
    /// Forward speed at which the skeg's lateral grip saturates (m/s).
    pub u_grip: f32,
    /// Surge speed separating the navigation regimes from maneuvering (m/s).
    pub u_nav: f32,
    pub wash_radius: f32,
    pub wash_derate: f32,
    /// Working position of the pivot marker before the estimator takes over.
    pub pivot_default: Vec2f,
    pub pivot_x_max: f32,
    pub pivot_y_max: f32,
}

impl TugPhysicsSpec {
    /// Check a manual pivot against the hull working bounds. Never clamps.
    pub fn validate_pivot(&self, p: Vec2f) -> Result<Vec2f, CommandError> {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(CommandError::NotFinite { field: "pivot" });
        }
        if p.x.abs() > self.pivot_x_max || p.y.abs() > self.pivot_y_max {
            return Err(CommandError::PivotOutOfBounds { x: p.x, y: p.y });
        }
        Ok(p)
    }
}

pub mod tugspecs {
    use super::*;

    // 32.5 m ASD harbor tug, 70 t bollard pull over two azimuth units
    pub fn centurion_spec() -> TugPhysicsSpec {
        TugPhysicsSpec {
            m: 700_000.0, // kg (700 t displacement)
            i_z: 6.0e7,
            length: 32.5,
            beam: 11.7,
            bollard_pull_t: 35.0,
            thruster_port: Vec2f::new(-2.7, -12.0),
            thruster_stbd: Vec2f::new(2.7, -12.0),
            skeg_y: 14.0,
            stern_y: -10.0,
            // Quadratic resistance, N per (m/s)². The skeg bites hard once the
            // hull has way on; the flat stern stays slippery so it can skid.
            k_surge: 16_700.0,
            k_skeg: 850_000.0,
            k_stern: 60_000.0,
            k_yaw: 0.6e8,
            // Small linear damping so residual motion settles at very low speeds
            d_surge: 40_000.0,
            d_sway: 80_000.0,
            d_yaw: 1.0e7,
            u_grip: 3.0,
            u_nav: 0.5,
            wash_radius: 2.0,
            wash_derate: 0.8,
            pivot_default: Vec2f::new(0.0, 5.42),
            pivot_x_max: 5.0,
            pivot_y_max: 16.0,
        }
    }
}
