use crate::tug_specs::TugPhysicsSpec;

use super::util::smoothstep;

// Hull reaction terms. Forces in newtons, torques in N·m; all quadratic
// terms are sign-preserving (`w·|w|`).

/// Skeg grip in [0,1]: no lateral bite at rest, saturating at `u_grip`.
pub(super) fn skeg_grip(spec: &TugPhysicsSpec, u: f32) -> f32 {
    smoothstep(0.0, spec.u_grip, u.abs())
}

pub(super) fn force_surge_drag(spec: &TugPhysicsSpec, u: f32) -> f32 {
    -spec.k_surge * u * u.abs() - spec.d_surge * u
}

/// Lateral resistance at one hull station seeing local cross-flow `w` (m/s).
pub(super) fn force_station_lateral(k: f32, w: f32) -> f32 {
    -k * w * w.abs()
}

pub(super) fn force_sway_damping_linear(spec: &TugPhysicsSpec, v: f32) -> f32 {
    -spec.d_sway * v
}

pub(super) fn torque_yaw_damping_quadratic(spec: &TugPhysicsSpec, r: f32) -> f32 {
    -spec.k_yaw * r * r.abs()
}

pub(super) fn torque_yaw_damping_linear(spec: &TugPhysicsSpec, r: f32) -> f32 {
    -spec.d_yaw * r
}
