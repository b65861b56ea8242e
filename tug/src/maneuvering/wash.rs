use crate::math::Vec2f;

use super::types::InterferenceFlags;

// Below this thrust (tonnes) a unit sheds no usable wake.
const WAKE_EPS_T: f32 = 1e-6;

/// Does the wake of a unit at `source_pos` producing `source_force_t`
/// strike a unit at `target_pos`? The wake runs opposite the thrust; a hit
/// needs the target downstream and within `lane_radius` of the centerline.
pub fn wash_hits(
    source_pos: Vec2f,
    source_force_t: Vec2f,
    target_pos: Vec2f,
    lane_radius: f32,
) -> bool {
    let wake = -source_force_t;
    let len = wake.length();
    if len <= WAKE_EPS_T {
        return false;
    }
    let dir = wake * (1.0 / len);
    let rel = target_pos - source_pos;
    let downstream = rel.dot(dir);
    if downstream <= 0.0 {
        return false;
    }
    let lateral = (rel - dir * downstream).length();
    lateral < lane_radius
}

/// Evaluate both ordered pairs. A struck unit loses effective power; the
/// striking unit is unaffected.
pub fn interference(
    port_pos: Vec2f,
    port_force_t: Vec2f,
    stbd_pos: Vec2f,
    stbd_force_t: Vec2f,
    lane_radius: f32,
) -> InterferenceFlags {
    InterferenceFlags {
        port_struck: wash_hits(stbd_pos, stbd_force_t, port_pos, lane_radius),
        stbd_struck: wash_hits(port_pos, port_force_t, stbd_pos, lane_radius),
    }
}
