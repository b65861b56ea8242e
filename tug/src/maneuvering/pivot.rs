use crate::math::Vec2f;
use crate::tug_specs::TugPhysicsSpec;

use super::types::{PivotEstimate, PivotRegime};
use super::util::smoothstep;

// The maneuver estimate blends into the navigation anchor over
// u_nav·(1 ± NAV_BLEND_BAND), so the pivot cannot jump at the regime edge.
const NAV_BLEND_BAND: f32 = 0.25;
// Total intent below this (tonnes) gives no signal; hold the stern anchor.
const INTENT_EPS_T: f32 = 1e-6;

/// Effective turning center from the current surge speed and the thrusters'
/// lateral force intent.
///
/// With way on, the skeg anchors the pivot forward (ahead) or the flat stern
/// lets it fall aft (astern). Dead slow, the pivot tracks what the units are
/// asked to do: matched lateral thrust crabs the hull around the skeg,
/// opposed lateral thrust twists it around the stern.
pub fn estimate_pivot(
    spec: &TugPhysicsSpec,
    u: f32,
    port_force_t: Vec2f,
    stbd_force_t: Vec2f,
) -> PivotEstimate {
    let sway_intent = (port_force_t.x + stbd_force_t.x).abs();
    let twist_intent = (port_force_t.x - stbd_force_t.x).abs();
    let total = sway_intent + twist_intent;
    let ratio = if total > INTENT_EPS_T { sway_intent / total } else { 0.0 };
    let maneuver_y = spec.stern_y + (spec.skeg_y - spec.stern_y) * ratio;

    let nav_y = if u >= 0.0 { spec.skeg_y } else { spec.stern_y };
    let lo = spec.u_nav * (1.0 - NAV_BLEND_BAND);
    let hi = spec.u_nav * (1.0 + NAV_BLEND_BAND);
    let nav_blend = smoothstep(lo, hi, u.abs());
    let y = maneuver_y + (nav_y - maneuver_y) * nav_blend;

    let regime = if u.abs() <= spec.u_nav {
        PivotRegime::Maneuver
    } else if u > 0.0 {
        PivotRegime::NavigationForward
    } else {
        PivotRegime::NavigationAstern
    };

    PivotEstimate { point: Vec2f::new(0.0, y), regime, nav_blend }
}
