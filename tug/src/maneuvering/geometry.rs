use crate::math::{compass_vector, Vec2f};

// Sine of the angle between thrust lines below which they read as parallel.
const PARALLEL_EPS: f32 = 1e-6;
const IDLE_EPS_PCT: f32 = 1e-3;

/// Intersection of the two thrust lines, or `None` when they are parallel
/// (including anti-parallel). Lines, not rays: a crossing behind a unit
/// still anchors the resultant arrow.
pub fn thrust_line_intersection(
    pos_a: Vec2f,
    az_a_deg: f32,
    pos_b: Vec2f,
    az_b_deg: f32,
) -> Option<Vec2f> {
    let d_a = compass_vector(az_a_deg);
    let d_b = compass_vector(az_b_deg);
    let denom = d_a.cross(d_b);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }
    let t = (pos_b - pos_a).cross(d_b) / denom;
    Some(pos_a + d_a * t)
}

/// Fallback origin for the net-force arrow: the thruster positions weighted
/// by commanded power. Both units idle degrades to the geometric midpoint.
pub fn weighted_centroid(pos_a: Vec2f, power_a_pct: f32, pos_b: Vec2f, power_b_pct: f32) -> Vec2f {
    let total = power_a_pct + power_b_pct;
    if total <= IDLE_EPS_PCT {
        return (pos_a + pos_b) * 0.5;
    }
    (pos_a * power_a_pct + pos_b * power_b_pct) * (1.0 / total)
}
