use crate::math::Vec2f;

use super::types::Resultant;

/// Reduce a set of applied forces `(position, force)` to a resultant about
/// `reference`. Cross products are `r_x·F_y − r_y·F_x`, counter-clockwise
/// positive.
pub fn compose(applied: &[(Vec2f, Vec2f)], reference: Vec2f) -> Resultant {
    let mut force = Vec2f::ZERO;
    let mut moment = 0.0;
    for &(pos, f) in applied {
        force += f;
        moment += (pos - reference).cross(f);
    }
    Resultant { force, moment, reference }
}
