#[inline]
pub(super) fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub(super) fn snap_deadband(x: f32, eps: f32) -> f32 {
    if x.abs() < eps { 0.0 } else { x }
}
