use serde::{Deserialize, Serialize};

/// Planar vector in the hull frame: +x to starboard, +y toward the bow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    pub fn dot(self, o: Self) -> f32 { self.x * o.x + self.y * o.y }

    /// Perp-dot product `x·o.y − y·o.x`; positive when `o` lies
    /// counter-clockwise of `self`.
    pub fn cross(self, o: Self) -> f32 { self.x * o.y - self.y * o.x }

    pub fn length_squared(self) -> f32 { self.x * self.x + self.y * self.y }

    pub fn length(self) -> f32 { self.length_squared().sqrt() }
}

impl Default for Vec2f {
    fn default() -> Self { Self::ZERO }
}

impl std::ops::Add for Vec2f {
    type Output = Self;
    fn add(self, o: Self) -> Self { Self::new(self.x + o.x, self.y + o.y) }
}

impl std::ops::AddAssign for Vec2f {
    fn add_assign(&mut self, o: Self) { self.x += o.x; self.y += o.y; }
}

impl std::ops::Sub for Vec2f {
    type Output = Self;
    fn sub(self, o: Self) -> Self { Self::new(self.x - o.x, self.y - o.y) }
}

impl std::ops::Neg for Vec2f {
    type Output = Self;
    fn neg(self) -> Self { Self::new(-self.x, -self.y) }
}

impl std::ops::Mul<f32> for Vec2f {
    type Output = Self;
    fn mul(self, s: f32) -> Self { Self::new(self.x * s, self.y * s) }
}

/// Wrap an angle into [0, 360) degrees.
pub fn wrap_deg(deg: f32) -> f32 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative can round up to exactly 360.0
    if w >= 360.0 { 0.0 } else { w }
}

/// Unit vector for a compass azimuth: 0° = bow, 90° = starboard, clockwise.
pub fn compass_vector(azimuth_deg: f32) -> Vec2f {
    let (s, c) = azimuth_deg.to_radians().sin_cos();
    Vec2f::new(s, c)
}

/// Compass azimuth of a hull-frame vector, in [0, 360).
pub fn vector_azimuth_deg(v: Vec2f) -> f32 {
    wrap_deg(v.x.atan2(v.y).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_cardinal_directions() {
        let bow = compass_vector(0.0);
        assert!((bow.x).abs() < 1e-6 && (bow.y - 1.0).abs() < 1e-6);
        let stbd = compass_vector(90.0);
        assert!((stbd.x - 1.0).abs() < 1e-6 && stbd.y.abs() < 1e-6);
        let astern = compass_vector(180.0);
        assert!(astern.x.abs() < 1e-5 && (astern.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn azimuth_round_trip() {
        for az in [0.0_f32, 30.0, 90.0, 135.0, 222.5, 300.0] {
            let back = vector_azimuth_deg(compass_vector(az));
            assert!((back - az).abs() < 1e-3, "az={az} came back as {back}");
        }
    }

    #[test]
    fn wrap_handles_negatives_and_overshoot() {
        assert!((wrap_deg(-90.0) - 270.0).abs() < 1e-6);
        assert!((wrap_deg(450.0) - 90.0).abs() < 1e-6);
        assert_eq!(wrap_deg(360.0), 0.0);
    }

    #[test]
    fn cross_is_ccw_positive() {
        // starboard unit crossed with bow unit turns counter-clockwise
        let x = Vec2f::new(1.0, 0.0);
        let y = Vec2f::new(0.0, 1.0);
        assert!(x.cross(y) > 0.0);
        assert!(y.cross(x) < 0.0);
    }
}
