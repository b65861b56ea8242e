use crate::commands::ThrusterCommand;
use crate::errors::CommandError;
use crate::math::{compass_vector, Vec2f};

/// Force of one azimuth unit in the hull frame, tonnes.
/// Magnitude is linear in power; out-of-range commands are rejected here
/// rather than clamped.
pub fn thruster_force(cmd: &ThrusterCommand, bollard_pull_t: f32) -> Result<Vec2f, CommandError> {
    let cmd = cmd.validated()?;
    let pull_t = cmd.power_pct / 100.0 * bollard_pull_t;
    Ok(compass_vector(cmd.azimuth_deg) * pull_t)
}
