use crate::commands::{EngineOrder, EngineSettings, Side, ThrusterCommand};
use crate::errors::SolveError;
use crate::math::{compass_vector, vector_azimuth_deg, wrap_deg, Vec2f};
use crate::tug_specs::TugPhysicsSpec;

/// Preset power for the canned maneuvers (percent).
pub const PRESET_POWER_PCT: f32 = 50.0;
/// Drive-unit azimuth off the bow axis for the fast side-step (degrees).
pub const FAST_DRIVE_OFFSET_DEG: f32 = 45.0;
/// Azimuth offset from the transverse axis for the spin couple (degrees).
pub const SPIN_OFFSET_DEG: f32 = 45.0;

// Longitudinal thrust components below this can't balance surge.
const COS_EPS: f32 = 1e-4;
const AIM_EPS_M: f32 = 1e-6;

/// Resolve an engine order into a concrete thruster pair.
///
/// Side-steps balance surge and the moment about `pivot` in closed form;
/// direct ahead/astern orders and the spin couple ignore the pivot. A result
/// outside physical bounds comes back as an error, never clamped.
pub fn solve_maneuver(
    spec: &TugPhysicsSpec,
    order: EngineOrder,
    pivot: Vec2f,
) -> Result<EngineSettings, SolveError> {
    match order {
        EngineOrder::FullAhead => Ok(pair(100.0, 0.0)),
        EngineOrder::HalfAhead => Ok(pair(50.0, 0.0)),
        EngineOrder::FullAstern => Ok(pair(100.0, 180.0)),
        EngineOrder::HalfAstern => Ok(pair(50.0, 180.0)),
        EngineOrder::FastSideStep { side } => fast_side_step(spec, side, pivot),
        EngineOrder::SlowSideStep { side } => Ok(slow_side_step(spec, side, pivot)),
        EngineOrder::Spin { side } => Ok(spin(side)),
    }
}

fn pair(power_pct: f32, azimuth_deg: f32) -> EngineSettings {
    EngineSettings {
        port: ThrusterCommand::new(power_pct, azimuth_deg),
        stbd: ThrusterCommand::new(power_pct, azimuth_deg),
    }
}

/// Fast side-step: the unit opposite the ordered side drives at the preset;
/// the other unit is aimed so both thrust lines cross on the pivot's
/// transverse axis, with its power solved to null the drive's surge. The
/// net force is then purely lateral through the pivot height, so the moment
/// about the pivot vanishes for any pivot abscissa.
fn fast_side_step(
    spec: &TugPhysicsSpec,
    side: Side,
    pivot: Vec2f,
) -> Result<EngineSettings, SolveError> {
    let (drive_pos, slave_pos) = match side {
        Side::Starboard => (spec.thruster_port, spec.thruster_stbd),
        Side::Port => (spec.thruster_stbd, spec.thruster_port),
    };
    let drive_az = wrap_deg(side.lateral_sign() * FAST_DRIVE_OFFSET_DEG);
    let drive_dir = compass_vector(drive_az);
    if drive_dir.y.abs() < COS_EPS {
        return Err(SolveError::NumericGuard { divisor: "drive thrust-line cosine" });
    }

    // Where the drive line crosses the pivot's transverse axis
    let cross_x = drive_pos.x + (pivot.y - drive_pos.y) * drive_dir.x / drive_dir.y;
    let through = Vec2f::new(cross_x, pivot.y);

    let aim = through - slave_pos;
    if aim.length() < AIM_EPS_M {
        return Err(SolveError::NumericGuard { divisor: "slave aim distance" });
    }
    let mut slave_az = vector_azimuth_deg(aim);
    let mut slave_dir = compass_vector(slave_az);
    // Surge balance needs the slave's longitudinal component opposing the drive's.
    if slave_dir.y * drive_dir.y > 0.0 {
        slave_az = wrap_deg(slave_az + 180.0);
        slave_dir = -slave_dir;
    }
    if slave_dir.y.abs() < COS_EPS {
        return Err(SolveError::NumericGuard { divisor: "slave thrust-line cosine" });
    }

    let slave_power = -PRESET_POWER_PCT * drive_dir.y / slave_dir.y;
    if !(0.0..=100.0).contains(&slave_power) {
        return Err(SolveError::Infeasible { required_pct: slave_power, pivot_y: pivot.y });
    }

    let net_lateral = PRESET_POWER_PCT * drive_dir.x + slave_power * slave_dir.x;
    if net_lateral * side.lateral_sign() <= 0.0 {
        return Err(SolveError::WrongSide { pivot_y: pivot.y });
    }

    let drive = ThrusterCommand::new(PRESET_POWER_PCT, drive_az);
    let slave = ThrusterCommand::new(slave_power, slave_az);
    Ok(match side {
        Side::Starboard => EngineSettings { port: drive, stbd: slave },
        Side::Port => EngineSettings { port: slave, stbd: drive },
    })
}

/// Slow side-step: both units at the preset with azimuths mirrored about the
/// transverse axis, every thrust line through the centerline point at the
/// pivot height. Surge cancels by symmetry; works for the whole pivot range.
fn slow_side_step(spec: &TugPhysicsSpec, side: Side, pivot: Vec2f) -> EngineSettings {
    let x_off = spec.thruster_stbd.x;
    let reach = pivot.y - spec.thruster_stbd.y;
    let alpha = x_off.atan2(reach).to_degrees();
    let (port_az, stbd_az) = match side {
        Side::Starboard => (alpha, 180.0 - alpha),
        Side::Port => (180.0 + alpha, 360.0 - alpha),
    };
    EngineSettings {
        port: ThrusterCommand::new(PRESET_POWER_PCT, wrap_deg(port_az)),
        stbd: ThrusterCommand::new(PRESET_POWER_PCT, wrap_deg(stbd_az)),
    }
}

/// Spin on the spot: equal power, azimuths offset from the transverse axis
/// in opposing senses. Forces cancel and leave a pure couple whose sign
/// matches the ordered side.
fn spin(side: Side) -> EngineSettings {
    let offset = -side.lateral_sign() * SPIN_OFFSET_DEG;
    EngineSettings {
        port: ThrusterCommand::new(PRESET_POWER_PCT, wrap_deg(90.0 + offset)),
        stbd: ThrusterCommand::new(PRESET_POWER_PCT, wrap_deg(270.0 + offset)),
    }
}
