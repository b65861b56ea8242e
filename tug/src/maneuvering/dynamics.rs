use crate::commands::ControlInput;
use crate::errors::CommandError;
use crate::math::{vector_azimuth_deg, wrap_deg, Vec2f};
use crate::tug_specs::TugPhysicsSpec;

use super::geometry::{thrust_line_intersection, weighted_centroid};
use super::pivot::estimate_pivot;
use super::resultant::compose;
use super::terms::*;
use super::thrust::thruster_force;
use super::types::{PivotRegime, RotationSense, StepDebug, TickOutputs, TrackPoint, TugState};
use super::util::snap_deadband;
use super::wash::interference;

const NEWTONS_PER_TONNE: f32 = 9806.65;
// Velocities below these are numerical residue and snap to exactly zero.
const LINEAR_DEADBAND: f32 = 1e-3; // m/s
const YAW_DEADBAND: f32 = 1e-4; // rad/s
// Internal step for track prediction.
const PREDICT_DT: f32 = 0.1; // s
/// Default look-ahead of a predicted track (seconds).
pub const PREDICT_HORIZON_S: f32 = 30.0;

/// Advance the tug by one tick. See `step_tug_dbg` for the full breakdown.
pub fn step_tug(
    spec: &TugPhysicsSpec,
    input: &ControlInput,
    state: &mut TugState,
    dt: f32,
) -> Result<TickOutputs, CommandError> {
    step_tug_dbg(spec, input, state, dt, None)
}

/// Variant of `step_tug` that fills an optional telemetry struct.
///
/// The whole input is validated before anything moves: a rejected command
/// leaves `state` untouched. A non-positive `dt` computes the solve and the
/// console outputs without advancing the state.
pub fn step_tug_dbg(
    spec: &TugPhysicsSpec,
    input: &ControlInput,
    state: &mut TugState,
    dt: f32,
    mut dbg: Option<&mut StepDebug>,
) -> Result<TickOutputs, CommandError> {
    let port_cmd = input.port.validated()?;
    let stbd_cmd = input.stbd.validated()?;
    let pivot_override = match input.pivot_override {
        Some(p) => Some(spec.validate_pivot(p)?),
        None => None,
    };

    let f_port = thruster_force(&port_cmd, spec.bollard_pull_t)?;
    let f_stbd = thruster_force(&stbd_cmd, spec.bollard_pull_t)?;

    // Wash is judged on the raw wakes; only the struck unit loses output.
    let flags = interference(
        spec.thruster_port,
        f_port,
        spec.thruster_stbd,
        f_stbd,
        spec.wash_radius,
    );
    let eff_port = if flags.port_struck { f_port * spec.wash_derate } else { f_port };
    let eff_stbd = if flags.stbd_struck { f_stbd * spec.wash_derate } else { f_stbd };

    let about_center = compose(
        &[(spec.thruster_port, eff_port), (spec.thruster_stbd, eff_stbd)],
        Vec2f::ZERO,
    );

    let estimate = estimate_pivot(spec, state.u, eff_port, eff_stbd);
    let (pivot, pivot_regime) = match pivot_override {
        Some(p) => (p, PivotRegime::Overridden),
        None => (estimate.point, estimate.regime),
    };
    let moment_pivot_tm = about_center.moment_about(pivot);

    let force_origin = thrust_line_intersection(
        spec.thruster_port,
        port_cmd.azimuth_deg,
        spec.thruster_stbd,
        stbd_cmd.azimuth_deg,
    )
    .unwrap_or_else(|| {
        weighted_centroid(
            spec.thruster_port,
            port_cmd.power_pct,
            spec.thruster_stbd,
            stbd_cmd.power_pct,
        )
    });

    let outputs = TickOutputs {
        net_force_t: about_center.force,
        force_magnitude_t: about_center.force.length(),
        force_heading_deg: vector_azimuth_deg(about_center.force),
        net_moment_tm: moment_pivot_tm,
        rotation: RotationSense::classify(moment_pivot_tm),
        pivot,
        pivot_regime,
        interference: flags,
        force_origin,
    };

    // Hull reaction. Cross-flow differs along the hull under yaw: the skeg
    // station grips only with way on, the stern station always drags a little.
    let grip = skeg_grip(spec, state.u);
    let w_skeg = state.v - state.r * spec.skeg_y;
    let w_stern = state.v - state.r * spec.stern_y;
    let f_skeg_n = force_station_lateral(spec.k_skeg * grip, w_skeg);
    let f_stern_n = force_station_lateral(spec.k_stern, w_stern);
    let f_surge_drag_n = force_surge_drag(spec, state.u);
    let tau_stations_nm = -(spec.skeg_y * f_skeg_n + spec.stern_y * f_stern_n);
    let tau_damp_nm =
        torque_yaw_damping_quadratic(spec, state.r) + torque_yaw_damping_linear(spec, state.r);

    let thrust_n = about_center.force * NEWTONS_PER_TONNE;
    let f_sway_n = thrust_n.x + f_skeg_n + f_stern_n + force_sway_damping_linear(spec, state.v);
    let f_surge_n = thrust_n.y + f_surge_drag_n;
    let tau_nm = about_center.moment * NEWTONS_PER_TONNE + tau_stations_nm + tau_damp_nm;

    let (mut du, mut dv, mut dr) = (0.0_f32, 0.0_f32, 0.0_f32);
    let mut world_vel = Vec2f::ZERO;
    if dt.is_finite() && dt > 0.0 {
        // Semi-implicit Euler: velocities first, then pose from the new velocities.
        du = f_surge_n / spec.m * dt;
        dv = f_sway_n / spec.m * dt;
        dr = tau_nm / spec.i_z * dt;
        state.u = snap_deadband(state.u + du, LINEAR_DEADBAND);
        state.v = snap_deadband(state.v + dv, LINEAR_DEADBAND);
        state.r = snap_deadband(state.r + dr, YAW_DEADBAND);

        let (sin_h, cos_h) = state.heading_deg.to_radians().sin_cos();
        world_vel = Vec2f::new(
            state.v * cos_h + state.u * sin_h,
            state.u * cos_h - state.v * sin_h,
        );
        state.position += world_vel * dt;
        state.heading_deg = wrap_deg(state.heading_deg - state.r.to_degrees() * dt);
    }

    if let Some(d) = dbg.as_mut() {
        d.dt = dt;
        d.inputs = *input;
        d.force_port_t = f_port;
        d.force_stbd_t = f_stbd;
        d.eff_port_t = eff_port;
        d.eff_stbd_t = eff_stbd;
        d.interference = flags;
        d.net_force_t = about_center.force;
        d.moment_center_tm = about_center.moment;
        d.pivot = pivot;
        d.nav_blend = estimate.nav_blend;
        d.moment_pivot_tm = moment_pivot_tm;
        d.grip = grip;
        d.w_skeg = w_skeg;
        d.w_stern = w_stern;
        d.f_skeg_n = f_skeg_n;
        d.f_stern_n = f_stern_n;
        d.f_surge_drag_n = f_surge_drag_n;
        d.tau_stations_nm = tau_stations_nm;
        d.tau_damp_nm = tau_damp_nm;
        d.du = du;
        d.dv = dv;
        d.dr = dr;
        d.world_vel = world_vel;
    }

    Ok(outputs)
}

/// Integrate a copy of `state` with the commands held, sampling poses every
/// `sample_every_s` over `horizon_s`. The first point is the current pose.
pub fn predict_track(
    spec: &TugPhysicsSpec,
    input: &ControlInput,
    state: &TugState,
    horizon_s: f32,
    sample_every_s: f32,
) -> Result<Vec<TrackPoint>, CommandError> {
    let mut sim = state.clone();
    let steps = (horizon_s.max(0.0) / PREDICT_DT).round() as usize;
    let every = (sample_every_s / PREDICT_DT).round().max(1.0) as usize;
    let mut track = Vec::with_capacity(steps / every + 2);
    track.push(TrackPoint { t: 0.0, position: sim.position, heading_deg: sim.heading_deg });
    for i in 1..=steps {
        step_tug(spec, input, &mut sim, PREDICT_DT)?;
        if i % every == 0 {
            track.push(TrackPoint {
                t: i as f32 * PREDICT_DT,
                position: sim.position,
                heading_deg: sim.heading_deg,
            });
        }
    }
    Ok(track)
}
