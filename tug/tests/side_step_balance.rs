use tug::maneuvering::compose;
use tug::{
    solve_maneuver, thruster_force, tugspecs, wrap_deg, EngineOrder, EngineSettings, Side,
    SolveError, TugPhysicsSpec, Vec2f,
};

fn unit_forces(spec: &TugPhysicsSpec, s: &EngineSettings) -> [(Vec2f, Vec2f); 2] {
    [
        (
            spec.thruster_port,
            thruster_force(&s.port, spec.bollard_pull_t).unwrap(),
        ),
        (
            spec.thruster_stbd,
            thruster_force(&s.stbd, spec.bollard_pull_t).unwrap(),
        ),
    ]
}

fn assert_balanced(spec: &TugPhysicsSpec, s: &EngineSettings, pivot: Vec2f, side: Side) {
    let net = compose(&unit_forces(spec, s), pivot);
    assert!(
        net.force.y.abs() < 1e-3,
        "surge residue {} t at pivot {pivot:?}",
        net.force.y
    );
    assert!(
        net.force.x * side.lateral_sign() > 0.0,
        "lateral thrust {} t goes the wrong way at pivot {pivot:?}",
        net.force.x
    );
    assert!(
        net.moment.abs() < 0.01,
        "moment residue {} t·m at pivot {pivot:?}",
        net.moment
    );
}

#[test]
fn fast_side_step_balances_across_the_working_pivot_range() {
    let spec = tugspecs::centurion_spec();
    for &py in &[-10.0_f32, -5.0, 0.0, 5.42, 10.0, 16.0] {
        for &px in &[-5.0_f32, 0.0, 5.0] {
            let pivot = Vec2f::new(px, py);
            let s = solve_maneuver(
                &spec,
                EngineOrder::FastSideStep { side: Side::Starboard },
                pivot,
            )
            .unwrap();
            assert_eq!(s.port.power_pct, 50.0, "drive unit runs the preset");
            assert_balanced(&spec, &s, pivot, Side::Starboard);
        }
    }
}

#[test]
fn slow_side_step_covers_the_band_the_fast_solver_rejects() {
    let spec = tugspecs::centurion_spec();
    for &py in &[-16.0_f32, -13.0, -12.0, -10.0, 0.0, 5.42, 16.0] {
        let pivot = Vec2f::new(0.0, py);
        let s = solve_maneuver(&spec, EngineOrder::SlowSideStep { side: Side::Port }, pivot)
            .unwrap();
        assert_balanced(&spec, &s, pivot, Side::Port);
        assert_eq!(s.port.power_pct, 50.0);
        assert_eq!(s.stbd.power_pct, 50.0);
    }
}

#[test]
fn fast_side_step_failure_modes_by_pivot_height() {
    let spec = tugspecs::centurion_spec();
    let order = EngineOrder::FastSideStep { side: Side::Starboard };

    // On the thruster axis the balancing unit would have to push pure abeam.
    let guard = solve_maneuver(&spec, order, Vec2f::new(0.0, -12.0));
    assert!(matches!(guard, Err(SolveError::NumericGuard { .. })), "{guard:?}");

    // Just below the axis the balancing power runs past 100%.
    match solve_maneuver(&spec, order, Vec2f::new(0.0, -13.0)) {
        Err(SolveError::Infeasible { required_pct, .. }) => {
            assert!(required_pct > 100.0, "required {required_pct}%")
        }
        other => panic!("expected an infeasible solve, got {other:?}"),
    }

    // Far enough astern the geometry flips the net thrust to port.
    let wrong = solve_maneuver(&spec, order, Vec2f::new(0.0, -16.0));
    assert!(matches!(wrong, Err(SolveError::WrongSide { .. })), "{wrong:?}");
}

#[test]
fn port_orders_mirror_the_starboard_geometry() {
    let spec = tugspecs::centurion_spec();
    let pivot = spec.pivot_default;
    let stbd = solve_maneuver(&spec, EngineOrder::FastSideStep { side: Side::Starboard }, pivot)
        .unwrap();
    let port = solve_maneuver(&spec, EngineOrder::FastSideStep { side: Side::Port }, pivot)
        .unwrap();

    assert!((stbd.port.power_pct - port.stbd.power_pct).abs() < 1e-4);
    assert!((stbd.stbd.power_pct - port.port.power_pct).abs() < 1e-4);
    // Azimuths reflect across the centerline.
    assert!(
        (wrap_deg(360.0 - stbd.port.azimuth_deg) - port.stbd.azimuth_deg).abs() < 1e-3,
        "drive azimuths {} / {}",
        stbd.port.azimuth_deg,
        port.stbd.azimuth_deg
    );
    assert!(
        (wrap_deg(360.0 - stbd.stbd.azimuth_deg) - port.port.azimuth_deg).abs() < 1e-3,
        "balancing azimuths {} / {}",
        stbd.stbd.azimuth_deg,
        port.port.azimuth_deg
    );
    assert_balanced(&spec, &port, pivot, Side::Port);
}
