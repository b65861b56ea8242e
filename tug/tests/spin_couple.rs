use tug::maneuvering::compose;
use tug::{
    solve_maneuver, step_tug, thruster_force, tugspecs, ControlInput, EngineOrder, RotationSense,
    Side, TugState, Vec2f,
};

#[test]
fn spin_orders_leave_a_pure_couple_with_the_ordered_sign() {
    let spec = tugspecs::centurion_spec();
    // Only the transverse force components form the couple; the fore-aft
    // components share a line of action and cancel arm-for-arm.
    let beam_spacing = spec.thruster_stbd.x - spec.thruster_port.x;
    let expect = beam_spacing * 17.5 * 45.0_f32.to_radians().cos();

    for (side, sign) in [(Side::Port, 1.0_f32), (Side::Starboard, -1.0)] {
        let s = solve_maneuver(&spec, EngineOrder::Spin { side }, spec.pivot_default).unwrap();
        let applied = [
            (
                spec.thruster_port,
                thruster_force(&s.port, spec.bollard_pull_t).unwrap(),
            ),
            (
                spec.thruster_stbd,
                thruster_force(&s.stbd, spec.bollard_pull_t).unwrap(),
            ),
        ];
        let about_center = compose(&applied, Vec2f::ZERO);
        assert!(
            about_center.force.length() < 1e-4,
            "{side:?} spin leaks net force {:?}",
            about_center.force
        );
        assert!(
            (about_center.moment - sign * expect).abs() < 0.05,
            "{side:?} spin couple {} t·m, want {}",
            about_center.moment,
            sign * expect
        );
        // A couple reads the same about any reference point.
        assert!(
            (about_center.moment_about(spec.pivot_default) - about_center.moment).abs() < 1e-3
        );
        assert_eq!(
            RotationSense::classify(about_center.moment),
            if side == Side::Port { RotationSense::Port } else { RotationSense::Starboard }
        );
    }
}

#[test]
fn a_port_spin_reads_port_on_the_console_and_stays_on_the_spot() {
    let spec = tugspecs::centurion_spec();
    let s = solve_maneuver(&spec, EngineOrder::Spin { side: Side::Port }, spec.pivot_default)
        .unwrap();
    let input = ControlInput::new(s.port, s.stbd);
    let mut state = TugState::at_rest(Vec2f::ZERO, 0.0);

    let first = step_tug(&spec, &input, &mut state, 0.1).unwrap();
    assert_eq!(first.rotation, RotationSense::Port);
    assert!(first.force_magnitude_t < 1e-3, "net |F| = {} t", first.force_magnitude_t);
    assert!(first.net_moment_tm > 60.0, "couple {} t·m", first.net_moment_tm);
    assert!(!first.interference.any(), "angled spin wakes clear both units");

    for _ in 0..99 {
        step_tug(&spec, &input, &mut state, 0.1).unwrap();
    }
    assert!(state.r > 0.0, "bow must swing to port, r = {}", state.r);
    assert!(
        state.heading_deg > 300.0 && state.heading_deg < 360.0,
        "heading after 10 s: {}",
        state.heading_deg
    );
    assert!(
        state.position.length() < 2.0,
        "spun hull wandered to {:?}",
        state.position
    );
}

#[test]
fn transverse_opposition_turns_a_tandem_pair_but_not_an_abeam_pair() {
    // Side-by-side units pushing 90/270 cancel arm-for-arm: zero couple.
    let abeam = compose(
        &[
            (Vec2f::new(-2.7, -12.0), Vec2f::new(17.5, 0.0)),
            (Vec2f::new(2.7, -12.0), Vec2f::new(-17.5, 0.0)),
        ],
        Vec2f::ZERO,
    );
    assert!(abeam.force.length() < 1e-6);
    assert!(abeam.moment.abs() < 1e-4, "abeam couple {} t·m", abeam.moment);
    assert_eq!(RotationSense::classify(abeam.moment), RotationSense::Steady);

    // The same opposed settings on a fore-and-aft pair leave a full couple.
    let tandem = compose(
        &[
            (Vec2f::new(0.0, 6.0), Vec2f::new(17.5, 0.0)),
            (Vec2f::new(0.0, -6.0), Vec2f::new(-17.5, 0.0)),
        ],
        Vec2f::ZERO,
    );
    assert!(tandem.force.length() < 1e-6);
    assert!((tandem.moment + 210.0).abs() < 1e-3, "tandem couple {} t·m", tandem.moment);
    assert_eq!(RotationSense::classify(tandem.moment), RotationSense::Starboard);
}
