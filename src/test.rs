use {
    crate::{
        constants::{initialize_constants, PhysicalConstants},
        parameters::Parameters,
        utils::{degrees_to_radians, is_equal_rel, radians_to_degrees},
    },
    approx::assert_relative_eq,
    lazy_static::lazy_static,
    std::thread,
};

lazy_static! {
    static ref NORMALIZED: PhysicalConstants = {
        let mut params = Parameters::default();
        params.physical.speed_of_light = 1.0;
        params.physical.permeability_factor = 1.0 / (4.0 * initialize_constants().pi);
        params.constants()
    };
}

#[test]
fn concurrent_initialization_yields_one_table() {
    let handles = (0..8)
        .map(|_| thread::spawn(|| initialize_constants() as *const PhysicalConstants as usize))
        .collect::<Vec<_>>();

    let addresses = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect::<Vec<_>>();

    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn conversions_share_pi_with_table() {
    let constants = initialize_constants();

    for &angle in [0.0, 1.0, -90.0, 180.0, 1234.5].iter() {
        assert_eq!(degrees_to_radians(angle), constants.degrees_to_radians(angle));
        assert_eq!(radians_to_degrees(angle), constants.radians_to_degrees(angle));
    }

    assert_eq!(NORMALIZED.pi, constants.pi);
    assert_eq!(NORMALIZED.degrees_to_radians(180.0), degrees_to_radians(180.0));
}

#[test]
fn normalized_table_from_parameters() {
    assert_relative_eq!(NORMALIZED.c0, 1.0);
    assert_relative_eq!(NORMALIZED.mu0, 1.0, max_relative = 1.0e-15);
    assert_relative_eq!(NORMALIZED.eps0, 1.0, max_relative = 1.0e-15);
    assert_relative_eq!(NORMALIZED.eta0, 1.0, max_relative = 1.0e-15);

    NORMALIZED
        .check_identities(Parameters::default().numerical.relative_tolerance)
        .unwrap();
}

#[test]
fn plane_wave_incidence() {
    // 30 degree incidence on a z-normal interface
    let theta = degrees_to_radians(30.0);

    assert!(is_equal_rel(theta.sin(), 0.5, 1.0e-15));
    assert!(is_equal_rel(theta.cos(), 3.0f64.sqrt() / 2.0, 1.0e-15));
    assert!(is_equal_rel(radians_to_degrees(theta), 30.0, 1.0e-15));
}

#[test]
fn courant_step_in_normalized_units() {
    let dt = NORMALIZED.courant_time_step(1.0, 1.0, 1.0).unwrap();
    assert!(is_equal_rel(dt, 1.0 / 3.0f64.sqrt(), 1.0e-15));

    // Degenerate 1-D limit
    let dt = NORMALIZED.courant_time_step(1.0, 1.0e12, 1.0e12).unwrap();
    assert!(is_equal_rel(dt, 1.0, 1.0e-12));
}
