use meltcheck::prelude::*;
use russell_lab::approx_eq;

// Convection-coupled melting of octadecane in a square cavity
//
// TEST GOAL
//
// This test verifies the regression check of the phase-change interface (PCI) position
// using the analytical Stefan melting engine as a stand-in for the full solver
//
// DOMAIN
//
//  y ^
//  1 +--------------.------------+
//    |  liquid       \   solid   |
//    o - - - - - - - -x- - - - - | y = 0.88  (probe line)
//    | T_h = 1          \        | T_c = -0.01
//    |                   |       |
//  0 +-------------------'-------+--> x
//    0                  x_f(y)   1
//
// CONFIGURATION AND PARAMETERS
//
// Ste = 0.045, T_r = 0.01 (central temperature of the regularization)
// Front: x_f(y, t) = 2 λ √(κ t) (1 + β y) with β = 0.5
// 2D: κ = 0.0142 and t = 30 give x_f(0.88) ≈ 0.2799 (reference 0.28 ± 0.01)
// 3D: κ = 0.0196 and t = 10 give x_f(0.88) ≈ 0.1898 (reference 0.19 ± 0.01)

const KAPPA_2D: f64 = 0.0142;
const KAPPA_3D: f64 = 0.0196;
const BETA: f64 = 0.5;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scenario_without_output(three_dim: bool) -> Result<Scenario, VerifyError> {
    let mut scenario = if three_dim {
        Scenario::octadecane_3d()?
    } else {
        Scenario::octadecane_2d()?
    };
    scenario.config.set_save_output(false)?;
    Ok(scenario)
}

#[test]
fn test_octadecane_regression_2d() -> Result<(), VerifyError> {
    init_logger();
    let scenario = scenario_without_output(false)?;
    let mut engine = StefanMelting::new(KAPPA_2D, BETA)?;
    let mut check = RegressionCheck::new(&scenario);
    check.verify(&mut engine)?;
    assert_eq!(check.state(), CheckState::Completed);
    let x = check.located().unwrap();
    println!("PCI at x = {:?}", x);
    assert!(f64::abs(x - 0.28) < 1e-2);

    // the field at the located point equals the target
    let result = engine.run(&scenario.config)?;
    let probe = FieldProbe::new(result)?;
    let value = probe.evaluate_named(&scenario.probe_line.fix(x), TEMPERATURE)?;
    approx_eq(value, scenario.target_value, 1e-10);
    Ok(())
}

#[test]
fn test_octadecane_regression_3d() -> Result<(), VerifyError> {
    init_logger();
    let scenario = scenario_without_output(true)?;
    let mut engine = StefanMelting::new(KAPPA_3D, BETA)?;
    verify_scenario(&scenario, &mut engine)?;

    // same answer off the mid-plane since the field does not depend on z
    let result = engine.run(&scenario.config)?;
    let probe = FieldProbe::new(result)?;
    let locator = IsothermLocator::new();
    let mid = locator.locate(&scenario.probe_line, TEMPERATURE, 0.01, 0.01, &probe)?;
    let line = ProbeLine::along_x(&[0.88, 0.2])?;
    let off = locator.locate(&line, TEMPERATURE, 0.01, 0.01, &probe)?;
    approx_eq(mid, off, 1e-10);
    Ok(())
}

#[test]
fn test_octadecane_regression_captures_mismatch() -> Result<(), VerifyError> {
    init_logger();
    let scenario = scenario_without_output(false)?;
    // faster melting moves the PCI to x ≈ 0.329 at t = 30
    let mut engine = StefanMelting::new(KAPPA_3D, BETA)?;
    let mut check = RegressionCheck::new(&scenario);
    let err = check.verify(&mut engine).err();
    match err {
        Some(VerifyError::RegressionMismatch {
            actual,
            expected,
            tolerance,
        }) => {
            assert!(f64::abs(actual - 0.329) < 1e-2);
            assert_eq!(expected, 0.28);
            assert_eq!(tolerance, 1e-2);
        }
        _ => panic!("RegressionMismatch expected"),
    }
    assert_eq!(check.state(), CheckState::Failed);
    assert_eq!(check.verify(&mut engine).err(), Some(VerifyError::AlreadyFinished));
    Ok(())
}

#[test]
fn test_octadecane_regression_is_deterministic() -> Result<(), VerifyError> {
    init_logger();
    let scenario = scenario_without_output(false)?;
    let mut located = Vec::new();
    for _ in 0..2 {
        let mut engine = StefanMelting::new(KAPPA_2D, BETA)?;
        let mut check = RegressionCheck::new(&scenario);
        check.verify(&mut engine)?;
        located.push(check.located().unwrap());
    }
    assert_eq!(located[0], located[1]);
    Ok(())
}

#[test]
fn test_octadecane_regression_captures_out_of_domain_guess() -> Result<(), VerifyError> {
    init_logger();
    let mut scenario = scenario_without_output(false)?;
    scenario.initial_guess = 1.5;
    let mut engine = StefanMelting::new(KAPPA_2D, BETA)?;
    let mut check = RegressionCheck::new(&scenario);
    let err = check.verify(&mut engine).err();
    assert!(matches!(err, Some(VerifyError::OutOfDomain { .. })));
    assert_eq!(check.state(), CheckState::Failed);
    assert_eq!(check.located(), None);
    Ok(())
}

#[test]
fn test_octadecane_liquid_fraction_grows() -> Result<(), VerifyError> {
    init_logger();
    let mut config = BenchmarkConfig::new();
    config.set_save_output(false)?;
    let regularization = config.regularization;
    let mut fractions = Vec::new();
    for end_time in [10.0, 20.0, 30.0] {
        config.set_end_time(end_time)?;
        let mut engine = StefanMelting::new(KAPPA_2D, BETA)?;
        engine.set_resolution(64, 16, 1)?;
        let result = engine.run(&config)?;
        fractions.push(result.field.liquid_fraction(&regularization)?);
    }
    println!("liquid fractions = {:?}", fractions);
    assert!(fractions[0] > 0.0);
    assert!(fractions[0] < fractions[1]);
    assert!(fractions[1] < fractions[2]);
    assert!(fractions[2] < 0.5);
    Ok(())
}
