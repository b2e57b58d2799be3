use meltcheck::prelude::*;
use meltcheck::base::FINAL_STATE_FILENAME;

// Replay of a final state saved to disk
//
// TEST GOAL
//
// This test verifies that a final state written by one engine can be checked again by
// the snapshot engine, yielding exactly the same PCI position
//
// CONFIGURATION AND PARAMETERS
//
// Same as test_octadecane_regression (2D; κ = 0.0142, β = 0.5) with the output
// written to the test directory

const NAME: &str = "test_snapshot_replay";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_snapshot_replay() -> Result<(), VerifyError> {
    init_logger();

    // run and save
    let mut scenario = Scenario::octadecane_2d()?;
    scenario
        .config
        .set_output_dir(&format!("{}/{}/", DEFAULT_TEST_DIR, NAME))?
        .set_prefix_output_dir_with_tempdir(false)?;
    let mut engine = StefanMelting::new(0.0142, 0.5)?;
    let mut check = RegressionCheck::new(&scenario);
    check.verify(&mut engine)?;
    let x_direct = check.located().unwrap();

    // replay
    let path = scenario.config.resolved_output_dir().join(FINAL_STATE_FILENAME);
    let mut snapshot = SnapshotEngine::new(&path);
    let mut check = RegressionCheck::new(&scenario);
    check.verify(&mut snapshot)?;
    assert_eq!(check.located(), Some(x_direct));
    Ok(())
}

#[test]
fn test_snapshot_replay_captures_errors() -> Result<(), VerifyError> {
    init_logger();

    // save a short run
    let mut config = BenchmarkConfig::new();
    config
        .set_end_time(10.0)?
        .set_output_dir(&format!("{}/{}_short/", DEFAULT_TEST_DIR, NAME))?;
    let mut engine = StefanMelting::new(0.0142, 0.5)?;
    engine.set_resolution(32, 8, 1)?;
    engine.run(&config)?;
    let path = config.resolved_output_dir().join(FINAL_STATE_FILENAME);

    // the scenario requires t = 30
    let scenario = Scenario::octadecane_2d()?;
    let mut snapshot = SnapshotEngine::new(&path);
    let mut check = RegressionCheck::new(&scenario);
    assert_eq!(
        check.verify(&mut snapshot).err(),
        Some(VerifyError::SimulationFailure(
            "snapshot stopped at t = 10.0 before end_time = 30.0".to_string()
        ))
    );
    assert_eq!(check.state(), CheckState::Failed);

    // the 3D scenario requires ndim = 3
    let scenario = Scenario::octadecane_3d()?;
    let mut check = RegressionCheck::new(&scenario);
    assert_eq!(
        check.verify(&mut snapshot).err(),
        Some(VerifyError::SimulationFailure(
            "snapshot has ndim = 2 but the configuration requires ndim = 3".to_string()
        ))
    );

    // missing file
    let mut snapshot = SnapshotEngine::new("/tmp/meltcheck/__does_not_exist__.json");
    let mut check = RegressionCheck::new(&scenario);
    assert_eq!(
        check.verify(&mut snapshot).err(),
        Some(VerifyError::SimulationFailure(
            "cannot load snapshot /tmp/meltcheck/__does_not_exist__.json: cannot open file".to_string()
        ))
    );
    Ok(())
}
