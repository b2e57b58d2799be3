use meltcheck::prelude::*;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pci_locate",
    about = "Locates the phase-change interface along a horizontal line of a saved final state"
)]
struct Options {
    /// JSON file written by a simulation engine
    snapshot: String,

    /// Height of the probe line
    #[structopt(long, default_value = "0.88")]
    y: f64,

    /// Depth of the probe line (3D states only)
    #[structopt(long)]
    z: Option<f64>,

    /// Name of the field component
    #[structopt(long, default_value = "temperature")]
    field: String,

    /// Value of the isotherm
    #[structopt(long, default_value = "0.01")]
    target: f64,

    /// Initial guess of the secant search
    #[structopt(long, default_value = "0.01")]
    guess: f64,

    /// Expected coordinate; the program fails if the PCI is farther than `tolerance` from it
    #[structopt(long)]
    expected: Option<f64>,

    /// Tolerance of the comparison with the expected coordinate
    #[structopt(long, default_value = "0.01")]
    tolerance: f64,
}

fn main() -> Result<(), VerifyError> {
    env_logger::init();

    // parse options
    let options = Options::from_args();

    // load data
    let result = SimulationResult::read_json(&options.snapshot)?;
    let probe = FieldProbe::new(&result)?;

    // search
    let mut transverse = vec![options.y];
    if let Some(z) = options.z {
        transverse.push(z);
    }
    let line = ProbeLine::along_x(&transverse)?;
    let locator = IsothermLocator::new();
    let crossing = locator.search(&line, &options.field, options.target, options.guess, &probe)?;

    // message
    let message = format!(
        "{} = {:?} at x = {:?} (y = {:?}) after {} iterations; residual = {:e}",
        options.field, options.target, crossing.x, options.y, crossing.iterations, crossing.residual
    );
    let thin_line = format!("{:─^1$}", "", message.chars().count());
    println!("\n{}", thin_line);
    println!("{}", message);
    println!("{}\n", thin_line);

    // compare
    if let Some(expected) = options.expected {
        ReferenceRecord::new(expected, options.tolerance)?.check(crossing.x)?;
        println!("matches the expected coordinate {:?} ± {:e}", expected, options.tolerance);
    }
    Ok(())
}
