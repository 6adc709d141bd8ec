use pmcurves::prelude::*;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pmcurves_check",
    about = "Checks and normalizes a JSON file with sampled capillary pressure and relative permeability curves"
)]
struct Options {
    /// Input JSON file with the samples
    input: String,

    /// Writes the normalized (ascending) samples to this JSON file
    #[structopt(short, long)]
    output: Option<String>,

    /// Prints debug messages
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();
    if options.verbose {
        tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
    }

    // load and finalize the table
    let param = ParamSampledCurves::read_json(&options.input)?;
    let params = SampledCurveSet::<Vec<f64>>::from_param(&param)?;

    // summary
    let thin_line = format!("{:─^1$}", "", 48);
    println!("{}", thin_line);
    println!("{:>6}{:>10}{:>16}{:>16}", "curve", "npoint", "sw_first", "sw_last");
    println!("{}", thin_line);
    for curve in Curve::all() {
        let (sw, _) = params.samples(curve)?;
        let first = sw.first().copied().unwrap_or_default();
        let last = sw.last().copied().unwrap_or_default();
        println!("{:>6}{:>10}{:>16}{:>16}", curve.name(), sw.len(), first, last);
    }
    println!("{}", thin_line);

    // write the normalized table
    if let Some(output) = &options.output {
        params.to_param()?.write_json(output)?;
        println!("normalized samples written to {}", output);
    }
    Ok(())
}
