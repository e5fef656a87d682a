use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use wayline_solution::{response::SolverResponse, routes::vehicle_route_paths};

#[derive(Args)]
pub struct ShowRoutesArgs {
    /// Solver response JSON file
    #[arg(short, long)]
    input: PathBuf,
}

pub fn run(args: ShowRoutesArgs) -> Result<(), anyhow::Error> {
    let file = File::open(&args.input)?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    let response = SolverResponse::from_value(value)?;

    for (vehicle_id, path) in vehicle_route_paths(&response) {
        println!("For vehicle - {vehicle_id} route is:\n");
        println!("{path}\n");
    }

    Ok(())
}
