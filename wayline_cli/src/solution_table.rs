use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use comfy_table::Table;
use wayline_solution::{response::SolverResponse, table::SolutionTable};

#[derive(Args)]
pub struct SolutionTableArgs {
    /// Solver response JSON file
    #[arg(short, long)]
    input: PathBuf,
}

pub fn run(args: SolutionTableArgs) -> Result<(), anyhow::Error> {
    let file = File::open(&args.input)?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    let response = SolverResponse::from_value(value)?;

    let solution_table = SolutionTable::from_response(&response);

    let mut table = Table::new();
    if solution_table.types.is_some() {
        table.set_header(vec!["route", "truck_id", "location", "types"]);
    } else {
        table.set_header(vec!["route", "truck_id", "location"]);
    }

    for (index, row) in solution_table.rows.iter().enumerate() {
        let mut cells = vec![
            row.route.to_string(),
            row.truck_id.clone(),
            row.location.to_string(),
        ];

        if let Some(types) = &solution_table.types {
            cells.push(types.get(index).cloned().unwrap_or_default());
        }

        table.add_row(cells);
    }

    println!("{table}");

    Ok(())
}
