use std::path::PathBuf;

use clap::Args;
use tracing::info;
use wayline_map::order_map::{order_map_view, order_markers};

use crate::{
    route_map::{ColorScheme, write_geojson},
    stops_file,
};

#[derive(Args)]
pub struct OrderMapArgs {
    /// JSON file with the stop list
    #[arg(short, long)]
    input: PathBuf,

    /// Marker colour scheme
    #[arg(long, value_enum, default_value = "last-mile")]
    scheme: ColorScheme,

    /// Output GeoJSON file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: OrderMapArgs) -> Result<(), anyhow::Error> {
    let stops = stops_file::read_stops(&args.input)?;

    let view = order_map_view(&stops);
    info!(
        "Plotting {} order markers around ({}, {})",
        stops.len(),
        view.center.y(),
        view.center.x()
    );

    let elements = order_markers(&stops, &args.scheme.colors());

    write_geojson(&elements, args.output.as_deref())
}
