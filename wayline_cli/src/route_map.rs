use std::{fs, path::PathBuf};

use clap::{Args, ValueEnum};
use geo_types::Point;
use indicatif::ProgressBar;
use tracing::info;
use wayline_map::{
    map_elements::{MapElement, to_feature_collection},
    route_map::RouteMapBuilder,
    stop::Stop,
    style::CategoryColors,
};
use wayline_routing::{
    osrm_api::{DEFAULT_OSRM_URL, OsrmRouteClient, OsrmRouteClientParams, RoutingError},
    route_segment::RouteSegment,
    segment_fetcher::SegmentFetcher,
    straight_line::StraightLineFetcher,
};

use crate::{parsers, stops_file};

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorScheme {
    Pdp,
    LastMile,
}

impl ColorScheme {
    pub fn colors(self) -> CategoryColors {
        match self {
            ColorScheme::Pdp => CategoryColors::pdp(),
            ColorScheme::LastMile => CategoryColors::last_mile(),
        }
    }
}

#[derive(Args)]
pub struct RouteMapArgs {
    /// JSON file with the ordered stop list
    #[arg(short, long)]
    input: PathBuf,

    /// Routing backend base URL
    #[arg(long, default_value = DEFAULT_OSRM_URL)]
    osrm_url: String,

    /// Per-request timeout, e.g. "10s"
    #[arg(long, value_parser = parsers::parse_duration)]
    timeout: Option<jiff::SignedDuration>,

    /// Draw straight legs instead of querying the backend
    #[arg(long)]
    straight_lines: bool,

    /// Marker colour scheme
    #[arg(long, value_enum, default_value = "pdp")]
    scheme: ColorScheme,

    /// Output GeoJSON file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Advances a progress bar as the inner fetcher resolves legs.
struct ProgressFetcher<'a, F> {
    inner: &'a F,
    bar: &'a ProgressBar,
}

impl<F: SegmentFetcher> SegmentFetcher for ProgressFetcher<'_, F> {
    async fn fetch(&self, source: Point, destination: Point) -> Result<RouteSegment, RoutingError> {
        let segment = self.inner.fetch(source, destination).await?;
        self.bar.inc(1);
        Ok(segment)
    }
}

pub async fn run(args: RouteMapArgs) -> Result<(), anyhow::Error> {
    let stops = stops_file::read_stops(&args.input)?;
    info!("Building route map for {} stops", stops.len());

    let bar = ProgressBar::new(stops.len().saturating_sub(1) as u64);

    let elements = if args.straight_lines {
        build_elements(&StraightLineFetcher, &bar, &stops, args.scheme).await?
    } else {
        let client = OsrmRouteClient::new(OsrmRouteClientParams {
            base_url: args.osrm_url.clone(),
            timeout: match args.timeout {
                Some(timeout) => Some(std::time::Duration::try_from(timeout)?),
                None => None,
            },
        });
        build_elements(&client, &bar, &stops, args.scheme).await?
    };

    bar.finish_and_clear();

    write_geojson(&elements, args.output.as_deref())?;

    Ok(())
}

async fn build_elements<F: SegmentFetcher>(
    fetcher: &F,
    bar: &ProgressBar,
    stops: &[Stop],
    scheme: ColorScheme,
) -> Result<Vec<MapElement>, anyhow::Error> {
    let fetcher = ProgressFetcher { inner: fetcher, bar };
    let builder = RouteMapBuilder::new(&fetcher, scheme.colors());

    Ok(builder.build(stops).await?)
}

pub fn write_geojson(
    elements: &[MapElement],
    output: Option<&std::path::Path>,
) -> Result<(), anyhow::Error> {
    let collection = to_feature_collection(elements);
    let json = serde_json::to_string_pretty(&collection)?;

    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
