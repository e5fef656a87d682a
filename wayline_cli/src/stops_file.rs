use std::{fs::File, io::BufReader, path::Path};

use serde::Deserialize;
use wayline_map::stop::Stop;

/// Stop-list input file. Field names follow the order-book columns the
/// solver workflows export (`lat`, `lng`, `order_type`, `order_ID`, ...).
#[derive(Deserialize)]
struct StopsFile {
    stops: Vec<JsonStop>,
}

#[derive(Deserialize)]
struct JsonStop {
    lat: f64,
    lng: f64,
    order_type: Option<String>,
    #[serde(rename = "order_ID")]
    order_id: Option<String>,
    order_wt: Option<f64>,
    service_time: Option<f64>,
}

pub fn read_stops(path: &Path) -> Result<Vec<Stop>, anyhow::Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let content: StopsFile = serde_json::from_reader(reader)?;

    Ok(content
        .stops
        .into_iter()
        .map(|stop| {
            let mut out = Stop::new(stop.lat, stop.lng);
            out.category = stop.order_type;
            out.order_id = stop.order_id;
            out.weight = stop.order_wt;
            out.service_time_minutes = stop.service_time;
            out
        })
        .collect())
}
