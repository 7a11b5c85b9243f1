/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use anyhow::{Result, bail};
use clap::Parser;
use lazy_static::lazy_static;
use tracing_subscriber::EnvFilter;

use odin_datum::{
    init_registry, Coordinate, CoordinateAdapter, DatumRegistry, GeodeticCoordinate, ProjectedCoordinate, Zone
};

// convert a coordinate between datums and between lat/lon and UTM, e.g.
//   convert_coords --to "European 1950" --utm 41.973256 2.780310 87
//   convert_coords --from ED50 --zone 31 31T 481891.28 4647031.71 87
#[derive(Parser)]
#[command(about="convert_coords - convert geodetic and UTM coordinates between datums")]
struct CliOpts {
    /// name of source datum
    #[arg(long, default_value="WGS84")]
    from: String,

    /// name of destination datum
    #[arg(long, default_value="WGS84")]
    to: String,

    /// output UTM coordinates (default if --zone is set)
    #[arg(long, short)]
    utm: bool,

    /// UTM zone to project into (e.g. "31" or "31T"), overrides the natural zone
    #[arg(long, short)]
    zone: Option<String>,

    /// RON file with additional datum definitions
    #[arg(long, short)]
    config: Option<String>,

    /// either "lat lon alt" or "zone easting northing alt"
    #[arg(allow_negative_numbers=true, num_args=3..=4)]
    values: Vec<String>,
}

lazy_static! { static ref ARGS: CliOpts = CliOpts::parse(); }

fn main () -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    if let Some(path) = &ARGS.config {
        init_registry( DatumRegistry::from_config_file( path)?)?;
    }

    let adapter = CoordinateAdapter::from_names( &ARGS.from, &ARGS.to)?;
    let zone = match &ARGS.zone {
        Some(s) => s.trim().parse::<Zone>()?,
        None => Zone::Natural
    };
    let to_utm = ARGS.utm || ARGS.zone.is_some();

    match ARGS.values.as_slice() {
        [lat, lon, alt] => {
            let p = GeodeticCoordinate::from_degrees( adapter.source().clone(), lat.parse()?, lon.parse()?, alt.parse()?)?;
            convert( &adapter, &p, zone, to_utm)
        }
        [zone_spec, easting, northing, alt] => {
            let p = ProjectedCoordinate::from_zone_str( adapter.source().clone(), zone_spec.trim(), easting.parse()?, northing.parse()?, alt.parse()?)?;
            convert( &adapter, &p, zone, to_utm)
        }
        _ => bail!("expected either 'lat lon alt' or 'zone easting northing alt'")
    }
}

fn convert <C: Coordinate> (adapter: &CoordinateAdapter, p: &C, zone: Zone, to_utm: bool) -> Result<()> {
    if to_utm {
        println!("{}", adapter.to_utm( p, zone)?);
    } else {
        println!("{}", adapter.to_lat_lon( p)?);
    }
    Ok(())
}
