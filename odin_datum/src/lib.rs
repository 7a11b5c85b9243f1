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

//! geodetic datum and coordinate conversion.
//!
//! Converts positions between geodetic datums (reference ellipsoid plus a 7-parameter Helmert
//! shift to WGS84) and between geodetic (latitude/longitude) and UTM coordinates. Altitude is
//! passed through unchanged.
//! ```
//! use odin_datum::{CoordinateAdapter, GeodeticCoordinate, Zone};
//!
//! let adapter = CoordinateAdapter::from_names( "WGS84", "European 1950").unwrap();
//! let p = GeodeticCoordinate::with_datum_name( "WGS84", 41.973256, 2.780310, 87.0).unwrap();
//! let utm = adapter.to_utm( &p, Zone::Natural).unwrap();
//! println!("{utm}");
//! ```

pub mod errors;
pub mod angle;
pub mod ellipsoid;
pub mod datum;
pub mod cartesian3;
pub mod cartographic;
pub mod utm;
pub mod coordinates;
pub mod config;
pub mod registry;
pub mod adapter;

pub use errors::{OdinDatumError, Result};
pub use angle::Angle;
pub use ellipsoid::Ellipsoid;
pub use datum::{Datum, HelmertParams, PIVOT_DATUM};
pub use cartesian3::Cartesian3;
pub use utm::{UtmZone, Zone};
pub use coordinates::{Coordinate, GeodeticCoordinate, ProjectedCoordinate};
pub use registry::{DatumRegistry, init_registry, registry, lookup_datum};
pub use adapter::CoordinateAdapter;

// syntactic sugar - this is just more readable in formulas
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn tan(x:f64) -> f64 { x.tan() }
#[inline(always)] pub fn sinh(x:f64) -> f64 { x.sinh() }
#[inline(always)] pub fn cosh(x:f64) -> f64 { x.cosh() }
#[inline(always)] pub fn asinh(x:f64) -> f64 { x.asinh() }
#[inline(always)] pub fn atan(x:f64) -> f64 { x.atan() }
#[inline(always)] pub fn atan2(y:f64,x:f64) -> f64 { y.atan2(x) }
#[inline(always)] pub fn atanh(x:f64) -> f64 { x.atanh() }
#[inline(always)] pub fn hypot(x:f64,y:f64) -> f64 { x.hypot(y) }
#[inline(always)] pub fn sqrt(x:f64) -> f64 { x.sqrt() }
