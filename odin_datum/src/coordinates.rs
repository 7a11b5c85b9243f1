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

/// the coordinate value types: geodetic (latitude/longitude/altitude) and projected (UTM)
/// coordinates, both tagged with the datum they refer to. Coordinates are immutable values -
/// conversions always create new instances (see `CoordinateAdapter`)

use std::{fmt, sync::Arc};
use serde::{Serialize,Deserialize};

use crate::angle::Angle;
use crate::cartographic::Cartographic;
use crate::datum::Datum;
use crate::errors::{OdinDatumError, Result, non_finite_coordinate};
use crate::registry::lookup_datum;
use crate::utm::{self, TransverseMercator, UtmZone};

/// common interface of coordinate values that can be fed into a `CoordinateAdapter`
pub trait Coordinate {
    fn datum (&self) -> &Arc<Datum>;

    fn altitude (&self) -> f64;

    /// the geodetic position in the coordinate's own datum
    fn to_geodetic (&self) -> Result<GeodeticCoordinate>;

    fn datum_name (&self) -> &str { &self.datum().name }
}

/* #region GeodeticCoordinate ******************************************************************************/

/// latitude is validated to be within [-90,90] (we never wrap it across the poles),
/// longitude is normalized to [-180,180). Non-finite longitude or altitude values are rejected
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(into="GeodeticRecord", try_from="GeodeticRecord")]
pub struct GeodeticCoordinate {
    datum: Arc<Datum>,
    latitude: Angle,
    longitude: Angle,
    altitude: f64, // meters
}

impl GeodeticCoordinate {
    pub fn new (datum: Arc<Datum>, latitude: Angle, longitude: Angle, altitude: f64) -> Result<Self> {
        let lat_deg = latitude.degrees();
        if !(-90.0..=90.0).contains( &lat_deg) {
            return Err( OdinDatumError::LatitudeOutOfRange(lat_deg))
        }
        if !longitude.is_finite() { return Err( non_finite_coordinate( format!("longitude {}", longitude.degrees()))) }
        if !altitude.is_finite() { return Err( non_finite_coordinate( format!("altitude {altitude}"))) }

        Ok( GeodeticCoordinate { datum, latitude, longitude: longitude.normalize_180(), altitude } )
    }

    pub fn from_degrees (datum: Arc<Datum>, lat_deg: f64, lon_deg: f64, altitude: f64) -> Result<Self> {
        GeodeticCoordinate::new( datum, Angle::from_degrees(lat_deg), Angle::from_degrees(lon_deg), altitude)
    }

    /// create coordinate for a datum name that is looked up in the global registry
    pub fn with_datum_name (datum_name: &str, lat_deg: f64, lon_deg: f64, altitude: f64) -> Result<Self> {
        GeodeticCoordinate::from_degrees( lookup_datum(datum_name)?, lat_deg, lon_deg, altitude)
    }

    pub(crate) fn from_cartographic (datum: Arc<Datum>, c: &Cartographic, altitude: f64) -> Result<Self> {
        GeodeticCoordinate::new( datum, Angle::from_radians(c.latitude), Angle::from_radians(c.longitude), altitude)
    }

    pub fn latitude (&self) -> Angle { self.latitude }
    pub fn longitude (&self) -> Angle { self.longitude }

    /// the cartographic (radians) representation of this position on its own ellipsoid
    pub fn to_cartographic (&self) -> Cartographic {
        Cartographic::new( self.longitude.radians(), self.latitude.radians(), self.altitude)
    }

    /// the UTM zone this position falls into
    pub fn natural_zone (&self) -> UtmZone {
        UtmZone::natural( self.latitude, self.longitude)
    }
}

impl Coordinate for GeodeticCoordinate {
    fn datum (&self) -> &Arc<Datum> { &self.datum }
    fn altitude (&self) -> f64 { self.altitude }
    fn to_geodetic (&self) -> Result<GeodeticCoordinate> { Ok( self.clone()) }
}

impl fmt::Display for GeodeticCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.datum.name, self.latitude.degrees(), self.longitude.degrees(), self.altitude)
    }
}

#[derive(Serialize,Deserialize)]
struct GeodeticRecord {
    datum: String,
    lat: f64,
    lon: f64,
    alt: f64
}

impl From<GeodeticCoordinate> for GeodeticRecord {
    fn from (c: GeodeticCoordinate) -> Self {
        GeodeticRecord { datum: c.datum.name.clone(), lat: c.latitude.degrees(), lon: c.longitude.degrees(), alt: c.altitude }
    }
}

impl TryFrom<GeodeticRecord> for GeodeticCoordinate {
    type Error = OdinDatumError;

    fn try_from (r: GeodeticRecord) -> Result<Self> {
        GeodeticCoordinate::with_datum_name( &r.datum, r.lat, r.lon, r.alt)
    }
}

/* #endregion GeodeticCoordinate */

/* #region ProjectedCoordinate *****************************************************************************/

/// a UTM coordinate. Easting includes the 500km false easting, northing is signed (negative on the
/// southern hemisphere). The zone number defines the central meridian of the projection
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(into="ProjectedRecord", try_from="ProjectedRecord")]
pub struct ProjectedCoordinate {
    datum: Arc<Datum>,
    zone: UtmZone,
    easting: f64,  // meters
    northing: f64, // meters
    altitude: f64, // meters
}

impl ProjectedCoordinate {
    pub fn new (datum: Arc<Datum>, zone: UtmZone, easting: f64, northing: f64, altitude: f64) -> Self {
        ProjectedCoordinate { datum, zone, easting, northing, altitude }
    }

    /// create coordinate from a zone spec such as "31T". If the spec has no band letter we compute it from the
    /// inverse projected latitude
    pub fn from_zone_str (datum: Arc<Datum>, zone: &str, easting: f64, northing: f64, altitude: f64) -> Result<Self> {
        let (number,band) = utm::parse_zone( zone)?;
        if !(easting.is_finite() && northing.is_finite() && altitude.is_finite()) {
            return Err( non_finite_coordinate( format!("{zone} {easting} {northing} {altitude}")))
        }
        let band = match band {
            Some(band) => band,
            None => {
                let tm = TransverseMercator::utm( &datum.ellipsoid, number);
                let (lat,_) = tm.inverse( easting, northing);
                utm::lat_band( Angle::from_radians(lat))
            }
        };
        Ok( ProjectedCoordinate { datum, zone: UtmZone { number, band }, easting, northing, altitude } )
    }

    /// create coordinate for a datum name that is looked up in the global registry
    pub fn with_datum_name (datum_name: &str, zone: &str, easting: f64, northing: f64, altitude: f64) -> Result<Self> {
        ProjectedCoordinate::from_zone_str( lookup_datum(datum_name)?, zone, easting, northing, altitude)
    }

    pub fn zone (&self) -> UtmZone { self.zone }
    pub fn easting (&self) -> f64 { self.easting }
    pub fn northing (&self) -> f64 { self.northing }
}

impl Coordinate for ProjectedCoordinate {
    fn datum (&self) -> &Arc<Datum> { &self.datum }
    fn altitude (&self) -> f64 { self.altitude }

    /// inverse projection on our own ellipsoid
    fn to_geodetic (&self) -> Result<GeodeticCoordinate> {
        let tm = TransverseMercator::utm( &self.datum.ellipsoid, self.zone.number);
        let (lat,lon) = tm.inverse( self.easting, self.northing);
        GeodeticCoordinate::new( self.datum.clone(), Angle::from_radians(lat), Angle::from_radians(lon), self.altitude)
    }
}

impl fmt::Display for ProjectedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {} {}", self.datum.name, self.zone, self.easting, self.northing, self.altitude)
    }
}

#[derive(Serialize,Deserialize)]
struct ProjectedRecord {
    datum: String,
    zone: String,
    easting: f64,
    northing: f64,
    alt: f64
}

impl From<ProjectedCoordinate> for ProjectedRecord {
    fn from (c: ProjectedCoordinate) -> Self {
        ProjectedRecord { datum: c.datum.name.clone(), zone: c.zone.to_string(), easting: c.easting, northing: c.northing, alt: c.altitude }
    }
}

impl TryFrom<ProjectedRecord> for ProjectedCoordinate {
    type Error = OdinDatumError;

    fn try_from (r: ProjectedRecord) -> Result<Self> {
        ProjectedCoordinate::with_datum_name( &r.datum, &r.zone, r.easting, r.northing, r.alt)
    }
}

/* #endregion ProjectedCoordinate */
