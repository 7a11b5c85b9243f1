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

/// conversion between datums and between geodetic and projected (UTM) coordinates.
///
/// A `CoordinateAdapter` is nothing but a (source,destination) datum pair - all behavior is driven by the
/// ellipsoid and Helmert parameters of these datums. Conversion goes through
///   1. inverse projection of UTM input on the source ellipsoid
///   2. geodetic -> geocentric on the source ellipsoid
///   3. Helmert shift source -> pivot (WGS84) -> destination
///   4. geocentric -> geodetic on the destination ellipsoid
///   5. projection into the natural or a caller provided UTM zone on the destination ellipsoid
///
/// Steps 2-4 are skipped if source and destination are the same datum. Altitude is never transformed,
/// we pass it through unchanged.
///
/// Adapters are immutable and cheap to clone, and can be shared between threads

use std::sync::Arc;
use tracing::{error, trace};

use crate::cartesian3::Cartesian3;
use crate::cartographic::Cartographic;
use crate::coordinates::{Coordinate, GeodeticCoordinate, ProjectedCoordinate};
use crate::datum::Datum;
use crate::errors::{OdinDatumError, Result};
use crate::registry::registry;
use crate::utm::{TransverseMercator, Zone};

#[derive(Debug,Clone)]
pub struct CoordinateAdapter {
    source: Arc<Datum>,
    destination: Arc<Datum>,
}

impl CoordinateAdapter {
    pub fn new (source: Arc<Datum>, destination: Arc<Datum>) -> Self {
        CoordinateAdapter { source, destination }
    }

    /// adapter for two datums of the global registry
    pub fn from_names (source: &str, destination: &str) -> Result<Self> {
        registry().adapter( source, destination)
    }

    pub fn source (&self) -> &Arc<Datum> { &self.source }
    pub fn destination (&self) -> &Arc<Datum> { &self.destination }

    pub fn is_identity (&self) -> bool {
        Arc::ptr_eq( &self.source, &self.destination) || *self.source == *self.destination
    }

    /// the adapter for the opposite direction
    pub fn inverse (&self) -> Self {
        CoordinateAdapter { source: self.destination.clone(), destination: self.source.clone() }
    }

    /// convert a geodetic or projected coordinate in the source datum into a geodetic coordinate in the destination datum
    pub fn to_lat_lon <C: Coordinate> (&self, coord: &C) -> Result<GeodeticCoordinate> {
        self.check_source( coord)?;
        let geo = coord.to_geodetic()?;

        if self.is_identity() {
            return Ok(geo)
        }

        let p = self.shift( &geo.to_cartographic().to_cartesian( &self.source.ellipsoid));
        match Cartographic::from_cartesian( &p, &self.destination.ellipsoid) {
            Ok(c) => GeodeticCoordinate::from_cartographic( self.destination.clone(), &c, geo.altitude()),
            Err(e) => {
                error!("{} -> {} conversion of {} failed: {}", self.source.name, self.destination.name, geo, e);
                Err(e)
            }
        }
    }

    /// convert a geodetic or projected coordinate in the source datum into a UTM coordinate in the destination datum,
    /// projected into either the natural zone of the converted position or the provided override zone
    pub fn to_utm <C: Coordinate> (&self, coord: &C, zone: Zone) -> Result<ProjectedCoordinate> {
        let geo = self.to_lat_lon( coord)?;
        self.project( &geo, zone)
    }

    /// convert a sequence of coordinates into UTM coordinates that all share the same zone.
    /// For `Zone::Natural` this is the natural zone of the first converted position
    pub fn to_utm_track <C: Coordinate> (&self, coords: &[C], zone: Zone) -> Result<Vec<ProjectedCoordinate>> {
        let mut track = Vec::with_capacity( coords.len());
        let mut zone = zone;

        for coord in coords {
            let geo = self.to_lat_lon( coord)?;
            if zone == Zone::Natural {
                let z = geo.natural_zone();
                zone = Zone::Override( z.number, None);
            }
            track.push( self.project( &geo, zone)?);
        }

        Ok(track)
    }

    /// geocentric (ECEF) position of a coordinate in the source datum, expressed in the frame of the destination datum
    pub fn to_geocentric <C: Coordinate> (&self, coord: &C) -> Result<Cartesian3> {
        self.check_source( coord)?;
        let geo = coord.to_geodetic()?;
        let p = geo.to_cartographic().to_cartesian( &self.source.ellipsoid);

        if self.is_identity() { Ok(p) } else { Ok( self.shift(&p)) }
    }

    //--- internals

    /// the coordinate has to be on the source datum itself, a matching name is not enough
    fn check_source <C: Coordinate> (&self, coord: &C) -> Result<()> {
        if Arc::ptr_eq( coord.datum(), &self.source) || **coord.datum() == *self.source {
            Ok(())
        } else {
            Err( OdinDatumError::UnsupportedDatum( format!("{} (adapter source is {})", coord.datum_name(), self.source.name)))
        }
    }

    /// source frame -> pivot frame -> destination frame (each step is a no-op for the pivot itself)
    fn shift (&self, p: &Cartesian3) -> Cartesian3 {
        let p_pivot = self.source.to_pivot( p);
        let p_dest = self.destination.from_pivot( &p_pivot);
        trace!("shift {} -> {}: {} -> {}", self.source.name, self.destination.name, p, p_dest);
        p_dest
    }

    /// projection on the destination ellipsoid. Note that we use override zones even if the position is
    /// outside of their longitude range
    fn project (&self, geo: &GeodeticCoordinate, zone: Zone) -> Result<ProjectedCoordinate> {
        let utm_zone = zone.resolve( geo.latitude(), geo.longitude())?;
        let tm = TransverseMercator::utm( &self.destination.ellipsoid, utm_zone.number);
        let (easting,northing) = tm.forward( geo.latitude().radians(), geo.longitude().radians());

        Ok( ProjectedCoordinate::new( self.destination.clone(), utm_zone, easting, northing, geo.altitude()) )
    }
}
