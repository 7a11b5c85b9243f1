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

#![allow(non_snake_case)]

/// cartographic coordinates in radians.
/// This is the internal format used for the ellipsoid math, i.e. to convert between
/// geodetic and geocentric (ECEF) coordinates of a given ellipsoid. It does not know
/// about datums - that is the job of the CoordinateAdapter

use crate::{atan2, cos, sin};
use crate::cartesian3::Cartesian3;
use crate::ellipsoid::Ellipsoid;
use crate::errors::{Result, convergence_failure};

/// max number of iterations for the geocentric to geodetic latitude recovery
pub const MAX_ITERATIONS: usize = 10;

/// we stop iterating once the latitude changes less than this (radians)
pub const LATITUDE_TOLERANCE: f64 = 1e-12;

/// points that are closer to the polar axis than this fraction of the semi-major axis have
/// no defined longitude and a degenerate latitude iteration
const POLAR_AXIS_EPS: f64 = 1e-9;

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Cartographic {
    pub longitude: f64, // radians
    pub latitude: f64,  // radians
    pub height: f64     // meters above ellipsoid
}

impl Cartographic {
    pub fn new (longitude:f64, latitude: f64, height: f64)->Self {
        Cartographic { longitude, latitude, height }
    }

    pub fn from_degrees (lon: f64, lat: f64, height: f64)->Self {
        Cartographic::new( lon.to_radians(), lat.to_radians(), height)
    }

    pub fn longitude_deg (&self)-> f64 { self.longitude.to_degrees() }
    pub fn latitude_deg (&self)-> f64 { self.latitude.to_degrees() }

    /// closed form geodetic to geocentric conversion for the given ellipsoid
    pub fn to_cartesian (&self, ellipsoid: &Ellipsoid)->Cartesian3 {
        let N = ellipsoid.prime_vertical_radius( self.latitude);
        let h = self.height;
        let cos_lat = cos(self.latitude);

        Cartesian3 {
            x: (N + h) * cos_lat * cos(self.longitude),
            y: (N + h) * cos_lat * sin(self.longitude),
            z: ((1.0 - ellipsoid.e2) * N + h) * sin(self.latitude)
        }
    }

    /// geocentric to geodetic conversion for the given ellipsoid, using our default iteration budget
    pub fn from_cartesian (p: &Cartesian3, ellipsoid: &Ellipsoid)->Result<Self> {
        Cartographic::from_cartesian_bounded( p, ellipsoid, MAX_ITERATIONS)
    }

    /// fixed point iteration on latitude
    ///     φ' = atan2( z, w·(1 - e²·N/(N+h)) )
    /// starting from the spherical estimate φ₀ = atan2( z, w·(1 - e²) ). The height uses the
    /// expression h = w·cosφ + z·sinφ - a²/N, which stays well conditioned close to the poles.
    ///
    /// Each step reduces the latitude error roughly by a factor of e², i.e. terrestrial points
    /// converge within 3-5 steps. Non-finite input, points on the polar axis or an exhausted
    /// iteration budget are reported as `ConvergenceFailure`
    pub fn from_cartesian_bounded (p: &Cartesian3, ellipsoid: &Ellipsoid, max_iterations: usize)->Result<Self> {
        if !p.is_finite() {
            return Err( convergence_failure( format!("non-finite geocentric point {p}")))
        }

        let a = ellipsoid.a;
        let e2 = ellipsoid.e2;
        let Cartesian3 { x, y, z } = *p;
        let w = p.axis_distance();

        if w < a * POLAR_AXIS_EPS {
            return Err( convergence_failure( format!("geocentric point on polar axis {p}")))
        }

        let lon = atan2( y, x);
        let mut lat = atan2( z, w * (1.0 - e2));

        for _ in 0..max_iterations {
            let N = ellipsoid.prime_vertical_radius( lat);
            let h = w * cos(lat) + z * sin(lat) - a * a / N;
            let next = atan2( z, w * (1.0 - e2 * N / (N + h)));
            let delta = (next - lat).abs();
            lat = next;

            if delta < LATITUDE_TOLERANCE {
                let N = ellipsoid.prime_vertical_radius( lat);
                let h = w * cos(lat) + z * sin(lat) - a * a / N;
                return Ok( Cartographic::new( lon, lat, h))
            }
        }

        Err( convergence_failure( format!("geocentric point {p} after {max_iterations} iterations")))
    }
}

impl std::fmt::Display for Cartographic {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ longitude: {}, latitude: {}, height: {} }}",
            self.longitude.to_degrees(), self.latitude.to_degrees(), self.height)
    }
}
