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

/// reference ellipsoids.
/// We only store the semi-major axis and the squared first eccentricity since all other
/// parameters can be derived from them. Note that sqrt() is not const so derived values are fns

use serde::{Serialize,Deserialize};
use crate::sqrt;

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Ellipsoid {
    /// semi-major axis in meters
    pub a: f64,
    /// first eccentricity squared
    pub e2: f64,
}

impl Ellipsoid {
    pub const fn from_a_e2 (a: f64, e2: f64)->Self {
        Ellipsoid { a, e2 }
    }

    pub const fn from_a_inv_f (a: f64, inv_f: f64)->Self {
        let f = 1.0 / inv_f;
        Ellipsoid { a, e2: 2.0*f - f*f }
    }

    /// semi-minor axis b = a * sqrt(1 - e²)
    pub fn b (&self)->f64 { self.a * sqrt(1.0 - self.e2) }

    /// flattening f = (a - b) / a
    pub fn f (&self)->f64 { (self.a - self.b()) / self.a }

    pub fn inverse_f (&self)->f64 { 1.0 / self.f() }

    /// first eccentricity
    pub fn e (&self)->f64 { sqrt(self.e2) }

    /// second eccentricity squared e'² = e² / (1 - e²)
    pub fn ep2 (&self)->f64 { self.e2 / (1.0 - self.e2) }

    /// third flattening n = f / (2 - f)
    pub fn n (&self)->f64 {
        let f = self.f();
        f / (2.0 - f)
    }

    /// radius of curvature in the prime vertical for given geodetic latitude (radians)
    #[inline]
    pub fn prime_vertical_radius (&self, lat: f64)->f64 {
        let sin_lat = lat.sin();
        self.a / sqrt(1.0 - self.e2 * sin_lat * sin_lat)
    }

    /// look up one of our well known ellipsoids by name (case insensitive)
    pub fn named (name: &str)->Option<Ellipsoid> {
        ELLIPSOIDS.iter()
            .find( |(n,_)| n.eq_ignore_ascii_case(name))
            .map( |(_,e)| *e)
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::from_a_inv_f( 6378137.0, 298.257223563);
pub const GRS80: Ellipsoid = Ellipsoid::from_a_inv_f( 6378137.0, 298.257222101);
pub const INTERNATIONAL_1924: Ellipsoid = Ellipsoid::from_a_inv_f( 6378388.0, 297.0);
pub const CLARKE_1866: Ellipsoid = Ellipsoid::from_a_inv_f( 6378206.4, 294.9786982);
pub const AIRY_1830: Ellipsoid = Ellipsoid::from_a_inv_f( 6377563.396, 299.3249646);
pub const BESSEL_1841: Ellipsoid = Ellipsoid::from_a_inv_f( 6377397.155, 299.1528128);
pub const AUSTRALIAN_NATIONAL: Ellipsoid = Ellipsoid::from_a_inv_f( 6378160.0, 298.25);

const ELLIPSOIDS: [(&str,Ellipsoid);7] = [
    ("WGS84", WGS84),
    ("GRS80", GRS80),
    ("International 1924", INTERNATIONAL_1924),
    ("Clarke 1866", CLARKE_1866),
    ("Airy 1830", AIRY_1830),
    ("Bessel 1841", BESSEL_1841),
    ("Australian National", AUSTRALIAN_NATIONAL),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_derived () {
        assert!( (WGS84.b() - 6356752.314245179).abs() < 1e-3);
        assert!( (WGS84.e() - 0.081819190842622).abs() < 1e-12);
        assert!( (WGS84.inverse_f() - 298.257223563).abs() < 1e-6);
        assert!( (WGS84.n() - 0.001679220386383705).abs() < 1e-12);
    }

    #[test]
    fn test_named () {
        assert_eq!( Ellipsoid::named("bessel 1841"), Some(BESSEL_1841));
        assert!( Ellipsoid::named("Everest").is_none());
    }
}
