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

use std::fmt;
use nalgebra::{Matrix3, Vector3};
use serde::{Serialize,Deserialize};

use crate::cartesian3::Cartesian3;
use crate::ellipsoid::{self, Ellipsoid};

/// name of the frame all Helmert parameters are relative to
pub const PIVOT_DATUM: &str = "WGS84";

const ARC_SECOND: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// 7-parameter Helmert (similarity) transform from a datum frame into the WGS84 pivot frame.
///
/// We use the position vector convention (EPSG method 9606):
/// ```text
///   | X' |   | dx |            |  1   -rz   ry |   | X |
///   | Y' | = | dy | + (1+ds) · |  rz   1   -rx | · | Y |
///   | Z' |   | dz |            | -ry   rx   1  |   | Z |
/// ```
/// Translations are in meters, rotations in arc-seconds and `ds` is the dimensionless scale
/// correction (ppm * 1e-6). Parameters published in the coordinate frame convention (EPSG 9607)
/// have to be entered with negated rotations.
#[derive(Debug,Clone,Copy,PartialEq,Default,Serialize,Deserialize)]
#[serde(default)]
pub struct HelmertParams {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub ds: f64,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
}

impl HelmertParams {
    pub const IDENTITY: HelmertParams = HelmertParams { dx: 0.0, dy: 0.0, dz: 0.0, ds: 0.0, rx: 0.0, ry: 0.0, rz: 0.0 };

    pub const fn translation (dx: f64, dy: f64, dz: f64)->Self {
        HelmertParams { dx, dy, dz, ds: 0.0, rx: 0.0, ry: 0.0, rz: 0.0 }
    }

    pub fn is_identity (&self)->bool {
        *self == Self::IDENTITY
    }

    pub fn translation_vector (&self)->Vector3<f64> {
        Vector3::new( self.dx, self.dy, self.dz)
    }

    /// small angle rotation matrix (rotations converted to radians)
    pub fn rotation_matrix (&self)->Matrix3<f64> {
        let rx = self.rx * ARC_SECOND;
        let ry = self.ry * ARC_SECOND;
        let rz = self.rz * ARC_SECOND;

        Matrix3::new(
             1.0, -rz,   ry,
             rz,   1.0, -rx,
            -ry,   rx,   1.0
        )
    }

    /// the full linear part (1+ds)·R
    fn linear (&self)->Matrix3<f64> {
        self.rotation_matrix() * (1.0 + self.ds)
    }

    /// datum frame -> pivot frame
    pub fn to_pivot (&self, p: &Cartesian3)->Cartesian3 {
        if self.is_identity() { return *p }

        let v = self.linear() * p.to_vector() + self.translation_vector();
        Cartesian3::from_vector( &v)
    }

    /// pivot frame -> datum frame.
    /// This is the exact inverse of `to_pivot()`, which to first order is the same as applying the
    /// negated parameters. Using the exact inverse makes datum->pivot->datum an identity up to
    /// rounding errors
    pub fn from_pivot (&self, p: &Cartesian3)->Cartesian3 {
        if self.is_identity() { return *p }

        let v = p.to_vector() - self.translation_vector();
        match self.linear().try_inverse() {
            Some(inv) => Cartesian3::from_vector( &(inv * v)),
            None => { // can't happen for small angles and |ds| << 1, fall back to first order inverse
                let neg = self.negated();
                Cartesian3::from_vector( &(neg.linear() * v))
            }
        }
    }

    /// the first order inverse transform parameters
    pub fn negated (&self)->Self {
        HelmertParams {
            dx: -self.dx, dy: -self.dy, dz: -self.dz,
            ds: -self.ds,
            rx: -self.rx, ry: -self.ry, rz: -self.rz
        }
    }
}

/// a named geodetic datum: a reference ellipsoid plus its Helmert shift to the pivot frame.
/// Datums are immutable once they have been registered
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Datum {
    pub name: String,
    pub ellipsoid: Ellipsoid,
    pub shift: HelmertParams,
}

impl Datum {
    pub fn new (name: impl ToString, ellipsoid: Ellipsoid, shift: HelmertParams)->Self {
        Datum { name: name.to_string(), ellipsoid, shift }
    }

    pub fn is_pivot (&self)->bool { self.name == PIVOT_DATUM }

    pub fn a (&self)->f64 { self.ellipsoid.a }
    pub fn e2 (&self)->f64 { self.ellipsoid.e2 }
    pub fn b (&self)->f64 { self.ellipsoid.b() }
    pub fn f (&self)->f64 { self.ellipsoid.f() }

    pub fn to_pivot (&self, p: &Cartesian3)->Cartesian3 { self.shift.to_pivot(p) }
    pub fn from_pivot (&self, p: &Cartesian3)->Cartesian3 { self.shift.from_pivot(p) }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// (name, aliases, ellipsoid, shift to WGS84)
/// shifts are the commonly published regional mean values (EPSG/NIMA TR8350.2)
pub fn builtin_datums ()->Vec<(Datum, &'static [&'static str])> {
    vec![
        (Datum::new( PIVOT_DATUM, ellipsoid::WGS84, HelmertParams::IDENTITY),
            &["WGS 84", "WGS-84"]),

        (Datum::new( "European 1950", ellipsoid::INTERNATIONAL_1924, HelmertParams::translation( -87.0, -98.0, -121.0)),
            &["ED50", "ED 50"]),

        (Datum::new( "NAD27", ellipsoid::CLARKE_1866, HelmertParams::translation( -8.0, 160.0, 176.0)),
            &["NAD 27", "North American 1927"]),

        (Datum::new( "NAD83", ellipsoid::GRS80, HelmertParams::IDENTITY),
            &["NAD 83", "North American 1983"]),

        (Datum::new( "ETRS89", ellipsoid::GRS80, HelmertParams::IDENTITY),
            &["ETRS 89"]),

        (Datum::new( "OSGB36", ellipsoid::AIRY_1830, HelmertParams {
                dx: 446.448, dy: -125.157, dz: 542.060,
                ds: -20.4894e-6,
                rx: 0.1502, ry: 0.2470, rz: 0.8421
            }),
            &["Ord Srvy Grt Britn", "OSGB 1936"]),

        (Datum::new( "DHDN", ellipsoid::BESSEL_1841, HelmertParams {
                dx: 598.1, dy: 73.7, dz: 418.2,
                ds: 6.7e-6,
                rx: 0.202, ry: 0.045, rz: -2.455
            }),
            &["Potsdam", "Potsdam Rauenberg DHDN"]),

        (Datum::new( "Tokyo", ellipsoid::BESSEL_1841, HelmertParams::translation( -148.0, 507.0, 685.0)),
            &[]),

        (Datum::new( "CH1903", ellipsoid::BESSEL_1841, HelmertParams::translation( 674.374, 15.056, 405.346)),
            &["CH 1903"]),

        (Datum::new( "AGD84", ellipsoid::AUSTRALIAN_NATIONAL, HelmertParams::translation( -134.0, -48.0, 149.0)),
            &["Australian Geodetic 1984"]),
    ]
}
