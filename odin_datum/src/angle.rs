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

use std::{fmt, ops};
use serde::{Serialize,Deserialize};

/// map degrees into the half-open interval [-180,180)
/// note that `%` is exact for f64, which keeps small angles bit-identical
#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { x + 360.0 }
    else if x >= 180.0 { x - 360.0 }
    else { x }
}

/// map degrees into the half-open interval [0,360)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 {
        let y = x + 360.0;
        if y >= 360.0 { 0.0 } else { y } // tiny negative values round up to 360
    } else {
        x
    }
}

/// a signed angle that is stored in degrees.
/// Angles are not normalized on construction - use `normalize_180()` or `normalize_360()` for that.
/// All arithmetic returns new values
#[derive(Debug,Clone,Copy,PartialEq,PartialOrd,Default,Serialize,Deserialize)]
#[serde(transparent)]
pub struct Angle {
    degrees: f64
}

impl Angle {
    #[inline] pub const fn from_degrees (degrees: f64)->Self { Angle { degrees } }
    #[inline] pub fn from_radians (rad: f64)->Self { Angle { degrees: rad.to_degrees() } }

    #[inline] pub fn degrees (&self)->f64 { self.degrees }
    #[inline] pub fn radians (&self)->f64 { self.degrees.to_radians() }

    #[inline] pub fn normalize_180 (&self)->Self { Angle { degrees: normalize_180( self.degrees) } }
    #[inline] pub fn normalize_360 (&self)->Self { Angle { degrees: normalize_360( self.degrees) } }

    #[inline] pub fn abs (&self)->Self { Angle { degrees: self.degrees.abs() } }
    #[inline] pub fn is_finite (&self)->bool { self.degrees.is_finite() }

    #[inline] pub fn sin (&self)->f64 { self.radians().sin() }
    #[inline] pub fn cos (&self)->f64 { self.radians().cos() }
    #[inline] pub fn tan (&self)->f64 { self.radians().tan() }
}

impl From<Angle> for f64 {
    fn from (a: Angle)->Self { a.degrees }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt( &self.degrees, f)?;
        write!(f, "°")
    }
}

//--- num ops

impl ops::Add for Angle {
    type Output = Angle;
    fn add (self, rhs: Angle) -> Angle { Angle::from_degrees( self.degrees + rhs.degrees) }
}

impl ops::Sub for Angle {
    type Output = Angle;
    fn sub (self, rhs: Angle) -> Angle { Angle::from_degrees( self.degrees - rhs.degrees) }
}

impl ops::Neg for Angle {
    type Output = Angle;
    fn neg (self) -> Angle { Angle::from_degrees( -self.degrees) }
}

// scaling is only allowed with floats
impl ops::Mul<f64> for Angle {
    type Output = Angle;
    fn mul (self, rhs: f64) -> Angle { Angle::from_degrees( self.degrees * rhs) }
}

impl ops::Div<f64> for Angle {
    type Output = Angle;
    fn div (self, rhs: f64) -> Angle { Angle::from_degrees( self.degrees / rhs) }
}
