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

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use nalgebra::Vector3;
use serde::{Serialize,Deserialize};

/// geocentric (earth centered, earth fixed) cartesian coordinates in meters.
/// Note these are always relative to the frame of a specific datum, which is not stored here

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Cartesian3 {
    pub fn new (x: f64, y: f64, z: f64)->Cartesian3 {
        Cartesian3{x,y,z}
    }

    pub fn zero ()->Cartesian3 {
        Cartesian3{x: 0.0, y: 0.0, z: 0.0}
    }

    pub fn from_vector (v: &Vector3<f64>)->Cartesian3 {
        Cartesian3{ x: v[0], y: v[1], z: v[2] }
    }

    pub fn to_vector (&self)->Vector3<f64> {
        Vector3::new( self.x, self.y, self.z)
    }

    pub fn dot (&self, p: &Cartesian3) -> f64 {
        (self.x * p.x) + (self.y * p.y) + (self.z * p.z)
    }

    pub fn length (&self) -> f64 {
        ((self.x * self.x) + (self.y * self.y) + (self.z * self.z)).sqrt()
    }

    /// distance from the polar (z) axis
    pub fn axis_distance (&self) -> f64 {
        self.x.hypot( self.y)
    }

    pub fn distance (&self, p: &Cartesian3) -> f64 {
        (*self - *p).length()
    }

    pub fn is_finite (&self)->bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

impl Add for Cartesian3 {
    type Output = Self;

    fn add (self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z
        }
    }
}

impl AddAssign for Cartesian3 {
    fn add_assign (&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Cartesian3 {
    type Output = Self;

    fn sub (self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z
        }
    }
}

impl SubAssign for Cartesian3 {
    fn sub_assign (&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f64> for Cartesian3 {
    type Output = Self;

    fn mul (self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs
        }
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from (v: Vector3<f64>) -> Self { Cartesian3::from_vector(&v) }
}

impl From<Cartesian3> for Vector3<f64> {
    fn from (p: Cartesian3) -> Self { p.to_vector() }
}
