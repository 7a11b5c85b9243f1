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

/// configuration of additional datums, which are loaded from RON files such as
/// ```ron
/// DatumConfig(
///     datums: [
///         DatumSpec(
///             name: "Hermannskogel",
///             aliases: ["MGI"],
///             ellipsoid: Named("Bessel 1841"),
///             shift: ( dx: 577.326, dy: 90.129, dz: 463.919, ds: 2.4232e-6, rx: 5.137, ry: 1.474, rz: 5.297 )
///         )
///     ]
/// )
/// ```
/// Shift parameters follow the conventions of `HelmertParams` (position vector, arc-seconds, dimensionless scale)

use std::{fs, path::Path};
use serde::{Serialize,Deserialize,de::DeserializeOwned};

use crate::datum::{Datum, HelmertParams};
use crate::ellipsoid::Ellipsoid;
use crate::errors::{OdinDatumError, Result};

#[derive(Debug,Clone,Default,Serialize,Deserialize)]
pub struct DatumConfig {
    pub datums: Vec<DatumSpec>
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct DatumSpec {
    pub name: String,

    #[serde(default)]
    pub aliases: Vec<String>,

    pub ellipsoid: EllipsoidSpec,

    #[serde(default)]
    pub shift: HelmertParams,
}

impl DatumSpec {
    pub fn to_datum (&self) -> Result<Datum> {
        Ok( Datum::new( &self.name, self.ellipsoid.to_ellipsoid()?, self.shift) )
    }
}

/// ellipsoids can be given by name or by semi-major axis plus either inverse flattening or squared eccentricity
#[derive(Debug,Clone,Serialize,Deserialize)]
pub enum EllipsoidSpec {
    Named(String),
    AInvF(f64,f64),
    AE2(f64,f64),
}

impl EllipsoidSpec {
    pub fn to_ellipsoid (&self) -> Result<Ellipsoid> {
        match self {
            EllipsoidSpec::Named(name) => Ellipsoid::named(name).ok_or_else( || OdinDatumError::UnknownEllipsoid(name.clone())),
            EllipsoidSpec::AInvF(a,inv_f) => Ok( Ellipsoid::from_a_inv_f( *a, *inv_f)),
            EllipsoidSpec::AE2(a,e2) => Ok( Ellipsoid::from_a_e2( *a, *e2)),
        }
    }
}

pub fn load_config<C> (path: impl AsRef<Path>) -> Result<C> where C: DeserializeOwned {
    let input = fs::read_to_string( path)?;
    Ok( ron::from_str( &input)? )
}
