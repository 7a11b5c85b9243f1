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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OdinDatumError>;

#[derive(Error,Debug)]
pub enum OdinDatumError {
    #[error("unknown datum {0}")]
    UnknownDatum(String),

    /// the datum of a coordinate does not match the source datum of the adapter it was passed to
    #[error("unsupported datum {0}")]
    UnsupportedDatum(String),

    #[error("unknown zone format '{0}'")]
    UnknownZoneFormat(String),

    #[error("geocentric conversion did not converge for {0}")]
    ConvergenceFailure(String),

    #[error("unknown ellipsoid {0}")]
    UnknownEllipsoid(String),

    #[error("latitude out of range [-90,90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("non-finite coordinate value {0}")]
    NonFiniteCoordinate(String),

    #[error("datum already registered {0}")]
    DuplicateDatum(String),

    #[error("datum registry already initialized")]
    RegistryInitialized,

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config error {0}")]
    ConfigError( #[from] ron::error::SpannedError),
}

pub fn unknown_datum (name: impl ToString)->OdinDatumError {
    OdinDatumError::UnknownDatum(name.to_string())
}

pub fn unknown_zone_format (s: impl ToString)->OdinDatumError {
    OdinDatumError::UnknownZoneFormat(s.to_string())
}

pub fn convergence_failure (msg: impl ToString)->OdinDatumError {
    OdinDatumError::ConvergenceFailure(msg.to_string())
}

pub fn non_finite_coordinate (msg: impl ToString)->OdinDatumError {
    OdinDatumError::NonFiniteCoordinate(msg.to_string())
}
