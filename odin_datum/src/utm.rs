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
#![allow(uncommon_codepoints,non_snake_case)]

/// UTM zones and the Transverse Mercator projection they are based on.
///
/// Conventions used throughout ODIN datum conversion:
///   - false easting is 500km, scale factor on the central meridian is 0.9996
///   - northing is signed and referenced to the equator, i.e. we do NOT add a 10000km false northing
///     for the southern hemisphere. The hemisphere follows from the northing sign, the band letter
///     is only a label

use std::{fmt, str::FromStr};
use serde::{Serialize,Deserialize};

use crate::{asinh, atan, atan2, atanh, cos, cosh, hypot, sin, sinh, sqrt, tan};
use crate::angle::{Angle, normalize_180};
use crate::ellipsoid::Ellipsoid;
use crate::errors::{OdinDatumError, Result, unknown_zone_format};

pub const UTM_SCALE_FACTOR: f64 = 0.9996;
pub const UTM_FALSE_EASTING: f64 = 500_000.0;

pub const MIN_ZONE: u8 = 1;
pub const MAX_ZONE: u8 = 60;

// 8° bands starting at 80°S, no 'I' or 'O'. 'X' spans 72°N..84°N
const LAT_BAND: [char;20] = ['C','D','E','F','G','H','J','K','L','M','N','P','Q','R','S','T','U','V','W','X'];

/* #region zone selection ********************************************************************************/

/// the zone number for a longitude: floor((lon + 180)/6) + 1, clamped to [1,60].
/// Note we do not apply the Norway/Svalbard exceptions since zones are picked by longitude only
pub fn natural_zone (lon: Angle) -> u8 {
    let lon_deg = normalize_180( lon.degrees());
    let zone = ((lon_deg + 180.0) / 6.0).floor() as i64 + 1;
    zone.clamp( MIN_ZONE as i64, MAX_ZONE as i64) as u8
}

/// the latitude band letter. Latitudes outside [-80,84] are clamped to 'C' or 'X'
pub fn lat_band (lat: Angle) -> char {
    let idx = ((lat.degrees() + 80.0) / 8.0).floor() as i64;
    LAT_BAND[ idx.clamp( 0, LAT_BAND.len() as i64 - 1) as usize ]
}

pub fn is_lat_band (c: char) -> bool {
    LAT_BAND.contains(&c)
}

/// central meridian of a zone in degrees
pub fn central_meridian (zone: u8) -> f64 {
    (zone as f64 - 1.0) * 6.0 - 180.0 + 3.0
}

/// parse a zone spec that consists of a 1-2 digit zone number that is optionally followed by a band letter,
/// e.g. "31T", "5", "12n". Band letters are converted to upper case
pub fn parse_zone (s: &str) -> Result<(u8,Option<char>)> {
    let n_digits = s.chars().take_while( |c| c.is_ascii_digit()).count();
    if n_digits == 0 || n_digits > 2 { return Err( unknown_zone_format(s)) }

    let (digits,rest) = s.split_at( n_digits);
    let number: u8 = digits.parse().map_err( |_| unknown_zone_format(s))?;
    if number < MIN_ZONE || number > MAX_ZONE { return Err( unknown_zone_format(s)) }

    let mut cs = rest.chars();
    match (cs.next(), cs.next()) {
        (None,_) => Ok( (number, None) ),
        (Some(c),None) => {
            let band = c.to_ascii_uppercase();
            if is_lat_band( band) { Ok( (number, Some(band)) ) } else { Err( unknown_zone_format(s)) }
        }
        _ => Err( unknown_zone_format(s))
    }
}

#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct UtmZone {
    pub number: u8,
    pub band: char,
}

impl UtmZone {
    pub fn new (number: u8, band: char) -> Result<Self> {
        let band = band.to_ascii_uppercase();
        if number < MIN_ZONE || number > MAX_ZONE || !is_lat_band(band) {
            Err( unknown_zone_format( format!("{number}{band}")))
        } else {
            Ok( UtmZone { number, band })
        }
    }

    /// the zone a geodetic position falls into
    pub fn natural (lat: Angle, lon: Angle) -> Self {
        UtmZone { number: natural_zone(lon), band: lat_band(lat) }
    }

    pub fn is_north (&self) -> bool { self.band >= 'N' }

    pub fn central_meridian (&self) -> Angle { Angle::from_degrees( central_meridian( self.number)) }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.band)
    }
}

/// note this requires a band letter. Use `parse_zone(..)` or `Zone::from_str(..)` for zone numbers without band
impl FromStr for UtmZone {
    type Err = OdinDatumError;

    fn from_str (s: &str) -> Result<Self> {
        match parse_zone(s)? {
            (number, Some(band)) => Ok( UtmZone { number, band }),
            (_, None) => Err( unknown_zone_format(s))
        }
    }
}

/// the zone to project into
#[derive(Debug,Copy,Clone,PartialEq,Eq,Default)]
pub enum Zone {
    /// the zone the (converted) position falls into
    #[default]
    Natural,

    /// a caller provided zone number (and optional band letter), which is used even if the position
    /// is outside of the zone. This keeps tracks that cross zone boundaries in one consistent frame
    Override(u8, Option<char>)
}

impl Zone {
    /// resolve the zone for a geodetic position
    pub fn resolve (&self, lat: Angle, lon: Angle) -> Result<UtmZone> {
        match *self {
            Zone::Natural => Ok( UtmZone::natural( lat, lon)),
            Zone::Override(number, Some(band)) => UtmZone::new( number, band),
            Zone::Override(number, None) => UtmZone::new( number, lat_band(lat))
        }
    }
}

impl From<UtmZone> for Zone {
    fn from (z: UtmZone) -> Self { Zone::Override( z.number, Some(z.band)) }
}

impl FromStr for Zone {
    type Err = OdinDatumError;

    fn from_str (s: &str) -> Result<Self> {
        let (number,band) = parse_zone(s)?;
        Ok( Zone::Override( number, band))
    }
}

/* #endregion zone selection */

/* #region transverse mercator ***************************************************************************/

/// Transverse Mercator projection based on the Krüger n-series to 6th order, following
///    Karney, C. F. F. (2011). Transverse Mercator with an accuracy of a few nanometers.
///    Journal of Geodesy, 85(8), 475–485. https://doi.org/10.1007/s00190-011-0445-3
///
/// The series is accurate to well below a millimeter within a UTM zone and still to a few millimeters
/// 30° away from the central meridian. The origin latitude is the equator and there is no false northing
#[derive(Debug,Clone)]
pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    λ0: f64,       // central meridian (radians)
    k0: f64,
    false_easting: f64,
    A: f64,        // rectifying radius a/(1+n)·(1 + n²/4 + n⁴/64)
    α: [f64;6],    // forward series
    β: [f64;6],    // inverse series
}

impl TransverseMercator {
    pub fn new (ellipsoid: &Ellipsoid, central_meridian: Angle, k0: f64, false_easting: f64) -> Self {
        let n = ellipsoid.n();
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;
        let n5 = n4 * n;
        let n6 = n5 * n;

        let A = ellipsoid.a / (1.0 + n) * (1.0 + n2/4.0 + n4/64.0);

        let α = [
            n/2.0 - 2.0/3.0*n2 + 5.0/16.0*n3 + 41.0/180.0*n4 - 127.0/288.0*n5 + 7891.0/37800.0*n6,
            13.0/48.0*n2 - 3.0/5.0*n3 + 557.0/1440.0*n4 + 281.0/630.0*n5 - 1983433.0/1935360.0*n6,
            61.0/240.0*n3 - 103.0/140.0*n4 + 15061.0/26880.0*n5 + 167603.0/181440.0*n6,
            49561.0/161280.0*n4 - 179.0/168.0*n5 + 6601661.0/7257600.0*n6,
            34729.0/80640.0*n5 - 3418889.0/1995840.0*n6,
            212378941.0/319334400.0*n6
        ];

        let β = [
            n/2.0 - 2.0/3.0*n2 + 37.0/96.0*n3 - 1.0/360.0*n4 - 81.0/512.0*n5 + 96199.0/604800.0*n6,
            1.0/48.0*n2 + 1.0/15.0*n3 - 437.0/1440.0*n4 + 46.0/105.0*n5 - 1118711.0/3870720.0*n6,
            17.0/480.0*n3 - 37.0/840.0*n4 - 209.0/4480.0*n5 + 5569.0/90720.0*n6,
            4397.0/161280.0*n4 - 11.0/504.0*n5 - 830251.0/7257600.0*n6,
            4583.0/161280.0*n5 - 108847.0/3991680.0*n6,
            20648693.0/638668800.0*n6
        ];

        TransverseMercator {
            ellipsoid: *ellipsoid,
            λ0: central_meridian.radians(),
            k0,
            false_easting,
            A,
            α,
            β
        }
    }

    /// the projection for a UTM zone number
    pub fn utm (ellipsoid: &Ellipsoid, zone: u8) -> Self {
        TransverseMercator::new( ellipsoid, Angle::from_degrees( central_meridian(zone)), UTM_SCALE_FACTOR, UTM_FALSE_EASTING)
    }

    pub fn ellipsoid (&self) -> &Ellipsoid { &self.ellipsoid }

    /// geodetic (radians) -> (easting,northing) in meters
    pub fn forward (&self, φ: f64, λ: f64) -> (f64,f64) {
        let e = self.ellipsoid.e();
        let dλ = λ - self.λ0;
        let cos_dλ = cos(dλ);

        // conformal latitude via its tangent τ'
        let τ = tan(φ);
        let τ1 = hypot(1.0, τ);
        let σ = sinh( e * atanh( e * τ / τ1));
        let τʹ = τ * hypot(1.0, σ) - σ * τ1;

        let ξʹ = atan2( τʹ, cos_dλ);
        let ηʹ = asinh( sin(dλ) / hypot( τʹ, cos_dλ));

        let mut ξ = ξʹ;
        let mut η = ηʹ;
        for (j, αj) in self.α.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            ξ += αj * sin(k * ξʹ) * cosh(k * ηʹ);
            η += αj * cos(k * ξʹ) * sinh(k * ηʹ);
        }

        let easting = self.false_easting + self.k0 * self.A * η;
        let northing = self.k0 * self.A * ξ;
        (easting, northing)
    }

    /// (easting,northing) in meters -> geodetic (radians)
    pub fn inverse (&self, easting: f64, northing: f64) -> (f64,f64) {
        let η = (easting - self.false_easting) / (self.k0 * self.A);
        let ξ = northing / (self.k0 * self.A);

        let mut ξʹ = ξ;
        let mut ηʹ = η;
        for (j, βj) in self.β.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            ξʹ -= βj * sin(k * ξ) * cosh(k * η);
            ηʹ -= βj * cos(k * ξ) * sinh(k * η);
        }

        let sinh_ηʹ = sinh(ηʹ);
        let cos_ξʹ = cos(ξʹ);
        let τʹ = sin(ξʹ) / hypot( sinh_ηʹ, cos_ξʹ);
        let τ = self.conformal_to_geodetic_tan( τʹ);

        let φ = atan(τ);
        let λ = self.λ0 + atan2( sinh_ηʹ, cos_ξʹ);
        (φ, λ)
    }

    /// Newton iteration to recover τ = tan(φ) from the conformal τ'. Converges in 2-3 steps
    fn conformal_to_geodetic_tan (&self, τʹ: f64) -> f64 {
        let e = self.ellipsoid.e();
        let e2 = self.ellipsoid.e2;
        let mut τ = τʹ;

        for _ in 0..15 {
            let τ1 = hypot(1.0, τ);
            let σ = sinh( e * atanh( e * τ / τ1));
            let τʹ_i = τ * hypot(1.0, σ) - σ * τ1;
            let dτ = (τʹ - τʹ_i) * (1.0 + (1.0 - e2) * τ * τ)
                / ((1.0 - e2) * τ1 * sqrt(1.0 + τʹ_i * τʹ_i));
            τ += dτ;
            if dτ.abs() < 1e-12 * (1.0 + τ.abs()) { break }
        }
        τ
    }
}

/* #endregion transverse mercator */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::WGS84;

    #[test]
    fn test_krueger_coefficients () {
        // the 6th order terms only add a few 1e-12 to the 3rd order WGS84 constants
        let tm = TransverseMercator::utm( &WGS84, 31);
        assert!( (tm.α[0] - 8.377318188192541E-4).abs() < 1e-11);
        assert!( (tm.α[1] - 7.608496958699166E-7).abs() < 1e-11);
        assert!( (tm.β[0] - 8.37732164082144E-4).abs() < 1e-12);
        assert!( (tm.A * UTM_SCALE_FACTOR / 1000.0 - 6364.902166165087).abs() < 1e-9);
    }
}
