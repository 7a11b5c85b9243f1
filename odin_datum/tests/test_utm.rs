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

use odin_datum::{Angle, OdinDatumError, UtmZone, Zone};
use odin_datum::ellipsoid::{WGS84, INTERNATIONAL_1924};
use odin_datum::utm::{TransverseMercator, central_meridian, lat_band, natural_zone, parse_zone};

// run with "cargo test -p odin_datum --test test_utm -- --nocapture"

fn deg (d: f64)->Angle { Angle::from_degrees(d) }

#[test]
fn test_natural_zone () {
    assert_eq!( natural_zone( deg(-180.0)), 1);
    assert_eq!( natural_zone( deg(-177.0)), 1);
    assert_eq!( natural_zone( deg(-174.0)), 2);
    assert_eq!( natural_zone( deg(-0.5)), 30);
    assert_eq!( natural_zone( deg(0.0)), 31);
    assert_eq!( natural_zone( deg(2.780310)), 31);
    assert_eq!( natural_zone( deg(179.999)), 60);
    assert_eq!( natural_zone( deg(180.0)), 1); // normalized to -180
    assert_eq!( natural_zone( deg(-122.4)), 10);
}

#[test]
fn test_lat_band () {
    assert_eq!( lat_band( deg(-80.0)), 'C');
    assert_eq!( lat_band( deg(-0.1)), 'M');
    assert_eq!( lat_band( deg(0.0)), 'N');
    assert_eq!( lat_band( deg(41.973256)), 'T');
    assert_eq!( lat_band( deg(72.0)), 'X');
    assert_eq!( lat_band( deg(84.0)), 'X');
    assert_eq!( lat_band( deg(-89.0)), 'C'); // clamped
    assert_eq!( lat_band( deg(89.0)), 'X');
}

#[test]
fn test_central_meridian () {
    assert_eq!( central_meridian(1), -177.0);
    assert_eq!( central_meridian(31), 3.0);
    assert_eq!( central_meridian(33), 15.0);
    assert_eq!( central_meridian(60), 177.0);
    assert_eq!( UtmZone::new( 10, 's').unwrap().central_meridian().degrees(), -123.0);
}

#[test]
fn test_parse_zone () {
    assert_eq!( parse_zone("31T").unwrap(), (31, Some('T')));
    assert_eq!( parse_zone("5").unwrap(), (5, None));
    assert_eq!( parse_zone("05n").unwrap(), (5, Some('N')));
    assert_eq!( "31T".parse::<UtmZone>().unwrap(), UtmZone { number: 31, band: 'T' });
    assert_eq!( "31".parse::<Zone>().unwrap(), Zone::Override( 31, None));
    assert_eq!( "32U".parse::<Zone>().unwrap(), Zone::Override( 32, Some('U')));

    for s in ["", "T", "131T", "0", "61", "31TT", "31I", "31O", "31 T", " 31T", "3-1", "31é"] {
        let res = parse_zone(s);
        println!("parse_zone('{s}') -> {res:?}");
        assert!( matches!( res, Err(OdinDatumError::UnknownZoneFormat(_))));
    }

    // UtmZone needs a band letter
    assert!( "31".parse::<UtmZone>().is_err());
}

#[test]
fn test_zone_display () {
    let z = UtmZone::natural( deg(41.973256), deg(2.780310));
    assert_eq!( z.to_string(), "31T");
    assert!( z.is_north());
    assert!( !UtmZone::natural( deg(-33.9), deg(151.2)).is_north());
}

#[test]
fn test_zone_resolve () {
    let lat = deg(41.973256);
    let lon = deg(2.780310);

    assert_eq!( Zone::Natural.resolve( lat, lon).unwrap(), UtmZone { number: 31, band: 'T' });
    assert_eq!( Zone::Override( 30, None).resolve( lat, lon).unwrap(), UtmZone { number: 30, band: 'T' });
    assert_eq!( Zone::Override( 30, Some('S')).resolve( lat, lon).unwrap(), UtmZone { number: 30, band: 'S' });
    assert!( Zone::Override( 61, None).resolve( lat, lon).is_err());
    assert!( Zone::Override( 0, None).resolve( lat, lon).is_err());
}

#[test]
fn test_tm_known_points () {
    let tm = TransverseMercator::utm( &WGS84, 33);
    let (e,n) = tm.forward( 52f64.to_radians(), 15f64.to_radians());
    println!("52N 15E -> {e}, {n}");
    assert!( (e - 500000.0).abs() < 1e-6);
    assert!( (n - 5761038.2126).abs() < 1e-3);

    // symmetric to central meridian
    let (e1,n1) = tm.forward( 52f64.to_radians(), 21f64.to_radians());
    let (e2,n2) = tm.forward( 52f64.to_radians(), 9f64.to_radians());
    assert!( (e1 - 911720.5634).abs() < 1e-3);
    assert!( ((e1 - 500000.0) + (e2 - 500000.0)).abs() < 1e-6);
    assert!( (n1 - n2).abs() < 1e-6);

    let tm = TransverseMercator::utm( &WGS84, 31);
    let (e,n) = tm.forward( 0.0, 3f64.to_radians());
    assert!( (e - 500000.0).abs() < 1e-9);
    assert!( n.abs() < 1e-9);
}

#[test]
fn test_tm_southern_hemisphere () {
    // northing is signed - no 10000km false northing
    let tm = TransverseMercator::utm( &WGS84, 56);
    let (e,n) = tm.forward( (-33.9f64).to_radians(), 151.2f64.to_radians());
    println!("Sydney -> {e}, {n}");
    assert!( (e - 333568.9410).abs() < 1e-3);
    assert!( (n - -3752526.6632).abs() < 1e-3);

    let (lat,lon) = tm.inverse( e, n);
    assert!( (lat.to_degrees() - -33.9).abs() < 1e-10);
    assert!( (lon.to_degrees() - 151.2).abs() < 1e-10);
}

#[test]
fn test_tm_roundtrip () {
    for zone in [1u8, 10, 17, 31, 33, 45, 60] {
        for tm in [TransverseMercator::utm( &WGS84, zone), TransverseMercator::utm( &INTERNATIONAL_1924, zone)] {
            let cm = central_meridian( zone);
            for (dlon,lat) in [(0.0f64, 0.0f64), (2.9, 45.0), (-2.9, -45.0), (1.0, 80.0), (-8.0, 30.0)] {
                let lon = cm + dlon;
                let (e,n) = tm.forward( lat.to_radians(), lon.to_radians());
                let (lat1,lon1) = tm.inverse( e, n);
                assert!( (lat1.to_degrees() - lat).abs() < 1e-10, "zone {zone} lat {lat} -> {}", lat1.to_degrees());
                assert!( (lon1.to_degrees() - lon).abs() < 1e-10, "zone {zone} lon {lon} -> {}", lon1.to_degrees());
            }
        }
    }
}
