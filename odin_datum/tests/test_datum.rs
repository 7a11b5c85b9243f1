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

use std::sync::Arc;
use odin_datum::{
    Cartesian3, Datum, DatumRegistry, Ellipsoid, HelmertParams, OdinDatumError, PIVOT_DATUM,
    init_registry, lookup_datum, registry
};
use odin_datum::config::{DatumConfig, EllipsoidSpec};
use odin_datum::ellipsoid::{BESSEL_1841, INTERNATIONAL_1924};

// run with "cargo test -p odin_datum --test test_datum -- --nocapture"

fn assert_near (a: &Cartesian3, b: &Cartesian3, eps: f64) {
    assert!( a.distance(b) < eps, "{a} != {b}");
}

#[test]
fn test_builtin_lookup () {
    let reg = DatumRegistry::new();
    println!("registered datums: {:?}", reg.names());

    let wgs84 = reg.lookup("WGS84").unwrap();
    assert!( wgs84.is_pivot());
    assert!( wgs84.shift.is_identity());
    assert_eq!( reg.pivot().unwrap().name, PIVOT_DATUM);

    let ed50 = reg.lookup("European 1950").unwrap();
    assert_eq!( ed50.a(), 6378388.0);
    assert!( (1.0/ed50.f() - 297.0).abs() < 1e-9);
    assert!( (ed50.b() - 6356911.946).abs() < 1e-3);
    assert!( !ed50.is_pivot());

    // aliases and case insensitive names resolve to the same instance
    assert!( Arc::ptr_eq( &ed50, &reg.lookup("ED50").unwrap()));
    assert!( Arc::ptr_eq( &ed50, &reg.lookup("european 1950").unwrap()));
    assert!( Arc::ptr_eq( &wgs84, &reg.lookup("WGS 84").unwrap()));

    for name in ["NAD27", "NAD83", "ETRS89", "OSGB36", "DHDN", "Tokyo", "CH1903", "AGD84"] {
        assert!( reg.contains(name), "missing {name}");
    }
}

#[test]
fn test_unknown_datum () {
    let reg = DatumRegistry::new();
    match reg.lookup("Atlantis 1900") {
        Err(OdinDatumError::UnknownDatum(name)) => assert_eq!( name, "Atlantis 1900"),
        other => panic!("unexpected lookup result {other:?}")
    }

    match reg.adapter("WGS84", "Atlantis 1900") {
        Err(OdinDatumError::UnsupportedDatum(name)) => assert_eq!( name, "Atlantis 1900"),
        other => panic!("unexpected adapter result {other:?}")
    }

    assert!( lookup_datum("Atlantis 1900").is_err());
}

#[test]
fn test_register () {
    let mut reg = DatumRegistry::new();
    let n = reg.len();

    let mgi = Datum::new( "MGI", BESSEL_1841, HelmertParams::translation( 577.326, 90.129, 463.919));
    reg.register( mgi.clone()).unwrap();
    reg.register_alias( "Hermannskogel", "MGI").unwrap();
    assert_eq!( reg.len(), n+1);
    assert_eq!( *reg.lookup("hermannskogel").unwrap(), mgi);

    assert!( matches!( reg.register( mgi.clone()), Err(OdinDatumError::DuplicateDatum(_))));
    assert!( matches!( reg.register( Datum::new( "mgi", BESSEL_1841, HelmertParams::IDENTITY)), Err(OdinDatumError::DuplicateDatum(_))));
    assert!( matches!( reg.register_alias( "ED50", "MGI"), Err(OdinDatumError::DuplicateDatum(_))));
    assert!( matches!( reg.register_alias( "foo", "bar"), Err(OdinDatumError::UnknownDatum(_))));
}

#[test]
fn test_translation_sign () {
    // the published ED50 -> WGS84 translation is (-87,-98,-121), i.e. datum frame + T = pivot frame
    let ed50 = lookup_datum("European 1950").unwrap();
    let p = Cartesian3::new( 4_000_000.0, 200_000.0, 4_900_000.0);

    let p_wgs84 = ed50.to_pivot( &p);
    assert_near( &p_wgs84, &Cartesian3::new( 4_000_000.0 - 87.0, 200_000.0 - 98.0, 4_900_000.0 - 121.0), 1e-9);

    let p_ed50 = ed50.from_pivot( &p);
    assert_near( &p_ed50, &Cartesian3::new( 4_000_000.0 + 87.0, 200_000.0 + 98.0, 4_900_000.0 + 121.0), 1e-9);
}

#[test]
fn test_rotation_sign () {
    // position vector convention: a positive rz rotates the x-axis towards +y
    let h = HelmertParams { rz: 1.0, ..HelmertParams::IDENTITY };
    let arc_second = std::f64::consts::PI / 648000.0;
    let a = 6378137.0;

    let p = h.to_pivot( &Cartesian3::new( a, 0.0, 0.0));
    println!("rz=1\" : {p}");
    assert!( (p.x - a).abs() < 1e-6);
    assert!( (p.y - a * arc_second).abs() < 1e-9);
    assert!( p.z.abs() < 1e-9);

    // positive rx rotates +y towards +z, positive ry rotates +z towards +x
    let h = HelmertParams { rx: 1.0, ry: 1.0, ..HelmertParams::IDENTITY };
    let p = h.to_pivot( &Cartesian3::new( 0.0, a, a));
    assert!( (p.z - (a + a * arc_second)).abs() < 1e-6);
    assert!( (p.x - a * arc_second).abs() < 1e-9);

    // positive scale correction increases distances
    let h = HelmertParams { ds: 1e-6, ..HelmertParams::IDENTITY };
    let p = h.to_pivot( &Cartesian3::new( a, 0.0, 0.0));
    assert!( (p.x - a * (1.0 + 1e-6)).abs() < 1e-6);
}

#[test]
fn test_exact_inverse () {
    let osgb36 = lookup_datum("OSGB36").unwrap();
    let dhdn = lookup_datum("DHDN").unwrap();

    let p = Cartesian3::new( 3_874_938.849, -116_218.624, 5_047_168.208);
    for datum in [&osgb36, &dhdn] {
        let p1 = datum.from_pivot( &datum.to_pivot( &p));
        assert_near( &p, &p1, 1e-6);

        // exact inverse agrees with the negated parameters to first order
        let neg = datum.shift.negated();
        let p_first_order = neg.to_pivot( &Cartesian3::new( p.x - datum.shift.dx, p.y - datum.shift.dy, p.z - datum.shift.dz));
        assert_near( &datum.from_pivot( &p), &p_first_order, 0.01);
    }
}

#[test]
fn test_config () {
    let input = r#"
        DatumConfig(
            datums: [
                DatumSpec(
                    name: "Pulkovo 1942",
                    aliases: ["S-42"],
                    ellipsoid: AInvF(6378245.0, 298.3),
                    shift: ( dx: 28.0, dy: -130.0, dz: -95.0 )
                ),
                DatumSpec(
                    name: "Local Bessel",
                    ellipsoid: Named("Bessel 1841")
                )
            ]
        )"#;

    let config: DatumConfig = ron::from_str( input).unwrap();
    let mut reg = DatumRegistry::new();
    reg.add_config( &config).unwrap();

    let s42 = reg.lookup("s-42").unwrap();
    assert_eq!( s42.name, "Pulkovo 1942");
    assert_eq!( s42.shift, HelmertParams::translation( 28.0, -130.0, -95.0));
    assert_eq!( s42.ellipsoid, Ellipsoid::from_a_inv_f( 6378245.0, 298.3));
    assert!( reg.lookup("Local Bessel").unwrap().shift.is_identity());

    // adding the same config twice fails
    assert!( reg.add_config( &config).is_err());

    assert!( matches!( EllipsoidSpec::Named("Everest".into()).to_ellipsoid(), Err(OdinDatumError::UnknownEllipsoid(_))));
    assert_eq!( EllipsoidSpec::AE2( 6378388.0, INTERNATIONAL_1924.e2).to_ellipsoid().unwrap(), INTERNATIONAL_1924);
}

#[test]
fn test_config_file () {
    let path = concat!( env!("CARGO_MANIFEST_DIR"), "/configs/datums.ron");
    let reg = DatumRegistry::from_config_file( path).unwrap();
    assert!( reg.contains("MGI"));
    assert!( reg.contains("S-42"));
    assert_eq!( reg.len(), DatumRegistry::new().len() + 2);

    assert!( matches!( DatumRegistry::from_config_file("no-such-file.ron"), Err(OdinDatumError::IOError(_))));
}

#[test]
fn test_frozen_registry () {
    // the first access freezes the built-in table, later installs are rejected
    let reg = registry();
    assert!( reg.contains( PIVOT_DATUM));
    assert!( matches!( init_registry( DatumRegistry::new()), Err(OdinDatumError::RegistryInitialized)));
}
