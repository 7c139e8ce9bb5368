use fieldzone::{FieldBounds, Zone, approximate_polygon, parse};

#[test]
fn rectangular_strip_membership() {
    let zone = Zone::new("strip", "x >= 0 && x <= 50 && y > 20");
    assert!(zone.contains_point(25.0, 25.0));
    assert!(!zone.contains_point(60.0, 25.0));
    assert!(!zone.contains_point(25.0, 10.0));
}

#[test]
fn disc_membership_boundary_inclusive() {
    let zone = Zone::new("disc", "x*x + y*y <= 900");
    assert!(zone.contains_point(0.0, 0.0));
    assert!(zone.contains_point(30.0, 0.0)); // exactly on the boundary
    assert!(!zone.contains_point(31.0, 0.0));
}

#[test]
fn band_or_top_membership() {
    let zone = Zone::new("band", "(x > -30 && x < 30) || y > 40");
    assert!(zone.contains_point(0.0, 0.0));
    assert!(!zone.contains_point(50.0, 0.0));
    assert!(zone.contains_point(50.0, 50.0));
}

#[test]
fn empty_equation_is_a_parse_error() {
    assert!(parse("").is_err());
}

#[test]
fn chained_comparison_is_a_parse_error() {
    assert!(parse("x > y > 0").is_err());
}

#[test]
fn sampling_the_strip_yields_member_vertices() {
    // Subscriber so the sampler's instrumentation is exercised; tests share
    // one process, so a second init attempt is a no-op.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let zone = Zone::new("strip", "x >= 0 && x <= 50 && y > 20");
    let polygon = approximate_polygon(&zone, FieldBounds::new(-72.0, 72.0).unwrap(), 6.0);
    assert!(!polygon.is_empty());
    for v in &polygon {
        assert!(
            zone.contains_point(v.x, v.y),
            "polygon vertex {v:?} does not satisfy the equation"
        );
    }
}

#[test]
fn well_formed_equations_never_panic_across_the_field() {
    let equations = [
        "x > 0",
        "x*x + y*y <= 900",
        "x / (y - y) > 0",
        "(x > -30 && x < 30) || y > 40",
        "-x - -y != 0",
        "x / (x - 1) < y",
    ];
    for eq in equations {
        let zone = Zone::new("sweep", eq);
        assert!(zone.is_valid(), "{eq:?} should parse");
        let mut x = -72.0;
        while x <= 72.0 {
            let mut y = -72.0;
            while y <= 72.0 {
                // Plain bool out, whatever happens inside.
                let _ = zone.contains_point(x, y);
                y += 9.0;
            }
            x += 9.0;
        }
    }
}

#[test]
fn division_by_zero_zone_is_everywhere_false() {
    let zone = Zone::new("poisoned", "x / (y - y) > 0");
    let mut x = -72.0;
    while x <= 72.0 {
        let mut y = -72.0;
        while y <= 72.0 {
            assert!(!zone.contains_point(x, y));
            y += 6.0;
        }
        x += 6.0;
    }
}

#[test]
fn malformed_equations_yield_invalid_zones() {
    for eq in ["", "(x > 0", "z > 0", "x > > 0", "x + y", "x && y"] {
        let zone = Zone::new("bad", eq);
        assert!(!zone.is_valid(), "{eq:?} should not parse");
        assert!(zone.invalid_reason().is_some());
        assert!(!zone.contains_point(0.0, 0.0));
    }
}
