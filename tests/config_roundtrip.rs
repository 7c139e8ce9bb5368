use fieldzone::{FieldConfiguration, ZoneType};

#[test]
fn json_fixture_loads_and_validates() {
    let s = include_str!("data/field_config.json");
    let config = FieldConfiguration::from_json(s).unwrap();
    config.validate().unwrap();

    assert_eq!(config.name, "Decode Season Field");
    assert_eq!(config.points.len(), 2);
    // Omitted point color falls back to the default.
    assert_eq!(config.points[1].color, "#ff6b6b");
    assert_eq!(config.zones.len(), 4);
}

#[test]
fn fixture_zones_recompile_on_load() {
    let s = include_str!("data/field_config.json");
    let config = FieldConfiguration::from_json(s).unwrap();

    let parking = &config.zones[0];
    assert!(parking.is_valid());
    assert_eq!(parking.zone_type(), ZoneType::Parking);
    assert!(parking.contains_point(40.0, -30.0));
    assert!(!parking.contains_point(40.0, 30.0));

    let launch = &config.zones[1];
    assert!(launch.contains_point(-20.0, 0.0));
    assert!(!launch.contains_point(20.0, 0.0));

    let alliance = &config.zones[2];
    assert_eq!(alliance.zone_type(), ZoneType::RedAlliance);
    assert_eq!(alliance.effective_color(), "#ff4d4d");
    assert!(alliance.contains_point(10.0, -10.0));
    assert!(alliance.contains_point(-10.0, 10.0));
    assert!(!alliance.contains_point(10.0, 10.0));
}

#[test]
fn unparsable_zone_in_document_loads_as_invalid() {
    let s = include_str!("data/field_config.json");
    let config = FieldConfiguration::from_json(s).unwrap();

    let legacy = &config.zones[3];
    assert!(!legacy.is_valid());
    assert!(legacy.invalid_reason().unwrap().contains('r'));
    assert!(!legacy.contains_point(0.0, 0.0));
}

#[test]
fn round_trip_is_stable() {
    let s = include_str!("data/field_config.json");
    let config = FieldConfiguration::from_json(s).unwrap();
    let emitted = config.to_json().unwrap();
    let back = FieldConfiguration::from_json(&emitted).unwrap();
    assert_eq!(back, config);
}
