use eldlogger::models::gps::{
    AddressResolver, INVALID_GPS_FORMAT, NO_GPS_DATA, ResolvedLocation, interpret_location,
    resolve_display,
};

#[test]
fn coordinates_parse_from_lat_lng_strings() {
    match interpret_location(Some("41.8781, -87.6298")) {
        ResolvedLocation::Coordinates { lat, lon } => {
            assert_eq!(lat, 41.8781);
            assert_eq!(lon, -87.6298);
        }
        other => panic!("expected coordinates, got {other:?}"),
    }
}

#[test]
fn free_text_addresses_pass_through() {
    match interpret_location(Some("4000 W Roosevelt Rd, Chicago")) {
        ResolvedLocation::Address(a) => assert_eq!(a, "4000 W Roosevelt Rd, Chicago"),
        other => panic!("expected address, got {other:?}"),
    }
}

#[test]
fn missing_fields_become_the_no_data_placeholder() {
    assert_eq!(interpret_location(None), ResolvedLocation::NoData);
    assert_eq!(interpret_location(Some("   ")), ResolvedLocation::NoData);
    assert_eq!(interpret_location(None).display(), NO_GPS_DATA);
}

#[test]
fn numeric_garbage_is_flagged_as_invalid() {
    assert_eq!(
        interpret_location(Some("12345")),
        ResolvedLocation::InvalidFormat
    );
    assert_eq!(
        interpret_location(Some("12345")).display(),
        INVALID_GPS_FORMAT
    );
}

#[test]
fn coordinate_display_keeps_four_decimals() {
    let loc = interpret_location(Some("41.8781,-87.6298"));
    assert_eq!(loc.display(), "41.8781, -87.6298");
}

struct FixedResolver;

impl AddressResolver for FixedResolver {
    fn resolve(&self, location: &ResolvedLocation) -> Option<String> {
        match location {
            ResolvedLocation::Coordinates { .. } => Some("Resolved Street".to_string()),
            _ => None,
        }
    }
}

#[test]
fn resolver_answers_override_coordinate_display() {
    assert_eq!(
        resolve_display(Some("41.8781,-87.6298"), &FixedResolver),
        "Resolved Street"
    );
    // The resolver declines addresses, so the raw text survives.
    assert_eq!(
        resolve_display(Some("Chicago, IL"), &FixedResolver),
        "Chicago, IL"
    );
}
