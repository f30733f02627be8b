use atlas_history::models::{clamp_coordinate, select_option_index};
use atlas_history::{GalaxyCoordinates, MAX_COORDINATE};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Tests for coordinate input handling

#[test]
fn test_clamp_coordinate() {
    assert_eq!(clamp_coordinate("12345", MAX_COORDINATE), 12345);
    assert_eq!(clamp_coordinate("  42abc", MAX_COORDINATE), 42);
    assert_eq!(clamp_coordinate("+7", MAX_COORDINATE), 7);
    assert_eq!(clamp_coordinate("-5", MAX_COORDINATE), 0);
    assert_eq!(clamp_coordinate("abc", MAX_COORDINATE), 0);
    assert_eq!(clamp_coordinate("", MAX_COORDINATE), 0);
    assert_eq!(clamp_coordinate("10000001", MAX_COORDINATE), MAX_COORDINATE);
    assert_eq!(clamp_coordinate("99999999999999999999999", MAX_COORDINATE), MAX_COORDINATE);
    assert_eq!(clamp_coordinate("10000000", MAX_COORDINATE), MAX_COORDINATE);
}

#[test]
fn test_random_coordinates_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let coords = GalaxyCoordinates::random(&mut rng, 1000);
        assert!(coords.x <= 1000 && coords.y <= 1000 && coords.z <= 1000, "{:?} out of range", coords);
    }
}

#[test]
fn test_random_coordinates_can_reach_the_maximum() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut reached_max = false;
    for _ in 0..2000 {
        let coords = GalaxyCoordinates::random(&mut rng, 1);
        assert!(coords.x <= 1 && coords.y <= 1 && coords.z <= 1, "{:?} out of range", coords);
        reached_max |= coords.x == 1 || coords.y == 1 || coords.z == 1;
    }
    assert!(reached_max, "The maximum coordinate should be reachable");
}

#[test]
fn test_random_coordinates_with_zero_max() {
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(GalaxyCoordinates::random(&mut rng, 0), GalaxyCoordinates::new(0, 0, 0));
}

#[test]
fn test_coordinate_keys() {
    let coords = GalaxyCoordinates::new(5, 12, 3);
    assert_eq!(coords.key(), "5,12,3");
    assert_eq!(GalaxyCoordinates::parse_key("5,12,3"), Some(coords));
    assert_eq!(GalaxyCoordinates::parse_key("5, 12, 3"), Some(coords));
    assert_eq!(GalaxyCoordinates::parse_key("5,12"), None);
    assert_eq!(GalaxyCoordinates::parse_key("5,12,3,4"), None);
    assert_eq!(GalaxyCoordinates::parse_key("a,b,c"), None);
}

#[test]
fn test_select_option_index() {
    let options = [0, 1_000_000, 2_000_000, 5_000_000, 9_500_000];

    assert_eq!(select_option_index(&options, 0, MAX_COORDINATE), Some(0));
    assert_eq!(select_option_index(&options, 999_999, MAX_COORDINATE), Some(0));
    assert_eq!(select_option_index(&options, 1_000_000, MAX_COORDINATE), Some(1));
    assert_eq!(select_option_index(&options, 4_999_999, MAX_COORDINATE), Some(2));
    assert_eq!(select_option_index(&options, 5_000_000, MAX_COORDINATE), Some(3));
    // Ranges are checked in order, so 9,000,000 stays in the range containing it
    assert_eq!(select_option_index(&options, 9_000_000, MAX_COORDINATE), Some(3));
    assert_eq!(select_option_index(&options, 9_600_000, MAX_COORDINATE), Some(4));
    assert_eq!(select_option_index(&options, MAX_COORDINATE, MAX_COORDINATE), Some(4));
}

#[test]
fn test_select_option_index_gaps_and_empty() {
    // First named range starts above zero, but low values still map to it
    let options = [2_000_000, 3_000_000];
    assert_eq!(select_option_index(&options, 500_000, MAX_COORDINATE), Some(0));
    assert_eq!(select_option_index(&options, 1_500_000, MAX_COORDINATE), None);
    assert_eq!(select_option_index(&options, 9_100_000, MAX_COORDINATE), Some(1));

    assert_eq!(select_option_index(&[], 5, MAX_COORDINATE), None);
}
