use serial_test::serial;
use wards::config::{load_from_env, ConfigError, WardsConfig, WARD_UNITS_ENV};
use wards::WardPool;

#[test]
#[serial]
fn unset_env_falls_back_to_single_unit_of_ten() {
    std::env::remove_var(WARD_UNITS_ENV);
    let cfg = load_from_env().unwrap();
    assert_eq!(cfg, WardsConfig { units: vec![10] });
}

#[test]
#[serial]
fn blank_env_is_treated_as_unset() {
    std::env::set_var(WARD_UNITS_ENV, "   ");
    let cfg = load_from_env().unwrap();
    assert_eq!(cfg, WardsConfig::default());
    std::env::remove_var(WARD_UNITS_ENV);
}

#[test]
#[serial]
fn compact_env_builds_multi_unit_pool() {
    std::env::set_var(WARD_UNITS_ENV, "3,2");
    let cfg = load_from_env().unwrap();
    let pool = WardPool::from_config(&cfg);
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.free_count(), 5);
    std::env::remove_var(WARD_UNITS_ENV);
}

#[test]
#[serial]
fn malformed_json_env_is_an_error() {
    std::env::set_var(WARD_UNITS_ENV, "[3, oops]");
    let err = load_from_env().unwrap_err();
    assert!(matches!(err, ConfigError::MalformedJson { .. }));
    std::env::remove_var(WARD_UNITS_ENV);
}

#[test]
#[serial]
fn env_units_overflowing_the_pool_total_are_rejected() {
    std::env::set_var(WARD_UNITS_ENV, "4294967295,1");
    let err = load_from_env().unwrap_err();
    assert_eq!(err, ConfigError::TotalOverflow { max: u32::MAX });
    std::env::remove_var(WARD_UNITS_ENV);
}
