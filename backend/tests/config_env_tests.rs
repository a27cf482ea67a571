//! Configuration loading through the `DASHBOARD_CONFIG` environment variable.

mod support;

use coop_dashboard::config::{DashboardConfig, RepresentativeMode, CONFIG_PATH_ENV};
use coop_dashboard::error::DashboardError;
use support::with_scoped_env;

#[test]
fn test_load_from_env_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.toml");
    std::fs::write(
        &path,
        "[overview]\nrepresentative = \"average\"\n\n[thresholds.alerts]\nammonia_critical_ppm = 9.5\n",
    )
    .unwrap();

    let config = with_scoped_env(&[(CONFIG_PATH_ENV, path.to_str())], DashboardConfig::load).unwrap();

    assert_eq!(config.overview.representative, RepresentativeMode::Average);
    assert_eq!(config.thresholds.alerts.ammonia_critical_ppm, 9.5);
    assert_eq!(config.server.port, 8080);
}

#[test]
fn test_missing_env_path_is_an_error() {
    let result = with_scoped_env(
        &[(CONFIG_PATH_ENV, Some("/no/such/dashboard.toml"))],
        DashboardConfig::load,
    );
    assert!(matches!(result, Err(DashboardError::Configuration(_))));
}

#[test]
fn test_invalid_thresholds_in_env_file_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.toml");
    std::fs::write(
        &path,
        "[thresholds.health]\nammonia_warning_ppm = 20.0\nammonia_critical_ppm = 10.0\n",
    )
    .unwrap();

    let result = with_scoped_env(&[(CONFIG_PATH_ENV, path.to_str())], DashboardConfig::load);
    assert!(result.is_err());
}
