use hexmap::{GridConfig, GridGeometry, HexGrid};
use validator::ValidationErrors;

/// Build a geometry from the config and collect the names of the fields that
/// failed validation
fn invalid_fields(config: GridConfig) -> Vec<&'static str> {
    let err = GridGeometry::new(&config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    error_fields
}

#[test]
fn test_grid_config_validation() {
    let config = GridConfig {
        outer_radius: 0.0, // invalid (degenerate cells)
        cells_wide: 0,     // invalid
        cells_high: 1,     // valid
    };
    assert_eq!(
        invalid_fields(config),
        vec!["cells_wide", "outer_radius"],
        "incorrect validation errors for {:?}",
        config
    );

    let config = GridConfig {
        outer_radius: -3.0, // invalid
        cells_wide: 10,     // valid
        cells_high: 0,      // invalid
    };
    assert_eq!(invalid_fields(config), vec!["cells_high", "outer_radius"]);

    let config = GridConfig {
        outer_radius: f64::NAN, // invalid
        ..Default::default()
    };
    assert_eq!(invalid_fields(config), vec!["outer_radius"]);
}

#[test]
fn test_grid_rejects_invalid_config() {
    let config = GridConfig {
        cells_high: 0,
        ..Default::default()
    };
    let err = HexGrid::new(&config, |_| ()).unwrap_err();
    assert!(err.downcast_ref::<ValidationErrors>().is_some());
}

#[cfg(feature = "json")]
#[test]
fn test_config_json() {
    let config =
        GridConfig::from_json(r#"{"outer_radius": 2.5, "cells_wide": 7}"#)
            .unwrap();
    assert_eq!(
        config,
        GridConfig {
            outer_radius: 2.5,
            cells_wide: 7,
            cells_high: 2,
        }
    );
    assert_eq!(GridConfig::from_json(&config.to_json().unwrap()).unwrap(), config);

    assert!(GridConfig::from_json(r#"{"cells_wide": -1}"#).is_err());
}
