use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use validator::{Validate, ValidationError};

/// Configuration that defines the layout of a hex grid. Every derived
/// dimension of the grid (see [GridGeometry](crate::GridGeometry)) is a pure
/// function of these three fields, so two grids built from the same config
/// will always line up exactly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Distance from the centre of a cell to any of its 6 vertices. This is
    /// also the length of one side of a cell. Must be finite and greater than
    /// zero.
    #[validate(custom = "validate_outer_radius")]
    pub outer_radius: f64,

    /// Number of cells in each row of the grid.
    #[validate(range(min = 1))]
    pub cells_wide: u16,

    /// Number of rows in the grid. Every odd row is shifted right by half a
    /// cell, so any grid with more than one row is half a cell wider than
    /// `cells_wide` cells.
    #[validate(range(min = 1))]
    pub cells_high: u16,
}

impl GridConfig {
    /// Deserialize a config from JSON. Missing fields are populated with
    /// their defaults, but the result is **not** validated here. Validation
    /// happens once the config is used to build a geometry.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        serde_json::from_str(json).context("error deserializing grid config")
    }

    /// Serialize this config into JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> anyhow::Result<String> {
        use anyhow::Context;
        serde_json::to_string(self).context("error serializing grid config")
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            outer_radius: 1.0,
            cells_wide: 2,
            cells_high: 2,
        }
    }
}

/// Only finite, positive radii produce usable cells
fn validate_outer_radius(
    outer_radius: impl Borrow<f64>,
) -> Result<(), ValidationError> {
    let outer_radius = *outer_radius.borrow();
    if outer_radius.is_finite() && outer_radius > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("outer_radius_not_positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_default_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_outer_radius_validation() {
        for radius in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = GridConfig {
                outer_radius: *radius,
                ..Default::default()
            };
            let errors = config.validate().unwrap_err();
            assert!(
                errors.errors().contains_key("outer_radius"),
                "expected radius {} to be rejected, got {:#?}",
                radius,
                errors
            );
        }

        let config = GridConfig {
            outer_radius: 0.001,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde() {
        let config = GridConfig {
            outer_radius: 1.5,
            cells_wide: 4,
            cells_high: 3,
        };
        assert_tokens(
            &config,
            &[
                Token::Struct {
                    name: "GridConfig",
                    len: 3,
                },
                Token::Str("outer_radius"),
                Token::F64(1.5),
                Token::Str("cells_wide"),
                Token::U16(4),
                Token::Str("cells_high"),
                Token::U16(3),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_missing_fields() {
        // Anything left out falls back to the default
        assert_de_tokens(
            &GridConfig {
                outer_radius: 2.0,
                ..Default::default()
            },
            &[
                Token::Struct {
                    name: "GridConfig",
                    len: 1,
                },
                Token::Str("outer_radius"),
                Token::F64(2.0),
                Token::StructEnd,
            ],
        );
    }
}
