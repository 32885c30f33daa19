use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::EstimateError;

/// Fabrication job types. The set is closed; every ledger holds exactly one
/// record per variant.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Woodworking,
    Laser,
    Print3d,
}

/// Presentation metadata attached to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub material_label: &'static str,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Woodworking, Category::Laser, Category::Print3d];

    /// Canonical lowercase key, as accepted by `FromStr` and written to config.
    pub fn key(self) -> &'static str {
        match self {
            Category::Woodworking => "woodworking",
            Category::Laser => "laser",
            Category::Print3d => "print3d",
        }
    }

    pub fn profile(self) -> CategoryProfile {
        match self {
            Category::Woodworking => CategoryProfile {
                title: "Woodworking",
                description: "Cost estimate for woodworking jobs",
                material_label: "Wood and materials cost",
            },
            Category::Laser => CategoryProfile {
                title: "Laser work",
                description: "Cost estimate for laser-cutting jobs",
                material_label: "Cutting materials cost",
            },
            Category::Print3d => CategoryProfile {
                title: "3D printing",
                description: "Cost estimate for 3D printing jobs",
                material_label: "Filament/resin cost",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = EstimateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "woodworking" | "wood" | "falegnameria" => Ok(Category::Woodworking),
            "laser" | "lasercutting" => Ok(Category::Laser),
            "print3d" | "3dprint" | "3dprinting" | "3d" | "print" | "stampa3d" => {
                Ok(Category::Print3d)
            }
            _ => Err(EstimateError::InvalidCategory(input.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_aliases() {
        assert_eq!("woodworking".parse::<Category>().unwrap(), Category::Woodworking);
        assert_eq!("Falegnameria".parse::<Category>().unwrap(), Category::Woodworking);
        assert_eq!(" LASER ".parse::<Category>().unwrap(), Category::Laser);
        assert_eq!("3d-print".parse::<Category>().unwrap(), Category::Print3d);
        assert_eq!("stampa3d".parse::<Category>().unwrap(), Category::Print3d);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = "pottery".parse::<Category>().unwrap_err();
        assert!(matches!(err, EstimateError::InvalidCategory(ref key) if key == "pottery"));
    }

    #[test]
    fn display_matches_key() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.key());
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
    }
}
