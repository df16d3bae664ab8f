//! Drink model
//!
//! The static drink catalog and the per-session drink selections that refer to it.

use serde::{Deserialize, Serialize};

use crate::bac::units::ETHANOL_DENSITY_G_PER_ML;

/// A drink type with its typical serving
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrinkType {
    pub id: &'static str,
    pub volume_ml: f64,     // per serving
    pub abv_percent: f64,   // 0-100
}

impl DrinkType {
    /// Grams of ethanol in one serving
    pub fn alcohol_grams_per_serving(&self) -> f64 {
        self.volume_ml * (self.abv_percent / 100.0) * ETHANOL_DENSITY_G_PER_ML
    }

    /// Check whether an id refers to this drink (case-insensitive, trimmed)
    pub fn matches(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id.trim())
    }
}

/// The seeded drink table
static STANDARD_DRINKS: [DrinkType; 5] = [
    DrinkType { id: "Soju", volume_ml: 50.0, abv_percent: 16.9 },
    DrinkType { id: "Beer", volume_ml: 200.0, abv_percent: 5.0 },
    DrinkType { id: "Makgeolli", volume_ml: 150.0, abv_percent: 6.0 },
    DrinkType { id: "Wine", volume_ml: 120.0, abv_percent: 13.0 },
    DrinkType { id: "Whiskey", volume_ml: 30.0, abv_percent: 40.0 },
];

/// Read-only drink catalog
#[derive(Debug, Clone, Copy)]
pub struct DrinkCatalog<'a> {
    drinks: &'a [DrinkType],
}

impl DrinkCatalog<'static> {
    /// The standard five-drink catalog
    pub fn standard() -> Self {
        Self {
            drinks: &STANDARD_DRINKS,
        }
    }
}

impl Default for DrinkCatalog<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> DrinkCatalog<'a> {
    /// Wrap an existing drink table
    pub fn new(drinks: &'a [DrinkType]) -> Self {
        Self { drinks }
    }

    /// Find a drink by id
    pub fn lookup(&self, id: &str) -> Option<&'a DrinkType> {
        self.drinks.iter().find(|d| d.matches(id))
    }

    /// All drinks in catalog order
    pub fn all(&self) -> &'a [DrinkType] {
        self.drinks
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }
}

/// One line of a drinking session: which drink and how many servings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkSelection {
    pub drink_id: String,
    pub quantity: u32,
}

impl DrinkSelection {
    pub fn new(drink_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            drink_id: drink_id.into(),
            quantity,
        }
    }
}
