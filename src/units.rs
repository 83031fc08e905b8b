//! Static unit catalog: categories, unit keys and display labels.
//!
//! The catalog is immutable configuration baked into the binary. Unit order
//! within a category matters for clients (the frontend preselects the first
//! two units of the active category) but is irrelevant for computation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::error::ConvertError;

/// A conversion category. Units are only comparable within one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Time,
    Weight,
    Temperature,
    Currency,
}

/// A unit definition: its wire key and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDef {
    /// Key used on the wire and in URLs, unique within the category.
    pub key: &'static str,
    /// Human-readable label shown in descriptions and selectors.
    pub label: &'static str,
}

const TIME_UNITS: &[UnitDef] = &[
    UnitDef { key: "hours", label: "Horas" },
    UnitDef { key: "days", label: "Días" },
    UnitDef { key: "months", label: "Meses" },
    UnitDef { key: "years", label: "Años" },
];

const WEIGHT_UNITS: &[UnitDef] = &[
    UnitDef { key: "kg", label: "Kilogramos" },
    UnitDef { key: "g", label: "Gramos" },
    UnitDef { key: "lb", label: "Libras" },
];

const TEMPERATURE_UNITS: &[UnitDef] = &[
    UnitDef { key: "celsius", label: "Celsius (°C)" },
    UnitDef { key: "fahrenheit", label: "Fahrenheit (°F)" },
    UnitDef { key: "kelvin", label: "Kelvin (K)" },
];

const CURRENCY_UNITS: &[UnitDef] = &[
    UnitDef { key: "usd", label: "Dólar USD" },
    UnitDef { key: "cop", label: "Peso COP" },
    UnitDef { key: "eur", label: "Euro EUR" },
];

impl Category {
    /// All categories, in the order the frontend renders its tabs.
    pub const ALL: [Category; 4] = [
        Category::Time,
        Category::Weight,
        Category::Temperature,
        Category::Currency,
    ];

    /// Wire key for this category (lowercase, matches URL path segments).
    pub fn key(&self) -> &'static str {
        match self {
            Category::Time => "time",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Currency => "currency",
        }
    }

    /// Units belonging to this category, in catalog order.
    pub fn units(&self) -> &'static [UnitDef] {
        match self {
            Category::Time => TIME_UNITS,
            Category::Weight => WEIGHT_UNITS,
            Category::Temperature => TEMPERATURE_UNITS,
            Category::Currency => CURRENCY_UNITS,
        }
    }

    /// Look up a unit of this category by its wire key.
    pub fn unit(&self, key: &str) -> Option<&'static UnitDef> {
        self.units().iter().find(|u| u.key == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod units_tests;
