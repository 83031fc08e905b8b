//! Conversion engine.
//!
//! Pure, synchronous and stateless: every call validates its input, applies
//! either a base-unit ratio (time, weight, currency) or a temperature
//! formula, rounds the result and renders a description sentence such as
//! `"10 Horas equivale a 0.42 Días"`.
//!
//! Ratio-based categories normalize through a canonical base unit: hours for
//! time, grams for weight, US dollars for currency. Currency rates are fixed
//! simulated constants, not live market data, and every currency description
//! carries a "(tasa simulada)" marker.

pub mod error;

use serde::{Deserialize, Serialize};

use crate::units::{Category, UnitDef};

pub use error::ConvertError;

/// Results are rounded to this many decimal places, half away from zero.
/// Identity conversions skip rounding and return the input bit-exact.
pub const ROUND_DECIMALS: i32 = 4;

/// Simulated exchange rate: Colombian pesos per US dollar.
pub const COP_PER_USD: f64 = 4000.0;
/// Simulated exchange rate: euros per US dollar.
pub const EUR_PER_USD: f64 = 0.92;

/// Hours per day.
const HOURS_PER_DAY: f64 = 24.0;
/// Hours per month, using the 30-day month approximation.
const HOURS_PER_MONTH: f64 = 720.0;
/// Hours per year (365 days).
const HOURS_PER_YEAR: f64 = 8760.0;

/// Grams per kilogram.
const GRAMS_PER_KG: f64 = 1000.0;
/// Grams per international avoirdupois pound.
const GRAMS_PER_LB: f64 = 453.59237;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Converted value, rounded to [`ROUND_DECIMALS`] decimals.
    pub result: f64,
    /// Human-readable sentence describing the conversion.
    pub conversion: String,
}

/// How a category converts: a ratio table through a base unit, or the
/// temperature formulas. Keeping this a closed enum makes the dispatch
/// exhaustive at compile time.
enum CategorySpec {
    /// `(unit key, base units per 1 unit)` pairs. Base unit has ratio 1.0.
    Linear(&'static [(&'static str, f64)]),
    /// Per-pair temperature formulas, pivoting through Celsius.
    Thermometric,
}

/// Hours per unit of time.
const TIME_RATIOS: &[(&str, f64)] = &[
    ("hours", 1.0),
    ("days", HOURS_PER_DAY),
    ("months", HOURS_PER_MONTH),
    ("years", HOURS_PER_YEAR),
];

/// Grams per unit of weight.
const WEIGHT_RATIOS: &[(&str, f64)] = &[
    ("g", 1.0),
    ("kg", GRAMS_PER_KG),
    ("lb", GRAMS_PER_LB),
];

/// US dollars per unit of currency. Simulated fixed rates.
const CURRENCY_RATIOS: &[(&str, f64)] = &[
    ("usd", 1.0),
    ("cop", 1.0 / COP_PER_USD),
    ("eur", 1.0 / EUR_PER_USD),
];

fn category_spec(category: Category) -> CategorySpec {
    match category {
        Category::Time => CategorySpec::Linear(TIME_RATIOS),
        Category::Weight => CategorySpec::Linear(WEIGHT_RATIOS),
        Category::Temperature => CategorySpec::Thermometric,
        Category::Currency => CategorySpec::Linear(CURRENCY_RATIOS),
    }
}

/// Convert `value` from `from` to `to` within `category`.
///
/// Fails with a validation error when either unit is not a member of the
/// category, when `value` is not finite or when the conversion overflows
/// the representable range, and with a domain error when a temperature lies
/// below absolute zero on its scale.
///
/// A unit converted to itself is the identity: the result is `value`
/// unchanged, with a description stating the equivalence.
pub fn convert(
    category: Category,
    value: f64,
    from: &str,
    to: &str,
) -> Result<Conversion, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::NonFiniteValue(value));
    }
    let from_unit = lookup_unit(category, from)?;
    let to_unit = lookup_unit(category, to)?;

    let result = match category_spec(category) {
        CategorySpec::Linear(ratios) => {
            // value_in_base = value * ratio[from]; result = base / ratio[to]
            let from_ratio = linear_ratio(category, ratios, from)?;
            let to_ratio = linear_ratio(category, ratios, to)?;
            if from == to {
                value
            } else {
                round_result(value * from_ratio / to_ratio)
            }
        }
        CategorySpec::Thermometric => {
            let from_scale = temp_scale(category, from)?;
            let to_scale = temp_scale(category, to)?;
            from_scale.check_above_absolute_zero(value, from_unit)?;
            if from == to {
                value
            } else {
                round_result(to_scale.from_celsius(from_scale.to_celsius(value)))
            }
        }
    };

    // A finite input can still overflow when multiplied up to the base
    // unit; an infinite result would serialize as JSON null.
    if !result.is_finite() {
        return Err(ConvertError::ResultOutOfRange(value));
    }

    Ok(Conversion {
        result,
        conversion: describe(category, value, from_unit, result, to_unit),
    })
}

fn lookup_unit(category: Category, key: &str) -> Result<&'static UnitDef, ConvertError> {
    category.unit(key).ok_or_else(|| ConvertError::UnknownUnit {
        category,
        unit: key.to_string(),
    })
}

fn linear_ratio(
    category: Category,
    ratios: &[(&str, f64)],
    key: &str,
) -> Result<f64, ConvertError> {
    ratios
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, r)| *r)
        .ok_or_else(|| ConvertError::UnknownUnit {
            category,
            unit: key.to_string(),
        })
}

fn temp_scale(category: Category, key: &str) -> Result<TempScale, ConvertError> {
    TempScale::from_key(key).ok_or_else(|| ConvertError::UnknownUnit {
        category,
        unit: key.to_string(),
    })
}

/// Temperature scales and their pairwise formulas, pivoting through Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TempScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempScale {
    fn from_key(key: &str) -> Option<TempScale> {
        match key {
            "celsius" => Some(TempScale::Celsius),
            "fahrenheit" => Some(TempScale::Fahrenheit),
            "kelvin" => Some(TempScale::Kelvin),
            _ => None,
        }
    }

    /// Absolute zero expressed on this scale.
    fn absolute_zero(self) -> f64 {
        match self {
            TempScale::Celsius => -273.15,
            TempScale::Fahrenheit => -459.67,
            TempScale::Kelvin => 0.0,
        }
    }

    fn to_celsius(self, v: f64) -> f64 {
        match self {
            TempScale::Celsius => v,
            TempScale::Fahrenheit => (v - 32.0) * 5.0 / 9.0,
            TempScale::Kelvin => v - 273.15,
        }
    }

    fn from_celsius(self, c: f64) -> f64 {
        match self {
            TempScale::Celsius => c,
            TempScale::Fahrenheit => c * 9.0 / 5.0 + 32.0,
            TempScale::Kelvin => c + 273.15,
        }
    }

    fn check_above_absolute_zero(
        self,
        value: f64,
        unit: &UnitDef,
    ) -> Result<(), ConvertError> {
        let limit = self.absolute_zero();
        if value < limit {
            return Err(ConvertError::BelowAbsoluteZero {
                unit: unit.label.to_string(),
                value,
                limit,
            });
        }
        Ok(())
    }
}

/// Round half away from zero to [`ROUND_DECIMALS`] decimal places.
fn round_result(v: f64) -> f64 {
    let factor = 10f64.powi(ROUND_DECIMALS);
    (v * factor).round() / factor
}

/// Quantities at or above this magnitude render in scientific notation
/// instead of expanding into hundreds of digits.
const SCIENTIFIC_NOTATION_THRESHOLD: f64 = 1e15;

/// Format a quantity for the description: two decimals, trailing ".00"
/// trimmed so whole numbers read naturally ("10", not "10.00"). Huge
/// magnitudes switch to scientific notation.
fn format_quantity(v: f64) -> String {
    if v.abs() >= SCIENTIFIC_NOTATION_THRESHOLD {
        return format!("{:.2e}", v);
    }
    let s = format!("{:.2}", v);
    if s == "-0.00" {
        return "0".to_string();
    }
    match s.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

fn describe(
    category: Category,
    value: f64,
    from: &UnitDef,
    result: f64,
    to: &UnitDef,
) -> String {
    let mut text = format!(
        "{} {} equivale a {} {}",
        format_quantity(value),
        from.label,
        format_quantity(result),
        to.label,
    );
    if category == Category::Currency {
        // Rates are fixed constants, not live market data.
        text.push_str(" (tasa simulada)");
    }
    text
}
