//! Property tests for the conversion engine: identity and round-trip
//! behavior across every category and unit pair.

use convertidor_back::engine::{convert, ROUND_DECIMALS};
use convertidor_back::units::Category;
use proptest::prelude::*;

/// Half of one rounding step, the worst-case error a single rounding adds.
fn half_step() -> f64 {
    0.5 * 10f64.powi(-ROUND_DECIMALS)
}

const LINEAR_CATEGORIES: [Category; 3] = [Category::Time, Category::Weight, Category::Currency];

proptest! {
    #[test]
    fn prop_identity_linear(v in -1e9f64..1e9f64) {
        for category in LINEAR_CATEGORIES {
            for unit in category.units() {
                let out = convert(category, v, unit.key, unit.key).unwrap();
                prop_assert_eq!(out.result, v);
            }
        }
    }

    #[test]
    fn prop_identity_temperature(v in 0f64..1e6f64) {
        // Non-negative values are valid on every temperature scale.
        for unit in Category::Temperature.units() {
            let out = convert(Category::Temperature, v, unit.key, unit.key).unwrap();
            prop_assert_eq!(out.result, v);
        }
    }

    #[test]
    fn prop_round_trip_linear(v in -1e6f64..1e6f64) {
        for category in LINEAR_CATEGORIES {
            let units = category.units();
            for a in units {
                for b in units {
                    if a.key == b.key {
                        continue;
                    }
                    let there = convert(category, v, a.key, b.key).unwrap();
                    let back = convert(category, there.result, b.key, a.key).unwrap();
                    // The outbound rounding error is at most half a step in
                    // b units, amplified on the way back by the size of one
                    // b in a units, plus the final rounding.
                    let b_in_a = convert(category, 1.0, b.key, a.key).unwrap().result;
                    let tol = half_step() * (b_in_a.abs() + 1.0) * 1.05 + half_step();
                    prop_assert!(
                        (back.result - v).abs() <= tol,
                        "{} {}->{}->{}: v={} back={} tol={}",
                        category, a.key, b.key, a.key, v, back.result, tol
                    );
                }
            }
        }
    }

    #[test]
    fn prop_round_trip_temperature(v in 0f64..1e4f64) {
        let units = Category::Temperature.units();
        for a in units {
            for b in units {
                if a.key == b.key {
                    continue;
                }
                let there = convert(Category::Temperature, v, a.key, b.key).unwrap();
                let back = convert(Category::Temperature, there.result, b.key, a.key).unwrap();
                // Affine scale slopes are at most 9/5, so two roundings stay
                // well inside this tolerance.
                prop_assert!((back.result - v).abs() <= 1e-3);
            }
        }
    }

    #[test]
    fn prop_currency_through_base_and_back(v in 1f64..1e6f64) {
        // cop -> usd -> cop returns home within the amplified tolerance.
        let to_usd = convert(Category::Currency, v, "cop", "usd").unwrap();
        let home = convert(Category::Currency, to_usd.result, "usd", "cop").unwrap();
        let usd_in_cop = convert(Category::Currency, 1.0, "usd", "cop").unwrap().result;
        let tol = half_step() * (usd_in_cop + 1.0) * 1.05 + half_step();
        prop_assert!((home.result - v).abs() <= tol);
    }

    #[test]
    fn prop_linear_conversion_is_monotone(v in -1e6f64..1e6f64, delta in 1f64..1e3f64) {
        // A strictly larger input never converts to a smaller output.
        for category in LINEAR_CATEGORIES {
            let units = category.units();
            for a in units {
                for b in units {
                    let lo = convert(category, v, a.key, b.key).unwrap();
                    let hi = convert(category, v + delta, a.key, b.key).unwrap();
                    prop_assert!(hi.result >= lo.result);
                }
            }
        }
    }
}
