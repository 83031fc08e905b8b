#[cfg(test)]
mod tests {
    use crate::engine::ConvertError;
    use crate::units::Category;

    #[test]
    fn test_category_parse_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.key().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "distance".parse::<Category>().unwrap_err();
        assert!(matches!(err, ConvertError::UnknownCategory(_)));
        assert!(err.to_string().contains("distance"));
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        assert!("Time".parse::<Category>().is_err());
    }

    #[test]
    fn test_unit_lookup() {
        let unit = Category::Time.unit("hours").unwrap();
        assert_eq!(unit.label, "Horas");
        assert!(Category::Time.unit("kg").is_none());
    }

    #[test]
    fn test_unit_keys_unique_within_category() {
        for category in Category::ALL {
            let units = category.units();
            for (i, a) in units.iter().enumerate() {
                for b in &units[i + 1..] {
                    assert_ne!(a.key, b.key, "duplicate key in {}", category);
                }
            }
        }
    }

    #[test]
    fn test_catalog_order_matches_frontend_tabs() {
        // The frontend preselects the first two units of each category.
        assert_eq!(Category::Time.units()[0].key, "hours");
        assert_eq!(Category::Time.units()[1].key, "days");
        assert_eq!(Category::Weight.units()[0].key, "kg");
        assert_eq!(Category::Currency.units()[0].key, "usd");
    }

    #[test]
    fn test_category_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&Category::Temperature).unwrap();
        assert_eq!(json, "\"temperature\"");
        let back: Category = serde_json::from_str("\"currency\"").unwrap();
        assert_eq!(back, Category::Currency);
    }
}
