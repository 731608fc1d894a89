/// Property-based tests using proptest
/// Tests invariants and properties that should hold for all inputs
use proptest::prelude::*;
use root_insurance::models::{
    validate_beneficiary_split, Beneficiary, IdType, Identification, PersonDetails, ProductModule,
};
use serde_json::{json, Map, Value};

fn person() -> PersonDetails {
    PersonDetails::new(
        Identification::new(IdType::Id, "6801015800084", "ZA").unwrap(),
        "Test",
        "Person",
    )
}

// Property: identification construction should never panic
proptest! {
    #[test]
    fn identification_construction_never_panics(number in "\\PC*", country in "\\PC*") {
        let _ = Identification::new(IdType::Id, number.clone(), country.clone());
        let _ = Identification::new(IdType::Passport, number, country);
    }

    #[test]
    fn two_char_country_codes_accepted(country in "[A-Za-z]{2}") {
        let id = Identification::new(IdType::Id, "123", country.as_str());
        prop_assert!(id.is_ok());
        let id = id.unwrap();
        prop_assert_eq!(id.country(), country.as_str());
    }

    #[test]
    fn wrong_length_country_codes_rejected(country in "[A-Za-z]{3,8}|[A-Za-z]?") {
        prop_assume!(country.chars().count() != 2);
        prop_assert!(Identification::new(IdType::Passport, "A123", country).is_err());
    }
}

// Property: beneficiary percentages are bounded
proptest! {
    #[test]
    fn percentage_in_range_accepted(p in 0.0f64..=100.0) {
        let b = Beneficiary::new(person(), p);
        prop_assert!(b.is_ok());
        prop_assert_eq!(b.unwrap().percentage(), p);
    }

    #[test]
    fn percentage_out_of_range_rejected(p in prop_oneof![100.0f64..1e9, -1e9..0.0f64]) {
        prop_assume!(!(0.0..=100.0).contains(&p));
        prop_assert!(Beneficiary::new(person(), p).is_err());
    }
}

// Property: a split is accepted exactly when it sums to 100
proptest! {
    #[test]
    fn complementary_two_way_split_accepted(first in 0.0f64..=100.0) {
        let split = [
            Beneficiary::new(person(), first).unwrap(),
            Beneficiary::new(person(), 100.0 - first).unwrap(),
        ];
        prop_assert!(validate_beneficiary_split(&split).is_ok());
    }

    #[test]
    fn incomplete_split_rejected(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        prop_assume!((a + b - 100.0).abs() > 1e-3);
        let split = [
            Beneficiary::new(person(), a).unwrap(),
            Beneficiary::new(person(), b).unwrap(),
        ];
        prop_assert!(validate_beneficiary_split(&split).is_err());
    }

    #[test]
    fn even_splits_accepted(n in 1usize..=10) {
        let share = 100.0 / n as f64;
        let split: Vec<_> = (0..n)
            .map(|_| Beneficiary::new(person(), share).unwrap())
            .collect();
        prop_assert!(validate_beneficiary_split(&split).is_ok());
    }
}

// Property: quote validation reports exactly the absent required fields
proptest! {
    #[test]
    fn missing_fields_match_the_absent_subset(mask in proptest::collection::vec(any::<bool>(), 7)) {
        let required = ProductModule::Term.required_fields();
        let mut data = Map::new();
        for (field, include) in required.iter().zip(&mask) {
            if *include {
                data.insert(field.to_string(), json!(1));
            }
        }

        let missing = ProductModule::Term.missing_fields(&data);
        let expected: Vec<String> = required
            .iter()
            .zip(&mask)
            .filter(|(_, include)| !**include)
            .map(|(field, _)| field.to_string())
            .collect();
        prop_assert_eq!(missing, expected);
    }

    #[test]
    fn extra_fields_never_reported_missing(keys in proptest::collection::btree_set("x_[a-z]{1,8}", 0..5)) {
        let mut data = Map::new();
        data.insert("model_name".to_string(), json!("iPhone 6s 64GB LTE"));
        for key in &keys {
            data.insert(key.clone(), json!("extra"));
        }
        prop_assert!(ProductModule::Gadget.missing_fields(&data).is_empty());
    }
}

// Property: person payloads preserve every field that was set
proptest! {
    #[test]
    fn person_payload_preserves_extra_keys(
        keys in proptest::collection::btree_set("x_[a-z]{1,10}", 0..6),
        value in "[a-zA-Z0-9 ]{0,20}"
    ) {
        let mut p = person();
        for key in &keys {
            p = p.with_extra(key.clone(), Value::String(value.clone()));
        }
        let payload = p.details();
        for key in &keys {
            prop_assert_eq!(payload[key].as_str(), Some(value.as_str()));
        }
        // The required keys survive alongside the extras
        prop_assert_eq!(payload["first_name"].as_str(), Some("Test"));
        prop_assert_eq!(payload["id"]["country"].as_str(), Some("ZA"));
    }
}
