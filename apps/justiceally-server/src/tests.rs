//! Property-based tests for the JusticeAlly server API
//!
//! These use proptest to generate arbitrary inputs and verify the
//! catalog, renderer and validation invariants the handlers rely on.

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use std::collections::HashSet;

    use justiceally_core::registry;
    use justiceally_core::render;
    use justiceally_core::{download_filename, DocumentTypeId, FormValues};

    // Strategies for generating test values

    /// Generate document type ids from the implemented set
    fn implemented_type() -> impl Strategy<Value = DocumentTypeId> {
        prop_oneof![
            Just(DocumentTypeId::PoliceComplaint),
            Just(DocumentTypeId::LegalNotice),
            Just(DocumentTypeId::Rti),
            Just(DocumentTypeId::Affidavit),
        ]
    }

    /// Generate arbitrary but unknown document type id strings
    fn unknown_type_id() -> impl Strategy<Value = String> {
        "[a-z]{5,20}".prop_filter("Must not collide with a catalog id", |s| {
            DocumentTypeId::ALL.iter().all(|id| id.to_string() != *s)
        })
    }

    /// Non-blank field values with no bracket characters
    fn field_value() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 ]{0,30}".prop_map(|s| s.trim_end().to_string())
    }

    /// All fields of `id` filled with generated values
    fn full_values(id: DocumentTypeId) -> impl Strategy<Value = FormValues> {
        let keys: Vec<&'static str> = registry::spec(id)
            .expect("implemented type")
            .fields
            .iter()
            .map(|f| f.key)
            .collect();
        proptest::collection::vec(field_value(), keys.len()).prop_map(move |values| {
            keys.iter()
                .map(|k| k.to_string())
                .zip(values)
                .collect::<FormValues>()
        })
    }

    proptest! {
        /// Property: catalog ids round-trip through their string form
        #[test]
        fn catalog_ids_round_trip(idx in 0usize..DocumentTypeId::ALL.len()) {
            let id = DocumentTypeId::ALL[idx];
            let parsed: DocumentTypeId = id.to_string().parse().unwrap();
            prop_assert_eq!(parsed, id);
        }

        /// Property: random strings never parse as document types
        #[test]
        fn unknown_ids_are_rejected(s in unknown_type_id()) {
            prop_assert!(s.parse::<DocumentTypeId>().is_err());
        }

        /// Property: implemented types are listed as available with
        /// a non-empty required-field set
        #[test]
        fn implemented_types_are_available(id in implemented_type()) {
            let catalog = registry::catalog();
            let entry = catalog.iter().find(|e| e.id == id);
            prop_assert!(entry.is_some());
            let entry = entry.unwrap();
            prop_assert!(entry.available);
            prop_assert!(!entry.required_fields.is_empty());
        }

        /// Property: an empty form renders every required field as a
        /// bracket placeholder
        #[test]
        fn empty_render_keeps_required_placeholders(id in implemented_type()) {
            let rendered = render::render(id, &FormValues::new()).unwrap();
            prop_assert!(!rendered.is_empty());
            for field in registry::required_fields(id) {
                prop_assert!(
                    rendered.contains(field.placeholder),
                    "missing placeholder for '{}'", field.key
                );
            }
        }

        /// Property: a fully-filled form renders with zero required
        /// placeholders remaining
        #[test]
        fn full_render_clears_required_placeholders(
            (id, values) in implemented_type().prop_flat_map(|id| (Just(id), full_values(id)))
        ) {
            let rendered = render::render(id, &values).unwrap();
            for field in registry::required_fields(id) {
                prop_assert!(
                    !rendered.contains(field.placeholder),
                    "placeholder for '{}' survived", field.key
                );
            }
        }

        /// Property: rendering is idempotent for fixed inputs
        #[test]
        fn render_is_idempotent(
            (id, values) in implemented_type().prop_flat_map(|id| (Just(id), full_values(id)))
        ) {
            let a = render::render(id, &values).unwrap();
            let b = render::render(id, &values).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Property: dropping required fields reports exactly those
        /// fields, in schema order
        #[test]
        fn validation_order_matches_schema(
            (id, values, mask) in implemented_type().prop_flat_map(|id| {
                let required = registry::required_fields(id).len();
                (Just(id), full_values(id), proptest::collection::vec(any::<bool>(), required))
            })
        ) {
            let required = registry::required_fields(id);
            let mut partial = values.clone();
            let mut expected = Vec::new();
            for (field, drop) in required.iter().zip(&mask) {
                if *drop {
                    partial.remove(field.key);
                    expected.push(field.label);
                }
            }
            prop_assert_eq!(render::missing_fields(id, &partial), expected);
        }

        /// Property: download filenames are lowercase slugs ending in .txt
        #[test]
        fn filenames_are_slugs(title in "[ -~]{0,40}") {
            let name = download_filename(&title);
            prop_assert!(name.ends_with(".txt"));
            prop_assert!(!name.contains(' '));
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == '-'
                || c == '.'));
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = registry::catalog();
        let ids: HashSet<_> = catalog.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_unimplemented_types_have_no_template() {
        for entry in registry::catalog() {
            if !entry.available {
                assert!(registry::get_template(entry.id).is_none());
            }
        }
    }
}
