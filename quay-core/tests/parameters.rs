#[cfg(test)]
mod tests {
    use quay_core::{DataType, Error, Parameter, ParameterSet, Value, normalize_name};

    #[test]
    fn normalization() {
        assert_eq!(normalize_name("@id"), "id");
        assert_eq!(normalize_name("?id"), "id");
        assert_eq!(normalize_name("Id"), "id");
        assert_eq!(normalize_name("@TagId"), "tagid");
        assert_eq!(normalize_name("@"), "");
        assert_eq!(normalize_name(""), "");
        // Only one marker is stripped.
        assert_eq!(normalize_name("@@id"), "@id");
    }

    #[test]
    fn add_and_lookup() {
        let mut params = ParameterSet::new();
        params.add("@id", DataType::Varchar);
        assert_eq!(params.len(), 1);
        assert_eq!(params.index_of("@id"), Some(0));
        assert_eq!(params.index_of("@ID"), Some(0));
        // The marker must match the stored display name; only the normalized
        // index ignores it.
        assert_eq!(params.index_of("?id"), None);
        assert_eq!(params.index_of("id"), None);
        assert_eq!(params.normalized_index_of("?id"), Some(0));
        assert_eq!(params.normalized_index_of("id"), Some(0));
        assert_eq!(params.normalized_index_of("ID"), Some(0));
        assert_eq!(params.index_of("@other"), None);
        assert!(params.contains("@id"));
        assert!(!params.contains("@other"));
    }

    #[test]
    fn add_returns_parameter_for_chaining() {
        let mut params = ParameterSet::new();
        params.add("@n", DataType::Int32).set_value(5);
        let parameter = params.by_name("@n").unwrap();
        assert_eq!(parameter.value(), &Value::Int32(Some(5)));
        assert_eq!(parameter.data_type(), Some(DataType::Int32));
    }

    #[test]
    fn duplicate_normalized_names_resolve_to_last_addition() {
        let mut params = ParameterSet::new();
        params.add_with_value("@id", 1);
        params.add_with_value("?ID", 2);
        assert_eq!(params.len(), 2);
        assert_eq!(params.normalized_index_of("id"), Some(1));
        assert_eq!(params.index_of("?id"), Some(1));
        assert_eq!(params.index_of("@id"), None);
        assert_eq!(
            params.by_name("?ID").unwrap().value(),
            &Value::Int32(Some(2))
        );
    }

    #[test]
    fn positional_parameters_never_enter_the_index() {
        let mut params = ParameterSet::new();
        params.add_with_value("", 7);
        params.add_with_value("?", 8);
        assert_eq!(params.len(), 2);
        assert!(params.get(0).unwrap().is_positional());
        assert!(params.get(1).unwrap().is_positional());
        assert_eq!(params.normalized_index_of(""), None);
        assert_eq!(params.index_of(""), None);
    }

    #[test]
    fn remove_at_shifts_later_mappings() {
        let mut params = ParameterSet::new();
        params.add_with_value("@a", 1);
        params.add_with_value("@b", 2);
        params.add_with_value("@c", 3);
        let removed = params.remove_at(0).unwrap();
        assert_eq!(removed.name(), "@a");
        assert_eq!(params.len(), 2);
        assert_eq!(params.index_of("@a"), None);
        assert_eq!(params.index_of("@b"), Some(0));
        assert_eq!(params.index_of("@c"), Some(1));
        assert_eq!(params.by_name("@c").unwrap().value(), &Value::Int32(Some(3)));
    }

    // Removing an early duplicate drops the mapping owned by the later one.
    // Inherited behavior, kept as is.
    #[test]
    fn remove_at_drops_the_mapping_of_a_later_duplicate() {
        let mut params = ParameterSet::new();
        params.add_with_value("@id", 1);
        params.add_with_value("@x", 2);
        params.add_with_value("?ID", 3);
        assert_eq!(params.normalized_index_of("id"), Some(2));
        params.remove_at(0).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.normalized_index_of("id"), None);
        assert_eq!(params.index_of("@x"), Some(0));
    }

    #[test]
    fn remove_by_name() {
        let mut params = ParameterSet::new();
        params.add_with_value("@a", 1);
        params.add_with_value("@b", 2);
        let removed = params.remove("@a").unwrap();
        assert_eq!(removed.name(), "@a");
        assert_eq!(params.index_of("@b"), Some(0));
        assert!(matches!(
            params.remove("@missing"),
            Err(Error::InvalidArgument(..))
        ));
    }

    #[test]
    fn replace_repairs_both_mappings() {
        let mut params = ParameterSet::new();
        params.add_with_value("@a", 1);
        params.add_with_value("@b", 2);
        let old = params
            .replace(1, Parameter::with_value("@c", 3))
            .unwrap();
        assert_eq!(old.name(), "@b");
        assert_eq!(params.index_of("@b"), None);
        assert_eq!(params.index_of("@c"), Some(1));
        assert!(matches!(
            params.replace(5, Parameter::new("@d")),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn replace_with_existing_normalized_name_overwrites() {
        let mut params = ParameterSet::new();
        params.add_with_value("@a", 1);
        params.add_with_value("@b", 2);
        params.replace(1, Parameter::with_value("?A", 3)).unwrap();
        // Both slots normalize to "a"; the replacement owns the mapping.
        assert_eq!(params.normalized_index_of("a"), Some(1));
        assert_eq!(params.index_of("?A"), Some(1));
        assert_eq!(params.index_of("@a"), None);
    }

    #[test]
    fn set_by_name() {
        let mut params = ParameterSet::new();
        params.add_with_value("@a", 1);
        params
            .set_by_name("@a", Parameter::with_value("@d", 4))
            .unwrap();
        assert_eq!(params.index_of("@d"), Some(0));
        assert_eq!(params.index_of("@a"), None);
        assert!(matches!(
            params.set_by_name("@missing", Parameter::new("@e")),
            Err(Error::InvalidArgument(..))
        ));
    }

    #[test]
    fn clear_empties_sequence_and_index_together() {
        let mut params = ParameterSet::new();
        params.add_with_value("@a", 1);
        params.add_with_value("@b", 2);
        params.clear();
        assert_eq!(params.len(), 0);
        assert!(params.is_empty());
        assert_eq!(params.index_of("@a"), None);
        assert_eq!(params.index_of("@b"), None);
        assert_eq!(params.normalized_index_of("a"), None);
    }

    #[test]
    fn accessor_errors() {
        let params = ParameterSet::new();
        assert!(matches!(
            params.get(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        ));
        let error = params.by_name("@tag").unwrap_err();
        assert!(error.to_string().contains("@tag"));
    }

    // After any interleaving of mutations, every mapping entry must point at
    // the true current position of its parameter.
    #[test]
    fn index_never_drifts_after_mixed_mutations() {
        let mut params = ParameterSet::new();
        params.add_with_value("@a", 1);
        params.add_with_value("@b", 2);
        params.add_with_value("@c", 3);
        params.add_with_value("@d", 4);
        params.remove_at(1).unwrap();
        params.replace(1, Parameter::with_value("@e", 5)).unwrap();
        params.add_with_value("@f", 6);
        for (position, parameter) in params.iter().enumerate() {
            if let Some(name) = parameter.normalized_name() {
                assert_eq!(
                    params.normalized_index_of(name),
                    Some(position),
                    "mapping for '{name}' drifted"
                );
            }
        }
    }
}
