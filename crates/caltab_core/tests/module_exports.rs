//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that the table module is accessible via absolute path.
#[test]
fn test_table_module_exports() {
    use caltab_core::table::SampleTable;

    let table = SampleTable::from_pairs(vec![(0.0_f64, 0.0_f64), (1.0, 1.0)]);
    assert_eq!(table.len(), 2);

    let table = SampleTable::from_slices(&[0.0_f64, 1.0], &[0.0_f64, 1.0]).unwrap();
    assert!(!table.is_empty());

    let table: SampleTable<f64, f64> = vec![(0.0, 0.0), (1.0, 1.0)].into();
    assert_eq!(table.first(), Some(&(0.0, 0.0)));
}

/// Test that the interpolators module is accessible via absolute path.
#[test]
fn test_interpolators_module_exports() {
    use caltab_core::interpolators::Nearest;
    use caltab_core::interpolators::TableInterpolator;
    use caltab_core::table::SampleTable;

    let table = SampleTable::from_pairs(vec![(0.0_f64, 0.0_f64), (1.0, 2.0)]);
    let interp = TableInterpolator::new(table.clone());
    assert!(interp.get_y(0.5).is_ok());
    assert!(interp.nearest_y(0.5).unwrap().is_within());

    let interp = TableInterpolator::with_tolerance(table, 1e-6);
    assert_eq!(interp.domain(), Some((0.0, 1.0)));

    let outcome: Nearest<f64> = Nearest::Within(1.0);
    assert_eq!(outcome.value(), 1.0);
}

/// Test that the types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use caltab_core::types::error::InterpolationError;

    let err = InterpolationError::InsufficientData { got: 0, need: 2 };
    let _: &dyn std::error::Error = &err;

    // Module-level re-export
    let err = caltab_core::types::InterpolationError::NonMonotonicData { index: 1 };
    assert!(format!("{}", err).contains("index 1"));
}
