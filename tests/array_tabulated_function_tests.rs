//! Tests for the contiguous, fixed-capacity backend.
//!
//! ## Test Organization
//!
//! 1. **Construction** - evenly spaced, from values, from points, rejections
//! 2. **Evaluation** - exact hits, interpolation, domain misses
//! 3. **Point access** - getters, setters, ordering guards
//! 4. **Structural changes** - deletion floor, insertion, capacity
//! 5. **Copies** - iteration, cloning, equality, formatting

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tabfun::math::function::function::Function;
use tabfun::math::function::functionerror::FunctionError;
use tabfun::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfun::math::tabulated::functionpoint::FunctionPoint;
use tabfun::math::tabulated::tabulatedfunction::{
    AddPointStatus,
    TabulatedFunction
};

fn sample() -> ArrayTabulatedFunction {
    ArrayTabulatedFunction::from_values(0.0, 4.0, &[0.0, 0.5, 1.0, 1.5, 2.0]).unwrap()
}

fn xs(f: &ArrayTabulatedFunction) -> Vec<f64> {
    f.iter().map(|pt| pt.x()).collect()
}

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_spaces_points_evenly_with_zero_values() {
    let f = ArrayTabulatedFunction::new(0.0, 1.0, 5).unwrap();
    assert_eq!(f.points_count(), 5);
    assert_eq!(f.capacity(), 5);
    assert_eq!(xs(&f), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert!(f.iter().all(|pt| pt.y() == 0.0));
}

#[test]
fn test_domain_matches_requested_bounds() {
    let f = ArrayTabulatedFunction::new(0.1, 0.7, 7).unwrap();
    assert_eq!(f.left_domain_border(), 0.1);
    assert_eq!(f.right_domain_border(), 0.7);
    for pair in f.points().windows(2) {
        assert!(pair[0].x() < pair[1].x());
    }
}

#[test]
fn test_construction_rejects_bad_bounds_and_counts() {
    assert!(matches!(ArrayTabulatedFunction::new(1.0, 1.0, 3), Err(FunctionError::InvalidArgument(_))));
    assert!(matches!(ArrayTabulatedFunction::new(2.0, 1.0, 3), Err(FunctionError::InvalidArgument(_))));
    assert!(matches!(ArrayTabulatedFunction::new(0.0, 1.0, 1), Err(FunctionError::InvalidArgument(_))));
    assert!(matches!(ArrayTabulatedFunction::new(f64::NAN, 1.0, 3), Err(FunctionError::InvalidArgument(_))));
    assert!(matches!(ArrayTabulatedFunction::from_values(0.0, 1.0, &[1.0]), Err(FunctionError::InvalidArgument(_))));
}

#[test]
fn test_from_points_validates_but_does_not_sort() {
    let unsorted = [FunctionPoint::new(0.0, 0.0), FunctionPoint::new(2.0, 0.0), FunctionPoint::new(1.0, 0.0)];
    assert!(matches!(ArrayTabulatedFunction::from_points(&unsorted), Err(FunctionError::InvalidArgument(_))));

    let duplicate = [FunctionPoint::new(0.0, 0.0), FunctionPoint::new(0.0, 1.0)];
    assert!(matches!(ArrayTabulatedFunction::from_points(&duplicate), Err(FunctionError::InvalidArgument(_))));

    let single = [FunctionPoint::new(0.0, 0.0)];
    assert!(matches!(ArrayTabulatedFunction::from_points(&single), Err(FunctionError::InvalidArgument(_))));

    let sorted = [FunctionPoint::new(-1.0, 3.0), FunctionPoint::new(0.5, 2.0), FunctionPoint::new(7.0, 1.0)];
    let f = ArrayTabulatedFunction::from_points(&sorted).unwrap();
    assert_eq!(f.points(), &sorted);
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_value_exact_match_and_interpolation() {
    let f = sample();
    assert_eq!(f.value(2.0), 1.0);
    assert_eq!(f.value(0.5), 0.25);
    assert_eq!(f.value(3.5), 1.75);
}

#[test]
fn test_value_at_endpoints_and_outside_domain() {
    let f = sample();
    assert_eq!(f.value(0.0), 0.0);
    assert_eq!(f.value(4.0), 2.0);
    assert!(f.value(-1e-12).is_nan());
    assert!(f.value(4.000001).is_nan());
    assert!(f.value(f64::NAN).is_nan());
}

#[test]
fn test_value_on_uneven_grid() {
    let f = ArrayTabulatedFunction::from_points(&[
        FunctionPoint::new(0.0, 1.0),
        FunctionPoint::new(0.1, 3.0),
        FunctionPoint::new(10.0, -1.0)
    ]).unwrap();
    assert_eq!(f.value(0.1), 3.0);
    let expected = 3.0 + (5.0 - 0.1) * (-1.0 - 3.0) / (10.0 - 0.1);
    assert_eq!(f.value(5.0), expected);
}

// ============================================================================
// Point access
// ============================================================================

#[test]
fn test_point_getters_are_bounds_checked() {
    let f = sample();
    assert_eq!(f.point(1).unwrap(), FunctionPoint::new(1.0, 0.5));
    assert_eq!(f.point_x(3).unwrap(), 3.0);
    assert_eq!(f.point_y(4).unwrap(), 2.0);
    assert!(matches!(f.point(5), Err(FunctionError::IndexOutOfRange { index: 5, count: 5 })));
    assert!(matches!(f.point_x(99), Err(FunctionError::IndexOutOfRange { .. })));
    assert!(matches!(f.point_y(5), Err(FunctionError::IndexOutOfRange { .. })));
}

#[test]
fn test_set_point_x_keeps_strict_order() {
    let mut f = sample();
    f.set_point_x(2, 1.5).unwrap();
    assert_eq!(f.point_x(2).unwrap(), 1.5);

    assert!(matches!(f.set_point_x(2, 1.0), Err(FunctionError::InappropriatePoint(_))));
    assert!(matches!(f.set_point_x(2, 3.0), Err(FunctionError::InappropriatePoint(_))));
    assert!(matches!(f.set_point_x(2, f64::NAN), Err(FunctionError::InappropriatePoint(_))));
    assert_eq!(f.point_x(2).unwrap(), 1.5, "refused updates leave the point alone");

    f.set_point_x(0, -10.0).unwrap();
    f.set_point_x(4, 100.0).unwrap();
    assert_eq!(f.left_domain_border(), -10.0);
    assert_eq!(f.right_domain_border(), 100.0);

    assert!(matches!(f.set_point_x(5, 200.0), Err(FunctionError::IndexOutOfRange { .. })));
}

#[test]
fn test_set_point_replaces_both_coordinates() {
    let mut f = sample();
    f.set_point(1, FunctionPoint::new(0.5, 7.0)).unwrap();
    assert_eq!(f.point(1).unwrap(), FunctionPoint::new(0.5, 7.0));
    assert!(matches!(f.set_point(1, FunctionPoint::new(2.5, 0.0)), Err(FunctionError::InappropriatePoint(_))));
    assert!(matches!(f.set_point(7, FunctionPoint::new(2.5, 0.0)), Err(FunctionError::IndexOutOfRange { .. })));
}

#[test]
fn test_set_point_y_changes_value() {
    let mut f = sample();
    f.set_point_y(3, -1.0).unwrap();
    assert_eq!(f.value(3.0), -1.0);
    assert!(matches!(f.set_point_y(5, 0.0), Err(FunctionError::IndexOutOfRange { .. })));
}

// ============================================================================
// Structural changes
// ============================================================================

#[test]
fn test_delete_down_to_two_points() {
    let mut f = sample();
    f.delete_point(0).unwrap();
    f.delete_point(0).unwrap();
    assert_eq!(f.points_count(), 3);
    f.delete_point(1).unwrap();
    assert_eq!(f.points_count(), 2);
    assert_eq!(xs(&f), vec![2.0, 4.0]);

    assert!(matches!(f.delete_point(0), Err(FunctionError::InvalidState(_))));
    assert_eq!(f.points_count(), 2);
}

#[test]
fn test_delete_checks_state_before_index() {
    let mut f = ArrayTabulatedFunction::new(0.0, 1.0, 2).unwrap();
    assert!(matches!(f.delete_point(7), Err(FunctionError::InvalidState(_))));

    let mut g = sample();
    assert!(matches!(g.delete_point(5), Err(FunctionError::IndexOutOfRange { .. })));
}

#[test]
fn test_add_point_at_capacity_is_reported_and_ignored() {
    let mut f = sample();
    assert_eq!(f.add_point(FunctionPoint::new(2.5, 9.0)).unwrap(), AddPointStatus::AtCapacity);
    assert_eq!(f.points_count(), 5);
    assert_eq!(f.value(2.5), 1.25);
}

#[test]
fn test_add_point_reuses_freed_slot_in_order() {
    let mut f = sample();
    f.delete_point(1).unwrap();
    assert_eq!(f.add_point(FunctionPoint::new(0.5, 3.0)).unwrap(), AddPointStatus::Inserted);
    assert_eq!(xs(&f), vec![0.0, 0.5, 2.0, 3.0, 4.0]);
    assert_eq!(f.value(0.5), 3.0);
    assert_eq!(f.capacity(), 5);

    f.delete_point(0).unwrap();
    f.add_point(FunctionPoint::new(-1.0, 0.0)).unwrap();
    assert_eq!(f.left_domain_border(), -1.0);

    f.delete_point(4).unwrap();
    f.add_point(FunctionPoint::new(9.0, 0.0)).unwrap();
    assert_eq!(f.right_domain_border(), 9.0);
}

#[test]
fn test_add_point_rejects_duplicate_abscissa() {
    let mut f = sample();
    assert!(matches!(f.add_point(FunctionPoint::new(2.0, 1.0)), Err(FunctionError::InappropriatePoint(_))));

    f.delete_point(0).unwrap();
    assert!(matches!(f.add_point(FunctionPoint::new(3.0, 8.0)), Err(FunctionError::InappropriatePoint(_))));
    assert!(matches!(f.add_point(FunctionPoint::new(f64::INFINITY, 8.0)), Err(FunctionError::InappropriatePoint(_))));
    assert_eq!(f.points_count(), 4);
}

// ============================================================================
// Copies
// ============================================================================

#[test]
fn test_iteration_yields_copies_and_restarts() {
    let f = sample();
    let mut first: Vec<FunctionPoint> = f.iter().collect();
    let second: Vec<FunctionPoint> = (&f).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);

    first[0].set_y(100.0);
    assert_eq!(f.point_y(0).unwrap(), 0.0);
}

#[test]
fn test_clone_is_isolated() {
    let original = sample();
    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(copy.capacity(), original.capacity());

    copy.set_point_y(2, 42.0).unwrap();
    copy.delete_point(0).unwrap();
    assert_eq!(original.point_y(2).unwrap(), 1.0);
    assert_eq!(original.points_count(), 5);
    assert_ne!(copy, original);
}

#[test]
fn test_box_clone_is_isolated() {
    let original = sample();
    let mut copy = original.box_clone();
    copy.set_point_y(0, 5.0).unwrap();
    assert_eq!(original.point_y(0).unwrap(), 0.0);
}

#[test]
fn test_equality_and_hash() {
    let f = sample();
    let g = ArrayTabulatedFunction::from_points(f.points()).unwrap();
    assert_eq!(f, g);
    assert_eq!(f.hash_code(), g.hash_code());
    assert_eq!(hash_of(&f), hash_of(&g));

    let mut near = g.clone();
    near.set_point_y(1, 0.5 + 1e-12).unwrap();
    assert_eq!(f, near);

    let shorter = ArrayTabulatedFunction::from_points(&f.points()[..4]).unwrap();
    assert_ne!(f, shorter);
}

#[test]
fn test_display() {
    let f = ArrayTabulatedFunction::from_points(&[FunctionPoint::new(0.0, 1.0), FunctionPoint::new(1.0, 2.5)]).unwrap();
    assert_eq!(f.to_string(), "{(0; 1), (1; 2.5)}");
}
