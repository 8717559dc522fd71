//! Both backends must agree on every observable behaviour except the array
//! backend's capacity limit.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tabfun::math::function::function::Function;
use tabfun::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfun::math::tabulated::functionpoint::FunctionPoint;
use tabfun::math::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use tabfun::math::tabulated::tabulatedfunction::TabulatedFunction;
use tabfun::math::tabulated::tabulatedfunctionfactory::BackendKind;

fn points() -> Vec<FunctionPoint> {
    vec![
        FunctionPoint::new(-2.0, 4.0),
        FunctionPoint::new(-0.5, 0.25),
        FunctionPoint::new(0.0, 0.0),
        FunctionPoint::new(1.0, 1.0),
        FunctionPoint::new(3.0, 9.0)
    ]
}

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn same_value(lhs: f64, rhs: f64) -> bool {
    (lhs.is_nan() && rhs.is_nan()) || lhs == rhs
}

#[test]
fn test_values_agree_across_backends() {
    let array = ArrayTabulatedFunction::from_points(&points()).unwrap();
    let list = LinkedListTabulatedFunction::from_points(&points()).unwrap();
    for step in -12..=16 {
        let x = step as f64 * 0.25;
        assert!(same_value(array.value(x), list.value(x)), "value({}) differs", x);
    }
}

#[test]
fn test_equality_crosses_backends() {
    let array = ArrayTabulatedFunction::from_points(&points()).unwrap();
    let list = LinkedListTabulatedFunction::from_points(&points()).unwrap();
    assert_eq!(array, list);
    assert_eq!(list, array);
    assert!(array.equals(&list));

    let mut changed = list.clone();
    changed.set_point_y(2, 0.5).unwrap();
    assert_ne!(array, changed);
    assert!(!changed.equals(&array));
}

#[test]
fn test_hash_agrees_across_backends() {
    let array = ArrayTabulatedFunction::from_points(&points()).unwrap();
    let list = LinkedListTabulatedFunction::from_points(&points()).unwrap();
    assert_eq!(array.hash_code(), list.hash_code());
    assert_eq!(hash_of(&array), hash_of(&list));

    let boxed_array: Box<dyn TabulatedFunction> = Box::new(array);
    let boxed_list: Box<dyn TabulatedFunction> = Box::new(list);
    assert_eq!(hash_of(&*boxed_array), hash_of(&*boxed_list));
    assert!(*boxed_array == *boxed_list);
}

#[test]
fn test_iteration_and_display_agree() {
    let array = ArrayTabulatedFunction::from_points(&points()).unwrap();
    let list = LinkedListTabulatedFunction::from_points(&points()).unwrap();
    let from_array: Vec<FunctionPoint> = TabulatedFunction::iter(&array).collect();
    let from_list: Vec<FunctionPoint> = TabulatedFunction::iter(&list).collect();
    assert_eq!(from_array, from_list);
    assert_eq!(array.to_string(), list.to_string());
}

#[test]
fn test_same_edit_sequence_gives_same_function() {
    for kind in BackendKind::ALL {
        let mut f = kind.factory().create_tabulated_function_from_points(&points()).unwrap();
        f.delete_point(1).unwrap();
        f.set_point_y(0, -4.0).unwrap();
        f.add_point(FunctionPoint::new(2.0, 4.0)).unwrap();
        f.set_point_x(1, -1.0).unwrap();

        let expected = ArrayTabulatedFunction::from_points(&[
            FunctionPoint::new(-2.0, -4.0),
            FunctionPoint::new(-1.0, 0.0),
            FunctionPoint::new(1.0, 1.0),
            FunctionPoint::new(2.0, 4.0),
            FunctionPoint::new(3.0, 9.0)
        ]).unwrap();
        assert!(f.equals(&expected), "{} backend diverged: {}", kind, f);
    }
}

#[test]
fn test_boxed_clone_keeps_equality() {
    for kind in BackendKind::ALL {
        let f = kind.factory().create_tabulated_function_from_points(&points()).unwrap();
        let mut copy = f.clone();
        assert!(*f == *copy);
        copy.set_point_y(4, 0.0).unwrap();
        assert!(*f != *copy);
        assert_eq!(f.point_y(4).unwrap(), 9.0);
    }
}
