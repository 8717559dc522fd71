use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Copied;
use std::slice;

use log::warn;

use crate::math::function::function::Function;
use crate::math::function::functionerror::FunctionError;
use crate::math::tabulated::functionpoint::FunctionPoint;
use crate::math::tabulated::tabulatedfunction::{
    AddPointStatus,
    TabulatedFunction,
    check_deletable,
    check_finite_abscissa,
    check_neighbours,
    check_points,
    duplicate_abscissa,
    evenly_spaced_points,
    fmt_points,
    value_at
};

/// Contiguous backend: the points live in one `Vec` whose logical capacity is
/// fixed to the number of points given at construction.
///
/// Inserting into a full function does not grow it; `add_point` reports
/// `AddPointStatus::AtCapacity` and leaves the points untouched. Deleting
/// frees a slot that a later insert may reuse.
#[derive(Clone, Debug)]
pub struct ArrayTabulatedFunction {
    points: Vec<FunctionPoint>,
    capacity: usize
}

impl ArrayTabulatedFunction {
    /// `points_count` evenly spaced points over `[left_x, right_x]` with `y = 0`.
    pub fn new(left_x: f64, right_x: f64, points_count: usize) -> Result<ArrayTabulatedFunction, FunctionError> {
        Self::from_values(left_x, right_x, &vec![0.0; points_count])
    }

    /// Evenly spaced points over `[left_x, right_x]` carrying `values` as ordinates.
    pub fn from_values(left_x: f64, right_x: f64, values: &[f64]) -> Result<ArrayTabulatedFunction, FunctionError> {
        let points = evenly_spaced_points(left_x, right_x, values)?;
        Ok(Self::from_checked(points))
    }

    /// Copies `points`, which must already be strictly increasing in x.
    pub fn from_points(points: &[FunctionPoint]) -> Result<ArrayTabulatedFunction, FunctionError> {
        check_points(points)?;
        Ok(Self::from_checked(points.to_vec()))
    }

    fn from_checked(points: Vec<FunctionPoint>) -> ArrayTabulatedFunction {
        let capacity = points.len();
        ArrayTabulatedFunction { points, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn points(&self) -> &[FunctionPoint] {
        &self.points
    }

    pub fn iter(&self) -> Copied<slice::Iter<'_, FunctionPoint>> {
        self.points.iter().copied()
    }

    fn check_index(&self, index: usize) -> Result<(), FunctionError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(FunctionError::index_out_of_range(index, self.points.len()))
        }
    }

    fn check_abscissa(&self, index: usize, x: f64) -> Result<(), FunctionError> {
        let left = index.checked_sub(1).map(|i| self.points[i].x());
        let right = self.points.get(index + 1).map(|pt| pt.x());
        check_neighbours(left, right, x)
    }
}

impl Function for ArrayTabulatedFunction {
    fn left_domain_border(&self) -> f64 {
        self.points[0].x()
    }

    fn right_domain_border(&self) -> f64 {
        self.points[self.points.len() - 1].x()
    }

    fn value(&self, x: f64) -> f64 {
        value_at(self.iter(), self.left_domain_border(), self.right_domain_border(), x)
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, FunctionError> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), FunctionError> {
        self.check_index(index)?;
        self.check_abscissa(index, point.x())?;
        self.points[index] = point;
        Ok(())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), FunctionError> {
        self.check_index(index)?;
        self.check_abscissa(index, x)?;
        self.points[index].set_x(x);
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), FunctionError> {
        self.check_index(index)?;
        self.points[index].set_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), FunctionError> {
        check_deletable(self.points.len())?;
        self.check_index(index)?;
        self.points.remove(index);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<AddPointStatus, FunctionError> {
        let x = point.x();
        check_finite_abscissa(x)?;
        if self.points.iter().any(|pt| pt.x() == x) {
            return Err(duplicate_abscissa(x));
        }
        if self.points.len() == self.capacity {
            warn!("array tabulated function is at its capacity of {} points, x = {} not stored", self.capacity, x);
            return Ok(AddPointStatus::AtCapacity);
        }

        let insert_index = self.points
            .iter()
            .position(|pt| pt.x() > x)
            .unwrap_or(self.points.len());
        self.points.insert(insert_index, point);
        Ok(AddPointStatus::Inserted)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_> {
        Box::new(ArrayTabulatedFunction::iter(self))
    }

    fn box_clone(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }
}

impl<T> PartialEq<T> for ArrayTabulatedFunction where
    T: TabulatedFunction + ?Sized {
    fn eq(&self, other: &T) -> bool {
        self.points.len() == other.points_count()
            && self.iter().zip(other.iter()).all(|(lhs, rhs)| lhs == rhs)
    }
}

impl Hash for ArrayTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for ArrayTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self.iter(), f)
    }
}

impl<'a> IntoIterator for &'a ArrayTabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = Copied<slice::Iter<'a, FunctionPoint>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
