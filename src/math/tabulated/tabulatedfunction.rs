use std::fmt;
use std::hash::{Hash, Hasher};

use crate::math::function::function::Function;
use crate::math::function::functionerror::FunctionError;
use crate::math::tabulated::functionpoint::FunctionPoint;

/// Outcome of a successful `TabulatedFunction::add_point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPointStatus {
    Inserted,
    /// A fixed-capacity backend was full; the point was not stored and the
    /// function is unchanged.
    AtCapacity
}

/// A function given by a finite sample of points with strictly increasing x.
///
/// Every backend keeps two invariants after construction:
/// - abscissas are strictly increasing across indices;
/// - at least two points are present.
///
/// Evaluation (`Function::value`) returns the stored y on an exact abscissa
/// match, linearly interpolates between the bracketing neighbours otherwise,
/// and returns `f64::NAN` outside `[left_domain_border, right_domain_border]`.
///
/// Iteration yields copies of the points. The iterator borrows the function,
/// so it cannot be structurally modified while an iteration is in progress.
pub trait TabulatedFunction: Function {
    fn points_count(&self) -> usize;

    fn point(&self, index: usize) -> Result<FunctionPoint, FunctionError>;

    /// Replaces the point at `index`; its x must stay strictly between the neighbours.
    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), FunctionError>;

    fn point_x(&self, index: usize) -> Result<f64, FunctionError> {
        Ok(self.point(index)?.x())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), FunctionError>;

    fn point_y(&self, index: usize) -> Result<f64, FunctionError> {
        Ok(self.point(index)?.y())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), FunctionError>;

    /// Removes the point at `index`. Refused with `InvalidState` when fewer
    /// than three points are present.
    fn delete_point(&mut self, index: usize) -> Result<(), FunctionError>;

    /// Inserts `point` at its ordered position. Refused with
    /// `InappropriatePoint` when a stored abscissa is bit-identical to `point.x()`.
    fn add_point(&mut self, point: FunctionPoint) -> Result<AddPointStatus, FunctionError>;

    fn iter(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_>;

    /// Deep copy behind a fresh box; the copy shares no storage with `self`.
    fn box_clone(&self) -> Box<dyn TabulatedFunction>;

    /// Point-wise equality under `FunctionPoint`'s tolerance, regardless of backend.
    fn equals(&self, other: &dyn TabulatedFunction) -> bool {
        self.points_count() == other.points_count()
            && self.iter().zip(other.iter()).all(|(lhs, rhs)| lhs == rhs)
    }

    fn hash_code(&self) -> u64 {
        self.iter().fold(self.points_count() as u64, |h, pt| h ^ pt.hash_code())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared algorithms of both backends
// ─────────────────────────────────────────────────────────────────────────────

/// Evaluates a sorted point sequence at `x`.
///
/// Walks adjacent pairs once: an exact match on the left point wins, then a
/// strict bracket `x_i < x < x_{i+1}` is interpolated. The last point is
/// checked after the walk. Anything else, including a NaN query, is NaN.
pub(crate) fn value_at<I>(points: I, left_x: f64, right_x: f64, x: f64) -> f64 where
    I: IntoIterator<Item = FunctionPoint> {
    if x < left_x || x > right_x {
        return f64::NAN;
    }

    let mut prev: Option<FunctionPoint> = None;
    for pt in points {
        if let Some(lhs) = prev {
            if lhs.x() == x {
                return lhs.y();
            }
            if lhs.x() < x && x < pt.x() {
                return FunctionPoint::interpolate(&lhs, &pt, x);
            }
        }
        prev = Some(pt);
    }

    match prev {
        Some(last) if last.x() == x => last.y(),
        _ => f64::NAN
    }
}

/// Validates a caller-supplied point sequence: at least two points, finite and
/// strictly increasing abscissas.
pub(crate) fn check_points(points: &[FunctionPoint]) -> Result<(), FunctionError> {
    if points.len() < 2 {
        return Err(FunctionError::InvalidArgument(
            format!("at least two points are required, got {}", points.len())
        ));
    }
    if let Some(pt) = points.iter().find(|pt| !pt.x().is_finite()) {
        return Err(FunctionError::InvalidArgument(
            format!("abscissa must be finite, got {}", pt.x())
        ));
    }
    for pair in points.windows(2) {
        if !(pair[0].x() < pair[1].x()) {
            return Err(FunctionError::InvalidArgument(
                format!("abscissas must be strictly increasing: {} is followed by {}", pair[0].x(), pair[1].x())
            ));
        }
    }
    Ok(())
}

/// `points_count` evenly spaced abscissas over `[left_x, right_x]`.
///
/// The last abscissa is pinned to `right_x` so the domain is exactly the
/// requested interval.
pub(crate) fn evenly_spaced_abscissas(left_x: f64,
                                      right_x: f64,
                                      points_count: usize) -> Result<Vec<f64>, FunctionError> {
    if !left_x.is_finite() || !right_x.is_finite() || !(left_x < right_x) {
        return Err(FunctionError::InvalidArgument(
            format!("bounds must be finite with left < right, got [{}, {}]", left_x, right_x)
        ));
    }
    if points_count < 2 {
        return Err(FunctionError::InvalidArgument(
            format!("at least two points are required, got {}", points_count)
        ));
    }

    let last = points_count - 1;
    let step = (right_x - left_x) / last as f64;
    Ok((0..points_count)
        .map(|i| if i == last { right_x } else { left_x + step * i as f64 })
        .collect())
}

/// Builds evenly spaced points over `[left_x, right_x]` carrying `values`.
pub(crate) fn evenly_spaced_points(left_x: f64,
                                   right_x: f64,
                                   values: &[f64]) -> Result<Vec<FunctionPoint>, FunctionError> {
    let points: Vec<FunctionPoint> = evenly_spaced_abscissas(left_x, right_x, values.len())?
        .into_iter()
        .zip(values.iter())
        .map(|(x, &y)| FunctionPoint::new(x, y))
        .collect();
    // Too many points over a tiny interval collapse neighbouring abscissas.
    check_points(&points)?;
    Ok(points)
}

/// Checks that `x` lies strictly between the neighbouring abscissas, if any.
pub(crate) fn check_neighbours(left_neighbour: Option<f64>,
                               right_neighbour: Option<f64>,
                               x: f64) -> Result<(), FunctionError> {
    check_finite_abscissa(x)?;
    if let Some(left) = left_neighbour {
        if x <= left {
            return Err(FunctionError::InappropriatePoint(
                format!("x = {} does not exceed the left neighbour {}", x, left)
            ));
        }
    }
    if let Some(right) = right_neighbour {
        if x >= right {
            return Err(FunctionError::InappropriatePoint(
                format!("x = {} is not below the right neighbour {}", x, right)
            ));
        }
    }
    Ok(())
}

pub(crate) fn check_finite_abscissa(x: f64) -> Result<(), FunctionError> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(FunctionError::InappropriatePoint(format!("abscissa must be finite, got {}", x)))
    }
}

pub(crate) fn duplicate_abscissa(x: f64) -> FunctionError {
    FunctionError::InappropriatePoint(format!("a point with x = {} already exists", x))
}

pub(crate) fn check_deletable(points_count: usize) -> Result<(), FunctionError> {
    if points_count < 3 {
        Err(FunctionError::InvalidState(
            format!("cannot delete a point when only {} remain", points_count)
        ))
    } else {
        Ok(())
    }
}

pub(crate) fn fmt_points<I>(points: I, f: &mut fmt::Formatter<'_>) -> fmt::Result where
    I: IntoIterator<Item = FunctionPoint> {
    write!(f, "{{")?;
    for (i, pt) in points.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", pt)?;
    }
    write!(f, "}}")
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait-object conveniences
// ─────────────────────────────────────────────────────────────────────────────

impl<'a> PartialEq for dyn TabulatedFunction + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<'a> Hash for dyn TabulatedFunction + 'a {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<'a> fmt::Display for dyn TabulatedFunction + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self.iter(), f)
    }
}

impl<'a> fmt::Debug for dyn TabulatedFunction + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self.iter(), f)
    }
}

impl Clone for Box<dyn TabulatedFunction> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

impl<'a> IntoIterator for &'a dyn TabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = Box<dyn Iterator<Item = FunctionPoint> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
