use std::fmt;
use std::hash::{Hash, Hasher};

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

// ─────────────────────────────────────────────────────────────────────────────
// Node arena
// ─────────────────────────────────────────────────────────────────────────────
//
// The list is circular and doubly linked through indices into `nodes`.
// Slot 0 is the sentinel: `nodes[HEAD].next` is the first point and
// `nodes[HEAD].prev` the last. Unlinked slots go to `free` and are reused by
// the next insertion.

const HEAD: usize = 0;

#[derive(Clone, Debug)]
struct FunctionNode {
    point: FunctionPoint,
    prev: usize,
    next: usize
}

/// Linked backend with no capacity limit. Index lookups walk from whichever
/// end of the list is closer.
#[derive(Clone, Debug)]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<FunctionNode>,
    free: Vec<usize>,
    points_count: usize
}

impl LinkedListTabulatedFunction {
    /// `points_count` evenly spaced points over `[left_x, right_x]` with `y = 0`.
    pub fn new(left_x: f64, right_x: f64, points_count: usize) -> Result<LinkedListTabulatedFunction, FunctionError> {
        Self::from_values(left_x, right_x, &vec![0.0; points_count])
    }

    /// Evenly spaced points over `[left_x, right_x]` carrying `values` as ordinates.
    pub fn from_values(left_x: f64, right_x: f64, values: &[f64]) -> Result<LinkedListTabulatedFunction, FunctionError> {
        let points = evenly_spaced_points(left_x, right_x, values)?;
        Ok(Self::from_checked(&points))
    }

    /// Copies `points`, which must already be strictly increasing in x.
    pub fn from_points(points: &[FunctionPoint]) -> Result<LinkedListTabulatedFunction, FunctionError> {
        check_points(points)?;
        Ok(Self::from_checked(points))
    }

    fn from_checked(points: &[FunctionPoint]) -> LinkedListTabulatedFunction {
        let mut list = LinkedListTabulatedFunction::empty(points.len());
        for &pt in points {
            list.link_before(HEAD, pt);
        }
        list
    }

    fn empty(capacity: usize) -> LinkedListTabulatedFunction {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(FunctionNode { point: FunctionPoint::default(), prev: HEAD, next: HEAD });
        LinkedListTabulatedFunction { nodes, free: Vec::new(), points_count: 0 }
    }

    pub fn iter(&self) -> LinkedListPoints<'_> {
        LinkedListPoints {
            list: self,
            front: self.nodes[HEAD].next,
            back: self.nodes[HEAD].prev,
            remaining: self.points_count
        }
    }

    fn check_index(&self, index: usize) -> Result<(), FunctionError> {
        if index < self.points_count {
            Ok(())
        } else {
            Err(FunctionError::index_out_of_range(index, self.points_count))
        }
    }

    /// Arena slot of the node at `index`, which must be in range.
    fn node_by_index(&self, index: usize) -> usize {
        if index < self.points_count / 2 {
            let mut current = self.nodes[HEAD].next;
            for _ in 0..index {
                current = self.nodes[current].next;
            }
            current
        } else {
            let mut current = self.nodes[HEAD].prev;
            for _ in index..(self.points_count - 1) {
                current = self.nodes[current].prev;
            }
            current
        }
    }

    /// Splices a new node carrying `point` in front of slot `next`.
    fn link_before(&mut self, next: usize, point: FunctionPoint) {
        let prev = self.nodes[next].prev;
        let node = FunctionNode { point, prev, next };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            },
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.nodes[prev].next = slot;
        self.nodes[next].prev = slot;
        self.points_count += 1;
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free.push(slot);
        self.points_count -= 1;
    }

    fn check_abscissa(&self, slot: usize, x: f64) -> Result<(), FunctionError> {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        let left = (prev != HEAD).then(|| self.nodes[prev].point.x());
        let right = (next != HEAD).then(|| self.nodes[next].point.x());
        check_neighbours(left, right, x)
    }
}

impl Function for LinkedListTabulatedFunction {
    fn left_domain_border(&self) -> f64 {
        self.nodes[self.nodes[HEAD].next].point.x()
    }

    fn right_domain_border(&self) -> f64 {
        self.nodes[self.nodes[HEAD].prev].point.x()
    }

    fn value(&self, x: f64) -> f64 {
        value_at(self.iter(), self.left_domain_border(), self.right_domain_border(), x)
    }
}

impl TabulatedFunction for LinkedListTabulatedFunction {
    fn points_count(&self) -> usize {
        self.points_count
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, FunctionError> {
        self.check_index(index)?;
        Ok(self.nodes[self.node_by_index(index)].point)
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), FunctionError> {
        self.check_index(index)?;
        let slot = self.node_by_index(index);
        self.check_abscissa(slot, point.x())?;
        self.nodes[slot].point = point;
        Ok(())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), FunctionError> {
        self.check_index(index)?;
        let slot = self.node_by_index(index);
        self.check_abscissa(slot, x)?;
        self.nodes[slot].point.set_x(x);
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), FunctionError> {
        self.check_index(index)?;
        let slot = self.node_by_index(index);
        self.nodes[slot].point.set_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), FunctionError> {
        check_deletable(self.points_count)?;
        self.check_index(index)?;
        let slot = self.node_by_index(index);
        self.unlink(slot);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<AddPointStatus, FunctionError> {
        let x = point.x();
        check_finite_abscissa(x)?;

        // Points are sorted, so a duplicate is met before the first larger abscissa.
        let mut current = self.nodes[HEAD].next;
        while current != HEAD {
            let current_x = self.nodes[current].point.x();
            if current_x == x {
                return Err(duplicate_abscissa(x));
            }
            if current_x > x {
                break;
            }
            current = self.nodes[current].next;
        }
        self.link_before(current, point);
        Ok(AddPointStatus::Inserted)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_> {
        Box::new(LinkedListTabulatedFunction::iter(self))
    }

    fn box_clone(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }
}

impl<T> PartialEq<T> for LinkedListTabulatedFunction where
    T: TabulatedFunction + ?Sized {
    fn eq(&self, other: &T) -> bool {
        self.points_count == other.points_count()
            && self.iter().zip(other.iter()).all(|(lhs, rhs)| lhs == rhs)
    }
}

impl Hash for LinkedListTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for LinkedListTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self.iter(), f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Iteration
// ─────────────────────────────────────────────────────────────────────────────

/// Copies of the points of a `LinkedListTabulatedFunction`, first to last.
pub struct LinkedListPoints<'a> {
    list: &'a LinkedListTabulatedFunction,
    front: usize,
    back: usize,
    remaining: usize
}

impl<'a> Iterator for LinkedListPoints<'a> {
    type Item = FunctionPoint;

    fn next(&mut self) -> Option<FunctionPoint> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        Some(node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for LinkedListPoints<'a> {
    fn next_back(&mut self) -> Option<FunctionPoint> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        Some(node.point)
    }
}

impl<'a> ExactSizeIterator for LinkedListPoints<'a> {}

impl<'a> IntoIterator for &'a LinkedListTabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = LinkedListPoints<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
