use std::sync::Arc;

/// A real function of one variable defined on `[left_domain_border, right_domain_border]`.
///
/// Implemented by the elementary functions, the meta wrappers and every
/// tabulated function, so any of them can be nested, tabulated or integrated.
///
/// `Send + Sync` is a supertrait so that `Arc<dyn Function>` can be shared
/// across threads.
pub trait Function: Send + Sync {
    fn left_domain_border(&self) -> f64;

    fn right_domain_border(&self) -> f64;

    fn value(&self, x: f64) -> f64;

    fn contains(&self, x: f64) -> bool {
        x >= self.left_domain_border() && x <= self.right_domain_border()
    }
}

impl<F> Function for Box<F> where
    F: Function + ?Sized {
    fn left_domain_border(&self) -> f64 {
        (**self).left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        (**self).right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}

impl<F> Function for Arc<F> where
    F: Function + ?Sized {
    fn left_domain_border(&self) -> f64 {
        (**self).left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        (**self).right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}
