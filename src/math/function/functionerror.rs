use thiserror::Error;

/// Failures raised by tabulated functions, their factories, the function
/// algebra and the integrator.
///
/// Evaluating outside a domain is not an error: it yields `f64::NAN`.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("point index {index} out of range for {count} points")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("inappropriate point: {0}")]
    InappropriatePoint(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("interval [{left}, {right}] lies outside the domain [{domain_left}, {domain_right}]")]
    DomainViolation {
        left: f64,
        right: f64,
        domain_left: f64,
        domain_right: f64
    },

    #[error("cannot instantiate tabulated function backend '{0}'")]
    BackendInstantiation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed input: {0}")]
    MalformedInput(String)
}

impl FunctionError {
    pub fn index_out_of_range(index: usize, count: usize) -> FunctionError {
        FunctionError::IndexOutOfRange { index, count }
    }

    /// Checks that `[left, right]` lies within `[domain_left, domain_right]`.
    pub fn check_domain(left: f64,
                        right: f64,
                        domain_left: f64,
                        domain_right: f64) -> Result<(), FunctionError> {
        if left < domain_left || right > domain_right {
            Err(FunctionError::DomainViolation { left, right, domain_left, domain_right })
        } else {
            Ok(())
        }
    }
}
