use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalError {
    ZeroMaxIterationsError,
    MaxIterationsTooLarge { max_iterations: u32 },
    NonFiniteConstant { real: f64, imag: f64 },
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::MaxIterationsTooLarge { max_iterations } => {
                write!(
                    f,
                    "Maximum iterations must not exceed {}: got {}",
                    i32::MAX,
                    max_iterations
                )
            }
            Self::NonFiniteConstant { real, imag } => {
                write!(f, "Julia constant must be finite: {} + {}i", real, imag)
            }
        }
    }
}

impl Error for FractalError {}
