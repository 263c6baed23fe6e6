// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors reported by the arithmetic kernel and the generation routines.
///
/// The Miller-Rabin oracle's residual false-accept probability (at most
/// `4^-rounds` per call) is inherent to the algorithm and is not an error
/// the library can detect or report.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Bit length too small: need at least {min} bits, got {actual}")]
    BitLengthTooSmall { min: usize, actual: usize },

    #[error("Modulus must be nonzero")]
    ZeroModulus,

    #[error("No modular inverse exists: operands are not coprime")]
    NoInverseExists,

    #[error("Generation gave up after {attempts} rejection-sampling attempts")]
    GenerationExhausted { attempts: usize },

    #[error("Invalid permutation parameters")]
    InvalidParameters,
}

pub type Result<T> = std::result::Result<T, Error>;
