//! Error types for field arithmetic, linear algebra and Reed-Solomon coding

use thiserror::Error;

/// Errors that can occur while building fields or computing over them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GfError {
    /// Bad characteristic, degree or reduction polynomial
    #[error("Invalid field parameters: {0}")]
    InvalidFieldParameters(String),

    /// No element of full multiplicative order exists (malformed field)
    #[error("No primitive element found in field of order {order}")]
    NoPrimitiveElementFound { order: u64 },

    /// Coefficient outside `[0, p)`
    #[error("Coefficient {coefficient} is out of range for characteristic {characteristic}")]
    OutOfRangeCoefficient { coefficient: i64, characteristic: u32 },

    /// More coefficients than the field degree allows
    #[error("Expected at most {degree} coefficients, got {got}")]
    TooManyCoefficients { got: usize, degree: usize },

    /// Operands belong to different fields
    #[error("Cannot combine elements from different fields")]
    FieldMismatch,

    /// Divisor is the additive identity
    #[error("Division by zero")]
    DivisionByZero,

    /// No usable pivot during elimination
    #[error("Singular system: no pivot in column {column}")]
    SingularSystem { column: usize },

    /// Matrix and vector shapes do not line up
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Discrete logarithm of the additive identity
    #[error("Discrete logarithm of zero is undefined")]
    LogOfZero,

    /// Operation needs discrete-log tables but the field was built without them
    #[error("Field has no discrete-log table")]
    MissingLogTable,

    /// Bad code length, message length or evaluation points
    #[error("Invalid Reed-Solomon parameters: {0}")]
    InvalidCodeParameters(String),

    /// Input sequence has the wrong length
    #[error("Expected {expected} symbols, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Received word cannot be decoded within the error bound
    #[error("Decoding failed: {0}")]
    DecodingFailure(String),
}

/// Type alias for Result with GfError
pub type Result<T> = std::result::Result<T, GfError>;
