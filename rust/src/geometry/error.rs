use thiserror::Error;

/// Errors raised by shape arithmetic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{operation} does not fit the coordinate type: {lhs} {symbol} {rhs}")]
    Overflow {
        operation: &'static str,
        symbol: char,
        lhs: String,
        rhs: String,
    },
}

impl GeometryError {
    pub(crate) fn overflow(
        operation: &'static str,
        symbol: char,
        lhs: impl ToString,
        rhs: impl ToString,
    ) -> Self {
        Self::Overflow {
            operation,
            symbol,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }
}
