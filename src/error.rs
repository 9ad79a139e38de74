/// Broad category of a [`ProbError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller handed the constructor something it cannot build a table from.
    InvalidArgument,
    /// A draw hit a table that a public constructor could never have produced.
    RuntimeError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbError {
    Empty,
    NonPositive { index: usize, weight: i32 },
    EmptyTable,
    OutOfBounds { index: usize, len: usize },
}

impl ProbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProbError::Empty | ProbError::NonPositive { .. } => ErrorKind::InvalidArgument,
            ProbError::EmptyTable | ProbError::OutOfBounds { .. } => ErrorKind::RuntimeError,
        }
    }
}

impl std::fmt::Display for ProbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbError::Empty => write!(f, "input weight table is empty"),
            ProbError::NonPositive { index, weight } => {
                write!(
                    f,
                    "weight must be positive, got {weight} at index {index}"
                )
            }
            ProbError::EmptyTable => write!(f, "cannot pick from an empty table"),
            ProbError::OutOfBounds { index, len } => {
                write!(f, "chosen index {index} out of bounds for {len} entries")
            }
        }
    }
}

impl std::error::Error for ProbError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(ProbError::Empty.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            ProbError::NonPositive { index: 2, weight: -1 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(ProbError::EmptyTable.kind(), ErrorKind::RuntimeError);
        assert_eq!(
            ProbError::OutOfBounds { index: 4, len: 4 }.kind(),
            ErrorKind::RuntimeError
        );
    }

    #[test]
    fn display_names_offender() {
        let msg = ProbError::NonPositive { index: 3, weight: 0 }.to_string();
        assert_eq!(msg, "weight must be positive, got 0 at index 3");
    }
}
