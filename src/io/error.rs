//! Error types for packing verification and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all packing operations
///
/// Malformed-tiling variants are raised only by the verifier against
/// externally supplied or corrupted grids and are always recoverable;
/// exhaustion of a search is not an error at all and is reported through
/// `SearchOutcome` instead.
#[derive(Debug)]
pub enum PackingError {
    /// A cell of a supposed tiling is still empty
    IncompleteTiling {
        /// Row of the first empty cell found
        row: usize,
        /// Column of the first empty cell found
        col: usize,
    },

    /// A label region's claimed footprint is broken or leaves the grid
    BrokenSquare {
        /// Row of the region's top-left corner
        row: usize,
        /// Column of the region's top-left corner
        col: usize,
        /// Side length claimed by the top-edge label run
        size: usize,
    },

    /// A label region is a taller rectangle masquerading as a square
    NonSquareRegion {
        /// Row of the region's top-left corner
        row: usize,
        /// Column of the region's top-left corner
        col: usize,
        /// Side length claimed by the top-edge label run
        size: usize,
    },

    /// A reconstructed square's size is not in the allowed set
    ForbiddenSize {
        /// The disallowed side length
        size: usize,
        /// Row of the square's top-left corner
        row: usize,
        /// Column of the square's top-left corner
        col: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered witness image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteTiling { row, col } => {
                write!(f, "Incomplete tiling: cell ({row}, {col}) is not filled")
            }
            Self::BrokenSquare { row, col, size } => {
                write!(
                    f,
                    "Broken or incomplete square of claimed size {size} at ({row}, {col})"
                )
            }
            Self::NonSquareRegion { row, col, size } => {
                write!(
                    f,
                    "Non-square rectangle: region at ({row}, {col}) extends below its claimed size {size}"
                )
            }
            Self::ForbiddenSize { size, row, col } => {
                write!(f, "Forbidden square size {size} at ({row}, {col})")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PackingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for packing results
pub type Result<T> = std::result::Result<T, PackingError>;

impl From<std::io::Error> for PackingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackingError {
    PackingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::PackingError;

    #[test]
    fn test_verifier_errors_carry_coordinates() {
        let err = PackingError::ForbiddenSize {
            size: 4,
            row: 0,
            col: 0,
        };
        assert_eq!(err.to_string(), "Forbidden square size 4 at (0, 0)");

        let err = PackingError::NonSquareRegion {
            row: 2,
            col: 1,
            size: 3,
        };
        assert!(err.to_string().contains("(2, 1)"));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_file_system_error_exposes_source() {
        use std::error::Error as _;

        let err = PackingError::FileSystem {
            path: "output".into(),
            operation: "create directory",
            source: std::io::Error::other("disk full"),
        };
        assert!(err.source().is_some());
    }
}
