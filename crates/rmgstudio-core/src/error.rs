//! Error types for RMG Studio

use thiserror::Error;

/// Main error type for RMG Studio operations
#[derive(Error, Debug)]
pub enum StudioError {
    /// General I/O error (reading or writing documents, settings, images)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Template or settings JSON could not be parsed or produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// PNG encoding failed
    #[error("Image encode error: {0}")]
    ImageEncode(#[from] image::ImageError),

    /// Rasterization could not be performed
    #[error("Render error: {0}")]
    Render(String),

    /// Zone was not found in the template
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    /// Zone id is empty or already taken
    #[error("Invalid zone id: {0}")]
    InvalidZoneId(String),

    /// A number that JSON cannot represent (NaN or infinite)
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: String, value: f64 },

    /// List index does not point at an element
    #[error("Index {index} out of range for {what} (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

/// Result type alias using StudioError
pub type StudioResult<T> = Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StudioError::ZoneNotFound("start-1".to_string());
        assert_eq!(format!("{}", err), "Zone not found: start-1");

        let err = StudioError::IndexOutOfRange {
            what: "connections",
            index: 4,
            len: 2,
        };
        assert_eq!(
            format!("{}", err),
            "Index 4 out of range for connections (len 2)"
        );
    }

    #[test]
    fn test_non_finite_display() {
        let err = StudioError::NonFinite {
            field: "armyMultipliers.tier 3".to_string(),
            value: f64::NAN,
        };
        assert_eq!(
            format!("{}", err),
            "armyMultipliers.tier 3 must be a finite number, got NaN"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StudioError = io_err.into();
        assert!(matches!(err, StudioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: StudioError = json_err.into();
        assert!(matches!(err, StudioError::Json(_)));
    }
}
