//! Error conversion implementations.
//!
//! Maps the format-layer error onto the unified [`Error`] type.

use super::types::Error;
use crate::ooxml::error::OoxmlError;

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Zip(e) => Error::ZipError(e.to_string()),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::InvalidGeometry(s) => Error::InvalidGeometry(s),
            OoxmlError::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            } => Error::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            },
            OoxmlError::PartNotFound(s) => Error::ComponentNotFound(s),
            OoxmlError::InvalidContentType { expected, got } => {
                Error::InvalidContentType { expected, got }
            },
            OoxmlError::InvalidFormat(s) => Error::InvalidFormat(s),
            OoxmlError::Other(s) => Error::Other(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_keeps_message() {
        let err: Error = OoxmlError::InvalidGeometry("width is negative".to_string()).into();
        assert!(matches!(err, Error::InvalidGeometry(ref s) if s == "width is negative"));
    }

    #[test]
    fn test_io_error_passes_through() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = OoxmlError::Io(io).into();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_cell_out_of_range_display() {
        let err: Error = OoxmlError::CellOutOfRange {
            row: 4,
            col: 0,
            rows: 4,
            cols: 3,
        }
        .into();
        assert_eq!(err.to_string(), "Cell (4, 0) out of range for a 4x3 table");
    }
}
