//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use bingocard::BingoError;
    use bingocard::io::error::{file_system, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests the missing free-space message names file and directory
    #[test]
    fn test_missing_free_space_message() {
        let error = BingoError::MissingFreeSpace {
            directory: PathBuf::from("input"),
            file_name: "freespace.png".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("freespace.png"));
        assert!(message.contains("input"));
        assert!(error.source().is_none());
    }

    // Tests the insufficient image message reports found and required counts
    #[test]
    fn test_insufficient_images_message() {
        let error = BingoError::InsufficientImages {
            found: 47,
            required: 48,
        };

        assert_eq!(error.to_string(), "Too few input images (47/48)");
    }

    // Tests the empty input directory message includes the path
    #[test]
    fn test_empty_input_directory_message() {
        let error = BingoError::EmptyInputDirectory {
            path: PathBuf::from("some/input"),
        };

        assert!(error.to_string().contains("some/input"));
    }

    // Tests the helper fills every InvalidParameter field
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("cell_width", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("cell_width"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests file system errors keep path, operation, and source
    #[test]
    fn test_file_system_helper_chains_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = file_system("/tmp/output", "list directory")(io_error);

        let message = error.to_string();
        assert!(message.contains("list directory"));
        assert!(message.contains("/tmp/output"));
        assert!(message.contains("gone"));
        assert!(error.source().is_some());
    }

    // Tests image errors expose the underlying image error
    #[test]
    fn test_image_export_error_source() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = BingoError::ImageExport {
            path: PathBuf::from("/restricted/bingo-card-1.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/bingo-card-1.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests the exhausted sample message states how many images a card needs
    #[test]
    fn test_sample_exhausted_message() {
        let error = BingoError::SampleExhausted { needed: 24 };

        assert!(error.to_string().contains("24"));
        assert!(error.source().is_none());
    }

    // Tests the exhausted output index message names the directory
    #[test]
    fn test_output_index_exhausted_message() {
        let error = BingoError::OutputIndexExhausted {
            directory: PathBuf::from("cards"),
        };

        assert!(error.to_string().contains("'cards'"));
        assert!(error.source().is_none());
    }
}
