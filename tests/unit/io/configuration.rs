//! Tests for generator constants and layout validation

#[cfg(test)]
mod tests {
    use bingocard::BingoError;
    use bingocard::io::configuration::{
        BACKGROUND_COLOR, CARD_GAP, CARD_SIZE, CARDS_PER_OUTPUT, CELL_HEIGHT, CELL_WIDTH,
        DEFAULT_ITERATIONS, FREE_SPACE_IMAGE_NAME, GeneratorConfig, IMAGE_EXTENSIONS, INPUT_DIR,
        OUTPUT_DIR, OUTPUT_EXTENSION, OUTPUT_PREFIX,
    };

    // Tests the default layout constants
    #[test]
    fn test_layout_constants() {
        assert_eq!(CELL_WIDTH, 190);
        assert_eq!(CELL_HEIGHT, 165);
        assert_eq!(CARD_SIZE, 5);
        assert_eq!(CARDS_PER_OUTPUT, 2);
        assert_eq!(CARD_GAP, 20);
        assert_eq!(BACKGROUND_COLOR, [255, 255, 255]);
    }

    // Tests file system naming constants
    #[test]
    fn test_naming_constants() {
        assert_eq!(INPUT_DIR, "input");
        assert_eq!(OUTPUT_DIR, "output");
        assert_eq!(OUTPUT_PREFIX, "bingo-card");
        assert_eq!(OUTPUT_EXTENSION, "png");
        assert_eq!(FREE_SPACE_IMAGE_NAME, "freespace.png");
        assert_eq!(IMAGE_EXTENSIONS, ["jpg", "jpeg", "png"]);
        assert_eq!(DEFAULT_ITERATIONS, 5);
    }

    // Tests extensions are stored lowercase for case-insensitive matching
    #[test]
    fn test_image_extensions_lowercase() {
        for ext in IMAGE_EXTENSIONS {
            assert_eq!(ext, ext.to_ascii_lowercase());
        }
    }

    // Tests the default config mirrors the constants
    #[test]
    fn test_default_config_matches_constants() {
        let config = GeneratorConfig::default();

        assert_eq!(config.cell_width, CELL_WIDTH);
        assert_eq!(config.cell_height, CELL_HEIGHT);
        assert_eq!(config.cards_per_output, CARDS_PER_OUTPUT);
        assert_eq!(config.card_gap, CARD_GAP);
        assert_eq!(config.background, BACKGROUND_COLOR);
        assert_eq!(config.free_space_name, FREE_SPACE_IMAGE_NAME);
        assert_eq!(config.output_prefix, OUTPUT_PREFIX);
        assert!(config.validate().is_ok());
    }

    // Tests derived card sizes and cell counts
    #[test]
    fn test_derived_dimensions() {
        let config = GeneratorConfig::default();

        assert_eq!(config.card_width(), 950);
        assert_eq!(config.card_height(), 825);
        assert_eq!(GeneratorConfig::cells_per_card(), 24);
        assert_eq!(config.cells_per_output(), 48);

        let three_cards = GeneratorConfig {
            cards_per_output: 3,
            ..GeneratorConfig::default()
        };
        assert_eq!(three_cards.cells_per_output(), 72);
    }

    // Tests each zero-sized or empty field is rejected by name
    #[test]
    fn test_validate_rejects_degenerate_layouts() {
        let cases = [
            (
                GeneratorConfig {
                    cell_width: 0,
                    ..GeneratorConfig::default()
                },
                "cell_width",
            ),
            (
                GeneratorConfig {
                    cell_height: 0,
                    ..GeneratorConfig::default()
                },
                "cell_height",
            ),
            (
                GeneratorConfig {
                    cards_per_output: 0,
                    ..GeneratorConfig::default()
                },
                "cards_per_output",
            ),
            (
                GeneratorConfig {
                    free_space_name: String::new(),
                    ..GeneratorConfig::default()
                },
                "free_space_name",
            ),
            (
                GeneratorConfig {
                    output_prefix: String::new(),
                    ..GeneratorConfig::default()
                },
                "output_prefix",
            ),
        ];

        for (config, expected) in cases {
            match config.validate() {
                Err(BingoError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => panic!("Expected InvalidParameter for {expected}, got {other:?}"),
            }
        }
    }

    // Tests a zero gap is a valid layout
    #[test]
    fn test_validate_allows_zero_gap() {
        let config = GeneratorConfig {
            card_gap: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
