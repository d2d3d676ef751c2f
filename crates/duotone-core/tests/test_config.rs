use duotone_core::color::Rgb;
use duotone_core::error::DuotoneError;
use duotone_core::pipeline::config::{PipelineConfig, ResizeConfig};

#[test]
fn test_default_config_values() {
    let config = PipelineConfig::default();
    assert_eq!(config.resize.max_longest_edge, 1000);
    assert_eq!(config.resize.min_shortest_edge, 300);
    assert_eq!(config.contrast_factor, 1.5);
    assert_eq!(config.dark_color, Rgb::new(27, 96, 47));
    assert_eq!(config.light_color, Rgb::new(247, 132, 197));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_toml_roundtrip() {
    let config = PipelineConfig {
        resize: ResizeConfig {
            max_longest_edge: 1200,
            min_shortest_edge: 256,
        },
        contrast_factor: 2.0,
        dark_color: Rgb::new(0, 0, 0),
        light_color: Rgb::new(255, 200, 0),
    };
    let text = toml::to_string_pretty(&config).unwrap();
    assert!(text.contains("light_color = \"#ffc800\""), "got:\n{text}");
    let parsed: PipelineConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let parsed: PipelineConfig = toml::from_str(
        r##"
contrast_factor = 1.2
dark_color = "#000"

[resize]
min_shortest_edge = 128
"##,
    )
    .unwrap();
    assert_eq!(parsed.contrast_factor, 1.2);
    assert_eq!(parsed.dark_color, Rgb::BLACK);
    assert_eq!(parsed.light_color, Rgb::new(247, 132, 197));
    assert_eq!(parsed.resize.max_longest_edge, 1000);
    assert_eq!(parsed.resize.min_shortest_edge, 128);
}

#[test]
fn test_config_empty_toml_is_default() {
    let parsed: PipelineConfig = toml::from_str("").unwrap();
    assert_eq!(parsed, PipelineConfig::default());
}

#[test]
fn test_config_rejects_bad_color() {
    let result: Result<PipelineConfig, _> = toml::from_str("dark_color = \"#12345z\"");
    let err = result.unwrap_err().to_string();
    assert!(err.contains("Invalid color format"), "got: {err}");
}

#[test]
fn test_config_validate_factor() {
    let config = PipelineConfig {
        contrast_factor: -1.0,
        ..PipelineConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(DuotoneError::InvalidParameter(_))
    ));
}

#[test]
fn test_config_validate_bounds() {
    let config = PipelineConfig {
        resize: ResizeConfig {
            max_longest_edge: 1000,
            min_shortest_edge: 0,
        },
        ..PipelineConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(DuotoneError::InvalidParameter(_))
    ));
}
