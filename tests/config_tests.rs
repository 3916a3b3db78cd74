use tempfile::TempDir;
use wwp::AppError;
use wwp::cli::OutputFormat;
use wwp::config::Config;

#[test]
fn load_custom_creates_default_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config::load_custom(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(path.exists());

    // A second load reads the file it just wrote
    let reloaded = Config::load_custom(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.general.format = OutputFormat::Json;
    config.general.max_count = 5000;
    config.random.seed = Some(1234);
    config.spiral.dot_size = 3;
    config.graph.width = 60;
    config.save_to(&path).unwrap();

    let loaded = Config::load_custom(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn invalid_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general\ncolor = ").unwrap();

    assert!(matches!(Config::load_custom(&path), Err(AppError::Config(_))));
}

#[test]
fn invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[spiral]\ncoordinate_range = 0.0\n").unwrap();

    assert!(matches!(Config::load_custom(&path), Err(AppError::Config(_))));
}

#[test]
fn unknown_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general]\nformat = \"yaml\"\n").unwrap();

    assert!(Config::load_custom(&path).is_err());
}
