use sabda::infrastructure::observability::TracingConfig;
use sabda::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_copies_format_and_level() {
    let settings = LoggingSettings {
        level: Some("warn,sabda=info".to_string()),
        json: true,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert_eq!(config.environment, Environment::Prod);
    assert!(config.json_format);
    assert_eq!(config.level.as_deref(), Some("warn,sabda=info"));
}

#[test]
fn given_blank_level_when_building_config_then_level_is_unset() {
    let settings = LoggingSettings {
        level: Some("   ".to_string()),
        json: false,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Local);

    assert!(config.level.is_none());
}
