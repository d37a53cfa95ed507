//! Integration tests for configuration tokens and settings snapshots.

use logging::{
    ConfigError, DEFAULT_SOURCE_PREFIX, DEFAULT_SUPPRESS_BEFORE_DATE,
    DEFAULT_USE_CRASH_REPORT_SINK, LoggerConfig, LoggerSettings,
};

#[test]
fn defaults_match_constants() {
    let settings = LoggerConfig::default().settings();
    assert!(settings.enabled);
    assert_eq!(settings.suppress_before_date, DEFAULT_SUPPRESS_BEFORE_DATE);
    assert!(!settings.use_color_output);
    assert_eq!(settings.use_crash_report_sink, DEFAULT_USE_CRASH_REPORT_SINK);
    assert_eq!(settings.source_prefix, DEFAULT_SOURCE_PREFIX);
    assert_eq!(settings, LoggerSettings::default());
}

#[test]
fn tokens_update_every_field() {
    let config = LoggerConfig::default();
    config
        .apply_settings([
            "enabled=off",
            "suppress_before=2016-Jan-01",
            "color=yes",
            "crash_report=0",
            "prefix=APP",
        ])
        .expect("valid tokens");

    assert_eq!(
        config.settings(),
        LoggerSettings {
            enabled: false,
            suppress_before_date: "2016-Jan-01".to_owned(),
            use_color_output: true,
            use_crash_report_sink: false,
            source_prefix: "APP".to_owned(),
        }
    );
}

#[test]
fn threshold_tokens_are_normalized() {
    let config = LoggerConfig::default();
    config
        .apply_setting(" suppress_before = 2016-jan-1 ")
        .expect("valid date");
    assert_eq!(config.suppress_before_date(), "2016-Jan-01");
}

#[test]
fn empty_prefix_token_clears_prefix() {
    let config = LoggerConfig::default();
    config.apply_setting("prefix=").expect("empty prefix");
    assert_eq!(config.source_prefix(), "");
}

#[test]
fn rejected_tokens_leave_config_untouched() {
    let config = LoggerConfig::default();
    let before = config.settings();

    assert!(matches!(config.apply_setting("   "), Err(ConfigError::Empty)));
    assert!(matches!(
        config.apply_setting("color"),
        Err(ConfigError::MissingValue(token)) if token == "color"
    ));
    assert!(matches!(
        config.apply_setting("volume=11"),
        Err(ConfigError::UnknownKey(key)) if key == "volume"
    ));
    assert!(matches!(
        config.apply_setting("enabled=maybe"),
        Err(ConfigError::InvalidBool { key, value }) if key == "enabled" && value == "maybe"
    ));
    let err = config
        .apply_setting("suppress_before=2016-07-28")
        .expect_err("numeric month");
    assert!(err.to_string().contains("2016-07-28"));

    assert_eq!(config.settings(), before);
}

#[test]
fn apply_settings_stops_at_first_error() {
    let config = LoggerConfig::default();
    let result = config.apply_settings(["color=on", "bogus", "prefix=LATE"]);
    assert!(result.is_err());
    assert!(config.use_color_output());
    assert_eq!(config.source_prefix(), DEFAULT_SOURCE_PREFIX);
}

#[test]
fn apply_replaces_all_values() {
    let config = LoggerConfig::default();
    let settings = LoggerSettings {
        enabled: false,
        suppress_before_date: "2019-Feb-03".to_owned(),
        use_color_output: true,
        use_crash_report_sink: true,
        source_prefix: String::new(),
    };
    config.apply(settings.clone());
    assert_eq!(config.settings(), settings);
    assert_eq!(LoggerConfig::from_settings(settings.clone()).settings(), settings);
}

#[cfg(feature = "serde")]
#[test]
fn settings_deserialize_with_defaults() {
    let settings: LoggerSettings =
        serde_json::from_str(r#"{"suppress_before_date":"2016-Jan-01","use_color_output":true}"#)
            .expect("valid json");
    assert!(settings.enabled);
    assert_eq!(settings.suppress_before_date, "2016-Jan-01");
    assert!(settings.use_color_output);
    assert_eq!(settings.source_prefix, DEFAULT_SOURCE_PREFIX);

    let json = serde_json::to_string(&settings).expect("serialize");
    let back: LoggerSettings = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, settings);
}

#[cfg(feature = "serde")]
#[test]
fn categories_serialize_by_name() {
    use logging::Category;

    let json = serde_json::to_string(&Category::ToBeReviewed).expect("serialize");
    assert_eq!(json, r#""to_be_reviewed""#);
    let parsed: Category = serde_json::from_str(r#""critical""#).expect("deserialize");
    assert_eq!(parsed, Category::Critical);
}
