//! Loading route tables from TOML and JSON files.

use model_router::config::{load_config, load_or_default, ConfigError, ConfigSource, Tier, ValidationError};
use model_router::routing::{Action, Strategy};
use model_router::IntentRouter;

mod common;

const TOML_CONFIG: &str = r#"
default_target = "haiku"

[[strong]]
name = "security"
target = "opus"
patterns = ["Threat Model"]

[[medium]]
name = "writing"
target = "sonnet"
patterns = ["draft", "essay", "edit"]

[[medium]]
name = "lookup"
target = "kimi"
patterns = ["search", "find"]
min_matches = 1
"#;

#[test]
fn test_toml_file_drives_routing() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_config(dir.path(), "router.toml", TOML_CONFIG);

    let config = load_config(&path).unwrap();
    let router = IntentRouter::new(&config).unwrap();

    let decision = router.route("build a THREAT MODEL");
    assert_eq!(decision.target, "opus");
    assert_eq!(decision.strategy, Strategy::Strong);

    let decision = router.route("draft an essay");
    assert_eq!(decision.target, "sonnet");
    assert_eq!(decision.confidence, Some(2.0 / 3.0));

    // "edit" alone is one hit against the default minimum of 2.
    let decision = router.route("edit this");
    assert_eq!(decision.action, Action::Continue);
    assert_eq!(decision.target, "haiku");

    let decision = router.route("search the docs");
    assert_eq!(decision.target, "kimi");
}

#[test]
fn test_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_config(
        dir.path(),
        "config.json",
        r#"{
            "default_target": "kimi",
            "auto_route": false,
            "strong": [],
            "medium": [{"name": "codex", "target": "codex", "patterns": ["code", "bug"]}]
        }"#,
    );

    let config = load_config(&path).unwrap();
    assert!(!config.auto_route);

    let router = IntentRouter::new(&config).unwrap();
    assert_eq!(router.route("code bug").action, Action::Continue);
    assert_eq!(router.route("/fast code bug").target, "haiku");
}

#[test]
fn test_invalid_file_reports_every_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_config(
        dir.path(),
        "bad.toml",
        r#"
        default_target = ""

        [[medium]]
        name = "empty"
        target = "x"
        patterns = []

        [[medium]]
        name = "strict"
        target = "y"
        patterns = ["a"]
        "#,
    );

    let errors = match load_config(&path) {
        Err(ConfigError::Invalid(errors)) => errors,
        other => panic!("expected validation failure, got {other:?}"),
    };
    assert_eq!(
        errors,
        vec![
            ValidationError::EmptyDefaultTarget,
            ValidationError::NoPatterns {
                tier: Tier::Medium,
                route: "empty".into(),
            },
            // One pattern can never reach the default minimum of two.
            ValidationError::UnreachableMinMatches {
                tier: Tier::Medium,
                route: "strict".into(),
                min_matches: 2,
                patterns: 1,
            },
        ]
    );
}

#[test]
fn test_missing_required_field_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_config(
        dir.path(),
        "router.toml",
        r#"
        [[strong]]
        name = "opus"
        patterns = ["architecture"]
        "#,
    );

    assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn test_explicit_path_reports_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_config(dir.path(), "router.toml", TOML_CONFIG);

    let (config, source) = load_or_default(Some(&path)).unwrap();
    assert_eq!(config.default_target, "haiku");
    assert_eq!(source, ConfigSource::File(path));
}
