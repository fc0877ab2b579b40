//! End-to-end routing scenarios against the built-in route tables.

use model_router::routing::{Action, Strategy};
use model_router::config::RouteConfig;
use model_router::{Decision, IntentRouter, RouterConfig};

fn route(task: &str) -> Decision {
    IntentRouter::new(&RouterConfig::default())
        .unwrap()
        .route(task)
}

#[test]
fn test_builtin_table() {
    let cases = [
        // Explicit prefixes
        ("/code review this", "codex", Strategy::Prefix),
        ("/deep analyze architecture", "opus", Strategy::Prefix),
        ("/research find latest papers", "kimi", Strategy::Prefix),
        ("/fast quick question", "haiku", Strategy::Prefix),
        ("/cheap low priority task", "kimi-free", Strategy::Prefix),
        // Strong keywords
        ("review the architecture", "opus", Strategy::Strong),
        ("perform security audit", "opus", Strategy::Strong),
        ("debug this function", "codex", Strategy::Strong),
        ("refactor this code", "codex", Strategy::Strong),
        ("design the code architecture", "opus", Strategy::Strong),
        // Medium keywords
        ("design a distributed system", "opus", Strategy::Medium),
        ("review this code for bugs", "codex", Strategy::Medium),
        ("research and find latest info", "kimi", Strategy::Medium),
        ("DESIGN A DISTRIBUTED SYSTEM", "opus", Strategy::Medium),
        // Fallback
        ("", "kimi", Strategy::Fallback),
        ("hello world", "kimi", Strategy::Fallback),
        ("design something", "kimi", Strategy::Fallback),
        ("just a normal message", "kimi", Strategy::Fallback),
    ];

    for (input, target, strategy) in cases {
        let decision = route(input);
        assert_eq!(decision.target, target, "input: {input:?}");
        assert_eq!(decision.strategy, strategy, "input: {input:?}");
    }
}

#[test]
fn test_prefix_scenario() {
    let decision = route("/code review this");
    assert_eq!(decision.action, Action::Switch);
    assert_eq!(decision.target, "codex");
    assert!(decision.reason.contains("prefix"));
    assert_eq!(decision.confidence, Some(1.0));
}

#[test]
fn test_strong_scenario() {
    let decision = route("perform security audit");
    assert_eq!(decision.action, Action::Switch);
    assert_eq!(decision.target, "opus");
    assert_eq!(decision.confidence, Some(0.9));
}

#[test]
fn test_medium_scenario_confidence() {
    let decision = route("design a distributed system");
    assert_eq!(decision.action, Action::Switch);
    assert_eq!(decision.target, "opus");
    assert_eq!(decision.confidence, Some(2.0 / 7.0));
    assert_eq!(decision.reason, "2 medium keywords");
}

#[test]
fn test_single_medium_hit_falls_back() {
    let decision = route("design something");
    assert_eq!(decision.action, Action::Continue);
    assert_eq!(decision.target, "kimi");
    assert_eq!(decision.confidence, None);
}

#[test]
fn test_empty_input_falls_back() {
    let decision = route("");
    assert_eq!(decision.action, Action::Continue);
    assert_eq!(decision.target, "kimi");
    assert_eq!(decision.reason, "no route match, using default");
}

#[test]
fn test_case_insensitive_decisions_match() {
    assert_eq!(
        route("DESIGN A DISTRIBUTED SYSTEM"),
        route("design a distributed system")
    );
    assert_eq!(route("PERFORM Security Audit"), route("perform security audit"));
}

#[test]
fn test_uppercase_prefix_alias() {
    for input in ["/CODE test", "/Code test", "/code test"] {
        let decision = route(input);
        assert_eq!(decision.target, "codex");
        assert_eq!(decision.strategy, Strategy::Prefix);
    }
}

#[test]
fn test_prefix_wins_regardless_of_content() {
    let decision = route("/cheap perform a security audit of the distributed design");
    assert_eq!(decision.target, "kimi-free");
}

#[test]
fn test_decision_json_contract() {
    let json = serde_json::to_value(route("perform security audit")).unwrap();
    assert_eq!(json["action"], "switch");
    assert_eq!(json["target"], "opus");
    assert_eq!(json["confidence"], 0.9);
    assert!(json.get("strategy").is_none());

    let json = serde_json::to_value(route("")).unwrap();
    assert_eq!(json["action"], "continue");
    assert!(json.get("confidence").is_none());
}

#[test]
fn test_padded_pattern_matches_whole_word_only() {
    let mut config = RouterConfig::default();
    config.strong = vec![RouteConfig::new("tester", "tester", &[" test "])];
    let router = IntentRouter::new(&config).unwrap();

    let decision = router.route("find the latest news");
    assert_ne!(decision.target, "tester");

    let decision = router.route("write a test for this");
    assert_eq!(decision.target, "tester");
    assert_eq!(decision.reason, "strong keyword match: ' test '");
}
