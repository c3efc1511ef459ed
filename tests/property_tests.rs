//! Property-based tests using proptest.
//!
//! These verify invariants that must hold for all possible inputs: score
//! normalization always lands in [0, 100], level mapping is total, and
//! remote-URL parsing never panics.

use proptest::prelude::*;
use serde_json::json;

use orcho_mcp::config::OrchoConfig;
use orcho_mcp::git::parse_remote_url;
use orcho_mcp::risk::{build_request, normalize_response, AssessmentContext, RiskLevel};

proptest! {
    #[test]
    fn score_is_always_in_range(score in -1000.0f64..1000.0) {
        let result = normalize_response(json!({"overall_score": score}));
        prop_assert!(result.score <= 100);
    }

    #[test]
    fn fractional_scores_scale_by_one_hundred(score in 0.0f64..1.0) {
        let result = normalize_response(json!({"overall_score": score}));
        prop_assert_eq!(result.score as f64, (score * 100.0).round().clamp(0.0, 100.0));
    }

    #[test]
    fn integral_scores_round_directly(score in 1.0f64..100.0) {
        let result = normalize_response(json!({"overall_score": score}));
        prop_assert_eq!(result.score as f64, score.round());
    }

    #[test]
    fn arbitrary_level_strings_never_panic(level in ".*") {
        let result = normalize_response(json!({"overall_risk_level": level.clone()}));
        let expected_high = level.eq_ignore_ascii_case("high")
            || level.eq_ignore_ascii_case("critical");
        prop_assert_eq!(result.level == RiskLevel::High, expected_high);
    }

    #[test]
    fn remote_url_parsing_never_panics(url in ".*") {
        // Result is either absent or a non-empty identifier
        if let Some(id) = parse_remote_url(&url) {
            prop_assert!(!id.is_empty());
            prop_assert!(id.split('/').count() <= 2);
        }
    }

    #[test]
    fn basic_requests_never_contain_a_context_object(prompt in ".+") {
        let config = OrchoConfig::default();
        let (_, body) = build_request(&config, &prompt, None);
        prop_assert!(body.get("context").is_none());
        prop_assert_eq!(body.get("prompt").and_then(|v| v.as_str()), Some(prompt.as_str()));
    }

    #[test]
    fn context_requests_always_carry_current_file(file in "[a-z/.]{1,40}") {
        let config = OrchoConfig::default();
        let context = AssessmentContext {
            current_file: Some(file.clone()),
            ..Default::default()
        };
        let (url, body) = build_request(&config, "task", Some(&context));
        prop_assert!(url.ends_with("generate-risk-with-context"));
        prop_assert_eq!(
            body["context"]["current_file"].as_str(),
            Some(file.as_str())
        );
    }
}
