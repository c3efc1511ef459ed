//! `assess_risk` tool handler — context assembly and response rendering.

use tracing::warn;

use crate::git;
use crate::risk::{AssessmentContext, RiskAssessment, RiskClient};

use super::server::AssessRiskParams;

/// Handle an `assess_risk` invocation end to end.
///
/// Assembles the assessment context from the caller's arguments, resolving
/// `repo_full_name` from the local git remote when the caller supplied a
/// current file but no repository identifier, then calls the risk API and
/// renders the result as a markdown text block.
pub async fn handle_assess_risk(client: &RiskClient, p: AssessRiskParams) -> String {
    let mut context = AssessmentContext {
        current_file: p.current_file,
        other_files: p.other_files.filter(|files| !files.is_empty()),
        weights: p.weights,
        repo_full_name: None,
    };

    // The context-aware endpoint wants a repository identifier; prefer the
    // caller's value, fall back to the local git remote.
    if context.current_file.is_some() {
        context.repo_full_name = p.repo_full_name.or_else(git::resolve_repo_full_name);
        if context.repo_full_name.is_none() {
            warn!("no repo_full_name supplied and none resolvable from git; proceeding without");
        }
    }

    let assessment = if context.is_empty() {
        client.assess(&p.prompt, None).await
    } else {
        client.assess(&p.prompt, Some(&context)).await
    };

    render_assessment(&p.prompt, &context, &assessment)
}

/// Render an assessment as the single markdown text block returned to the
/// calling assistant.
pub fn render_assessment(
    prompt: &str,
    context: &AssessmentContext,
    assessment: &RiskAssessment,
) -> String {
    let mut out = String::from("🔍 **Orcho - Risk Assessment**\n\n");
    out.push_str(&format!("**Your Prompt:**\n{prompt}\n\n"));

    if let Some(ref current_file) = context.current_file {
        out.push_str("**Context Used:**\n");
        out.push_str(&format!("- Current File: {current_file}\n"));
        if let Some(ref other_files) = context.other_files {
            if !other_files.is_empty() {
                out.push_str(&format!("- Other Files: {}\n", other_files.join(", ")));
            }
        }
        out.push('\n');
    }

    out.push_str("---\n");
    out.push_str(&format!(
        "**Risk Level:** {}\n",
        assessment.level.as_str().to_uppercase()
    ));
    out.push_str(&format!("**Risk Score:** {}/100\n", assessment.score));

    match assessment.details {
        Some(ref details) => {
            let dump = serde_json::to_string_pretty(details).unwrap_or_default();
            out.push_str(&format!("\n**Details:**\n```json\n{dump}\n```\n"));
        }
        None => {
            out.push_str("\n⚠️ Assessment unavailable (API error or empty prompt)\n");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskLevel;
    use serde_json::json;

    #[test]
    fn renders_level_score_and_details() {
        let assessment = RiskAssessment {
            level: RiskLevel::High,
            score: 82,
            details: Some(json!({"overall_risk_level": "HIGH", "overall_score": 0.82})),
        };
        let text = render_assessment("refactor login.js", &AssessmentContext::default(), &assessment);

        assert!(text.contains("**Your Prompt:**\nrefactor login.js"));
        assert!(text.contains("**Risk Level:** HIGH"));
        assert!(text.contains("**Risk Score:** 82/100"));
        assert!(text.contains("```json"));
        assert!(text.contains("\"overall_score\": 0.82"));
        assert!(!text.contains("Context Used"));
    }

    #[test]
    fn renders_unavailable_notice_without_details() {
        let text = render_assessment(
            "anything",
            &AssessmentContext::default(),
            &RiskAssessment::default(),
        );
        assert!(text.contains("**Risk Level:** LOW"));
        assert!(text.contains("**Risk Score:** 0/100"));
        assert!(text.contains("Assessment unavailable"));
        assert!(!text.contains("```json"));
    }

    #[test]
    fn renders_context_summary_when_current_file_set() {
        let context = AssessmentContext {
            current_file: Some("src/a.ts".into()),
            other_files: Some(vec!["src/b.ts".into(), "src/c.ts".into()]),
            ..Default::default()
        };
        let text = render_assessment("p", &context, &RiskAssessment::default());
        assert!(text.contains("**Context Used:**"));
        assert!(text.contains("- Current File: src/a.ts"));
        assert!(text.contains("- Other Files: src/b.ts, src/c.ts"));
    }
}
