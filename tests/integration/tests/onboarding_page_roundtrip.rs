use std::sync::Arc;

use docs_onboarding_core::{
    load_page_manifest, ContentNode, MarkupDocument, OnboardingSession, OptionId, OptionState,
    PageCodeContext, ANIMATE_CONTENT_CLASS, ANIMATE_LINE_CLASS,
};
use docs_onboarding_ui::{render_onboarding_page, OnboardingOptionBlock};
use tempfile::TempDir;

fn write_manifest(temp: &TempDir, options: serde_json::Value) -> std::path::PathBuf {
    let path = temp.path().join("page.json");
    let body = serde_json::json!({ "schema_version": 1, "options": options });
    std::fs::write(&path, body.to_string()).expect("write page manifest");
    path
}

#[test]
fn integration_manifest_to_rendered_page_and_toggle_cycle() {
    let temp = TempDir::new().expect("tempdir");
    let manifest = write_manifest(
        &temp,
        serde_json::json!([
            "error-monitoring",
            "performance",
            "profiling",
            {"id": "logs", "checked": true}
        ]),
    );
    let requested = load_page_manifest(&manifest).expect("load manifest");
    let context = Arc::new(PageCodeContext::new());
    let mut session =
        OnboardingSession::new(&requested, Some(context.clone())).expect("session");

    let blocks = [
        OnboardingOptionBlock::new(OptionId::Performance, "<p>tracing setup</p>"),
        OnboardingOptionBlock::new(OptionId::Profiling, "<p>profiling setup</p>"),
        OnboardingOptionBlock::new(OptionId::Logs, "<p>logs off</p>").hidden_for_this_option(),
    ];
    let render = render_onboarding_page(&session, &blocks);
    assert!(render.html.contains("data-option-count=\"4\""));
    assert!(context.is_option_enabled(OptionId::ErrorMonitoring));
    assert!(context.is_option_enabled(OptionId::Logs));

    let mut document = MarkupDocument::new(vec![
        ContentNode::block(OptionId::Performance),
        ContentNode::code_line(OptionId::Profiling),
        ContentNode::block(OptionId::Logs).hidden_for_this_option(),
    ]);
    document.sync(&session.visibility_plan());
    assert!(document.nodes()[0].is_hidden());
    assert!(document.nodes()[1].is_hidden());
    assert!(document.nodes()[2].is_hidden());

    let plan = session.set_checked(OptionId::Profiling, true);
    document.sync(&plan);
    assert!(!document.nodes()[0].is_hidden());
    assert!(document.nodes()[0].has_class(ANIMATE_CONTENT_CLASS));
    assert!(document.nodes()[1].has_class(ANIMATE_LINE_CLASS));
    assert_eq!(document.sync(&plan).changed_nodes, 0);

    session.set_checked(OptionId::Logs, false);
    let plan = session.set_checked(OptionId::Performance, false);
    document.sync(&plan);
    assert!(document.nodes().iter().take(2).all(ContentNode::is_hidden));
    assert!(!document.nodes()[2].is_hidden());
    assert_eq!(
        context.onboarding_options(),
        vec![
            OptionState {
                id: OptionId::ErrorMonitoring,
                checked: true,
                disabled: true,
            },
            OptionState {
                id: OptionId::Performance,
                checked: false,
                disabled: false,
            },
            OptionState {
                id: OptionId::Profiling,
                checked: false,
                disabled: false,
            },
            OptionState {
                id: OptionId::Logs,
                checked: false,
                disabled: false,
            },
        ]
    );
}
