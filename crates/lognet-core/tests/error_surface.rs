use lognet_core::errors::{ErrorInfo, FlowError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("node", "Warehouse 1")
        .with_context("index", 3)
}

#[test]
fn config_error_surface() {
    let err = FlowError::Config(sample_info("unknown-node", "edge references an unknown node"));
    assert_eq!(err.code(), "unknown-node");
    assert_eq!(err.info().context.get("node"), Some(&"Warehouse 1".to_string()));
    assert_eq!(err.info().context.get("index"), Some(&"3".to_string()));
}

#[test]
fn context_builder_preserves_family() {
    let err = FlowError::graph("non-square-matrix", "capacity matrix must be square")
        .with_context("row", 2)
        .with_hint("pad every row to the node count");
    match &err {
        FlowError::Graph(info) => {
            assert_eq!(info.context.get("row"), Some(&"2".to_string()));
            assert_eq!(info.hint.as_deref(), Some("pad every row to the node count"));
        }
        other => panic!("unexpected family: {other:?}"),
    }
}

#[test]
fn display_renders_context_and_hint() {
    let err = FlowError::config("terminal-overlap", "terminal sets overlap")
        .with_context("node", "Terminal 1")
        .with_hint("remove the node from one set");
    let rendered = err.to_string();
    assert!(rendered.starts_with("config error: terminal sets overlap (code: terminal-overlap)"));
    assert!(rendered.contains("node=Terminal 1"));
    assert!(rendered.ends_with("| hint: remove the node from one set"));
}

#[test]
fn errors_round_trip_json() {
    let err = FlowError::Graph(sample_info("index-out-of-range", "index outside matrix"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Graph\""));
    let decoded: FlowError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
