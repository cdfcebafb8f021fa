// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use tempfile::tempdir;
use toastdeck::config::{self, Settings};
use toastdeck::diagnostics::LifecycleEvent;
use toastdeck::ui::notifications::{classes, ActionConfig, NotificationConfig, Notifier};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_settings_drive_notifier_timing() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings_path = dir.path().join("settings.toml");

    let settings = Settings {
        show_delay_ms: Some(10),
        autotimeout_ms: Some(100),
        remove_delay_ms: Some(20),
        default_stack: Some("corner".to_string()),
        ..Settings::default()
    };
    config::save_to_path(&settings, &settings_path).expect("Failed to write settings file");
    let loaded = config::load_from_path(&settings_path).expect("Failed to load settings");
    assert_eq!(loaded, settings);

    let mut notifier = Notifier::with_settings(loaded);
    let root = notifier
        .send(NotificationConfig::new().with_title("Fast").with_id("fast"))
        .root()
        .expect("rendered");
    assert!(notifier.stack("corner").is_some());

    notifier.advance(ms(10));
    assert!(notifier.document().has_class(root, classes::ACTIVE));
    notifier.advance(ms(90));
    assert!(!notifier.document().has_class(root, classes::ACTIVE));
    notifier.advance(ms(20));
    assert!(!notifier.has("fast"));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_invalid_settings_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings_path = dir.path().join("settings.toml");
    std::fs::write(&settings_path, "show_delay_ms = \"soon\"").expect("Failed to write file");

    let loaded = config::load_from_path(&settings_path).expect("Fallback should succeed");
    assert_eq!(loaded, Settings::default());
}

#[test]
fn test_json_config_renders_full_markup() {
    let config = NotificationConfig::from_json(
        r#"{
            "id": "upload",
            "title": "Upload done",
            "text": "3 files",
            "status": "success",
            "action": {"title": "Open", "url": "/files", "classes": ["btn"]},
            "showCloseButton": false
        }"#,
    )
    .expect("valid JSON");

    let mut notifier = Notifier::new();
    notifier.send(config);
    notifier.advance(ms(50));

    let html = notifier.document().to_string();
    assert!(html.starts_with("<body><div class=\"notification-stack-default\">"));
    assert!(html.contains("class=\"notification notification-fade success active\""));
    assert!(html.contains("<div class=\"notification-title\">Upload done</div>"));
    assert!(html.contains("<a class=\"btn\" href=\"/files\">Open</a>"));
    assert!(html.contains("animation-duration: 5000ms"));
    assert!(!html.contains(classes::CLOSE));

    let notification = notifier.get("upload").expect("registered");
    assert_eq!(
        notification.get_config("action.url", &serde_json::Value::Null),
        "/files"
    );
    assert!(notification.has_config("autotimeout"));
}

#[test]
fn test_text_is_escaped_and_icon_markup_is_raw() {
    let mut notifier = Notifier::new();
    notifier.send(
        NotificationConfig::new()
            .with_title("<script>")
            .with_icon("<svg id=\"i\"/>"),
    );
    let html = notifier.document().to_string();
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("<svg id=\"i\"/>"));
}

#[test]
fn test_action_without_fields_renders_empty_anchor() {
    let mut notifier = Notifier::new();
    let anchor = notifier
        .send(
            NotificationConfig::new()
                .with_text("x")
                .with_action(ActionConfig::default()),
        )
        .elements()
        .and_then(|e| e.action)
        .expect("anchor");
    assert_eq!(notifier.document().attribute(anchor, "href"), Some(""));
}

#[test]
fn test_history_exports_json() {
    let mut notifier = Notifier::new();
    notifier.send(NotificationConfig::new().with_title("a").with_id("a"));
    notifier.send(NotificationConfig::new().with_id("empty"));
    notifier.delete("empty");
    notifier.run_until_idle();

    let json = notifier.history().to_json().expect("serializable history");
    let records: Vec<serde_json::Value> = serde_json::from_str(&json).expect("JSON array");
    let kinds: Vec<&str> = records
        .iter()
        .filter_map(|r| r.get("event").and_then(|e| e.as_str()))
        .collect();
    assert_eq!(
        kinds,
        [
            "stack_created",
            "sent",
            "skipped_empty",
            "deleted",
            "shown",
            "closing",
            "removed"
        ]
    );
    assert_eq!(notifier.history().for_notification("a").count(), 4);
    assert!(matches!(
        notifier.history().last().map(|r| &r.event),
        Some(LifecycleEvent::Removed { .. })
    ));
}
