//! End-to-end behavior of the instructions page through the runtime.

use barako::{Alert, Runtime, RuntimeError};
use barako_web::app;
use barako_web::components::cards::{CARD_ACTION_ALERT, CARD_ACTION_ID};
use barako_web::components::navbar::{CLOSE_ID, PANEL_ID, TOGGLE_ID};
use barako_web::components::shell::CONTENT_ID;
use barako_web::components::{NavLink, PageShell};
use barako_web::settings::Settings;
use leafdom::{Tag, find_all, find_element, render_markup};

const TRIGGER_ID: &str = "steps-dropdown-trigger";

fn page() -> Runtime<PageShell> {
    Runtime::new(PageShell::new())
}

fn step_links(rt: &Runtime<PageShell>) -> usize {
    find_all(rt.root(), |e| {
        e.tag == Tag::Anchor && e.get_attr("href").is_some_and(|h| h.starts_with("#step"))
    })
    .len()
}

// =============================================================================
// Menu and content visibility
// =============================================================================

#[test]
fn test_fresh_page_shows_content() {
    let rt = page();
    let markup = render_markup(rt.root());

    assert!(!rt.page().is_menu_open());
    assert!(find_element(rt.root(), CONTENT_ID).is_some());
    assert!(markup.contains(r#"data-icon="FaBars""#));
    assert!(markup.contains("Upload Instructions"));
    assert!(markup.contains("BarakoBama ☕🍃"));
}

#[test]
fn test_toggle_hides_content_and_slides_panel_in() {
    let mut rt = page();
    rt.click(TOGGLE_ID).unwrap();

    let panel = find_element(rt.root(), PANEL_ID).unwrap();
    assert!(panel.classes.contains("translate-x-0"));
    assert!(find_element(rt.root(), CONTENT_ID).is_none());
    assert!(rt.page().is_menu_open());
    assert!(rt.page().navbar().is_open());

    let toggle = render_markup(find_element(rt.root(), TOGGLE_ID).unwrap());
    assert!(toggle.contains(r#"data-icon="FaTimes""#));
}

#[test]
fn test_double_toggle_restores_initial_markup() {
    let mut rt = page();
    let initial = render_markup(rt.root());

    rt.click(TOGGLE_ID).unwrap();
    rt.click(TOGGLE_ID).unwrap();

    assert_eq!(render_markup(rt.root()), initial);
}

#[test]
fn test_content_visible_iff_flag_clear() {
    let mut rt = page();
    for _ in 0..5 {
        rt.click(TOGGLE_ID).unwrap();
        assert_eq!(
            find_element(rt.root(), CONTENT_ID).is_some(),
            !rt.page().is_menu_open()
        );
    }
}

#[test]
fn test_close_button_restores_content() {
    let mut rt = page();
    rt.click(TOGGLE_ID).unwrap();
    rt.click(CLOSE_ID).unwrap();

    assert!(!rt.page().navbar().is_open());
    assert!(!rt.page().is_menu_open());
    assert!(find_element(rt.root(), CONTENT_ID).is_some());
}

#[test]
fn test_close_when_closed_changes_nothing() {
    let mut rt = page();
    let initial = render_markup(rt.root());

    rt.click(CLOSE_ID).unwrap();

    assert!(!rt.page().is_menu_open());
    assert_eq!(render_markup(rt.root()), initial);
}

#[test]
fn test_shell_notification_flips_flag() {
    let shell = PageShell::new();
    shell.on_menu_toggled();
    assert!(shell.is_menu_open());
    shell.on_menu_toggled();
    assert!(!shell.is_menu_open());
}

// =============================================================================
// Dropdown
// =============================================================================

#[test]
fn test_dropdown_lists_steps_while_open() {
    let mut rt = page();
    assert_eq!(step_links(&rt), 0);

    rt.click(TRIGGER_ID).unwrap();
    assert_eq!(step_links(&rt), 3);

    rt.click(TRIGGER_ID).unwrap();
    assert_eq!(step_links(&rt), 0);
}

#[test]
fn test_dropdown_closes_when_content_hidden() {
    let mut rt = page();
    rt.click(TRIGGER_ID).unwrap();
    assert!(rt.page().dropdown().is_open());

    rt.click(TOGGLE_ID).unwrap();
    assert!(!rt.page().dropdown().is_open());

    rt.click(TOGGLE_ID).unwrap();
    assert_eq!(step_links(&rt), 0);
}

// =============================================================================
// Card action and targets
// =============================================================================

#[test]
fn test_card_action_raises_alert() {
    let mut rt = page();
    rt.click(CARD_ACTION_ID).unwrap();
    assert_eq!(rt.take_alerts(), vec![Alert::new(CARD_ACTION_ALERT)]);
    assert!(rt.take_alerts().is_empty());
}

#[test]
fn test_hidden_content_is_not_clickable() {
    let mut rt = page();
    rt.click(TOGGLE_ID).unwrap();

    assert_eq!(
        rt.click(CARD_ACTION_ID),
        Err(RuntimeError::UnknownTarget(CARD_ACTION_ID.to_string()))
    );
    assert!(!rt.targets().contains(&TRIGGER_ID.to_string()));
}

#[test]
fn test_targets_follow_visibility() {
    let mut rt = page();
    let visible = rt.targets();
    for id in [TOGGLE_ID, CLOSE_ID, TRIGGER_ID, CARD_ACTION_ID] {
        assert!(visible.contains(&id.to_string()), "missing {id}");
    }

    rt.click(TOGGLE_ID).unwrap();
    let hidden = rt.targets();
    assert_eq!(hidden.len(), 2);
}

// =============================================================================
// App helpers
// =============================================================================

#[test]
fn test_replay_collects_alerts() {
    let settings = Settings::default();
    let mut rt = app::runtime(&settings);
    let clicks = vec![CARD_ACTION_ID.to_string(), CARD_ACTION_ID.to_string()];
    let mut alerts = Vec::new();

    app::replay(&mut rt, &clicks, &mut alerts).unwrap();
    assert_eq!(alerts.len(), 2);
}

#[test]
fn test_replay_stops_at_unknown_id() {
    let settings = Settings::default();
    let mut rt = app::runtime(&settings);
    let clicks = vec![TOGGLE_ID.to_string(), "no-such-id".to_string()];
    let mut alerts = Vec::new();

    let err = app::replay(&mut rt, &clicks, &mut alerts).unwrap_err();
    assert!(matches!(
        err,
        barako_web::Error::Runtime(RuntimeError::UnknownTarget(ref id)) if id == "no-such-id"
    ));
    assert!(rt.page().is_menu_open());
}

#[test]
fn test_replay_keeps_alerts_raised_before_failure() {
    let settings = Settings::default();
    let mut rt = app::runtime(&settings);
    let clicks = vec![
        CARD_ACTION_ID.to_string(),
        TOGGLE_ID.to_string(),
        CARD_ACTION_ID.to_string(),
    ];
    let mut alerts = Vec::new();

    let err = app::replay(&mut rt, &clicks, &mut alerts).unwrap_err();
    assert!(matches!(err, barako_web::Error::Runtime(RuntimeError::UnknownTarget(_))));
    assert_eq!(alerts, vec![Alert::new(CARD_ACTION_ALERT)]);
}

#[test]
fn test_document_uses_settings() {
    let settings = Settings::parse(
        r#"
        [document]
        title = "Leaf Upload"
        stylesheet = "/app.css"

        [[nav]]
        label = "Diseases"
        href = "/diseases"
        "#,
    )
    .unwrap();
    let rt = app::runtime(&settings);
    let html = app::document(&settings, &rt);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Leaf Upload</title>"));
    assert!(html.contains(r#"href="/app.css""#));
    assert!(html.contains(r#"href="/diseases""#));
    assert_eq!(rt.page().navbar().nav_links(), [NavLink::new("Diseases", "/diseases")]);
}

#[test]
fn test_load_missing_settings_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_reports_parse_errors_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[document\ntitle = 1").unwrap();

    let err = Settings::load(&path).unwrap_err();
    assert!(err.to_string().contains("settings.toml"));
}
