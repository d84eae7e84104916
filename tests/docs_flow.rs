//! Cross-crate flows: keys through the update loop into the JSON report,
//! config files on disk, and theme persistence.

use ftdm_app::config::{init_config, load_settings, Settings};
use ftdm_app::handler::update;
use ftdm_app::{AppState, FileThemeStore, InputKey, Message};
use ftdm_core::{
    registry, Page, SectionKey, StaticTheme, ThemeMode, ThemePreference, ThemeProvider,
};
use tempfile::TempDir;

fn press(state: &mut AppState, key: InputKey) {
    let mut msg = Some(Message::Key(key));
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn report(state: &AppState) -> serde_json::Value {
    let mut out = Vec::new();
    ftdm_docs::write_report(state, &mut out).expect("report");
    serde_json::from_slice(&out).expect("valid JSON")
}

fn expanded_ids(section: &serde_json::Value) -> Vec<String> {
    section["rows"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|row| row["row"] == "header" && row["expanded"] == true)
        .map(|row| row["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_keyboard_session_matches_report() {
    let mut state = AppState::new();

    // Page 3, second stage open
    press(&mut state, InputKey::Char('3'));
    press(&mut state, InputKey::Char('j'));
    press(&mut state, InputKey::Enter);

    let json = report(&state);
    assert_eq!(json["page"], "stage-overview");
    assert_eq!(expanded_ids(&json["sections"][0]), ["2"]);
    assert!(expanded_ids(&json["sections"][1]).is_empty());

    // Opening another record in the same section closes the first
    press(&mut state, InputKey::Char('k'));
    press(&mut state, InputKey::Enter);
    assert_eq!(expanded_ids(&report(&state)["sections"][0]), ["1"]);

    // Leaving and coming back starts collapsed
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::BackTab);
    assert!(expanded_ids(&report(&state)["sections"][0]).is_empty());
}

#[test]
fn test_report_headers_follow_registry_order() {
    let mut state = AppState::new();
    state.start_at(Page::Safeguards, None);
    let json = report(&state);

    let ids: Vec<&str> = json["sections"][0]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = registry::records(SectionKey::Safeguards)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_hidden_durations_are_absent_from_report() {
    let mut settings = Settings::default();
    settings.ui.show_durations = false;
    let mut state = AppState::with_settings(settings, Box::new(StaticTheme::default()));
    state.start_at(Page::StageOverview, None);

    let json = report(&state);
    let first = &json["sections"][0]["rows"][0];
    assert!(first["duration"].is_null());
}

#[test]
fn test_init_config_then_load_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    assert!(init_config(&path).unwrap());
    assert!(!init_config(&path).unwrap());
    assert_eq!(load_settings(&path), Settings::default());
}

#[test]
fn test_edited_config_reaches_dialog_policy() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[download]\nrequire_auth = true\naccess_code = \"open-sesame\"\n",
    )
    .unwrap();

    let settings = load_settings(&path);
    let mut state = AppState::with_settings(settings, Box::new(StaticTheme::default()));
    press(&mut state, InputKey::Char('d'));
    assert!(state.download.is_locked());
}

#[test]
fn test_theme_choice_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.toml");

    let mut first = FileThemeStore::load(Some(path.clone()), ThemePreference::Dark);
    assert_eq!(first.theme(), ThemeMode::Dark);
    first.toggle();

    let second = FileThemeStore::load(Some(path), ThemePreference::Dark);
    assert_eq!(second.theme(), ThemeMode::Light);
}
