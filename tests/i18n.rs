use iiot_roi_calculator::i18n::{keys, parse_toml_to_map, resolve_language, Language, Translator};

#[test]
fn translator_picks_language() {
    let ko = Translator::new("ko");
    assert_eq!(ko.language(), Language::Ko);
    assert_eq!(ko.t(keys::APP_EXIT), "프로그램을 종료합니다.");

    let en = Translator::new("en-us");
    assert_eq!(en.language(), Language::En);
    assert_eq!(en.t(keys::APP_EXIT), "Exiting application.");
}

#[test]
fn unknown_language_falls_back_to_english() {
    let tr = Translator::new("fr");
    assert_eq!(tr.language_code(), "en");
}

#[test]
fn unknown_key_is_marked_missing() {
    let tr = Translator::new("ko");
    assert_eq!(tr.t("no.such.key"), "[missing translation]");
}

#[test]
fn cli_language_wins_over_config() {
    assert_eq!(resolve_language("ko", Some("en")), "ko");
    assert_eq!(resolve_language("auto", Some("en-uk")), "en-us");
    assert_eq!(resolve_language("", Some("ko-KR")), "ko");
}

#[test]
fn pack_overrides_builtin_strings() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("en.toml"),
        "[general]\napp_exit = \"Bye.\"\n",
    )
    .unwrap();
    let tr = Translator::new_with_pack("en-us", dir.path().to_str());
    assert_eq!(tr.t(keys::APP_EXIT), "Bye.");
    assert_eq!(tr.t(keys::MAIN_MENU_TITLE), "\n=== IIoT ROI Calculator ===");
}

#[test]
fn toml_pack_is_flattened() {
    let map = parse_toml_to_map("[result]\nprofit = \"P\"\n[result.sub]\nx = \"X\"\nn = 3\n").unwrap();
    assert_eq!(map.get("result.profit").map(String::as_str), Some("P"));
    assert_eq!(map.get("result.sub.x").map(String::as_str), Some("X"));
    assert!(!map.contains_key("result.sub.n"));
    assert!(parse_toml_to_map("n = 1").is_none());
}

#[test]
fn error_prefix_follows_language() {
    assert_eq!(Translator::new("ko").t(keys::ERROR_PREFIX), "오류");
    assert_eq!(Translator::new("en-us").t(keys::ERROR_PREFIX), "Error");
    assert_eq!(
        Translator::new("en-us").t(keys::RESULT_BEFORE_AFTER),
        "Before / After"
    );
}
