//! Every shipped locale carries exactly the fallback's message ids, once each.

use std::collections::BTreeSet;

const EN_US: &str = include_str!("../i18n/en-US/varti-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/varti-ui.ftl");

fn message_ids(src: &str) -> Vec<String> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
        .map(str::to_string)
        .collect()
}

fn duplicates(ids: &[String]) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    ids.iter()
        .filter(|id| !seen.insert(id.as_str()))
        .cloned()
        .collect()
}

#[test]
fn locales_match_fallback_keys() {
    let fallback_ids = message_ids(EN_US);
    assert!(!fallback_ids.is_empty(), "en-US has no messages");
    assert!(
        duplicates(&fallback_ids).is_empty(),
        "en-US duplicates: {:?}",
        duplicates(&fallback_ids)
    );
    let fallback: BTreeSet<_> = fallback_ids.into_iter().collect();

    for (locale, src) in [("es-ES", ES_ES)] {
        let ids = message_ids(src);
        let dups = duplicates(&ids);
        assert!(dups.is_empty(), "{locale} duplicates: {dups:?}");

        let keys: BTreeSet<_> = ids.into_iter().collect();
        let missing: Vec<_> = fallback.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&fallback).collect();
        assert!(missing.is_empty(), "{locale} is missing {missing:?}");
        assert!(extra.is_empty(), "{locale} has unknown keys {extra:?}");
    }
}

#[test]
fn runtime_switch_translates_navigation() {
    ui::i18n::init();
    let languages = ui::i18n::available_languages();
    assert!(languages.iter().any(|l| l == "es-ES"), "{languages:?}");

    ui::i18n::set_language("es-ES").expect("es-ES loads");
    let spanish = ui::t!("nav-profile");
    ui::i18n::set_language("en-US").expect("en-US loads");
    let english = ui::t!("nav-profile");

    assert_eq!(english, "Profile");
    assert_ne!(spanish, english);
}
