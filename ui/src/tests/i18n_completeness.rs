//! Source-level guard: every `t!` key used under `src/` must exist in every
//! locale, and every locale must use the same placeholders per message.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "varti-ui.ftl";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message id → sorted placeholder names (`$count`, `$days`, ...).
fn parse_messages(content: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut messages = BTreeMap::new();
    for line in content.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        let Some((id, body)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || !id.chars().all(valid_key_char) {
            continue;
        }
        messages.insert(id.to_string(), placeholders(body));
    }
    messages
}

fn placeholders(body: &str) -> BTreeSet<String> {
    body.split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of standalone `t!("...")` calls in `content`.
/// Macros that merely end in `t` (`assert!`, `print!`...) are skipped.
fn keys_in_source(content: &str) -> BTreeSet<String> {
    let needle = concat!("t!", "(\"");
    let mut found = BTreeSet::new();
    for (start, _) in content.match_indices(needle) {
        let preceded_by_ident = content[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');
        if preceded_by_ident {
            continue;
        }
        let rest = &content[start + needle.len()..];
        if let Some(end) = rest.find('"') {
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
        }
    }
    found
}

/// Keys referenced from every `.rs` file below `root`.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        found.extend(keys_in_source(&content));
    }

    found
}

fn locale_files() -> Vec<(String, String)> {
    let i18n_root = crate_root().join("i18n");
    let mut locales: Vec<(String, String)> = fs::read_dir(&i18n_root)
        .expect("i18n directory is readable")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            let content = fs::read_to_string(entry.path().join(FTL_FILENAME)).ok()?;
            Some((name, content))
        })
        .collect();
    locales.sort();
    locales
}

#[test]
fn every_referenced_key_exists_in_every_locale() {
    let referenced = referenced_keys(&crate_root().join("src"));
    assert!(
        referenced.contains("nav-challenges"),
        "source scan found no navbar keys"
    );

    let locales = locale_files();
    assert!(locales.iter().any(|(name, _)| name == "en-US"));

    let mut report = Vec::new();
    for (locale, content) in &locales {
        let messages = parse_messages(content);
        let missing: Vec<_> = referenced
            .iter()
            .filter(|key| !messages.contains_key(*key))
            .cloned()
            .collect();
        if !missing.is_empty() {
            report.push(format!("{locale}: {}", missing.join(", ")));
        }
    }

    assert!(
        report.is_empty(),
        "keys used in src/ but missing from locales:\n{}",
        report.join("\n")
    );
}

#[test]
fn placeholders_match_fallback() {
    let locales = locale_files();
    let fallback = locales
        .iter()
        .find(|(name, _)| name == "en-US")
        .map(|(_, content)| parse_messages(content))
        .expect("en-US locale present");

    let mut report = Vec::new();
    for (locale, content) in locales.iter().filter(|(name, _)| name != "en-US") {
        for (id, args) in parse_messages(content) {
            if let Some(expected) = fallback.get(&id) {
                if *expected != args {
                    report.push(format!("{locale}/{id}: {args:?} != {expected:?}"));
                }
            }
        }
    }

    assert!(report.is_empty(), "placeholder drift:\n{}", report.join("\n"));
}

#[test]
fn scanner_ignores_macros_ending_in_t() {
    let source = concat!(
        "assert!(\"two\".parse::<u8>().is_err());\n",
        "let a = t!", "(\"nav-home\");\n",
        "let b = crate::t!", "(\"brand\");\n",
        "let c = print!(\"x\");\n",
    );
    let keys = keys_in_source(source);
    let expected: BTreeSet<String> = ["brand", "nav-home"].iter().map(|k| k.to_string()).collect();
    assert_eq!(keys, expected);
}
