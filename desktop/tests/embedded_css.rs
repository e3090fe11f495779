#![cfg(test)]
//! The desktop binary inlines `ui/assets/theme/main.css`; a broken path or a
//! truncated file would only show up as an unstyled window at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "embedded theme is empty");
}

#[test]
fn embedded_css_contains_design_tokens() {
    for token in ["--color-bg", "--color-accent", "body {", ".button--primary"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn glow_backdrop_reads_pointer_variables() {
    assert!(EMBEDDED_CSS.contains("var(--mouse-x)"));
    assert!(EMBEDDED_CSS.contains("var(--mouse-y)"));
}
