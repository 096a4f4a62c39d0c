use super::*;

#[test]
fn default_mode_is_markdown() {
    assert_eq!(RenderMode::default(), RenderMode::Markdown);
}

#[test]
fn markdown_mode_renders_answer() {
    assert_eq!(panel_html(RenderMode::Markdown, "Hello"), "<p>Hello</p>\n");
}

#[test]
fn markdown_mode_escapes_markup() {
    let out = panel_html(RenderMode::Markdown, "<img src=x onerror=alert(1)>");
    assert!(!out.contains("<img"), "got {out}");
    assert!(out.contains("&lt;img"), "got {out}");
}

#[test]
fn raw_mode_injects_answer_verbatim() {
    assert_eq!(panel_html(RenderMode::TrustedRawMarkup, "Hello"), "Hello");
    assert_eq!(
        panel_html(RenderMode::TrustedRawMarkup, "<ul><li>HCL 123</li></ul>"),
        "<ul><li>HCL 123</li></ul>"
    );
}

#[test]
fn trusted_markup_keeps_text_untouched() {
    let markup = TrustedMarkup::from_backend_unsanitized("<b>a & b</b>");
    assert_eq!(markup.into_inner(), "<b>a & b</b>");
}
