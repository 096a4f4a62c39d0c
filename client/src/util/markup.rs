//! Response rendering modes, including the one unescaped markup path.
//!
//! TRADE-OFFS
//! ==========
//! The Timpark backend answers with ready-made HTML that the page injects
//! as-is. That is an injection risk if the backend ever echoes untrusted
//! input, so raw markup can only be produced through
//! [`TrustedMarkup::from_backend_unsanitized`] and only rendered when a page
//! opts into [`RenderMode::TrustedRawMarkup`].

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use super::markdown::render_markdown_html;

/// How a chat view turns the response text into panel HTML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Markdown with raw HTML stripped.
    #[default]
    Markdown,
    /// Backend text injected verbatim as HTML.
    TrustedRawMarkup,
}

/// HTML the caller has explicitly chosen to trust without sanitizing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    /// Wrap backend output for verbatim injection. No escaping happens.
    pub fn from_backend_unsanitized(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Panel HTML for `response` under `mode`.
pub fn panel_html(mode: RenderMode, response: &str) -> String {
    match mode {
        RenderMode::Markdown => render_markdown_html(response),
        RenderMode::TrustedRawMarkup => TrustedMarkup::from_backend_unsanitized(response).into_inner(),
    }
}
