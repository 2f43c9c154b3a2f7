use askama::Template;

/// Head metadata applied to every page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

pub const METADATA: PageMetadata = PageMetadata {
    title: "Wine store management",
    description: "Application for managing a wine store",
};

/// Outer document structure shared by every page: language attribute,
/// head populated from [`METADATA`], the body font class, a `<main>`
/// landmark holding the page markup, and the toast host after it.
///
/// `content` is pre-rendered page markup and is emitted verbatim.
#[derive(Template)]
#[template(path = "layouts/base.html", escape = "none")]
pub struct ShellTemplate<'a> {
    pub metadata: &'a PageMetadata,
    pub content: &'a str,
}

/// Wrap already-rendered page markup in the document shell.
pub fn wrap(content: &str) -> ShellTemplate<'_> {
    ShellTemplate {
        metadata: &METADATA,
        content,
    }
}

/// Render the full document for the given page markup.
pub fn render_page(content: &str) -> askama::Result<String> {
    wrap(content).render()
}
