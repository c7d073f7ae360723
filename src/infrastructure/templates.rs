//! HTML templates for the view and edit pages
//!
//! A template is plain HTML with `{{title}}` and `{{body}}` placeholders.
//! Templates are checked once when loaded, so rendering cannot fail;
//! substituted values are always HTML-escaped. Body bytes that are not UTF-8
//! are shown with replacement characters; the stored bytes are untouched.

use std::fs;
use std::path::Path;

use crate::domain::{DomainError, Page};

const BUILTIN_VIEW: &str = include_str!("../../tmpl/view.html");
const BUILTIN_EDIT: &str = include_str!("../../tmpl/edit.html");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateName {
    View,
    Edit,
}

impl TemplateName {
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateName::View => "view.html",
            TemplateName::Edit => "edit.html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Title,
    Body,
}

#[derive(Debug, Clone)]
struct Template {
    segments: Vec<Segment>,
}

impl Template {
    fn compile(name: &str, source: &str) -> Result<Self, DomainError> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let end = after.find("}}").ok_or_else(|| {
                DomainError::Template(format!("{}: unclosed '{{{{'", name))
            })?;
            segments.push(match after[..end].trim() {
                "title" => Segment::Title,
                "body" => Segment::Body,
                other => {
                    return Err(DomainError::Template(format!(
                        "{}: unknown placeholder '{}'",
                        name, other
                    )));
                }
            });
            rest = &after[end + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { segments })
    }

    fn render(&self, page: &Page) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Title => escape_into(&mut out, page.title.as_str()),
                Segment::Body => escape_into(&mut out, &String::from_utf8_lossy(&page.body)),
            }
        }
        out
    }
}

fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// The compiled "view" and "edit" templates
#[derive(Debug, Clone)]
pub struct Templates {
    view: Template,
    edit: Template,
}

impl Templates {
    pub fn from_sources(view: &str, edit: &str) -> Result<Self, DomainError> {
        Ok(Self {
            view: Template::compile(TemplateName::View.file_name(), view)?,
            edit: Template::compile(TemplateName::Edit.file_name(), edit)?,
        })
    }

    /// Templates shipped with the binary
    pub fn builtin() -> Self {
        Self::from_sources(BUILTIN_VIEW, BUILTIN_EDIT)
            .unwrap_or_else(|e| unreachable!("built-in templates are valid: {}", e))
    }

    /// Read `view.html` and `edit.html` from `dir`
    pub fn load(dir: &Path) -> Result<Self, DomainError> {
        let read = |name: TemplateName| {
            let path = dir.join(name.file_name());
            fs::read_to_string(&path)
                .map_err(|e| DomainError::Template(format!("{}: {}", path.display(), e)))
        };

        Self::from_sources(&read(TemplateName::View)?, &read(TemplateName::Edit)?)
    }

    pub fn render(&self, name: TemplateName, page: &Page) -> String {
        match name {
            TemplateName::View => self.view.render(page),
            TemplateName::Edit => self.edit.render(page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Title;

    fn page(body: &str) -> Page {
        Page::new(Title::parse("Test").unwrap(), body)
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let templates = Templates::from_sources("<h1>{{title}}</h1>{{ body }}", "{{title}}").unwrap();
        assert_eq!(
            templates.render(TemplateName::View, &page("hello")),
            "<h1>Test</h1>hello"
        );
        assert_eq!(templates.render(TemplateName::Edit, &page("hello")), "Test");
    }

    #[test]
    fn test_render_escapes_body() {
        let templates = Templates::builtin();
        let html = templates.render(TemplateName::View, &page("<script>alert('x')</script> & \"q\""));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &#34;q&#34;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_non_utf8_body() {
        let templates = Templates::from_sources("{{body}}", "").unwrap();
        let page = Page::new(Title::parse("Bytes").unwrap(), vec![0xFF, b'<', b'a']);
        assert_eq!(templates.render(TemplateName::View, &page), "\u{FFFD}&lt;a");
    }

    #[test]
    fn test_builtin_edit_form_posts_to_save() {
        let html = Templates::builtin().render(TemplateName::Edit, &page(""));
        assert!(html.contains(r#"action="/save/Test""#));
        assert!(html.contains(r#"name="body""#));
    }

    #[test]
    fn test_compile_rejects_bad_placeholders() {
        let err = Templates::from_sources("{{author}}", "").unwrap_err();
        assert!(err.to_string().contains("unknown placeholder 'author'"));

        let err = Templates::from_sources("ok", "{{title").unwrap_err();
        assert!(err.to_string().contains("edit.html"));
    }

    #[test]
    fn test_load_missing_directory_fails() {
        let err = Templates::load(Path::new("/nonexistent/wiki/templates")).unwrap_err();
        assert!(matches!(err, DomainError::Template(_)));
        assert!(err.to_string().contains("view.html"));
    }
}
