//! HTML template system for page generation.
//!
//! Lightweight `{{ variable }}` interpolation; markup fragments are produced in
//! Rust and slotted into a small set of page layouts.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Template context with variables for interpolation.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert only when `value` is present.
    #[must_use]
    pub fn with_optional(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }
}

/// A named layout with `{{ name }}` placeholders.
///
/// `{{ name? }}` marks an optional placeholder that renders empty when unset.
/// Substituted values are not rescanned.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut output = String::with_capacity(self.content.len());
        let mut rest = self.content.as_str();

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let end = after_open.find("}}").ok_or_else(|| {
                TemplateError::InvalidSyntax(format!("unclosed {{{{ delimiter in '{}'", self.name))
            })?;

            let placeholder = after_open[..end].trim();
            let (var_name, optional) = match placeholder.strip_suffix('?') {
                Some(stripped) => (stripped.trim(), true),
                None => (placeholder, false),
            };

            match context.get(var_name) {
                Some(value) => output.push_str(value),
                None if optional => {}
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            }

            rest = &after_open[end + 2..];
        }

        output.push_str(rest);
        Ok(output)
    }
}

/// Registry of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new registry with the built-in layouts.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(Template::new("base", DEFAULT_BASE_TEMPLATE));
        registry.register(Template::new("landing", DEFAULT_LANDING_TEMPLATE));
        registry.register(Template::new("sidebar", DEFAULT_SIDEBAR_TEMPLATE));
        registry
    }

    /// Register a template, replacing any with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Page shell: head, navbar, content, footer.
pub const DEFAULT_BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}" data-theme="{{ color_mode }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}{{ site_title_suffix? }}</title>
    <meta name="description" content="{{ description? }}">
    <link rel="canonical" href="{{ canonical_url }}">
    {{ favicon? }}
    {{ custom_css? }}
    <style>
        :root {
            --color-primary: #2563EB;
            --color-bg: #FFFFFF;
            --color-bg-secondary: #F8FAFC;
            --color-text: #1E293B;
            --color-text-muted: #64748B;
            --color-border: #E2E8F0;
            --radius: 12px;
            color-scheme: light;
        }

        [data-theme="dark"] {
            --color-primary: #60A5FA;
            --color-bg: #0F172A;
            --color-bg-secondary: #1E293B;
            --color-text: #F1F5F9;
            --color-text-muted: #94A3B8;
            --color-border: #334155;
            color-scheme: dark;
        }

        *, *::before, *::after { box-sizing: border-box; }
        * { margin: 0; padding: 0; }

        body {
            font-family: system-ui, -apple-system, sans-serif;
            line-height: 1.6;
            color: var(--color-text);
            background-color: var(--color-bg);
            min-height: 100vh;
            display: flex;
            flex-direction: column;
        }

        a { color: var(--color-primary); text-decoration: none; }

        .container { width: 100%; max-width: 1140px; margin: 0 auto; padding: 0 1.5rem; }

        /* Navbar */
        .navbar { border-bottom: 1px solid var(--color-border); background: var(--color-bg); }
        .navbar__inner { display: flex; align-items: center; gap: 1.5rem; height: 3.75rem; }
        .navbar__brand { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; color: var(--color-text); }
        .navbar__logo { height: 2rem; }
        .navbar__items { display: flex; gap: 1.25rem; }
        .navbar__items--right { margin-left: auto; }
        .navbar__link { color: var(--color-text); font-weight: 500; }
        .navbar__link:hover { color: var(--color-primary); }

        /* Hero */
        .hero { padding: 5rem 0 4rem; text-align: center; background: var(--color-bg-secondary); }
        .hero__title { font-size: 3rem; line-height: 1.1; margin-bottom: 1rem; }
        .hero__subtitle { font-size: 1.25rem; color: var(--color-text-muted); margin-bottom: 2rem; }
        .hero__buttons { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; }
        .button { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1.5rem; border-radius: 8px; font-weight: 600; }
        .button--primary { background: var(--color-primary); color: #FFFFFF; }
        .button--secondary { border: 1px solid var(--color-border); color: var(--color-text); }

        /* Stats */
        .stats { padding: 2.5rem 0; border-bottom: 1px solid var(--color-border); }
        .stats__grid { display: flex; justify-content: center; gap: 4rem; }
        .stats__item { display: flex; flex-direction: column; align-items: center; }
        .stats__number { font-size: 2.25rem; font-weight: 700; color: var(--color-primary); }
        .stats__label { color: var(--color-text-muted); }

        /* Quick navigation */
        .quick-nav { padding: 3rem 0; }
        .quick-nav__grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; }
        .quick-nav__card { display: flex; flex-direction: column; align-items: center; gap: 0.75rem; padding: 1.5rem; border: 1px solid var(--color-border); border-radius: var(--radius); color: var(--color-text); }

        /* Card sections */
        .docs-section { padding: 3rem 0; }
        .docs-section--alt { background: var(--color-bg-secondary); }
        .section-header { margin-bottom: 2rem; }
        .section-header__description { color: var(--color-text-muted); }
        .docs-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1.25rem; }
        .doc-card { display: flex; align-items: flex-start; gap: 1rem; padding: 1.5rem; border: 1px solid var(--color-border); border-radius: var(--radius); background: var(--color-bg); color: var(--color-text); }
        .doc-card:hover { border-color: var(--color-primary); }
        .doc-card__content { flex: 1; }
        .doc-card__title { font-size: 1.125rem; margin-bottom: 0.25rem; }
        .doc-card__description { color: var(--color-text-muted); font-size: 0.9375rem; }
        .doc-card__arrow { color: var(--color-text-muted); }

        /* Sidebar */
        .docs-layout { display: flex; flex: 1; }
        .docs-sidebar { width: 300px; border-right: 1px solid var(--color-border); padding: 1rem 0.75rem; }
        .docs-main { flex: 1; padding: 2rem 3rem; }
        .menu__list { list-style: none; }
        .menu__list .menu__list { padding-left: 1rem; }
        .menu__link { display: block; padding: 0.375rem 0.75rem; border-radius: 6px; color: var(--color-text); }
        .menu__link--active { background: var(--color-bg-secondary); color: var(--color-primary); }
        .menu__caret { list-style: none; font-weight: 600; cursor: pointer; padding: 0.375rem 0.75rem; color: var(--color-text); }
        .menu__caret::-webkit-details-marker { display: none; }
        .menu__caret::after { content: "▸"; float: right; color: var(--color-text-muted); }
        .menu__category[open] > .menu__caret::after { content: "▾"; }

        .icon { display: inline-block; width: 1.5em; height: 1.5em; }

        /* Footer */
        .footer { margin-top: auto; padding: 3rem 0 2rem; background: #111827; color: #E5E7EB; }
        .footer--light { background: var(--color-bg-secondary); color: var(--color-text); }
        .footer__links { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 2rem; margin-bottom: 2rem; }
        .footer__title { font-weight: 700; margin-bottom: 0.5rem; }
        .footer__items { list-style: none; }
        .footer__link { color: inherit; opacity: 0.8; }
        .footer__copyright { text-align: center; opacity: 0.7; font-size: 0.875rem; }

        @media (max-width: 768px) {
            .hero__title { font-size: 2.25rem; }
            .stats__grid { gap: 2rem; }
            .docs-layout { flex-direction: column; }
            .docs-sidebar { width: 100%; border-right: 0; border-bottom: 1px solid var(--color-border); }
            .docs-main { padding: 1.5rem; }
        }
    </style>
</head>
<body>
    {{ navbar }}
    {{ content }}
    {{ footer? }}
</body>
</html>"##;

/// Landing page body.
pub const DEFAULT_LANDING_TEMPLATE: &str = r#"{{ hero }}
<main>
    {{ stats? }}
    {{ quick_nav? }}
    {{ sections }}
</main>"#;

/// Sidebar overview page body.
pub const DEFAULT_SIDEBAR_TEMPLATE: &str = r#"<div class="docs-layout">
    <aside class="docs-sidebar">
        {{ sidebar }}
    </aside>
    <main class="docs-main">
        <h1>{{ title }}</h1>
        <p>{{ summary }}</p>
    </main>
</div>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_simple_render() {
        let template = Template::new("test", "Hello, {{ name }}!");
        let ctx = TemplateContext::new().with_var("name", "World");

        assert_eq!(template.render(&ctx).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_template_optional_variable() {
        let template = Template::new("test", "Docs{{ suffix? }}");

        assert_eq!(template.render(&TemplateContext::new()).unwrap(), "Docs");

        let ctx = TemplateContext::new().with_optional("suffix", Some(" | Audos"));
        assert_eq!(template.render(&ctx).unwrap(), "Docs | Audos");

        let ctx = TemplateContext::new().with_optional("suffix", None::<String>);
        assert!(!ctx.contains("suffix"));
    }

    #[test]
    fn test_template_values_are_not_rescanned() {
        let template = Template::new("test", "<p>{{ body }}</p>");
        let ctx = TemplateContext::new().with_var("body", "{{ not_a_variable }}");

        assert_eq!(
            template.render(&ctx).unwrap(),
            "<p>{{ not_a_variable }}</p>"
        );
    }

    #[test]
    fn test_template_missing_required_variable() {
        let template = Template::new("test", "Hello, {{ name }}!");
        let result = template.render(&TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::MissingVariable(name)) if name == "name"));
    }

    #[test]
    fn test_template_unclosed_delimiter() {
        let template = Template::new("test", "Hello, {{ name");
        let result = template.render(&TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::InvalidSyntax(_))));
    }

    #[test]
    fn test_template_registry() {
        let registry = TemplateRegistry::new();

        assert!(registry.get("base").is_some());
        assert!(registry.get("landing").is_some());
        assert!(registry.get("sidebar").is_some());
        assert!(matches!(
            registry.render("nonexistent", &TemplateContext::new()),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_render_base_template() {
        let registry = TemplateRegistry::new();
        let ctx = TemplateContext::new()
            .with_var("lang", "en")
            .with_var("color_mode", "dark")
            .with_var("title", "Documentation")
            .with_var("canonical_url", "https://docs.example.com/")
            .with_var("navbar", "<nav></nav>")
            .with_var("content", "<p>Hello!</p>");

        let result = registry.render("base", &ctx).unwrap();
        assert!(result.contains("<!DOCTYPE html>"));
        assert!(result.contains("<title>Documentation</title>"));
        assert!(result.contains("data-theme=\"dark\""));
        assert!(result.contains("<p>Hello!</p>"));
    }
}
