//! HTML template system for page rendering.
//!
//! Provides a lightweight template system using string interpolation
//! rather than heavy template engines like Tera or Handlebars.

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

    /// Create context with initial variables.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Check if a variable exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }
}

/// A simple template that supports variable interpolation.
///
/// Variables are specified as `{{ variable_name }}` in the template
/// string; `{{ variable? }}` marks an optional variable that renders as
/// the empty string when absent.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Create a new template with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Get the template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = self.content.clone();
        let mut pos = 0;

        while let Some(start) = result[pos..].find("{{") {
            let start = pos + start;
            let end = result[start..]
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let end = start + end + 2;

            let var_name = result[start + 2..end - 2].trim();

            // Check for optional variable syntax: {{ variable? }}
            let (var_name, optional) = if let Some(stripped) = var_name.strip_suffix('?') {
                (stripped, true)
            } else {
                (var_name, false)
            };

            let value = match context.get(var_name) {
                Some(v) => v.to_string(),
                None if optional => String::new(),
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            };

            result.replace_range(start..end, &value);
            pos = start + value.len();
        }

        Ok(result)
    }
}

/// Registry of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new registry with default templates.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    /// Register default built-in templates.
    fn register_defaults(&mut self) {
        self.register(Template::new("base", DEFAULT_BASE_TEMPLATE));
        self.register(Template::new("detail", DEFAULT_DETAIL_TEMPLATE));
        self.register(Template::new("listing", DEFAULT_LISTING_TEMPLATE));
        self.register(Template::new("not_found", DEFAULT_NOT_FOUND_TEMPLATE));
        self.register(Template::new("empty_state", DEFAULT_EMPTY_STATE_TEMPLATE));
        self.register(Template::new("studio", DEFAULT_STUDIO_TEMPLATE));
    }

    /// Register a template.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    /// Get a template by name.
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

/// Default base HTML template with the site chrome.
pub const DEFAULT_BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en" class="scroll-smooth">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <meta name="description" content="{{ description? }}">
    <link rel="canonical" href="{{ canonical_url }}">
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
    {{ structured_data? }}
    <style>
        :root {
            --color-primary: #3B82F6;
            --color-primary-hover: #2563EB;
            --color-cta: #F97316;
            --color-bg: #F8FAFC;
            --color-bg-secondary: #FFFFFF;
            --color-text: #1E293B;
            --color-text-secondary: #475569;
            --color-text-muted: #64748B;
            --color-border: #E2E8F0;
            color-scheme: light;
        }

        [data-theme="dark"] {
            --color-primary: #60A5FA;
            --color-primary-hover: #93C5FD;
            --color-cta: #FB923C;
            --color-bg: #0F172A;
            --color-bg-secondary: #1E293B;
            --color-text: #F1F5F9;
            --color-text-secondary: #CBD5E1;
            --color-text-muted: #94A3B8;
            --color-border: #334155;
            color-scheme: dark;
        }

        *, *::before, *::after { box-sizing: border-box; }
        * { margin: 0; padding: 0; }

        body {
            font-family: 'Inter', system-ui, -apple-system, sans-serif;
            line-height: 1.7;
            color: var(--color-text);
            background-color: var(--color-bg);
            min-height: 100vh;
            display: flex;
            flex-direction: column;
        }

        .container {
            width: 100%;
            max-width: 960px;
            margin: 0 auto;
            padding: 0 1.5rem;
        }

        header {
            position: sticky;
            top: 0;
            z-index: 50;
            background-color: var(--color-bg);
            border-bottom: 1px solid var(--color-border);
        }

        header nav {
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 1rem 0;
        }

        .site-title {
            font-size: 1.125rem;
            font-weight: 700;
            color: var(--color-text);
            text-decoration: none;
        }

        .nav-links {
            display: flex;
            align-items: center;
            gap: 1.5rem;
        }

        .nav-links a {
            font-size: 0.875rem;
            font-weight: 500;
            color: var(--color-text-secondary);
            text-decoration: none;
        }

        .nav-links a:hover { color: var(--color-primary); }

        .theme-toggle, .menu-toggle {
            width: 2.25rem;
            height: 2.25rem;
            border-radius: 0.5rem;
            border: 1px solid var(--color-border);
            background-color: var(--color-bg-secondary);
            cursor: pointer;
        }

        .menu-toggle { display: none; }

        main { flex: 1; padding: 3rem 0; }

        h1, h2, h3, h4 { font-weight: 600; line-height: 1.3; color: var(--color-text); }
        h1 { font-size: 2rem; margin-bottom: 1rem; }
        h2 { font-size: 1.5rem; margin: 2rem 0 0.75rem; }
        h3 { font-size: 1.25rem; margin: 1.5rem 0 0.5rem; }
        p { margin-bottom: 1.25rem; }
        ul, ol { padding-left: 1.5rem; margin-bottom: 1.25rem; }
        a { color: var(--color-primary); text-decoration: none; }
        a:hover { color: var(--color-primary-hover); text-decoration: underline; }
        img { max-width: 100%; height: auto; border-radius: 0.5rem; }
        figure { margin: 1.5rem 0; }
        figcaption { font-size: 0.8125rem; color: var(--color-text-muted); }

        .sarathi-breadcrumbs { font-size: 0.8125rem; margin-bottom: 1.5rem; color: var(--color-text-muted); }
        .sarathi-breadcrumbs a { color: var(--color-text-muted); }
        .sarathi-breadcrumb-list { list-style: none; display: flex; gap: 0.5rem; padding: 0; }

        .card-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
            gap: 1.25rem;
            margin: 1.5rem 0;
        }

        .sarathi-card {
            display: block;
            padding: 1.25rem;
            border: 1px solid var(--color-border);
            border-radius: 0.75rem;
            background-color: var(--color-bg-secondary);
            color: var(--color-text);
            text-decoration: none;
        }

        .sarathi-card:hover { border-color: var(--color-primary); text-decoration: none; }

        .sarathi-card-badge {
            display: inline-block;
            font-size: 0.6875rem;
            font-weight: 600;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            color: var(--color-primary);
            margin-bottom: 0.5rem;
        }

        .sarathi-card-title { font-size: 1.0625rem; margin: 0 0 0.5rem; }
        .sarathi-card-description { font-size: 0.875rem; color: var(--color-text-secondary); margin: 0; }
        .sarathi-card-date { font-size: 0.8125rem; color: var(--color-text-muted); }

        .filter-tabs { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0 0.5rem; }
        .filter-tabs a {
            font-size: 0.8125rem;
            padding: 0.25rem 0.875rem;
            border: 1px solid var(--color-border);
            border-radius: 9999px;
            color: var(--color-text-secondary);
        }
        .filter-tabs a.active { background-color: var(--color-primary); color: #fff; border-color: var(--color-primary); }

        .detail-layout { display: grid; grid-template-columns: minmax(0, 1fr) 220px; gap: 2.5rem; }

        .sarathi-toc { position: sticky; top: 5rem; align-self: start; font-size: 0.8125rem; }
        .sarathi-toc-title { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; margin: 0 0 0.5rem; }
        .sarathi-toc-list { list-style: none; padding: 0; }
        .sarathi-toc-list li { margin-bottom: 0.375rem; }
        .sarathi-toc-list li.active > a { color: var(--color-primary); font-weight: 600; }
        .sarathi-toc-level-3 { padding-left: 0.875rem; }

        .sarathi-faq { margin: 1.5rem 0; }
        .sarathi-faq-item { border: 1px solid var(--color-border); border-radius: 0.5rem; margin-bottom: 0.75rem; }
        .sarathi-faq-question {
            width: 100%;
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 0.875rem 1rem;
            font-size: 0.9375rem;
            font-weight: 500;
            text-align: left;
            background: none;
            border: none;
            color: var(--color-text);
            cursor: pointer;
        }
        .sarathi-faq-answer { padding: 0 1rem 0.875rem; font-size: 0.875rem; color: var(--color-text-secondary); }
        .sarathi-faq-item:not(.open) .sarathi-faq-answer { display: none; }
        .sarathi-faq-chevron { transition: transform 0.2s ease; }
        .sarathi-faq-item.open .sarathi-faq-chevron { transform: rotate(180deg); }

        .sarathi-empty-state {
            padding: 3rem 1.5rem;
            text-align: center;
            border: 1px dashed var(--color-border);
            border-radius: 0.75rem;
            color: var(--color-text-muted);
        }

        .hero { text-align: center; padding: 2rem 0 3rem; }
        .hero h1 { font-size: 2.5rem; }
        .hero p { max-width: 540px; margin: 0 auto 1.5rem; color: var(--color-text-secondary); }
        .hero .cta {
            display: inline-block;
            padding: 0.75rem 1.75rem;
            background-color: var(--color-cta);
            color: #fff;
            font-weight: 600;
            border-radius: 0.5rem;
        }
        .hero .cta:hover { text-decoration: none; }

        footer { border-top: 1px solid var(--color-border); padding: 2rem 0; margin-top: auto; }
        footer p { font-size: 0.875rem; color: var(--color-text-muted); text-align: center; margin: 0; }

        @media (max-width: 768px) {
            .detail-layout { grid-template-columns: 1fr; }
            .sarathi-toc { display: none; }
            .nav-links { display: none; }
            .nav-links.open { display: flex; flex-direction: column; position: absolute; top: 100%; left: 0; right: 0; padding: 1rem 1.5rem; background-color: var(--color-bg); border-bottom: 1px solid var(--color-border); }
            .menu-toggle { display: block; }
        }
    </style>
</head>
<body>
    <header>
        <div class="container">
            <nav>
                <a href="/" class="site-title">{{ site_title }}</a>
                <div class="nav-links">
                    <a href="/">Home</a>
                    <a href="/exams">Exams</a>
                    <a href="/board-exams">Board Exams</a>
                    <a href="/blog">Blog</a>
                    <a href="/resources">Resources</a>
                    <a href="/about">About</a>
                    <button class="theme-toggle" aria-label="Toggle theme" type="button">&#9681;</button>
                </div>
                <button class="menu-toggle" aria-label="Toggle menu" type="button">&#9776;</button>
            </nav>
        </div>
    </header>
    <main>
        <div class="container">
            {{ content }}
        </div>
    </main>
    <footer>
        <div class="container">
            <p>&copy; {{ year }} {{ site_title }}. Your companion for exam preparation.</p>
        </div>
    </footer>
    <script>
        (function() {
            const toggle = document.querySelector('.theme-toggle');
            const html = document.documentElement;

            function getTheme() {
                const saved = localStorage.getItem('theme');
                if (saved) return saved;
                return window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light';
            }

            function setTheme(theme) {
                html.setAttribute('data-theme', theme);
                localStorage.setItem('theme', theme);
            }

            setTheme(getTheme());

            toggle.addEventListener('click', () => {
                const current = html.getAttribute('data-theme') || getTheme();
                setTheme(current === 'dark' ? 'light' : 'dark');
            });

            const menuToggle = document.querySelector('.menu-toggle');
            const navLinks = document.querySelector('.nav-links');
            menuToggle.addEventListener('click', () => navLinks.classList.toggle('open'));
        })();

        (function() {
            // FAQ accordion: at most one item open. The first item arrives
            // expanded from the server.
            const faq = document.querySelector('.sarathi-faq');
            if (!faq) return;

            const items = Array.from(faq.querySelectorAll('.sarathi-faq-item'));

            items.forEach((item) => {
                const button = item.querySelector('.sarathi-faq-question');
                button.addEventListener('click', () => {
                    const wasOpen = item.classList.contains('open');
                    items.forEach((other) => {
                        other.classList.remove('open');
                        other.querySelector('.sarathi-faq-question').setAttribute('aria-expanded', 'false');
                    });
                    if (!wasOpen) {
                        item.classList.add('open');
                        button.setAttribute('aria-expanded', 'true');
                    }
                });
            });
        })();

        (function() {
            // Scroll-synced table of contents.
            const toc = document.querySelector('.sarathi-toc');
            if (!toc) return;

            const links = Array.from(toc.querySelectorAll('.sarathi-toc-link'));
            const headings = links
                .map((link) => document.getElementById(decodeURIComponent(link.getAttribute('href').slice(1))))
                .filter(Boolean);
            if (headings.length === 0) return;

            const observer = new IntersectionObserver((entries) => {
                entries.forEach((entry) => {
                    if (!entry.isIntersecting) return;
                    links.forEach((link) => {
                        const active = link.getAttribute('href') === '#' + entry.target.id;
                        link.parentElement.classList.toggle('active', active);
                    });
                });
            }, { rootMargin: '-80px 0px -80% 0px' });

            headings.forEach((heading) => observer.observe(heading));
            window.addEventListener('pagehide', () => observer.disconnect());
        })();
    </script>
</body>
</html>"##;

/// Detail page template: breadcrumbs, article body, sidebar outline.
pub const DEFAULT_DETAIL_TEMPLATE: &str = r#"{{ breadcrumbs }}
<div class="detail-layout">
    <article>
        <header>
            <h1>{{ title }}</h1>
            {{ meta_line? }}
        </header>
        {{ body }}
        {{ faq_section? }}
        {{ related_section? }}
    </article>
    {{ toc? }}
</div>"#;

/// Listing page template.
pub const DEFAULT_LISTING_TEMPLATE: &str = r#"<section class="listing">
    <h1>{{ title }}</h1>
    <p>{{ intro }}</p>
    {{ filter_tabs? }}
    {{ items }}
</section>"#;

/// Not-found page template.
pub const DEFAULT_NOT_FOUND_TEMPLATE: &str = r#"<section class="not-found">
    <h1>Page not found</h1>
    <p>{{ message }}</p>
    <p><a href="/">Back to home</a></p>
</section>"#;

/// Empty-state fragment for listings with nothing to show.
pub const DEFAULT_EMPTY_STATE_TEMPLATE: &str = r#"<div class="sarathi-empty-state" role="status">
    <p>{{ message }}</p>
</div>"#;

/// Studio shell template: a self-contained mount point for the content
/// editing app.
pub const DEFAULT_STUDIO_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="robots" content="noindex">
    <title>{{ site_title }} Studio</title>
</head>
<body>
    <div id="studio-root" data-schema-url="/studio/schema.json">
        <p>Loading studio&hellip;</p>
    </div>
</body>
</html>"#;
