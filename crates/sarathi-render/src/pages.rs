//! Page renderers.
//!
//! One renderer per route kind, all producing complete HTML documents
//! through the template registry. The renderers are pure with respect to
//! the store: they receive already-fetched documents and never perform
//! IO, so the server handlers stay the only error boundary.

use chrono::{Datelike, Utc};
use sarathi_content::{FeaturedContent, ImageUrlBuilder};
use sarathi_core::document::{
    BlogCategory, BlogPost, BlogPostSummary, Board, BoardExam, BoardExamSummary, ExamGuide,
    ExamGuideSummary, ExamType, Faq,
};
use sarathi_core::{Config, ContentBlock};
use sarathi_ui::{Crumb, FaqItem, TocEntry, jsonld, trail_for};
use serde_json::Value;

use crate::meta::PageMeta;
use crate::richtext::{escape_html, heading_outline, render_blocks};
use crate::template::{Result, TemplateContext, TemplateRegistry};

/// Renders every page of the site.
#[derive(Debug)]
pub struct PageRenderer {
    config: Config,
    registry: TemplateRegistry,
    images: ImageUrlBuilder,
}

impl PageRenderer {
    /// Create a renderer for the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let images = ImageUrlBuilder::new(&config.cms);
        Self {
            config,
            registry: TemplateRegistry::new(),
            images,
        }
    }

    /// Wrap page content in the base chrome.
    fn shell(&self, meta: &PageMeta, content: &str, structured: &[Value]) -> Result<String> {
        let mut ctx = TemplateContext::new()
            .with_var("title", escape_html(&meta.title))
            .with_var("canonical_url", escape_html(&meta.canonical_url))
            .with_var("site_title", escape_html(&self.config.site.title))
            .with_var("year", Utc::now().year().to_string())
            .with_var("content", content);

        if let Some(description) = &meta.description {
            ctx.insert("description", escape_html(description));
        }

        if !structured.is_empty() {
            let scripts: String = structured
                .iter()
                .map(|value| {
                    format!(r#"<script type="application/ld+json">{value}</script>"#)
                })
                .collect();
            ctx.insert("structured_data", scripts);
        }

        self.registry.render("base", &ctx)
    }

    // --- detail pages ---

    /// Exam guide detail page.
    pub fn exam_guide_page(
        &self,
        guide: &ExamGuide,
        related: &[ExamGuideSummary],
    ) -> Result<String> {
        let path = format!("/exams/{}", guide.slug.current);
        let meta = PageMeta::for_document(
            &self.config,
            &guide.title,
            guide.seo_title.as_deref(),
            guide.meta_description.as_deref(),
            &path,
        );

        let mut body = String::new();
        let mut outline = Vec::new();
        self.section(&mut body, &mut outline, "overview", "Overview", &guide.overview);
        self.section(&mut body, &mut outline, "exam-pattern", "Exam Pattern", &guide.exam_pattern);
        self.section(&mut body, &mut outline, "syllabus", "Syllabus", &guide.syllabus);
        self.section(
            &mut body,
            &mut outline,
            "preparation-strategy",
            "Preparation Strategy",
            &guide.preparation_strategy,
        );
        self.section(&mut body, &mut outline, "study-plan", "Study Plan", &guide.study_plan);
        if let Some(pyq) = &guide.pyq_analysis {
            self.section(
                &mut body,
                &mut outline,
                "pyq-analysis",
                "Previous Year Questions",
                pyq,
            );
        }
        self.section(
            &mut body,
            &mut outline,
            "books-and-resources",
            "Books and Resources",
            &guide.books_and_resources,
        );

        let trail = trail_for("Exams", "/exams", &guide.title);
        let meta_line = format!(
            r#"<p class="sarathi-card-badge">{}</p><time datetime="{}">Updated {}</time>"#,
            guide.exam_type.label(),
            guide.updated_at.format("%Y-%m-%d"),
            guide.updated_at.format("%d %B %Y"),
        );

        let mut structured = vec![
            jsonld::article(
                &guide.title,
                guide.meta_description.as_deref(),
                &meta.canonical_url,
                None,
                &guide.updated_at.to_rfc3339(),
                &self.config.site.organization,
            ),
            jsonld::breadcrumb_list(&trail, &self.config.site.base_url),
        ];

        let ctx = self.detail_context(
            &guide.title,
            &trail,
            &meta_line,
            &body,
            &outline,
            &guide.faqs,
            &related_guides_html(related),
            &mut structured,
        );

        let content = self.registry.render("detail", &ctx)?;
        self.shell(&meta, &content, &structured)
    }

    /// Board exam detail page.
    pub fn board_exam_page(&self, exam: &BoardExam) -> Result<String> {
        let path = format!("/board-exams/{}", exam.slug.current);
        let meta = PageMeta::for_document(
            &self.config,
            &exam.title,
            exam.seo_title.as_deref(),
            exam.meta_description.as_deref(),
            &path,
        );

        let mut body = String::new();
        let mut outline = Vec::new();
        self.section(&mut body, &mut outline, "overview", "Overview", &exam.overview);

        if !exam.subjects.is_empty() {
            body.push_str(r#"<h2 id="subjects">Subject-wise Preparation</h2>"#);
            outline.push(TocEntry::new(2, "Subject-wise Preparation", "subjects"));
            for subject in &exam.subjects {
                body.push_str(&format!("<h3>{}</h3>", escape_html(&subject.subject)));
                body.push_str(&render_blocks(&subject.tips, &self.images));
            }
        }

        self.section(
            &mut body,
            &mut outline,
            "scoring-strategies",
            "Scoring Strategies",
            &exam.scoring_strategies,
        );
        if let Some(techniques) = &exam.answer_writing_techniques {
            self.section(
                &mut body,
                &mut outline,
                "answer-writing",
                "Answer Writing Techniques",
                techniques,
            );
        }
        if let Some(plan) = &exam.study_plan {
            self.section(&mut body, &mut outline, "study-plan", "Study Plan", plan);
        }

        let trail = trail_for("Board Exams", "/board-exams", &exam.title);
        let meta_line = format!(
            r#"<p class="sarathi-card-badge">{} &middot; {}</p><time datetime="{}">Updated {}</time>"#,
            exam.board.label(),
            exam.class_level.label(),
            exam.updated_at.format("%Y-%m-%d"),
            exam.updated_at.format("%d %B %Y"),
        );

        let mut structured = vec![
            jsonld::article(
                &exam.title,
                exam.meta_description.as_deref(),
                &meta.canonical_url,
                None,
                &exam.updated_at.to_rfc3339(),
                &self.config.site.organization,
            ),
            jsonld::breadcrumb_list(&trail, &self.config.site.base_url),
        ];

        let ctx = self.detail_context(
            &exam.title,
            &trail,
            &meta_line,
            &body,
            &outline,
            &exam.faqs,
            "",
            &mut structured,
        );

        let content = self.registry.render("detail", &ctx)?;
        self.shell(&meta, &content, &structured)
    }

    /// Blog post detail page.
    pub fn blog_post_page(&self, post: &BlogPost) -> Result<String> {
        let path = format!("/blog/{}", post.slug.current);
        let meta = PageMeta::for_document(
            &self.config,
            &post.title,
            post.seo_title.as_deref(),
            post.meta_description.as_deref(),
            &path,
        );

        let body = render_blocks(&post.content, &self.images);
        let outline = heading_outline(&post.content);

        let trail = trail_for("Blog", "/blog", &post.title);
        let meta_line = format!(
            r#"<p class="sarathi-card-badge">{}</p><time datetime="{}">{}</time>"#,
            post.category.label(),
            post.published_at.format("%Y-%m-%d"),
            post.published_at.format("%d %B %Y"),
        );

        let mut structured = vec![
            jsonld::article(
                &post.title,
                post.meta_description.as_deref(),
                &meta.canonical_url,
                Some(&post.published_at.to_rfc3339()),
                &post.updated_at.to_rfc3339(),
                &self.config.site.organization,
            ),
            jsonld::breadcrumb_list(&trail, &self.config.site.base_url),
        ];

        let ctx = self.detail_context(
            &post.title,
            &trail,
            &meta_line,
            &body,
            &outline,
            &[],
            &related_guides_html(&post.related_exams),
            &mut structured,
        );

        let content = self.registry.render("detail", &ctx)?;
        self.shell(&meta, &content, &structured)
    }

    // --- listing pages ---

    /// Exams listing, optionally filtered by `?type=`. Unknown filter
    /// values match nothing.
    pub fn exams_listing(
        &self,
        guides: &[ExamGuideSummary],
        filter: Option<&str>,
    ) -> Result<String> {
        let filtered: Vec<&ExamGuideSummary> = match filter {
            None => guides.iter().collect(),
            Some(value) => match ExamType::from_param(value) {
                Some(exam_type) => guides.iter().filter(|g| g.exam_type == exam_type).collect(),
                None => Vec::new(),
            },
        };

        let tabs = filter_tabs(
            "/exams",
            "type",
            filter,
            ExamType::ALL.iter().map(|t| (t.as_str(), t.label())),
        );

        let items = if guides.is_empty() {
            self.empty_state("Exam guides are coming soon. Check back shortly.")?
        } else if filtered.is_empty() {
            self.empty_state("No exams found for this filter.")?
        } else {
            card_grid(filtered.iter().map(|g| exam_card(g)))
        };

        self.listing_page(
            "Exam Guides",
            "Preparation guides for government, competitive, and entrance exams.",
            "/exams",
            Some(tabs),
            &items,
        )
    }

    /// Board exams listing, optionally filtered by `?board=`.
    pub fn board_exams_listing(
        &self,
        exams: &[BoardExamSummary],
        filter: Option<&str>,
    ) -> Result<String> {
        let filtered: Vec<&BoardExamSummary> = match filter {
            None => exams.iter().collect(),
            Some(value) => match Board::from_param(value) {
                Some(board) => exams.iter().filter(|e| e.board == board).collect(),
                None => Vec::new(),
            },
        };

        let tabs = filter_tabs(
            "/board-exams",
            "board",
            filter,
            Board::ALL.iter().map(|b| (b.as_str(), b.label())),
        );

        let items = if exams.is_empty() {
            self.empty_state("Board exam guides are coming soon. Check back shortly.")?
        } else if filtered.is_empty() {
            self.empty_state("No board exams found for this filter.")?
        } else {
            card_grid(filtered.iter().map(|e| board_card(e)))
        };

        self.listing_page(
            "Board Exam Guides",
            "Class 10 and 12 preparation guides across boards.",
            "/board-exams",
            Some(tabs),
            &items,
        )
    }

    /// Blog listing, optionally filtered by `?category=`.
    pub fn blog_listing(
        &self,
        posts: &[BlogPostSummary],
        filter: Option<&str>,
    ) -> Result<String> {
        let filtered: Vec<&BlogPostSummary> = match filter {
            None => posts.iter().collect(),
            Some(value) => match BlogCategory::from_param(value) {
                Some(category) => posts.iter().filter(|p| p.category == category).collect(),
                None => Vec::new(),
            },
        };

        let tabs = filter_tabs(
            "/blog",
            "category",
            filter,
            BlogCategory::ALL.iter().map(|c| (c.as_str(), c.label())),
        );

        let items = if posts.is_empty() {
            self.empty_state("Blog posts are coming soon. Check back shortly.")?
        } else if filtered.is_empty() {
            self.empty_state("No posts found for this filter.")?
        } else {
            card_grid(filtered.iter().map(|p| post_card(p)))
        };

        self.listing_page(
            "Blog",
            "Study techniques, strategy, and motivation for serious aspirants.",
            "/blog",
            Some(tabs),
            &items,
        )
    }

    fn listing_page(
        &self,
        title: &str,
        intro: &str,
        path: &str,
        tabs: Option<String>,
        items: &str,
    ) -> Result<String> {
        let meta = PageMeta::for_page(&self.config, title, intro, path);
        let mut ctx = TemplateContext::new()
            .with_var("title", escape_html(title))
            .with_var("intro", escape_html(intro))
            .with_var("items", items);
        if let Some(tabs) = tabs {
            ctx.insert("filter_tabs", tabs);
        }

        let content = self.registry.render("listing", &ctx)?;
        let structured = vec![jsonld::collection_page(title, intro, &meta.canonical_url)];
        self.shell(&meta, &content, &structured)
    }

    // --- home and static pages ---

    /// Home page. An empty `FeaturedContent` renders placeholder sections.
    pub fn home_page(&self, featured: &FeaturedContent) -> Result<String> {
        let description = self
            .config
            .site
            .description
            .clone()
            .unwrap_or_else(|| "Your companion for exam preparation.".to_string());
        let meta = PageMeta::for_page(&self.config, "Exam Preparation Guides", &description, "/");

        let mut content = format!(
            r#"<section class="hero"><h1>{}</h1><p>{}</p><a href="/exams" class="cta">Browse Exam Guides</a></section>"#,
            escape_html(&self.config.site.title),
            escape_html(&description),
        );

        content.push_str("<h2>Featured Exams</h2>");
        if featured.exams.is_empty() {
            content.push_str(&self.empty_state("Exam guides are coming soon.")?);
        } else {
            content.push_str(&card_grid(featured.exams.iter().map(exam_card)));
        }

        content.push_str("<h2>Latest from the Blog</h2>");
        if featured.posts.is_empty() {
            content.push_str(&self.empty_state("Blog posts are coming soon.")?);
        } else {
            content.push_str(&card_grid(featured.posts.iter().map(post_card)));
        }

        content.push_str("<h2>Browse by Category</h2>");
        content.push_str(&card_grid(ExamType::ALL.iter().map(|exam_type| {
            format!(
                r#"<a href="/exams?type={}" class="sarathi-card"><h3 class="sarathi-card-title">{} Exams</h3></a>"#,
                exam_type.as_str(),
                exam_type.label(),
            )
        })));

        let structured = vec![
            jsonld::organization(
                &self.config.site.organization,
                &self.config.site.base_url,
                &description,
            ),
            jsonld::website(&self.config.site.title, &self.config.site.base_url),
        ];
        self.shell(&meta, &content, &structured)
    }

    /// About page.
    pub fn about_page(&self) -> Result<String> {
        self.static_page(
            "About",
            "/about",
            "Who we are and why this site exists.",
            concat!(
                "<h1>About</h1>",
                "<p>CareerSarathi publishes structured, editor-reviewed preparation ",
                "guides for Indian government, competitive, entrance, and board ",
                "exams. Every guide covers the pattern, syllabus, strategy, and ",
                "frequently asked questions in one place.</p>",
            ),
        )
    }

    /// Contact page.
    pub fn contact_page(&self) -> Result<String> {
        self.static_page(
            "Contact",
            "/contact",
            "How to reach the editorial team.",
            concat!(
                "<h1>Contact</h1>",
                "<p>Questions, corrections, or guide requests? Write to ",
                r#"<a href="mailto:hello@careersarathi.com">hello@careersarathi.com</a>"#,
                " and the editorial team will get back within a few days.</p>",
            ),
        )
    }

    /// Privacy policy page.
    pub fn privacy_page(&self) -> Result<String> {
        self.static_page(
            "Privacy Policy",
            "/privacy",
            "What this site does and does not collect.",
            concat!(
                "<h1>Privacy Policy</h1>",
                "<p>This site keeps no accounts and collects no personal data. ",
                "The theme preference is stored in your browser's localStorage ",
                "and never leaves your device.</p>",
            ),
        )
    }

    /// Resources page.
    pub fn resources_page(&self) -> Result<String> {
        self.static_page(
            "Resources",
            "/resources",
            "Free study material and planning tools.",
            concat!(
                "<h1>Resources</h1>",
                "<p>Curated study material, planning templates, and previous ",
                "year papers, organised by exam. Start with the guide for your ",
                r#"exam from the <a href="/exams">exams listing</a>.</p>"#,
            ),
        )
    }

    fn static_page(
        &self,
        title: &str,
        path: &str,
        description: &str,
        content: &str,
    ) -> Result<String> {
        let meta = PageMeta::for_page(&self.config, title, description, path);
        self.shell(&meta, content, &[])
    }

    /// Not-found page, rendered with a 404 status by the server.
    pub fn not_found_page(&self, message: &str) -> Result<String> {
        let meta = PageMeta::for_page(
            &self.config,
            "Page not found",
            "The page you are looking for does not exist.",
            "/",
        );
        let ctx = TemplateContext::new().with_var("message", escape_html(message));
        let content = self.registry.render("not_found", &ctx)?;
        self.shell(&meta, &content, &[])
    }

    /// Studio shell page. Self-contained document, no site chrome.
    pub fn studio_page(&self) -> Result<String> {
        let ctx =
            TemplateContext::new().with_var("site_title", escape_html(&self.config.site.title));
        self.registry.render("studio", &ctx)
    }

    // --- helpers ---

    fn empty_state(&self, message: &str) -> Result<String> {
        let ctx = TemplateContext::new().with_var("message", escape_html(message));
        self.registry.render("empty_state", &ctx)
    }

    fn section(
        &self,
        body: &mut String,
        outline: &mut Vec<TocEntry>,
        id: &str,
        title: &str,
        blocks: &[ContentBlock],
    ) {
        if blocks.is_empty() {
            return;
        }
        body.push_str(&format!("<h2 id=\"{id}\">{}</h2>", escape_html(title)));
        outline.push(TocEntry::new(2, title, id));
        body.push_str(&render_blocks(blocks, &self.images));
        // In-content h3 headings nest under the section entry.
        outline.extend(
            heading_outline(blocks)
                .into_iter()
                .filter(|entry| entry.level == 3),
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn detail_context(
        &self,
        title: &str,
        trail: &[Crumb],
        meta_line: &str,
        body: &str,
        outline: &[TocEntry],
        faqs: &[Faq],
        related_html: &str,
        structured: &mut Vec<Value>,
    ) -> TemplateContext {
        let mut ctx = TemplateContext::new()
            .with_var("title", escape_html(title))
            .with_var("breadcrumbs", breadcrumbs_html(trail))
            .with_var("meta_line", meta_line)
            .with_var("body", body);

        if !outline.is_empty() {
            ctx.insert("toc", toc_html(outline));
        }

        if !faqs.is_empty() {
            ctx.insert("faq_section", faq_html(faqs));
            let items: Vec<FaqItem> = faqs
                .iter()
                .map(|faq| FaqItem::new(faq.question.clone(), faq.answer.clone()))
                .collect();
            structured.push(jsonld::faq_page(&items));
        }

        if !related_html.is_empty() {
            ctx.insert("related_section", related_html);
        }

        ctx
    }
}

fn breadcrumbs_html(trail: &[Crumb]) -> String {
    let mut html =
        String::from(r#"<nav class="sarathi-breadcrumbs" aria-label="Breadcrumb"><ol class="sarathi-breadcrumb-list">"#);
    let last = trail.len().saturating_sub(1);
    for (i, crumb) in trail.iter().enumerate() {
        if i == last {
            html.push_str(&format!(
                r#"<li><span aria-current="page">{}</span></li>"#,
                escape_html(&crumb.label)
            ));
        } else {
            html.push_str(&format!(
                r#"<li><a href="{}">{}</a> /</li>"#,
                escape_html(&crumb.url),
                escape_html(&crumb.label)
            ));
        }
    }
    html.push_str("</ol></nav>");
    html
}

fn toc_html(outline: &[TocEntry]) -> String {
    let mut html = String::from(
        r#"<nav class="sarathi-toc" aria-label="Table of contents"><h2 class="sarathi-toc-title">On this page</h2><ul class="sarathi-toc-list">"#,
    );
    for entry in outline {
        html.push_str(&format!(
            r##"<li class="sarathi-toc-level-{}"><a class="sarathi-toc-link" href="#{}">{}</a></li>"##,
            entry.level,
            escape_html(&entry.id),
            escape_html(&entry.text)
        ));
    }
    html.push_str("</ul></nav>");
    html
}

fn faq_html(faqs: &[Faq]) -> String {
    let mut html = String::from(r#"<h2 id="faqs">Frequently Asked Questions</h2><div class="sarathi-faq">"#);
    // The first item arrives expanded, matching the initial accordion
    // state; aria-expanded mirrors the open class.
    for (index, faq) in faqs.iter().enumerate() {
        let (item_class, expanded) = if index == 0 {
            ("sarathi-faq-item open", "true")
        } else {
            ("sarathi-faq-item", "false")
        };
        html.push_str(&format!(
            concat!(
                r#"<div class="{}">"#,
                r#"<button class="sarathi-faq-question" type="button" aria-expanded="{}">{}"#,
                r#"<span class="sarathi-faq-chevron" aria-hidden="true">&#9660;</span></button>"#,
                r#"<div class="sarathi-faq-answer">{}</div></div>"#
            ),
            item_class,
            expanded,
            escape_html(&faq.question),
            escape_html(&faq.answer)
        ));
    }
    html.push_str("</div>");
    html
}

fn related_guides_html(related: &[ExamGuideSummary]) -> String {
    if related.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<h2 id="related">Related Exam Guides</h2>"#);
    html.push_str(&card_grid(related.iter().map(exam_card)));
    html
}

fn filter_tabs<'a>(
    base: &str,
    param: &str,
    current: Option<&str>,
    options: impl Iterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut html = String::from(r#"<div class="filter-tabs">"#);
    html.push_str(&format!(
        r#"<a href="{base}"{}>All</a>"#,
        if current.is_none() { r#" class="active""# } else { "" }
    ));
    for (value, label) in options {
        let active = current == Some(value);
        html.push_str(&format!(
            r#"<a href="{base}?{param}={value}"{}>{label}</a>"#,
            if active { r#" class="active""# } else { "" }
        ));
    }
    html.push_str("</div>");
    html
}

fn card_grid(cards: impl Iterator<Item = String>) -> String {
    let mut html = String::from(r#"<div class="card-grid">"#);
    for card in cards {
        html.push_str(&card);
    }
    html.push_str("</div>");
    html
}

fn exam_card(guide: &ExamGuideSummary) -> String {
    let description = guide
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="sarathi-card-description">{}</p>"#, escape_html(d)))
        .unwrap_or_default();
    format!(
        concat!(
            r#"<a href="/exams/{}" class="sarathi-card">"#,
            r#"<span class="sarathi-card-badge">{}</span>"#,
            r#"<h3 class="sarathi-card-title">{}</h3>{}</a>"#
        ),
        escape_html(&guide.slug.current),
        guide.exam_type.label(),
        escape_html(&guide.title),
        description,
    )
}

fn board_card(exam: &BoardExamSummary) -> String {
    let description = exam
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="sarathi-card-description">{}</p>"#, escape_html(d)))
        .unwrap_or_default();
    format!(
        concat!(
            r#"<a href="/board-exams/{}" class="sarathi-card">"#,
            r#"<span class="sarathi-card-badge">{} &middot; {}</span>"#,
            r#"<h3 class="sarathi-card-title">{}</h3>{}</a>"#
        ),
        escape_html(&exam.slug.current),
        exam.board.label(),
        exam.class_level.label(),
        escape_html(&exam.title),
        description,
    )
}

fn post_card(post: &BlogPostSummary) -> String {
    let excerpt = post
        .excerpt
        .as_deref()
        .map(|e| format!(r#"<p class="sarathi-card-description">{}</p>"#, escape_html(e)))
        .unwrap_or_default();
    format!(
        concat!(
            r#"<a href="/blog/{}" class="sarathi-card sarathi-card-post">"#,
            r#"<span class="sarathi-card-badge">{}</span>"#,
            r#"<h3 class="sarathi-card-title">{}</h3>{}"#,
            r#"<time class="sarathi-card-date" datetime="{}">{}</time></a>"#
        ),
        escape_html(&post.slug.current),
        post.category.label(),
        escape_html(&post.title),
        excerpt,
        post.published_at.format("%Y-%m-%d"),
        post.published_at.format("%d %B %Y"),
    )
}
