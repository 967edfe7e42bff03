//! Typed read operations against the content store.
//!
//! Each operation pairs a GROQ query with the record type it decodes
//! into. Ordering lives in the query; the caps on related and featured
//! content are also enforced locally so a misbehaving store cannot
//! overflow a page section.

use sarathi_core::document::{
    BlogPost, BlogPostSummary, BoardExam, BoardExamSummary, ExamGuide, ExamGuideSummary,
    ExamType, SlugEntry,
};
use tracing::debug;

use crate::client::ContentClient;
use crate::error::Result;

/// Maximum related guides shown on a detail page.
pub const RELATED_LIMIT: usize = 3;
/// Maximum exam guides featured on the home page.
pub const FEATURED_EXAM_LIMIT: usize = 6;
/// Maximum blog posts featured on the home page.
pub const FEATURED_POST_LIMIT: usize = 3;

const ALL_EXAM_GUIDES: &str = r#"
*[_type == "examGuide"] | order(title asc) {
  _id,
  title,
  slug,
  examType,
  category,
  "description": overview[0].children[0].text
}"#;

const EXAM_GUIDE_BY_SLUG: &str = r#"
*[_type == "examGuide" && slug.current == $slug][0] {
  _id,
  title,
  slug,
  examType,
  category,
  seoTitle,
  metaDescription,
  overview,
  examPattern,
  syllabus,
  preparationStrategy,
  studyPlan,
  pyqAnalysis,
  booksAndResources,
  faqs,
  _updatedAt
}"#;

const RELATED_EXAM_GUIDES: &str = r#"
*[_type == "examGuide" && slug.current != $currentSlug && examType == $examType][0...3] {
  _id,
  title,
  slug,
  examType,
  category,
  "description": overview[0].children[0].text
}"#;

const ALL_BOARD_EXAMS: &str = r#"
*[_type == "boardExam"] | order(board asc, class desc) {
  _id,
  title,
  slug,
  board,
  class,
  "description": overview[0].children[0].text
}"#;

const BOARD_EXAM_BY_SLUG: &str = r#"
*[_type == "boardExam" && slug.current == $slug][0] {
  _id,
  title,
  slug,
  board,
  class,
  seoTitle,
  metaDescription,
  overview,
  subjects,
  scoringStrategies,
  answerWritingTechniques,
  studyPlan,
  faqs,
  _updatedAt
}"#;

const ALL_BLOG_POSTS: &str = r#"
*[_type == "blogPost"] | order(publishedAt desc) {
  _id,
  title,
  slug,
  category,
  publishedAt,
  "excerpt": content[0].children[0].text
}"#;

const BLOG_POST_BY_SLUG: &str = r#"
*[_type == "blogPost" && slug.current == $slug][0] {
  _id,
  title,
  slug,
  category,
  seoTitle,
  metaDescription,
  content,
  relatedExams[]->{
    _id,
    title,
    slug,
    examType,
    category,
    "description": overview[0].children[0].text
  },
  publishedAt,
  _updatedAt
}"#;

const FEATURED_EXAM_GUIDES: &str = r#"
*[_type == "examGuide"] | order(_createdAt desc)[0...6] {
  _id,
  title,
  slug,
  examType,
  category,
  "description": overview[0].children[0].text
}"#;

const FEATURED_BLOG_POSTS: &str = r#"
*[_type == "blogPost"] | order(publishedAt desc)[0...3] {
  _id,
  title,
  slug,
  category,
  publishedAt,
  "excerpt": content[0].children[0].text
}"#;

const EXAM_GUIDE_SLUGS: &str = r#"*[_type == "examGuide"] { "slug": slug.current, _updatedAt }"#;
const BOARD_EXAM_SLUGS: &str = r#"*[_type == "boardExam"] { "slug": slug.current, _updatedAt }"#;
const BLOG_POST_SLUGS: &str = r#"*[_type == "blogPost"] { "slug": slug.current, _updatedAt }"#;

/// Content selections for the home page.
#[derive(Debug, Clone, Default)]
pub struct FeaturedContent {
    pub exams: Vec<ExamGuideSummary>,
    pub posts: Vec<BlogPostSummary>,
}

/// All exam guides, ordered by title.
pub async fn all_exam_guides(client: &ContentClient) -> Result<Vec<ExamGuideSummary>> {
    client.fetch(ALL_EXAM_GUIDES, &[]).await
}

/// One exam guide by slug, or `None` when no document matches.
pub async fn exam_guide_by_slug(
    client: &ContentClient,
    slug: &str,
) -> Result<Option<ExamGuide>> {
    client.fetch(EXAM_GUIDE_BY_SLUG, &[("slug", slug)]).await
}

/// Guides of the same exam type, excluding the current one, at most
/// [`RELATED_LIMIT`].
pub async fn related_exam_guides(
    client: &ContentClient,
    current_slug: &str,
    exam_type: ExamType,
) -> Result<Vec<ExamGuideSummary>> {
    let guides: Vec<ExamGuideSummary> = client
        .fetch(
            RELATED_EXAM_GUIDES,
            &[("currentSlug", current_slug), ("examType", exam_type.as_str())],
        )
        .await?;
    Ok(shape_related(guides, current_slug, exam_type))
}

/// All board exam guides, ordered by board then class (12 before 10).
pub async fn all_board_exams(client: &ContentClient) -> Result<Vec<BoardExamSummary>> {
    client.fetch(ALL_BOARD_EXAMS, &[]).await
}

/// One board exam guide by slug.
pub async fn board_exam_by_slug(
    client: &ContentClient,
    slug: &str,
) -> Result<Option<BoardExam>> {
    client.fetch(BOARD_EXAM_BY_SLUG, &[("slug", slug)]).await
}

/// All blog posts, newest first.
pub async fn all_blog_posts(client: &ContentClient) -> Result<Vec<BlogPostSummary>> {
    client.fetch(ALL_BLOG_POSTS, &[]).await
}

/// One blog post by slug, with its referenced exam guides resolved.
pub async fn blog_post_by_slug(
    client: &ContentClient,
    slug: &str,
) -> Result<Option<BlogPost>> {
    client.fetch(BLOG_POST_BY_SLUG, &[("slug", slug)]).await
}

/// Home page selections: the newest guides and posts.
pub async fn featured_content(client: &ContentClient) -> Result<FeaturedContent> {
    let mut exams: Vec<ExamGuideSummary> = client.fetch(FEATURED_EXAM_GUIDES, &[]).await?;
    let mut posts: Vec<BlogPostSummary> = client.fetch(FEATURED_BLOG_POSTS, &[]).await?;
    exams.truncate(FEATURED_EXAM_LIMIT);
    posts.truncate(FEATURED_POST_LIMIT);
    debug!(exams = exams.len(), posts = posts.len(), "loaded featured content");
    Ok(FeaturedContent { exams, posts })
}

/// Slug and last-modified pairs for every exam guide.
pub async fn exam_guide_slugs(client: &ContentClient) -> Result<Vec<SlugEntry>> {
    client.fetch(EXAM_GUIDE_SLUGS, &[]).await
}

/// Slug and last-modified pairs for every board exam guide.
pub async fn board_exam_slugs(client: &ContentClient) -> Result<Vec<SlugEntry>> {
    client.fetch(BOARD_EXAM_SLUGS, &[]).await
}

/// Slug and last-modified pairs for every blog post.
pub async fn blog_post_slugs(client: &ContentClient) -> Result<Vec<SlugEntry>> {
    client.fetch(BLOG_POST_SLUGS, &[]).await
}

/// Cheap reachability probe: counts exam guides.
pub async fn probe(client: &ContentClient) -> Result<u64> {
    client.fetch(r#"count(*[_type == "examGuide"])"#, &[]).await
}

/// Enforce the related-content contract locally: never the current guide,
/// only the same exam type, at most [`RELATED_LIMIT`] entries.
fn shape_related(
    guides: Vec<ExamGuideSummary>,
    current_slug: &str,
    exam_type: ExamType,
) -> Vec<ExamGuideSummary> {
    let mut shaped: Vec<ExamGuideSummary> = guides
        .into_iter()
        .filter(|guide| guide.slug.current != current_slug && guide.exam_type == exam_type)
        .collect();
    shaped.truncate(RELATED_LIMIT);
    shaped
}

#[cfg(test)]
mod tests {
    use sarathi_core::document::Slug;

    use super::*;

    fn summary(slug: &str, exam_type: ExamType) -> ExamGuideSummary {
        ExamGuideSummary {
            id: format!("id-{slug}"),
            title: slug.to_uppercase(),
            slug: Slug {
                current: slug.to_string(),
            },
            exam_type,
            category: None,
            description: None,
        }
    }

    #[test]
    fn test_shape_related_excludes_current_slug() {
        let guides = vec![
            summary("upsc-cse", ExamType::Competitive),
            summary("ssc-cgl", ExamType::Competitive),
        ];
        let shaped = shape_related(guides, "upsc-cse", ExamType::Competitive);
        assert_eq!(shaped.len(), 1);
        assert_eq!(shaped[0].slug.current, "ssc-cgl");
    }

    #[test]
    fn test_shape_related_keeps_only_matching_type() {
        let guides = vec![
            summary("ssc-cgl", ExamType::Competitive),
            summary("jee-main", ExamType::Entrance),
        ];
        let shaped = shape_related(guides, "upsc-cse", ExamType::Competitive);
        assert_eq!(shaped.len(), 1);
        assert_eq!(shaped[0].exam_type, ExamType::Competitive);
    }

    #[test]
    fn test_shape_related_caps_at_limit() {
        let guides = vec![
            summary("a", ExamType::Government),
            summary("b", ExamType::Government),
            summary("c", ExamType::Government),
            summary("d", ExamType::Government),
            summary("e", ExamType::Government),
        ];
        let shaped = shape_related(guides, "z", ExamType::Government);
        assert_eq!(shaped.len(), RELATED_LIMIT);
    }

    #[test]
    fn test_shape_related_empty_input() {
        let shaped = shape_related(Vec::new(), "z", ExamType::Entrance);
        assert!(shaped.is_empty());
    }

    #[test]
    fn test_query_shapes() {
        assert!(ALL_EXAM_GUIDES.contains("order(title asc)"));
        assert!(ALL_BOARD_EXAMS.contains("order(board asc, class desc)"));
        assert!(ALL_BLOG_POSTS.contains("order(publishedAt desc)"));
        assert!(RELATED_EXAM_GUIDES.contains("[0...3]"));
        assert!(FEATURED_EXAM_GUIDES.contains("[0...6]"));
        assert!(FEATURED_BLOG_POSTS.contains("[0...3]"));
    }

    #[test]
    fn test_slug_queries_project_the_bare_slug_string() {
        // The bare `slug` field is the `{ "current": ... }` object; the
        // sitemap record wants the flattened string.
        for query in [EXAM_GUIDE_SLUGS, BOARD_EXAM_SLUGS, BLOG_POST_SLUGS] {
            assert!(query.contains(r#""slug": slug.current"#));
            assert!(query.contains("_updatedAt"));
        }
    }
}
