//! Document kinds owned by the CMS.
//!
//! The application only reads these; authoring and mutation happen in the
//! studio. Each kind has a full detail record (for detail pages) and a
//! lighter summary record (for listings and cards), matching the query
//! projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::richtext::ContentBlock;

/// URL slug wrapper, matching the store's `{ "current": "..." }` shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slug {
    pub current: String,
}

impl Slug {
    #[must_use]
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }
}

/// Exam guide classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    Government,
    Competitive,
    Entrance,
}

impl ExamType {
    /// All exam types, in filter-tab order.
    pub const ALL: [ExamType; 3] = [Self::Government, Self::Competitive, Self::Entrance];

    /// Wire value used in queries and URLs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Competitive => "competitive",
            Self::Entrance => "entrance",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Government => "Government",
            Self::Competitive => "Competitive",
            Self::Entrance => "Entrance",
        }
    }

    /// Parse a query-string value. Unknown values yield `None`, which
    /// listing pages treat as a filter matching nothing.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Education board for board exams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Board {
    #[serde(rename = "cbse")]
    Cbse,
    #[serde(rename = "icse")]
    Icse,
    #[serde(rename = "up-board")]
    UpBoard,
    #[serde(rename = "maharashtra-board")]
    MaharashtraBoard,
    #[serde(rename = "karnataka-board")]
    KarnatakaBoard,
    #[serde(rename = "tamil-nadu-board")]
    TamilNaduBoard,
    #[serde(rename = "other-state")]
    OtherState,
}

impl Board {
    pub const ALL: [Board; 7] = [
        Self::Cbse,
        Self::Icse,
        Self::UpBoard,
        Self::MaharashtraBoard,
        Self::KarnatakaBoard,
        Self::TamilNaduBoard,
        Self::OtherState,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cbse => "cbse",
            Self::Icse => "icse",
            Self::UpBoard => "up-board",
            Self::MaharashtraBoard => "maharashtra-board",
            Self::KarnatakaBoard => "karnataka-board",
            Self::TamilNaduBoard => "tamil-nadu-board",
            Self::OtherState => "other-state",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cbse => "CBSE",
            Self::Icse => "ICSE",
            Self::UpBoard => "UP Board",
            Self::MaharashtraBoard => "Maharashtra Board",
            Self::KarnatakaBoard => "Karnataka Board",
            Self::TamilNaduBoard => "Tamil Nadu Board",
            Self::OtherState => "Other State Board",
        }
    }

    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == value)
    }
}

/// Class level for board exams. The store delivers this as a string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum BoardClass {
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "12")]
    Twelve,
}

impl BoardClass {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ten => "Class 10",
            Self::Twelve => "Class 12",
        }
    }
}

/// Blog post topic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlogCategory {
    #[serde(rename = "study-techniques")]
    StudyTechniques,
    #[serde(rename = "mistakes-to-avoid")]
    MistakesToAvoid,
    #[serde(rename = "motivation")]
    Motivation,
    #[serde(rename = "preparation-mindset")]
    PreparationMindset,
    #[serde(rename = "time-management")]
    TimeManagement,
    #[serde(rename = "exam-strategy")]
    ExamStrategy,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 6] = [
        Self::StudyTechniques,
        Self::MistakesToAvoid,
        Self::Motivation,
        Self::PreparationMindset,
        Self::TimeManagement,
        Self::ExamStrategy,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StudyTechniques => "study-techniques",
            Self::MistakesToAvoid => "mistakes-to-avoid",
            Self::Motivation => "motivation",
            Self::PreparationMindset => "preparation-mindset",
            Self::TimeManagement => "time-management",
            Self::ExamStrategy => "exam-strategy",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::StudyTechniques => "Study Techniques",
            Self::MistakesToAvoid => "Mistakes to Avoid",
            Self::Motivation => "Motivation",
            Self::PreparationMindset => "Preparation Mindset",
            Self::TimeManagement => "Time Management",
            Self::ExamStrategy => "Exam Strategy",
        }
    }

    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// One question/answer pair. Every guide carries at least three.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Faq {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// Subject-wise preparation section on a board exam page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectSection {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub tips: Vec<ContentBlock>,
}

/// Listing projection of an exam guide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExamGuideSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(rename = "examType")]
    pub exam_type: ExamType,
    #[serde(default)]
    pub category: Option<String>,
    /// First overview paragraph, projected by the list query.
    #[serde(default)]
    pub description: Option<String>,
}

/// Full exam guide document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExamGuide {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(rename = "examType")]
    pub exam_type: ExamType,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "seoTitle", default)]
    pub seo_title: Option<String>,
    #[serde(rename = "metaDescription", default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub overview: Vec<ContentBlock>,
    #[serde(rename = "examPattern", default)]
    pub exam_pattern: Vec<ContentBlock>,
    #[serde(default)]
    pub syllabus: Vec<ContentBlock>,
    #[serde(rename = "preparationStrategy", default)]
    pub preparation_strategy: Vec<ContentBlock>,
    #[serde(rename = "studyPlan", default)]
    pub study_plan: Vec<ContentBlock>,
    #[serde(rename = "pyqAnalysis", default)]
    pub pyq_analysis: Option<Vec<ContentBlock>>,
    #[serde(rename = "booksAndResources", default)]
    pub books_and_resources: Vec<ContentBlock>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Listing projection of a board exam.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardExamSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub board: Board,
    #[serde(rename = "class")]
    pub class_level: BoardClass,
    #[serde(default)]
    pub description: Option<String>,
}

/// Full board exam document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardExam {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub board: Board,
    #[serde(rename = "class")]
    pub class_level: BoardClass,
    #[serde(rename = "seoTitle", default)]
    pub seo_title: Option<String>,
    #[serde(rename = "metaDescription", default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub overview: Vec<ContentBlock>,
    #[serde(default)]
    pub subjects: Vec<SubjectSection>,
    #[serde(rename = "scoringStrategies", default)]
    pub scoring_strategies: Vec<ContentBlock>,
    #[serde(rename = "answerWritingTechniques", default)]
    pub answer_writing_techniques: Option<Vec<ContentBlock>>,
    #[serde(rename = "studyPlan", default)]
    pub study_plan: Option<Vec<ContentBlock>>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Listing projection of a blog post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPostSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub category: BlogCategory,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub excerpt: Option<String>,
}

/// Full blog post document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub category: BlogCategory,
    #[serde(rename = "seoTitle", default)]
    pub seo_title: Option<String>,
    #[serde(rename = "metaDescription", default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Dereferenced related exam guides for cross-linking.
    #[serde(rename = "relatedExams", default)]
    pub related_exams: Vec<ExamGuideSummary>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Minimal slug + timestamp projection used by the sitemap. The slug
/// arrives as a plain string; the queries project `slug.current`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlugEntry {
    pub slug: String,
    #[serde(rename = "_updatedAt")]
    pub updated_at: DateTime<Utc>,
}
