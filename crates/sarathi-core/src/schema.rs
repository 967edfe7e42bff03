//! Declarative content schema definitions.
//!
//! Describes the three document kinds field-for-field the way the authoring
//! studio expects them: name, type, validation rules, and the authoring
//! group each field belongs to. The studio mount serves the JSON manifest
//! produced by [`manifest`].

use serde::Serialize;

/// Authoring group a field is displayed under.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldGroup {
    Basic,
    Seo,
    Content,
}

/// Field data type.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum FieldType {
    /// Single-line string, optionally restricted to enumerated options.
    String {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        options: Vec<SchemaOption>,
    },
    /// Multi-line text.
    Text,
    /// URL slug derived from another field.
    Slug { source: &'static str },
    /// Date-time value.
    Datetime,
    /// Ordered rich text blocks.
    RichText,
    /// Ordered rich text blocks that may also contain images.
    RichTextWithImages,
    /// Ordered question/answer pairs.
    FaqList,
    /// Ordered subject sections (name + rich text tips).
    SubjectList,
    /// References to other documents of the named kind.
    ReferenceList { to: &'static str },
}

/// One enumerated option for a string field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SchemaOption {
    pub title: &'static str,
    pub value: &'static str,
}

/// Validation rules attached to a field.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Validation {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
}

impl Validation {
    #[must_use]
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn required_max(max_length: usize) -> Self {
        Self {
            required: true,
            max_length: Some(max_length),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn required_min_items(min_items: usize) -> Self {
        Self {
            required: true,
            min_items: Some(min_items),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn min_items(min_items: usize) -> Self {
        Self {
            min_items: Some(min_items),
            ..Self::default()
        }
    }
}

/// One field of a document schema.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchemaField {
    pub name: &'static str,
    pub title: &'static str,
    pub group: FieldGroup,
    #[serde(flatten)]
    pub field_type: FieldType,
    #[serde(default)]
    pub validation: Validation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl SchemaField {
    fn new(
        name: &'static str,
        title: &'static str,
        group: FieldGroup,
        field_type: FieldType,
        validation: Validation,
    ) -> Self {
        Self {
            name,
            title,
            group,
            field_type,
            validation,
            description: None,
        }
    }

    fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Schema for one document kind.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DocumentSchema {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: Vec<SchemaField>,
}

impl DocumentSchema {
    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn seo_fields() -> [SchemaField; 2] {
    [
        SchemaField::new(
            "seoTitle",
            "SEO Title",
            FieldGroup::Seo,
            FieldType::String { options: vec![] },
            Validation::required_max(60),
        )
        .describe("Max 60 characters"),
        SchemaField::new(
            "metaDescription",
            "Meta Description",
            FieldGroup::Seo,
            FieldType::Text,
            Validation::required_max(160),
        )
        .describe("Max 160 characters"),
    ]
}

fn faq_field() -> SchemaField {
    SchemaField::new(
        "faqs",
        "FAQs",
        FieldGroup::Content,
        FieldType::FaqList,
        Validation::required_min_items(3),
    )
}

fn rich_text(
    name: &'static str,
    title: &'static str,
    validation: Validation,
) -> SchemaField {
    SchemaField::new(name, title, FieldGroup::Content, FieldType::RichText, validation)
}

/// Schema for the exam guide document kind.
#[must_use]
pub fn exam_guide() -> DocumentSchema {
    let mut fields = vec![
        SchemaField::new(
            "title",
            "Exam Title",
            FieldGroup::Basic,
            FieldType::String { options: vec![] },
            Validation::required_max(100),
        ),
        SchemaField::new(
            "slug",
            "Slug",
            FieldGroup::Basic,
            FieldType::Slug { source: "title" },
            Validation::required(),
        ),
        SchemaField::new(
            "examType",
            "Exam Type",
            FieldGroup::Basic,
            FieldType::String {
                options: vec![
                    SchemaOption { title: "Government", value: "government" },
                    SchemaOption { title: "Competitive", value: "competitive" },
                    SchemaOption { title: "Entrance", value: "entrance" },
                ],
            },
            Validation::required(),
        ),
        SchemaField::new(
            "category",
            "Category",
            FieldGroup::Basic,
            FieldType::String { options: vec![] },
            Validation::default(),
        )
        .describe("e.g., Banking, Railways, UPSC, State PSC"),
    ];
    fields.extend(seo_fields());
    fields.extend([
        rich_text("overview", "Exam Overview", Validation::required()),
        rich_text("examPattern", "Exam Pattern", Validation::required()),
        rich_text("syllabus", "Syllabus Breakdown", Validation::required()),
        rich_text(
            "preparationStrategy",
            "Preparation Strategy",
            Validation::required(),
        ),
        rich_text("studyPlan", "Study Plan", Validation::required()),
        rich_text(
            "pyqAnalysis",
            "Previous Year Question Analysis",
            Validation::default(),
        ),
        rich_text(
            "booksAndResources",
            "Books & Resources",
            Validation::required(),
        ),
        faq_field(),
    ]);

    DocumentSchema {
        name: "examGuide",
        title: "Exam Guide",
        fields,
    }
}

/// Schema for the board exam document kind.
#[must_use]
pub fn board_exam() -> DocumentSchema {
    let mut fields = vec![
        SchemaField::new(
            "title",
            "Title",
            FieldGroup::Basic,
            FieldType::String { options: vec![] },
            Validation::required_max(100),
        ),
        SchemaField::new(
            "slug",
            "Slug",
            FieldGroup::Basic,
            FieldType::Slug { source: "title" },
            Validation::required(),
        ),
        SchemaField::new(
            "board",
            "Board",
            FieldGroup::Basic,
            FieldType::String {
                options: vec![
                    SchemaOption { title: "CBSE", value: "cbse" },
                    SchemaOption { title: "ICSE", value: "icse" },
                    SchemaOption { title: "UP Board", value: "up-board" },
                    SchemaOption { title: "Maharashtra Board", value: "maharashtra-board" },
                    SchemaOption { title: "Karnataka Board", value: "karnataka-board" },
                    SchemaOption { title: "Tamil Nadu Board", value: "tamil-nadu-board" },
                    SchemaOption { title: "Other State Board", value: "other-state" },
                ],
            },
            Validation::required(),
        ),
        SchemaField::new(
            "class",
            "Class",
            FieldGroup::Basic,
            FieldType::String {
                options: vec![
                    SchemaOption { title: "Class 10", value: "10" },
                    SchemaOption { title: "Class 12", value: "12" },
                ],
            },
            Validation::required(),
        ),
    ];
    fields.extend(seo_fields());
    fields.extend([
        rich_text("overview", "Overview", Validation::required()),
        SchemaField::new(
            "subjects",
            "Subject-wise Preparation",
            FieldGroup::Content,
            FieldType::SubjectList,
            Validation::default(),
        ),
        rich_text(
            "scoringStrategies",
            "Scoring Strategies",
            Validation::required(),
        ),
        rich_text(
            "answerWritingTechniques",
            "Answer Writing Techniques",
            Validation::default(),
        ),
        rich_text("studyPlan", "Study Plan", Validation::default()),
        faq_field(),
    ]);

    DocumentSchema {
        name: "boardExam",
        title: "Board Exam",
        fields,
    }
}

/// Schema for the blog post document kind.
#[must_use]
pub fn blog_post() -> DocumentSchema {
    let mut fields = vec![
        SchemaField::new(
            "title",
            "Title",
            FieldGroup::Basic,
            FieldType::String { options: vec![] },
            Validation::required_max(100),
        ),
        SchemaField::new(
            "slug",
            "Slug",
            FieldGroup::Basic,
            FieldType::Slug { source: "title" },
            Validation::required(),
        ),
        SchemaField::new(
            "category",
            "Category",
            FieldGroup::Basic,
            FieldType::String {
                options: vec![
                    SchemaOption { title: "Study Techniques", value: "study-techniques" },
                    SchemaOption { title: "Mistakes to Avoid", value: "mistakes-to-avoid" },
                    SchemaOption { title: "Motivation", value: "motivation" },
                    SchemaOption { title: "Preparation Mindset", value: "preparation-mindset" },
                    SchemaOption { title: "Time Management", value: "time-management" },
                    SchemaOption { title: "Exam Strategy", value: "exam-strategy" },
                ],
            },
            Validation::required(),
        ),
        SchemaField::new(
            "publishedAt",
            "Published At",
            FieldGroup::Basic,
            FieldType::Datetime,
            Validation::required(),
        ),
    ];
    fields.extend(seo_fields());
    fields.extend([
        SchemaField::new(
            "content",
            "Content",
            FieldGroup::Content,
            FieldType::RichTextWithImages,
            Validation::required(),
        ),
        SchemaField::new(
            "relatedExams",
            "Related Exam Guides",
            FieldGroup::Content,
            FieldType::ReferenceList { to: "examGuide" },
            Validation::min_items(2),
        )
        .describe("Link to at least 2 exam guides for internal linking"),
    ]);

    DocumentSchema {
        name: "blogPost",
        title: "Blog Post",
        fields,
    }
}

/// All document schemas.
#[must_use]
pub fn all() -> Vec<DocumentSchema> {
    vec![exam_guide(), board_exam(), blog_post()]
}

/// JSON manifest of all schemas, served under the studio mount.
#[must_use]
pub fn manifest() -> serde_json::Value {
    serde_json::json!({
        "schemas": all(),
    })
}
