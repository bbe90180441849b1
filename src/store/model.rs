//! Domain model: forms, questions, and submitted responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The five question kinds a form can ask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuestionKind {
    #[default]
    ShortAnswer,
    LongAnswer,
    SingleSelect,
    Number,
    Url,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 5] = [
        Self::ShortAnswer,
        Self::LongAnswer,
        Self::SingleSelect,
        Self::Number,
        Self::Url,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortAnswer => "Short Answer",
            Self::LongAnswer => "Long Answer",
            Self::SingleSelect => "Single Select",
            Self::Number => "Number",
            Self::Url => "URL",
        }
    }
}

/// Kind-specific question settings; changing the kind replaces the
/// whole payload with that kind's defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionInput {
    ShortAnswer { max_length: Option<usize> },
    LongAnswer { max_length: Option<usize> },
    SingleSelect { options: Vec<String> },
    Number { min: i64, max: i64 },
    Url { pattern: String },
}

impl QuestionInput {
    /// Default payload for a kind, used on creation and kind change
    pub fn defaults_for(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::ShortAnswer => Self::ShortAnswer { max_length: None },
            QuestionKind::LongAnswer => Self::LongAnswer { max_length: None },
            QuestionKind::SingleSelect => Self::SingleSelect {
                options: Vec::new(),
            },
            QuestionKind::Number => Self::Number { min: 0, max: 100 },
            QuestionKind::Url => Self::Url {
                pattern: String::new(),
            },
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::ShortAnswer { .. } => QuestionKind::ShortAnswer,
            Self::LongAnswer { .. } => QuestionKind::LongAnswer,
            Self::SingleSelect { .. } => QuestionKind::SingleSelect,
            Self::Number { .. } => QuestionKind::Number,
            Self::Url { .. } => QuestionKind::Url,
        }
    }
}

/// A single question within a form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub required: bool,
    /// Position within the form, always the dense index 0..n-1
    pub order: usize,
    pub input: QuestionInput,
}

impl Question {
    /// New untitled short-answer question at the given position
    pub fn new(order: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            required: false,
            order,
            input: QuestionInput::defaults_for(QuestionKind::ShortAnswer),
        }
    }

    pub fn kind(&self) -> QuestionKind {
        self.input.kind()
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(untitled question)"
        } else {
            &self.title
        }
    }
}

/// A form under construction or accepting submissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl Form {
    pub fn new(title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            questions: Vec::new(),
            created_at: now,
            updated_at: now,
            is_published: false,
            published_at: None,
        }
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Rewrite every question's order to its positional index
    pub fn renumber_questions(&mut self) {
        for (index, question) in self.questions.iter_mut().enumerate() {
            question.order = index;
        }
    }
}

/// A recorded answer value, typed by the question that asked it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerValue {
    Text(String),
    Number(i64),
}

impl AnswerValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Number(_) => false,
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }
}

/// One answer within a submitted response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question_id: String,
    pub value: AnswerValue,
}

/// A completed submission for a form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormResponse {
    pub id: String,
    pub form_id: String,
    pub answers: Vec<QuestionAnswer>,
    pub submitted_at: DateTime<Utc>,
}

impl FormResponse {
    pub fn new(form_id: String, answers: Vec<QuestionAnswer>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            form_id,
            answers,
            submitted_at: Utc::now(),
        }
    }

    pub fn answer(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| &a.value)
    }
}
