use serde::Deserialize;

use crate::{names, quiz::CategoryFilter};

/// Deserialize an optional integer that may arrive as a JSON number or as a string
/// containing a number. Select boxes in the quiz frontend post their values as strings.
fn deserialize_optional_i64<'de, D: serde::Deserializer<'de>>(
    d: D,
) -> Result<Option<i64>, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = Option<i64>;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number, numeric string or null")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v).map(Some).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.trim().parse().map(Some).map_err(E::custom)
        }
        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }
    d.deserialize_any(Vis)
}

/// Body of `POST /questions`: a search when `searchTerm` is set, a new question otherwise.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionBody {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub difficulty: Option<i64>,
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl QuestionBody {
    /// The search term, if this body asks for a search.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }

    pub fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Unvalidated fields of a question to create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub id: Option<i64>,
}

impl QuizBody {
    pub fn category_filter(&self) -> CategoryFilter {
        match self.quiz_category.as_ref().and_then(|c| c.id) {
            None | Some(names::ANY_CATEGORY_ID) => CategoryFilter::Any,
            Some(id) => CategoryFilter::Only(id),
        }
    }
}
