use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const OPTION_COUNT: usize = 4;
pub const MAX_ANSWER_INDEX: u8 = 3;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>, // always OPTION_COUNT entries once validated
    pub correct_answer_index: u8,
    /// Any further fields the generator attached (explanations and the like).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.options
            .get(self.correct_answer_index as usize)
            .map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct QuizQuestionSet(pub Vec<QuizQuestion>);

impl QuizQuestionSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.0
    }
}

impl IntoIterator for QuizQuestionSet {
    type Item = QuizQuestion;
    type IntoIter = std::vec::IntoIter<QuizQuestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
