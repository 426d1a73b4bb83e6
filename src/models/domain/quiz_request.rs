use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "general knowledge";
pub const DEFAULT_NUM_QUESTIONS: &str = "3";

/// A normalized request for one batch of generated questions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRequest {
    pub category: String,
    pub num_questions: QuestionCount,
    pub difficulty: Difficulty,
}

impl Default for QuizRequest {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            num_questions: QuestionCount::parse(DEFAULT_NUM_QUESTIONS),
            difficulty: Difficulty::Any,
        }
    }
}

/// Requested number of questions. No bounds are applied; a value without a
/// leading integer becomes `NotANumber` and renders as `NaN`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionCount {
    Exact(i64),
    NotANumber,
}

impl QuestionCount {
    /// Reads the leading integer of `raw` (optional whitespace, optional sign,
    /// digits). Anything after the digits is ignored.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());

        match digits[..end].parse::<i64>() {
            Ok(value) if negative => QuestionCount::Exact(-value),
            Ok(value) => QuestionCount::Exact(value),
            Err(_) => QuestionCount::NotANumber,
        }
    }

    pub fn as_exact(&self) -> Option<i64> {
        match self {
            QuestionCount::Exact(n) => Some(*n),
            QuestionCount::NotANumber => None,
        }
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionCount::Exact(n) => write!(f, "{}", n),
            QuestionCount::NotANumber => write!(f, "NaN"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Any,
}

impl Difficulty {
    /// Unrecognised values fall back to `Any`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Any,
        }
    }

    pub fn description(&self) -> &'static str {
        use crate::constants::quiz_prompt::{
            ANY_DIFFICULTY, EASY_DIFFICULTY, HARD_DIFFICULTY, MEDIUM_DIFFICULTY,
        };

        match self {
            Difficulty::Easy => EASY_DIFFICULTY,
            Difficulty::Medium => MEDIUM_DIFFICULTY,
            Difficulty::Hard => HARD_DIFFICULTY,
            Difficulty::Any => ANY_DIFFICULTY,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Any => write!(f, "any"),
        }
    }
}
