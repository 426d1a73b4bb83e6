pub const EASY_DIFFICULTY: &str = "The questions should be very straightforward, common knowledge, and have obvious correct answers. Avoid obscure topics.";

pub const MEDIUM_DIFFICULTY: &str = "The questions should require some general knowledge or logical deduction, but not be overly specialized or obscure.";

pub const HARD_DIFFICULTY: &str = "The questions should be challenging, requiring specific knowledge, nuanced understanding, or more complex problem-solving. Include less common facts.";

pub const ANY_DIFFICULTY: &str = "The questions should be of mixed or general difficulty.";

pub const UNIQUENESS_INSTRUCTION: &str =
    "Ensure each question and its options are unique and not repeated from previous requests.";

pub const OPTIONS_INSTRUCTION: &str = "Provide exactly 4 answer options (labeled A, B, C, D) for each question, and give the correct answer as a zero-based index into the options (0 for A, 1 for B, 2 for C, 3 for D).";

pub const OUTPUT_FORMAT_INSTRUCTION: &str = r#"Format the output strictly as a JSON array of objects, like this:
[
  {
    "question": "Question text 1?",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct_answer_index": 0
  },
  {
    "question": "Question text 2?",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct_answer_index": 1
  }
]
Do not include any other text or formatting. Just the JSON array."#;

pub const NONCE_LABEL: &str = "Timestamp for uniqueness:";
