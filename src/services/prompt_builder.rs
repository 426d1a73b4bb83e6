use crate::{
    constants::quiz_prompt::{
        NONCE_LABEL, OPTIONS_INSTRUCTION, OUTPUT_FORMAT_INSTRUCTION, UNIQUENESS_INSTRUCTION,
    },
    models::domain::QuizRequest,
};

/// Renders the generation instruction for `request`. When a nonce is given it
/// is appended so repeated requests never send byte-identical prompts.
pub fn build_prompt(request: &QuizRequest, nonce: Option<i64>) -> String {
    let mut prompt = format!(
        "Generate exactly {} multiple-choice quiz questions about \"{}\". {} {} {}\n\n{}",
        request.num_questions,
        request.category,
        request.difficulty.description(),
        UNIQUENESS_INSTRUCTION,
        OPTIONS_INSTRUCTION,
        OUTPUT_FORMAT_INSTRUCTION,
    );

    if let Some(nonce) = nonce {
        prompt.push('\n');
        prompt.push_str(NONCE_LABEL);
        prompt.push(' ');
        prompt.push_str(&nonce.to_string());
    }

    prompt
}
