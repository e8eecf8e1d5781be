use super::GenerationRequest;

/// Compose the instruction sent to the model
///
/// Fields are inserted verbatim.
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        "You are a helpful writing assistant. Follow these instructions exactly:\n\
         1. Write an informative blog post of 200 to 300 words on the topic below for {audience}-level readers.\n\
         2. Return only the blog post as plain text. Do not add comments, disclaimers, or follow-up questions.\n\
         \n\
         Topic: {topic}\n\
         Expertise Level: {level}\n\
         Additional Context: {context}\n",
        audience = request.expertise_level.to_lowercase(),
        topic = request.topic,
        level = request.expertise_level,
        context = request.context,
    )
}
