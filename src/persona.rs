//! Exam-proctor persona
//!
//! Builds the system prompt that constrains the agent to the acquired
//! study material, plus the fixed identity bits (name, greeting) the voice
//! session opens with.

/// Display name of the proctor persona
pub const PROCTOR_NAME: &str = "Studeo";

/// Greeting spoken once the session is live
pub const GREETING: &str =
    "Hello. I am Studeo. I have ingested your study materials. Are you ready for your first question?";

/// Build the proctor system prompt around the study material
///
/// The material is injected verbatim as the knowledge-base constraint; the
/// surrounding rules define the proctor's exam behavior.
#[must_use]
pub fn build_instructions(study_material: &str) -> String {
    format!(
        "You are {PROCTOR_NAME}, a strict but fair oral exam proctor. \
         Your knowledge base is strictly limited to the following context: {study_material}. \
         Do not answer questions outside of this material. \
         Your goal is to test the user's understanding. \
         Ask one question at a time. Wait for their answer. \
         If they are wrong, correct them briefly and move to the next topic. \
         Keep your responses concise and conversational."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_embed_material_verbatim() {
        let material = "ARPANET: 1969";
        let instructions = build_instructions(material);
        assert!(instructions.contains(material));
        assert!(instructions.contains(PROCTOR_NAME));
    }

    #[test]
    fn instructions_state_exam_rules() {
        let instructions = build_instructions("anything");
        assert!(instructions.contains("one question at a time"));
        assert!(instructions.contains("Do not answer questions outside"));
    }
}
