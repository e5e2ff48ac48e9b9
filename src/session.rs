//! Voice-session configuration boundary
//!
//! The live session (audio transport, VAD, turn-taking, STT, LLM, TTS) is
//! run by an external voice-agent runtime. This module produces the plan
//! that runtime consumes: the proctor instructions built around the
//! acquired study material, the greeting, and the model stack to use.

use crate::config::VoiceConfig;
use crate::persona;

/// Everything the external voice runtime needs to start a proctor session
#[derive(Debug, Clone)]
pub struct SessionPlan {
    /// System prompt with the study material injected
    pub instructions: String,

    /// Line the proctor opens the session with
    pub greeting: String,

    /// Speech-to-text model identifier
    pub stt_model: String,

    /// LLM model identifier for grading and question generation
    pub llm_model: String,

    /// Text-to-speech voice identifier
    pub tts_voice: String,
}

/// Build the session plan for one proctor session
///
/// Called once per session startup, after acquisition; the core has no
/// further interaction with the live session.
#[must_use]
pub fn configure_session(voice: &VoiceConfig, study_material: &str) -> SessionPlan {
    SessionPlan {
        instructions: persona::build_instructions(study_material),
        greeting: persona::GREETING.to_string(),
        stt_model: voice.stt_model.clone(),
        llm_model: voice.llm_model.clone(),
        tts_voice: voice.tts_voice.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_carries_material_and_models() {
        let voice = VoiceConfig::default();
        let plan = configure_session(&voice, "TCP/IP standardized in 1983.");

        assert!(plan.instructions.contains("TCP/IP standardized in 1983."));
        assert_eq!(plan.greeting, persona::GREETING);
        assert_eq!(plan.llm_model, voice.llm_model);
        assert_eq!(plan.stt_model, voice.stt_model);
    }
}
