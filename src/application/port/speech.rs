// SPDX-License-Identifier: MPL-2.0
//! Speech synthesis port for the voice-alert demo.

use std::fmt;

// =============================================================================
// SpeechError
// =============================================================================

/// Errors that can occur during speech synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// No speech synthesizer is available on this system.
    SynthesizerUnavailable,

    /// The synthesizer ran but reported failure.
    SynthesisFailed(String),
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechError::SynthesizerUnavailable => {
                write!(f, "no speech synthesizer available")
            }
            SpeechError::SynthesisFailed(msg) => write!(f, "speech synthesis failed: {msg}"),
        }
    }
}

impl std::error::Error for SpeechError {}

// =============================================================================
// SpeechSynthesizer
// =============================================================================

/// Speaks a short localized phrase out loud.
///
/// Implementations may block until playback completes; the shell runs them on
/// a blocking task. A failing synthesizer must never take the page down - the
/// demo button simply reports the error.
pub trait SpeechSynthesizer: Send + Sync {
    /// Speaks `text` using a voice for the given BCP-47 `lang_tag`.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::SynthesizerUnavailable`] when the system has no
    /// synthesizer, or [`SpeechError::SynthesisFailed`] when it reports an
    /// error.
    fn speak(&self, text: &str, lang_tag: &str) -> Result<(), SpeechError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_a_reason() {
        assert!(SpeechError::SynthesizerUnavailable
            .to_string()
            .contains("no speech synthesizer"));
        assert!(SpeechError::SynthesisFailed("exit code 1".to_string())
            .to_string()
            .contains("exit code 1"));
    }
}
