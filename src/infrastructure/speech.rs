// SPDX-License-Identifier: MPL-2.0
//! Speech synthesis via the platform synthesizer command.
//!
//! No crate in this stack talks to the system speech services directly, so
//! the adapter shells out to whatever the platform provides: `spd-say`
//! (speech-dispatcher) on Linux and the BSDs, `say` on macOS, and the
//! `System.Speech` assembly through PowerShell on Windows. Playback blocks
//! until the phrase finishes; the shell wraps calls in a blocking task.

use crate::application::port::speech::{SpeechError, SpeechSynthesizer};
use std::io;
use std::process::Command;

/// [`SpeechSynthesizer`] backed by the platform synthesizer command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpeech;

impl SystemSpeech {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SpeechSynthesizer for SystemSpeech {
    fn speak(&self, text: &str, lang_tag: &str) -> Result<(), SpeechError> {
        run_synthesizer(text, lang_tag).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SpeechError::SynthesizerUnavailable,
            _ => SpeechError::SynthesisFailed(err.to_string()),
        })
    }
}

#[cfg(target_os = "macos")]
fn run_synthesizer(text: &str, _lang_tag: &str) -> io::Result<()> {
    // `say` picks the voice from system preferences; there is no portable
    // voice-by-language flag.
    exit_ok(Command::new("say").arg(text).status()?)
}

#[cfg(target_os = "windows")]
fn run_synthesizer(text: &str, _lang_tag: &str) -> io::Result<()> {
    let script = format!(
        "Add-Type -AssemblyName System.Speech; \
         (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{}')",
        text.replace('\'', "''")
    );
    exit_ok(
        Command::new("powershell")
            .args(["-NoProfile", "-Command", &script])
            .status()?,
    )
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn run_synthesizer(text: &str, lang_tag: &str) -> io::Result<()> {
    // speech-dispatcher takes the primary language subtag, not a full tag.
    let language = lang_tag.split('-').next().unwrap_or(lang_tag);
    exit_ok(
        Command::new("spd-say")
            .args(["--wait", "-l", language, "--", text])
            .status()?,
    )
}

fn exit_ok(status: std::process::ExitStatus) -> io::Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "synthesizer exited with {status}"
        )))
    }
}
