//! Blocking text prompt and message capability
//!
//! Screens never touch `window.prompt`/`window.alert` directly so the flows
//! that use them can be driven by a scripted fake in tests.

pub trait Dialogs {
    /// Ask for a line of text. `None` when dismissed.
    fn request_text(&mut self, message: &str) -> Option<String>;

    /// Show an informational message and wait for acknowledgment
    fn show_message(&mut self, message: &str);
}

/// `window.prompt` / `window.alert`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDialogs;

#[cfg(target_arch = "wasm32")]
impl Dialogs for BrowserDialogs {
    fn request_text(&mut self, message: &str) -> Option<String> {
        web_sys::window()?.prompt_with_message(message).ok().flatten()
    }

    fn show_message(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Dialogs that answer prompts from a fixed script and record what was shown
#[derive(Debug, Default, Clone)]
pub struct ScriptedDialogs {
    answers: Vec<Option<String>>,
    pub prompts: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedDialogs {
    /// Answers are consumed in order; once exhausted every prompt is dismissed
    pub fn new(answers: Vec<Option<String>>) -> Self {
        Self {
            answers,
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn request_text(&mut self, message: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        if self.answers.is_empty() {
            None
        } else {
            self.answers.remove(0)
        }
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
