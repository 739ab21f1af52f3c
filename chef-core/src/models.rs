use serde::{Deserialize, Serialize};

/// Greeting shown as the first assistant turn of every session
pub const SEED_GREETING: &str = "What dish would you like to learn how to cook today?";

/// Fixed sentence shown for any failed turn
///
/// Lives with the models so the WASM client can render it for transport
/// failures the server-side handler never saw.
pub const FAILURE_MESSAGE: &str = "Sorry, an error occurred during processing.";

/// Who authored a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the chat, immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    /// Create a user turn
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// Create an assistant turn
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Ordered, append-only chat log for one session
///
/// Always starts with a single assistant greeting turn. [`Transcript::clear`]
/// drops everything and re-seeds that same greeting, so the transcript is
/// never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// New transcript containing only the seed greeting
    #[must_use]
    pub fn new() -> Self {
        Self {
            turns: vec![Turn::assistant(SEED_GREETING)],
        }
    }

    /// Append a user turn
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    /// Append an assistant turn
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::assistant(text));
    }

    /// Reset to the single seed greeting, regardless of current length
    pub fn clear(&mut self) {
        self.turns = vec![Turn::assistant(SEED_GREETING)];
    }

    /// Turns in insertion order (renders top-to-bottom)
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false: construction and reset both seed the greeting
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_has_seed_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.turns()[0].role, Role::Assistant);
        assert_eq!(transcript.turns()[0].text, SEED_GREETING);
    }

    #[test]
    fn test_exchange_grows_by_two() {
        let mut transcript = Transcript::new();
        let before = transcript.len();

        transcript.push_user("Jollof Rice");
        transcript.push_assistant("Here is a recipe...");

        assert_eq!(transcript.len(), before + 2);
        assert_eq!(transcript.turns()[before].role, Role::User);
        assert_eq!(transcript.turns()[before].text, "Jollof Rice");
        assert_eq!(transcript.turns()[before + 1].role, Role::Assistant);
    }

    #[test]
    fn test_clear_resets_to_seed_regardless_of_length() {
        let mut transcript = Transcript::new();
        for i in 0..10 {
            transcript.push_user(format!("dish {i}"));
            transcript.push_assistant(format!("recipe {i}"));
        }
        assert_eq!(transcript.len(), 21);

        transcript.clear();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.turns()[0], Turn::assistant(SEED_GREETING));
    }

    #[test]
    fn test_never_empty() {
        let mut transcript = Transcript::new();
        assert!(!transcript.is_empty());
        transcript.clear();
        assert!(!transcript.is_empty());
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let turn = Turn::user("hello");
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains(r#""role":"user""#));

        let back: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, turn);
    }
}
