use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub is_bot: bool,
}

/// Append-only, session-scoped chat history. Ids increase strictly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    next_id: u64,
}

impl Transcript {
    pub fn with_greeting(greeting: &str) -> Self {
        let mut transcript = Self::default();
        transcript.push(greeting.to_string(), true);
        transcript
    }

    pub fn push(&mut self, text: String, is_bot: bool) -> &ChatMessage {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            is_bot,
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase_in_append_order() {
        let mut transcript = Transcript::with_greeting("hi");
        transcript.push("question".to_string(), false);
        transcript.push("answer".to_string(), true);

        let ids: Vec<u64> = transcript.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(transcript.messages()[0].is_bot);
        assert!(!transcript.messages()[1].is_bot);
    }
}
