use serde::{Deserialize, Serialize};

/// A single turn in a conversation.
///
/// `content` is absent while the turn is still waiting for an answer, e.g.
/// right after a speaker label has been appended to cue the model.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: Option<String>,
}

/// Strategy used to join the system preamble and the turns into one flat
/// prompt. Each variant carries the separator token(s) it needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorStyle {
    /// Every completed turn ends with the same separator.
    Single { sep: String },
    /// Turns at even absolute positions end with `sep`, turns at odd
    /// absolute positions end with `sep2`.
    Two { sep: String, sep2: String },
}

impl SeparatorStyle {
    /// The primary separator token.
    pub fn sep(&self) -> &str {
        match self {
            SeparatorStyle::Single { sep } => sep,
            SeparatorStyle::Two { sep, .. } => sep,
        }
    }

    /// The secondary separator token, for styles that use one.
    pub fn sep2(&self) -> Option<&str> {
        match self {
            SeparatorStyle::Single { .. } => None,
            SeparatorStyle::Two { sep2, .. } => Some(sep2),
        }
    }
}

/// Full state of a two-speaker dialogue: the system preamble, the speaker
/// labels, the ordered turns, and the separator strategy used to flatten
/// everything into a prompt.
///
/// One `Conversation` belongs to one logical session. To branch a session,
/// clone it; the clone's turns can be mutated without touching the
/// original's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    /// Preamble prepended to the serialized prompt.
    pub system: String,
    /// Labels for the two participants.
    pub roles: (String, String),
    /// Turns in conversation order. Append-only.
    pub messages: Vec<Message>,
    /// Number of leading turns (e.g. few-shot priming) hidden from the
    /// display view.
    pub offset: usize,
    /// Strategy used by [`get_prompt`](Conversation::get_prompt).
    pub style: SeparatorStyle,
    /// Advisory flag for a hosting UI loop. Ignored by serialization.
    #[serde(default)]
    pub skip_next: bool,
}

impl Conversation {
    /// Serializes the preamble and all turns into a single prompt string.
    ///
    /// The exact byte layout is a contract: downstream tokenizers are
    /// sensitive to spacing, colon placement and separator tokens. A turn
    /// with absent content renders as `role:` with no trailing separator.
    pub fn get_prompt(&self) -> String {
        match &self.style {
            SeparatorStyle::Single { sep } => {
                let mut prompt = format!("{}{}", self.system, sep);
                for message in &self.messages {
                    match &message.content {
                        Some(content) => {
                            prompt.push_str(&format!("{}: {}{}", message.role, content, sep))
                        }
                        None => prompt.push_str(&format!("{}:", message.role)),
                    }
                }
                prompt
            }
            SeparatorStyle::Two { sep, sep2 } => {
                let seps = [sep.as_str(), sep2.as_str()];
                let mut prompt = format!("{}{}", self.system, seps[0]);
                // Alternation is by absolute turn index, not by role.
                for (i, message) in self.messages.iter().enumerate() {
                    match &message.content {
                        Some(content) => prompt
                            .push_str(&format!("{}: {}{}", message.role, content, seps[i % 2])),
                        None => prompt.push_str(&format!("{}:", message.role)),
                    }
                }
                prompt
            }
        }
    }

    /// Appends one turn. The role is free text and is not checked against
    /// [`roles`](Conversation::roles).
    pub fn append_message(&mut self, role: impl Into<String>, content: Option<String>) {
        self.messages.push(Message {
            role: role.into(),
            content,
        });
    }

    /// Groups the turns after [`offset`](Conversation::offset) into pairs
    /// for two-column chat rendering.
    ///
    /// Pairing is positional: a turn at an even relative position opens a
    /// pair `(content, None)`, the next turn fills the second slot. An odd
    /// remaining count leaves the last second slot `None`. Transcripts
    /// whose turns do not strictly alternate will pair by position anyway.
    pub fn to_display_pairs(&self) -> Vec<(Option<String>, Option<String>)> {
        let mut pairs: Vec<(Option<String>, Option<String>)> = Vec::new();
        for (i, message) in self.messages.iter().skip(self.offset).enumerate() {
            if i % 2 == 0 {
                pairs.push((message.content.clone(), None));
            } else if let Some(pair) = pairs.last_mut() {
                pair.1 = message.content.clone();
            }
        }
        pairs
    }

    /// Snapshot of the conversation as a plain JSON value, e.g. to store
    /// session state.
    ///
    /// The snapshot carries the separator token(s) but not the style
    /// selection itself; callers that need to rebuild a [`Conversation`]
    /// must record the [`SeparatorStyle`] separately.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "system": &self.system,
            "roles": &self.roles,
            "messages": &self.messages,
            "offset": self.offset,
            "sep": self.style.sep(),
            "sep2": self.style.sep2(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_conv() -> Conversation {
        Conversation {
            system: "S".to_string(),
            roles: ("A".to_string(), "B".to_string()),
            messages: vec![
                Message {
                    role: "A".to_string(),
                    content: Some("hi".to_string()),
                },
                Message {
                    role: "B".to_string(),
                    content: None,
                },
            ],
            offset: 0,
            style: SeparatorStyle::Single {
                sep: "###".to_string(),
            },
            skip_next: false,
        }
    }

    fn two_conv() -> Conversation {
        Conversation {
            system: "BEGIN:".to_string(),
            roles: ("USER".to_string(), "GPT".to_string()),
            messages: vec![
                Message {
                    role: "USER".to_string(),
                    content: Some("hi".to_string()),
                },
                Message {
                    role: "GPT".to_string(),
                    content: Some("yo".to_string()),
                },
            ],
            offset: 0,
            style: SeparatorStyle::Two {
                sep: " ".to_string(),
                sep2: "</s>".to_string(),
            },
            skip_next: false,
        }
    }

    #[test]
    fn test_single_style_layout() {
        let conv = single_conv();

        assert_eq!(
            conv.get_prompt(),
            "S###A: hi###B:",
            "pending turn must render as `role:` with no trailing separator"
        );
    }

    #[test]
    fn test_two_style_alternates_by_turn_index() {
        let conv = two_conv();

        assert_eq!(conv.get_prompt(), "BEGIN: USER: hi GPT: yo</s>");
    }

    #[test]
    fn test_two_style_pending_turn_has_no_separator() {
        let mut conv = two_conv();
        conv.append_message("USER", Some("more".to_string()));
        conv.append_message("GPT", None);

        assert_eq!(conv.get_prompt(), "BEGIN: USER: hi GPT: yo</s>USER: more GPT:");
    }

    #[test]
    fn test_append_message_is_append_only() {
        let mut conv = single_conv();
        let before = conv.messages.clone();

        conv.append_message("A", Some("again".to_string()));

        assert_eq!(conv.messages.len(), before.len() + 1);
        assert_eq!(
            &conv.messages[..before.len()],
            &before[..],
            "prior entries must be unchanged and in order"
        );
        assert_eq!(conv.messages.last().unwrap().role, "A");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = single_conv();
        let mut branched = original.clone();

        branched.append_message("A", Some("branch only".to_string()));
        branched.messages[0].content = Some("rewritten".to_string());

        assert_eq!(original.messages.len(), 2);
        assert_eq!(original.messages[0].content.as_deref(), Some("hi"));
    }

    #[test]
    fn test_display_pairs_skip_offset_turns() {
        let mut conv = single_conv();
        conv.offset = 2;
        for i in 0..5 {
            let content = format!("m{}", i);
            conv.append_message("A", Some(content));
        }

        let pairs = conv.to_display_pairs();

        assert_eq!(pairs.len(), 3, "5 visible turns must yield 3 pairs");
        assert_eq!(pairs[0].0.as_deref(), Some("m0"));
        assert_eq!(pairs[0].1.as_deref(), Some("m1"));
        assert_eq!(pairs[2].0.as_deref(), Some("m4"));
        assert_eq!(pairs[2].1, None, "odd remainder leaves the last slot empty");
    }

    #[test]
    fn test_display_pairs_preserve_pending_slots() {
        let mut conv = single_conv();
        conv.offset = 0;

        let pairs = conv.to_display_pairs();

        assert_eq!(pairs, vec![(Some("hi".to_string()), None)]);
    }

    #[test]
    fn test_display_pairs_empty_when_offset_past_end() {
        let mut conv = single_conv();
        conv.offset = 10;

        assert!(conv.to_display_pairs().is_empty());
    }

    #[test]
    fn test_snapshot_shape() {
        for conv in [single_conv(), two_conv()] {
            let value = conv.to_value();
            let object = value.as_object().expect("snapshot must be an object");

            let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
            keys.sort_unstable();
            assert_eq!(
                keys,
                vec!["messages", "offset", "roles", "sep", "sep2", "system"],
                "snapshot must expose exactly these keys and no style key"
            );
        }
    }

    #[test]
    fn test_snapshot_sep2_is_null_for_single_style() {
        let value = single_conv().to_value();

        assert_eq!(value["sep"], "###");
        assert!(value["sep2"].is_null());
    }

    #[test]
    fn test_snapshot_sep2_for_two_style() {
        let value = two_conv().to_value();

        assert_eq!(value["sep"], " ");
        assert_eq!(value["sep2"], "</s>");
    }
}
