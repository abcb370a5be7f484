//! Multi-turn chat history for two speakers, serialized into a single flat
//! prompt string for a language model.
//!
//! A [`Conversation`] holds a system preamble, the two speaker labels and
//! an ordered list of turns. [`Conversation::get_prompt`] flattens it with
//! one of two separator strategies, and the [`templates`] module provides
//! named, ready-to-use starting points.
//!
//! ```
//! use conv_templates::default_conversation;
//!
//! let mut conv = default_conversation();
//! let (human, assistant) = conv.roles.clone();
//! conv.append_message(human, Some("Is the heating on right now?".to_string()));
//! conv.append_message(assistant, None);
//!
//! let prompt = conv.get_prompt();
//! assert!(prompt.ends_with("Assistant:"));
//! ```

pub mod conversation;
pub mod error;
pub mod templates;

pub use conversation::{Conversation, Message, SeparatorStyle};
pub use error::{Error, Result};
pub use templates::{
    conv_bair_v1, conv_v1, conv_v1_2, default_conversation, get_template, TEMPLATE_NAMES,
};
