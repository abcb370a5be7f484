//! Named conversation templates.
//!
//! Every accessor builds a fresh [`Conversation`], so callers can append
//! turns without bleeding state into other sessions.

use crate::conversation::{Conversation, Message, SeparatorStyle};
use crate::error::{Error, Result};

/// Names accepted by [`get_template`].
pub const TEMPLATE_NAMES: [&str; 2] = ["v1", "bair_v1"];

/// One-shot template with a priming exchange hidden from the display view.
pub fn conv_v1() -> Conversation {
    Conversation {
        system: concat!(
            "A chat between a curious human and an artificial intelligence assistant. ",
            "The assistant gives helpful, detailed, and polite answers to the human's questions.",
        )
        .to_string(),
        roles: ("Human".to_string(), "Assistant".to_string()),
        messages: vec![
            Message {
                role: "Human".to_string(),
                content: Some("Give three tips for staying healthy.".to_string()),
            },
            Message {
                role: "Assistant".to_string(),
                content: Some(
                    concat!(
                        "Sure, here are three tips for staying healthy:\n",
                        "1. Exercise regularly: Regular physical activity can help improve your overall health and wellbeing. ",
                        "It can also help reduce your risk of chronic conditions such as obesity, diabetes, heart disease, ",
                        "and certain cancers. Aim for at least 150 minutes of moderate-intensity aerobic exercise or ",
                        "75 minutes of vigorous-intensity aerobic exercise per week, along with muscle-strengthening ",
                        "activities at least two days per week.\n",
                        "2. Eat a balanced diet: Eating a balanced diet that is rich in fruits, ",
                        "vegetables, whole grains, lean proteins, and healthy fats can help support ",
                        "your overall health. Try to limit your intake of processed and high-sugar foods, ",
                        "and aim to drink plenty of water throughout the day.\n",
                        "3. Get enough sleep: Getting enough quality sleep is essential for your physical ",
                        "and mental health. Adults should aim for seven to nine hours of sleep per night. ",
                        "Establish a regular sleep schedule and try to create a relaxing bedtime routine to ",
                        "help improve the quality of your sleep.",
                    )
                    .to_string(),
                ),
            },
        ],
        offset: 2,
        style: SeparatorStyle::Single {
            sep: "###".to_string(),
        },
        skip_next: false,
    }
}

/// Home-assistant variant of [`conv_v1`], with the current home state
/// embedded in the preamble. Registered as `v1` and used as the default.
pub fn conv_v1_2() -> Conversation {
    Conversation {
        system: concat!(
            "A chat between a curious human and an artificial intelligence home assistant. ",
            "The assistant gives helpful, detailed, and polite answers to the human's questions based on the current facts of the home state.###",
            "Home state facts:",
            "The temperature is 35 c.",
            "kitchen lights are on.",
        )
        .to_string(),
        roles: ("Human".to_string(), "Assistant".to_string()),
        messages: vec![
            Message {
                role: "Human".to_string(),
                content: Some("is kitchen lights are currently working ?".to_string()),
            },
            Message {
                role: "Assistant".to_string(),
                content: Some("Yes they are".to_string()),
            },
        ],
        offset: 2,
        style: SeparatorStyle::Single {
            sep: "###".to_string(),
        },
        skip_next: false,
    }
}

/// Template with no priming turns, closing odd turns with an end-of-text
/// token.
pub fn conv_bair_v1() -> Conversation {
    Conversation {
        system: "BEGINNING OF CONVERSATION:".to_string(),
        roles: ("USER".to_string(), "GPT".to_string()),
        messages: Vec::new(),
        offset: 0,
        style: SeparatorStyle::Two {
            sep: " ".to_string(),
            sep2: "</s>".to_string(),
        },
        skip_next: false,
    }
}

/// The template used when the caller does not pick one.
pub fn default_conversation() -> Conversation {
    conv_v1_2()
}

/// Looks up a registered template by name and returns a fresh copy of it.
pub fn get_template(name: &str) -> Result<Conversation> {
    log::debug!("conversation template: {}", name);

    match name {
        "v1" => Ok(conv_v1_2()),
        "bair_v1" => Ok(conv_bair_v1()),
        _ => Err(Error::TemplateNotFound(name.to_string())),
    }
}
