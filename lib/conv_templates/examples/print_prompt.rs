use anyhow::Result;
use conv_templates::default_conversation;

fn main() -> Result<()> {
    env_logger::init();

    let mut conv = default_conversation();
    let (human, assistant) = conv.roles.clone();

    conv.append_message(human, Some("Turn off the kitchen lights.".to_string()));
    conv.append_message(assistant, None);

    println!("{}", conv.get_prompt());

    Ok(())
}
