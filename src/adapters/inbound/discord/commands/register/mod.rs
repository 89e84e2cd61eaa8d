pub mod find;
pub mod help;
pub mod subscribe;
pub mod unsubscribe;

use crate::domain::feeds::Feed;
use serenity::all::{CommandOptionType, CreateCommandOption};

fn feed_option(description: &str) -> CreateCommandOption {
    Feed::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "feed", description).required(true),
        |option, feed| option.add_string_choice(feed.to_string(), feed.key()),
    )
}
