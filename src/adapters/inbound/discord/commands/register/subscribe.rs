use super::feed_option;
use serenity::all::CreateCommand;

pub fn register() -> CreateCommand {
    CreateCommand::new("subscribe")
        .description("Post a daily feed to this channel")
        .add_option(feed_option("The feed to post here"))
}
