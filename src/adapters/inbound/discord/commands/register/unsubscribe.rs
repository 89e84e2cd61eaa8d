use super::feed_option;
use serenity::all::CreateCommand;

pub fn register() -> CreateCommand {
    CreateCommand::new("unsubscribe")
        .description("Stop posting a daily feed to this channel")
        .add_option(feed_option("The feed to stop"))
}
