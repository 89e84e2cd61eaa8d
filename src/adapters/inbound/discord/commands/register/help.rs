use serenity::all::CreateCommand;

pub fn register() -> CreateCommand {
    CreateCommand::new("help").description("How to look up cards")
}
