use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

pub fn register() -> CreateCommand {
    CreateCommand::new("find")
        .description("Look up a card, prefix the name with $ for prices or # for rulings")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "name",
                "The exact name of the card",
            )
            .required(true),
        )
}
