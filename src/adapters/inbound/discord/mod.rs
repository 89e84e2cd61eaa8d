pub mod broadcaster;
pub mod client;
mod commands;
mod messages;
mod utils;

use crate::adapters::inbound::discord::commands::interaction::DiscordCommand;
use crate::adapters::inbound::discord::commands::register::{find, help, subscribe, unsubscribe};
use crate::adapters::inbound::discord::messages::interaction::DiscordMessageInteraction;
use crate::domain::app::App;
use crate::domain::functions;
use crate::domain::functions::help::HELP;
use crate::domain::functions::subscribe::SubscribeOptions;
use crate::domain::query::CardQuery;
use crate::domain::search::FindOptions;
use crate::ports::outbound::card_info::CardInfo;
use crate::ports::outbound::picture_cache::PictureCache;
use crate::ports::outbound::price_source::PriceSource;
use crate::ports::outbound::property_store::PropertyStore;
use async_trait::async_trait;
use serenity::all::{Command, Context, CreateCommand, EventHandler, Interaction, Message, Ready};
use utils::parse;

const HELP_TRIGGER: &str = "!help";
const FIND_PREFIX: &str = "!find ";

async fn register(ctx: &Context, name: &str, command: CreateCommand) {
    if let Err(err) = Command::create_global_command(ctx, command).await {
        log::warn!("Could not create command {err:?}");
    } else {
        log::info!("Created {name} command");
    }
}

#[async_trait]
impl<PC, CI, PS, S> EventHandler for App<PC, CI, PS, S>
where
    PC: PictureCache + Send + Sync,
    CI: CardInfo + Send + Sync,
    PS: PriceSource + Send + Sync,
    S: PropertyStore + Send + Sync,
{
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.id == ctx.cache.current_user().id || msg.author.bot {
            return;
        }

        let interaction = DiscordMessageInteraction::new(ctx, msg);
        let content = interaction.content().trim();
        if content == HELP_TRIGGER {
            functions::help::run(&interaction, HELP).await;
        } else if let Some(name) = content.strip_prefix(FIND_PREFIX) {
            let options = FindOptions {
                name: name.to_string(),
            };
            self.find_command(&interaction, options).await;
        } else {
            let queries = CardQuery::extract(content);
            if !queries.is_empty() {
                self.find(&interaction, &queries).await;
            }
        }
    }

    async fn ready(&self, ctx: Context, _: Ready) {
        register(&ctx, "find", find::register()).await;
        register(&ctx, "help", help::register()).await;
        register(&ctx, "subscribe", subscribe::register()).await;
        register(&ctx, "unsubscribe", unsubscribe::register()).await;

        log::info!("Bot ready!");
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        if command.user.bot {
            return;
        }

        log::info!(
            "Received command: {:?} from {}",
            command.data.name,
            command.channel_id,
        );

        match command.data.name.as_str() {
            "help" => {
                let interaction = DiscordCommand::new(ctx, command);
                functions::help::run(&interaction, HELP).await;
            }
            "find" => {
                let options = match parse::options::<FindOptions>(command.data.options()) {
                    Ok(options) => options,
                    Err(err) => {
                        log::warn!("{err}");
                        return;
                    }
                };
                let interaction = DiscordCommand::new(ctx, command);
                if let Err(why) = interaction.defer().await {
                    log::warn!("Could not defer find command - {why}");
                }
                self.find_command(&interaction, options).await;
            }
            "subscribe" => {
                let options = match parse::options::<SubscribeOptions>(command.data.options()) {
                    Ok(options) => options,
                    Err(err) => {
                        log::warn!("{err}");
                        return;
                    }
                };
                let interaction = DiscordCommand::new(ctx, command);
                self.subscribe_command(&interaction, options).await;
            }
            "unsubscribe" => {
                let options = match parse::options::<SubscribeOptions>(command.data.options()) {
                    Ok(options) => options,
                    Err(err) => {
                        log::warn!("{err}");
                        return;
                    }
                };
                let interaction = DiscordCommand::new(ctx, command);
                self.unsubscribe_command(&interaction, options).await;
            }
            _ => (),
        }
    }
}
