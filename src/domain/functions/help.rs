use crate::ports::inbound::client::MessageInteraction;

pub const HELP: &str = "Put card names in double square brackets to look them up, e.g. [[Lightning Bolt]].
[[$Lightning Bolt]] shows the card together with its prices.
[[#Lightning Bolt]] shows the card rulings.
Double-faced and split cards can be found by either face, e.g. [[Fire]] or [[Ice]].

Commands:
/find name - look up a single card, the same sigils apply
/subscribe feed - post the commander of the day or the mtgsale daily deal to this chat
/unsubscribe feed - stop posting a feed to this chat
/help - show this message";

pub async fn run<I: MessageInteraction + Sync>(interaction: &I, text: &str) {
    if let Err(why) = interaction.reply(text.into()).await {
        log::error!("couldn't create interaction response: {:?}", why);
    };
}
