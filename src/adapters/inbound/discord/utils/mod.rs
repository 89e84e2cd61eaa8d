pub mod parse;

use crate::ports::inbound::client::{MessageInteractionError, Picture};
use serenity::all::{CreateAttachment, Http};

pub async fn attachment(
    http: &Http,
    picture: &Picture,
) -> Result<CreateAttachment, MessageInteractionError> {
    let file = match picture {
        Picture::File(path) => CreateAttachment::path(path).await,
        Picture::Remote(url) => CreateAttachment::url(http, url).await,
    };

    file.map_err(|why| MessageInteractionError::new(format!("Cannot attach picture - {why}")))
}
