use crate::domain::feeds::Feed;
use crate::domain::functions::subscribe::SubscribeOptions;
use crate::domain::search::FindOptions;
use serenity::all::{ResolvedOption, ResolvedValue};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Error parsing command options: {message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub trait ResolveOption {
    fn resolve(options: Vec<(&str, ResolvedValue)>) -> Result<Self, ParseError>
    where
        Self: Sized;
}

pub fn options<T: ResolveOption>(options: Vec<ResolvedOption>) -> Result<T, ParseError> {
    let options: Vec<(&str, ResolvedValue)> = options
        .into_iter()
        .map(|option| (option.name, option.value))
        .collect();

    T::resolve(options)
}

impl ResolveOption for FindOptions {
    fn resolve(options: Vec<(&str, ResolvedValue)>) -> Result<Self, ParseError> {
        let mut name = None;

        for (option, value) in options {
            if option == "name" {
                name = match value {
                    ResolvedValue::String(name) => Some(name.to_string()),
                    _ => return Err(ParseError::new("name was not a string")),
                }
            }
        }

        match name {
            Some(name) => Ok(FindOptions { name }),
            None => Err(ParseError::new("name is required")),
        }
    }
}

impl ResolveOption for SubscribeOptions {
    fn resolve(options: Vec<(&str, ResolvedValue)>) -> Result<Self, ParseError> {
        let mut feed = None;

        for (option, value) in options {
            if option == "feed" {
                feed = match value {
                    ResolvedValue::String(key) => {
                        Some(key.parse::<Feed>().map_err(|why| ParseError::new(&why))?)
                    }
                    _ => return Err(ParseError::new("feed was not a string")),
                }
            }
        }

        match feed {
            Some(feed) => Ok(SubscribeOptions { feed }),
            None => Err(ParseError::new("feed is required")),
        }
    }
}
