use crate::ports::inbound::client::ChatId;
use crate::ports::outbound::property_store::{PropertyStore, PropertyStoreError, Scope};
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};

const KEY_PREFIX: &str = "mtgbot";

#[derive(Clone)]
pub struct Redis {
    client: Client,
}

impl Redis {
    pub fn create(url: &str) -> Result<Self, PropertyStoreError> {
        let client = Client::open(url).map_err(|why| {
            PropertyStoreError::new(format!("failed to open redis client - {why}"))
        })?;
        Ok(Self { client })
    }

    async fn new_connection(&self) -> Result<MultiplexedConnection, PropertyStoreError> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(connection) => Ok(connection),
            Err(why) => {
                log::warn!("Error making connection {why:?}");
                Err(PropertyStoreError::new(String::from(
                    "Unable to get connection",
                )))
            }
        }
    }
}

#[must_use]
pub fn property_key(key: &str, scope: Scope) -> String {
    format!("{KEY_PREFIX}:{scope}:{key}")
}

#[must_use]
pub fn set_key(key: &str) -> String {
    format!("{KEY_PREFIX}:{key}")
}

#[async_trait]
impl PropertyStore for Redis {
    async fn get(&self, key: String, scope: Scope) -> Result<Option<String>, PropertyStoreError> {
        self.new_connection()
            .await?
            .get::<String, Option<String>>(property_key(&key, scope))
            .await
            .map_err(|why| {
                log::warn!("Error getting property {key} {why:?}");
                PropertyStoreError::new(format!("Unable to get {key}"))
            })
    }

    async fn set(
        &self,
        key: String,
        scope: Scope,
        value: String,
    ) -> Result<(), PropertyStoreError> {
        self.new_connection()
            .await?
            .set::<String, String, ()>(property_key(&key, scope), value)
            .await
            .map_err(|why| {
                log::warn!("Error setting property {key} {why:?}");
                PropertyStoreError::new(format!("Unable to set {key}"))
            })
    }

    async fn members(&self, key: String) -> Result<Vec<ChatId>, PropertyStoreError> {
        self.new_connection()
            .await?
            .smembers::<String, Vec<ChatId>>(set_key(&key))
            .await
            .map_err(|why| {
                log::warn!("Error reading members of {key} {why:?}");
                PropertyStoreError::new(format!("Unable to read {key}"))
            })
    }

    async fn add_member(&self, key: String, chat: ChatId) -> Result<(), PropertyStoreError> {
        self.new_connection()
            .await?
            .sadd::<String, ChatId, ()>(set_key(&key), chat)
            .await
            .map_err(|why| {
                log::warn!("Error adding {chat} to {key} {why:?}");
                PropertyStoreError::new(format!("Unable to add to {key}"))
            })
    }

    async fn remove_member(&self, key: String, chat: ChatId) -> Result<(), PropertyStoreError> {
        self.new_connection()
            .await?
            .srem::<String, ChatId, ()>(set_key(&key), chat)
            .await
            .map_err(|why| {
                log::warn!("Error removing {chat} from {key} {why:?}");
                PropertyStoreError::new(format!("Unable to remove from {key}"))
            })
    }
}
