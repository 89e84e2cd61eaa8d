pub mod redis;

use crate::adapters::outbound::property_store::redis::Redis;
use crate::ports::outbound::property_store::PropertyStoreError;

pub fn init_property_store(url: &str) -> Result<Redis, PropertyStoreError> {
    Redis::create(url)
}
