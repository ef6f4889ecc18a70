//! Port definitions (interfaces implemented by the infrastructure layer)

pub mod chat_gateway;

pub use chat_gateway::{ChatGateway, ChatSession, GatewayError};
