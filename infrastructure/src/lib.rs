//! Infrastructure layer for persona-chorus
//!
//! Adapters behind the application-layer ports: roster configuration
//! loading, structured conversation logging, and in-process completion
//! gateways (scripted playback, model-keyed routing). Production
//! completion backends live in downstream crates and plug into the same
//! [`CompletionGateway`](chorus_application::CompletionGateway) port.

pub mod config;
pub mod gateway;
pub mod logging;

pub use config::{ConfigError, RosterConfig, RosterLoader};
pub use gateway::{RoutingGateway, ScriptedGateway};
pub use logging::JsonlConversationLogger;
