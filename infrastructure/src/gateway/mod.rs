//! In-process completion gateways.
//!
//! [`ScriptedGateway`] plays back canned completions for tests and offline
//! replay; [`RoutingGateway`] composes real backends by dispatching each
//! request on its model id.

mod routing;
mod scripted;

pub use routing::RoutingGateway;
pub use scripted::ScriptedGateway;
