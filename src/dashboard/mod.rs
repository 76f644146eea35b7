//! Dashboard module: tab views, live system feed and their HTTP surface
//!
//! - [`views`] - one chart-ready view per tab
//! - [`feed`] - sliding window of system snapshots
//! - [`ticker`] - background task extending the window
//! - [`handler`] / [`websocket`] - axum endpoints

pub mod feed;
pub mod handler;
pub mod ticker;
pub mod types;
pub mod views;
pub mod websocket;

pub use feed::LiveFeed;
pub use ticker::LiveTicker;
pub use types::{UpdateType, WebSocketUpdate};
pub use websocket::websocket_handler;
