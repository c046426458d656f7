//! Rock/paper/scissors client library
//!
//! Client-side synchronization for two-player matches held by a remote
//! authority. The authority owns every match; this crate polls it, derives
//! what the local player can do next and publishes the resulting state
//! changes.
//!
//! ## Layout
//!
//! - [`client`] / [`connection`]: typed HTTP access to the authority
//! - [`deriver`]: pure turn derivation from a match snapshot
//! - [`scheduler`]: recurring fetches with overlap and staleness guards
//! - [`session`]: the task tying the above together behind a handle
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use rps_client::{Client, ConnectionInfo, Session, SyncConfig};
//! use rps_primitives::identity::Player;
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let connection = ConnectionInfo::new("http://localhost:9000/".parse()?)?;
//!     let client = Arc::new(Client::new(connection));
//!
//!     let (session, mut events) = Session::spawn(client, SyncConfig::default());
//!
//!     session.register(Player::new("alice".parse()?, "Alice")).await?;
//!     let _lobby = session.join_lobby().await?;
//!
//!     while let Some(event) = events.recv().await {
//!         println!("{event:?}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod authority;
pub mod client;
pub mod config;
pub mod connection;
pub mod deriver;
pub mod errors;
pub mod events;
pub mod scheduler;
pub mod session;

// Re-export main types for convenience
pub use authority::Authority;
pub use client::Client;
pub use config::{JoinMode, SyncConfig};
pub use connection::ConnectionInfo;
pub use deriver::{derive, DerivedView, Phase};
pub use errors::{ClientError, DeriveError, SessionError};
pub use events::SessionEvent;
pub use eyre::Result;
pub use session::{Session, SessionHandle, SessionState, SessionStatus};
// Re-export for convenience
pub use url::Url;
