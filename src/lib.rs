//! # linode-netint
//!
//! Client for Linode's undocumented network-internals endpoints, which
//! report ping telemetry (round-trip time, packet loss, jitter) between
//! data centers. Each region exposes a `ping/samples` endpoint describing
//! its view of every tracked region; this crate fetches one and returns it
//! as a strongly typed [`Overview`].
//!
//! The upstream JSON is inconsistently typed: the timestamp is a number
//! while RTT, loss, and jitter arrive as decimal strings. Decoding
//! normalizes all of them into plain integers and rejects anything that
//! does not parse, rather than reproducing the quirk.
//!
//! This crate is not maintained by nor affiliated with Linode; it simply
//! consumes data from an undocumented public API.
//!
//! ## Example
//!
//! ```rust,no_run
//! use netint::{NetintClient, Region};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NetintClient::new();
//!
//!     let overview = client.overview(Region::Dallas).await?;
//!     for (destination, sample) in overview.iter() {
//!         println!("dallas -> {}: {} ms", destination, sample.rtt);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
mod decode;
pub mod error;
pub mod region;
pub mod types;

pub use client::{NetintClient, NetintClientBuilder};
pub use error::{Error, SampleField};
pub use region::{abbreviation, regions, Region};
pub use types::{Overview, Sample};

/// Library version, reported in the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
