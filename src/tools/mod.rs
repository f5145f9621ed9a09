//! # Tool Operations
//!
//! The host-facing surface of the toolbox. Every operation here takes
//! simple scalar/sequence arguments and returns a single `String`; no
//! error, panic or exception ever crosses this boundary. The consumer is
//! an LLM agent host that relays the returned text onward and cannot catch
//! anything else.
//!
//! Two independent families:
//!
//! - [`catalog`] - Spotify catalog lookups (search, top tracks, album
//!   tracklists, discographies)
//! - [`fitness`] - fitness advisor operations (macro calculation, workout
//!   splits, body-part routines, gym schedule, identity/time helpers)
//!
//! Operations are independently idempotent and re-entrant; the only state
//! shared between calls is the in-process bearer-token cache inside
//! [`crate::management::TokenManager`].

pub mod catalog;
pub mod fitness;
