//! multiview
//!
//! Session engine for watching several YouTube and Twitch streams at once.
//!
//! The core is pure and never fails: [`parser`] recognizes video URLs,
//! [`state`] holds the ordered session, [`layout`] turns a mode and an entry
//! count into grid geometry, and [`codec`] packs a session into a single query
//! parameter and back. [`embed`] derives the player and chat URLs renderers
//! iframe. [`config`] and [`logging`] support the command-line shell.

pub mod codec;
pub mod config;
pub mod embed;
pub mod layout;
pub mod logging;
pub mod model;
pub mod parser;
pub mod state;
