//! Typed client for the Age of Empires IV leaderboard service.
//!
//! Build a [`Request`] with [`RequestBuilder`], then either list leaderboard
//! rows, look up a single rating, or fetch a player's rating in every
//! [`Category`] concurrently with [`Request::query_all_elo`].

pub mod aggregate;
pub mod aoe4;
pub mod builder;
pub mod client;
pub mod query;

pub use aggregate::RatingMap;
pub use aoe4::{
    response::{Envelope, PlayerRecord},
    Category, MatchType, ParseError, Region, TeamSize, Versus,
};
pub use builder::{BuildError, RequestBuilder, DEFAULT_ENDPOINT};
pub use client::{
    HttpTransport, OutgoingRequest, RawResponse, Request, RequestError, Transport, TransportError,
};
pub use query::QueryDescriptor;
