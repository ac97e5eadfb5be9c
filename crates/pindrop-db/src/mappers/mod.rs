//! Entity to model mappers
//!
//! This module provides conversions between domain entities (pindrop-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `TryFrom<VoteModel> for Vote`: rejects rows that break the one-direction rule
//! - `VoteUpsert`: Prepare a vote for the ledger upsert

mod report;
mod user;
mod vote;

pub use vote::VoteUpsert;
