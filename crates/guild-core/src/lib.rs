//! guild-core: Hero roster for the adventurers' guild
//!
//! This crate contains the data model and roster logic with no I/O.
//! Persistence lives in `guild-save`.

pub mod attributes;
pub mod hero;
pub mod party;
pub mod roster;

mod rng;

pub use attributes::{Attribute, Attributes, NUM_ATTRS, describe};
pub use hero::HeroRecord;
pub use party::{attempt, party_power, select_party, success_chance};
pub use rng::GuildRng;
pub use roster::Roster;
