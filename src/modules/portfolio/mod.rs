//! Site content: entities, the config snapshot and its reducer, and the
//! aggregated public read.

pub mod adapter;
pub mod application;
