//! Hosted backend access: tables, auth and object storage.
//!
//! The ports describe what the rest of the crate needs; the adapters speak the
//! Supabase REST dialects over `reqwest`.

pub mod adapter;
pub mod application;
