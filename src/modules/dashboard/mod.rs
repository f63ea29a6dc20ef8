//! Admin dashboard: sign-in, the General settings form, and create, edit and
//! delete for every content collection.

pub mod adapter;
pub mod application;
