//! Server-rendered public portfolio page and its detail overlay.

pub mod adapter;
pub mod view;
