pub mod extractors;
mod multipart;
pub mod page;
pub mod routes;
