pub mod collection;
pub mod crop;
pub mod dashboard;
pub mod form;
pub mod gateway;
pub mod portfolio;
pub mod public_site;
pub mod schema;
