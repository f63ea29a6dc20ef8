mod get_portfolio;

pub use get_portfolio::*;
