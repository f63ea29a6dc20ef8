mod renderer;

pub use renderer::{CollectionRenderer, Container};
