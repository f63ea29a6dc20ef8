//! Profile photo crop: capture, CSS transform, and deferred application once
//! the image's natural size is known.

mod domain;
mod element;
mod probe;

pub use domain::{CropDescriptor, CropError, CropTransform, NaturalSize};
pub use element::ProfileImage;
pub use probe::{dimensions_of, prepare_profile_image, HttpImageProbe, ImageProbe, ProbeError};

#[cfg(test)]
pub(crate) use probe::fake;
