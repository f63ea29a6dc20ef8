use super::domain::{CropDescriptor, CropTransform, NaturalSize};

/// The hero profile image and its crop state.
///
/// A crop requested before the image has loaded is held as pending and
/// applied from [`ProfileImage::on_load`]. Once applied, the `cropped` marker
/// keeps later requests from stacking a second transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileImage {
    pub src: String,
    natural: Option<NaturalSize>,
    pending: Option<CropDescriptor>,
    applied: Option<CropTransform>,
    cropped: bool,
}

impl ProfileImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            natural: None,
            pending: None,
            applied: None,
            cropped: false,
        }
    }

    pub fn request_crop(&mut self, crop: CropDescriptor) {
        if self.cropped {
            return;
        }
        match self.natural {
            Some(size) => self.apply(size, crop),
            None => self.pending = Some(crop),
        }
    }

    pub fn on_load(&mut self, size: NaturalSize) {
        self.natural = Some(size);
        if let Some(crop) = self.pending.take() {
            if !self.cropped {
                self.apply(size, crop);
            }
        }
    }

    fn apply(&mut self, size: NaturalSize, crop: CropDescriptor) {
        if let Some(transform) = CropTransform::compute(size, &crop) {
            self.applied = Some(transform);
            self.cropped = true;
        }
    }

    pub fn is_cropped(&self) -> bool {
        self.cropped
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn transform(&self) -> Option<&CropTransform> {
        self.applied.as_ref()
    }

    /// Inline style for the rendered `<img>`, if a crop is in effect.
    pub fn style(&self) -> Option<String> {
        self.applied.map(|t| t.style())
    }
}
