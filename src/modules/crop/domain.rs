use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

fn one() -> f64 {
    1.0
}

/// Crop rectangle chosen in the dashboard, in source-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropDescriptor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, alias = "rotation")]
    pub rotate: f64,
    #[serde(default = "one")]
    pub scale_x: f64,
    #[serde(default = "one")]
    pub scale_y: f64,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum CropError {
    #[error("Crop {0} must be a finite number")]
    NotFinite(&'static str),

    #[error("Crop {0} must be greater than zero")]
    NonPositive(&'static str),
}

impl CropDescriptor {
    /// Validated capture of a confirmed crop selection.
    pub fn capture(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotate: Option<f64>,
        scale_x: Option<f64>,
        scale_y: Option<f64>,
    ) -> Result<Self, CropError> {
        let crop = Self {
            x,
            y,
            width,
            height,
            rotate: rotate.unwrap_or(0.0),
            scale_x: scale_x.unwrap_or(1.0),
            scale_y: scale_y.unwrap_or(1.0),
        };
        crop.validate()?;
        Ok(crop)
    }

    pub fn validate(&self) -> Result<(), CropError> {
        let fields = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("rotate", self.rotate),
            ("scaleX", self.scale_x),
            ("scaleY", self.scale_y),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CropError::NotFinite(*name));
        }
        if self.width <= 0.0 {
            return Err(CropError::NonPositive("width"));
        }
        if self.height <= 0.0 {
            return Err(CropError::NonPositive("height"));
        }
        Ok(())
    }
}

/// Intrinsic pixel size of a loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalSize {
    pub width: u32,
    pub height: u32,
}

/// CSS placement that shows only the crop rectangle inside a frame of the
/// image's rendered width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropTransform {
    pub scale: f64,
    /// Percent of the element's own width.
    pub translate_x: f64,
    /// Percent of the element's own height.
    pub translate_y: f64,
}

impl CropTransform {
    /// `None` when the natural size is still unknown (zero) or the crop is
    /// invalid.
    pub fn compute(size: NaturalSize, crop: &CropDescriptor) -> Option<Self> {
        if size.width == 0 || size.height == 0 || crop.validate().is_err() {
            return None;
        }

        let natural_w = f64::from(size.width);
        let natural_h = f64::from(size.height);

        let scale = natural_w / crop.width;
        let translate_x = -(crop.x / natural_w * 100.0) * scale;
        let translate_y = -(crop.y / natural_h * 100.0) * (natural_h / natural_w) * scale;

        Some(Self {
            scale,
            translate_x,
            translate_y,
        })
    }

    /// Inline style for the `<img>` element.
    pub fn style(&self) -> String {
        format!(
            "transform: {self}; transform-origin: 0 0; position: absolute; top: 0; left: 0; width: 100%; height: auto;"
        )
    }
}

impl fmt::Display for CropTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale({}) translate({}%, {}%)",
            self.scale, self.translate_x, self.translate_y
        )
    }
}
