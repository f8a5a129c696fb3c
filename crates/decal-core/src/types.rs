//! Component model for placed decals.

use std::f64::consts::{PI, TAU};
use std::fmt;

use glam::DVec2;

/// Unique identifier for a placed component.
///
/// Assigned by the design on creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentId(pub u64);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Width and height of a component before rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a size from a vector (x = width, y = height).
    pub fn from_vec(v: DVec2) -> Self {
        Self { width: v.x, height: v.y }
    }

    /// Get size as DVec2.
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Floor both dimensions at `min`.
    pub fn max(self, min: f64) -> Self {
        Self {
            width: self.width.max(min),
            height: self.height.max(min),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// The bounded region components may occupy, in container-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    pub width: f64,
    pub height: f64,
    /// Top-left corner
    pub origin: DVec2,
}

impl Container {
    /// Create a container anchored at the coordinate origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            origin: DVec2::ZERO,
        }
    }

    /// Create a container from a rectangle.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            origin: DVec2::new(x, y),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the center point.
    pub fn center(&self) -> DVec2 {
        self.origin + self.size().to_vec() / 2.0
    }

    /// Get the bottom-right corner.
    pub fn max(&self) -> DVec2 {
        self.origin + self.size().to_vec()
    }

    /// A container that has not been measured yet (zero, negative or non-finite extent)
    /// cannot hold anything.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
            || !self.width.is_finite()
            || !self.height.is_finite()
            || !self.origin.is_finite()
    }

    /// Check whether an axis-aligned box centered at `center` lies inside the container.
    pub fn contains_box(&self, center: DVec2, extent: Size, tolerance: f64) -> bool {
        let half = extent.to_vec() / 2.0;
        let min = center - half;
        let max = center + half;
        let lo = self.origin - DVec2::splat(tolerance);
        let hi = self.max() + DVec2::splat(tolerance);
        min.x >= lo.x && min.y >= lo.y && max.x <= hi.x && max.y <= hi.y
    }
}

/// A color value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create from hex string (e.g., "#EFBD4E" or "EFBD4E80").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
            8 => {
                let mut color = Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?);
                color.a = channel(6)? as f32 / 255.0;
                Some(color)
            }
            _ => None,
        }
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Convert to hex string (e.g., "#EFBD4E").
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// An uploaded print (raster or vector).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageContent {
    pub filename: String,
    pub url: Option<String>,
    /// Fill override for vector prints
    pub fill: Option<Color>,
}

impl ImageContent {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: None,
            fill: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Whether the file is a vector graphic.
    pub fn is_vector(&self) -> bool {
        std::path::Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    }
}

/// Font styling for a text component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: u16,
    pub italic: bool,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 24.0,
            font_weight: 400,
            italic: false,
            color: Color::BLACK,
        }
    }
}

/// A text print.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextContent {
    pub text: String,
    pub style: TextStyle,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// Variant payload of a component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum ComponentKind {
    Image(ImageContent),
    Text(TextContent),
}

/// A placed, transformable element of a design.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    pub id: ComponentId,
    /// Center point in container-local coordinates
    pub position: DVec2,
    /// Dimensions before rotation
    pub size: Size,
    /// Radians in (-π, π]
    pub rotation: f64,
    /// Paint order; a permutation of 0..N within a design
    pub z_index: usize,
    pub kind: ComponentKind,
}

impl Component {
    pub fn new(id: ComponentId, kind: ComponentKind, position: DVec2, size: Size) -> Self {
        Self {
            id,
            position,
            size,
            rotation: 0.0,
            z_index: 0,
            kind,
        }
    }

    /// Set the rotation, normalized into (-π, π].
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = normalize_angle(rotation);
        self
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, ComponentKind::Image(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ComponentKind::Text(_))
    }

    /// Whether the print has vector content whose fill can be changed.
    pub fn is_recolorable(&self) -> bool {
        match &self.kind {
            ComponentKind::Image(image) => image.is_vector(),
            ComponentKind::Text(_) => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            ComponentKind::Image(_) => "image",
            ComponentKind::Text(_) => "text",
        }
    }
}

/// Output of the transform engine, merged atomically into a component.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformResult {
    pub position: Option<DVec2>,
    pub size: Option<Size>,
    pub rotation: Option<f64>,
}

impl TransformResult {
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.size.is_none() && self.rotation.is_none()
    }
}

/// Wrap an angle into (-π, π].
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
