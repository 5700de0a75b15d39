//! Domain models for project drawings and helpers to generate their SVG.
//!
//! Drawings are free-form SVG shapes placed on the project scene.

use serde::{Deserialize, Serialize};

/// A drawing as returned by `/projects/{project_id}/drawings`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Drawing {
    pub drawing_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub svg: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
    #[serde(default)]
    pub z: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i64>,
}

/// Body used to create or update a drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawingParams {
    pub svg: String,
    pub locked: bool,
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl DrawingParams {
    /// A drawing at the default position (10, 10, 1), unlocked.
    pub fn new(svg: impl Into<String>) -> Self {
        Self {
            svg: svg.into(),
            locked: false,
            x: 10,
            y: 10,
            z: 1,
        }
    }
}

/// Partial update of a drawing; unset attributes keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingUpdate {
    pub svg: Option<String>,
    pub locked: Option<bool>,
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub z: Option<i64>,
}

impl DrawingUpdate {
    /// Fills the unset attributes from `current`.
    pub(crate) fn resolve(self, current: &Drawing) -> DrawingParams {
        DrawingParams {
            svg: self.svg.unwrap_or_else(|| current.svg.clone()),
            locked: self.locked.unwrap_or(current.locked),
            x: self.x.unwrap_or(current.x),
            y: self.y.unwrap_or(current.y),
            z: self.z.unwrap_or(current.z),
        }
    }
}

/// A rectangle shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleSvg {
    pub height: u32,
    pub width: u32,
    pub fill: String,
    pub fill_opacity: f64,
    pub stroke: String,
    pub stroke_width: u32,
}

impl Default for RectangleSvg {
    fn default() -> Self {
        Self {
            height: 100,
            width: 200,
            fill: "#ffffff".to_string(),
            fill_opacity: 1.0,
            stroke: "#000000".to_string(),
            stroke_width: 2,
        }
    }
}

impl RectangleSvg {
    pub fn to_svg(&self) -> String {
        format!(
            r#"<svg height="{h}" width="{w}"><rect fill="{fill}" fill-opacity="{fo:?}" height="{h}" stroke="{stroke}" stroke-width="{sw}" width="{w}" /></svg>"#,
            h = self.height,
            w = self.width,
            fill = self.fill,
            fo = self.fill_opacity,
            stroke = self.stroke,
            sw = self.stroke_width,
        )
    }
}

/// An ellipse shape.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseSvg {
    pub height: f64,
    pub width: f64,
    pub cx: i64,
    pub cy: i64,
    pub fill: String,
    pub fill_opacity: f64,
    pub rx: i64,
    pub ry: i64,
    pub stroke: String,
    pub stroke_width: u32,
}

impl Default for EllipseSvg {
    fn default() -> Self {
        Self {
            height: 200.0,
            width: 200.0,
            cx: 100,
            cy: 100,
            fill: "#ffffff".to_string(),
            fill_opacity: 1.0,
            rx: 100,
            ry: 100,
            stroke: "#000000".to_string(),
            stroke_width: 2,
        }
    }
}

impl EllipseSvg {
    pub fn to_svg(&self) -> String {
        format!(
            r#"<svg height="{h:?}" width="{w:?}"><ellipse cx="{cx}" cy="{cy}" fill="{fill}" fill-opacity="{fo:?}" rx="{rx}" ry="{ry}" stroke="{stroke}" stroke-width="{sw}" /></svg>"#,
            h = self.height,
            w = self.width,
            cx = self.cx,
            cy = self.cy,
            fill = self.fill,
            fo = self.fill_opacity,
            rx = self.rx,
            ry = self.ry,
            stroke = self.stroke,
            sw = self.stroke_width,
        )
    }
}

/// A straight line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSvg {
    pub height: u32,
    pub width: u32,
    pub x1: i64,
    pub x2: i64,
    pub y1: i64,
    pub y2: i64,
    pub stroke: String,
    pub stroke_width: u32,
}

impl Default for LineSvg {
    fn default() -> Self {
        Self {
            height: 0,
            width: 200,
            x1: 0,
            x2: 200,
            y1: 0,
            y2: 0,
            stroke: "#000000".to_string(),
            stroke_width: 2,
        }
    }
}

impl LineSvg {
    pub fn to_svg(&self) -> String {
        format!(
            r#"<svg height="{}" width="{}"><line stroke="{}" stroke-width="{}" x1="{}" x2="{}" y1="{}" y2="{}" /></svg>"#,
            self.height,
            self.width,
            self.stroke,
            self.stroke_width,
            self.x1,
            self.x2,
            self.y1,
            self.y2,
        )
    }
}

/// Converts a grid column into a scene X coordinate.
pub fn scene_x(x: i64, obj_width: i64) -> i64 {
    x * obj_width
}

/// Converts a grid row into a scene Y coordinate (the scene Y axis points down).
pub fn scene_y(y: i64, obj_height: i64) -> i64 {
    -(y * obj_height)
}
