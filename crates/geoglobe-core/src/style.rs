// crates/geoglobe-core/src/style.rs
//! Per-shape label and style handed to the globe renderer.
//!
//! A shape is drawn "hovered" when its admin code equals the session's
//! hovered code; every other shape gets the normal style.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CSS `rgba(r,g,b,a)` colour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| format!("expected rgba(r,g,b,a), got {s:?}"))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [r, g, b, a] = parts.as_slice() else {
            return Err(format!("expected 4 components in {s:?}"));
        };
        let channel = |v: &str| v.parse::<u8>().map_err(|e| format!("{v:?}: {e}"));
        Ok(Self {
            r: channel(*r)?,
            g: channel(*g)?,
            b: channel(*b)?,
            a: a.parse::<f32>().map_err(|e| format!("{a:?}: {e}"))?,
        })
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Extrusion and colours for one state (hovered or not).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerStyle {
    pub altitude: f64,
    pub cap_color: Rgba,
    pub side_color: Rgba,
}

/// Style table for the whole globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobeStyle {
    pub hovered: LayerStyle,
    pub normal: LayerStyle,
    pub stroke_color: Rgba,
}

impl Default for GlobeStyle {
    fn default() -> Self {
        Self {
            hovered: LayerStyle {
                altitude: 0.15,
                cap_color: Rgba::new(233, 196, 106, 0.95),
                side_color: Rgba::new(233, 196, 106, 0.6),
            },
            normal: LayerStyle {
                altitude: 0.05,
                cap_color: Rgba::new(255, 255, 255, 0.36),
                side_color: Rgba::new(255, 255, 255, 0.03),
            },
            stroke_color: Rgba::new(255, 255, 255, 0.08),
        }
    }
}

/// Resolved style of one shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonStyle {
    pub altitude: f64,
    pub cap_color: Rgba,
    pub side_color: Rgba,
    pub stroke_color: Rgba,
}

impl GlobeStyle {
    /// Style for a shape with admin code `code` while `hovered` is hovered.
    /// A shape without a code is never highlighted.
    pub fn for_code(&self, code: Option<&str>, hovered: Option<&str>) -> PolygonStyle {
        let layer = match (code, hovered) {
            (Some(c), Some(h)) if c == h => &self.hovered,
            _ => &self.normal,
        };
        PolygonStyle {
            altitude: layer.altitude,
            cap_color: layer.cap_color,
            side_color: layer.side_color,
            stroke_color: self.stroke_color,
        }
    }
}
