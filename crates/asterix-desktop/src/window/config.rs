//! Window configuration for creation

use asterix_vfs::{AppKind, LaunchPayload};

use crate::math::{Size, Vec2};

/// Configuration for opening a window
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Application kind
    pub kind: AppKind,
    /// Window title; together with `kind` it identifies an open window
    pub title: String,
    /// Initial position (None = cascade from the viewport center)
    pub position: Option<Vec2>,
    /// Initial size (None = the kind's default size)
    pub size: Option<Size>,
    /// Kind-specific launch data
    pub payload: LaunchPayload,
}

impl WindowConfig {
    /// Config with the given kind and title and everything else defaulted
    pub fn new(kind: AppKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            position: None,
            size: None,
            payload: LaunchPayload::None,
        }
    }

    /// Set an explicit position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Some(Vec2::new(x, y));
        self
    }

    /// Attach a launch payload
    pub fn with_payload(mut self, payload: LaunchPayload) -> Self {
        self.payload = payload;
        self
    }
}
