//! Render configuration.
//!
//! Every field has a default, so a config file only needs to name the
//! values it overrides:
//!
//! ```json
//! { "width": 512, "height": 512, "channel_policy": "legacy" }
//! ```

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{SdfError, SdfResult};
use crate::point2d::Point2D;
use crate::triangle::{SdfVariant, Triangle2D};

pub const DEFAULT_WIDTH: u32 = 256;
pub const DEFAULT_HEIGHT: u32 = 256;
pub const DEFAULT_VERTICES: [[f32; 2]; 3] = [[0.2, 0.4], [0.8, 0.2], [0.5, 0.8]];

/// How color channels above the declared maximum are handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelPolicy {
    /// Cap red and blue at 255.
    #[default]
    Clamp,
    /// Emit `f * 256` uncapped, so a saturated field writes 256.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Triangle vertices in normalized image space, counter-clockwise.
    pub vertices: [[f32; 2]; 3],
    pub variant: SdfVariant,
    pub channel_policy: ChannelPolicy,
    /// Worker threads; `None` uses every logical core.
    pub threads: Option<usize>,
    /// Pixel-map destination; `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Optional PNG preview destination.
    pub png: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vertices: DEFAULT_VERTICES,
            variant: SdfVariant::default(),
            channel_policy: ChannelPolicy::default(),
            threads: None,
            output: None,
            png: None,
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> SdfResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SdfError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| SdfError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        debug!("{:?}", config);
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn validate(&self) -> SdfResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SdfError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.threads == Some(0) {
            return Err(SdfError::InvalidThreadCount);
        }
        Ok(())
    }

    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    pub fn triangle(&self) -> SdfResult<Triangle2D> {
        Triangle2D::from_points(self.vertices.map(Point2D::from))
    }
}
