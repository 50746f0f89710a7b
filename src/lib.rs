//! Signed distance field of a single 2D triangle, rasterized to a plain pixel-map.

pub mod config;
pub mod error;
pub mod geometry;
pub mod plane2d;
pub mod point2d;
pub mod raster;
pub mod screen;
pub mod triangle;

pub use config::{ChannelPolicy, RenderConfig};
pub use error::{SdfError, SdfResult};
pub use plane2d::HalfPlane;
pub use point2d::Point2D;
pub use raster::Rasterizer;
pub use screen::ScreenSpace;
pub use triangle::{SdfVariant, Triangle2D};
