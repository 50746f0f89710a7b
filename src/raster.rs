use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::config::{ChannelPolicy, RenderConfig};
use crate::error::SdfResult;
use crate::point2d::Point2D;
use crate::screen::{PPM_MAX_VALUE, ScreenSpace};
use crate::triangle::{SdfVariant, Triangle2D};

/// Map an integer pixel coordinate into the triangle's normalized space.
#[inline(always)]
pub fn pixel_to_point(x: u32, y: u32, width: u32, height: u32) -> Point2D {
    Point2D { x: x as f32 / width as f32, y: y as f32 / height as f32 }
}

/// Red for outside, blue for inside, scaled from the field clamped to [-1, 1].
#[inline(always)]
pub fn field_to_rgb(f: f32, policy: ChannelPolicy) -> (u16, u16, u16) {
    let f = f.clamp(-1.0, 1.0);
    let r = (f.max(0.0) * 256.0) as u16;
    let b = ((-f).max(0.0) * 256.0) as u16;
    match policy {
        ChannelPolicy::Clamp => (r.min(PPM_MAX_VALUE), 0, b.min(PPM_MAX_VALUE)),
        ChannelPolicy::Legacy => (r, 0, b),
    }
}

/// Fills a raster by evaluating one triangle's field at every pixel.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    pub width: u32,
    pub height: u32,
    pub variant: SdfVariant,
    pub channel_policy: ChannelPolicy,
    pub threads: usize,
}

impl Rasterizer {
    pub fn new(config: &RenderConfig) -> SdfResult<Self> {
        config.validate()?;
        Ok(Rasterizer {
            width: config.width,
            height: config.height,
            variant: config.variant,
            channel_policy: config.channel_policy,
            threads: config.thread_count(),
        })
    }

    #[inline(always)]
    pub fn shade(&self, tri: &Triangle2D, x: u32, y: u32) -> (u16, u16, u16) {
        let p = pixel_to_point(x, y, self.width, self.height);
        field_to_rgb(tri.evaluate(p, self.variant), self.channel_policy)
    }

    pub fn render(&self, tri: &Triangle2D) -> SdfResult<ScreenSpace> {
        info!(
            "Rendering {}x{} {:?} field, channel policy {:?}",
            self.width, self.height, self.variant, self.channel_policy
        );
        let start = Instant::now();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()?;
        debug!("Thread pool with {} workers", pool.current_num_threads());

        let mut screen = ScreenSpace::new(self.width, self.height);
        let row_len = screen.row_len();
        // Rows are independent; chunking keeps the output row-major regardless of scheduling.
        pool.install(|| {
            screen.rgb.par_chunks_mut(row_len).enumerate().for_each(|(y, row)| {
                for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                    let (r, g, b) = self.shade(tri, x as u32, y as u32);
                    pixel.copy_from_slice(&[r, g, b]);
                }
            });
        });

        info!("Rendered {} pixels in {:.2?}", self.width as u64 * self.height as u64, start.elapsed());
        Ok(screen)
    }
}
