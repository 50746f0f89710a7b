// External crates
use anyhow::{Context, Result, bail};
use log::info;

// STD library
use std::io;
use std::path::PathBuf;

use sdfield::{Rasterizer, RenderConfig};

fn usage() -> &'static str {
    "usage: sdfield [CONFIG.json]"
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let mut args = std::env::args().skip(1);
    let config = match (args.next(), args.next()) {
        (None, _) => {
            info!("No config given, using defaults");
            RenderConfig::default()
        }
        (Some(flag), None) if flag == "-h" || flag == "--help" => {
            println!("{}", usage());
            return Ok(());
        }
        (Some(path), None) => RenderConfig::load(&PathBuf::from(path))?,
        (Some(_), Some(_)) => bail!(usage()),
    };

    let triangle = config.triangle().context("invalid triangle")?;
    info!("Triangle vertices: {:?}", triangle.vertices());
    let rasterizer = Rasterizer::new(&config)?;
    let screen = rasterizer.render(&triangle)?;

    match &config.output {
        Some(path) => {
            screen.save_ppm(path)?;
            info!("Saved {}", path.display());
        }
        None => screen.write_ppm(io::stdout().lock()).context("writing pixel-map to stdout")?,
    }
    if let Some(path) = &config.png {
        screen.save_png(path)?;
        info!("Saved {}", path.display());
    }
    Ok(())
}
