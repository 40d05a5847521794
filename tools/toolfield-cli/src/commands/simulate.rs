//! Integrate a field headlessly and report its final state.

use std::path::PathBuf;

use toolfield_animator::simulate;
use toolfield_common::config::AppConfig;
use toolfield_field_model::geometry::ViewportSize;

#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &AppConfig,
    theme: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    ticks: u64,
    seed: Option<u64>,
    events: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let options = super::animation_options(config, theme, seed, None)?;
    let viewport = ViewportSize::new(
        width.unwrap_or(config.render.width as f64),
        height.unwrap_or(config.render.height as f64),
    );
    let events = match events {
        Some(path) => super::load_events(&path)?,
        None => Vec::new(),
    };

    let snapshot = simulate(&options, viewport, ticks, &events)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Simulated {ticks} ticks ({})", snapshot.theme);
    println!(
        "  Viewport: {}x{}",
        snapshot.viewport.width, snapshot.viewport.height
    );
    println!("  Frame: {}", snapshot.frame);
    match snapshot.cursor {
        Some(c) => println!("  Cursor: ({:.1}, {:.1})", c.x, c.y),
        None => println!("  Cursor: none"),
    }
    println!("  Elements: {}", snapshot.elements.len());
    println!("  Mean speed: {:.4} px/tick", snapshot.mean_speed());
    println!();

    println!("Variants:");
    for (variant, count) in snapshot.variant_counts() {
        println!("  {variant}: {count}");
    }

    Ok(())
}
