pub mod config;
pub mod count;
pub mod live;
pub mod render;
pub mod simulate;
pub mod themes;

use anyhow::Context;
use toolfield_animator::AnimationOptions;
use toolfield_common::config::AppConfig;
use toolfield_field_model::theme::FieldTheme;

/// Animation options from the config, with command-line overrides applied.
pub(crate) fn animation_options(
    config: &AppConfig,
    theme: Option<String>,
    seed: Option<u64>,
    fps: Option<u32>,
) -> anyhow::Result<AnimationOptions> {
    let mut options = AnimationOptions::from_defaults(&config.animation)
        .context("Invalid animation defaults in config")?;
    if let Some(name) = theme {
        options.theme = FieldTheme::by_name(&name)?;
    }
    if seed.is_some() {
        options.seed = seed;
    }
    if let Some(fps) = fps {
        anyhow::ensure!(fps > 0, "fps must be positive");
        options.fps = fps;
    }
    Ok(options)
}

/// Read and parse a JSONL event script.
pub(crate) fn load_events(
    path: &std::path::Path,
) -> anyhow::Result<Vec<toolfield_field_model::event::ScriptedEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event script {}", path.display()))?;
    let events = toolfield_field_model::event::parse_events(&text)
        .with_context(|| format!("Invalid event script {}", path.display()))?;
    tracing::debug!(path = %path.display(), events = events.len(), "Loaded event script");
    Ok(events)
}
