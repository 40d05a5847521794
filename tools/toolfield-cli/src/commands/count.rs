//! Element count for a viewport.

use toolfield_common::config::AppConfig;
use toolfield_field_core::element_count;
use toolfield_field_model::geometry::ViewportSize;
use toolfield_field_model::theme::FieldTheme;

pub fn run(config: &AppConfig, width: f64, height: f64, theme: Option<String>) -> anyhow::Result<()> {
    let theme = FieldTheme::by_name(theme.as_deref().unwrap_or(&config.animation.theme))?;
    let viewport = ViewportSize::new(width, height);
    let count = element_count(viewport, &theme.tuning);

    println!("{count}");
    tracing::debug!(
        theme = %theme.name,
        area = viewport.area(),
        cap = theme.tuning.max_elements,
        "Computed element count"
    );
    Ok(())
}
