//! List built-in themes.

use toolfield_field_model::theme::FieldTheme;

pub fn run(json: bool) -> anyhow::Result<()> {
    let themes = FieldTheme::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(&themes)?);
        return Ok(());
    }

    for theme in &themes {
        let t = &theme.tuning;
        println!("{}:", theme.name);
        let catalogue: Vec<&str> = theme.catalogue.iter().map(|v| v.as_str()).collect();
        println!("  Shapes: {}", catalogue.join(", "));
        println!(
            "  Density: 1 per {} px², max {}",
            t.area_per_element, t.max_elements
        );
        println!(
            "  Repulsion: radius {} px, force divisor {}",
            t.repulsion_radius, t.force_divisor
        );
        println!(
            "  Motion: damping {}, max speed {}, max spin {}",
            t.velocity_damping, t.max_initial_speed, t.max_rotation_speed
        );
        println!("  Size: {}..{} px", t.size.min, t.size.max);
        println!("  Opacity: {}..{}", t.opacity.min, t.opacity.max);
        println!();
    }

    Ok(())
}
