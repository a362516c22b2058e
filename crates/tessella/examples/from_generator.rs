//! Example: Building a grid from a generator function
//!
//! This example generates one box per cell with `grid_with`, alternating
//! fill colors like a checkerboard, and prints the SVG preview to stdout.

use tessella::{
    color::Color,
    config::StyleConfig,
    export::{Exporter, svg::Svg},
    geometry::Size,
    grid_with,
    scene::Scene,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dark = Color::new("#37474f")?;
    let light = Color::new("#eceff1")?;

    let grid = grid_with(
        |x, y| {
            let fill = if (x + y) % 2 == 0 { dark } else { light };
            // Vary the sizes so the shared cell frame is visible.
            let size = Size::new(20.0 + 4.0 * x as f32, 20.0 + 3.0 * y as f32);
            Scene::labeled(format!("{x},{y}"), size).with_fill(fill)
        },
        5,
        4,
    )?;

    let style: StyleConfig = toml::from_str("show_phantoms = true")?;
    let exporter = Svg::from_style(&style)?;
    exporter.export_scene(&grid, &mut std::io::stdout())?;

    Ok(())
}
