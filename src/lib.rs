#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod layout_dump;
pub mod logging;
pub mod render;
pub mod scene;
pub mod theme;
mod text_metrics;

#[cfg(feature = "cli")]
pub use cli::{run, run_with_args};
pub use config::{Config, LayoutConfig, RenderConfig, load_config, parse_config};
pub use error::MockupError;
pub use layout::{Layout, compute_layout};
pub use render::render_svg;
pub use scene::Scene;
pub use theme::Theme;

/// Lays out and renders the built-in sample scene as an SVG document.
pub fn render_sample_svg(config: &Config) -> String {
    render_svg(&compute_layout(&Scene::sample(), config))
}
