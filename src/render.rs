use crate::layout::{BoxItem, CircleItem, Layout, PanelLayout, PolygonItem, Primitive, TextItem};
use anyhow::Result;
use std::path::Path;
use tracing::info;

#[cfg(feature = "png")]
use crate::config::RenderConfig;
#[cfg(feature = "png")]
use crate::error::MockupError;
#[cfg(feature = "png")]
use crate::theme::Theme;

pub fn render_svg(layout: &Layout) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" font-family=\"{}\">",
        escape_xml(&layout.font_family)
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_xml(&layout.background)
    ));

    for panel in &layout.panels {
        panel_svg(&mut svg, panel);
    }
    text_svg(&mut svg, &layout.title);

    svg.push_str("</svg>");
    svg
}

fn panel_svg(svg: &mut String, panel: &PanelLayout) {
    let frame = panel.frame;
    svg.push_str(&format!(
        "<g class=\"panel panel-{:?}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{r:.2}\" ry=\"{r:.2}\" fill=\"{}\"/>",
        panel.kind,
        frame.x,
        frame.y,
        frame.width,
        frame.height,
        escape_xml(&panel.fill),
        r = panel.corner_radius,
    ));
    for primitive in &panel.primitives {
        match primitive {
            Primitive::Box(item) => box_svg(svg, item),
            Primitive::Circle(item) => circle_svg(svg, item),
            Primitive::Polygon(item) => polygon_svg(svg, item),
            Primitive::Text(item) => text_svg(svg, item),
        }
    }
    svg.push_str("</g>");
}

fn box_svg(svg: &mut String, item: &BoxItem) {
    let rect = item.rect;
    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{r:.2}\" ry=\"{r:.2}\" fill=\"{}\" fill-opacity=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\"/>",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        escape_xml(&item.fill),
        item.fill_opacity,
        escape_xml(&item.stroke),
        item.stroke_width,
        r = item.radius,
    ));
}

fn circle_svg(svg: &mut String, item: &CircleItem) {
    let stroke = match &item.stroke {
        Some(color) => format!(
            " stroke=\"{}\" stroke-width=\"{:.2}\"",
            escape_xml(color),
            item.stroke_width
        ),
        None => String::new(),
    };
    svg.push_str(&format!(
        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"{stroke}/>",
        item.cx,
        item.cy,
        item.r,
        escape_xml(&item.fill),
    ));
}

fn polygon_svg(svg: &mut String, item: &PolygonItem) {
    let points = item
        .points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ");
    svg.push_str(&format!(
        "<polygon points=\"{points}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{:.2}\" stroke-linejoin=\"round\"/>",
        escape_xml(&item.fill),
        escape_xml(&item.stroke),
        item.stroke_width,
    ));
}

fn text_svg(svg: &mut String, item: &TextItem) {
    let weight = if item.bold { " font-weight=\"bold\"" } else { "" };
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\" font-size=\"{:.2}\"{weight} fill=\"{}\">{}</text>",
        item.x,
        item.y,
        item.anchor.as_svg(),
        item.font_size,
        escape_xml(&item.color),
        escape_xml(&item.text),
    ));
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
            info!(path = %path.display(), bytes = svg.len(), "wrote svg");
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(
    svg: &str,
    output: &Path,
    render_cfg: &RenderConfig,
    theme: &Theme,
) -> Result<()> {
    let (width, height) = render_cfg.pixel_size();
    let mut opt = usvg::Options::default();
    opt.dpi = render_cfg.dpi;
    if let Some(primary) = theme.font_family.split(',').next() {
        opt.font_family = primary.trim().to_string();
    }
    opt.default_size = usvg::Size::from_wh(width, height)
        .ok_or(MockupError::InvalidCanvas {
            width: render_cfg.width_in,
            height: render_cfg.height_in,
            dpi: render_cfg.dpi,
        })?;
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(
        MockupError::PixmapAllocation {
            width: size.width(),
            height: size.height(),
        },
    )?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    info!(
        path = %output.display(),
        width = size.width(),
        height = size.height(),
        "wrote png"
    );
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::layout::compute_layout;
    use crate::scene::Scene;

    fn sample_svg() -> String {
        let layout = compute_layout(&Scene::sample(), &Config::default());
        render_svg(&layout)
    }

    #[test]
    fn render_svg_basic() {
        let svg = sample_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("width=\"2400\" height=\"1500\""));
        assert!(svg.contains("CATAMM - Catan with AMM Trading"));
        assert_eq!(svg.matches("<polygon").count(), 19);
        assert!(svg.contains(crate::scene::GHOST_GLYPH));
        assert!(svg.contains(">INACTIVE</text>"));
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(sample_svg(), sample_svg());
    }

    #[test]
    fn text_is_escaped() {
        let mut scene = Scene::sample();
        scene.title = "Wood & <Brick>".to_string();
        let svg = render_svg(&compute_layout(&scene, &Config::default()));
        assert!(svg.contains("Wood &amp; &lt;Brick&gt;"));
        assert!(!svg.contains("<Brick>"));
    }

    #[test]
    fn inactive_row_text_uses_alert_fill() {
        let config = Config::default();
        let svg = sample_svg();
        let needle = format!("fill=\"{}\">INACTIVE</text>", config.theme.alert_color);
        assert!(svg.contains(&needle));
        let quoted = format!("fill=\"{}\">1.05</text>", config.theme.text_color);
        assert!(svg.contains(&quoted));
    }
}
