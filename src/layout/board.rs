use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

use crate::scene::{Scene, Token};

use super::LayoutContext;
use super::text::{TextStyle, fit_font_size, place_text};
use super::{
    CircleItem, HexLayout, PolygonItem, PortLayout, Primitive, Rect, TextItem, Viewport,
};

const TITLE_Y: f32 = 3.5;
const LEGEND_X: f32 = -3.5;
const LEGEND_LINES: [(f32, &str, bool); 3] = [
    (-3.5, "Port = AMM Market", false),
    (-3.8, "Own port = 0% fees", true),
    (-4.1, "No port = 10% swap fee", true),
];
// Share of the port diameter the label may occupy.
const PORT_LABEL_FILL: f32 = 0.84;

pub(super) struct BoardPanel {
    pub primitives: Vec<Primitive>,
    pub hexes: Vec<HexLayout>,
    pub ports: Vec<PortLayout>,
}

pub(super) fn compute_board(scene: &Scene, ctx: &LayoutContext<'_>, frame: Rect) -> BoardPanel {
    let theme = ctx.theme;
    let board_cfg = &ctx.layout.board;
    let fonts = &ctx.layout.fonts;
    let vp = Viewport::equal(frame, board_cfg.x_range, board_cfg.y_range);
    let spacing = board_cfg.spacing();

    let mut shapes = Vec::new();
    let mut labels: Vec<TextItem> = Vec::new();
    let mut hexes = Vec::with_capacity(scene.cells.len());
    let mut ports = Vec::with_capacity(scene.ports.len());

    let (x, y) = vp.point(0.0, TITLE_Y);
    labels.push(place_text(
        x,
        y,
        "CATAMM BOARD",
        &TextStyle::new(ctx.pt(fonts.board_title), &theme.text_color).heading(),
    ));

    let hex_radius = vp.len_x(board_cfg.hex_size);
    let token_radius = vp.len_x(board_cfg.token_radius);
    for cell in &scene.cells {
        let center = vp.point(cell.x * spacing, cell.y * spacing);
        let fill = theme.resource_color(cell.resource).to_string();
        shapes.push(Primitive::Polygon(PolygonItem {
            points: hexagon_points(center, hex_radius),
            fill: fill.clone(),
            stroke: theme.hex_stroke.clone(),
            stroke_width: ctx.pt(board_cfg.hex_stroke_width),
        }));

        let (marker_color, pips) = match cell.token {
            Token::Number(_) => {
                shapes.push(Primitive::Circle(CircleItem {
                    cx: center.0,
                    cy: center.1,
                    r: token_radius,
                    fill: theme.token_fill.clone(),
                    stroke: Some(theme.token_stroke.clone()),
                    stroke_width: ctx.pt(board_cfg.token_stroke_width),
                }));
                let color = if cell.token.is_hot() {
                    &theme.alert_color
                } else {
                    &theme.token_text
                };
                let pips = if board_cfg.show_pips { cell.token.pips() } else { 0 };
                // Lift the number when pips sit underneath it.
                let lift = if pips > 0 { token_radius * 0.18 } else { 0.0 };
                labels.push(place_text(
                    center.0,
                    center.1 - lift,
                    cell.token.label(),
                    &TextStyle::new(ctx.pt(fonts.token), color).bold().centered(),
                ));
                let pip_color = if cell.token.is_hot() {
                    &theme.alert_color
                } else {
                    &theme.pip_color
                };
                shapes.extend(pip_dots(center, token_radius, pips, &vp, ctx, pip_color));
                (color.clone(), pips)
            }
            Token::Ghost => {
                labels.push(place_text(
                    center.0,
                    center.1,
                    cell.token.label(),
                    &TextStyle::new(ctx.pt(fonts.ghost), &theme.token_text).centered(),
                ));
                (theme.token_text.clone(), 0)
            }
        };

        hexes.push(HexLayout {
            resource: cell.resource,
            token: cell.token,
            center,
            radius: hex_radius,
            fill,
            marker: cell.token.label(),
            marker_color,
            pips,
        });
    }

    let port_radius = vp.len_x(board_cfg.port_radius);
    for port in &scene.ports {
        let center = vp.point(port.x, port.y);
        shapes.push(Primitive::Circle(CircleItem {
            cx: center.0,
            cy: center.1,
            r: port_radius,
            fill: theme.port_fill.clone(),
            stroke: Some(theme.port_stroke.clone()),
            stroke_width: ctx.pt(board_cfg.port_stroke_width),
        }));
        let font_size = fit_font_size(
            &port.label,
            ctx.pt(fonts.small),
            port_radius * 2.0 * PORT_LABEL_FILL,
            ctx.font_family(),
            true,
        );
        labels.push(place_text(
            center.0,
            center.1,
            port.label.as_str(),
            &TextStyle::new(font_size, &theme.port_text).bold().centered(),
        ));
        ports.push(PortLayout {
            label: port.label.clone(),
            center,
            radius: port_radius,
            font_size,
        });
    }

    for (y, line, small) in LEGEND_LINES {
        let size = if small { fonts.small } else { fonts.body };
        let (x, y) = vp.point(LEGEND_X, y);
        labels.push(place_text(
            x,
            y,
            line,
            &TextStyle::new(ctx.pt(size), &theme.text_color),
        ));
    }

    let mut primitives = shapes;
    primitives.extend(labels.into_iter().map(Primitive::Text));
    BoardPanel {
        primitives,
        hexes,
        ports,
    }
}

/// Pointy-top hexagon, first vertex straight up, clockwise on screen.
fn hexagon_points(center: (f32, f32), radius: f32) -> Vec<(f32, f32)> {
    (0..6)
        .map(|k| {
            let angle = FRAC_PI_2 + k as f32 * FRAC_PI_3;
            (
                center.0 + radius * angle.cos(),
                center.1 - radius * angle.sin(),
            )
        })
        .collect()
}

fn pip_dots(
    center: (f32, f32),
    token_radius: f32,
    count: usize,
    vp: &Viewport,
    ctx: &LayoutContext<'_>,
    color: &str,
) -> Vec<Primitive> {
    let board_cfg = &ctx.layout.board;
    let step = vp.len_x(board_cfg.pip_spacing);
    let r = vp.len_x(board_cfg.pip_radius);
    let y = center.1 + token_radius * 0.58;
    (0..count)
        .map(|i| {
            let offset = (i as f32 - (count as f32 - 1.0) / 2.0) * step;
            Primitive::Circle(CircleItem {
                cx: center.0 + offset,
                cy: y,
                r,
                fill: color.to_string(),
                stroke: None,
                stroke_width: 0.0,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::layout::{PanelKind, compute_layout};

    #[test]
    fn hexagon_is_pointy_top() {
        let points = hexagon_points((100.0, 100.0), 10.0);
        assert_eq!(points.len(), 6);
        assert!((points[0].0 - 100.0).abs() < 1e-4);
        assert!((points[0].1 - 90.0).abs() < 1e-4);
        assert!((points[3].1 - 110.0).abs() < 1e-4);
    }

    #[test]
    fn hot_numbers_and_pips() {
        let config = Config::default();
        let layout = compute_layout(&Scene::sample(), &config);
        let theme = &config.theme;
        for hex in &layout.hexes {
            assert_eq!(hex.pips, hex.token.pips());
            if hex.token.is_hot() {
                assert_eq!(hex.marker_color, theme.alert_color);
            }
        }
        let board = layout.panel(PanelKind::Board).unwrap();
        let circles = board
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Circle(_)))
            .count();
        let pips: usize = layout.hexes.iter().map(|h| h.pips).sum();
        // 18 number tokens, 9 ports, plus one circle per pip.
        assert_eq!(circles, 18 + 9 + pips);
    }

    #[test]
    fn pips_can_be_disabled() {
        let mut config = Config::default();
        config.layout.board.show_pips = false;
        let layout = compute_layout(&Scene::sample(), &config);
        assert!(layout.hexes.iter().all(|h| h.pips == 0));
    }

    #[test]
    fn ports_fit_inside_board_panel() {
        let layout = compute_layout(&Scene::sample(), &Config::default());
        let frame = layout.panel(PanelKind::Board).unwrap().frame;
        for port in &layout.ports {
            assert!(frame.contains(port.center.0, port.center.1), "{}", port.label);
            assert!(port.font_size > 0.0);
        }
        let desert = layout
            .hexes
            .iter()
            .find(|h| h.token == Token::Ghost)
            .unwrap();
        let mid_x = frame.x + frame.width / 2.0;
        assert!((desert.center.0 - mid_x).abs() < 1e-3);
    }
}
