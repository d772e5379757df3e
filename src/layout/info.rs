use crate::scene::Scene;

use super::LayoutContext;
use super::text::{TextStyle, place_text};
use super::{Primitive, Rect, Viewport};

const INFO_HEADER_Y: f32 = 9.5;
const INFO_FIRST_LINE_Y: f32 = 8.8;
const INFO_LINE_STEP: f32 = 0.5;
const LOG_HEADER_Y: f32 = 5.5;
const LOG_FIRST_LINE_Y: f32 = 4.8;
const TEXT_X: f32 = 0.5;

pub(super) fn compute_info_primitives(
    scene: &Scene,
    ctx: &LayoutContext<'_>,
    frame: Rect,
) -> Vec<Primitive> {
    let theme = ctx.theme;
    let fonts = &ctx.layout.fonts;
    let vp = Viewport::stretched(frame, (0.0, 10.0), (0.0, 10.0));
    let mut out = Vec::new();

    let header = TextStyle::new(ctx.pt(fonts.header), &theme.text_color).heading();
    let (x, y) = vp.point(5.0, INFO_HEADER_Y);
    out.push(Primitive::Text(place_text(x, y, "GAME INFO", &header)));

    let info = &scene.info;
    let mut lines = vec![
        (format!("Turn: {}", info.turn), &theme.text_color),
        (format!("Round: {}", info.round), &theme.text_color),
        (format!("Dice: {}", info.dice), &theme.text_color),
    ];
    if info.ghost_ship_active {
        lines.push(("Ghost Ship Active".to_string(), &theme.alert_color));
    }
    lines.push((
        format!("Longest Road: {} ({})", info.longest_road.0, info.longest_road.1),
        &theme.text_color,
    ));
    lines.push((
        format!("Largest Army: {} ({})", info.largest_army.0, info.largest_army.1),
        &theme.text_color,
    ));

    for (idx, (line, color)) in lines.into_iter().enumerate() {
        let (x, y) = vp.point(TEXT_X, INFO_FIRST_LINE_Y - idx as f32 * INFO_LINE_STEP);
        out.push(Primitive::Text(place_text(
            x,
            y,
            line,
            &TextStyle::new(ctx.pt(fonts.body), color),
        )));
    }

    let (x, y) = vp.point(5.0, LOG_HEADER_Y);
    out.push(Primitive::Text(place_text(x, y, "GAME LOG", &header)));

    let entry_style = TextStyle::new(ctx.pt(fonts.small), &theme.text_color);
    for (idx, entry) in scene.log.iter().enumerate() {
        let (x, y) = vp.point(
            TEXT_X,
            LOG_FIRST_LINE_Y - idx as f32 * ctx.layout.log_line_step,
        );
        out.push(Primitive::Text(place_text(x, y, entry.to_string(), &entry_style)));
    }

    out
}
