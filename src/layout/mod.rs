mod board;
mod info;
mod players;
mod text;
mod types;
mod viewport;

pub use types::*;
pub use viewport::Viewport;

use crate::config::{Config, LayoutConfig, RenderConfig};
use crate::scene::Scene;
use crate::theme::Theme;
use text::{TextStyle, place_text};
use tracing::debug;

/// Shared inputs for the panel builders.
pub(super) struct LayoutContext<'a> {
    pub theme: &'a Theme,
    pub layout: &'a LayoutConfig,
    pub render: &'a RenderConfig,
}

impl LayoutContext<'_> {
    /// Point size to canvas pixels at the configured dpi.
    pub fn pt(&self, points: f32) -> f32 {
        self.render.pt_to_px(points)
    }

    pub fn font_family(&self) -> &str {
        &self.theme.font_family
    }

    fn panel(&self, kind: PanelKind, frame: Rect, primitives: Vec<Primitive>) -> PanelLayout {
        PanelLayout {
            kind,
            frame,
            fill: self.theme.panel_background.clone(),
            corner_radius: self.pt(self.layout.panel_corner_radius),
            primitives,
        }
    }
}

pub fn compute_layout(scene: &Scene, config: &Config) -> Layout {
    let ctx = LayoutContext {
        theme: &config.theme,
        layout: &config.layout,
        render: &config.render,
    };
    let (width, height) = config.render.pixel_size();
    let [info_frame, board_frame, players_frame] = panel_frames(width, height, &ctx);

    let title = place_text(
        width / 2.0,
        ctx.pt(config.layout.title_band) / 2.0,
        scene.title.as_str(),
        &TextStyle::new(ctx.pt(config.layout.fonts.suptitle), &config.theme.text_color)
            .bold()
            .centered(),
    );

    let info = ctx.panel(
        PanelKind::Info,
        info_frame,
        info::compute_info_primitives(scene, &ctx, info_frame),
    );
    let board = board::compute_board(scene, &ctx, board_frame);
    let players = players::compute_players(scene, &ctx, players_frame);

    debug!(
        hexes = board.hexes.len(),
        ports = board.ports.len(),
        players = players.cards.len(),
        markets = players.markets.len(),
        "layout computed"
    );

    Layout {
        width,
        height,
        background: config.render.background.clone(),
        font_family: config.theme.font_family.clone(),
        title,
        panels: vec![
            info,
            ctx.panel(PanelKind::Board, board_frame, board.primitives),
            ctx.panel(PanelKind::Players, players_frame, players.primitives),
        ],
        hexes: board.hexes,
        ports: board.ports,
        players: players.cards,
        markets: players.markets,
    }
}

/// Three equal columns below the title band.
fn panel_frames(width: f32, height: f32, ctx: &LayoutContext<'_>) -> [Rect; 3] {
    let top = ctx.pt(ctx.layout.title_band);
    let margin = ctx.pt(ctx.layout.outer_margin);
    let gap = ctx.pt(ctx.layout.panel_gap);
    let panel_height = (height - top - margin).max(1.0);
    let panel_width = ((width - margin * 2.0 - gap * 2.0) / 3.0).max(1.0);
    let column = |idx: usize| {
        Rect::new(
            margin + idx as f32 * (panel_width + gap),
            top,
            panel_width,
            panel_height,
        )
    };
    [column(0), column(1), column(2)]
}
