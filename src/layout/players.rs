use crate::scene::{Price, Scene, Trend};

use super::LayoutContext;
use super::text::{TextStyle, place_text};
use super::{BoxItem, MarketRowLayout, PlayerCardLayout, Primitive, Rect, TextItem, Viewport};

const PLAYERS_HEADER_Y: f32 = 9.5;
const FIRST_CARD_Y: f32 = 8.9;
const CARD_X: f32 = 0.5;
const CARD_WIDTH: f32 = 9.0;
const CARD_HEIGHT: f32 = 1.0;
const CARD_PAD: f32 = 0.1;
const CARD_TEXT_X: f32 = 1.0;
const CARD_FILL_OPACITY: f32 = 0.3;

const WIDGET_HEADER_Y: f32 = 3.4;
const TAB_Y: f32 = 2.7;
const TAB_HEIGHT: f32 = 0.4;
const TAB_PAD: f32 = 0.05;
const TABLE_HEADER_Y: f32 = 2.35;
const FIRST_ROW_Y: f32 = 2.05;
const COLUMNS: [(f32, &str); 3] = [(1.0, "Market"), (4.0, "Price"), (7.0, "Trend")];

pub(super) struct PlayersPanel {
    pub primitives: Vec<Primitive>,
    pub cards: Vec<PlayerCardLayout>,
    pub markets: Vec<MarketRowLayout>,
}

pub(super) fn compute_players(
    scene: &Scene,
    ctx: &LayoutContext<'_>,
    frame: Rect,
) -> PlayersPanel {
    let theme = ctx.theme;
    let fonts = &ctx.layout.fonts;
    let vp = Viewport::stretched(frame, (0.0, 10.0), (0.0, 10.0));
    let mut shapes = Vec::new();
    let mut labels: Vec<TextItem> = Vec::new();
    let header = TextStyle::new(ctx.pt(fonts.header), &theme.text_color).heading();

    let (x, y) = vp.point(5.0, PLAYERS_HEADER_Y);
    labels.push(place_text(x, y, "PLAYERS", &header));

    let name_style = TextStyle::new(ctx.pt(fonts.body), &theme.text_color).bold();
    let detail_style = TextStyle::new(ctx.pt(fonts.small), &theme.text_color);
    let mut cards = Vec::with_capacity(scene.players.len());
    let mut y_pos = FIRST_CARD_Y;
    for player in &scene.players {
        let rect = vp
            .rect(CARD_X, y_pos - CARD_HEIGHT - 0.2, CARD_WIDTH, CARD_HEIGHT)
            .inflate(vp.len_x(CARD_PAD), vp.len_y(CARD_PAD));
        shapes.push(Primitive::Box(BoxItem {
            rect,
            radius: vp.len_y(CARD_PAD),
            fill: player.color.clone(),
            fill_opacity: CARD_FILL_OPACITY,
            stroke: player.color.clone(),
            stroke_width: ctx.pt(1.0),
        }));

        let holdings_line = player.holdings.summary();
        let lines = [
            (0.3, player.name.clone(), &name_style),
            (0.7, holdings_line.clone(), &detail_style),
            (1.0, format!("Victory Points: {}", player.victory_points), &detail_style),
        ];
        for (dy, text, style) in lines {
            let (x, y) = vp.point(CARD_TEXT_X, y_pos - dy);
            labels.push(place_text(x, y, text, style));
        }

        cards.push(PlayerCardLayout {
            name: player.name.clone(),
            rect,
            color: player.color.clone(),
            holdings_line,
            victory_points: player.victory_points,
        });
        y_pos -= ctx.layout.player_card_step;
    }

    let (x, y) = vp.point(5.0, WIDGET_HEADER_Y);
    labels.push(place_text(x, y, "AMM WIDGET", &header));

    let tab_width = ctx.layout.tab_width;
    let tab_style = TextStyle::new(ctx.pt(fonts.table), &theme.text_color).centered();
    for (idx, tab) in scene.tabs.iter().enumerate() {
        let x = 0.5 + idx as f32 * tab_width;
        let (fill, stroke) = if *tab == scene.active_tab {
            (&theme.port_fill, &theme.active_tab_stroke)
        } else {
            (&theme.tab_fill, &theme.tab_stroke)
        };
        let rect = vp
            .rect(x, TAB_Y, tab_width - 0.1, TAB_HEIGHT)
            .inflate(vp.len_x(TAB_PAD), vp.len_y(TAB_PAD));
        shapes.push(Primitive::Box(BoxItem {
            rect,
            radius: vp.len_y(TAB_PAD),
            fill: fill.clone(),
            fill_opacity: 1.0,
            stroke: stroke.clone(),
            stroke_width: ctx.pt(1.0),
        }));
        labels.push(place_text(
            rect.x + rect.width / 2.0,
            rect.y + rect.height / 2.0,
            tab.title(),
            &tab_style,
        ));
    }

    let column_style = TextStyle::new(ctx.pt(fonts.body), &theme.text_color).bold();
    for (col_x, title) in COLUMNS {
        let (x, y) = vp.point(col_x, TABLE_HEADER_Y);
        labels.push(place_text(x, y, title, &column_style));
    }

    let mut markets = Vec::with_capacity(scene.markets.len());
    for (idx, row) in scene.markets.iter().enumerate() {
        let y = FIRST_ROW_Y - idx as f32 * ctx.layout.market_row_step;
        let color = match row.price {
            Price::Inactive => &theme.alert_color,
            Price::Quoted(_) => &theme.text_color,
        };
        let trend_color = match row.trend {
            Trend::Up => &theme.positive_color,
            Trend::Down => &theme.alert_color,
            Trend::Flat | Trend::Unavailable => &theme.text_color,
        };
        let cells = [
            (COLUMNS[0].0, row.pair.clone(), color),
            (COLUMNS[1].0, row.price.to_string(), color),
            (COLUMNS[2].0, row.trend.symbol().to_string(), trend_color),
        ];
        let mut baseline = 0.0;
        for (col_x, text, cell_color) in cells {
            let (x, py) = vp.point(col_x, y);
            baseline = py;
            labels.push(place_text(
                x,
                py,
                text,
                &TextStyle::new(ctx.pt(fonts.table), cell_color),
            ));
        }
        markets.push(MarketRowLayout {
            pair: row.pair.clone(),
            price: row.price,
            trend: row.trend,
            baseline,
            color: color.clone(),
            trend_color: trend_color.clone(),
        });
    }

    let mut primitives = shapes;
    primitives.extend(labels.into_iter().map(Primitive::Text));
    PlayersPanel {
        primitives,
        cards,
        markets,
    }
}
