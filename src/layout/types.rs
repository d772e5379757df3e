use crate::scene::{Price, Resource, Token, Trend};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn inflate(&self, pad_x: f32, pad_y: f32) -> Self {
        Self::new(
            self.x - pad_x,
            self.y - pad_y,
            self.width + pad_x * 2.0,
            self.height + pad_y * 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
}

impl Anchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Positioned text; `y` is the baseline.
#[derive(Debug, Clone)]
pub struct TextItem {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font_size: f32,
    pub bold: bool,
    pub color: String,
    pub anchor: Anchor,
}

#[derive(Debug, Clone)]
pub struct BoxItem {
    pub rect: Rect,
    pub radius: f32,
    pub fill: String,
    pub fill_opacity: f32,
    pub stroke: String,
    pub stroke_width: f32,
}

#[derive(Debug, Clone)]
pub struct CircleItem {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_width: f32,
}

#[derive(Debug, Clone)]
pub struct PolygonItem {
    pub points: Vec<(f32, f32)>,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f32,
}

#[derive(Debug, Clone)]
pub enum Primitive {
    Box(BoxItem),
    Circle(CircleItem),
    Polygon(PolygonItem),
    Text(TextItem),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Info,
    Board,
    Players,
}

#[derive(Debug, Clone)]
pub struct PanelLayout {
    pub kind: PanelKind,
    pub frame: Rect,
    pub fill: String,
    pub corner_radius: f32,
    pub primitives: Vec<Primitive>,
}

impl PanelLayout {
    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct HexLayout {
    pub resource: Resource,
    pub token: Token,
    pub center: (f32, f32),
    pub radius: f32,
    pub fill: String,
    /// Text drawn on the tile: the number, or the ghost glyph on the desert.
    pub marker: String,
    pub marker_color: String,
    pub pips: usize,
}

#[derive(Debug, Clone)]
pub struct PortLayout {
    pub label: String,
    pub center: (f32, f32),
    pub radius: f32,
    pub font_size: f32,
}

#[derive(Debug, Clone)]
pub struct PlayerCardLayout {
    pub name: String,
    pub rect: Rect,
    pub color: String,
    pub holdings_line: String,
    pub victory_points: u32,
}

#[derive(Debug, Clone)]
pub struct MarketRowLayout {
    pub pair: String,
    pub price: Price,
    pub trend: Trend,
    pub baseline: f32,
    pub color: String,
    pub trend_color: String,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub font_family: String,
    pub title: TextItem,
    pub panels: Vec<PanelLayout>,
    pub hexes: Vec<HexLayout>,
    pub ports: Vec<PortLayout>,
    pub players: Vec<PlayerCardLayout>,
    pub markets: Vec<MarketRowLayout>,
}

impl Layout {
    pub fn panel(&self, kind: PanelKind) -> Option<&PanelLayout> {
        self.panels.iter().find(|panel| panel.kind == kind)
    }
}
