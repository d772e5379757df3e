use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Wood,
    Brick,
    Sheep,
    Wheat,
    Ore,
    Desert,
}

impl Resource {
    pub fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Brick => "brick",
            Self::Sheep => "sheep",
            Self::Wheat => "wheat",
            Self::Ore => "ore",
            Self::Desert => "desert",
        }
    }
}

/// Marker printed on a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(u8),
    /// Desert cell; carries the ghost ship instead of a number.
    Ghost,
}

pub const GHOST_GLYPH: &str = "\u{2620}";

impl Token {
    /// Probability dots shown under a number: how many two-dice rolls hit it.
    pub fn pips(self) -> usize {
        match self {
            Self::Number(n @ 2..=6) => (n - 1) as usize,
            Self::Number(n @ 8..=12) => (13 - n) as usize,
            _ => 0,
        }
    }

    pub fn is_hot(self) -> bool {
        matches!(self, Self::Number(6 | 8))
    }

    pub fn label(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Ghost => GHOST_GLYPH.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HexCell {
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
    pub resource: Resource,
    pub token: Token,
}

#[derive(Debug, Clone)]
pub struct Port {
    pub x: f32,
    pub y: f32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Holdings {
    Breakdown(Vec<(String, u32)>),
    Aggregate(u32),
}

impl Holdings {
    pub fn summary(&self) -> String {
        match self {
            Self::Breakdown(items) => items
                .iter()
                .map(|(key, value)| format!("{key}:{value}"))
                .collect::<Vec<_>>()
                .join(" "),
            Self::Aggregate(count) => format!("Resources: {count}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub victory_points: u32,
    pub color: String,
    pub holdings: Holdings,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Quoted(f32),
    Inactive,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quoted(value) => write!(f, "{value:.2}"),
            Self::Inactive => f.write_str("INACTIVE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
    Unavailable,
}

impl Trend {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Up => "\u{2191}",
            Self::Down => "\u{2193}",
            Self::Flat => "=",
            Self::Unavailable => "-",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketRow {
    pub pair: String,
    pub price: Price,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetTab {
    List,
    Swap,
    Pool,
    Withdraw,
}

impl WidgetTab {
    pub const ALL: [WidgetTab; 4] = [Self::List, Self::Swap, Self::Pool, Self::Withdraw];

    pub fn title(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Swap => "Swap",
            Self::Pool => "Pool",
            Self::Withdraw => "Withdraw",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameInfo {
    pub turn: String,
    pub round: u32,
    pub dice: u8,
    pub ghost_ship_active: bool,
    pub longest_road: (String, u32),
    pub largest_army: (String, u32),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub time: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.time, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub title: String,
    pub info: GameInfo,
    pub log: Vec<LogEntry>,
    pub cells: Vec<HexCell>,
    pub ports: Vec<Port>,
    pub players: Vec<Player>,
    pub tabs: Vec<WidgetTab>,
    pub active_tab: WidgetTab,
    pub markets: Vec<MarketRow>,
}

// Standard 3-4-5-4-3 board, rows listed top to bottom.
const ROW_OFFSETS: [(f32, f32); 5] = [
    (-1.0, 2.0),
    (-1.5, 1.0),
    (-2.0, 0.0),
    (-1.5, -1.0),
    (-1.0, -2.0),
];

const BOARD: [&[(Resource, Token)]; 5] = {
    use Resource::*;
    use Token::{Ghost, Number as N};
    [
        &[(Brick, N(3)), (Wood, N(10)), (Wheat, N(4))],
        &[(Sheep, N(5)), (Ore, N(8)), (Brick, N(11)), (Wood, N(6))],
        &[(Wheat, N(2)), (Sheep, N(9)), (Desert, Ghost), (Ore, N(3)), (Wood, N(12))],
        &[(Brick, N(6)), (Wheat, N(10)), (Sheep, N(5)), (Ore, N(9))],
        &[(Wood, N(8)), (Wheat, N(4)), (Sheep, N(11))],
    ]
};

const PORTS: [(f32, f32, &str); 9] = [
    (-1.0, 2.8, "W-B"),
    (0.0, 2.8, "W-S"),
    (1.0, 2.8, "W-O"),
    (2.5, 0.5, "B-S"),
    (2.5, -0.5, "B-O"),
    (1.0, -2.8, "B-W"),
    (0.0, -2.8, "S-O"),
    (-1.0, -2.8, "S-W"),
    (-2.5, 0.0, "O-W"),
];

const LOG: [(&str, &str); 7] = [
    ("12:01", "P1 rolled 7 - Ghost ship!"),
    ("12:00", "P2 swapped 3 wood for 2 brick"),
    ("11:59", "P3 played knight"),
    ("11:58", "P1 deposited liquidity W-B"),
    ("11:57", "P4 built settlement"),
    ("11:56", "P2 rolled 6"),
    ("11:55", "Resources distributed"),
];

impl Scene {
    /// The fixed data set the mockup is drawn from.
    pub fn sample() -> Self {
        let cells = BOARD
            .into_iter()
            .zip(ROW_OFFSETS)
            .enumerate()
            .flat_map(|(row, (tiles, (start_x, y)))| {
                tiles
                    .iter()
                    .enumerate()
                    .map(move |(col, &(resource, token))| HexCell {
                        row,
                        col,
                        x: start_x + col as f32,
                        y,
                        resource,
                        token,
                    })
            })
            .collect();

        let ports = PORTS
            .iter()
            .map(|&(x, y, label)| Port {
                x,
                y,
                label: label.to_string(),
            })
            .collect();

        let log = LOG
            .iter()
            .map(|&(time, message)| LogEntry {
                time: time.to_string(),
                message: message.to_string(),
            })
            .collect();

        let breakdown = |values: [u32; 5]| {
            Holdings::Breakdown(
                ["W", "B", "S", "Wh", "O"]
                    .iter()
                    .zip(values)
                    .map(|(key, value)| (key.to_string(), value))
                    .collect(),
            )
        };
        let player = |name: &str, victory_points: u32, color: &str, holdings: Holdings| Player {
            name: name.to_string(),
            victory_points,
            color: color.to_string(),
            holdings,
        };
        let players = vec![
            player("Player 1 [YOU]", 4, "#FF6B6B", breakdown([3, 2, 5, 1, 4])),
            player("Player 2 [AI]", 5, "#4ECDC4", breakdown([2, 4, 3, 2, 1])),
            player("Player 3 [AI]", 6, "#45B7D1", Holdings::Aggregate(8)),
            player("Player 4 [AI]", 3, "#96CEB4", Holdings::Aggregate(7)),
        ];

        let market = |pair: &str, price: Price, trend: Trend| MarketRow {
            pair: pair.to_string(),
            price,
            trend,
        };
        let markets = vec![
            market("W-B", Price::Quoted(1.05), Trend::Up),
            market("W-S", Price::Quoted(0.98), Trend::Down),
            market("W-O", Price::Quoted(1.12), Trend::Up),
            market("B-S", Price::Quoted(0.95), Trend::Down),
            market("B-O", Price::Quoted(1.08), Trend::Flat),
            market("B-W", Price::Inactive, Trend::Unavailable),
            market("S-O", Price::Quoted(1.15), Trend::Up),
            market("S-W", Price::Quoted(1.03), Trend::Flat),
            market("O-W", Price::Quoted(0.97), Trend::Down),
        ];

        Self {
            title: "CATAMM - Catan with AMM Trading".to_string(),
            info: GameInfo {
                turn: "Player 1".to_string(),
                round: 5,
                dice: 7,
                ghost_ship_active: true,
                longest_road: ("P2".to_string(), 5),
                largest_army: ("P3".to_string(), 3),
            },
            log,
            cells,
            ports,
            players,
            tabs: WidgetTab::ALL.to_vec(),
            active_tab: WidgetTab::Swap,
            markets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_board_has_standard_shape() {
        let scene = Scene::sample();
        assert_eq!(scene.cells.len(), 19);
        assert_eq!(scene.ports.len(), 9);
        let per_row: Vec<usize> = (0..5)
            .map(|row| scene.cells.iter().filter(|c| c.row == row).count())
            .collect();
        assert_eq!(per_row, vec![3, 4, 5, 4, 3]);
    }

    #[test]
    fn only_the_desert_carries_the_ghost() {
        let scene = Scene::sample();
        for cell in &scene.cells {
            match cell.token {
                Token::Ghost => assert_eq!(cell.resource, Resource::Desert),
                Token::Number(n) => {
                    assert_ne!(cell.resource, Resource::Desert);
                    assert!([2, 3, 4, 5, 6, 8, 9, 10, 11, 12].contains(&n), "bad token {n}");
                }
            }
        }
        let desert = scene
            .cells
            .iter()
            .find(|c| c.resource == Resource::Desert)
            .unwrap();
        assert_eq!((desert.x, desert.y), (0.0, 0.0));
    }

    #[test]
    fn pips_follow_dice_odds() {
        let pips: Vec<usize> = [2, 3, 4, 5, 6, 8, 9, 10, 11, 12]
            .into_iter()
            .map(|n| Token::Number(n).pips())
            .collect();
        assert_eq!(pips, vec![1, 2, 3, 4, 5, 5, 4, 3, 2, 1]);
        assert_eq!(Token::Ghost.pips(), 0);
        assert!(Token::Number(8).is_hot());
        assert!(!Token::Number(9).is_hot());
    }

    #[test]
    fn holdings_summaries() {
        let scene = Scene::sample();
        assert_eq!(scene.players[0].holdings.summary(), "W:3 B:2 S:5 Wh:1 O:4");
        assert_eq!(scene.players[2].holdings.summary(), "Resources: 8");
    }

    #[test]
    fn price_and_log_display() {
        assert_eq!(Price::Quoted(1.05).to_string(), "1.05");
        assert_eq!(Price::Inactive.to_string(), "INACTIVE");
        let scene = Scene::sample();
        assert_eq!(scene.log[0].to_string(), "[12:01] P1 rolled 7 - Ghost ship!");
        assert_eq!(
            scene.markets.iter().filter(|m| m.price == Price::Inactive).count(),
            1
        );
    }
}
