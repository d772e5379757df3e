use crate::layout::Layout;
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub hex_count: usize,
    pub port_count: usize,
    pub hexes: Vec<HexDump>,
    pub ports: Vec<PortDump>,
    pub players: Vec<String>,
    pub markets: Vec<MarketDump>,
}

#[derive(Debug, Serialize)]
pub struct HexDump {
    pub resource: String,
    pub marker: String,
    pub pips: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Serialize)]
pub struct PortDump {
    pub label: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Serialize)]
pub struct MarketDump {
    pub pair: String,
    pub price: String,
    pub trend: String,
    pub color: String,
    pub trend_color: String,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let hexes = layout
            .hexes
            .iter()
            .map(|hex| HexDump {
                resource: hex.resource.name().to_string(),
                marker: hex.marker.clone(),
                pips: hex.pips,
                x: hex.center.0,
                y: hex.center.1,
            })
            .collect();

        let ports = layout
            .ports
            .iter()
            .map(|port| PortDump {
                label: port.label.clone(),
                x: port.center.0,
                y: port.center.1,
            })
            .collect();

        let markets = layout
            .markets
            .iter()
            .map(|row| MarketDump {
                pair: row.pair.clone(),
                price: row.price.to_string(),
                trend: row.trend.symbol().to_string(),
                color: row.color.clone(),
                trend_color: row.trend_color.clone(),
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            hex_count: layout.hexes.len(),
            port_count: layout.ports.len(),
            hexes,
            ports,
            players: layout.players.iter().map(|card| card.name.clone()).collect(),
            markets,
        }
    }
}

pub fn write_layout_dump(layout: &Layout, path: &Path) -> Result<()> {
    let dump = LayoutDump::from_layout(layout);
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::layout::compute_layout;
    use crate::scene::Scene;

    #[test]
    fn dump_summarises_board() {
        let layout = compute_layout(&Scene::sample(), &Config::default());
        let dump = LayoutDump::from_layout(&layout);
        assert_eq!(dump.hex_count, 19);
        assert_eq!(dump.port_count, 9);
        assert_eq!(dump.players.len(), 4);
        let json = serde_json::to_value(&dump).unwrap();
        assert_eq!(json["ports"][0]["label"], "W-B");
        assert_eq!(json["markets"][5]["price"], "INACTIVE");
        assert_eq!(json["hexes"][9]["resource"], "desert");
    }
}
