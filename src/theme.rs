use crate::scene::Resource;

#[derive(Debug, Clone)]
pub struct Theme {
    pub font_family: String,
    pub background: String,
    pub panel_background: String,
    pub text_color: String,
    pub alert_color: String,
    pub positive_color: String,
    pub hex_stroke: String,
    pub token_fill: String,
    pub token_stroke: String,
    pub token_text: String,
    pub pip_color: String,
    pub port_fill: String,
    pub port_stroke: String,
    pub port_text: String,
    pub tab_fill: String,
    pub tab_stroke: String,
    pub active_tab_stroke: String,
    pub wood: String,
    pub brick: String,
    pub sheep: String,
    pub wheat: String,
    pub ore: String,
    pub desert: String,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            font_family: "DejaVu Sans, Inter, Segoe UI, sans-serif".to_string(),
            background: "#1a1a1a".to_string(),
            panel_background: "#2a2a2a".to_string(),
            text_color: "#ffffff".to_string(),
            alert_color: "#FF6B6B".to_string(),
            positive_color: "#4ECDC4".to_string(),
            hex_stroke: "#000000".to_string(),
            token_fill: "#ffffff".to_string(),
            token_stroke: "#000000".to_string(),
            token_text: "#000000".to_string(),
            pip_color: "#555555".to_string(),
            port_fill: "#4169E1".to_string(),
            port_stroke: "#ffffff".to_string(),
            port_text: "#ffffff".to_string(),
            tab_fill: "#3a3a3a".to_string(),
            tab_stroke: "#5a5a5a".to_string(),
            active_tab_stroke: "#ffffff".to_string(),
            wood: "#228B22".to_string(),
            brick: "#B22222".to_string(),
            sheep: "#90EE90".to_string(),
            wheat: "#FFD700".to_string(),
            ore: "#696969".to_string(),
            desert: "#DEB887".to_string(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: "#F4F1EA".to_string(),
            panel_background: "#FFFFFF".to_string(),
            text_color: "#1C2430".to_string(),
            alert_color: "#D64545".to_string(),
            positive_color: "#1E9E8F".to_string(),
            hex_stroke: "#3B3B3B".to_string(),
            token_fill: "#FFFDF7".to_string(),
            token_stroke: "#3B3B3B".to_string(),
            token_text: "#1C2430".to_string(),
            pip_color: "#7A8AA6".to_string(),
            port_stroke: "#1C2430".to_string(),
            tab_fill: "#EEF2F8".to_string(),
            tab_stroke: "#C7D2E5".to_string(),
            active_tab_stroke: "#1C2430".to_string(),
            ..Self::dark()
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" | "default" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    pub fn resource_color(&self, resource: Resource) -> &str {
        match resource {
            Resource::Wood => &self.wood,
            Resource::Brick => &self.brick,
            Resource::Sheep => &self.sheep,
            Resource::Wheat => &self.wheat,
            Resource::Ore => &self.ore,
            Resource::Desert => &self.desert,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
