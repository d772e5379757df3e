use crate::text_metrics;

use super::{Anchor, TextItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum VAlign {
    Baseline,
    Top,
    Center,
}

pub(super) struct TextStyle<'a> {
    pub size: f32,
    pub bold: bool,
    pub color: &'a str,
    pub anchor: Anchor,
    pub valign: VAlign,
}

impl<'a> TextStyle<'a> {
    pub fn new(size: f32, color: &'a str) -> Self {
        Self {
            size,
            bold: false,
            color,
            anchor: Anchor::Start,
            valign: VAlign::Baseline,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.anchor = Anchor::Middle;
        self.valign = VAlign::Center;
        self
    }

    pub fn heading(mut self) -> Self {
        self.anchor = Anchor::Middle;
        self.valign = VAlign::Top;
        self.bold = true;
        self
    }
}

/// Builds a text item whose baseline honours the requested vertical alignment.
pub(super) fn place_text(x: f32, y: f32, text: impl Into<String>, style: &TextStyle<'_>) -> TextItem {
    // Offsets approximate cap height for common sans faces.
    let baseline = match style.valign {
        VAlign::Baseline => y,
        VAlign::Top => y + style.size * 0.76,
        VAlign::Center => y + style.size * 0.36,
    };
    TextItem {
        x,
        y: baseline,
        text: text.into(),
        font_size: style.size,
        bold: style.bold,
        color: style.color.to_string(),
        anchor: style.anchor,
    }
}

pub(super) fn text_width(text: &str, font_size: f32, font_family: &str, bold: bool) -> f32 {
    text_metrics::measure_text_width(text, font_size, font_family, bold)
        .unwrap_or_else(|| fallback_text_width(text, font_size, bold))
}

/// Largest size not above `preferred` at which `text` fits in `max_width`.
pub(super) fn fit_font_size(
    text: &str,
    preferred: f32,
    max_width: f32,
    font_family: &str,
    bold: bool,
) -> f32 {
    let width = text_width(text, preferred, font_family, bold);
    if width <= max_width || width <= 0.0 {
        return preferred;
    }
    preferred * max_width / width
}

fn fallback_text_width(text: &str, font_size: f32, bold: bool) -> f32 {
    let base: f32 = text.chars().map(char_width_factor).sum();
    let weight = if bold { 1.06 } else { 1.0 };
    base * font_size * weight
}

fn char_width_factor(ch: char) -> f32 {
    match ch {
        ' ' => 0.306,
        '.' | ',' | ':' | ';' | '|' | '!' | '(' | ')' | '[' | ']' => 0.321,
        'i' | 'j' | 'l' | 'I' => 0.272,
        'f' | 't' | 'r' => 0.38,
        '-' | '=' => 0.4,
        'm' | 'w' => 0.83,
        'M' | 'W' => 0.9,
        'A'..='Z' => 0.66,
        'a'..='z' => 0.53,
        '0'..='9' => 0.55,
        _ => 0.9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_moves_baseline_down() {
        let top = place_text(0.0, 100.0, "T", &TextStyle::new(20.0, "#fff").heading());
        let center = place_text(0.0, 100.0, "C", &TextStyle::new(20.0, "#fff").centered());
        let base = place_text(0.0, 100.0, "B", &TextStyle::new(20.0, "#fff"));
        assert_eq!(base.y, 100.0);
        assert!(top.y > center.y && center.y > base.y);
        assert!(top.bold);
        assert_eq!(center.anchor, Anchor::Middle);
    }

    #[test]
    fn fitting_never_grows_text() {
        let size = fit_font_size("W-B", 16.0, 1000.0, "sans-serif", true);
        assert_eq!(size, 16.0);
        let shrunk = fit_font_size("Withdraw everything", 16.0, 20.0, "sans-serif", false);
        assert!(shrunk < 16.0);
        assert!(text_width("Withdraw everything", shrunk, "sans-serif", false) <= 20.5);
    }
}
