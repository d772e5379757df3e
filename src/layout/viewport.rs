use super::Rect;

/// Maps panel data coordinates (y pointing up) onto canvas pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    origin_x: f32,
    origin_y: f32,
    scale_x: f32,
    scale_y: f32,
    x_min: f32,
    y_max: f32,
}

impl Viewport {
    /// Each axis fills the frame independently.
    pub fn stretched(frame: Rect, x_range: (f32, f32), y_range: (f32, f32)) -> Self {
        let dx = span(x_range);
        let dy = span(y_range);
        Self {
            origin_x: frame.x,
            origin_y: frame.y,
            scale_x: frame.width / dx,
            scale_y: frame.height / dy,
            x_min: x_range.0,
            y_max: y_range.1,
        }
    }

    /// One scale for both axes; the data box is centred in the frame.
    pub fn equal(frame: Rect, x_range: (f32, f32), y_range: (f32, f32)) -> Self {
        let dx = span(x_range);
        let dy = span(y_range);
        let scale = (frame.width / dx).min(frame.height / dy);
        Self {
            origin_x: frame.x + (frame.width - dx * scale) / 2.0,
            origin_y: frame.y + (frame.height - dy * scale) / 2.0,
            scale_x: scale,
            scale_y: scale,
            x_min: x_range.0,
            y_max: y_range.1,
        }
    }

    pub fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.origin_x + (x - self.x_min) * self.scale_x,
            self.origin_y + (self.y_max - y) * self.scale_y,
        )
    }

    pub fn len_x(&self, d: f32) -> f32 {
        d * self.scale_x
    }

    pub fn len_y(&self, d: f32) -> f32 {
        d * self.scale_y
    }

    /// Pixel rect for a data-space box anchored at its lower-left corner.
    pub fn rect(&self, x: f32, y: f32, width: f32, height: f32) -> Rect {
        let (left, top) = self.point(x, y + height);
        Rect::new(left, top, self.len_x(width), self.len_y(height))
    }
}

fn span(range: (f32, f32)) -> f32 {
    (range.1 - range.0).abs().max(f32::EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretched_flips_y() {
        let vp = Viewport::stretched(Rect::new(100.0, 50.0, 200.0, 400.0), (0.0, 10.0), (0.0, 10.0));
        assert_eq!(vp.point(0.0, 10.0), (100.0, 50.0));
        assert_eq!(vp.point(10.0, 0.0), (300.0, 450.0));
        assert_eq!(vp.rect(0.0, 0.0, 5.0, 5.0), Rect::new(100.0, 250.0, 100.0, 200.0));
    }

    #[test]
    fn equal_keeps_aspect_and_centres() {
        let vp = Viewport::equal(Rect::new(0.0, 0.0, 800.0, 1200.0), (-4.0, 4.0), (-4.0, 4.0));
        assert_eq!(vp.len_x(1.0), vp.len_y(1.0));
        assert_eq!(vp.point(0.0, 0.0), (400.0, 600.0));
        assert_eq!(vp.point(-4.0, 4.0), (0.0, 200.0));
    }
}
