use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockupError {
    #[error("invalid color for `{field}`: {value:?}")]
    InvalidColor { field: String, value: String },

    #[error("unknown theme {0:?} (expected \"dark\" or \"light\")")]
    UnknownTheme(String),

    #[error("invalid canvas: {width}in x {height}in at {dpi} dpi")]
    InvalidCanvas { width: f32, height: f32, dpi: f32 },

    #[error("failed to allocate a {width}x{height} pixmap")]
    PixmapAllocation { width: u32, height: u32 },
}
