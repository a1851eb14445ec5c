use thiserror::Error;

/// Errors raised by palette lookup, gradient synthesis and color
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The requested palette is not registered.
    #[error("unknown palette '{name}'; available palettes: {}", .available.join(", "))]
    UnknownPalette { name: String, available: Vec<String> },
    /// An explicit color index does not address an entry of the palette.
    #[error("index {index} out of range for palette '{name}' with {len} colors")]
    InvalidIndex { name: String, index: usize, len: usize },
    /// The string is not of the form `#RRGGBB`.
    #[error("invalid color '{0}': expected '#' followed by 6 hex digits")]
    InvalidColorFormat(String),
    #[error("unknown palette type '{0}': expected qualitative, sequential or diverging")]
    UnknownKind(String),
    #[error("palette '{0}' has no colors")]
    EmptyPalette(String),
    #[error("palette '{0}' is registered twice")]
    DuplicatePalette(String),
}
