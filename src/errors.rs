//! Error types for text placement and typeface loading

/// Why an "add text" request was refused.
///
/// Both variants are recoverable and leave the scene untouched; the `Display` text is the
/// notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// (FontNotReady) The typeface has not resolved yet (or failed to load)
    #[error("Font is still loading, please wait a moment and try again.")]
    FontNotReady,
    /// (EmptyInput) The submitted text is empty after trimming whitespace
    #[error("Please enter some text.")]
    EmptyInput,
}

/// Failures of the typeface loading collaborator.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Reading the font resource failed
    #[error("could not read font resource: {0}")]
    Io(#[from] std::io::Error),
    /// A typeface JSON document could not be decoded
    #[error("malformed typeface JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A TrueType/OpenType face could not be parsed
    #[error("malformed TrueType font: {0}")]
    TrueType(String),
    /// A glyph outline string uses an unknown command or is truncated
    #[error("malformed glyph outline for {glyph:?}: {reason}")]
    Outline { glyph: String, reason: String },
    /// The resource decoded but carries no usable glyph table
    #[error("typeface has no glyphs: {0}")]
    MissingGlyphs(String),
    /// The resource format is not supported by this build
    #[error("unsupported font format: {0}")]
    Unsupported(String),
    /// The loader went away before delivering a result
    #[error("font loader disconnected before resolving")]
    LoaderDisconnected,
}
