//! ## svgtrim - trim empty margins from SVG documents
//!
//! `svgtrim` computes the bounding box of the visible content of an SVG
//! document and rewrites the root `viewBox`, `width` and `height` so the
//! content fills the image with a fixed padding around it.
//!
//! It is normally run as a command line tool, but the library interface
//! allows other front-ends to trim documents directly.
//!
//! ## Supported content
//!
//! Bounds are derived from `rect`, `circle`, `ellipse`, `line`, `polygon`,
//! `polyline`, `path` and `image` elements. Only `translate()` transforms
//! are applied; other transforms are ignored with a warning. Path curves
//! include their control points, so curve bounds may be slightly larger
//! than the rendered curve.
//!
//! ## Example
//!
//! ```
//! use svgtrim::{trim_str, TrimConfig, TrimOutcome};
//!
//! let input = r#"<svg width="500" height="500"><rect x="100" y="100" width="100" height="100"/></svg>"#;
//! let (output, outcome) = trim_str(input, &TrimConfig::default()).unwrap();
//!
//! assert!(matches!(outcome, TrimOutcome::Trimmed(_)));
//! assert!(output.unwrap().contains(r#"viewBox="90 90 120 120""#));
//! ```

use std::fmt;
use std::io::{BufRead, Cursor, Write};

#[cfg(feature = "cli")]
pub mod cli;
pub mod document;
pub mod errors;
pub mod geometry;
pub mod path;
pub mod shape;
pub mod transform;
mod types;
pub mod viewport;
pub mod walker;

pub use errors::{Error, Result};
pub use path::PathBounds;

use document::Document;
use geometry::BoundingBox;
use viewport::{apply_viewbox, original_size, ViewBox};
use walker::content_bounds;

// Allow users of this as a library to easily retrieve the version of svgtrim being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings to configure a single trim operation.
#[derive(Clone, Debug)]
pub struct TrimConfig {
    /// Space added around the content bounds (user-units, default 10)
    pub padding: f32,
    /// How bounds are derived from path data
    pub path_bounds: PathBounds,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            padding: 10.,
            path_bounds: PathBounds::default(),
        }
    }
}

/// Before / after details of a successful trim.
#[derive(Clone, Debug, PartialEq)]
pub struct TrimReport {
    /// Extent of the document before trimming
    pub original: ViewBox,
    /// Bounds of the visible content, without padding
    pub content: BoundingBox,
    /// The new viewBox written to the document
    pub trimmed: ViewBox,
    /// Number of elements contributing to the content bounds
    pub shape_count: usize,
}

impl fmt::Display for TrimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original viewBox: {}", self.original)?;
        writeln!(
            f,
            "Content bounds: {} ({} shapes)",
            self.content, self.shape_count
        )?;
        writeln!(f, "Trimmed viewBox: {}", self.trimmed)?;
        write!(
            f,
            "Reduced from {:.0}x{:.0} to {:.0}x{:.0}",
            self.original.width, self.original.height, self.trimmed.width, self.trimmed.height
        )
    }
}

/// Result of a trim operation which did not fail.
#[derive(Clone, Debug, PartialEq)]
pub enum TrimOutcome {
    /// The document was rewritten
    Trimmed(TrimReport),
    /// No element with geometry was found; the document is left unchanged
    NoContent,
}

/// Trim the given document in place.
///
/// Namespaces are normalized first so prefixed SVG elements are recognised.
/// On `TrimOutcome::NoContent` the root viewBox, width and height are left
/// unchanged.
pub fn trim_document(doc: &mut Document, config: &TrimConfig) -> Result<TrimOutcome> {
    doc.normalize_namespaces();

    let original = original_size(doc.root());
    let Some(bounds) = content_bounds(doc.root(), config.path_bounds)? else {
        tracing::info!("no visual content found");
        return Ok(TrimOutcome::NoContent);
    };
    tracing::debug!(bbox = %bounds.bbox, shapes = bounds.shape_count, "content bounds");

    let trimmed = ViewBox::padded(&bounds.bbox, config.padding);
    apply_viewbox(doc.root_mut(), &trimmed);

    Ok(TrimOutcome::Trimmed(TrimReport {
        original,
        content: bounds.bbox,
        trimmed,
        shape_count: bounds.shape_count,
    }))
}

/// Reads a document from `reader`, trims it and writes it to `writer`.
///
/// The entire document is processed before anything is written, and nothing
/// at all is written if the result is `TrimOutcome::NoContent` or an error.
pub fn trim_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &TrimConfig,
) -> Result<TrimOutcome> {
    let mut doc = Document::from_reader(reader)?;
    let outcome = trim_document(&mut doc, config)?;
    if let TrimOutcome::Trimmed(_) = outcome {
        doc.write_to(writer)?;
    }
    Ok(outcome)
}

/// Trim `input` provided as a string, returning the output document (if
/// any) along with the outcome.
pub fn trim_str<T: Into<String>>(
    input: T,
    config: &TrimConfig,
) -> Result<(Option<String>, TrimOutcome)> {
    let mut input = Cursor::new(input.into());
    let mut output: Vec<u8> = vec![];

    let outcome = trim_stream(&mut input, &mut output, config)?;
    let output = match outcome {
        TrimOutcome::Trimmed(_) => Some(String::from_utf8(output)?),
        TrimOutcome::NoContent => None,
    };
    Ok((output, outcome))
}

/// Trim `input` using default config, returning the output document or
/// `None` if there was no visual content.
pub fn trim_str_default<T: Into<String>>(input: T) -> Result<Option<String>> {
    Ok(trim_str(input, &TrimConfig::default())?.0)
}
