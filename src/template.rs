//! SVG template for placeholder images
//!
//! A single 800x600 card: coffee gradient, faint saffron dot pattern, a
//! rounded border, the two caption lines and a fixed footer label.
//!
//! # Usage
//! ```rust
//! use saffron_placeholders::template::{render_svg, split_caption};
//!
//! let (line1, line2) = split_caption("Malabar\nEspresso");
//! let svg = render_svg(line1, line2);
//! assert!(svg.contains("Malabar"));
//! ```

use quick_xml::escape::escape;

use crate::catalog::ImageDescriptor;

/// Marker separating the primary and secondary caption lines
pub const LINE_BREAK: char = '\n';

/// Footer label printed on every card
pub const FOOTER_LABEL: &str = "SAFFRON BREW COLLECTION";

// =============================================================================
// PALETTE
// =============================================================================

/// Dark coffee, gradient start
pub const COLOR_COFFEE: &str = "#3E2723";
/// Deep roast, gradient end
pub const COLOR_ROAST: &str = "#2C1B18";
/// Saffron gold, used for text, border and dots
pub const COLOR_SAFFRON: &str = "#FFCB05";
pub const COLOR_FOOTER: &str = "#FFFFFF";

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

/// Split a caption into its primary and secondary line.
///
/// The secondary line is empty when the caption has no line break. Anything
/// after a second line break is dropped.
pub fn split_caption(caption: &str) -> (&str, &str) {
    let mut lines = caption.split(LINE_BREAK);
    let line1 = lines.next().unwrap_or_default();
    let line2 = lines.next().unwrap_or_default();
    (line1, line2)
}

/// Render the SVG document for two caption lines.
///
/// Slot text is XML-escaped. Output is a pure function of its input.
pub fn render_svg(line1: &str, line2: &str) -> String {
    let line1 = escape(line1);
    let line2 = escape(line2);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">
  <defs>
    <linearGradient id="grad1" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{COLOR_COFFEE};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{COLOR_ROAST};stop-opacity:1" />
    </linearGradient>
    <pattern id="pattern1" x="0" y="0" width="40" height="40" patternUnits="userSpaceOnUse">
        <circle cx="20" cy="20" r="1" fill="{COLOR_SAFFRON}" fill-opacity="0.1"/>
    </pattern>
  </defs>
  <rect width="100%" height="100%" fill="url(#grad1)" />
  <rect width="100%" height="100%" fill="url(#pattern1)" />

  <rect x="50" y="50" width="700" height="500" rx="20" ry="20" fill="none" stroke="{COLOR_SAFFRON}" stroke-width="2" stroke-opacity="0.3"/>

  <text x="50%" y="45%" dominant-baseline="middle" text-anchor="middle" font-family="serif" font-size="48" fill="{COLOR_SAFFRON}" font-weight="bold" letter-spacing="2">
    {line1}
  </text>
  <text x="50%" y="58%" dominant-baseline="middle" text-anchor="middle" font-family="serif" font-size="32" fill="{COLOR_SAFFRON}" font-weight="normal" letter-spacing="1" opacity="0.8">
    {line2}
  </text>

  <text x="50%" y="90%" dominant-baseline="middle" text-anchor="middle" font-family="sans-serif" font-size="14" fill="{COLOR_FOOTER}" opacity="0.4" letter-spacing="3">
    {FOOTER_LABEL}
  </text>
</svg>"##
    )
}

/// Render the SVG document for a descriptor's caption
pub fn render_descriptor(descriptor: &ImageDescriptor) -> String {
    let (line1, line2) = split_caption(&descriptor.caption);
    render_svg(line1, line2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_caption_two_lines() {
        assert_eq!(split_caption("Malabar\nEspresso"), ("Malabar", "Espresso"));
    }

    #[test]
    fn test_split_caption_without_marker() {
        assert_eq!(split_caption("Espresso"), ("Espresso", ""));
        assert_eq!(split_caption(""), ("", ""));
    }

    #[test]
    fn test_split_caption_drops_third_line() {
        assert_eq!(split_caption("a\nb\nc"), ("a", "b"));
    }

    #[test]
    fn test_render_substitutes_both_slots() {
        let svg = render_svg("Filter", "Kaapi");
        assert!(svg.contains("\n    Filter\n"));
        assert!(svg.contains("\n    Kaapi\n"));
        assert!(svg.contains(FOOTER_LABEL));
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_escapes_ampersand() {
        let svg = render_svg("Pistachio", "& Rose");
        assert!(svg.contains("&amp; Rose"));
        assert!(!svg.contains("& Rose"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_svg("Royal", "Kullad Chai"), render_svg("Royal", "Kullad Chai"));
    }

    #[test]
    fn test_render_keeps_palette() {
        let svg = render_svg("a", "b");
        assert!(svg.contains("stop-color:#3E2723"));
        assert!(svg.contains("stop-color:#2C1B18"));
        assert!(svg.contains(r##"fill="#FFCB05""##));
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
    }
}
