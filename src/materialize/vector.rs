//! SVG re-wrapping into a padded, fixed-width data URL.

use crate::color::HexColor;
use crate::error::RenderError;
use crate::markup::{parse_svg, Element};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// An SVG `viewBox`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Used when the source has no usable `viewBox`.
    pub const FALLBACK: ViewBox = ViewBox {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 50.0,
    };

    /// Parse `min-x min-y width height`, separated by whitespace and/or commas.
    ///
    /// Returns `None` unless there are exactly four finite numbers with a
    /// positive width and height.
    pub fn parse(s: &str) -> Option<ViewBox> {
        let numbers: Vec<f64> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<f64>().ok().filter(|n| n.is_finite()))
            .collect::<Option<_>>()?;

        match numbers[..] {
            [x, y, width, height] if width > 0.0 && height > 0.0 => Some(ViewBox {
                x,
                y,
                width,
                height,
            }),
            _ => None,
        }
    }

    /// The `viewBox` of an element, or [`ViewBox::FALLBACK`].
    pub fn of(element: &Element) -> ViewBox {
        element
            .attr("viewBox")
            .and_then(ViewBox::parse)
            .unwrap_or(ViewBox::FALLBACK)
    }

    /// Grow by `padding` on every side.
    pub fn padded(self, padding: f64) -> ViewBox {
        ViewBox {
            x: self.x - padding,
            y: self.y - padding,
            width: self.width + 2.0 * padding,
            height: self.height + 2.0 * padding,
        }
    }

    /// Height that keeps the aspect ratio at the given width, rounded.
    pub fn height_for_width(&self, width: f64) -> f64 {
        (width * self.height / self.width).round()
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// Re-wrap settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorOptions {
    /// Units added around the equation on every side.
    pub padding: f64,
    /// Display width of the output SVG.
    pub target_width: f64,
}

impl Default for VectorOptions {
    fn default() -> Self {
        Self {
            padding: 100.0,
            target_width: 300.0,
        }
    }
}

/// Result of re-wrapping an SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorImage {
    pub markup: String,
    pub data_url: String,
    pub view_box: ViewBox,
    pub width: f64,
    pub height: f64,
}

/// Wrap the content of `svg` in a new root with a padded `viewBox`, a fixed
/// width, a matching height and a background color.
pub fn rewrap(
    svg: &str,
    background: &HexColor,
    options: &VectorOptions,
) -> Result<VectorImage, RenderError> {
    let source = parse_svg(svg)?;
    let view_box = ViewBox::of(&source).padded(options.padding);
    let width = options.target_width;
    let height = view_box.height_for_width(width);
    if !(view_box.width > 0.0 && view_box.height > 0.0 && height.is_finite() && height > 0.0) {
        return Err(RenderError::Unsupported(format!(
            "padding {} and width {width} leave no drawable area",
            options.padding
        )));
    }

    let mut wrapper = Element::new("svg");
    wrapper.set_attr("viewBox", view_box.to_string());
    wrapper.set_attr("width", width.to_string());
    wrapper.set_attr("height", height.to_string());
    wrapper.set_attr("xmlns", SVG_NS);
    // Prefixed references such as xlink:href need their declarations.
    for attr in source.attributes.iter().filter(|a| a.name.starts_with("xmlns:")) {
        wrapper.set_attr(&attr.name, attr.value.clone());
    }
    wrapper.set_style("background-color", background.as_str());
    wrapper.children = source.children;

    let markup = wrapper.to_xml();
    Ok(VectorImage {
        data_url: svg_data_url(&markup),
        markup,
        view_box,
        width,
        height,
    })
}

/// Percent-encode SVG text into a `data:` URL.
pub fn svg_data_url(svg: &str) -> String {
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        utf8_percent_encode(svg, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bg(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_view_box() {
        assert_eq!(
            ViewBox::parse("0 -1047.1 793.6 1799.7"),
            Some(ViewBox {
                x: 0.0,
                y: -1047.1,
                width: 793.6,
                height: 1799.7
            })
        );
        assert_eq!(ViewBox::parse("1,2, 3 4").map(|v| v.height), Some(4.0));
        assert_eq!(ViewBox::parse("0 0 0 10"), None);
        assert_eq!(ViewBox::parse("0 0 10"), None);
        assert_eq!(ViewBox::parse("0 0 a 10"), None);
        assert_eq!(ViewBox::parse("0 0 NaN 10"), None);
    }

    #[test]
    fn test_padding_and_height() {
        let svg = r#"<svg viewBox="10 -20 400 100" width="9ex" height="2ex"><path d="M0 0"/></svg>"#;
        let image = rewrap(svg, &bg("#000000"), &VectorOptions::default()).unwrap();

        assert_eq!(image.view_box.to_string(), "-90 -120 600 300");
        assert_eq!(image.width, 300.0);
        // round(300 * 300 / 600)
        assert_eq!(image.height, 150.0);
        assert_eq!(
            image.markup,
            r#"<svg viewBox="-90 -120 600 300" width="300" height="150" xmlns="http://www.w3.org/2000/svg" style="background-color: #000000;"><path d="M0 0"/></svg>"#
        );
    }

    #[test]
    fn test_height_rounding_without_padding() {
        let svg = r#"<svg viewBox="0 0 700 100"><g/></svg>"#;
        let options = VectorOptions {
            padding: 0.0,
            target_width: 300.0,
        };
        let image = rewrap(svg, &bg("#FFFFFF"), &options).unwrap();
        assert_eq!(image.view_box.to_string(), "0 0 700 100");
        // 300 * 100 / 700 = 42.857...
        assert_eq!(image.height, 43.0);
    }

    #[test]
    fn test_padding_swallowing_the_view_box_is_rejected() {
        let options = VectorOptions {
            padding: -50.0,
            target_width: 300.0,
        };
        let err = rewrap(r#"<svg viewBox="0 0 100 50"><g/></svg>"#, &bg("#000000"), &options).unwrap_err();
        assert!(matches!(err, RenderError::Unsupported(_)));
    }

    #[test]
    fn test_missing_view_box_falls_back() {
        let image = rewrap("<svg><g/></svg>", &bg("#000000"), &VectorOptions::default()).unwrap();
        assert_eq!(image.view_box.to_string(), "-100 -100 300 250");
        assert_eq!(image.height, 250.0);
    }

    #[test]
    fn test_keeps_namespace_declarations() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 1 1"><use xlink:href="#a"/></svg>"##;
        let image = rewrap(svg, &bg("#000000"), &VectorOptions::default()).unwrap();
        assert!(image
            .markup
            .contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
        assert!(!image.markup.contains("width=\"1\""));
    }

    #[test]
    fn test_data_url_encoding() {
        assert_eq!(
            svg_data_url(r##"<svg a="#F">(x)!*'~</svg>"##),
            "data:image/svg+xml;charset=utf-8,%3Csvg%20a%3D%22%23F%22%3E(x)!*'~%3C%2Fsvg%3E"
        );
    }

    #[test]
    fn test_background_only_changes_background() {
        let svg = r##"<svg viewBox="0 0 10 10"><path fill="#FFFFFF" d="M0 0"/></svg>"##;
        let dark = rewrap(svg, &bg("#000000"), &VectorOptions::default()).unwrap();
        let red = rewrap(svg, &bg("#FF0000"), &VectorOptions::default()).unwrap();

        assert_ne!(dark.data_url, red.data_url);
        assert_eq!(
            dark.data_url.replace("background-color%3A%20%23000000", "BG"),
            red.data_url.replace("background-color%3A%20%23FF0000", "BG")
        );
        assert!(red.data_url.contains("fill%3D%22%23FFFFFF%22"));
    }
}
