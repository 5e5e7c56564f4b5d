//! Color injection into typeset markup.

use crate::color::ColorPair;
use crate::error::RenderError;
use crate::markup::{edit_root_attributes, parse_svg, Element, Markup, MarkupKind, Node};
use serde::{Deserialize, Serialize};

/// SVG drawing primitives that take the foreground color as `fill`.
pub const FILL_TAGS: &[&str] = &["path", "g", "text", "use", "tspan"];

/// How colors are applied to markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorStrategy {
    /// Pick from the markup kind.
    #[default]
    Auto,
    /// Set `fill` on every drawing element of an SVG tree.
    RecursiveFill,
    /// Set `color` and `background-color` on the root and rely on inheritance.
    RootStyle,
}

impl ColorStrategy {
    /// The concrete strategy for a kind of markup.
    ///
    /// HTML always inherits `color`, so it never needs the recursive walk.
    pub fn resolve(self, kind: MarkupKind) -> ColorStrategy {
        match (self, kind) {
            (_, MarkupKind::Html) => ColorStrategy::RootStyle,
            (ColorStrategy::Auto, MarkupKind::Svg) => ColorStrategy::RecursiveFill,
            (explicit, MarkupKind::Svg) => explicit,
        }
    }
}

/// Set `fill` to `color` on every element in the tree whose name is in `tags`.
pub fn recolor(root: &mut Element, tags: &[&str], color: &str) {
    let mut stack = vec![root];
    while let Some(el) = stack.pop() {
        if tags.contains(&el.name.as_str()) {
            el.set_attr("fill", color);
        }
        for child in el.children.iter_mut() {
            if let Node::Element(child) = child {
                stack.push(child);
            }
        }
    }
}

/// Apply a color pair to typeset markup.
pub fn apply_colors(
    markup: Markup,
    colors: &ColorPair,
    strategy: ColorStrategy,
) -> Result<Markup, RenderError> {
    let kind = markup.kind();
    let fg = colors.foreground.as_str();
    let bg = colors.background.as_str();

    let styled = match strategy.resolve(kind) {
        ColorStrategy::RecursiveFill => {
            let mut root = parse_svg(markup.as_str())?;
            recolor(&mut root, FILL_TAGS, fg);
            root.set_style("background-color", bg);
            root.to_xml()
        }
        _ => edit_root_attributes(markup.as_str(), |root| {
            root.set_style("color", fg);
            root.set_style("background-color", bg);
        })?,
    };

    Ok(match kind {
        MarkupKind::Svg => Markup::Svg(styled),
        MarkupKind::Html => Markup::Html(styled),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Theme;
    use pretty_assertions::assert_eq;

    const SVG: &str = r#"<svg viewBox="0 0 10 10"><g><g><g><use href="a"/><rect/></g></g><text><tspan>x</tspan></text></g></svg>"#;

    #[test]
    fn test_recolor_reaches_every_depth() {
        let mut root = parse_svg(SVG).unwrap();
        recolor(&mut root, FILL_TAGS, "#FF0000");
        assert_eq!(
            root.to_xml(),
            r##"<svg viewBox="0 0 10 10"><g fill="#FF0000"><g fill="#FF0000"><g fill="#FF0000"><use href="a" fill="#FF0000"/><rect/></g></g><text fill="#FF0000"><tspan fill="#FF0000">x</tspan></text></g></svg>"##
        );
    }

    #[test]
    fn test_recolor_custom_tags() {
        let mut root = parse_svg(SVG).unwrap();
        recolor(&mut root, &["rect"], "#00FF00");
        assert_eq!(root.find("rect").unwrap().attr("fill"), Some("#00FF00"));
        assert_eq!(root.find("g").unwrap().attr("fill"), None);
    }

    #[test]
    fn test_recursive_fill_sets_background() {
        let colors = ColorPair::for_theme(Theme::Light);
        let out = apply_colors(Markup::Svg(SVG.into()), &colors, ColorStrategy::Auto).unwrap();
        let root = parse_svg(out.as_str()).unwrap();
        assert_eq!(root.attr("style"), Some("background-color: #F3F3F3;"));
        assert_eq!(root.find("use").unwrap().attr("fill"), Some("#000000"));
    }

    #[test]
    fn test_root_style_on_svg() {
        let colors = ColorPair::for_theme(Theme::Dark);
        let out =
            apply_colors(Markup::Svg(SVG.into()), &colors, ColorStrategy::RootStyle).unwrap();
        assert!(out
            .as_str()
            .starts_with(r##"<svg viewBox="0 0 10 10" style="color: #FFFFFF; background-color: #000000;">"##));
        assert!(!out.as_str().contains("fill="));
    }

    #[test]
    fn test_html_uses_root_style() {
        let colors = ColorPair::for_theme(Theme::Dark);
        let html = Markup::Html(r#"<span class="katex-display"><span>x</span></span>"#.into());
        let out = apply_colors(html, &colors, ColorStrategy::RecursiveFill).unwrap();
        assert_eq!(
            out,
            Markup::Html(
                r##"<span class="katex-display" style="color: #FFFFFF; background-color: #000000;"><span>x</span></span>"##
                    .into()
            )
        );
    }
}
