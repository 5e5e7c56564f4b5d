//! Inline CSS `style` attribute editing.

use std::fmt;

/// Ordered list of `property: value` declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn parse(s: &str) -> Self {
        let declarations = s
            .split(';')
            .filter_map(|decl| {
                let (prop, value) = decl.split_once(':')?;
                let prop = prop.trim();
                let value = value.trim();
                if prop.is_empty() {
                    return None;
                }
                Some((prop.to_ascii_lowercase(), value.to_string()))
            })
            .collect();
        Self { declarations }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, property: &str, value: &str) {
        match self.declarations.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => *v = value.to_string(),
            None => self
                .declarations
                .push((property.to_string(), value.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (prop, value) in &self.declarations {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{prop}: {value};")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_and_set() {
        let mut style = Style::parse("vertical-align: -0.566ex; COLOR:red;");
        assert_eq!(style.get("color"), Some("red"));

        style.set("color", "#FFFFFF");
        style.set("background-color", "#000000");
        assert_eq!(
            style.to_string(),
            "vertical-align: -0.566ex; color: #FFFFFF; background-color: #000000;"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(Style::parse("").to_string(), "");
        assert_eq!(Style::parse(" ; ;").get("color"), None);
    }
}
