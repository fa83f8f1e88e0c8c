// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style descriptors and their reduction to font selection attributes.

use core::fmt;
use std::collections::BTreeMap;

use font_attrs::css;

/// A CSS-like mapping from attribute name to value.
///
/// Equality and hashing are by value and independent of insertion order, so descriptors can
/// be used directly as cache keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleDescriptor {
    attributes: BTreeMap<String, String>,
}

impl StyleDescriptor {
    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Returns the value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns an iterator over all attributes, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleDescriptor {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// The four attributes that decide font selection, with defaults applied.
///
/// Two styles that reduce to the same `ReducedStyle` always resolve to the same font. The
/// same type describes the face a matching service actually picked (see
/// [`FoundFace::to_css`](crate::FoundFace::to_css)).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReducedStyle {
    family: String,
    weight: String,
    style: String,
    stretch: String,
}

impl ReducedStyle {
    /// Creates a reduced style from attribute values, used verbatim.
    pub fn new(
        family: impl Into<String>,
        weight: impl Into<String>,
        style: impl Into<String>,
        stretch: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            style: style.into(),
            stretch: stretch.into(),
        }
    }

    /// Reduces a style descriptor.
    ///
    /// Missing selection attributes take their initial values; every other attribute is
    /// dropped. The family list is rewritten so that each entry is single-quoted and entries
    /// are separated by a bare comma, whatever quoting the input used.
    ///
    /// ```
    /// use fontmatch::{ReducedStyle, StyleDescriptor};
    ///
    /// let style = StyleDescriptor::new()
    ///     .with("font-family", "\"Times New Roman\",serif")
    ///     .with("font-size", "12px");
    /// let reduced = ReducedStyle::from_style(&style);
    /// assert_eq!(reduced.family(), "'Times New Roman','serif'");
    /// assert_eq!(reduced.weight(), "normal");
    /// ```
    pub fn from_style(style: &StyleDescriptor) -> Self {
        let get = |name: &str| {
            style
                .get(name)
                .or_else(|| css::initial_value(name))
                .unwrap_or(css::NORMAL)
        };
        Self {
            family: quote_families(get(css::FONT_FAMILY)),
            weight: get(css::FONT_WEIGHT).to_owned(),
            style: get(css::FONT_STYLE).to_owned(),
            stretch: get(css::FONT_STRETCH).to_owned(),
        }
    }

    /// The `font-family` value.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The `font-weight` value.
    pub fn weight(&self) -> &str {
        &self.weight
    }

    /// The `font-style` value.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// The `font-stretch` value.
    pub fn stretch(&self) -> &str {
        &self.stretch
    }

    /// Returns the family names with quotes and surrounding whitespace removed.
    ///
    /// Empty entries are skipped.
    pub fn families(&self) -> impl Iterator<Item = &str> + '_ {
        self.family
            .split(',')
            .map(family_name)
            .filter(|name| !name.is_empty())
    }

    /// Returns the four attributes in canonical order.
    pub fn items(&self) -> [(&'static str, &str); 4] {
        [
            (css::FONT_FAMILY, &self.family),
            (css::FONT_WEIGHT, &self.weight),
            (css::FONT_STYLE, &self.style),
            (css::FONT_STRETCH, &self.stretch),
        ]
    }

    /// Converts back into a general style descriptor.
    pub fn to_descriptor(&self) -> StyleDescriptor {
        self.items().into_iter().collect()
    }
}

impl Default for ReducedStyle {
    fn default() -> Self {
        Self::from_style(&StyleDescriptor::new())
    }
}

impl fmt::Display for ReducedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.items().into_iter().enumerate() {
            if i != 0 {
                f.write_str(";")?;
            }
            write!(f, "{name}:{value}")?;
        }
        Ok(())
    }
}

/// Strips surrounding double quotes, then single quotes. Whitespace is kept.
pub(crate) fn unquote(name: &str) -> &str {
    name.trim_matches('"').trim_matches('\'')
}

/// Returns the bare name of one entry of a family list.
///
/// A canonical entry quotes the entry as written, so the name may sit inside whitespace and its
/// own quotes.
pub(crate) fn family_name(entry: &str) -> &str {
    unquote(unquote(entry).trim())
}

fn quote_families(list: &str) -> String {
    let mut quoted = String::with_capacity(list.len() + 4);
    for (i, name) in list.split(',').map(unquote).enumerate() {
        if i != 0 {
            quoted.push(',');
        }
        quoted.push('\'');
        quoted.push_str(name);
        quoted.push('\'');
    }
    quoted
}

#[cfg(test)]
mod tests {
    use super::{ReducedStyle, StyleDescriptor};

    #[test]
    fn descriptor_equality_ignores_insertion_order() {
        let a = StyleDescriptor::new()
            .with("font-weight", "700")
            .with("font-family", "Arial");
        let b: StyleDescriptor = [("font-family", "Arial"), ("font-weight", "700")]
            .into_iter()
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn defaults_fill_missing_attributes() {
        let reduced = ReducedStyle::from_style(&StyleDescriptor::new());
        assert_eq!(reduced.family(), "'sans-serif'");
        assert_eq!(reduced.weight(), "normal");
        assert_eq!(reduced.style(), "normal");
        assert_eq!(reduced.stretch(), "normal");
        assert_eq!(reduced, ReducedStyle::default());
    }

    #[test]
    fn non_selection_attributes_are_dropped() {
        let with_extras = StyleDescriptor::new()
            .with("font-family", "Arial")
            .with("font-variant", "small-caps")
            .with("fill", "#000");
        let plain = StyleDescriptor::new().with("font-family", "Arial");
        assert_eq!(
            ReducedStyle::from_style(&with_extras),
            ReducedStyle::from_style(&plain)
        );
    }

    #[test]
    fn family_quoting_is_canonical() {
        let inputs = [
            "Arial,Helvetica",
            "'Arial','Helvetica'",
            "\"Arial\",\"Helvetica\"",
            "\"Arial\",'Helvetica'",
        ];
        for input in inputs {
            let style = StyleDescriptor::new().with("font-family", input);
            assert_eq!(
                ReducedStyle::from_style(&style).family(),
                "'Arial','Helvetica'",
                "{input}"
            );
        }
    }

    #[test]
    fn family_key_keeps_whitespace() {
        let style = StyleDescriptor::new().with("font-family", "Arial, 'Helvetica' ");
        let reduced = ReducedStyle::from_style(&style);
        assert_eq!(reduced.family(), "'Arial',' 'Helvetica' '");
        let families: Vec<_> = reduced.families().collect();
        assert_eq!(families, ["Arial", "Helvetica"]);
    }

    #[test]
    fn families_are_unquoted() {
        let reduced = ReducedStyle::new("'Modern No. 20','',serif", "400", "normal", "normal");
        let families: Vec<_> = reduced.families().collect();
        assert_eq!(families, ["Modern No. 20", "serif"]);
    }

    #[test]
    fn display_lists_items_in_order() {
        let reduced = ReducedStyle::new("'Arial'", "700", "italic", "condensed");
        assert_eq!(
            reduced.to_string(),
            "font-family:'Arial';font-weight:700;font-style:italic;font-stretch:condensed"
        );
        assert_eq!(reduced.to_descriptor().get("font-stretch"), Some("condensed"));
    }
}
