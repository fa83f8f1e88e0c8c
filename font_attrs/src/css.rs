// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS font attribute names and their initial values.

/// The `font-family` property.
pub const FONT_FAMILY: &str = "font-family";
/// The `font-weight` property.
pub const FONT_WEIGHT: &str = "font-weight";
/// The `font-style` property.
pub const FONT_STYLE: &str = "font-style";
/// The `font-stretch` property.
pub const FONT_STRETCH: &str = "font-stretch";
/// The `font-variant` property.
pub const FONT_VARIANT: &str = "font-variant";

/// The four properties that determine which font is selected, in canonical order.
pub const SELECTION_PROPERTIES: [&str; 4] = [FONT_FAMILY, FONT_WEIGHT, FONT_STYLE, FONT_STRETCH];

/// The properties the shaping service needs to build a font description.
pub const SHAPING_PROPERTIES: [&str; 5] = [
    FONT_FAMILY,
    FONT_WEIGHT,
    FONT_STYLE,
    FONT_VARIANT,
    FONT_STRETCH,
];

/// Initial value of `font-family`.
pub const DEFAULT_FAMILY: &str = "sans-serif";
/// Initial value of `font-weight`, `font-style`, `font-stretch` and `font-variant`.
pub const NORMAL: &str = "normal";

/// Returns the initial value of a font property, or `None` for properties this crate does not
/// know about.
///
/// ```
/// use font_attrs::css;
///
/// assert_eq!(css::initial_value("font-family"), Some("sans-serif"));
/// assert_eq!(css::initial_value("font-stretch"), Some("normal"));
/// assert_eq!(css::initial_value("font-size"), None);
/// ```
pub fn initial_value(property: &str) -> Option<&'static str> {
    match property {
        FONT_FAMILY => Some(DEFAULT_FAMILY),
        FONT_WEIGHT | FONT_STYLE | FONT_STRETCH | FONT_VARIANT => Some(NORMAL),
        _ => None,
    }
}

/// Returns `true` if `property` takes part in font selection.
pub fn is_selection_property(property: &str) -> bool {
    SELECTION_PROPERTIES.contains(&property)
}
