//! Terminal glyphs for catalog icon names.
//!
//! Descriptors name icons from an external `fa-*` set; the grid projects
//! each name onto a single-cell glyph at draw time. Names outside the
//! table fall back to a neutral dot rather than failing, so descriptors
//! never need validating.

pub const FALLBACK: &str = "·";

pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "fa-prescription-bottle-alt" => "℞",
        "fa-user-md" => "✚",
        "fa-file-invoice-dollar" => "$",
        "fa-hospital" => "⌂",
        "fa-file-contract" => "✎",
        "fa-percentage" => "%",
        "fa-users" => "⚉",
        "fa-chart-line" => "↗",
        _ => FALLBACK,
    }
}
