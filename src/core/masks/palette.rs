//! Label palette built from the project's tag definitions

use crate::domain::{MaskError, Result, Tag};
use std::collections::HashMap;

/// Palette index of the background
pub const BACKGROUND_INDEX: u8 = 0;

/// Maps tag names to mask pixel values and pixel values to RGB colors
///
/// Index 0 is black background; tags get 1, 2, ... in project order. A tag
/// name defined twice labels with its last index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskPalette {
    labels: HashMap<String, u8>,
    colors: Vec<[u8; 3]>,
}

impl MaskPalette {
    /// Build the palette for `tags`
    ///
    /// # Errors
    ///
    /// Returns `MaskError::InvalidColor` for a color that is not `#rgb` or
    /// `#rrggbb`, and `MaskError::TooManyTags` past 255 tags.
    pub fn from_tags(tags: &[Tag]) -> Result<Self> {
        if tags.len() > usize::from(u8::MAX) {
            return Err(MaskError::TooManyTags { count: tags.len() }.into());
        }

        let mut labels = HashMap::with_capacity(tags.len());
        let mut colors = Vec::with_capacity(tags.len() + 1);
        colors.push([0, 0, 0]);

        for (i, tag) in tags.iter().enumerate() {
            let index = u8::try_from(i + 1)
                .map_err(|_| MaskError::TooManyTags { count: tags.len() })?;
            let color = parse_hex_color(&tag.color).ok_or_else(|| MaskError::InvalidColor {
                tag: tag.name.clone(),
                color: tag.color.clone(),
            })?;
            labels.insert(tag.name.clone(), index);
            colors.push(color);
        }

        Ok(Self { labels, colors })
    }

    /// Pixel value for a tag name
    pub fn label(&self, tag: &str) -> Option<u8> {
        self.labels.get(tag).copied()
    }

    /// RGB color per pixel value, background first
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    /// Flat `r, g, b, r, g, b, ...` bytes for a PNG `PLTE` chunk
    pub fn to_plte(&self) -> Vec<u8> {
        self.colors.iter().flatten().copied().collect()
    }
}

fn parse_hex_color(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some([channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?]),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some([short(0)?, short(1)?, short(2)?])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExportError;
    use test_case::test_case;

    fn tag(name: &str, color: &str) -> Tag {
        Tag {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    #[test_case("#ff0000", Some([255, 0, 0]) ; "long form")]
    #[test_case("#5B5BFF", Some([91, 91, 255]) ; "upper case")]
    #[test_case("#0f8", Some([0, 255, 136]) ; "short form")]
    #[test_case("ff0000", None ; "missing hash")]
    #[test_case("#ff00", None ; "wrong length")]
    #[test_case("#gg0000", None ; "not hex")]
    fn test_parse_hex_color(input: &str, expected: Option<[u8; 3]>) {
        assert_eq!(parse_hex_color(input), expected);
    }

    #[test]
    fn test_labels_follow_tag_order() {
        let palette =
            MaskPalette::from_tags(&[tag("mailbox", "#ff0000"), tag("pencil", "#00ff00")])
                .unwrap();

        assert_eq!(palette.label("mailbox"), Some(1));
        assert_eq!(palette.label("pencil"), Some(2));
        assert_eq!(palette.label("cat"), None);
        assert_eq!(palette.colors(), &[[0, 0, 0], [255, 0, 0], [0, 255, 0]]);
        assert_eq!(palette.to_plte(), vec![0, 0, 0, 255, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let result = MaskPalette::from_tags(&[tag("cat", "orange")]);
        assert!(matches!(
            result,
            Err(ExportError::Mask(MaskError::InvalidColor { .. }))
        ));
    }

    #[test]
    fn test_too_many_tags_rejected() {
        let tags: Vec<_> = (0..256).map(|i| tag(&format!("t{i}"), "#000000")).collect();
        assert!(MaskPalette::from_tags(&tags).is_err());
    }
}
