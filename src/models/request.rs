//! The flat stylization request record (spec §6) and the tagged variants
//! that replace the source's string-keyed dispatch (spec §9 "Dynamic
//! string-keyed dispatch -> tagged variant").

use std::collections::HashMap;

/// Drawing medium. Unknown tags fall back to `Pencil` (spec §4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtStyle {
    Pencil,
    Ink,
    Marker,
    Pen,
    Pastel,
}

impl ArtStyle {
    pub fn parse(s: &str) -> Self {
        match s {
            "ink" => ArtStyle::Ink,
            "marker" => ArtStyle::Marker,
            "pen" => ArtStyle::Pen,
            "pastel" => ArtStyle::Pastel,
            _ => ArtStyle::Pencil,
        }
    }
}

/// Brush texture overlay (spec §4.5). Unknown tags fall back to `Line`
/// (pass-through, no overlay).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushTag {
    Line,
    Hatch,
    Crosshatch,
    Charcoal,
    InkWash,
}

impl BrushTag {
    pub fn parse(s: &str) -> Self {
        match s {
            "hatch" => BrushTag::Hatch,
            "crosshatch" => BrushTag::Crosshatch,
            "charcoal" => BrushTag::Charcoal,
            "inkwash" => BrushTag::InkWash,
            _ => BrushTag::Line,
        }
    }
}

/// Style kernel selector (spec §4.2). `Fallback` is the "unknown tag"
/// behavior (renders as an inverted edge map) and is also what the
/// documented default `style=line` resolves to, since `line` is not
/// itself a kernel tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Stippling,
    Charcoal,
    DryBrush,
    InkWash,
    Comic,
    Fashion,
    Urban,
    Architectural,
    Academic,
    Etching,
    Minimalist,
    Glitch,
    MixedMedia,
    Contour,
    BlindContour,
    Gesture,
    Cartoon,
    Hatching,
    Crosshatching,
    TonalPencil,
    Fallback,
}

impl StyleTag {
    pub fn parse(s: &str) -> Self {
        match s {
            "stippling" => StyleTag::Stippling,
            "charcoal" => StyleTag::Charcoal,
            "drybrush" => StyleTag::DryBrush,
            "inkwash" => StyleTag::InkWash,
            "comic" => StyleTag::Comic,
            "fashion" => StyleTag::Fashion,
            "urban" => StyleTag::Urban,
            "architectural" => StyleTag::Architectural,
            "academic" => StyleTag::Academic,
            "etching" => StyleTag::Etching,
            "minimalist" => StyleTag::Minimalist,
            "glitch" => StyleTag::Glitch,
            "mixedmedia" => StyleTag::MixedMedia,
            "contour" => StyleTag::Contour,
            "blindcontour" => StyleTag::BlindContour,
            "gesture" => StyleTag::Gesture,
            "cartoon" => StyleTag::Cartoon,
            "hatching" => StyleTag::Hatching,
            "crosshatching" => StyleTag::Crosshatching,
            "tonalpencil" => StyleTag::TonalPencil,
            _ => StyleTag::Fallback,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Stippling => "stippling",
            StyleTag::Charcoal => "charcoal",
            StyleTag::DryBrush => "drybrush",
            StyleTag::InkWash => "inkwash",
            StyleTag::Comic => "comic",
            StyleTag::Fashion => "fashion",
            StyleTag::Urban => "urban",
            StyleTag::Architectural => "architectural",
            StyleTag::Academic => "academic",
            StyleTag::Etching => "etching",
            StyleTag::Minimalist => "minimalist",
            StyleTag::Glitch => "glitch",
            StyleTag::MixedMedia => "mixedmedia",
            StyleTag::Contour => "contour",
            StyleTag::BlindContour => "blindcontour",
            StyleTag::Gesture => "gesture",
            StyleTag::Cartoon => "cartoon",
            StyleTag::Hatching => "hatching",
            StyleTag::Crosshatching => "crosshatching",
            StyleTag::TonalPencil => "tonalpencil",
            StyleTag::Fallback => "line",
        }
    }

    /// Exhaustive list of recognized style tags, in spec §4.2 table order.
    /// `Fallback` is excluded — it isn't a style a caller asks for, it's
    /// what an unrecognized `style` resolves to.
    pub const ALL: &'static [StyleTag] = &[
        StyleTag::Stippling,
        StyleTag::Charcoal,
        StyleTag::DryBrush,
        StyleTag::InkWash,
        StyleTag::Comic,
        StyleTag::Fashion,
        StyleTag::Urban,
        StyleTag::Architectural,
        StyleTag::Academic,
        StyleTag::Etching,
        StyleTag::Minimalist,
        StyleTag::Glitch,
        StyleTag::MixedMedia,
        StyleTag::Contour,
        StyleTag::BlindContour,
        StyleTag::Gesture,
        StyleTag::Cartoon,
        StyleTag::Hatching,
        StyleTag::Crosshatching,
        StyleTag::TonalPencil,
    ];

    /// Whether this kernel consumes the PRNG stream (spec §8 "Seed
    /// sensitivity" / "Seed insensitivity").
    pub fn is_randomized(&self) -> bool {
        matches!(
            self,
            StyleTag::Stippling
                | StyleTag::Charcoal
                | StyleTag::DryBrush
                | StyleTag::Comic
                | StyleTag::Fashion
                | StyleTag::MixedMedia
                | StyleTag::BlindContour
                | StyleTag::Glitch
        )
    }
}

/// The flat, immutable per-request configuration record (spec §3 "Config").
#[derive(Debug, Clone)]
pub struct StylizeConfig {
    pub art_style: ArtStyle,
    pub style: StyleTag,
    pub brush: BrushTag,
    pub stroke: u32,
    pub intensity: u32,
    pub smoothing: u32,
    pub seed: u64,
    /// Reserved; consumed but currently inert (spec §6, §9 open question).
    pub skip_hatching: bool,
    pub colorize: bool,
    pub invert: bool,
    pub contrast: i32,
    pub saturation: i32,
    pub hue_shift: i32,
    pub resolution: Option<u32>,
    pub aspect: Option<(u32, u32)>,
}

impl Default for StylizeConfig {
    fn default() -> Self {
        Self {
            art_style: ArtStyle::Pencil,
            style: StyleTag::Fallback,
            brush: BrushTag::Line,
            stroke: 1,
            intensity: 6,
            smoothing: 0,
            seed: 0,
            skip_hatching: false,
            colorize: false,
            invert: false,
            contrast: 0,
            saturation: 0,
            hue_shift: 0,
            resolution: None,
            aspect: None,
        }
    }
}

fn parse_or_default<T: std::str::FromStr>(fields: &HashMap<String, String>, key: &str, default: T) -> T {
    fields
        .get(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_bool(fields: &HashMap<String, String>, key: &str, default: bool) -> bool {
    fields
        .get(key)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

impl StylizeConfig {
    /// Build a config from a flat string map (the HTTP form-field view).
    /// Per spec §7, integer/bool fields never hard-fail: an unparseable
    /// value silently falls back to its default.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let defaults = Self::default();

        let art_style = fields
            .get("artStyle")
            .map(|v| ArtStyle::parse(v.trim()))
            .unwrap_or(defaults.art_style);
        let style = fields
            .get("style")
            .map(|v| StyleTag::parse(v.trim()))
            .unwrap_or(defaults.style);
        let brush = fields
            .get("brush")
            .map(|v| BrushTag::parse(v.trim()))
            .unwrap_or(defaults.brush);

        let stroke = parse_or_default(fields, "stroke", defaults.stroke).clamp(1, 10);
        let intensity = parse_or_default(fields, "intensity", defaults.intensity).clamp(1, 10);
        let smoothing = parse_or_default(fields, "smoothing", defaults.smoothing);
        let seed = parse_or_default(fields, "seed", defaults.seed);
        let skip_hatching = parse_bool(fields, "skipHatching", defaults.skip_hatching);
        let colorize = parse_bool(fields, "colorize", defaults.colorize);
        let invert = parse_bool(fields, "invert", defaults.invert);
        let contrast = parse_or_default(fields, "contrast", defaults.contrast).clamp(-100, 100);
        let saturation = parse_or_default(fields, "saturation", defaults.saturation).clamp(-100, 100);
        let hue_shift = parse_or_default(fields, "hueShift", defaults.hue_shift);

        let resolution = fields
            .get("resolution")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .or(if fields.contains_key("resolution") {
                Some(1024)
            } else {
                None
            });

        let aspect = fields.get("aspect").map(|v| parse_aspect(v)).or({
            if resolution.is_some() {
                Some((1, 1))
            } else {
                None
            }
        });

        Self {
            art_style,
            style,
            brush,
            stroke,
            intensity,
            smoothing,
            seed,
            skip_hatching,
            colorize,
            invert,
            contrast,
            saturation,
            hue_shift,
            resolution,
            aspect,
        }
    }
}

fn parse_aspect(s: &str) -> (u32, u32) {
    s.split_once(':')
        .and_then(|(w, h)| Some((w.trim().parse().ok()?, h.trim().parse().ok()?)))
        .filter(|&(w, h): &(u32, u32)| w > 0 && h > 0)
        .unwrap_or((1, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_with_no_fields() {
        let cfg = StylizeConfig::from_fields(&HashMap::new());
        assert_eq!(cfg.art_style, ArtStyle::Pencil);
        assert_eq!(cfg.style, StyleTag::Fallback);
        assert_eq!(cfg.stroke, 1);
        assert_eq!(cfg.intensity, 6);
        assert_eq!(cfg.resolution, None);
    }

    #[test]
    fn unparseable_integer_falls_back_to_default() {
        let mut fields = HashMap::new();
        fields.insert("stroke".to_string(), "not-a-number".to_string());
        let cfg = StylizeConfig::from_fields(&fields);
        assert_eq!(cfg.stroke, 1);
    }

    #[test]
    fn unknown_style_tag_maps_to_fallback() {
        let mut fields = HashMap::new();
        fields.insert("style".to_string(), "not-a-real-style".to_string());
        let cfg = StylizeConfig::from_fields(&fields);
        assert_eq!(cfg.style, StyleTag::Fallback);
    }

    #[test]
    fn unknown_medium_falls_back_to_pencil() {
        let mut fields = HashMap::new();
        fields.insert("artStyle".to_string(), "crayon".to_string());
        let cfg = StylizeConfig::from_fields(&fields);
        assert_eq!(cfg.art_style, ArtStyle::Pencil);
    }

    #[test]
    fn stroke_and_intensity_are_clamped() {
        let mut fields = HashMap::new();
        fields.insert("stroke".to_string(), "50".to_string());
        fields.insert("intensity".to_string(), "0".to_string());
        let cfg = StylizeConfig::from_fields(&fields);
        assert_eq!(cfg.stroke, 10);
        assert_eq!(cfg.intensity, 1);
    }

    #[test]
    fn resolution_with_default_aspect() {
        let mut fields = HashMap::new();
        fields.insert("resolution".to_string(), "800".to_string());
        let cfg = StylizeConfig::from_fields(&fields);
        assert_eq!(cfg.resolution, Some(800));
        assert_eq!(cfg.aspect, Some((1, 1)));
    }

    #[test]
    fn aspect_parses_w_colon_h() {
        assert_eq!(parse_aspect("16:9"), (16, 9));
        assert_eq!(parse_aspect("garbage"), (1, 1));
        assert_eq!(parse_aspect("4:0"), (1, 1));
    }

    #[test]
    fn all_style_tags_round_trip_through_as_str() {
        for tag in StyleTag::ALL {
            assert_eq!(StyleTag::parse(tag.as_str()), *tag);
        }
    }
}
