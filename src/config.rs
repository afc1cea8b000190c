use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

/// Encoded image format requested from the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg,
    #[default]
    Webp,
    Avif,
}

impl OutputFormat {
    /// Parse a format name; `None` for anything unrecognized, which the
    /// resolver maps to the default format rather than an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "webp" => Some(OutputFormat::Webp),
            "avif" => Some(OutputFormat::Avif),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Webp => "webp",
            OutputFormat::Avif => "avif",
        };
        f.write_str(name)
    }
}

/// Where font bytes for the rasterizer come from.
///
/// Variant order matters: untagged deserialization tries `Default` (null)
/// first, then a source string, then raw bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSetting {
    /// Use the rasterizer's bundled monospace font.
    Default,
    /// URL (`http://`/`https://`) or filesystem path to a font file.
    Source(String),
    /// Raw font bytes supplied by the caller.
    Bytes(Vec<u8>),
}

/// Canvas background: an explicit color, or derived from the theme.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Auto,
    Color(String),
}

/// A canvas dimension: explicit pixels, or auto-computed from code geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Auto,
    Px(f32),
}

impl Dimension {
    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }
}

/// Parse a numeric override arriving as a string (CLI and HTTP paths deliver
/// numbers as text). Unparseable or non-finite input means "use the default".
pub fn lenient_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a boolean flag arriving as a string. Only the exact words `true` and
/// `false` count; anything else is treated as absent, so a stray `"false"`
/// can never enable a flag through truthiness.
pub fn lenient_flag(text: &str) -> Option<bool> {
    match text.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn de_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) if n.is_finite() => Some(n),
        Some(Raw::Text(s)) => lenient_number(&s),
        _ => None,
    })
}

fn de_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Flag(b)) => Some(b),
        Some(Raw::Text(s)) => lenient_flag(&s),
        None => None,
    })
}

/// Sparse user configuration: every field individually optional. Field names
/// follow the wire format consumed by the HTTP and CLI entry points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSetting>,
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub font_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    /// Background color; `0`, `"null"` and empty string are the documented
    /// "derive from theme" sentinels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    /// `0` and `"null"` mean auto-compute.
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// `0` and `"null"` mean auto-compute.
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    // Nested groups last: TOML needs scalar values emitted before tables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<PartialStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_numbers: Option<PartialLineNumbers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<PartialHighlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialStyle {
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialLineNumbers {
    #[serde(deserialize_with = "de_flag", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub start_from: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialHighlight {
    #[serde(deserialize_with = "de_flag", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub at: Option<f64>,
    #[serde(deserialize_with = "de_number", skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl PartialConfig {
    /// Layer `over` on top of `self`, field by field. Used to stack CLI flags
    /// over config-file values before resolution.
    pub fn overlay(self, over: PartialConfig) -> PartialConfig {
        PartialConfig {
            lang: over.lang.or(self.lang),
            theme: over.theme.or(self.theme),
            font: over.font.or(self.font),
            font_ratio: over.font_ratio.or(self.font_ratio),
            format: over.format.or(self.format),
            quality: over.quality.or(self.quality),
            bg: over.bg.or(self.bg),
            gap: over.gap.or(self.gap),
            style: match (self.style, over.style) {
                (Some(base), Some(over)) => Some(PartialStyle {
                    padding: over.padding.or(base.padding),
                    border_radius: over.border_radius.or(base.border_radius),
                }),
                (base, over) => over.or(base),
            },
            line_numbers: match (self.line_numbers, over.line_numbers) {
                (Some(base), Some(over)) => Some(PartialLineNumbers {
                    enabled: over.enabled.or(base.enabled),
                    start_from: over.start_from.or(base.start_from),
                    color: over.color.or(base.color),
                    margin_right: over.margin_right.or(base.margin_right),
                }),
                (base, over) => over.or(base),
            },
            highlight: match (self.highlight, over.highlight) {
                (Some(base), Some(over)) => Some(PartialHighlight {
                    enabled: over.enabled.or(base.enabled),
                    background_color: over.background_color.or(base.background_color),
                    border_radius: over.border_radius.or(base.border_radius),
                    at: over.at.or(base.at),
                    depth: over.depth.or(base.depth),
                }),
                (base, over) => over.or(base),
            },
            width: over.width.or(self.width),
            height: over.height.or(self.height),
        }
    }

    /// Load a partial configuration from a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| miette::miette!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| miette::miette!("Failed to parse config file: {}", e))
    }

    /// Save a partial configuration to a TOML file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> miette::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| miette::miette!("Failed to serialize config: {}", e))?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| miette::miette!("Failed to write config file: {}", e))?;

        Ok(())
    }

    /// Default config file path.
    pub fn default_config_path() -> std::path::PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("codeshot").join("config.toml")
        } else {
            std::path::PathBuf::from(".codeshot.toml")
        }
    }
}

/// Visual style of the outer frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub padding: f32,
    pub border_radius: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            padding: 25.0,
            border_radius: 8.0,
        }
    }
}

/// Line number gutter settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LineNumbersConfig {
    pub enabled: bool,
    pub start_from: u32,
    pub color: String,
    pub margin_right: f32,
}

impl Default for LineNumbersConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            start_from: 1,
            color: "#7b7f8b".to_string(),
            margin_right: 16.0,
        }
    }
}

/// Single-line highlight settings.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightConfig {
    pub enabled: bool,
    pub background: String,
    pub border_radius: f32,
    /// 1-based line to highlight.
    pub at: u32,
    /// Drop-shadow depth; `0` disables the shadow.
    pub depth: f32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            background: "#ffffff22".to_string(),
            border_radius: 4.0,
            at: 1,
            depth: 0.0,
        }
    }
}

/// Fully-populated configuration, produced once per conversion and immutable
/// afterwards. Every field is defined; nothing optional survives resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub language: String,
    pub theme: String,
    pub font: FontSetting,
    pub font_ratio: f32,
    pub format: OutputFormat,
    /// Encoder quality, clamped to 1-100.
    pub quality: u8,
    pub background: Background,
    /// Line spacing multiplier.
    pub gap: f32,
    pub style: StyleConfig,
    pub line_numbers: LineNumbersConfig,
    pub highlight: HighlightConfig,
    pub width: Dimension,
    pub height: Dimension,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            language: "js".to_string(),
            theme: "dracula".to_string(),
            font: FontSetting::Default,
            font_ratio: 1.0,
            format: OutputFormat::default(),
            quality: 100,
            background: Background::Auto,
            gap: 1.0,
            style: StyleConfig::default(),
            line_numbers: LineNumbersConfig::default(),
            highlight: HighlightConfig::default(),
            width: Dimension::Auto,
            height: Dimension::Auto,
        }
    }
}

impl ResolvedConfig {
    /// Re-sparsify into a partial whose resolution reproduces `self` exactly.
    /// Sentinel-valued fields (auto background, auto dimensions, default
    /// font) map back to absent.
    pub fn as_partial(&self) -> PartialConfig {
        PartialConfig {
            lang: Some(self.language.clone()),
            theme: Some(self.theme.clone()),
            font: match &self.font {
                FontSetting::Default => None,
                other => Some(other.clone()),
            },
            font_ratio: Some(f64::from(self.font_ratio)),
            format: Some(self.format.to_string()),
            quality: Some(f64::from(self.quality)),
            bg: match &self.background {
                Background::Auto => None,
                Background::Color(color) => Some(color.clone()),
            },
            gap: Some(f64::from(self.gap)),
            style: Some(PartialStyle {
                padding: Some(f64::from(self.style.padding)),
                border_radius: Some(f64::from(self.style.border_radius)),
            }),
            line_numbers: Some(PartialLineNumbers {
                enabled: Some(self.line_numbers.enabled),
                start_from: Some(f64::from(self.line_numbers.start_from)),
                color: Some(self.line_numbers.color.clone()),
                margin_right: Some(f64::from(self.line_numbers.margin_right)),
            }),
            highlight: Some(PartialHighlight {
                enabled: Some(self.highlight.enabled),
                background_color: Some(self.highlight.background.clone()),
                border_radius: Some(f64::from(self.highlight.border_radius)),
                at: Some(f64::from(self.highlight.at)),
                depth: Some(f64::from(self.highlight.depth)),
            }),
            width: match self.width {
                Dimension::Auto => None,
                Dimension::Px(v) => Some(f64::from(v)),
            },
            height: match self.height {
                Dimension::Auto => None,
                Dimension::Px(v) => Some(f64::from(v)),
            },
        }
    }
}

/// Merge a sparse configuration over the defaults, field by field. Nested
/// groups resolve independently: a partial `style` never blanks out
/// `line_numbers` or `highlight`, and within a group each field falls back on
/// its own.
pub fn resolve(partial: &PartialConfig) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    ResolvedConfig {
        language: partial.lang.clone().unwrap_or(defaults.language),
        theme: partial.theme.clone().unwrap_or(defaults.theme),
        font: partial.font.clone().unwrap_or(FontSetting::Default),
        font_ratio: partial
            .font_ratio
            .map(|v| v as f32)
            .unwrap_or(defaults.font_ratio),
        format: partial
            .format
            .as_deref()
            .and_then(OutputFormat::from_name)
            .unwrap_or_default(),
        quality: partial
            .quality
            .map(|q| q.round().clamp(1.0, 100.0) as u8)
            .unwrap_or(defaults.quality),
        background: match partial.bg.as_deref().map(str::trim) {
            None | Some("") | Some("0") | Some("null") => Background::Auto,
            Some(color) => Background::Color(color.to_string()),
        },
        gap: partial.gap.map(|v| v as f32).unwrap_or(defaults.gap),
        style: resolve_style(partial.style.as_ref()),
        line_numbers: resolve_line_numbers(partial.line_numbers.as_ref()),
        highlight: resolve_highlight(partial.highlight.as_ref()),
        width: resolve_dimension(partial.width),
        height: resolve_dimension(partial.height),
    }
}

fn resolve_style(partial: Option<&PartialStyle>) -> StyleConfig {
    let defaults = StyleConfig::default();
    let Some(partial) = partial else {
        return defaults;
    };

    StyleConfig {
        padding: partial.padding.map(|v| v as f32).unwrap_or(defaults.padding),
        border_radius: partial
            .border_radius
            .map(|v| v as f32)
            .unwrap_or(defaults.border_radius),
    }
}

fn resolve_line_numbers(partial: Option<&PartialLineNumbers>) -> LineNumbersConfig {
    let defaults = LineNumbersConfig::default();
    let Some(partial) = partial else {
        return defaults;
    };

    LineNumbersConfig {
        enabled: partial.enabled.unwrap_or(defaults.enabled),
        start_from: partial
            .start_from
            .map(|v| v.max(0.0).round() as u32)
            .unwrap_or(defaults.start_from),
        color: partial.color.clone().unwrap_or(defaults.color),
        margin_right: partial
            .margin_right
            .map(|v| v as f32)
            .unwrap_or(defaults.margin_right),
    }
}

fn resolve_highlight(partial: Option<&PartialHighlight>) -> HighlightConfig {
    let defaults = HighlightConfig::default();
    let Some(partial) = partial else {
        return defaults;
    };

    HighlightConfig {
        enabled: partial.enabled.unwrap_or(defaults.enabled),
        background: partial
            .background_color
            .clone()
            .unwrap_or(defaults.background),
        border_radius: partial
            .border_radius
            .map(|v| v as f32)
            .unwrap_or(defaults.border_radius),
        at: partial
            .at
            .map(|v| v.max(0.0).round() as u32)
            .unwrap_or(defaults.at),
        depth: partial.depth.map(|v| v as f32).unwrap_or(defaults.depth),
    }
}

fn resolve_dimension(value: Option<f64>) -> Dimension {
    match value {
        // 0 is the documented auto sentinel for dimensions, unlike ordinary
        // numeric fields where 0 is a valid override.
        Some(v) if v != 0.0 => Dimension::Px(v as f32),
        _ => Dimension::Auto,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = resolve(&PartialConfig::default());
        assert_eq!(config.language, "js");
        assert_eq!(config.theme, "dracula");
        assert_eq!(config.format, OutputFormat::Webp);
        assert_eq!(config.quality, 100);
        assert_eq!(config.style.padding, 25.0);
        assert_eq!(config.style.border_radius, 8.0);
        assert!(!config.line_numbers.enabled);
        assert_eq!(config.line_numbers.start_from, 1);
        assert!(config.width.is_auto());
        assert!(config.height.is_auto());
        assert_eq!(config.background, Background::Auto);
    }

    #[test]
    fn test_partial_style_keeps_sibling_defaults() {
        let partial = PartialConfig {
            style: Some(PartialStyle {
                padding: Some(40.0),
                border_radius: None,
            }),
            ..Default::default()
        };

        let config = resolve(&partial);
        assert_eq!(config.style.padding, 40.0);
        // An overridden padding must not blank out its siblings.
        assert_eq!(config.style.border_radius, 8.0);
        assert_eq!(config.line_numbers, LineNumbersConfig::default());
        assert_eq!(config.highlight, HighlightConfig::default());
    }

    #[test]
    fn test_numeric_strings_parse_leniently() {
        let partial: PartialConfig =
            serde_json::from_str(r#"{"quality": "85", "gap": "oops", "fontRatio": "1.25"}"#)
                .unwrap();

        assert_eq!(partial.quality, Some(85.0));
        assert_eq!(partial.gap, None);
        assert_eq!(partial.font_ratio, Some(1.25));

        let config = resolve(&partial);
        assert_eq!(config.quality, 85);
        assert_eq!(config.gap, 1.0);
        assert_eq!(config.font_ratio, 1.25);
    }

    #[test]
    fn test_string_false_never_enables() {
        let partial: PartialConfig =
            serde_json::from_str(r#"{"lineNumbers": {"enabled": "false"}}"#).unwrap();
        assert_eq!(
            partial.line_numbers.as_ref().unwrap().enabled,
            Some(false)
        );
        assert!(!resolve(&partial).line_numbers.enabled);

        // Unrecognized flag text is treated as absent, not truthy.
        let partial: PartialConfig =
            serde_json::from_str(r#"{"highlight": {"enabled": "yes"}}"#).unwrap();
        assert_eq!(partial.highlight.as_ref().unwrap().enabled, None);
        assert!(!resolve(&partial).highlight.enabled);
    }

    #[test]
    fn test_zero_and_null_are_auto_sentinels() {
        let partial: PartialConfig =
            serde_json::from_str(r#"{"width": 0, "height": "null", "bg": "0"}"#).unwrap();

        let config = resolve(&partial);
        assert!(config.width.is_auto());
        assert!(config.height.is_auto());
        assert_eq!(config.background, Background::Auto);
    }

    #[test]
    fn test_zero_is_a_valid_numeric_override() {
        let partial: PartialConfig =
            serde_json::from_str(r#"{"gap": 0, "style": {"padding": 0}}"#).unwrap();

        let config = resolve(&partial);
        assert_eq!(config.gap, 0.0);
        assert_eq!(config.style.padding, 0.0);
    }

    #[test]
    fn test_unknown_format_falls_back() {
        let partial = PartialConfig {
            format: Some("bmp".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&partial).format, OutputFormat::Webp);

        let partial = PartialConfig {
            format: Some("JPG".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&partial).format, OutputFormat::Jpeg);
    }

    #[test]
    fn test_quality_clamps() {
        let partial = PartialConfig {
            quality: Some(250.0),
            ..Default::default()
        };
        assert_eq!(resolve(&partial).quality, 100);

        let partial = PartialConfig {
            quality: Some(0.0),
            ..Default::default()
        };
        assert_eq!(resolve(&partial).quality, 1);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let partial = PartialConfig {
            theme: Some("base16-ocean.dark".to_string()),
            bg: Some("#101010".to_string()),
            width: Some(800.0),
            style: Some(PartialStyle {
                padding: Some(32.0),
                border_radius: None,
            }),
            highlight: Some(PartialHighlight {
                enabled: Some(true),
                at: Some(3.0),
                ..Default::default()
            }),
            ..Default::default()
        };

        let resolved = resolve(&partial);
        let round_tripped = resolve(&resolved.as_partial());
        assert_eq!(round_tripped, resolved);

        // And the defaults round-trip too.
        let defaults = resolve(&PartialConfig::default());
        assert_eq!(resolve(&defaults.as_partial()), defaults);
    }

    #[test]
    fn test_overlay_prefers_upper_layer_per_field() {
        let file = PartialConfig {
            theme: Some("base16-ocean.dark".to_string()),
            gap: Some(2.0),
            line_numbers: Some(PartialLineNumbers {
                enabled: Some(true),
                color: Some("#444444".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let flags = PartialConfig {
            gap: Some(1.5),
            line_numbers: Some(PartialLineNumbers {
                start_from: Some(10.0),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = file.overlay(flags);
        assert_eq!(merged.theme.as_deref(), Some("base16-ocean.dark"));
        assert_eq!(merged.gap, Some(1.5));

        let numbers = merged.line_numbers.unwrap();
        assert_eq!(numbers.enabled, Some(true));
        assert_eq!(numbers.color.as_deref(), Some("#444444"));
        assert_eq!(numbers.start_from, Some(10.0));
    }

    #[test]
    fn test_font_setting_shapes() {
        let partial: PartialConfig =
            serde_json::from_str(r#"{"font": "https://example.com/mono.woff2"}"#).unwrap();
        assert_eq!(
            partial.font,
            Some(FontSetting::Source(
                "https://example.com/mono.woff2".to_string()
            ))
        );

        let partial: PartialConfig = serde_json::from_str(r#"{"font": [0, 1, 2]}"#).unwrap();
        assert_eq!(partial.font, Some(FontSetting::Bytes(vec![0, 1, 2])));
    }

    #[test]
    fn test_toml_config_file_shape() {
        let partial: PartialConfig = toml::from_str(
            r#"
            theme = "dracula"
            gap = "1.5"

            [lineNumbers]
            enabled = true
            startFrom = 20
            "#,
        )
        .unwrap();

        assert_eq!(partial.theme.as_deref(), Some("dracula"));
        assert_eq!(partial.gap, Some(1.5));

        let config = resolve(&partial);
        assert!(config.line_numbers.enabled);
        assert_eq!(config.line_numbers.start_from, 20);
    }
}
