use crate::cache::LookupCaches;
use crate::config::{Background, ResolvedConfig};
use crate::document::{BoxStyle, DocumentNode, FlexDirection, TextStyle, Unit};
use crate::highlight::{TokenLine, TokenizedCode};

/// Half the nominal character width. Whitespace runs become spacer boxes of
/// `SPACER_RATIO * run width` character units, because the rasterizer cannot
/// measure blank glyphs; the ratio is calibrated against the reference
/// monospace font.
const SPACER_RATIO: f32 = 0.5;

/// Extra line units added to every line's minimum height as breathing room.
const LINE_BREATHING_ROOM: f32 = 0.5;

/// Arrange tokenized lines into the box tree handed to the rasterizer.
///
/// The root is a column container holding one row container per source line;
/// each row holds an optional line-number text, then one node per token run.
/// Empty input still produces one (empty) line container; the tree is never
/// childless at the root.
pub fn build(
    tokens: &TokenizedCode,
    config: &ResolvedConfig,
    caches: &LookupCaches,
) -> DocumentNode {
    let background = match &config.background {
        Background::Auto => tokens.background.clone(),
        Background::Color(color) => color.clone(),
    };

    let line_count = tokens.lines.len().max(1);
    // Reserve a fixed-width column wide enough for the last displayed number,
    // so numbers align regardless of digit count.
    let number_columns = digits(u64::from(config.line_numbers.start_from) + line_count as u64 - 1);

    let empty_line = TokenLine::default();
    let lines: Vec<DocumentNode> = if tokens.lines.is_empty() {
        vec![build_line(0, &empty_line, config, number_columns, caches)]
    } else {
        tokens
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| build_line(index, line, config, number_columns, caches))
            .collect()
    };

    DocumentNode::container(
        BoxStyle {
            direction: Some(FlexDirection::Column),
            width: Some(Unit::Percent(100.0)),
            height: Some(Unit::Percent(100.0)),
            padding: Some(config.style.padding),
            background: Some(background),
            foreground: Some(tokens.foreground.clone()),
            border_radius: Some(config.style.border_radius),
            font_ratio: Some(config.font_ratio),
            ..Default::default()
        },
        lines,
    )
}

fn build_line(
    index: usize,
    line: &TokenLine,
    config: &ResolvedConfig,
    number_columns: u32,
    caches: &LookupCaches,
) -> DocumentNode {
    let display_number = index as u32 + 1;

    let mut style = BoxStyle {
        direction: Some(FlexDirection::Row),
        min_height: Some(Unit::Lh(config.gap + LINE_BREATHING_ROOM)),
        ..Default::default()
    };

    if config.highlight.enabled && display_number == config.highlight.at {
        style.background = Some(config.highlight.background.clone());
        style.border_radius = Some(config.highlight.border_radius);
        if config.highlight.depth > 0.0 {
            style.shadow_depth = Some(config.highlight.depth);
        }
    }

    let mut children = Vec::with_capacity(line.runs.len() + 1);

    if config.line_numbers.enabled {
        children.push(DocumentNode::text(
            (config.line_numbers.start_from + index as u32).to_string(),
            TextStyle {
                color: Some(config.line_numbers.color.clone()),
                width: Some(Unit::Ch(number_columns as f32)),
                margin_right: Some(Unit::Px(config.line_numbers.margin_right)),
            },
        ));
    }

    for run in &line.runs {
        if run.text.is_empty() {
            continue;
        }

        if run.text.trim().is_empty() {
            children.push(DocumentNode::container(
                BoxStyle {
                    width: Some(Unit::Ch(SPACER_RATIO * caches.width_of(&run.text))),
                    height: Some(Unit::Px(0.0)),
                    ..Default::default()
                },
                vec![],
            ));
        } else {
            children.push(DocumentNode::text(
                run.text.clone(),
                TextStyle {
                    color: Some(run.foreground.clone()),
                    ..Default::default()
                },
            ));
        }
    }

    DocumentNode::container(style, children)
}

fn digits(number: u64) -> u32 {
    if number == 0 { 1 } else { number.ilog10() + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        PartialConfig, PartialHighlight, PartialLineNumbers, resolve,
    };
    use crate::highlight::TokenRun;

    fn run(text: &str) -> TokenRun {
        TokenRun {
            text: text.to_string(),
            foreground: "#8be9fd".to_string(),
        }
    }

    fn tokenized(lines: Vec<Vec<TokenRun>>) -> TokenizedCode {
        TokenizedCode {
            lines: lines.into_iter().map(|runs| TokenLine { runs }).collect(),
            foreground: "#f8f8f2".to_string(),
            background: "#282a36".to_string(),
        }
    }

    #[test]
    fn test_empty_code_yields_one_empty_line() {
        let caches = LookupCaches::new();
        let config = resolve(&PartialConfig::default());

        let tree = build(&tokenized(vec![]), &config, &caches);
        let (_, lines) = tree.as_container().unwrap();
        assert_eq!(lines.len(), 1);

        let (_, children) = lines[0].as_container().unwrap();
        assert!(children.is_empty());
    }

    #[test]
    fn test_root_takes_theme_colors_unless_overridden() {
        let caches = LookupCaches::new();

        let config = resolve(&PartialConfig::default());
        let tree = build(&tokenized(vec![vec![run("x")]]), &config, &caches);
        let (style, _) = tree.as_container().unwrap();
        assert_eq!(style.background.as_deref(), Some("#282a36"));
        assert_eq!(style.foreground.as_deref(), Some("#f8f8f2"));
        assert_eq!(style.direction, Some(FlexDirection::Column));
        assert_eq!(style.padding, Some(25.0));

        let config = resolve(&PartialConfig {
            bg: Some("#123456".to_string()),
            ..Default::default()
        });
        let tree = build(&tokenized(vec![vec![run("x")]]), &config, &caches);
        let (style, _) = tree.as_container().unwrap();
        assert_eq!(style.background.as_deref(), Some("#123456"));
    }

    #[test]
    fn test_line_min_height_follows_gap() {
        let caches = LookupCaches::new();
        let config = resolve(&PartialConfig {
            gap: Some(2.0),
            ..Default::default()
        });

        let tree = build(&tokenized(vec![vec![run("x")]]), &config, &caches);
        let (_, lines) = tree.as_container().unwrap();
        let (style, _) = lines[0].as_container().unwrap();
        assert_eq!(style.min_height, Some(Unit::Lh(2.5)));
    }

    #[test]
    fn test_whitespace_run_becomes_half_width_spacer() {
        let caches = LookupCaches::new();
        let config = resolve(&PartialConfig::default());

        let tree = build(
            &tokenized(vec![vec![run("if"), run("    "), run("x")]]),
            &config,
            &caches,
        );
        let (_, lines) = tree.as_container().unwrap();
        let (_, children) = lines[0].as_container().unwrap();
        assert_eq!(children.len(), 3);

        assert!(children[1].is_spacer());
        let (style, _) = children[1].as_container().unwrap();
        assert_eq!(style.width, Some(Unit::Ch(2.0)));
        assert_eq!(style.height, Some(Unit::Px(0.0)));
    }

    #[test]
    fn test_token_text_keeps_reported_foreground() {
        let caches = LookupCaches::new();
        let config = resolve(&PartialConfig::default());

        let tree = build(&tokenized(vec![vec![run("const")]]), &config, &caches);
        let (_, lines) = tree.as_container().unwrap();
        let (_, children) = lines[0].as_container().unwrap();

        let (content, style) = children[0].as_text().unwrap();
        assert_eq!(content, "const");
        assert_eq!(style.color.as_deref(), Some("#8be9fd"));
    }

    #[test]
    fn test_line_numbers_render_from_start() {
        let caches = LookupCaches::new();
        let config = resolve(&PartialConfig {
            line_numbers: Some(PartialLineNumbers {
                enabled: Some(true),
                start_from: Some(5.0),
                ..Default::default()
            }),
            ..Default::default()
        });

        let tree = build(
            &tokenized(vec![vec![run("a")], vec![run("b")]]),
            &config,
            &caches,
        );
        let (_, lines) = tree.as_container().unwrap();

        let (_, second_line) = lines[1].as_container().unwrap();
        let (content, style) = second_line[0].as_text().unwrap();
        assert_eq!(content, "6");
        assert_eq!(style.color.as_deref(), Some("#7b7f8b"));
        assert_eq!(style.margin_right, Some(Unit::Px(16.0)));
    }

    #[test]
    fn test_number_column_width_fits_last_number() {
        let caches = LookupCaches::new();
        let config = resolve(&PartialConfig {
            line_numbers: Some(PartialLineNumbers {
                enabled: Some(true),
                start_from: Some(98.0),
                ..Default::default()
            }),
            ..Default::default()
        });

        // Lines 98..=102: the reserved column must fit three digits on every
        // line, including the two-digit ones.
        let lines: Vec<Vec<TokenRun>> = (0..5).map(|_| vec![run("x")]).collect();
        let tree = build(&tokenized(lines), &config, &caches);
        let (_, lines) = tree.as_container().unwrap();

        for line in lines {
            let (_, children) = line.as_container().unwrap();
            let (_, style) = children[0].as_text().unwrap();
            assert_eq!(style.width, Some(Unit::Ch(3.0)));
        }
    }

    #[test]
    fn test_highlighted_line_gets_background_and_depth() {
        let caches = LookupCaches::new();
        let config = resolve(&PartialConfig {
            highlight: Some(PartialHighlight {
                enabled: Some(true),
                at: Some(2.0),
                depth: Some(3.0),
                ..Default::default()
            }),
            ..Default::default()
        });

        let tree = build(
            &tokenized(vec![vec![run("a")], vec![run("b")], vec![run("c")]]),
            &config,
            &caches,
        );
        let (_, lines) = tree.as_container().unwrap();

        let (first, _) = lines[0].as_container().unwrap();
        assert!(first.background.is_none());

        let (second, _) = lines[1].as_container().unwrap();
        assert_eq!(second.background.as_deref(), Some("#ffffff22"));
        assert_eq!(second.border_radius, Some(4.0));
        assert_eq!(second.shadow_depth, Some(3.0));

        let (third, _) = lines[2].as_container().unwrap();
        assert!(third.background.is_none());
    }

    #[test]
    fn test_zero_depth_highlight_has_no_shadow() {
        let caches = LookupCaches::new();
        let config = resolve(&PartialConfig {
            highlight: Some(PartialHighlight {
                enabled: Some(true),
                at: Some(1.0),
                ..Default::default()
            }),
            ..Default::default()
        });

        let tree = build(&tokenized(vec![vec![run("a")]]), &config, &caches);
        let (_, lines) = tree.as_container().unwrap();
        let (style, _) = lines[0].as_container().unwrap();
        assert!(style.shadow_depth.is_none());
        assert_eq!(style.background.as_deref(), Some("#ffffff22"));
    }

    #[test]
    fn test_empty_runs_are_dropped() {
        let caches = LookupCaches::new();
        let config = resolve(&PartialConfig::default());

        let tree = build(&tokenized(vec![vec![run("")]]), &config, &caches);
        let (_, lines) = tree.as_container().unwrap();
        let (_, children) = lines[0].as_container().unwrap();
        assert!(children.is_empty());
    }
}
