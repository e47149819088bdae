//! Edge cases for the markup parser on realistic subtitle text

use pretty_assertions::assert_eq;
use subtitle_core::{ColorRef, FontStyle, FormattedLine, StyledRun, TagParser};

fn runs(line: &FormattedLine) -> Vec<(&str, FontStyle, ColorRef)> {
    line.runs()
        .iter()
        .map(|StyledRun { text, font_style, color }| (text.as_str(), *font_style, *color))
        .collect()
}

#[test]
fn srt_dialogue_with_nested_tags() {
    let parser = TagParser::new().unwrap();
    let lines = parser.parse([
        "- <i>Where were you?</i>",
        "- <font color=\"#ffff00\">At the <b>station</b>.</font>",
    ]);

    assert_eq!(
        runs(&lines[0]),
        vec![
            ("- ", FontStyle::Normal, ColorRef::Inherit),
            ("Where were you?", FontStyle::Italic, ColorRef::Inherit),
        ]
    );
    assert_eq!(
        runs(&lines[1]),
        vec![
            ("- ", FontStyle::Normal, ColorRef::Inherit),
            ("At the ", FontStyle::Normal, ColorRef::Explicit(0xFFFF00)),
            ("station", FontStyle::Bold, ColorRef::Explicit(0xFFFF00)),
            (".", FontStyle::Normal, ColorRef::Explicit(0xFFFF00)),
        ]
    );
}

#[test]
fn ssa_override_block_noise_is_removed() {
    let parser = TagParser::new().unwrap();
    let lines = parser.parse(["{\\an8}{\\fad(200,200)}{\\i1}Meanwhile...{\\i0}"]);
    assert_eq!(
        runs(&lines[0]),
        vec![("Meanwhile...", FontStyle::Italic, ColorRef::Inherit)]
    );
}

#[test]
fn brace_color_is_blue_green_red() {
    let parser = TagParser::new().unwrap();
    let lines = parser.parse(["{\\c&H00FF80&}go"]);
    assert_eq!(
        runs(&lines[0]),
        vec![("go", FontStyle::Normal, ColorRef::Explicit(0x80FF00))]
    );
}

#[test]
fn later_color_replaces_earlier_without_reset() {
    let parser = TagParser::new().unwrap();
    let lines = parser.parse(["<font color=#111111>a<font color=#222222>b</font>c"]);
    assert_eq!(
        runs(&lines[0]),
        vec![
            ("a", FontStyle::Normal, ColorRef::Explicit(0x111111)),
            ("b", FontStyle::Normal, ColorRef::Explicit(0x222222)),
            ("c", FontStyle::Normal, ColorRef::Inherit),
        ]
    );
}

#[test]
fn each_event_starts_from_default_state() {
    let parser = TagParser::new().unwrap();
    let first = parser.parse(["<b><i>open"]);
    let second = parser.parse(["fresh"]);
    assert_eq!(runs(&first[0]), vec![("open", FontStyle::Italic, ColorRef::Inherit)]);
    assert_eq!(runs(&second[0]), vec![("fresh", FontStyle::Normal, ColorRef::Inherit)]);
}

#[test]
fn blank_line_keeps_its_slot() {
    let parser = TagParser::new().unwrap();
    let lines = parser.parse(["top", "", "bottom"]);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].is_empty());
    assert_eq!(lines[2].plain_text(), "bottom");
}

#[test]
fn multibyte_text_survives_tag_removal() {
    let parser = TagParser::new().unwrap();
    let lines = parser.parse(["<i>¿Qué tal?</i> — 東京"]);
    assert_eq!(lines[0].plain_text(), "¿Qué tal? — 東京");
}
