use ahash::AHashMap;

use crate::{
    palette::{
        dilute, style, Style, BG, BLACK, BLUE, CYAN, FG, GRAY, GREEN, ORANGE,
        PURPLE, RED, WHITE, YELLOW,
    },
    value::{dict, Value},
};

const AUTHOR: &str = "Brian Mock <brian@mockbrian.com>";
const COLOR_SPACE: &str = "sRGB";
const COMMENT: &str = "https://github.com/wavebeem/sublime-theme-foggy-morning";
const UUID: &str = "263f4a1c-f382-11e4-8f8f-20c9d048f613";

pub type StyleRegistry = AHashMap<&'static str, Style>;

/// Candidate scope rules, in emission order. A candidate only makes it into
/// the theme if the registry holds a style under the same name.
const SCOPES: &[(&str, &[&str])] = &[
    ("Parameter", &["variable.parameter.function"]),
    ("Comments", &["comment", "punctuation.definition.comment"]),
    (
        "Punctuation",
        &[
            "punctuation.definition.string",
            "punctuation.definition.variable",
            "punctuation.definition.string",
            "punctuation.definition.parameters",
            "punctuation.definition.string",
            "punctuation.definition.array",
            "punctuation.terminator",
        ],
    ),
    (
        "Delimiters",
        &[
            "punctuation.separator",
            "punctuation.section",
            "meta.brace",
            "meta.delimiter",
        ],
    ),
    ("Operators", &["keyword.operator"]),
    ("Keywords", &["keyword"]),
    (
        "Variables",
        &[
            "variable.declaration",
            "variable.parameter",
            "variable.other",
        ],
    ),
    ("Search", &["entity.name.filename.find-in-files"]),
    (
        "Search Line",
        &["constant.numeric.line-number.match.find-in-files"],
    ),
    (
        "Functions",
        &[
            "entity.name.function",
            "meta.require",
            "support.function.any-method",
        ],
    ),
    (
        "Classes",
        &[
            "support.class",
            "entity.name.class",
            "entity.name.type.class",
            "entity.name.type.module",
            "entity.other.inherited-class",
            "meta.class",
        ],
    ),
    ("Methods", &["keyword.other.special-method"]),
    ("Storage", &["storage"]),
    ("Support", &["support"]),
    (
        "Strings",
        &[
            "string",
            "punctuation.definition.string",
            "support.constant.property-value",
        ],
    ),
    ("Integers", &["constant.numeric"]),
    ("Symbols", &["constant.other.symbol"]),
    ("Floats", &["none"]),
    ("Boolean", &["constant.language.boolean"]),
    (
        "Constants",
        &["constant", "support.constant", "variable.language"],
    ),
    ("Tags", &["entity.name.tag", "punctuation.definition.tag"]),
    ("Attributes", &["entity.other.attribute-name"]),
    (
        "Attribute IDs",
        &[
            "entity.other.attribute-name.id",
            "punctuation.definition.entity",
        ],
    ),
    ("Selector", &["meta.selector", "meta.object-literal.key"]),
    (
        "Headings",
        &[
            "markup.heading punctuation.definition.heading",
            "entity.name.section",
        ],
    ),
    ("Units", &["keyword.other.unit"]),
    ("Bold", &["markup.bold", "punctuation.definition.bold"]),
    ("Italic", &["markup.italic", "punctuation.definition.italic"]),
    ("Code", &["markup.raw.inline"]),
    ("Link Text", &["string.other.link"]),
    ("Link Url", &["meta.link"]),
    ("Lists", &["markup.list"]),
    ("Quotes", &["markup.quote"]),
    ("Separator", &["meta.separator"]),
    ("Inserted", &["markup.inserted"]),
    ("Deleted", &["markup.deleted"]),
    ("Changed", &["markup.changed"]),
    ("Colors", &["constant.other.color"]),
    ("Regular Expressions", &["string.regexp"]),
    ("Escape Characters", &["constant.character.escape"]),
    (
        "Embedded",
        &["punctuation.section.embedded", "variable.interpolation"],
    ),
    ("SublimeLinter Warning", &["sublimelinter.mark.warning"]),
    ("SublimeLinter Gutter", &["sublimelinter.gutter-mark"]),
    ("SublimeLinter Error", &["sublimelinter.mark.error"]),
    ("Illegal", &["invalid", "invalid.illegal"]),
    ("Broken", &["invalid.broken"]),
    ("Deprecated", &["invalid.deprecated"]),
    ("Unimplemented", &["invalid.unimplemented"]),
];

/// All named styles the theme knows about. This is a superset of the
/// candidate table; lookups go one way only (candidate name -> style).
pub fn style_registry() -> StyleRegistry {
    StyleRegistry::from_iter([
        ("Call", style(PURPLE, &[])),
        ("Parameter", style(BLUE, &[])),
        ("Comments", style(RED, &["italic"])),
        ("Punctuation", style(GRAY, &[])),
        ("Delimiters", style(GRAY, &[])),
        ("Operators", style(GRAY, &["bold"])),
        ("Search", style(PURPLE, &["bold"])),
        ("Search Line", style(BLUE, &["bold"])),
        ("Keywords", style(BLACK, &["bold"])),
        ("Variables", style(BLUE, &[])),
        ("Functions", style(CYAN, &["bold"])),
        ("Classes", style(PURPLE, &["bold"])),
        ("Methods", style(PURPLE, &["bold"])),
        ("Storage", style(BLACK, &["bold"])),
        (
            "Strings",
            Style {
                foreground: GREEN.to_owned(),
                background: Some(dilute(GREEN, 6)),
                font_style: None,
            },
        ),
        ("Symbols", style(ORANGE, &[])),
        ("Integers", style(ORANGE, &[])),
        ("Floats", style(ORANGE, &[])),
        ("Boolean", style(ORANGE, &[])),
        ("Constants", style(ORANGE, &[])),
        ("Support", style(PURPLE, &["bold"])),
        ("Tags", style(BLUE, &[])),
        ("Attributes", style(CYAN, &[])),
        ("Attribute IDs", style(CYAN, &[])),
        ("Selector", style(PURPLE, &[])),
        ("Headings", style(BLUE, &["bold"])),
        ("Units", style(ORANGE, &[])),
        ("Bold", style(PURPLE, &["bold"])),
        ("Italic", style(PURPLE, &["italic"])),
        ("Code", style(RED, &[])),
        ("Link Text", style(BLACK, &["bold"])),
        ("Link Url", style(BLUE, &[])),
        ("Lists", style(ORANGE, &[])),
        ("Quotes", style(YELLOW, &[])),
        ("Separator", style(YELLOW, &[])),
        ("Inserted", style(GREEN, &[])),
        ("Deleted", style(RED, &[])),
        ("Changed", style(YELLOW, &[])),
        ("Colors", style(ORANGE, &[])),
        ("Regular Expressions", style(GREEN, &[])),
        ("Escape Characters", style(ORANGE, &[])),
        ("Embedded", style(PURPLE, &[])),
        ("Broken", style(RED, &["bold"])),
        ("Deprecated", style(RED, &["bold"])),
        ("Unimplemented", style(RED, &["bold"])),
        (
            "SublimeLinter Warning",
            Style {
                foreground: YELLOW.to_owned(),
                background: Some(BLACK.to_owned()),
                font_style: None,
            },
        ),
        (
            "SublimeLinter Gutter",
            Style {
                foreground: YELLOW.to_owned(),
                background: Some(BLACK.to_owned()),
                font_style: None,
            },
        ),
        (
            "SublimeLinter Error",
            Style {
                foreground: RED.to_owned(),
                background: Some(BLACK.to_owned()),
                font_style: None,
            },
        ),
        (
            "Illegal",
            Style {
                foreground: WHITE.to_owned(),
                background: Some(dilute(RED, 80)),
                font_style: Some("bold".to_owned()),
            },
        ),
    ])
}

/// The whole theme document, ready for encoding. The first element of the
/// `settings` array must be the editor-wide settings dict; the scope rules
/// follow in candidate order.
pub fn config(registry: &StyleRegistry) -> Value {
    let mut settings = vec![dict! { "settings" => global_settings() }];
    settings.extend(scope_rules(registry));

    dict! {
        "author" => AUTHOR,
        "name" => crate::palette::THEME_NAME,
        "colorSpaceName" => COLOR_SPACE,
        "comment" => COMMENT,
        "uuid" => UUID,
        "settings" => settings,
    }
}

fn global_settings() -> Value {
    dict! {
        "background" => BG,
        "divider" => BLACK,
        "foreground" => FG,
        "invisibles" => RED,
        "caret" => BLACK,
        "lineHighlight" => dilute(GRAY, 10),
        "selection" => GRAY,
        "selectionForeground" => WHITE,
        "shadow" => dilute(BLACK, 25),
        "shadowWidth" => 8,
        "gutterForeground" => dilute(GRAY, 50),
        "guide" => dilute(BLACK, 10),
        "activeGuide" => dilute(BLACK, 25),
    }
}

/// Resolves the candidate table against `registry`. Candidates without a
/// registered style are dropped; multi-selector scopes are joined with ", ".
fn scope_rules(registry: &StyleRegistry) -> Vec<Value> {
    SCOPES
        .iter()
        .filter_map(|(name, selectors)| {
            let style = registry.get(name)?;
            Some(dict! {
                "name" => *name,
                "scope" => selectors.join(", "),
                "settings" => style,
            })
        })
        .collect()
}
