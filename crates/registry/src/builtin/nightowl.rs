//! Night Owl - shown as `night`

use super::{fg, styled, ThemeSource};
use crate::theme::BaseTheme;

pub(crate) static NIGHT_OWL: ThemeSource = ThemeSource {
    inherit: false,
    base: BaseTheme::VsDark,
    colors: &[
        ("activityBar.background", "#011627"),
        ("activityBar.border", "#011627"),
        ("activityBar.foreground", "#5f7e97"),
        ("activityBarBadge.background", "#44596b"),
        ("activityBarBadge.foreground", "#ffffff"),
        ("badge.background", "#5f7e97"),
        ("button.background", "#7e57c2cc"),
        ("button.hoverBackground", "#7e57c2"),
        ("contrastBorder", "#122d42"),
        ("diffEditor.insertedTextBackground", "#99b76d23"),
        ("diffEditor.removedTextBackground", "#ef535033"),
        ("dropdown.background", "#011627"),
        ("dropdown.border", "#5f7e97"),
        ("editor.background", "#011627"),
        ("editor.findMatchBackground", "#5f7e9779"),
        ("editor.findMatchHighlightBackground", "#1085bb5d"),
        ("editor.foreground", "#d6deeb"),
        ("editor.hoverHighlightBackground", "#7e57c25a"),
        ("editor.lineHighlightBackground", "#00000033"),
        ("editor.rangeHighlightBackground", "#7e57c25a"),
        ("editor.selectionBackground", "#1d3b53"),
        ("editor.selectionHighlightBackground", "#5f7e9779"),
        ("editor.wordHighlightBackground", "#f6bbe533"),
        ("editor.wordHighlightStrongBackground", "#e2a2f433"),
        ("editorBracketMatch.background", "#5f7e974d"),
        ("editorCodeLens.foreground", "#5e82ceb4"),
        ("editorCursor.foreground", "#80a4c2"),
        ("editorError.foreground", "#ef5350"),
        ("editorGroup.border", "#011627"),
        ("editorGroupHeader.tabsBackground", "#011627"),
        ("editorGutter.addedBackground", "#9ccc65"),
        ("editorGutter.deletedBackground", "#ef5350"),
        ("editorGutter.modifiedBackground", "#e2b93d"),
        ("editorHoverWidget.background", "#011627"),
        ("editorHoverWidget.border", "#5f7e97"),
        ("editorIndentGuide.activeBackground", "#7e97ac"),
        ("editorIndentGuide.background", "#5e81ce52"),
        ("editorLineNumber.activeForeground", "#c5e4fd"),
        ("editorLineNumber.foreground", "#4b6479"),
        ("editorRuler.foreground", "#5e81ce52"),
        ("editorSuggestWidget.background", "#2c3043"),
        ("editorSuggestWidget.border", "#2b2f40"),
        ("editorSuggestWidget.foreground", "#d6deeb"),
        ("editorSuggestWidget.highlightForeground", "#ffffff"),
        ("editorSuggestWidget.selectedBackground", "#5f7e97"),
        ("editorWarning.foreground", "#b39554"),
        ("editorWhitespace.foreground", "#ffffff1a"),
        ("editorWidget.background", "#021320"),
        ("focusBorder", "#122d42"),
        ("input.background", "#0b253a"),
        ("input.border", "#5f7e97"),
        ("input.foreground", "#ffffffcc"),
        ("input.placeholderForeground", "#5f7e97"),
        ("list.activeSelectionBackground", "#234d708c"),
        ("list.activeSelectionForeground", "#ffffff"),
        ("list.hoverBackground", "#011627"),
        ("scrollbarSlider.activeBackground", "#084d8180"),
        ("scrollbarSlider.background", "#084d8180"),
        ("scrollbarSlider.hoverBackground", "#084d8180"),
        ("sideBar.background", "#011627"),
        ("sideBar.border", "#011627"),
        ("statusBar.background", "#011627"),
        ("statusBar.foreground", "#5f7e97"),
        ("tab.activeBackground", "#0b2942"),
        ("tab.border", "#272b3b"),
        ("tab.inactiveBackground", "#01111d"),
        ("titleBar.activeBackground", "#011627"),
    ],
    rules: &[
        styled("comment", "#637777", "italic"),
        styled("punctuation.definition.comment", "#637777", "italic"),
        fg("string", "#ecc48d"),
        fg("string.quoted", "#ecc48d"),
        fg("string.regexp", "#5ca7e4"),
        fg("constant.character.escape", "#f78c6c"),
        fg("constant.numeric", "#f78c6c"),
        fg("constant.language", "#82aaff"),
        fg("constant.language.boolean", "#ff5874"),
        fg("constant.character", "#82aaff"),
        fg("variable", "#c5e4fd"),
        fg("variable.other", "#d6deeb"),
        fg("variable.parameter", "#7fdbca"),
        styled("variable.language.this", "#7fdbca", "italic"),
        fg("variable.other.object.property", "#bec5d4"),
        fg("variable.other.constant", "#82aaff"),
        styled("keyword", "#c792ea", "italic"),
        fg("keyword.control", "#c792ea"),
        fg("keyword.operator", "#c792ea"),
        styled("storage", "#c792ea", "italic"),
        fg("storage.type", "#c792ea"),
        fg("storage.modifier", "#c792ea"),
        styled("entity.name.function", "#82aaff", "italic"),
        fg("support.function", "#c5e478"),
        fg("meta.function-call", "#82aaff"),
        fg("entity.name.class", "#ffcb8b"),
        fg("entity.name.type", "#ffcb8b"),
        fg("entity.other.inherited-class", "#c5e478"),
        fg("support.class", "#ffcb8b"),
        fg("support.type", "#c5e478"),
        fg("support.constant", "#82aaff"),
        fg("entity.name.tag", "#caece6"),
        styled("entity.other.attribute-name", "#c5e478", "italic"),
        fg("entity.other.attribute-name.class", "#addb67"),
        fg("entity.other.attribute-name.id", "#fad430"),
        fg("support.type.property-name", "#80cbc4"),
        fg("meta.object-literal.key", "#7fdbca"),
        fg("punctuation", "#d9f5dd"),
        fg("punctuation.definition.tag", "#7fdbca"),
        fg("punctuation.definition.template-expression", "#d3423e"),
        styled("invalid", "#ff2c83", "italic"),
        styled("invalid.deprecated", "#ffffff", "italic"),
        styled("markup.heading", "#82b1ff", "bold"),
        styled("markup.bold", "#addb67", "bold"),
        styled("markup.italic", "#c792ea", "italic"),
        fg("markup.inline.raw", "#80cbc4"),
        fg("markup.quote", "#697098"),
        styled("markup.underline.link", "#ff869a", "underline"),
        fg("markup.inserted", "#a2bffc"),
        fg("markup.deleted", "#ef535090"),
        fg("markup.changed", "#a2bffc"),
    ],
};
