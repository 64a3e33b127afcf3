//! Dracula

use super::{fg, style, styled, ThemeSource};
use crate::theme::BaseTheme;

pub(crate) static DRACULA: ThemeSource = ThemeSource {
    inherit: false,
    base: BaseTheme::VsDark,
    colors: &[
        ("activityBar.background", "#343746"),
        ("activityBar.foreground", "#f8f8f2"),
        ("activityBarBadge.background", "#ff79c6"),
        ("activityBarBadge.foreground", "#f8f8f2"),
        ("badge.background", "#44475a"),
        ("button.background", "#44475a"),
        ("diffEditor.insertedTextBackground", "#50fa7b20"),
        ("diffEditor.removedTextBackground", "#ff555550"),
        ("dropdown.background", "#343746"),
        ("dropdown.border", "#191a21"),
        ("editor.background", "#282a36"),
        ("editor.findMatchBackground", "#ffb86c80"),
        ("editor.findMatchHighlightBackground", "#ffffff40"),
        ("editor.foreground", "#f8f8f2"),
        ("editor.lineHighlightBorder", "#44475a"),
        ("editor.rangeHighlightBackground", "#bd93f915"),
        ("editor.selectionBackground", "#44475a"),
        ("editor.selectionHighlightBackground", "#424450"),
        ("editor.snippetTabstopHighlightBackground", "#282a36"),
        ("editor.wordHighlightBackground", "#8be9fd50"),
        ("editor.wordHighlightStrongBackground", "#50fa7b50"),
        ("editorBracketMatch.border", "#6272a4"),
        ("editorCodeLens.foreground", "#6272a4"),
        ("editorCursor.foreground", "#f8f8f2"),
        ("editorError.foreground", "#ff5555"),
        ("editorGroup.border", "#bd93f9"),
        ("editorGroupHeader.tabsBackground", "#191a21"),
        ("editorGutter.addedBackground", "#50fa7b80"),
        ("editorGutter.deletedBackground", "#ff555580"),
        ("editorGutter.modifiedBackground", "#8be9fd80"),
        ("editorHoverWidget.background", "#282a36"),
        ("editorHoverWidget.border", "#6272a4"),
        ("editorIndentGuide.activeBackground", "#ffffff45"),
        ("editorIndentGuide.background", "#ffffff1a"),
        ("editorLineNumber.foreground", "#6272a4"),
        ("editorLink.activeForeground", "#8be9fd"),
        ("editorRuler.foreground", "#ffffff1a"),
        ("editorSuggestWidget.background", "#21222c"),
        ("editorSuggestWidget.foreground", "#f8f8f2"),
        ("editorSuggestWidget.selectedBackground", "#44475a"),
        ("editorWarning.foreground", "#8be9fd"),
        ("editorWhitespace.foreground", "#ffffff1a"),
        ("editorWidget.background", "#21222c"),
        ("focusBorder", "#6272a4"),
        ("input.background", "#282a36"),
        ("input.border", "#191a21"),
        ("input.placeholderForeground", "#6272a4"),
        ("list.activeSelectionBackground", "#44475a"),
        ("list.hoverBackground", "#44475a75"),
        ("scrollbarSlider.activeBackground", "#6272a4"),
        ("scrollbarSlider.background", "#ffffff1a"),
        ("sideBar.background", "#21222c"),
        ("statusBar.background", "#191a21"),
        ("statusBar.foreground", "#f8f8f2"),
        ("tab.activeBackground", "#282a36"),
        ("tab.inactiveBackground", "#21222c"),
        ("titleBar.activeBackground", "#21222c"),
    ],
    rules: &[
        styled("comment", "#6272a4", ""),
        fg("string", "#f1fa8c"),
        fg("string.regexp", "#ff5555"),
        fg("constant.character.escape", "#ff79c6"),
        fg("constant.numeric", "#bd93f9"),
        fg("constant.language", "#bd93f9"),
        fg("constant.character", "#bd93f9"),
        fg("constant.other", "#bd93f9"),
        fg("variable", "#f8f8f2"),
        styled("variable.parameter", "#ffb86c", "italic"),
        styled("variable.language.this", "#bd93f9", "italic"),
        fg("variable.other.constant", "#bd93f9"),
        fg("keyword", "#ff79c6"),
        fg("keyword.operator", "#ff79c6"),
        fg("keyword.control", "#ff79c6"),
        fg("storage", "#ff79c6"),
        styled("storage.type", "#8be9fd", "italic"),
        fg("storage.modifier", "#ff79c6"),
        fg("entity.name.function", "#50fa7b"),
        fg("support.function", "#8be9fd"),
        fg("meta.function-call", "#50fa7b"),
        fg("entity.name.class", "#8be9fd"),
        fg("entity.name.type", "#8be9fd"),
        styled("entity.other.inherited-class", "#8be9fd", "italic"),
        styled("support.class", "#8be9fd", "italic"),
        styled("support.type", "#8be9fd", "italic"),
        fg("entity.name.tag", "#ff79c6"),
        styled("entity.other.attribute-name", "#50fa7b", "italic"),
        fg("support.type.property-name", "#8be9fd"),
        fg("meta.object-literal.key", "#8be9fd"),
        fg("punctuation.definition.string", "#e9f284"),
        fg("punctuation.definition.template-expression", "#ff79c6"),
        fg("punctuation.separator", "#f8f8f2"),
        styled("invalid", "#ff5555", "underline italic"),
        styled("invalid.deprecated", "#f8f8f2", "underline italic"),
        styled("markup.heading", "#bd93f9", "bold"),
        styled("markup.bold", "#ffb86c", "bold"),
        styled("markup.italic", "#f1fa8c", "italic"),
        style("markup.strikethrough", "strikethrough"),
        fg("markup.inline.raw", "#50fa7b"),
        fg("markup.quote", "#6272a4"),
        styled("markup.underline.link", "#8be9fd", "underline"),
        fg("markup.inserted", "#50fa7b"),
        fg("markup.deleted", "#ff5555"),
        fg("markup.changed", "#ffb86c"),
        fg("meta.diff.header", "#6272a4"),
    ],
};
