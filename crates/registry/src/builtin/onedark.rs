//! One Dark Pro - shown as `onedarkpro`, and reused verbatim for `dark`

use super::{fg, style, styled, ThemeSource};
use crate::theme::BaseTheme;

pub(crate) static ONE_DARK: ThemeSource = ThemeSource {
    inherit: false,
    base: BaseTheme::VsDark,
    colors: &[
        ("activityBar.background", "#282c34"),
        ("activityBar.foreground", "#d7dae0"),
        ("activityBarBadge.background", "#4d78cc"),
        ("activityBarBadge.foreground", "#f8fafd"),
        ("badge.background", "#282c34"),
        ("button.background", "#404754"),
        ("debugToolBar.background", "#21252b"),
        ("diffEditor.insertedTextBackground", "#00809b33"),
        ("dropdown.background", "#21252b"),
        ("dropdown.border", "#21252b"),
        ("editor.background", "#282c34"),
        ("editor.findMatchBackground", "#42557b"),
        ("editor.findMatchBorder", "#457dff"),
        ("editor.findMatchHighlightBackground", "#6199ff2f"),
        ("editor.foreground", "#abb2bf"),
        ("editor.lineHighlightBackground", "#2c313c"),
        ("editor.selectionBackground", "#67769660"),
        ("editor.selectionHighlightBackground", "#ffffff10"),
        ("editor.selectionHighlightBorder", "#dddddd"),
        ("editor.wordHighlightBackground", "#d2e0ff2f"),
        ("editor.wordHighlightBorder", "#7f848e"),
        ("editorBracketMatch.background", "#515a6b"),
        ("editorBracketMatch.border", "#515a6b"),
        ("editorCursor.background", "#ffffffc9"),
        ("editorCursor.foreground", "#528bff"),
        ("editorError.foreground", "#c24038"),
        ("editorGroup.border", "#181a1f"),
        ("editorGroupHeader.tabsBackground", "#21252b"),
        ("editorGutter.addedBackground", "#109868"),
        ("editorGutter.deletedBackground", "#9a353d"),
        ("editorGutter.modifiedBackground", "#948b60"),
        ("editorHoverWidget.background", "#21252b"),
        ("editorHoverWidget.border", "#181a1f"),
        ("editorIndentGuide.activeBackground", "#c8c8c859"),
        ("editorIndentGuide.background", "#3b4048"),
        ("editorLineNumber.activeForeground", "#abb2bf"),
        ("editorLineNumber.foreground", "#495162"),
        ("editorRuler.foreground", "#abb2bf26"),
        ("editorSuggestWidget.background", "#21252b"),
        ("editorSuggestWidget.border", "#181a1f"),
        ("editorSuggestWidget.selectedBackground", "#2c313a"),
        ("editorWarning.foreground", "#d19a66"),
        ("editorWhitespace.foreground", "#ffffff1d"),
        ("editorWidget.background", "#21252b"),
        ("focusBorder", "#3e4452"),
        ("input.background", "#1d1f23"),
        ("list.activeSelectionBackground", "#2c313a"),
        ("list.activeSelectionForeground", "#d7dae0"),
        ("list.hoverBackground", "#2c313a"),
        ("scrollbarSlider.activeBackground", "#747d9180"),
        ("scrollbarSlider.background", "#4e566680"),
        ("scrollbarSlider.hoverBackground", "#5a637580"),
        ("sideBar.background", "#21252b"),
        ("statusBar.background", "#21252b"),
        ("statusBar.foreground", "#9da5b4"),
        ("tab.activeBackground", "#282c34"),
        ("tab.border", "#181a1f"),
        ("tab.inactiveBackground", "#21252b"),
        ("titleBar.activeBackground", "#282c34"),
    ],
    rules: &[
        styled("comment", "#7f848e", "italic"),
        styled("comment markup.link", "#7f848e", "italic"),
        fg("keyword", "#c678dd"),
        fg("keyword.control", "#c678dd"),
        fg("keyword.operator", "#56b6c2"),
        fg("keyword.operator.new", "#c678dd"),
        fg("keyword.operator.expression.instanceof", "#c678dd"),
        fg("keyword.other.unit", "#e06c75"),
        fg("storage", "#c678dd"),
        fg("storage.type", "#c678dd"),
        fg("storage.modifier", "#c678dd"),
        fg("string", "#98c379"),
        fg("string.regexp", "#56b6c2"),
        fg("string.template meta.embedded", "#abb2bf"),
        fg("constant", "#d19a66"),
        fg("constant.numeric", "#d19a66"),
        fg("constant.language", "#d19a66"),
        fg("constant.character.escape", "#56b6c2"),
        fg("constant.other.color", "#ffffff"),
        fg("variable", "#e06c75"),
        fg("variable.parameter", "#e06c75"),
        fg("variable.language", "#e5c07b"),
        fg("variable.other.readwrite", "#e06c75"),
        fg("variable.other.constant", "#e5c07b"),
        fg("entity.name.function", "#61afef"),
        fg("support.function", "#61afef"),
        fg("meta.function-call", "#61afef"),
        fg("entity.name.type", "#e5c07b"),
        fg("entity.name.class", "#e5c07b"),
        fg("entity.other.inherited-class", "#e5c07b"),
        fg("support.class", "#e5c07b"),
        fg("support.type", "#56b6c2"),
        fg("support.constant", "#d19a66"),
        fg("entity.name.tag", "#e06c75"),
        fg("entity.other.attribute-name", "#d19a66"),
        styled("entity.other.attribute-name.id", "#61afef", ""),
        fg("entity.name.namespace", "#e5c07b"),
        fg("punctuation.definition.tag", "#abb2bf"),
        fg("punctuation.separator.key-value", "#abb2bf"),
        fg("punctuation.definition.template-expression", "#c678dd"),
        fg("support.type.property-name.json", "#e06c75"),
        fg("meta.object-literal.key", "#e06c75"),
        fg("invalid", "#ffffff"),
        fg("invalid.illegal", "#ffffff"),
        styled("markup.heading", "#e06c75", "bold"),
        styled("markup.bold", "#d19a66", "bold"),
        styled("markup.italic", "#c678dd", "italic"),
        style("markup.underline", "underline"),
        style("markup.strikethrough", "strikethrough"),
        fg("markup.inline.raw", "#98c379"),
        styled("markup.underline.link", "#56b6c2", "underline"),
        fg("markup.quote", "#7f848e"),
        fg("markup.inserted", "#98c379"),
        fg("markup.deleted", "#e06c75"),
        fg("markup.changed", "#e5c07b"),
        fg("markup.inserted", "#109868"),
        fg("markup.deleted", "#9a353d"),
        fg("meta.diff.header", "#61afef"),
    ],
};
