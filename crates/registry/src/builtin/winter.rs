//! Winter is Coming (light) - shown as `winter`

use super::{fg, style, styled, ThemeSource};
use crate::theme::BaseTheme;

pub(crate) static WINTER: ThemeSource = ThemeSource {
    inherit: false,
    base: BaseTheme::Vs,
    colors: &[
        ("activityBar.background", "#f3f6fb"),
        ("activityBar.foreground", "#0e6fb8"),
        ("activityBarBadge.background", "#0e6fb8"),
        ("activityBarBadge.foreground", "#ffffff"),
        ("badge.background", "#cee7ff"),
        ("badge.foreground", "#236ebf"),
        ("button.background", "#0e6fb8"),
        ("button.foreground", "#ffffff"),
        ("button.hoverBackground", "#2f86d2"),
        ("diffEditor.insertedTextBackground", "#49d17d33"),
        ("diffEditor.removedTextBackground", "#e2495d33"),
        ("dropdown.background", "#ffffff"),
        ("dropdown.border", "#cee7ff"),
        ("editor.background", "#ffffff"),
        ("editor.findMatchBackground", "#d2e5fb"),
        ("editor.findMatchHighlightBackground", "#cee7ff99"),
        ("editor.foreground", "#236ebf"),
        ("editor.lineHighlightBackground", "#f3f6fb"),
        ("editor.selectionBackground", "#cee7ff"),
        ("editor.selectionHighlightBackground", "#cee7ff80"),
        ("editor.wordHighlightBackground", "#0e6fb81a"),
        ("editorBracketMatch.background", "#cee7ff"),
        ("editorBracketMatch.border", "#0e6fb8"),
        ("editorCursor.foreground", "#4373c2"),
        ("editorError.foreground", "#d02e3f"),
        ("editorGroup.border", "#cee7ff"),
        ("editorGroupHeader.tabsBackground", "#f3f6fb"),
        ("editorGutter.addedBackground", "#49d17d"),
        ("editorGutter.deletedBackground", "#e2495d"),
        ("editorGutter.modifiedBackground", "#e8a33d"),
        ("editorHoverWidget.background", "#f3f6fb"),
        ("editorHoverWidget.border", "#cee7ff"),
        ("editorIndentGuide.activeBackground", "#a7c7ea"),
        ("editorIndentGuide.background", "#e0ecf9"),
        ("editorLineNumber.activeForeground", "#0e6fb8"),
        ("editorLineNumber.foreground", "#a7c7ea"),
        ("editorSuggestWidget.background", "#f3f6fb"),
        ("editorSuggestWidget.border", "#cee7ff"),
        ("editorSuggestWidget.selectedBackground", "#cee7ff"),
        ("editorWarning.foreground", "#e8a33d"),
        ("editorWhitespace.foreground", "#a7c7ea80"),
        ("editorWidget.background", "#f3f6fb"),
        ("focusBorder", "#0e6fb8"),
        ("input.background", "#ffffff"),
        ("input.border", "#cee7ff"),
        ("input.foreground", "#236ebf"),
        ("input.placeholderForeground", "#236ebf99"),
        ("list.activeSelectionBackground", "#cee7ff"),
        ("list.activeSelectionForeground", "#0e6fb8"),
        ("list.hoverBackground", "#e0ecf9"),
        ("scrollbarSlider.activeBackground", "#a7c7ea"),
        ("scrollbarSlider.background", "#a7c7ea80"),
        ("scrollbarSlider.hoverBackground", "#a7c7eacc"),
        ("sideBar.background", "#f3f6fb"),
        ("sideBar.border", "#cee7ff"),
        ("statusBar.background", "#0e6fb8"),
        ("statusBar.foreground", "#ffffff"),
        ("tab.activeBackground", "#ffffff"),
        ("tab.border", "#cee7ff"),
        ("tab.inactiveBackground", "#f3f6fb"),
        ("titleBar.activeBackground", "#f3f6fb"),
    ],
    rules: &[
        styled("comment", "#357b42", "italic"),
        styled("punctuation.definition.comment", "#357b42", "italic"),
        fg("string", "#a44185"),
        fg("string.quoted", "#a44185"),
        fg("string.regexp", "#c74e39"),
        fg("constant.character.escape", "#af6c00"),
        fg("constant.numeric", "#174781"),
        fg("constant.language", "#174781"),
        fg("constant.character", "#174781"),
        fg("variable", "#2f86d2"),
        fg("variable.parameter", "#6d67b7"),
        styled("variable.language.this", "#0444ac", "italic"),
        fg("variable.other.constant", "#174781"),
        fg("keyword", "#0991b6"),
        fg("keyword.control", "#0991b6"),
        fg("keyword.operator", "#0444ac"),
        fg("storage", "#0991b6"),
        styled("storage.type", "#0991b6", "italic"),
        fg("storage.modifier", "#0991b6"),
        fg("entity.name.function", "#b1108e"),
        fg("support.function", "#b1108e"),
        fg("meta.function-call", "#b1108e"),
        fg("entity.name.class", "#0444ac"),
        fg("entity.name.type", "#0444ac"),
        styled("entity.other.inherited-class", "#0444ac", "italic"),
        fg("support.class", "#0444ac"),
        fg("support.type", "#0991b6"),
        fg("support.constant", "#174781"),
        fg("entity.name.tag", "#0444ac"),
        styled("entity.other.attribute-name", "#df8618", "italic"),
        fg("support.type.property-name", "#0444ac"),
        fg("meta.object-literal.key", "#2f86d2"),
        fg("punctuation", "#236ebf"),
        fg("punctuation.definition.tag", "#0991b6"),
        fg("punctuation.definition.template-expression", "#0991b6"),
        styled("invalid", "#d02e3f", "underline"),
        styled("markup.heading", "#0444ac", "bold"),
        styled("markup.bold", "#4373c2", "bold"),
        styled("markup.italic", "#4373c2", "italic"),
        style("markup.strikethrough", "strikethrough"),
        fg("markup.inline.raw", "#a44185"),
        fg("markup.quote", "#357b42"),
        styled("markup.underline.link", "#0e6fb8", "underline"),
        fg("markup.inserted", "#49d17d"),
        fg("markup.deleted", "#e2495d"),
        fg("markup.changed", "#e8a33d"),
    ],
};
