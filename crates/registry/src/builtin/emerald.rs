//! Emerald - cream background, green and amber accents (shown as `emerald`)

use super::{fg, style, styled, ThemeSource};
use crate::theme::BaseTheme;

pub(crate) static EMERALD: ThemeSource = ThemeSource {
    inherit: false,
    base: BaseTheme::VsDark,
    colors: &[
        ("activityBar.activeBorder", "#41a863"),
        ("activityBar.background", "#fbf5e1"),
        ("activityBar.dropBackground", "#eee8d5"),
        ("activityBar.foreground", "#584c27"),
        ("activityBarBadge.background", "#b58900"),
        ("button.background", "#b58900"),
        ("button.foreground", "#ffffff"),
        ("button.hoverBackground", "#cc9a00"),
        ("dropdown.background", "#fffae8"),
        ("dropdown.border", "#d8ca9e"),
        ("editor.background", "#fffae8"),
        ("editor.foreground", "#499504"),
        ("editor.lineHighlightBackground", "#e8dfc4"),
        ("editor.selectionBackground", "#eee8d5"),
        ("editorGroup.border", "#d8ca9e"),
        ("editorGroupHeader.tabsBackground", "#fffae8"),
        ("editorIndentGuide.activeBackground", "#d8ca9e"),
        ("editorIndentGuide.background", "#f7f2e4"),
        ("editorLineNumber.foreground", "#9f9371"),
        ("editorWhitespace.foreground", "#404040"),
        ("editorWidget.background", "#eee8d5"),
        ("focusBorder", "#41a863"),
        ("input.background", "#fffdf4"),
        ("input.border", "#d8ca9e"),
        ("input.foreground", "#586e75"),
        ("input.placeholderForeground", "#586e75aa"),
        ("inputOption.activeBorder", "#41a863"),
        ("list.activeSelectionBackground", "#e0edd3"),
        ("list.activeSelectionForeground", "#41a863"),
        ("list.focusBackground", "#dfca8866"),
        ("list.highlightForeground", "#b58900"),
        ("list.hoverBackground", "#e0edd3"),
        ("list.inactiveSelectionBackground", "#e0edd3"),
        ("list.inactiveSelectionForeground", "#41a863"),
        ("notifications.background", "#fffae8"),
        ("panel.border", "#d8ca9e"),
        ("panelTitle.activeBorder", "#41a863"),
        ("scrollbarSlider.activeBackground", "#cfb56a"),
        ("scrollbarSlider.background", "#cfb56a99"),
        ("scrollbarSlider.hoverBackground", "#cfb56a"),
        ("sideBar.background", "#fffae8"),
        ("sideBar.border", "#d8ca9e"),
        ("sideBarSectionHeader.background", "#fffae8"),
        ("sideBarTitle.foreground", "#586e75"),
        ("statusBar.background", "#fffae8"),
        ("statusBar.debuggingBackground", "#41a863"),
        ("statusBar.debuggingForeground", "#fffae8"),
        ("statusBar.foreground", "#586e75"),
        ("statusBar.noFolderBackground", "#eee8d5"),
        ("statusBarItem.activeBackground", "#ded0a0"),
        ("statusBarItem.hoverBackground", "#eae0c0"),
        ("statusBarItem.prominentBackground", "#ddd6c1"),
        ("tab.activeBackground", "#41a863"),
        ("tab.activeForeground", "#ffffff"),
        ("tab.border", "#fffae8"),
        ("tab.inactiveBackground", "#fffae8"),
        ("tab.inactiveForeground", "#41a863"),
        ("terminal.ansiBlack", "#000000"),
        ("terminal.ansiBlue", "#5597ef"),
        ("terminal.ansiBrightBlack", "#686868"),
        ("terminal.ansiBrightBlue", "#7faff4"),
        ("terminal.ansiBrightCyan", "#6fdada"),
        ("terminal.ansiBrightGreen", "#74fa61"),
        ("terminal.ansiBrightMagenta", "#fe9cff"),
        ("terminal.ansiBrightRed", "#fe8885"),
        ("terminal.ansiBrightWhite", "#f1f1f1"),
        ("terminal.ansiBrightYellow", "#e2d301"),
        ("terminal.ansiCyan", "#39cbcc"),
        ("terminal.ansiGreen", "#097e00"),
        ("terminal.ansiMagenta", "#fe76ff"),
        ("terminal.ansiRed", "#fd6c67"),
        ("terminal.ansiWhite", "#bbbbbb"),
        ("terminal.ansiYellow", "#cdcb00"),
        ("terminal.background", "#fffae8"),
        ("terminal.foreground", "#616161"),
        ("titleBar.activeBackground", "#eee8d5"),
        ("tree.indentGuidesStroke", "#d8ca9e"),
    ],
    rules: &[
        fg("console.error", "#ca0000ff"),
        fg("console.input", "#00ae50ff"),
        styled("console.prompt", "#b651bcff", "bold"),
        fg("console.warning", "#cd6600ff"),
        fg("console.debug", "#5d6666ff"),
        fg("hyperlink", "#0d1171ff"),
        fg("markup.deleted", "#ffffffff"),
        fg("markup.inserted", "#000000ff"),
        fg("markup.changed", "#f8f8f8ff"),
        style("markup.underline", "underline"),
        style("markup.bold", "bold"),
        style("markup.italic", "italic"),
        fg("property", "#934b3cff"),
        fg("comment", "#95a3abff"),
        fg("constant", "#9b1cebff"),
        fg("constant.other.placeholder.py", "#7b0000ff"),
        fg("entity", "#cc3611ff"),
        fg("entity.name.type", "#6c65b0ff"),
        fg("entity.other.inherited-class", "#000000ff"),
        fg("entity.name.function", "#db7800ff"),
        fg("entity.name.function.argument", "#a28d00ff"),
        fg("entity.name.tag", "#2369b6ff"),
        fg("entity.other.attribute-name", "#cb2d01ff"),
        styled("keyword", "#577909", "bold"),
        fg("keyword.control", "#577909"),
        styled("storage", "#577909", "bold"),
        styled("token.storage.js", "#577909", "bold"),
        styled("token.storage.ts", "#577909", "bold"),
        styled("keyword.operator.expression.delete.js", "#577909", "bold"),
        styled("keyword.operator.expression.in.js", "#577909", "bold"),
        styled("keyword.operator.expression.of.js", "#577909", "bold"),
        styled("keyword.operator.expression.instanceof.js", "#577909", "bold"),
        styled("keyword.operator.new.js", "#577909", "bold"),
        styled("keyword.operator.expression.typeof.js", "#577909", "bold"),
        styled("keyword.operator.expression.void.js", "#577909", "bold"),
        styled("meta.selector", "#577909", "bold"),
        fg("string | punctuation.definition.string", "#2aa198"),
        fg("string", "#2aa198"),
        fg(" entity.other.inherited-class", "#2aa198"),
        fg("Number", "#9b3affff"),
        fg("support", "#3c7a03ff"),
        fg("variable", "#499504"),
        fg("variable.parameter", "#a57800ff"),
        fg("keyword.operator", "#577909"),
        fg("keyword.operator.logical.js", "#ca004b"),
        fg("keyword.operator.logical.ts", "#ca004b"),
        fg("keyword.operator.arithmetic.js", "#56b6c2"),
        fg("keyword.operator.comparison.js", "#56b6c2"),
        fg("keyword.operator.arithmetic.ts", "#56b6c2"),
        fg("keyword.operator.comparison.ts", "#56b6c2"),
        fg("invalid.deprecated", "#333333ff"),
        fg("invalid.illegal", "#333333ff"),
        fg("string source", "#080808ff"),
        fg("String constant", "#696969ff"),
        fg("string variable", "#234a97ff"),
        fg("string.regexp", "#cf5628ff"),
        fg("string.regexp.character-class", "#cf5628ff"),
        fg("string.regexp constant.character.escaped", "#cf5628ff"),
        fg("string.regexp source.ruby.embedded", "#cf5628ff"),
        fg("string.regexp string.regexp.arbitrary-repitition", "#cf5628ff"),
        fg("string.regexp constant.character.escape", "#811f24ff"),
        fg("text source", "#080808ff"),
        fg("function name", "#ae7a00ff"),
        fg("function argument", "#99a600ff"),
        fg("support.function", "#ca004bff"),
        fg("support.constant", "#c44f00ff"),
        fg("support.variable", "#295502ff"),
        fg("entity.name.type.namespace", "#e5c07b"),
        fg("support.class", "#e5c07b"),
        fg(" entity.name.type.class", "#e5c07b"),
        fg("entity.name.class.identifier.namespace.type", "#e5c07b"),
        fg("entity.name.class", "#61afef"),
        fg("entity.name.type", "#e5c07b"),
        fg("support.constant.color.w3c-standard-color-name.css", "#d19a66"),
        fg("support.constant.color.w3c-standard-color-name.scss", "#d19a66"),
        fg("support.constant.color.w3c-standard-color-name.css", "#d19a66"),
        fg("entity.other.attribute-name.class.css", "#d19a66"),
        fg("support.type.vendored.property-name.css", "#56b6c2"),
        fg("punctuation.definition.template-expression.begin.js", "#499504"),
        fg("punctuation.definition.template-expression.end.js", "#499504"),
        fg("punctuation.definition.template-expression.begin.ts", "#499504"),
        fg("punctuation.definition.template-expression.end.ts", "#499504"),
        fg("support.module.node.js", "#e5c07b"),
        fg("support.type.object.module.js", "#e5c07b"),
        fg("support.module.node.js", "#e5c07b"),
        fg("support.module.node.ts", "#e5c07b"),
        fg("support.type.object.module.ts", "#e5c07b"),
        fg("support.module.node.ts", "#e5c07b"),
        fg("variable.other.readwrite.js", "#499504"),
        fg("meta.object-literal.key.js", "#499504"),
        fg("support.variable.property.js", "#499504"),
        fg("support.variable.object.process.js", "#499504"),
        fg("variable.other.readwrite.ts", "#499504"),
        fg("meta.object-literal.key.ts", "#499504"),
        fg("support.variable.property.ts", "#499504"),
        fg("support.variable.object.process.ts", "#499504"),
        fg("support.constant.json.js", "#d19a66"),
        fg("support.constant.json.ts", "#d19a66"),
        fg("keyword.operator.expression.instanceof.js", "#577909"),
        fg("keyword.operator.expression.instanceof.ts", "#577909"),
        fg("keyword.operator.expression.typeof.js", "#577909"),
        fg("keyword.operator.expression.typeof.ts", "#577909"),
        fg("support.type.object.console.js", "#499504"),
        fg("support.type.object.console.ts", "#499504"),
        fg("entity.name.function.js", "#61afef"),
        fg("support.function.console.js", "#61afef"),
        fg("entity.name.function.ts", "#61afef"),
        fg("support.function.console.ts", "#61afef"),
        fg("keyword.operator.js", "#56b6c2"),
        fg("keyword.operator.ts", "#56b6c2"),
        fg("support.type.object.dom.js", "#56b6c2"),
        fg("support.type.object.dom.ts", "#56b6c2"),
        fg("support.variable.dom.js", "#499504"),
        fg("support.variable.property.dom.js", "#499504"),
        fg("support.variable.dom.ts", "#499504"),
        fg("support.variable.property.dom.ts", "#499504"),
        fg("", "#499504"),
        fg("var.this.js", "#e5c07b"),
        fg("var.this.ts", "#e5c07b"),
        fg("variable.language.this.js", "#e5c07b"),
        fg("variable.language.this.ts", "#e5c07b"),
        fg("markup.list", "#7d451cff"),
        fg("markup.heading | markup.heading entity.name", "#142b5aff"),
        fg("markup.quote", "#0b6125ff"),
        fg("Markup.italic", "#080808ff"),
        styled("markup.bold", "#080808ff", "bold"),
        styled("markup.underline", "#080808ff", "underline"),
        styled("markup.link", "#234a97ff", "underline"),
        fg("markup.raw", "#234a97ff"),
        fg("markup.deleted", "#47565fff"),
        fg("markup.inserted", "#cc0000ff"),
        fg("markup.changed", "#ffffffff"),
        fg("token.info-token", "#316bcd"),
        fg("token.warn-token", "#cd9731"),
        fg("token.error-token", "#cd3131"),
        fg("token.debug-token", "#800080"),
    ],
};
