//! Greenery - dark charcoal with moss green chrome (shown as `forest`)

use super::{fg, style, styled, ThemeSource};
use crate::theme::BaseTheme;

pub(crate) static GREENERY: ThemeSource = ThemeSource {
    inherit: false,
    base: BaseTheme::VsDark,
    colors: &[
        ("editor.background", "#171212"),
        ("editor.foreground", "#d4d4d4"),
        ("titleBar.activeBackground", "#1f1f1f"),
        ("activityBar.background", "#1f1f1f"),
        ("activityBar.foreground", "#fdfdfd"),
        ("activityBarBadge.background", "#667c55"),
        ("activityBar.border", "#1c1d1c"),
        ("sideBar.background", "#1f1f1f"),
        ("sideBarTitle.foreground", "#667c55"),
        ("sideBarSectionHeader.background", "#1f1f1f"),
        ("editorGroupHeader.tabsBackground", "#1c1d1c"),
        ("tab.activeBackground", "#1f1f1f"),
        ("tab.inactiveBackground", "#1c1d1c"),
        ("tab.border", "#1f1f1f"),
        ("tab.activeBorder", "#667c55"),
        ("tab.hoverBackground", "#667c55"),
        ("statusBar.background", "#4c5c3f"),
        ("statusBar.noFolderBackground", "#4c5c3f"),
        ("statusBar.debuggingBackground", "#ebc17a"),
        ("statusBar.debuggingForeground", "#1f1f1f"),
        ("editorLineNumber.foreground", "#41463d"),
        ("gitDecoration.modifiedResourceForeground", "#ebc17a"),
        ("gitDecoration.untrackedResourceForeground", "#769baa"),
        ("gitDecoration.conflictingResourceForeground", "#f07178"),
        ("gitDecoration.deletedResourceForeground", "#bb90d8"),
        ("gitDecoration.ignoredResourceForeground", "#4e5350"),
        ("editor.wordHighlightBackground", "#83a06c33"),
        ("editor.selectionBackground", "#83a06c33"),
        ("editor.findMatchBackground", "#ebc17a33"),
        ("editor.findMatchHighlightBackground", "#afdf6333"),
    ],
    rules: &[
        fg("meta.block variable.other", "#f07178"),
        fg("support.other.variable", "#f07178"),
        fg("string.other.link", "#f07178"),
        fg("entity.name.module.js", "#f07178"),
        fg("variable.import.parameter.js", "#f07178"),
        fg("constant.numeric", "#ebc17a"),
        fg("support.constant", "#ebc17a"),
        fg("constant.character", "#ebc17a"),
        fg("constant.escape", "#ebc17a"),
        fg("keyword.other.unit", "#ebc17a"),
        fg("keyword.other", "#ebc17a"),
        fg("source.css support.type.property-name", "#ebc17a"),
        fg("source.sass support.type.property-name", "#ebc17a"),
        fg("source.scss support.type.property-name", "#ebc17a"),
        fg("source.less support.type.property-name", "#ebc17a"),
        fg("source.stylus support.type.property-name", "#ebc17a"),
        fg("source.postcss support.type.property-name", "#ebc17a"),
        fg("entity.name.tag.reference.scss", "#ebc17a"),
        fg("support.constant.property-value.css", "#ebc17a"),
        fg("constant.numeric.css", "#ebc17a"),
        fg("source.json meta.structure.dictionary.json meta.structure.dictionary.value.json meta.structure.dictionary.json support.type.property-name.json", "#ebc17a"),
        fg("string.other.link.title.markdown", "#ebc17a"),
        fg("string.other.link.description.markdown", "#ebc17a"),
        fg("keyword", "#83a06c"),
        fg("storage.type", "#83a06c"),
        fg("storage.modifier", "#83a06c"),
        fg("keyword.control.flow.python", "#83a06c"),
        fg("keyword.control.flow.js", "#83a06c"),
        fg("keyword.control.loop.js", "#83a06c"),
        fg("source.json meta.structure.dictionary.json support.type.property-name.json", "#83a06c"),
        fg("support.type.property-name.json", "#83a06c"),
        fg("source.json meta.structure.dictionary.json meta.structure.dictionary.value.json meta.structure.dictionary.json meta.structure.dictionary.value.json meta.structure.dictionary.json support.type.property-name.json", "#83a06c"),
        fg("entity.name.tag.block.any.html", "#83a06c"),
        fg("entity.name.tag.structure.any.html", "#83a06c"),
        fg("entity.name.tag.open.jsx", "#83a06c"),
        fg("entity.name.tag.close.jsx", "#83a06c"),
        fg("meta.property-name.css", "#83a06c"),
        fg("entity.name.tag.inline.any.html", "#83a06c"),
        fg("entity.name.tag.html", "#83a06c"),
        fg("entity.name.section.markdown", "#83a06c"),
        fg("meta.class-method.js entity.name.function.js", "#769baa"),
        fg("variable.function.constructor", "#769baa"),
        fg("entity.name.tag.css", "#769baa"),
        fg("entity.other.attribute-name.pseudo-class.css", "#769baa"),
        fg("variable.language.this.js", "#769baa"),
        fg("variable.language.self.js", "#769baa"),
        fg("meta.function.parameters.js", "#769baa"),
        fg("variable.parameter", "#769baa"),
        fg("markup.fenced_code.block.markdown", "#769baa"),
        fg("variable.other.readwrite.global.special.perl", "#769baa"),
        fg("entity.other.attribute-name.class.css", "#b06698"),
        fg("entity.other.attribute-name", "#b06698"),
        fg("variable.other.class.js", "#b06698"),
        fg("entity.name.class", "#b06698"),
        fg("support.class.component", "#b06698"),
        fg("entity.name.type.class.python", "#b06698"),
        fg("meta.class.python", "#b06698"),
        fg("entity.name.type.js", "#b06698"),
        fg("string.other.link.description.title.markdown", "#b06698"),
        fg("variable.other.readwrite.global.perl", "#b06698"),
        fg("support.type", "#9ac2be"),
        fg("source.sass keyword.control", "#9ac2be"),
        fg("string.regexp", "#9ac2be"),
        fg("constant.character.escape", "#9ac2be"),
        fg("support.class.builtin.js", "#9ac2be"),
        fg("support.class.builtin", "#9ac2be"),
        fg("markup.italic.markdown", "#9ac2be"),
        fg("markup.bold.markdown", "#9ac2be"),
        fg("fenced_code.block.language", "#9ac2be"),
        fg("variable", "#e1f3e7"),
        fg("string constant.other.placeholder", "#e1f3e7"),
        fg("meta.function-call.arguments.python", "#e1f3e7"),
        fg("variable.other.readwrite", "#e1f3e7"),
        fg("variable.other.object", "#e1f3e7"),
        fg("expression.embedded.vue", "#e1f3e7"),
        fg("string.unquoted", "#e1f3e7"),
        fg("JSXNested", "#e1f3e7"),
        fg("entity.name", "#c78547"),
        fg("support.type", "#c78547"),
        fg("support.class", "#c78547"),
        fg("support.orther.namespace.use.php", "#c78547"),
        fg("meta.use.php", "#c78547"),
        fg("support.other.namespace.php", "#c78547"),
        fg("markup.changed.git_gutter", "#c78547"),
        fg("support.type.sys-types", "#c78547"),
        fg("constant.language.boolean", "#c78547"),
        fg("constant.language.undefined", "#c78547"),
        fg("constant.language.null", "#c78547"),
        fg("entity.other.attribute-name.class", "#667c55"),
        fg("punctuation.definition.tag.jsx", "#667c55"),
        fg("storage.type.function", "#667c55"),
        fg("entity.name.tag.script.html", "#667c55"),
        fg("entity.name.tag.template.html", "#667c55"),
        fg("entity.name.tag.style.html", "#667c55"),
        fg("markup.underline.link.markdown", "#667c55"),
        fg("markup.underline.link.image.markdown", "#667c55"),
        fg("entity.name.function.js", "#adc586"),
        fg("constant.other.color", "#adc586"),
        fg("constant.other.color.rgb-value.hex.css", "#adc586"),
        fg("keyword.control", "#adc586"),
        fg("constant.other.color", "#adc586"),
        fg("punctuation", "#adc586"),
        fg("meta.tag", "#adc586"),
        fg("punctuation.definition.tag", "#adc586"),
        fg("punctuation.separator.inheritance.php", "#adc586"),
        fg("punctuation.definition.tag.html", "#adc586"),
        fg("punctuation.definition.tag.begin.html", "#adc586"),
        fg("punctuation.definition.tag.end.html", "#adc586"),
        fg("punctuation.section.embedded", "#adc586"),
        fg("keyword.other.template", "#adc586"),
        fg("keyword.other.substitution", "#adc586"),
        fg("string", "#adc586"),
        fg("constant.other.symbol", "#adc586"),
        fg("constant.other.key", "#adc586"),
        fg("entity.other.inherited-class", "#adc586"),
        fg("markup.heading", "#adc586"),
        fg("markup.inserted.git_gutter", "#adc586"),
        fg("meta.group.braces.curly constant.other.object.key.js string.unquoted.label.js", "#adc586"),
        fg("support.type.property-name.css", "#adc586"),
        fg("punctuation.definition.variable.perl", "#adc586"),
        fg("string.quoted.double", "#afcaaf"),
        fg("string.quoted.single", "#afcaaf"),
        fg("string.quoted.double.json", "#afcaaf"),
        fg("string.quoted.module.js", "#afcaaf"),
        styled("comment", "#4e5350", "italic"),
        styled("punctuation.definition.comment", "#4e5350", "italic"),
        styled("punctuation.definition.heading.markdown", "#4e5350", "italic"),
        styled("punctuation.definition.markdown", "#4e5350", "italic"),
        styled("punctuation.definition.bold.markdown", "#4e5350", "italic"),
        styled("punctuation.definition.italic.markdown", "#4e5350", "italic"),
        styled("meta.separator.markdown", "#4e5350", "italic"),
        styled("variable.language.special.self.python", "#83a06c", "bold"),
        styled("entity.name.method.js", "#769baa", "bold"),
        styled("variable.language", "#f07178", "italic"),
        styled("source.js constant.other.object.key.js string.unquoted.label.js", "#f07178", "italic"),
        styled("entity.name.function", "#ebc17a", "italic"),
        styled("meta.function-call", "#ebc17a", "italic"),
        styled("variable.function", "#ebc17a", "italic"),
        styled("support.function", "#ebc17a", "italic"),
        styled("keyword.other.special-method", "#ebc17a", "italic"),
        styled("text.html.basic entity.other.attribute-name.html", "#ebc17a", "italic"),
        styled("text.html.basic entity.other.attribute-name", "#ebc17a", "italic"),
        styled("entity.other.attribute-name.html", "#ebc17a", "italic"),
        styled("entity.other.attribute-name.jsx", "#ebc17a", "italic"),
        styled("variable.other.property.js", "#ebc17a", "italic"),
        styled("entity.name.method.js", "#769baa", "italic"),
        styled("tag.decorator.js entity.name.tag.js", "#769baa", "italic"),
        styled("tag.decorator.js punctuation.definition.tag.js", "#769baa", "italic"),
        styled("keyword.other.unit.em.css", "#769baa", "italic"),
        styled("keyword.other.unit.px.css", "#769baa", "italic"),
        styled("keyword.other.unit.s.css", "#769baa", "italic"),
        styled("keyword.other.unit.rem.css", "#769baa", "italic"),
        styled("keyword.other.unit.percentage.css", "#769baa", "italic"),
        styled("variable.language.prototype.js", "#769baa", "italic"),
        styled("variable.other.object.property", "#b06698", "italic"),
        styled("support.function.builtin", "#9ac2be", "italic"),
        styled("entity.name.function.python", "#8eac74", "italic"),
        styled("entity.name.function.method.js", "#8eac74", "italic"),
        styled("variable.scss", "#9ab49a", "italic"),
        styled("invalid", "#f7442d", "italic"),
        styled("invalid.illegal", "#f7442d", "italic"),
        style("*url*", "underline"),
        style("*link*", "underline"),
        style("*uri*", "underline"),
    ],
};
