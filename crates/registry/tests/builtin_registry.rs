use std::sync::Arc;

use edtheme_registry::{
    Appearance, BaseTheme, HexColor, ThemeDefinition, ThemeError, ThemeId, ThemeRegistry,
};

fn registry() -> ThemeRegistry {
    ThemeRegistry::builtin().expect("built-in themes are valid")
}

// -------------------------------------------------------------------------
// Listing
// -------------------------------------------------------------------------

#[test]
fn list_is_declared_order() {
    let registry = registry();
    let names: Vec<_> = registry.list().iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        ["onedarkpro", "dracula", "night", "dark", "emerald", "forest", "winter"]
    );
}

#[test]
fn list_is_deterministic() {
    let registry = registry();
    let first: Vec<_> = registry.names().map(str::to_string).collect();
    for _ in 0..5 {
        let again: Vec<_> = registry.names().map(str::to_string).collect();
        assert_eq!(again, first);
    }
    // A fresh build gives the same order too
    let rebuilt: Vec<_> = ThemeRegistry::builtin().unwrap().names().map(str::to_string).collect();
    assert_eq!(rebuilt, first);
}

#[test]
fn only_dark_is_an_alias() {
    let registry = registry();
    let aliases: Vec<_> = registry
        .list()
        .iter()
        .filter_map(|e| e.alias_of().map(|t| (e.name(), t)))
        .collect();
    assert_eq!(aliases, [("dark", "onedarkpro")]);
}

// -------------------------------------------------------------------------
// Resolution
// -------------------------------------------------------------------------

#[test]
fn every_entry_resolves_to_its_definition() {
    let registry = registry();
    for entry in registry.list() {
        let resolved = registry.resolve(entry.name()).unwrap();
        assert_eq!(**resolved, **entry.definition(), "{}", entry.name());
    }
}

#[test]
fn every_id_resolves() {
    let registry = registry();
    for id in ThemeId::ALL {
        let by_id = registry.resolve_id(*id).unwrap();
        let by_name = registry.resolve(id.as_str()).unwrap();
        assert!(Arc::ptr_eq(by_id, by_name));
    }
}

#[test]
fn dark_and_onedarkpro_are_the_same_theme() {
    let registry = registry();
    let dark = registry.resolve("dark").unwrap();
    let pro = registry.resolve("onedarkpro").unwrap();
    assert_eq!(dark, pro);
    assert!(Arc::ptr_eq(dark, pro));
    assert_eq!(dark.color("editor.background"), Some(HexColor::from_hex(0x282c34)));
}

#[test]
fn unknown_name_is_not_found() {
    let registry = registry();
    for name in ["solarized", "Dark", "DRACULA", "night ", "lemonade"] {
        match registry.resolve(name) {
            Err(ThemeError::NotFound { name: missing }) => assert_eq!(missing, name),
            other => panic!("{name:?} should be NotFound, got {other:?}"),
        }
    }
}

#[test]
fn distinct_themes_differ() {
    let registry = registry();
    let dracula = registry.resolve("dracula").unwrap();
    let night = registry.resolve("night").unwrap();
    assert!(!Arc::ptr_eq(dracula, night));
    assert_ne!(dracula, night);
}

// -------------------------------------------------------------------------
// Definitions
// -------------------------------------------------------------------------

#[test]
fn every_resolved_definition_validates() {
    let registry = registry();
    for entry in registry.list() {
        let errors = entry.definition().validate(entry.name());
        assert!(errors.is_empty(), "{}: {errors:?}", entry.name());
        assert!(entry.definition().encoded_tokens_colors.is_empty());
        assert!(!entry.definition().rules.is_empty());
    }
}

#[test]
fn greenery_is_served_as_forest() {
    let forest = registry().resolve("forest").unwrap().clone();
    assert!(!forest.inherit);
    assert_eq!(forest.base, BaseTheme::VsDark);
    assert_eq!(forest.color("editor.background"), Some(HexColor::from_hex(0x171212)));
    assert_eq!(
        forest.color("editor.wordHighlightBackground"),
        Some(HexColor::from_rgba(0x83, 0xa0, 0x6c, 0x33))
    );
    assert_eq!(forest.rules[0].token, "meta.block variable.other");
}

#[test]
fn emerald_keeps_duplicate_scopes_in_order() {
    let emerald = registry().resolve("emerald").unwrap().clone();
    assert_eq!(emerald.rules_for("markup.inserted").count(), 2);

    let positions: Vec<_> = emerald
        .rules
        .iter()
        .enumerate()
        .filter(|(_, r)| r.token == "markup.inserted")
        .map(|(i, _)| i)
        .collect();
    assert!(positions[0] < positions[1]);
}

#[test]
fn selectors_are_kept_verbatim() {
    let emerald = registry().resolve("emerald").unwrap().clone();
    assert_eq!(emerald.rules_for(" entity.other.inherited-class").count(), 1);
}

#[test]
fn emerald_default_rule_survives() {
    let emerald = registry().resolve("emerald").unwrap().clone();
    let defaults: Vec<_> = emerald.rules_for("").collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].foreground, Some(HexColor::from_hex(0x499504)));
    assert!(emerald.validate("emerald").is_empty());
}

#[test]
fn appearance_follows_background() {
    let registry = registry();
    assert_eq!(registry.resolve("dracula").unwrap().appearance(), Appearance::Dark);
    assert_eq!(registry.resolve("night").unwrap().appearance(), Appearance::Dark);
    // Emerald declares a vs-dark base but paints a cream background
    assert_eq!(registry.resolve("emerald").unwrap().appearance(), Appearance::Light);
    assert_eq!(registry.resolve("winter").unwrap().appearance(), Appearance::Light);
}

#[test]
fn definitions_survive_json() {
    let registry = registry();
    for entry in registry.list() {
        let json = entry.definition().to_json().unwrap();
        let parsed = ThemeDefinition::from_json(&json).unwrap();
        assert_eq!(parsed, **entry.definition(), "{}", entry.name());
    }
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = Arc::new(registry());
    let handles: Vec<_> = ThemeId::ALL
        .iter()
        .map(|id| {
            let registry = Arc::clone(&registry);
            let name = id.as_str();
            std::thread::spawn(move || registry.resolve(name).map(|d| d.rules.len()))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().unwrap() > 0);
    }
}
