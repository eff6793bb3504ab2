//! Document load/save and settings persistence tests
//!
//! These tests exercise the on-disk formats through temporary directories.

use std::fs;

use rmgstudio_core::document::{load_template, save_template};
use rmgstudio_core::{
    ArmyMultipliers, CreatureStack, PandoraBox, PandoraReward, Settings, Shop, StudioError,
    Template, Terrain, ZoneKind,
};
use tempfile::TempDir;

fn rich_template() -> Template {
    let mut t = Template::starter("Jebus Cross", 5);
    t.description = Some("Two players, central treasure".into());
    t.zones[2].kind = ZoneKind::Treasure;
    t.zones[2].terrain = Some(Terrain::Highlands);
    t.zones[2].mines = vec!["gold".into(), "gems".into()];
    t.connections[1].guarded = true;
    t.connections[1].guard_value = Some(45000);
    t.army_multipliers = ArmyMultipliers {
        guards: Some(1.25),
        ..ArmyMultipliers::default()
    };
    t.army_multipliers.by_tier.insert(7, 0.5);
    t.scripted_features.day_limit = Some(112);
    t.scripted_features.custom.insert("noRetreat".into(), true);
    t.bans.artifacts = vec!["armageddonsBlade".into()];
    t.pandora_boxes.push(PandoraBox {
        id: "pandora-1".into(),
        zone: Some("zone-3".into()),
        guarded: true,
        reward: PandoraReward {
            gold: Some(20000),
            creatures: vec![CreatureStack {
                creature: "archangel".into(),
                count: 3,
            }],
            ..PandoraReward::default()
        },
        ..PandoraBox::default()
    });
    t.ensure_terrain_rules()
}

// ============================================================================
// Templates
// ============================================================================

#[test]
fn test_save_then_load_preserves_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jebus.json");
    let template = rich_template();

    save_template(&path, &template).unwrap();
    let loaded = load_template(&path).unwrap();

    assert_eq!(loaded, template);
    assert!(!dir.path().join("jebus.json.tmp").exists());
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("t.json");

    save_template(&path, &Template::starter("First", 2)).unwrap();
    save_template(&path, &Template::new("Second")).unwrap();

    assert_eq!(load_template(&path).unwrap().name, "Second");
}

#[test]
fn test_saved_json_omits_unset_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("minimal.json");

    save_template(&path, &Template::new("Minimal")).unwrap();
    let json = fs::read_to_string(&path).unwrap();

    assert!(json.contains("\"name\": \"Minimal\""));
    assert!(!json.contains("zones"));
    assert!(!json.contains("armyMultipliers"));
    assert!(!json.contains("null"));
}

#[test]
fn test_load_sparse_document_defaults_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sparse.json");
    fs::write(
        &path,
        r#"{ "zones": [ { "id": "a" }, { "id": "b", "kind": "start" } ],
             "connections": [ { "from": "a", "to": "b", "guarded": true } ] }"#,
    )
    .unwrap();

    let t = load_template(&path).unwrap();
    assert_eq!(t.name, "");
    assert_eq!(t.zones.len(), 2);
    assert_eq!(t.zones[1].kind, ZoneKind::Start);
    assert!(t.connections[0].guarded);
    assert!(!t.connections[0].two_way);
    assert!(t.pandora_boxes.is_empty());
    assert!(t.army_multipliers.neutral.is_none());
}

#[test]
fn test_save_refuses_nan_tier_multiplier() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nan.json");
    let mut template = rich_template();
    template.army_multipliers.by_tier.insert(3, "nan".parse().unwrap());

    let err = save_template(&path, &template).unwrap_err();
    assert!(matches!(err, StudioError::NonFinite { ref field, .. } if field == "armyMultipliers.tier 3"));
    assert!(!path.exists());
    assert!(!dir.path().join("nan.json.tmp").exists());
}

#[test]
fn test_save_refuses_infinite_values_and_keeps_old_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inf.json");
    save_template(&path, &rich_template()).unwrap();

    let mut template = rich_template();
    template.army_multipliers.guards = Some("inf".parse().unwrap());
    assert!(save_template(&path, &template).is_err());

    let mut template = rich_template();
    let mut shop = Shop::new("shop-1");
    shop.price_multiplier = Some("-infinity".parse().unwrap());
    template.shops.push(shop);
    assert!(matches!(
        save_template(&path, &template),
        Err(StudioError::NonFinite { .. })
    ));

    // The earlier good save still loads
    assert_eq!(load_template(&path).unwrap(), rich_template());
}

#[test]
fn test_finite_multipliers_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiers.json");
    let mut template = rich_template();
    template.army_multipliers.by_tier.insert(3, 0.0);
    template.army_multipliers.growth = Some(-0.5);

    save_template(&path, &template).unwrap();
    assert_eq!(load_template(&path).unwrap(), template);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_template(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, StudioError::Io(_)));
}

#[test]
fn test_load_malformed_file_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ \"zones\": 12 }").unwrap();

    let err = load_template(&path).unwrap_err();
    assert!(matches!(err, StudioError::Json(_)));
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_settings_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_or_default(&Settings::path_in(dir.path()));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_malformed_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = Settings::path_in(dir.path());
    fs::write(&path, "not json").unwrap();

    assert_eq!(Settings::load_or_default(&path), Settings::default());
    assert!(Settings::load(&path).is_err());
}

#[test]
fn test_settings_save_creates_directory() {
    let dir = TempDir::new().unwrap();
    let path = Settings::path_in(&dir.path().join("nested").join("rmgstudio"));

    let mut settings = Settings::default();
    settings.push_recent(&dir.path().join("a.json"));
    settings.export.width = 800;
    settings.save(&path).unwrap();

    assert_eq!(Settings::load(&path).unwrap(), Some(settings));
}
