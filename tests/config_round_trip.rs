mod support;

use spritedrop::config::{self, AppSettings};
use spritedrop::egui_app::controller::EguiController;
use spritedrop::sprite_drop::MemoryAssetIndex;
use support::config_env::ConfigHomeGuard;

#[test]
fn controller_loads_saved_settings_and_manifest() {
    let temp = tempfile::tempdir().expect("tempdir");
    let _env = ConfigHomeGuard::set(temp.path().join("config"));

    let manifest = temp.path().join("sprites.toml");
    std::fs::write(
        &manifest,
        "[[sheet]]\npath = \"Assets/hero.png\"\nsprites = [\"hero_idle\", \"hero_run\"]\n",
    )
    .expect("write manifest");

    let mut settings = AppSettings::default();
    settings.sprite_manifest = Some(manifest.clone());
    settings.drop.highlight_class = "drop-here".into();
    config::save(&settings).expect("save config");

    let path = config::config_path().expect("config path");
    assert!(path.starts_with(temp.path().join("config").join(".spritedrop")));

    let mut controller = EguiController::new(AppSettings::default(), MemoryAssetIndex::new());
    controller.load_configuration().expect("load config");
    assert_eq!(controller.settings().drop.highlight_class, "drop-here");
    assert_eq!(controller.asset_index().sheets().len(), 1);
    assert_eq!(controller.asset_index().sheets()[0].sprites.len(), 2);
}

#[test]
fn missing_config_yields_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let _env = ConfigHomeGuard::set(temp.path().to_path_buf());

    let settings = config::load_or_default().expect("load defaults");
    assert_eq!(settings, AppSettings::default());
}
