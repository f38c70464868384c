//! Config file and shader constant generator integration tests.

use std::path::PathBuf;

use debugview::resources::debugconfig::DebugConfig;
use debugview::resources::debugsettings::{
    DebugDisplaySettings, LightingFeatureFlags, LightingSettings, PixelValidationChannels,
    RenderingSettings, SceneOverrideMode, ValidationSettings,
};
use debugview::shader_constants;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("debugview-{}-{}", std::process::id(), name))
}

#[test]
fn saved_config_loads_back_into_fresh_settings() {
    let path = temp_path("roundtrip.ini");

    let mut settings = DebugDisplaySettings::new();
    settings.edit::<RenderingSettings, _>(|r| {
        r.set_scene_override_mode(SceneOverrideMode::ShadedWireframe);
        r.set_hdr_enabled(false);
    });
    settings.edit::<LightingSettings, _>(|l| {
        l.set_feature_flags(LightingFeatureFlags::MAIN_LIGHT | LightingFeatureFlags::EMISSION)
    });
    settings.edit::<ValidationSettings, _>(|v| {
        v.set_channels(PixelValidationChannels::A);
        v.set_range_max(4.0);
    });
    DebugConfig::from_settings(&settings, &path)
        .save_to_file()
        .unwrap();

    let mut config = DebugConfig::with_path(&path);
    config.load_from_file().unwrap();
    let _ = std::fs::remove_file(&path);

    let mut fresh = DebugDisplaySettings::new();
    config.apply_to(&mut fresh).unwrap();
    assert_eq!(
        fresh.read::<RenderingSettings, _>(|r| (r.scene_override_mode(), r.hdr_enabled())),
        Some((SceneOverrideMode::ShadedWireframe, false))
    );
    assert_eq!(
        fresh.read::<LightingSettings, _>(|l| l.feature_flags()),
        Some(LightingFeatureFlags::MAIN_LIGHT | LightingFeatureFlags::EMISSION)
    );
    assert_eq!(
        fresh.read::<ValidationSettings, _>(|v| (v.channels(), v.range_max())),
        Some((PixelValidationChannels::A, 4.0))
    );
}

#[test]
fn hand_written_config_is_case_insensitive() {
    let path = temp_path("handwritten.ini");
    std::fs::write(
        &path,
        "[Rendering]\nScene_Override_Mode = Overdraw\nmsaa_enabled = off\n\n[lighting]\nfeature_flags = 3\n",
    )
    .unwrap();

    let mut config = DebugConfig::with_path(&path);
    config.load_from_file().unwrap();
    let _ = std::fs::remove_file(&path);

    let mut settings = DebugDisplaySettings::new();
    assert_eq!(config.apply_to(&mut settings), Ok(3));
    assert_eq!(
        settings.read::<RenderingSettings, _>(|r| (r.scene_override_mode(), r.msaa_enabled())),
        Some((SceneOverrideMode::Overdraw, false))
    );
    assert_eq!(
        settings.read::<LightingSettings, _>(|l| l.feature_flags()),
        Some(LightingFeatureFlags::GLOBAL_ILLUMINATION | LightingFeatureFlags::MAIN_LIGHT)
    );
}

#[test]
fn unknown_flag_bits_are_rejected() {
    let mut config = DebugConfig::new();
    config.set("lighting", "feature_flags", "128");
    let mut settings = DebugDisplaySettings::new();
    let err = config.apply_to(&mut settings).unwrap_err();
    assert!(err.contains("LightingFeatureFlags"), "{err}");
}

#[test]
fn missing_config_file_is_an_error() {
    let mut config = DebugConfig::with_path(temp_path("does-not-exist.ini"));
    assert!(config.load_from_file().is_err());
}

#[test]
fn shader_constants_are_written_with_parent_dirs() {
    let dir = temp_path("shaders");
    let path = dir.join("nested").join("debug_constants.wgsl");

    let content = shader_constants::generate_constants().unwrap();
    shader_constants::write_constants(&path, &content).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_dir_all(&dir);

    assert_eq!(written, content);
    assert!(written.starts_with("// THIS FILE IS AUTO-GENERATED"));
    assert!(written.contains("const DEBUG_SCENE_OVERRIDE_MODE_OVERDRAW: u32 = 1u;"));
    assert!(written.contains("const DEBUG_PIXEL_VALIDATION_CHANNELS_A: u32 = 4u;"));
}
