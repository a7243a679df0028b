//! Native image loading against the real filesystem.
//!
//! The end-to-end test loads the `widget-component` fixture cdylib (see
//! `tests/fixtures/widget-component`). The fixture is built on demand:
//!
//! ```sh
//! cargo build --manifest-path tests/fixtures/widget-component/Cargo.toml
//! ```
//!
//! When no built fixture image is found the end-to-end test is skipped.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use cogwork_abi::{KEY_COMPONENT_IMPLEMENTATION, KEY_SCM_TAG, KEY_VERSION};
use cogwork_core::{
    ComponentError, ComponentLocator, ComponentModule, DirectoryLocator, ImageError, ImageLoader,
    NativeImageLoader,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_load_rejects_missing_image() {
    init_logging();
    let loader = NativeImageLoader::new();

    let err = loader
        .load("widget", "/nonexistent/plugins/libwidget.so")
        .unwrap_err();
    assert!(matches!(err, ImageError::LoadFailed { .. }));
}

#[test]
fn test_load_rejects_non_library_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DirectoryLocator::image_file_name("widget"));
    fs::write(&path, b"not a library image").unwrap();

    let loader = NativeImageLoader::new();
    let err = loader
        .load("widget", &path.to_string_lossy())
        .unwrap_err();
    assert!(matches!(err, ImageError::LoadFailed { .. }));
}

#[test]
fn test_directory_locator_resolves_platform_image() {
    let dir = tempfile::tempdir().unwrap();
    let file_name = DirectoryLocator::image_file_name("widget");
    fs::write(dir.path().join(&file_name), b"").unwrap();

    let locator = DirectoryLocator::new(dir.path());
    let mut definition = cogwork_core::ComponentDefinition::new("acme.widget");
    locator.locate(&mut definition).unwrap();

    assert_eq!(definition.name, "widget");
    assert!(definition.path.ends_with(&file_name));
}

#[test]
fn test_bind_fails_for_unresolvable_id() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let locator = Arc::new(DirectoryLocator::new(dir.path()));

    let mut module = ComponentModule::new("missing.plugin", locator);
    let err = module.bind().unwrap_err();

    assert!(matches!(err, ComponentError::ComponentNotFound { .. }));
    assert!(!module.is_bound());
}

#[test]
fn test_bind_fails_for_unloadable_image() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(DirectoryLocator::image_file_name("widget")),
        b"garbage",
    )
    .unwrap();

    let mut module =
        ComponentModule::new("acme.widget", Arc::new(DirectoryLocator::new(dir.path())));
    let err = module.bind().unwrap_err();

    assert!(matches!(err, ComponentError::ComponentNotFound { .. }));
    assert!(!module.is_bound());
}

/// Directory holding the built fixture image, when one exists.
fn fixture_image_dir() -> Option<PathBuf> {
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("widget-component")
        .join("target");
    let file_name = DirectoryLocator::image_file_name("widget_component");

    ["debug", "release"]
        .iter()
        .map(|profile| fixture.join(profile))
        .find(|dir| dir.join(&file_name).exists())
}

#[test]
fn test_fixture_module_end_to_end() {
    init_logging();
    let Some(dir) = fixture_image_dir() else {
        eprintln!("skipping: widget-component fixture not built");
        return;
    };

    let locator = Arc::new(DirectoryLocator::new(dir));
    let mut module = ComponentModule::new("cogwork.widget_component", locator);

    module.bind().unwrap();
    assert!(module.is_bound());

    let metadata = &module.definition().metadata;
    assert_eq!(metadata.get(KEY_VERSION), Some("1.0"));
    assert_eq!(metadata.get(KEY_SCM_TAG), Some("fixtures/widget-component"));
    assert_eq!(metadata.get(KEY_COMPONENT_IMPLEMENTATION), Some("Widget"));

    // Two independent factories, each producing independently owned
    // components.
    let first = module.construct_factory().unwrap();
    let second = module.construct_factory().unwrap();
    let component = first.construct();
    drop(first);
    drop(component);
    drop(second.construct());

    // Everything constructed from the image must be gone before the image
    // is released.
    drop(second);
    module.unbind();
    assert!(!module.is_bound());
}
