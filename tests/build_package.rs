//! End-to-end builds against a fixture project.

use lomenu::config::{ExtensionConfig, ExtensionDescriptor, IconSet, Version};
use lomenu::oxt::{BuildPaths, OxtPackage, Packager};
use lomenu::Error;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SOURCE_FILES: &[&str] = &[
    "src/interface.py",
    "src/lomenu/actions.py",
    "pythonpath/helpers.py",
];

struct Fixture {
    project: TempDir,
    scratch: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let project = tempfile::tempdir().unwrap();
        let source = project.path().join("extension");
        for file in SOURCE_FILES {
            write(&source.join(file), "# component\n");
        }
        write(&source.join("src/__pycache__/interface.cpython-311.pyc"), "bytecode");
        write(&source.join("src/lomenu/__pycache__/actions.cpython-311.pyc"), "bytecode");
        write(&source.join("Addons.xcu"), "stale");

        Self {
            project,
            scratch: tempfile::tempdir().unwrap(),
        }
    }

    fn packager(&self, config: ExtensionConfig) -> Packager {
        Packager::new(
            config,
            BuildPaths::for_project(self.project.path()).with_workspace_parent(self.scratch.path()),
        )
    }

    fn builds(&self) -> PathBuf {
        self.project.path().join("builds")
    }

    fn scratch_is_empty(&self) -> bool {
        fs::read_dir(self.scratch.path()).unwrap().next().is_none()
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn descriptor(config: &ExtensionConfig, build: &str) -> ExtensionDescriptor {
    let identity = &config.identity;
    ExtensionDescriptor::new(identity, Version::new(identity.version, build), 2024)
}

#[test]
fn archive_holds_sources_descriptors_and_icons() {
    let fixture = Fixture::new();
    let config = ExtensionConfig::lomenu();
    let packager = fixture.packager(config.clone());

    let path = packager.build_at(&descriptor(&config, "18093012")).unwrap();
    assert_eq!(path, fixture.builds().join("lomenu_0.0.1.18093012.oxt"));

    let package = OxtPackage::open(&path).unwrap();
    let actual: BTreeSet<String> = package.file_names().into_iter().collect();

    let mut expected: BTreeSet<String> = SOURCE_FILES.iter().map(|s| s.to_string()).collect();
    for name in ["META-INF/manifest.xml", "Addons.xcu", "description.xml", "desc_en.txt"] {
        expected.insert(name.to_string());
    }
    for icon in config.icons.names() {
        expected.insert(format!("icons/{}", icon));
    }
    assert_eq!(actual, expected);
    assert!(actual.iter().all(|name| !name.starts_with('/') && !name.contains('\\')));
}

#[test]
fn generated_descriptors_replace_copied_sources() {
    let fixture = Fixture::new();
    let config = ExtensionConfig::lomenu();
    let path = fixture
        .packager(config.clone())
        .build_at(&descriptor(&config, "01000000"))
        .unwrap();

    let package = OxtPackage::open(&path).unwrap();
    let addons = package.read_text("Addons.xcu").unwrap();
    assert!(addons.contains("org.torrua.extensions.lomenu"));
    assert!(addons.contains(r#"<node oor:name="N007" oor:op="replace">"#));
    assert!(!addons.contains(r#"oor:name="N008""#));

    let description = package.read_text("description.xml").unwrap();
    assert!(description.contains(r#"<version value="0.0.1.01000000"/>"#));
}

#[test]
fn distinct_versions_produce_distinct_files() {
    let fixture = Fixture::new();
    let config = ExtensionConfig::lomenu();
    let packager = fixture.packager(config.clone());

    let first = packager.build_at(&descriptor(&config, "18093012")).unwrap();
    let second = packager.build_at(&descriptor(&config, "18093013")).unwrap();

    assert_ne!(first, second);
    assert!(first.exists());
    assert!(second.exists());
    assert_eq!(fs::read_dir(fixture.builds()).unwrap().count(), 2);
}

#[test]
fn corrupt_icon_leaves_no_artifact() {
    let fixture = Fixture::new();
    let mut config = ExtensionConfig::lomenu();
    config.icons.insert("BTN_SET_FONTS.png", "@@ not base64 @@");

    let err = fixture
        .packager(config.clone())
        .build_at(&descriptor(&config, "18093012"))
        .unwrap_err();

    assert!(matches!(err, Error::IconDecode { ref name, .. } if name == "BTN_SET_FONTS.png"));
    let artifacts = fs::read_dir(fixture.builds())
        .map(|dir| dir.count())
        .unwrap_or(0);
    assert_eq!(artifacts, 0);
    assert!(fixture.scratch_is_empty());
}

#[test]
fn workspace_removed_after_success() {
    let fixture = Fixture::new();
    let config = ExtensionConfig::lomenu();
    fixture.packager(config.clone()).build_at(&descriptor(&config, "18093012")).unwrap();
    assert!(fixture.scratch_is_empty());
}

#[test]
fn missing_source_tree_is_reported() {
    let fixture = Fixture::new();
    fs::remove_dir_all(fixture.project.path().join("extension")).unwrap();
    let config = ExtensionConfig::lomenu();

    let err = fixture.packager(config.clone()).build().unwrap_err();
    assert!(matches!(err, Error::SourceTreeMissing(_)));
    assert!(fixture.scratch_is_empty());
}

#[test]
fn yaml_configuration_builds_with_blank_gaps() {
    let fixture = Fixture::new();
    let yaml = r#"
identity:
  name: demo
  version: "1.2.3"
  author: acme
buttons:
  - key: BTN_HELLO
    labels:
      EN: Fish & Chips
  - key: BTN_BYE
    labels:
      EN: Bye
      RU: Пока
    on_toolbar: false
"#;
    let mut config = ExtensionConfig::from_yaml_str(yaml).unwrap();
    config.icons = IconSet::new().with("BTN_HELLO.png", "iVBORw0KGgo=");
    assert_eq!(config.coverage_gaps().len(), 2);

    let path = fixture
        .packager(config.clone())
        .build_at(&descriptor(&config, "05060708"))
        .unwrap();
    assert_eq!(path.file_name().unwrap(), "demo_1.2.3.05060708.oxt");

    let package = OxtPackage::open(&path).unwrap();
    assert!(package.has_file("icons/BTN_HELLO.png"));
    let addons = package.read_text("Addons.xcu").unwrap();
    assert!(addons.contains("Fish &amp; Chips"));
    assert!(addons.contains(r#"<value xml:lang="ru-RU"></value>"#));
    assert!(addons.contains("service:org.acme.extensions.demo.BTN_BYE?execute"));
    assert_eq!(package.read_text("desc_en.txt").unwrap(), "© acme, 2024");
}
