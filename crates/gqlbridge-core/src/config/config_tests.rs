#![allow(non_snake_case)]

use super::*;
use std::fs;
use test_case::test_case;

#[test]
fn Config___default___matches_documented_defaults() {
    let config = Config::default();

    assert_eq!(config.output.directory, "./generated");
    assert_eq!(config.output.package, "com.example.model");
    assert_eq!(config.java.version, 17);
    assert_eq!(config.java.field_visibility, FieldVisibility::Private);
    assert_eq!(config.java.collection_type, CollectionKind::List);
    assert_eq!(config.java.nullable_handling, NullableHandling::Wrapper);
    assert_eq!(config.java.naming.field_case, FieldCase::CamelCase);
    assert!(!config.features.lombok.enabled);
    assert!(config.features.lombok.data);
    assert!(config.features.lombok.no_args_constructor);
    assert!(!config.features.validation.enabled);
    assert_eq!(config.features.validation.package, ValidationPackage::Jakarta);
    assert!(config.features.validation.not_null_on_non_null);
    assert_eq!(
        config.java_version_overrides[&8].validation_package,
        Some(ValidationPackage::Javax)
    );
}

#[test]
fn Config___from_yaml_str_partial___keeps_other_defaults() {
    let yaml = r#"
output:
  package: com.acme.api
java:
  nullableHandling: optional
  naming:
    classSuffix: DTO
"#;

    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.output.package, "com.acme.api");
    assert_eq!(config.output.directory, "./generated");
    assert_eq!(config.java.nullable_handling, NullableHandling::Optional);
    assert_eq!(config.java.naming.class_suffix, "DTO");
    assert_eq!(config.java.version, 17);
    assert!(config.features.lombok.data);
}

#[test]
fn Config___from_yaml_str_empty___returns_defaults() {
    let config = Config::from_yaml_str("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn Config___from_yaml_str_scalar_mappings___reads_type_and_imports() {
    let yaml = r#"
typeMappings:
  scalars:
    Money:
      javaType: Money
      imports: [com.acme.Money]
"#;

    let config = Config::from_yaml_str(yaml).unwrap();

    let money = &config.type_mappings.scalars["Money"];
    assert_eq!(money.java_type, "Money");
    assert_eq!(money.imports, vec!["com.acme.Money".to_string()]);
}

#[test]
fn Config___from_yaml_str_java_8___switches_to_javax() {
    let yaml = r#"
java:
  version: 8
features:
  validation:
    enabled: true
    package: jakarta
"#;

    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.features.validation.package, ValidationPackage::Javax);
}

#[test]
fn Config___from_yaml_str_custom_override___applies_for_version() {
    let yaml = r#"
java:
  version: 11
javaVersionOverrides:
  11:
    validationPackage: javax
"#;

    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.features.validation.package, ValidationPackage::Javax);
}

#[test]
fn Config___from_yaml_str_other_version_override___keeps_builtin_java_8_rule() {
    let yaml = r#"
java:
  version: 8
javaVersionOverrides:
  11:
    validationPackage: javax
"#;

    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.features.validation.package, ValidationPackage::Javax);
    assert_eq!(
        config.java_version_overrides.keys().copied().collect::<Vec<_>>(),
        vec![8, 11]
    );
}

#[test]
fn Config___from_yaml_str_java_8_override___replaces_builtin_entry() {
    let yaml = r#"
java:
  version: 8
javaVersionOverrides:
  8: {}
"#;

    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.java_version_overrides[&8].validation_package, None);
    assert_eq!(config.features.validation.package, ValidationPackage::Jakarta);
}

#[test_case("java:\n  fieldVisibility: internal\n" ; "unknown visibility")]
#[test_case("java:\n  collectionType: Vector\n" ; "unknown collection type")]
#[test_case("java:\n  nullableHandling: maybe\n" ; "unknown nullable handling")]
#[test_case("features:\n  validation:\n    package: jaxb\n" ; "unknown validation package")]
#[test_case("java: [1, 2]\n" ; "wrong shape")]
fn Config___from_yaml_str_invalid_value___returns_config_error(yaml: &str) {
    let result = Config::from_yaml_str(yaml);

    assert!(matches!(result, Err(GenError::Config { .. })));
}

#[test_case(9, false)]
#[test_case(8, true)]
#[test_case(11, true)]
#[test_case(17, true)]
#[test_case(21, true)]
fn Config___validate_java_version___accepts_supported_only(version: u32, valid: bool) {
    let mut config = Config::default();
    config.java.version = version;

    assert_eq!(config.validate().is_ok(), valid);
}

#[test_case("com.example.model", true)]
#[test_case("", true)]
#[test_case("model", true)]
#[test_case("com.example.$gen", true)]
#[test_case("com..model", false)]
#[test_case("com.1example", false)]
#[test_case("com.example-model", false)]
#[test_case(".com", false)]
fn Config___validate_package___checks_each_segment(package: &str, valid: bool) {
    let mut config = Config::default();
    config.output.package = package.to_string();

    assert_eq!(config.validate().is_ok(), valid);
}

#[test]
fn Config___validate_bad_package___names_field() {
    let mut config = Config::default();
    config.output.package = "com.1bad".to_string();

    let err = config.validate().unwrap_err();

    assert_eq!(
        err.to_string(),
        "configuration error in 'output.package': invalid Java package name: com.1bad"
    );
}

#[test]
fn Config___validate_empty_scalar_java_type___returns_error() {
    let mut config = Config::default();
    config
        .type_mappings
        .scalars
        .insert("Money".to_string(), ScalarMapping::default());

    let err = config.validate().unwrap_err();

    assert!(err.to_string().contains("typeMappings.scalars.Money"));
}

#[test]
fn Config___from_toml_str___reads_same_shape() {
    let toml = r#"
[output]
package = "com.acme.toml"

[java]
version = 8
collectionType = "Set"

[features.lombok]
enabled = true
builder = true
"#;

    let config = Config::from_toml_str(toml).unwrap();

    assert_eq!(config.output.package, "com.acme.toml");
    assert_eq!(config.java.collection_type, CollectionKind::Set);
    assert!(config.features.lombok.enabled);
    assert!(config.features.lombok.builder);
    assert!(config.features.lombok.data);
    assert_eq!(config.features.validation.package, ValidationPackage::Javax);
}

#[test]
fn Config___from_toml_str_string_override_key___parses_version() {
    let toml = r#"
[java]
version = 21

[javaVersionOverrides.21]
validationPackage = "javax"
"#;

    let config = Config::from_toml_str(toml).unwrap();

    assert_eq!(config.features.validation.package, ValidationPackage::Javax);
}

#[test]
fn Config___from_file_yaml___resolves_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gqlbridge.yaml");
    fs::write(
        &path,
        "schema:\n  path: schema.json\noutput:\n  directory: out\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(
        PathBuf::from(&config.schema.path),
        dir.path().join("schema.json")
    );
    assert_eq!(PathBuf::from(&config.output.directory), dir.path().join("out"));
}

#[test]
fn Config___read_file_java_8___defers_version_override_to_finalize() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gqlbridge.yaml");
    fs::write(&path, "java:\n  version: 8\n").unwrap();

    let mut config = Config::read_file(&path).unwrap();
    assert_eq!(config.features.validation.package, ValidationPackage::Jakarta);

    config.java.version = 17;
    let config = config.finalize().unwrap();

    assert_eq!(config.features.validation.package, ValidationPackage::Jakarta);
}

#[test]
fn Config___from_file_missing___returns_config_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = Config::from_file(dir.path().join("missing.yaml"));

    assert!(matches!(result, Err(GenError::Config { ref field, .. }) if field == "path"));
}

#[test]
fn Config___resolve_paths_absolute___leaves_untouched() {
    let mut config = Config::default();
    let absolute = std::env::temp_dir().join("schema.json");
    config.schema.path = absolute.to_string_lossy().into_owned();

    config.resolve_paths(Path::new("base"));

    assert_eq!(PathBuf::from(&config.schema.path), absolute);
}

#[test]
fn Config___find_default_config___prefers_yaml() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("gqlbridge.toml"), "").unwrap();
    fs::write(dir.path().join("gqlbridge.yaml"), "").unwrap();

    let found = Config::find_default_config(dir.path());

    assert_eq!(found, Some(dir.path().join("gqlbridge.yaml")));
}

#[test]
fn Config___find_default_config_none___returns_none() {
    let dir = tempfile::tempdir().unwrap();

    assert_eq!(Config::find_default_config(dir.path()), None);
}

#[test]
fn Config___to_yaml_string___parses_back_to_same_config() {
    let mut config = Config::default();
    config.java.collection_type = CollectionKind::SortedSet;
    config.java.naming.field_case = FieldCase::SnakeCase;

    let yaml = config.to_yaml_string().unwrap();
    let parsed = Config::from_yaml_str(&yaml).unwrap();

    assert!(yaml.contains("collectionType: SortedSet"));
    assert!(yaml.contains("fieldCase: snake_case"));
    assert_eq!(parsed, config);
}

#[test]
fn FieldVisibility___keyword___package_has_none() {
    assert_eq!(FieldVisibility::Package.keyword(), None);
    assert_eq!(FieldVisibility::Protected.keyword(), Some("protected"));
}

#[test]
fn ValidationPackage___constraints_package___follows_root() {
    assert_eq!(
        ValidationPackage::Javax.constraints_package(),
        "javax.validation.constraints"
    );
    assert_eq!(
        ValidationPackage::Jakarta.nullable_import(),
        "jakarta.annotation.Nullable"
    );
}
