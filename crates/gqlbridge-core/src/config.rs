//! Generator configuration
//!
//! Configuration is read from YAML (`gqlbridge.yaml`) or TOML (`gqlbridge.toml`).
//! Every key is optional; missing keys take the defaults shown below.
//!
//! ```yaml
//! schema:
//!   path: schema.json
//! output:
//!   directory: ./generated
//!   package: com.example.model
//! java:
//!   version: 17
//!   fieldVisibility: private
//!   collectionType: List
//!   nullableHandling: wrapper
//!   naming:
//!     fieldCase: camelCase
//!     classSuffix: ""
//!     interfacePrefix: ""
//! typeMappings:
//!   scalars:
//!     Money:
//!       javaType: Money
//!       imports: [com.acme.Money]
//! features:
//!   lombok:
//!     enabled: false
//!   validation:
//!     enabled: false
//!     package: jakarta
//! javaVersionOverrides:
//!   8:
//!     validationPackage: javax
//! ```

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

/// Java versions the generator targets
pub const SUPPORTED_JAVA_VERSIONS: [u32; 4] = [8, 11, 17, 21];

/// File names probed by [`Config::find_default_config`], in order
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["gqlbridge.yaml", "gqlbridge.yml", "gqlbridge.toml"];

/// Top-level generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub schema: SchemaConfig,
    pub output: OutputConfig,
    pub java: JavaConfig,
    pub type_mappings: TypeMappingsConfig,
    pub features: FeaturesConfig,

    #[serde(deserialize_with = "deserialize_version_overrides")]
    pub java_version_overrides: BTreeMap<u32, VersionOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: SchemaConfig::default(),
            output: OutputConfig::default(),
            java: JavaConfig::default(),
            type_mappings: TypeMappingsConfig::default(),
            features: FeaturesConfig::default(),
            java_version_overrides: default_version_overrides(),
        }
    }
}

fn default_version_overrides() -> BTreeMap<u32, VersionOverride> {
    BTreeMap::from([(
        8,
        VersionOverride {
            validation_package: Some(ValidationPackage::Javax),
        },
    )])
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaConfig {
    /// Path to the normalized schema document
    pub path: String,

    /// Additional schema documents merged after `path`
    pub includes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Java package of every generated unit; empty means the default package
    #[serde(default = "default_package")]
    pub package: String,
}

fn default_output_directory() -> String {
    "./generated".to_string()
}

fn default_package() -> String {
    "com.example.model".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            package: default_package(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JavaConfig {
    #[serde(default = "default_java_version")]
    pub version: u32,
    pub field_visibility: FieldVisibility,
    pub collection_type: CollectionKind,
    pub nullable_handling: NullableHandling,
    pub naming: NamingConfig,
}

fn default_java_version() -> u32 {
    17
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self {
            version: default_java_version(),
            field_visibility: FieldVisibility::default(),
            collection_type: CollectionKind::default(),
            nullable_handling: NullableHandling::default(),
            naming: NamingConfig::default(),
        }
    }
}

/// Access modifier for generated fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVisibility {
    #[default]
    Private,
    Protected,
    Package,
    Public,
}

impl FieldVisibility {
    /// Modifier keyword, `None` for package-private
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            FieldVisibility::Private => Some("private"),
            FieldVisibility::Protected => Some("protected"),
            FieldVisibility::Package => None,
            FieldVisibility::Public => Some("public"),
        }
    }
}

/// Collection shape used for list references
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionKind {
    #[default]
    List,
    Set,
    Collection,
    SortedSet,
    LinkedList,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::List => "List",
            CollectionKind::Set => "Set",
            CollectionKind::Collection => "Collection",
            CollectionKind::SortedSet => "SortedSet",
            CollectionKind::LinkedList => "LinkedList",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How nullable top-level references are represented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullableHandling {
    /// Boxed wrapper types
    #[default]
    Wrapper,
    /// `Optional<T>`
    Optional,
    /// Boxed wrapper types plus `@Nullable`
    Annotation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldCase {
    #[default]
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NamingConfig {
    pub field_case: FieldCase,

    /// Appended to object and input type names
    pub class_suffix: String,

    /// Prepended to interface type names
    pub interface_prefix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeMappingsConfig {
    /// Scalar name to Java type overrides, consulted before the built-in tables
    pub scalars: BTreeMap<String, ScalarMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScalarMapping {
    pub java_type: String,
    pub imports: Vec<String>,
}

impl ScalarMapping {
    pub fn new(java_type: impl Into<String>) -> Self {
        Self {
            java_type: java_type.into(),
            imports: Vec::new(),
        }
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesConfig {
    pub lombok: LombokConfig,
    pub validation: ValidationConfig,
}

/// Lombok facet defaults; the `@lombok` directive patches these per type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LombokConfig {
    pub enabled: bool,
    pub data: bool,
    pub builder: bool,
    pub no_args_constructor: bool,
    pub all_args_constructor: bool,
    pub getter: bool,
    pub setter: bool,
}

impl Default for LombokConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            data: true,
            builder: false,
            no_args_constructor: true,
            all_args_constructor: false,
            getter: false,
            setter: false,
        }
    }
}

/// Bean Validation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationConfig {
    pub enabled: bool,
    pub package: ValidationPackage,

    /// Emit `@NotNull` on every non-null field
    pub not_null_on_non_null: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            package: ValidationPackage::default(),
            not_null_on_non_null: true,
        }
    }
}

/// Namespace root for validation annotations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPackage {
    #[default]
    Jakarta,
    Javax,
}

impl ValidationPackage {
    pub fn root(&self) -> &'static str {
        match self {
            ValidationPackage::Jakarta => "jakarta",
            ValidationPackage::Javax => "javax",
        }
    }

    /// Package holding the constraint annotations
    pub fn constraints_package(&self) -> &'static str {
        match self {
            ValidationPackage::Jakarta => "jakarta.validation.constraints",
            ValidationPackage::Javax => "javax.validation.constraints",
        }
    }

    /// Fully qualified `@Nullable`
    pub fn nullable_import(&self) -> &'static str {
        match self {
            ValidationPackage::Jakarta => "jakarta.annotation.Nullable",
            ValidationPackage::Javax => "javax.annotation.Nullable",
        }
    }
}

/// Settings forced when `java.version` matches the override key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_package: Option<ValidationPackage>,
}

// YAML keys arrive as integers, TOML and JSON keys as strings.
fn deserialize_version_overrides<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<u32, VersionOverride>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize, PartialEq, Eq, Hash)]
    #[serde(untagged)]
    enum VersionKey {
        Number(u32),
        Text(String),
    }

    let raw = HashMap::<VersionKey, VersionOverride>::deserialize(deserializer)?;

    // user entries patch the built-in table per version
    let mut overrides = default_version_overrides();
    for (key, value) in raw {
        let version = match key {
            VersionKey::Number(n) => n,
            VersionKey::Text(s) => s.trim().parse().map_err(|_| {
                serde::de::Error::custom(format!("invalid Java version key '{s}'"))
            })?,
        };
        overrides.insert(version, value);
    }
    Ok(overrides)
}

impl Config {
    /// Parse YAML configuration, then validate and apply version overrides
    pub fn from_yaml_str(content: &str) -> GenResult<Self> {
        Self::parse_yaml(content)?.finalize()
    }

    /// Parse TOML configuration, then validate and apply version overrides
    pub fn from_toml_str(content: &str) -> GenResult<Self> {
        Self::parse_toml(content)?.finalize()
    }

    fn parse_yaml(content: &str) -> GenResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| GenError::config("config", format!("failed to parse YAML: {e}")))
    }

    fn parse_toml(content: &str) -> GenResult<Self> {
        toml::from_str(content)
            .map_err(|e| GenError::config("config", format!("failed to parse TOML: {e}")))
    }

    /// Load configuration from a file; the format follows the extension
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        Self::read_file(path)?.finalize()
    }

    /// Parse a configuration file and resolve its paths without validating
    /// or applying version overrides. Callers that patch settings afterwards
    /// finish with [`Config::finalize`].
    pub fn read_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GenError::config(
                "path",
                format!("failed to read config file {}: {e}", path.display()),
            )
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let mut config = if is_toml {
            Self::parse_toml(&content)?
        } else {
            Self::parse_yaml(&content)?
        };

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Validate, then apply the version overrides for `java.version`
    pub fn finalize(mut self) -> GenResult<Self> {
        self.validate()?;
        self.apply_version_overrides();
        Ok(self)
    }

    /// Check settings that the type system cannot enforce
    pub fn validate(&self) -> GenResult<()> {
        if !SUPPORTED_JAVA_VERSIONS.contains(&self.java.version) {
            return Err(GenError::config(
                "java.version",
                format!(
                    "unsupported Java version: {} (supported: 8, 11, 17, 21)",
                    self.java.version
                ),
            ));
        }

        if !self.output.package.is_empty() && !is_valid_java_package(&self.output.package) {
            return Err(GenError::config(
                "output.package",
                format!("invalid Java package name: {}", self.output.package),
            ));
        }

        for (name, mapping) in &self.type_mappings.scalars {
            if mapping.java_type.trim().is_empty() {
                return Err(GenError::config(
                    format!("typeMappings.scalars.{name}"),
                    "javaType must not be empty",
                ));
            }
        }

        Ok(())
    }

    /// Replace settings forced by the configured Java version
    pub fn apply_version_overrides(&mut self) {
        let Some(overrides) = self.java_version_overrides.get(&self.java.version) else {
            return;
        };
        if let Some(package) = overrides.validation_package {
            tracing::debug!(
                version = self.java.version,
                package = package.root(),
                "applying Java version override for validation package"
            );
            self.features.validation.package = package;
        }
    }

    /// Resolve relative schema and output paths against `base`
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut String| {
            if !p.is_empty() && Path::new(p.as_str()).is_relative() {
                *p = base.join(p.as_str()).to_string_lossy().into_owned();
            }
        };

        resolve(&mut self.schema.path);
        for include in &mut self.schema.includes {
            resolve(include);
        }
        resolve(&mut self.output.directory);
    }

    /// Serialize as YAML
    pub fn to_yaml_string(&self) -> GenResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GenError::config("config", format!("failed to serialize YAML: {e}")))
    }

    /// First default configuration file present in `dir`
    pub fn find_default_config(dir: impl AsRef<Path>) -> Option<PathBuf> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|candidate| candidate.is_file())
    }
}

fn is_valid_java_package(package: &str) -> bool {
    package.split('.').all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
            _ => false,
        }
    })
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
