//! Plugin parameter parsing
//!
//! Parameters arrive as a single comma-separated string, e.g.
//! `--prost-setters_opt=btree_map,file_suffix=.mut.rs`.

use crate::GeneratorError;

/// Default suffix appended to the proto file stem
pub const DEFAULT_FILE_SUFFIX: &str = ".setters.rs";

/// Collection type prost uses for map fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapType {
    /// `::std::collections::HashMap` (prost's default)
    #[default]
    HashMap,
    /// `::prost::alloc::collections::BTreeMap`
    BTreeMap,
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Map collection type, must match the prost-build settings
    pub map_type: MapType,
    /// Suffix for generated file names
    pub file_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_type: MapType::default(),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
        }
    }
}

impl Config {
    /// Parse the `parameter` field of a CodeGeneratorRequest
    pub fn parse(param: Option<&str>) -> Result<Self, GeneratorError> {
        let mut config = Config::default();
        let Some(param) = param else {
            return Ok(config);
        };

        for part in param.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = match part.split_once('=') {
                Some((k, v)) => (k.trim(), Some(v.trim())),
                None => (part, None),
            };

            match (key, value) {
                ("btree_map", None) | ("btree_map", Some("true")) => {
                    config.map_type = MapType::BTreeMap;
                }
                ("btree_map", Some("false")) => config.map_type = MapType::HashMap,
                ("file_suffix", Some(suffix)) => {
                    if suffix.is_empty() || !suffix.ends_with(".rs") {
                        return Err(GeneratorError::InvalidConfig(format!(
                            "file_suffix must end in `.rs`, got `{}`",
                            suffix
                        )));
                    }
                    config.file_suffix = suffix.to_string();
                }
                _ => {
                    return Err(GeneratorError::InvalidConfig(format!(
                        "unknown parameter `{}`",
                        part
                    )))
                }
            }
        }

        Ok(config)
    }
}
