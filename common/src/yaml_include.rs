use std::fs;
use std::path::Path;
use tracing::debug;
use yaml_rust2::{Yaml, YamlLoader};

use crate::config::ConfigError;

/// Loads a YAML file, resolving `!include <relative path>` lines first.
///
/// Included documents are merged in order, then the file's own content is merged
/// on top, so local keys override included ones. Nested mappings merge key by key;
/// any other value is replaced wholesale.
pub fn load_yaml_with_includes(path: &Path) -> Result<Yaml, ConfigError> {
    let res = process_includes_recursive(path)?;
    debug!(path = %path.display(), "Processed YAML includes");
    Ok(res)
}

fn process_includes_recursive(path: &Path) -> Result<Yaml, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let base_path = path.parent().unwrap_or(Path::new(""));

    let (includes, rest): (Vec<&str>, Vec<&str>) = contents
        .lines()
        .partition(|&line| line.trim().starts_with("!include"));

    let mut merged_includes: Option<Yaml> = None;
    for line in includes {
        let include_path = line.trim().trim_start_matches("!include").trim();
        let included = process_includes_recursive(&base_path.join(include_path))?;
        merged_includes = Some(match merged_includes {
            Some(acc) => merge_yaml(&acc, &included),
            None => included,
        });
    }

    let rest_yamls =
        YamlLoader::load_from_str(&rest.join("\n")).map_err(|source| ConfigError::Scan {
            path: path.display().to_string(),
            source,
        })?;
    let merged_rest = rest_yamls
        .into_iter()
        .reduce(|acc: Yaml, next: Yaml| merge_yaml(&acc, &next));

    match (merged_includes, merged_rest) {
        (Some(includes), Some(rest)) => Ok(merge_yaml(&includes, &rest)),
        (Some(includes), None) => Ok(includes),
        (None, Some(rest)) => Ok(rest),
        (None, None) => Err(ConfigError::Empty {
            path: path.display().to_string(),
        }),
    }
}

fn merge_yaml(base: &Yaml, override_yaml: &Yaml) -> Yaml {
    match (base, override_yaml) {
        (Yaml::Hash(base_hash), Yaml::Hash(override_hash)) => {
            let mut result = base_hash.clone();
            for (key, value) in override_hash {
                match base_hash.get(key) {
                    Some(base_value) => {
                        result.insert(key.clone(), merge_yaml(base_value, value));
                    }
                    None => {
                        result.insert(key.clone(), value.clone());
                    }
                }
            }
            Yaml::Hash(result)
        }
        (_, override_value) => override_value.clone(),
    }
}
