use crate::error::{LegisError, Result};
use crate::types::config::ScoringConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "legis-kpi.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".legis-kpi/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/legis-kpi/config.toml";

/// Global, project and local layers merged in that order; built-in defaults when the project
/// file is absent.
pub fn load_config(root: &Path) -> Result<ScoringConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub fn load_config_file(path: &Path) -> Result<ScoringConfig> {
    if !path.exists() {
        return Err(LegisError::PathNotFound(path.display().to_string()));
    }
    let mut merged = Value::Table(Map::new());
    merge_file_if_exists(&mut merged, path)?;
    into_config(merged)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<ScoringConfig> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        debug!(path = %repo_path.display(), "no project config, using defaults");
        return Ok(ScoringConfig::default());
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
    into_config(merged)
}

fn into_config(merged: Value) -> Result<ScoringConfig> {
    let cfg: ScoringConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| LegisError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| LegisError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_defaults_when_repo_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.complex.max_results, 5);
        assert_eq!(cfg.relator.amendment_weight, 10);
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[relator]
amendment_weight = 12
bill_weight = 6

[efficiency]
cost_divisor = 50000.0
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[relator]
bill_weight = 4

[committees]
strategic_acronyms = ["CCJ", "CAE", "CRE"]
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".legis-kpi")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[committees]
chair_bonus = 25
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.relator.amendment_weight, 12);
        assert_eq!(cfg.relator.bill_weight, 4);
        assert_eq!(cfg.efficiency.cost_divisor, 50_000.0);
        assert_eq!(cfg.committees.strategic_acronyms.len(), 3);
        assert_eq!(cfg.committees.chair_bonus, 25);
        assert_eq!(cfg.committees.full_member_points, 100);
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[assiduity]\nhigh_threshold = 10\n",
        )
        .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, LegisError::ConfigParse(_)));
    }

    #[test]
    fn load_config_file_reads_single_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[expenses]\ntop_categories = 3\n").expect("config should write");

        let cfg = load_config_file(&path).expect("load should succeed");
        assert_eq!(cfg.expenses.top_categories, 3);

        let missing = load_config_file(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(LegisError::PathNotFound(_))));
    }
}
