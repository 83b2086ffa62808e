//! Loading of personal or sample text data.
//!
//! Every `*.yml` file in the user folder (except `config.yml`) contributes
//! text groups: each top-level mapping key becomes a group name, its value a
//! list of texts. Any load problem is logged and the file skipped; when
//! nothing usable is found the embedded sample data is used so the app never
//! starts empty.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

/// Parse one YAML document into ordered (group name, texts) pairs.
pub fn groups_from_yaml(text: &str) -> anyhow::Result<Vec<(String, Vec<String>)>> {
    let value: serde_yaml::Value = serde_yaml::from_str(text).context("invalid YAML")?;
    let mapping = value
        .as_mapping()
        .context("expected a mapping of group names to text lists")?;
    let mut groups = Vec::new();
    for (key, val) in mapping {
        let name = key
            .as_str()
            .context("group names must be strings")?
            .to_string();
        let seq = val
            .as_sequence()
            .with_context(|| format!("group '{name}' must hold a list of texts"))?;
        let texts = seq
            .iter()
            .map(|item| {
                item.as_str()
                    .map(String::from)
                    .with_context(|| format!("group '{name}' holds a non-string entry"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        groups.push((name, texts));
    }
    Ok(groups)
}

/// Load all user text groups, falling back to the samples.
pub fn load_groups(user_folder: &Path) -> Vec<(String, Vec<String>)> {
    let mut groups = Vec::new();
    if let Ok(entries) = fs::read_dir(user_folder) {
        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension().and_then(|ext| ext.to_str()) == Some("yml")
                    && path.file_name().and_then(|name| name.to_str()) != Some("config.yml")
            })
            .collect();
        paths.sort();
        for path in paths {
            match fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|text| groups_from_yaml(&text))
            {
                Ok(loaded) => groups.extend(loaded),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Cannot load text data file");
                }
            }
        }
    }
    if groups.is_empty() {
        info!("No user text data found, using the sample data");
        return sample_groups();
    }
    groups
}

/// The embedded sample text data, used when the user has none of their own.
pub fn sample_groups() -> Vec<(String, Vec<String>)> {
    vec![
        (
            "samples".to_string(),
            vec![
                "ÁRVÍZTŰRŐ TÜKÖRFÚRÓGÉP".to_string(),
                "árvíztűrő tükörfúrógép".to_string(),
                "Öt szép szűzlány őrült írót nyúz.".to_string(),
            ],
        ),
        (
            "sniplets".to_string(),
            vec!["class".to_string(), "def".to_string(), "main".to_string()],
        ),
        (
            "my data".to_string(),
            vec![
                "BigBirdCode".to_string(),
                "Hungary".to_string(),
                "Budapest".to_string(),
            ],
        ),
    ]
}
