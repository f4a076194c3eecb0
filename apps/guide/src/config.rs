use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use render::Variant;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory or http(s) URL holding npcs.json, props.json and gifts.json.
    pub data_root: String,
    pub output_dir: PathBuf,
    pub image_root: String,
    pub page_shell: Option<PathBuf>,
    pub variant: Variant,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_root: "data".into(),
            output_dir: "site".into(),
            image_root: "images".into(),
            page_shell: None,
            variant: Variant::Rich,
        }
    }
}

pub fn load_settings(config_path: &Path) -> Settings {
    let file = fs::read_to_string(config_path).ok();
    load_settings_with(file.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then the config file, then `APP__*` environment variables.
pub fn load_settings_with(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                for (key, value) in &file_cfg {
                    apply(&mut settings, key, value);
                }
            }
            Err(error) => warn!(%error, "ignoring unreadable config file"),
        }
    }

    for key in ["data_root", "output_dir", "image_root", "page_shell", "variant"] {
        let var = format!("APP__{}", key.to_ascii_uppercase());
        if let Some(value) = env(&var) {
            apply(&mut settings, key, &value);
        }
    }

    settings
}

fn apply(settings: &mut Settings, key: &str, value: &str) {
    match key {
        "data_root" => settings.data_root = value.to_string(),
        "output_dir" => settings.output_dir = PathBuf::from(value),
        "image_root" => settings.image_root = value.to_string(),
        "page_shell" if value.trim().is_empty() => settings.page_shell = None,
        "page_shell" => settings.page_shell = Some(PathBuf::from(value)),
        "variant" => match value.parse() {
            Ok(variant) => settings.variant = variant,
            Err(error) => warn!(%error, "keeping variant {}", settings.variant),
        },
        other => warn!(key = other, "unknown config key"),
    }
}

pub fn prepare_output_dir(output_dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "failed to create output directory '{}'",
            output_dir.display()
        )
    })?;
    Ok(output_dir.to_path_buf())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
