#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::LinkOpenerName;
use crate::domain::services::DEFAULT_PROMPT;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    LinkOpener,
    Prompt,
    ResponseDelay,
    SkipPercent,
    TickInterval,
    Title,
}

impl ConfigKey {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ConfigKey::ResponseDelay | ConfigKey::SkipPercent | ConfigKey::TickInterval
        )
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    /// Reads a numeric key, falling back to its default when unset.
    pub fn get_number(key: ConfigKey) -> Result<u64> {
        let mut val = Config::get(key);
        if val.is_empty() {
            val = Config::default(key);
        }

        match val.parse::<u64>() {
            Ok(num) => return Ok(num),
            Err(_) => bail!("Config key '{key}' expects a whole number, got '{val}'"),
        }
    }

    pub fn default_config_path() -> path::PathBuf {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| path::PathBuf::from("."));

        return base.join("folio/config.toml");
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::LinkOpener => LinkOpenerName::default().to_string(),
            ConfigKey::Prompt => DEFAULT_PROMPT.to_string(),
            ConfigKey::ResponseDelay => "100".to_string(),
            ConfigKey::SkipPercent => "10".to_string(),
            ConfigKey::TickInterval => "30".to_string(),
            ConfigKey::Title => "XdpSam@Portfolio".to_string(),

            // Special
            ConfigKey::ConfigFile => Config::default_config_path().to_string_lossy().to_string(),
        };

        return res;
    }

    fn validate(key: ConfigKey, val: &str, possible_values: &[String]) -> Result<()> {
        if !possible_values.is_empty() && !possible_values.contains(&val.to_string()) {
            bail!(format!(
                "config.toml has an invalid value for key '{key}': {val}\nPossible values are: {}",
                possible_values.join(", ")
            ));
        }

        if key.is_numeric() && val.parse::<u64>().is_err() {
            bail!(format!(
                "config.toml has an invalid value for key '{key}': {val}\nExpected a whole number"
            ));
        }

        if key == ConfigKey::SkipPercent && val.parse::<u64>().unwrap_or(0) > 100 {
            bail!(format!(
                "config.toml has an invalid value for key '{key}': {val}\nExpected a percentage between 0 and 100"
            ));
        }

        if key == ConfigKey::TickInterval && val.parse::<u64>().unwrap_or(1) == 0 {
            bail!(format!(
                "config.toml has an invalid value for key '{key}': {val}\nExpected at least 1 millisecond"
            ));
        }

        return Ok(());
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }
        Config::set(ConfigKey::ConfigFile, &config_file);

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    // Use clap value parsers to do validation.
                    let mut possible_values = vec![];
                    if let Some(arg) = cmd
                        .get_arguments()
                        .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                    {
                        if !arg.get_possible_values().is_empty() {
                            possible_values = arg
                                .get_possible_values()
                                .iter()
                                .map(|e| return e.get_name().to_string())
                                .collect::<Vec<String>>();
                        }
                    }

                    if let Some(val_int) = val.as_integer() {
                        let val_str = val_int.to_string();
                        Config::validate(key, &val_str, &possible_values)?;
                        Config::set(key, &val_str);
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        Config::validate(key, val_str, &possible_values)?;
                        Config::set(key, val_str);
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::validate(key, val, &[])?;
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            config_file = Config::get(ConfigKey::ConfigFile),
            link_opener = Config::get(ConfigKey::LinkOpener),
            tick_interval = Config::get(ConfigKey::TickInterval),
            response_delay = Config::get(ConfigKey::ResponseDelay),
            skip_percent = Config::get(ConfigKey::SkipPercent),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                if !arg.get_possible_values().is_empty() {
                    let possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name().to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    description = format!("{description} [possible values: {}]", possible_values);
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if key.is_numeric() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
