use std::io;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::LinkOpenerName;

pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn env_name(key: ConfigKey) -> String {
    format!("FOLIO_{}", key.to_string().to_uppercase().replace('-', "_"))
}

fn arg_for(key: ConfigKey, help: &str) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env_name(key))
        .num_args(1)
        .help(format!("{help} [default: {}]", Config::default(key)));
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_manpages() -> Command {
    return Command::new("manpages").about("Generates manpages");
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options")
        .subcommand_required(true)
        .subcommand(Command::new("default").about("Prints the default configuration file"))
        .subcommand(
            Command::new("create")
                .about("Writes the default configuration file to the config-file path"),
        );
}

pub fn build() -> Command {
    return Command::new("folio")
        .about("Portfolio terminal: browse Saurabh Wankhede's work from your shell")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_manpages())
        .subcommand(subcommand_config())
        .arg(arg_for(ConfigKey::ConfigFile, "Path to the configuration file."))
        .arg(
            arg_for(
                ConfigKey::LinkOpener,
                "How the github, linkedin, instagram and email commands open their links.",
            )
            .value_parser(PossibleValuesParser::new(LinkOpenerName::VARIANTS)),
        )
        .arg(arg_for(
            ConfigKey::Prompt,
            "Prompt shown before the input and echoed with every command.",
        ))
        .arg(arg_for(
            ConfigKey::ResponseDelay,
            "Milliseconds between running a command and the first character of its output.",
        ))
        .arg(arg_for(
            ConfigKey::SkipPercent,
            "Chance, in percent, that a typing tick hesitates. 0 types at a steady pace.",
        ))
        .arg(arg_for(
            ConfigKey::TickInterval,
            "Milliseconds between typing ticks. One character is typed per tick.",
        ))
        .arg(arg_for(ConfigKey::Title, "Title shown in the terminal header."))
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .env("FOLIO_LOG_LEVEL")
                .num_args(1)
                .default_value("info")
                .value_parser(PossibleValuesParser::new(LOG_LEVELS))
                .help("Log verbosity")
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .env("FOLIO_LOG_FILE")
                .num_args(1)
                .default_value("folio.log")
                .help("File receiving logs while the terminal UI owns the screen")
                .global(true),
        );
}

async fn create_config_file() -> Result<()> {
    let config_path = std::path::PathBuf::from(Config::get(ConfigKey::ConfigFile));
    if config_path.exists() {
        bail!(format!(
            "Config file already exists at {}",
            config_path.display()
        ));
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&config_path, Config::serialize_default(build()) + "\n").await?;
    println!("Created default config file at {}", config_path.display());

    return Ok(());
}

/// Runs any subcommand and loads configuration. Returns true when the
/// terminal UI should start.
pub async fn handle(matches: &ArgMatches) -> Result<bool> {
    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(shell) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                clap_complete::generate(shell, &mut app, "folio", &mut io::stdout());
            }
            return Ok(false);
        }
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("create", _)) => {
                    Config::load(build(), vec![matches]).await?;
                    create_config_file().await?;
                }
                Some(("default", _)) => {
                    println!("{}", Config::serialize_default(build()));
                }
                _ => {
                    subcommand_config().print_long_help()?;
                }
            }
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![matches]).await?;
        }
    }

    return Ok(true);
}
