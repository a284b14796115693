use std::env;
use std::io;
use std::path;
use std::process;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use dialoguer::Select;
use strum::IntoEnumIterator;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AssessmentForm;
use crate::domain::models::BackendBox;
use crate::domain::models::DsaSkill;
use crate::domain::models::Mode;
use crate::domain::models::Page;
use crate::domain::models::SUBMIT_BUSY_LABEL;
use crate::domain::services::actions::help_text;
use crate::domain::services::ModeSelector;
use crate::domain::services::ReportView;
use crate::domain::services::Submitter;
use crate::infrastructure::backends::HttpBackend;

/// Directory the JSON debug log is written to when `RUST_LOG` mentions placify.
pub fn debug_log_dir() -> String {
    return env::var("PLACIFY_LOG_DIR").unwrap_or_else(|_| {
        return dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join("placify")
            .to_string_lossy()
            .to_string();
    });
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn prompt_skill() -> Result<Option<DsaSkill>> {
    let skills = DsaSkill::iter().collect::<Vec<DsaSkill>>();
    let labels = skills
        .iter()
        .map(|skill| return skill.label())
        .collect::<Vec<&str>>();

    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("How would you rate your DSA skills?")
        .items(&labels)
        .interact_opt()?;

    return Ok(idx.and_then(|idx| return skills.get(idx).copied()));
}

fn prompt_project() -> Result<String> {
    let text = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Describe a project you built")
        .allow_empty(true)
        .interact_text()?;

    return Ok(text);
}

async fn run_assessment(matches: &ArgMatches) -> Result<()> {
    let mut page = Page::new(&Config::sections()?);
    let selection =
        ModeSelector::select(&Config::get(ConfigKey::Mode), Mode::default(), &mut page);

    let dsa_skill = match matches.get_one::<String>("dsa-skill") {
        Some(skill) => DsaSkill::parse(skill),
        None => prompt_skill()?,
    };

    let project = match matches.get_one::<String>("project") {
        Some(project) => project.to_string(),
        None => prompt_project()?,
    };

    let form = AssessmentForm::new(dsa_skill, &project);
    let backend: BackendBox = Box::<HttpBackend>::default();

    let quiet = matches.get_flag("json");
    let mode_title = page.mode_title.to_string();

    let mut submitter = Submitter::default();
    let payload = submitter
        .submit_with_progress(&backend, selection, &form, &mut page, |_| {
            if !quiet {
                eprintln!("{}", Paint::cyan(&mode_title).bold());
                eprintln!("{}", Paint::new(SUBMIT_BUSY_LABEL).dimmed());
            }
        })
        .await;

    let mut failed = false;
    while let Some(alert) = page.take_alert() {
        eprintln!("{}", Paint::red(alert));
        failed = true;
    }
    if failed {
        process::exit(1);
    }

    if let Some(payload) = payload {
        if matches.get_flag("json") {
            println!("{}", serde_json::to_string_pretty(payload.as_json())?);
        } else {
            let api_url = Config::get(ConfigKey::ApiURL);
            println!(
                "{}",
                ReportView::new(&page.report, &api_url).as_plain_text()
            );
        }
    }

    return Ok(());
}

fn subcommand_assess() -> Command {
    return Command::new("assess")
        .about("Submit a single assessment and print the report. Omitted values are prompted for interactively.")
        .arg(
            Arg::new("dsa-skill")
                .short('s')
                .long("dsa-skill")
                .help("Your DSA proficiency.")
                .num_args(1)
                .value_parser(PossibleValuesParser::new(DsaSkill::VARIANTS)),
        )
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .help("Description of a project you built.")
                .num_args(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the raw report JSON instead of the formatted report.")
                .action(ArgAction::SetTrue),
        );
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Placify")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Placify with environment variable RUST_LOG=placify")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

pub fn build() -> Command {
    let hotkeys_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:") {
                return Paint::new(format!("UI {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nBuilt: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_BUILD_DATE")
    );

    return Command::new("placify")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(hotkeys_text)
        .arg_required_else_help(false)
        .subcommand(Command::new("start").about("Start the interactive assessment UI. This is the default command."))
        .subcommand(subcommand_assess())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .short('u')
                .long(ConfigKey::ApiURL.to_string())
                .env("PLACIFY_API_URL")
                .num_args(1)
                .help(format!("Base URL of the assessment API. [default: {}]", Config::default(ConfigKey::ApiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("PLACIFY_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Mode.to_string())
                .short('m')
                .long(ConfigKey::Mode.to_string())
                .env("PLACIFY_MODE")
                .num_args(1)
                .help(format!("Assessment mode used until one is picked. [default: {}]", Config::default(ConfigKey::Mode)))
                .value_parser(PossibleValuesParser::new(Mode::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Sections.to_string())
                .long(ConfigKey::Sections.to_string())
                .env("PLACIFY_SECTIONS")
                .num_args(1)
                .help(format!("Comma separated report sections to display. [default: {}]", Config::default(ConfigKey::Sections)))
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = path::PathBuf::from(debug_log_dir()).join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    println!("{}", ConfigKey::VARIANTS.join("\n"));
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("assess", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            run_assessment(subcmd_matches).await?;
            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        Some(("start", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
