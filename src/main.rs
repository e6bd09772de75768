use anyhow::{Context, Result};
use clap::{crate_description, crate_version, App as Cli, Arg};
use select_field_builder::{app::App, config::Config, ui::Theme};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("select-field-builder")
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("endpoint")
                .short("e")
                .long("endpoint")
                .value_name("URL")
                .help("Override the submission endpoint for this run")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Override the color theme for this run")
                .possible_values(&["tokyo-night", "rose-pine-dawn", "dracula"])
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config
        .load(matches.value_of("config"))
        .context("Failed to load configuration")?;
    if let Some(endpoint) = matches.value_of("endpoint") {
        config.endpoint = endpoint.to_string();
    }
    if let Some(theme) = matches.value_of("theme") {
        config.theme_name = theme.to_string();
    }
    config
        .theme()
        .with_context(|| format!("Available themes: {}", Theme::available_themes().join(", ")))?;

    App::start(config).await?;
    Ok(())
}
