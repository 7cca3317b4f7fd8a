//! `goaltrack` - CLI for goaltrack
//!
//! This binary serves goal pages over HTTP and can run the page loaders
//! directly from the terminal.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use goaltrack::cli::{Cli, Command, ConfigCommand, GoalsCommand, ServeCommand};
use goaltrack::loaders::{self, SlugMode};
use goaltrack::{init_logging, server, Catalog, Config, Goal};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // Validation checks its own file; a broken default config mustn't block it
    if let Command::Config(ConfigCommand::Validate { file }) = cli.command {
        return handle_validate(file.or(cli.config));
    }

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Serve(serve_cmd) => handle_serve(config, serve_cmd),
        Command::Goals(goals_cmd) => handle_goals(&config, goals_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_serve(mut config: Config, cmd: ServeCommand) -> anyhow::Result<()> {
    config.apply_serve_overrides(cmd.bind, cmd.slug_mode.map(SlugMode::from))?;

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime.block_on(server::run(&config))?;
    Ok(())
}

fn handle_goals(config: &Config, cmd: GoalsCommand) -> anyhow::Result<()> {
    let catalog = Catalog::load(config.data.goals_path.as_deref())?;

    match cmd {
        GoalsCommand::Home { json } => {
            let page = loaders::load_home(&catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                for goal in &page.goals {
                    print_goal(goal);
                    println!();
                }
            }
        }
        GoalsCommand::List { json } => {
            let page = loaders::load_goal_list(&catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                println!(
                    "{:<4} {:<24} {:<12} {:<12} {:>9}",
                    "ID", "TITLE", "START", "END", "HRS/WEEK"
                );
                for goal in &page.goals_list {
                    println!(
                        "{:<4} {:<24} {:<12} {:<12} {:>9}",
                        goal.id,
                        goal.title,
                        goal.start_date.as_deref().unwrap_or("-"),
                        goal.end_date.as_deref().unwrap_or("-"),
                        goal.hours_invested_per_week
                    );
                }
            }
        }
        GoalsCommand::Show { slug, by, json } => {
            let mode = config.slug_mode_or(by.map(SlugMode::from));
            let page = loaders::load_goal(&catalog, mode, &slug)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                print_goal(&page.goal);
            }
        }
    }
    Ok(())
}

fn print_goal(goal: &Goal) {
    println!("#{} {}", goal.id, goal.title);
    println!("  Due:           {}", goal.due_date);
    println!("  Hours/week:    {}", goal.hours_per_week);
    println!("  Starting:      {}", goal.starting_time);
    println!("  Progress:      {}%", goal.progress);
    if let Some(schedule) = &goal.schedule {
        println!(
            "  Schedule:      {} to {} ({})",
            schedule.start_date, schedule.end_date, schedule.frequency
        );
    }
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Bind address:   {}", config.server.bind_addr);
                println!();
                println!("[Routes]");
                println!("  Slug mode:      {}", config.routes.slug_mode);
                println!();
                println!("[Data]");
                match &config.data.goals_path {
                    Some(path) => println!("  Goals file:     {}", path.display()),
                    None => println!("  Goals file:     (built-in)"),
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => handle_validate(file)?,
    }
    Ok(())
}

fn handle_validate(file: Option<PathBuf>) -> anyhow::Result<()> {
    let path = file.unwrap_or_else(Config::default_config_path);
    println!("Validating configuration: {}", path.display());
    Config::load_file(&path)
        .with_context(|| format!("configuration {} is invalid", path.display()))?;
    println!("Configuration is valid.");
    Ok(())
}
