mod cli;
mod config;
mod core;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, OutputArgs, ScoreArgs};
use config::Config;
use crate::core::RawInputs;
use crate::core::report::{self, FinalReport, JsonReport};
use crate::core::session::{self, Command, CommandError, Session};
use std::io::{self, BufRead};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Score(args) => run_score(args),
        Commands::Watch(args) => run_watch(args),
        Commands::Tips => {
            report::print_tips();
            Ok(0)
        }
        Commands::Init(args) => {
            if args.config.is_some() {
                log::warn!("--config is ignored by `ecolar init`; writing ./ecolar.toml");
            }

            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn load(args: &OutputArgs) -> Result<(Config, bool)> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    match &loaded.source {
        Some(path) => log::debug!("loaded config from {}", path.display()),
        None => log::debug!("no config file found, using defaults"),
    }

    if !loaded.config.general.color {
        colored::control::set_override(false);
    }

    let output_json = args.json || loaded.config.general.json;
    Ok((loaded.config, output_json))
}

fn run_score(args: ScoreArgs) -> Result<i32> {
    let (mut cfg, output_json) = load(&args.output)?;
    if args.tips {
        cfg.display.show_tips = true;
    }

    let inputs = RawInputs {
        water: args.water,
        energy: args.energy,
        gas: args.gas,
    };
    let report = core::evaluate_reading(inputs.reading(), &cfg);
    emit(&report, &cfg, output_json)?;

    if report.exit.is_ok() { Ok(0) } else { Ok(1) }
}

fn run_watch(args: OutputArgs) -> Result<i32> {
    let (cfg, output_json) = load(&args)?;
    let mut session = Session::new();

    if !output_json {
        println!("enter `<water|energy|gas> <value>`, `reset`, `show` or `quit`");
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed reading stdin")?;
        match session::parse_command(&line) {
            Ok(Command::Set(metric, raw)) => {
                let stored = session.set(metric, &raw);
                log::debug!("{} set to {:?}", metric.as_str(), stored);
            }
            Ok(Command::Clear(metric)) => session.clear(metric),
            Ok(Command::Reset) => session.reset(),
            Ok(Command::Show) => {}
            Ok(Command::Quit) => break,
            Err(CommandError::Empty) => continue,
            Err(CommandError::Unknown(word)) => {
                log::warn!(
                    "unrecognized input {:?}; expected water, energy, gas, reset, show or quit",
                    word
                );
                continue;
            }
        }

        let report = core::build_report(session.reading(), session.evaluate(), &cfg);
        if output_json {
            // one document per line so the stream can be consumed incrementally
            println!("{}", serde_json::to_string(&JsonReport::from(&report))?);
            continue;
        }

        // the summary only makes sense once something has been typed
        let mut view = cfg.clone();
        view.display.show_summary &= session.has_data();
        report::print_human(&report, &view);
        println!();
    }

    Ok(0)
}

fn emit(report: &FinalReport, cfg: &Config, output_json: bool) -> Result<()> {
    if output_json {
        let json_report = JsonReport::from(report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        report::print_human(report, cfg);
    }
    Ok(())
}
