use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::Path;

use authdesk::cli::{Cli, Commands};
use authdesk::config;
use authdesk::reporter::Reporter;
use authdesk::resolve;

/// Load the config and apply a `--template-dir` override.
fn load_reporter(config_path: Option<&Path>, template_dir: Option<&Path>) -> Result<Reporter> {
    let mut config = config::resolve_config(config_path)?;
    if let Some(dir) = template_dir {
        config.template_dir = resolve::resolve_against(&std::env::current_dir()?, dir);
    }
    Ok(Reporter::new(config))
}

fn main() -> Result<()> {
    let Cli {
        config: config_path,
        template_dir,
        verbosity,
        command,
    } = Cli::parse();

    authdesk::logging::init_cli_logging(&verbosity, "authdesk=info")?;

    let load = || load_reporter(config_path.as_deref(), template_dir.as_deref());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command.unwrap_or(Commands::Report) {
        Commands::Init { path, force } => {
            authdesk::init::run(&path, force)?;
        }
        Commands::Report => load()?.run(&mut out)?,
        Commands::Settings => load()?.report_desired_settings(&mut out)?,
        Commands::Templates { strict } => {
            let not_found = load()?.report_template_inventory(&mut out)?;
            if strict && not_found > 0 {
                out.flush()?;
                eprintln!("{} template(s) not found", not_found);
                std::process::exit(1);
            }
        }
        Commands::Checklist => load()?.print_closing_checklist(&mut out)?,
        Commands::Show { name } => authdesk::show::run(load()?.config(), &name, &mut out)?,
        Commands::List => authdesk::list::run(load()?.config(), &mut out)?,
    }
    out.flush()?;
    Ok(())
}
