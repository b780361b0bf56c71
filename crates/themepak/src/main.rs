use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::debug;

use themepak_install::{InstallPipeline, Locations, PipelineOutcome};

mod banner;
mod cli;
mod glyphs;
mod report;

use cli::Cli;
use glyphs::Glyphs;
use report::ConsoleReporter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let glyphs = Glyphs::detect();

    println!("{}", style(banner::wordmark()).green().bold());

    match run(&cli, glyphs) {
        Ok(code) => code,
        Err(err) => {
            render_error(glyphs, &err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, glyphs: Glyphs) -> anyhow::Result<ExitCode> {
    let locations = Locations::new(cli.scope(), cli.location_options())
        .context("resolving install destinations")?;
    let reporter = ConsoleReporter::new(glyphs, cli.yes);

    println!(
        "{}",
        style(format!("Extracting package {}...", cli.package.display())).dim()
    );
    debug!(package = %cli.package.display(), scope = %cli.scope(), "starting install run");

    let outcome = InstallPipeline::new(locations, &reporter).run(&cli.package)?;

    match outcome {
        PipelineOutcome::NoThemes => {
            println!(
                "{}{}",
                glyphs.warning,
                style("WARNING!").yellow().bold()
            );
            println!(
                "{}",
                style(format!(
                    "\u{201c}{}\u{201d} doesn't contain any themes to be installed. There is nothing to do.",
                    cli.package.display()
                ))
                .yellow()
            );
            println!(
                "{}{}",
                glyphs.information,
                style("This is probably a mistake; show this to whoever maintains the package.")
                    .blue()
                    .bold()
            );
        }
        PipelineOutcome::Declined(_) => {
            println!("{}", style("Abort.").red().bold());
        }
        PipelineOutcome::Installed(package, report) => {
            debug!(
                name = %package.name,
                total = report.total,
                succeeded = report.succeeded,
                skipped = report.skipped,
                "install run finished"
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn render_error(glyphs: Glyphs, err: &anyhow::Error) {
    eprintln!("{}{}", glyphs.error, style("ERROR!").red().bold());
    for cause in err.chain() {
        eprintln!("{}", style(cause).magenta());
    }
    if let Some(advice) = advice_for(err) {
        eprintln!("{}{}", glyphs.information, style(advice).blue().bold());
    }
}

fn advice_for(err: &anyhow::Error) -> Option<&'static str> {
    use themepak_archive::Error as ArchiveError;
    use themepak_install::Error as InstallError;

    let install_err = err.downcast_ref::<InstallError>()?;
    match install_err {
        InstallError::MissingMetadata { .. }
        | InstallError::MalformedMetadata { .. }
        | InstallError::MissingRequiredField { .. } => {
            Some("Show this error to whoever maintains the package.")
        }
        InstallError::Archive(archive_err) => match archive_err {
            ArchiveError::AbsolutePath { .. }
            | ArchiveError::PathEscape { .. }
            | ArchiveError::SpecialFile { .. }
            | ArchiveError::AbsoluteLinkTarget { .. }
            | ArchiveError::LinkEscape { .. } => Some(
                "This package tries to write outside its install directories and is likely \
                 malicious. Report it to the maintainers.",
            ),
            ArchiveError::UnsupportedFormat | ArchiveError::Corrupted => {
                Some("The package may be damaged; try downloading it again.")
            }
            _ => None,
        },
        _ => None,
    }
}
