use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Mutex;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

use themepak_install::{Category, InstallReport, Outcome, Reporter, ThemePackage};

use crate::glyphs::Glyphs;

const PB_STYLE: &str = "{spinner:.blue} {prefix:>10.cyan.bold} [{pos}/{len}] {wide_msg}";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    ProgressStyle::with_template(PB_STYLE)
        .ok()
        .map(|s| s.tick_chars(TICK))
});

/// Renders the pipeline's status events on the terminal.
pub struct ConsoleReporter {
    glyphs: Glyphs,
    assume_yes: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new(glyphs: Glyphs, assume_yes: bool) -> Self {
        Self {
            glyphs,
            assume_yes,
            bar: Mutex::new(None),
        }
    }

    fn with_bar(&self, total: usize, f: impl FnOnce(&ProgressBar)) {
        if let Ok(mut slot) = self.bar.lock() {
            let bar = slot.get_or_insert_with(|| {
                let bar = ProgressBar::new(total as u64);
                if let Some(template) = PB_TEMPLATE.clone() {
                    bar.set_style(template);
                }
                bar.set_prefix("installing");
                bar
            });
            f(bar);
        }
    }
}

impl Reporter for ConsoleReporter {
    fn found(&self, count: usize) {
        println!(
            "{}{} {}",
            self.glyphs.information,
            style("Found").blue(),
            style(format!("{count} components to install.")).blue()
        );
    }

    fn package(&self, package: &ThemePackage) {
        println!("====");
        println!(
            "{}",
            style("Ready to install the following package:").white()
        );
        println!("{}", style(&package.name).green().bold());
        println!("\tAuthor: {}", style(&package.author).green());
        println!("\tVersion: {}", style(&package.version).green());
        if let Some(description) = &package.description {
            println!("\tDescription: {}", style(description).green());
        }
        if let Some(up_to_date) = package.up_to_date {
            let answer = if up_to_date { "Yes" } else { "No" };
            println!("\tUp to date?: {}", style(answer).green());
        }
    }

    fn confirm(&self, _package: &ThemePackage) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{}", style("Continue? [Y/n] ").white().bold());
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        let answer = answer.trim_start();
        answer.starts_with('y') || answer.starts_with('Y')
    }

    fn progress(&self, index: usize, total: usize, category: Category, dest: &Path) {
        self.with_bar(total, |bar| {
            bar.set_position(index as u64);
            bar.set_message(format!("“{}” -> “{}”", category, dest.display()));
        });
    }

    fn outcome(&self, category: Category, outcome: Outcome) {
        let line = match outcome {
            Outcome::Succeeded => format!("{}installed “{category}”", self.glyphs.success),
            Outcome::SkippedPermission => format!(
                "{}skipping “{category}” (no permission to write its destination)",
                self.glyphs.warning
            ),
        };
        self.with_bar(0, |bar| {
            bar.println(line);
            bar.inc(1);
        });
    }

    fn summary(&self, report: &InstallReport) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
        println!("\n====");
        println!(
            "{}",
            style(format!(
                "{}Done. Go to System Settings to apply your new themes.",
                self.glyphs.success
            ))
            .green()
            .bold()
        );
        println!(
            "\t{}",
            style(format!(
                "{}: {}/{}",
                self.glyphs.success, report.succeeded, report.total
            ))
            .green()
        );
        let skipped_line = format!("{}: {}/{}", self.glyphs.warning, report.skipped, report.total);
        if report.skipped > 0 {
            println!("\t{}", style(skipped_line).yellow().bold());
        } else {
            println!("\t{}", style(skipped_line).yellow());
        }
    }
}
