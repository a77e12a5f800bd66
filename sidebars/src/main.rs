use std::process::ExitCode;

use sidenav::{Outcome, SiteWalker};

use crate::config::Config;

mod config;

pub const SITE_DIR: &str = "site";

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = Config::discover().and_then(|config| {
        log::debug!("updating sidebars in {}", config.site.display());
        SiteWalker::new(&config.catalog).process_with(&config.site, |document, outcome| {
            let name = &document.file_name;
            match outcome {
                Outcome::Updated => println!("  Updated: {name}"),
                Outcome::Unchanged => println!("  Unchanged: {name}"),
                Outcome::MissingRegion => println!("  WARNING: no sidebar found in {name}"),
            }
        })
    });

    match result {
        Ok(report) => {
            println!("\n{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
