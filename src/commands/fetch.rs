use crate::core::aggregator;
use crate::core::system_info::{FetchOptions, HostProvider, MetricsProvider};
use crate::ui::presenter;
use anyhow::{Context, Result};
use clap::ArgMatches;

/// Build fetch options from the parsed command line
pub fn options_from(matches: &ArgMatches) -> FetchOptions {
    FetchOptions {
        show_private_ip: matches.get_flag("show-private-ip"),
        show_public_ip: matches.get_flag("show-public-ip"),
    }
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let options = options_from(matches);
    run(&HostProvider::new(), &options)
}

/// Gather, format and print one fetch from `provider`
pub fn run<P: MetricsProvider + ?Sized>(provider: &P, options: &FetchOptions) -> Result<()> {
    log::debug!("Fetching with {:?}", options);

    let now = chrono::Utc::now().timestamp();
    let list = aggregator::aggregate(provider, options, now, &mut std::io::stderr())
        .context("Failed to collect host information")?;

    presenter::print(&list);
    Ok(())
}
