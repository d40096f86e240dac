use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("richfetch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A minimal and colorful system fetch utility")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show-public-ip")
                .long("show-public-ip")
                .help("Show public IP address (queries an external lookup service)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show-private-ip")
                .long("show-private-ip")
                .help("Show private IP address")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    richfetch::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        return richfetch::commands::version();
    }

    richfetch::commands::fetch(&matches)
}
