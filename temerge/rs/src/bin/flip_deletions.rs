use clap::Parser;
use log::{error, Level};
use simple_logger::init_with_level;

use temerge::cli::FlipArgs;
use temerge::run_flip;

fn main() {
    init_with_level(Level::Info).unwrap();

    let config = FlipArgs::parse().config().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    if let Err(e) = run_flip(&config) {
        error!("{:?}", e);
        std::process::exit(1);
    }
}
