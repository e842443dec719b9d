use clap::Parser;
use log::{error, info, Level};
use simple_logger::init_with_level;

use temerge::cli::DeletionsArgs;
use temerge::run_deletions;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let config = DeletionsArgs::parse().config().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    run_deletions(&config).unwrap_or_else(|e| {
        error!("{:?}", e);
        std::process::exit(1);
    });

    info!("Elapsed time: {:?}", start.elapsed());
}
