use clap::Parser;
use log::{error, info, Level};
use simple_logger::init_with_level;

use temerge::cli::InsertionsArgs;
use temerge::run_insertions;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args = InsertionsArgs::parse();
    let config = args.config().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    run_insertions(&config).unwrap_or_else(|e| {
        error!("{:?}", e);
        std::process::exit(1);
    });

    info!("Elapsed time: {:?}", start.elapsed());
}
