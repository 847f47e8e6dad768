use clap::Parser;
use ip_subnet_relationship::config::Config;
use ip_subnet_relationship::logging::init_logging;
use ip_subnet_relationship::output::print_summary;
use ip_subnet_relationship::run;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    init_logging(config.log_level())?;
    //
    log::info!("#Start main()");

    let summary = run(&config)?;
    print_summary(&summary);

    Ok(())
}
