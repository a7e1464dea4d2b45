use clap::Parser; // for cli
use promo_gate::config::Args;
use promo_gate::{Result, server, telemetry};

// this is main async function with tokio
#[tokio::main]
async fn main() -> Result<()> {
    // parse cli arguments, bad values exit here before anything binds
    let args = Args::parse();
    telemetry::init_tracing(&args.log_level)?;

    server::run(args).await
}
