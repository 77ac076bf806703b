use bike_qr::utils::logger;
use bike_qr::{AppError, BikeService, CliArgs};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting bike-qr");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let service = match args.load_config().and_then(|config| BikeService::from_config(&config)) {
        Ok(service) => service,
        Err(e) => exit_with(e),
    };

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - server will not be started");
        match service.dry_run_json() {
            Ok(report) => println!("{}", report),
            Err(e) => exit_with(e),
        }
        return Ok(());
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutting down");
    };

    if let Err(e) = service.run(shutdown).await {
        exit_with(e);
    }

    Ok(())
}

fn exit_with(e: AppError) -> ! {
    tracing::error!(
        "❌ bike-qr failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code())
}
