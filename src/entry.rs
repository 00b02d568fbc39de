//! Startup path for the load generator binary.
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::args::GeneratorArgs;
use crate::error::AppResult;
use crate::http::{Dispatcher, REQUEST_TIMEOUT, RateController};
use crate::metrics::MetricsRecorder;
use crate::pool::ProxyPool;
use crate::service;

/// Parse configuration, build the runtime, and run until terminated.
///
/// # Errors
///
/// Returns an error when startup fails; the steady-state loop only ends with
/// the process.
pub fn run() -> AppResult<()> {
    let args = GeneratorArgs::parse();
    crate::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args))
}

async fn run_async(args: &GeneratorArgs) -> AppResult<()> {
    let pool = ProxyPool::parse(&args.proxy_config);
    let destinations = args.destination_list();
    let recorder = Arc::new(MetricsRecorder::new()?);

    let router = service::metrics_router(Arc::clone(&recorder)).merge(service::status_router());
    let server = tokio::spawn(service::serve(router, args.metrics_port));
    info!("Started Prometheus metrics server on port {}", args.metrics_port);

    info!(
        "Starting load generator with {} proxies and {} destinations",
        pool.len(),
        destinations.len()
    );
    let dispatcher = Arc::new(Dispatcher::new(&pool, recorder, REQUEST_TIMEOUT));
    let controller = RateController::new(dispatcher, destinations, args.request_rate);

    tokio::select! {
        result = server => result??,
        () = controller.run() => {}
    }

    Ok(())
}
