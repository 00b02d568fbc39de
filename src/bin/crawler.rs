use clap::Parser;
use tracing::info;

use proxyload::args::CrawlerArgs;
use proxyload::crawler::Crawler;
use proxyload::error::AppResult;
use proxyload::pool::ProxyPool;
use proxyload::{logger, service};

fn main() -> AppResult<()> {
    let args = CrawlerArgs::parse();
    logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args))
}

async fn run_async(args: &CrawlerArgs) -> AppResult<()> {
    let pool = ProxyPool::parse(&args.proxy_config);
    let crawler = Crawler::new(&pool);

    info!("Started crawler pod with {} proxies", pool.len());

    let crawl = tokio::spawn(crawler.run());

    tokio::select! {
        result = service::serve(service::status_router(), args.port) => result?,
        result = crawl => result?,
    }

    Ok(())
}
