//! Voucher Console - interactive voucher issuing tool

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voucher_console::config::AppConfig;
use voucher_console::console::StdConsole;
use voucher_console::controller::VoucherController;
use voucher_console::repository::InMemoryVoucherRepository;
use voucher_console::service::{SystemClock, VoucherService};
use voucher_console::view::ConsoleView;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    // stdout belongs to the menu
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    tracing::info!(list_format = ?config.list_format, "voucher console starting");

    let view = ConsoleView::new(StdConsole::stdio(), config.list_format);
    let service = VoucherService::new(InMemoryVoucherRepository::new(), SystemClock);
    VoucherController::new(view, service).run()?;
    Ok(())
}
