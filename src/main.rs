mod app;
mod charts;
mod cli;
mod color;
mod data;
mod state;
mod store;
mod ui;

use app::DashboardApp;
use clap::Parser;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let args = cli::Args::parse();

    // A dataset that cannot be loaded is fatal: report it plainly and exit.
    let dataset = match args
        .delimiter_byte()
        .and_then(|delimiter| store::init(&args.path, delimiter))
    {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(dataset, args.show_days_listed);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "US Vehicle Sales Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
}
