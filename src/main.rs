mod app;
mod artwork;
mod audio;
mod config;
mod library;
mod mpris;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Quiet unless RUST_LOG says otherwise; the terminal belongs to the UI.
    env_logger::init();

    runtime::run()
}
