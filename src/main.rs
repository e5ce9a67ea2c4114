use tracing::Level;

mod displays;
mod errors;
mod logs;
mod models;
mod scenario;
mod station;
mod utils;

fn main() {
    logs::logs_registry(Level::INFO);
    if let Err(err) = scenario::run_demo() {
        tracing::error!("{:?}", err);
        std::process::exit(1);
    }
}
