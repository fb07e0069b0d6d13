use clap::Parser;
use locoroute::app::LocorouteApp;

fn main() {
    env_logger::init();
    let args = LocorouteApp::parse();
    if let Err(e) = args.run() {
        log::error!("locoroute failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
