use clap::Parser;
use treedump::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    // Option and loader diagnostics go to stderr through this bridge.
    treedump::debug::init_log_bridge(cli.debug_level());
    log::info!("Starting treedump {}", treedump::VERSION);

    let mut stdout = std::io::stdout().lock();
    let code = match cli::run(&cli, &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("treedump: error: {e:#}");
            1
        }
    };
    drop(stdout);

    if code != 0 {
        std::process::exit(code);
    }
}
