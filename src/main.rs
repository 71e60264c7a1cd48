//! rTimecard main entrypoint.

use rtimecard::run;
use rtimecard::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::debug!(kind = e.kind(), "command failed");
        error(rtimecard::ui::messages::user_message(&e));
        std::process::exit(1);
    }
}
