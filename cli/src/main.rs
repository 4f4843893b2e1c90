mod commands;
mod terminal;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use commands::{Invocation, scan};
use portcheck_common::config::Config;
use portcheck_core::network::SocketProber;
use portcheck_core::scanner::resolver::SystemLookup;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> ExitCode {
    let start_time: Instant = Instant::now();
    let mut stdout = io::stdout();

    let request = match commands::parse_invocation(std::env::args_os()) {
        Ok(Invocation::Help) => {
            let _ = print::usage(&mut stdout);
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Scan(request)) => request,
        Err(e) => {
            let _ = print::failure(&mut stdout, &e.into());
            return ExitCode::FAILURE;
        }
    };

    let cfg = Config::from_verbosity(request.verbose);
    logging::init_logging(&cfg);

    let prober = Arc::new(SocketProber::from_config(&cfg));

    match scan::scan(&request, &SystemLookup, prober, &mut stdout).await {
        Ok(()) => {
            let _ = print::elapsed(&mut io::stderr(), start_time.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = print::failure(&mut stdout, &e);
            ExitCode::FAILURE
        }
    }
}
