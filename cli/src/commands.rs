pub mod scan;

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use portcheck_common::error::Error;

const AFTER_HELP: &str = "\
Targets:
  IPv4 address     Direct IPv4 target
  IPv6 address     Direct IPv6 target
  Domain name      Resolved to both IPv4 and IPv6 automatically

Examples:
  portcheck -p 80,443 example.com
  portcheck -p 80,443 1.1.1.1";

#[derive(Parser, Debug)]
#[command(name = "portcheck")]
#[command(about = "Checks which TCP and UDP ports of a host answer.")]
#[command(after_help = AFTER_HELP)]
pub struct CommandLine {
    /// IPv4 address, IPv6 address or domain name to scan
    pub target: Option<String>,

    /// Port numbers (comma-separated, e.g., 80,443,3306)
    #[arg(short = 'p', long = "port", value_name = "PORTS")]
    pub ports: Option<String>,

    /// Print diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What a validated command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Scan(ScanRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub target: String,
    pub ports: String,
    pub verbose: u8,
}

/// Parses and validates the raw arguments, program name included.
///
/// Running without any argument, or with `-h`, asks for help.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        return Ok(Invocation::Help);
    }

    let cli = match CommandLine::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(Invocation::Help);
        }
        Err(e) => return Err(Error::Usage(first_line(&e))),
    };

    let ports: String = match cli.ports {
        Some(ports) if !ports.is_empty() => ports,
        _ => {
            return Err(Error::Usage(
                "Port numbers are required. Use -p or --port option.".to_string(),
            ));
        }
    };

    let target: String = match cli.target {
        Some(target) if !target.is_empty() => target,
        _ => return Err(Error::Usage("Target is required.".to_string())),
    };

    Ok(Invocation::Scan(ScanRequest {
        target,
        ports,
        verbose: cli.verbose,
    }))
}

/// Usage text as shown by `-h`.
pub fn usage_text() -> String {
    CommandLine::command().render_help().to_string()
}

fn first_line(err: &clap::Error) -> String {
    let rendered: String = err.render().to_string();
    let line: &str = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
