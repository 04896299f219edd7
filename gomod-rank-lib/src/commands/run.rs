//! Command dispatch logic for gomod-rank

use super::{RankArgs, rank_dependencies};
use crate::{Host, Result};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use ohno::app_err;
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "gomod-rank", version, author, long_about = None)]
#[command(about = "Rank the GitHub repositories behind a Go module's dependencies")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    rank: RankArgs,
}

/// Parse command-line arguments and run the tool
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if argument parsing fails or if any startup condition is not met
/// (missing token, unreadable manifest, invalid configuration). Failures to resolve
/// individual repositories are logged and never returned here.
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let rendered = e.render().ansi().to_string();
            if e.use_stderr() {
                let _ = write!(host.error(), "{rendered}");
                host.exit(e.exit_code());
                return Err(app_err!("invalid command-line arguments"));
            }

            // --help and --version
            let _ = write!(host.output(), "{rendered}");
            host.exit(e.exit_code());
            return Ok(());
        }
    };

    rank_dependencies(host, &cli.rank).await
}
