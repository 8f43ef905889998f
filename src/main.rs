#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Console Squares: claim cells, complete a square to win")]
#[cfg(feature = "std")]
struct Cli {
    /// Board size of the initial game (3-20); GAME can change it later.
    #[arg(long, default_value_t = squares::DEFAULT_BOARD_SIZE)]
    size: usize,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    squares::init_logging();
    let session = squares::Session::new(cli.size).map_err(|e| anyhow::anyhow!(e))?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    squares::run(stdin.lock(), stdout.lock(), session)?;
    Ok(())
}
