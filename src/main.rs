use clap::Parser;
use pickprobe::{init_logging, run, Cli, OutputTarget};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = run(&cli, stdin.lock(), &mut stdout.lock())?;

    if let OutputTarget::File(path) = &summary.target {
        eprintln!(
            "Wrote {} probe point(s) to {}",
            summary.points,
            path.display()
        );
    }

    Ok(())
}
