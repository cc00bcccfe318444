#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use cluesheet::{
    init_logging, BoardVariant, Edition, InputSource, RenderOptions, ScriptedInput, Session,
    Sheet, StdinInput,
};

#[derive(Parser)]
#[command(author, version, about = "CLUE deduction sheet for the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Sheet rules: classic (X / circle) or extended (X / ? / circle, name highlights).
    #[arg(long, default_value = "extended")]
    edition: Edition,
    /// Start on this board (mansion or boardwalk) instead of the picker.
    #[arg(long)]
    variant: Option<BoardVariant>,
    /// Read commands from a file instead of the terminal.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let edition = cli.edition;
    let mut sheet = Sheet::new(edition);
    if let Some(variant) = cli.variant {
        sheet.select_variant(variant);
    }
    log::info!("starting {} sheet", edition);

    let input: Box<dyn InputSource> = match &cli.script {
        Some(path) => {
            log::info!("reading commands from {}", path.display());
            Box::new(ScriptedInput::from_file(path).await?)
        }
        None => {
            println!("Type 'help' for commands.");
            Box::new(StdinInput::new())
        }
    };
    let render = RenderOptions {
        color: !cli.no_color,
    };

    let mut session = Session::new(sheet, input, render);
    session.run().await?;
    Ok(())
}
