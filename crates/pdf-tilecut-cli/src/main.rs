use anyhow::Result;
use clap::Parser;
use pdf_tilecut::{TileOptions, TileSize};
use std::io::{Read, Write};
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "pdftc",
    about = "Cut PDF pages into small printable tiles with registration marks",
    version
)]
struct Cli {
    /// Input PDF ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Output PDF ("-" for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Maximum tile size - a standard paper size (e.g. A5) or width x height
    /// dimensions with a unit (mm, cm, in, pt), e.g. "6cm x 12in"
    #[arg(long, default_value = "A4", value_parser = parse_tile_size)]
    tile_size: TileSize,

    /// Title to show on the margin of each tile (defaults to the input
    /// file name)
    #[arg(long)]
    title: Option<String>,

    /// Use full width/height trim marks
    #[arg(long)]
    long_trim_marks: bool,

    /// Hide the logo
    #[arg(long)]
    hide_logo: bool,

    /// Keep the uncompressed intermediate document and log verbosely
    #[arg(long)]
    debug: bool,

    /// Print tiling statistics without writing the output
    #[arg(long)]
    stats_only: bool,
}

fn parse_tile_size(value: &str) -> std::result::Result<TileSize, String> {
    value.parse().map_err(|e: pdf_tilecut::TileCutError| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.debug { "debug" } else { "warn" }),
    )
    .init();

    let options = TileOptions {
        tile_size: cli.tile_size,
        title: None, // resolved after the input name is known
        long_trim_marks: cli.long_trim_marks,
        hide_logo: cli.hide_logo,
        debug: cli.debug,
    };
    // Configuration problems abort before any input is read.
    options.validate()?;

    let (document, default_title) = if cli.input == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        (pdf_tilecut::load_pdf_bytes(&bytes)?, "stdin".to_string())
    } else {
        let path = Path::new(&cli.input);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| cli.input.clone());
        (pdf_tilecut::load_pdf(path).await?, name)
    };

    let options = TileOptions {
        title: Some(cli.title.unwrap_or(default_title)),
        ..options
    };

    let stats = pdf_tilecut::calculate_statistics(&document, &options)?;
    if cli.stats_only || cli.debug {
        eprintln!("Tiling statistics:");
        eprintln!("  Source pages: {}", stats.source_pages);
        if stats.skipped_pages > 0 {
            eprintln!("  Skipped pages: {}", stats.skipped_pages);
        }
        for (page, (cols, rows)) in stats.grids.iter().enumerate() {
            eprintln!("  Page {}: {} x {} tiles", page + 1, cols, rows);
        }
        eprintln!("  Output tiles: {}", stats.output_tiles);
    }
    if cli.stats_only {
        return Ok(());
    }

    let tiled = pdf_tilecut::tile_document(&document, &options).await?;

    if cli.debug {
        let kept = pdf_tilecut::save_debug_pdf(&tiled)?;
        log::info!("kept uncompressed intermediate at {}", kept.display());
    }

    if cli.output == "-" {
        let bytes = pdf_tilecut::save_pdf_bytes(tiled)?;
        std::io::stdout().write_all(&bytes)?;
    } else {
        pdf_tilecut::save_pdf(tiled, &cli.output).await?;
        println!("Tiled {} pages → {}", stats.source_pages, cli.output);
    }

    Ok(())
}
