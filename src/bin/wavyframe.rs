use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wavyframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the borders of a document around an image and write a PNG.
    Render(RenderArgs),
    /// Print a border document with default borders.
    Defaults(DefaultsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Border document JSON.
    #[arg(long)]
    borders: PathBuf,

    /// Base image. A blank white canvas is used when omitted.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = wavyframe::DEFAULT_EXPORT_FILE_NAME)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DefaultsArgs {
    /// Number of default borders to include.
    #[arg(long, default_value_t = 1)]
    count: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Defaults(args) => cmd_defaults(args),
    }
}

fn read_document(path: &Path) -> anyhow::Result<wavyframe::BorderDocument> {
    wavyframe::BorderDocument::load(path)
        .with_context(|| format!("load border document '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.borders)?;
    let borders = doc.border_stack().context("validate borders")?;

    let mut session = match &args.image {
        Some(path) => {
            let bytes =
                std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
            wavyframe::EditorSession::with_image(&bytes, doc.editor_opts())
                .with_context(|| format!("import image '{}'", path.display()))?
        }
        None => wavyframe::EditorSession::new(doc.editor_opts()),
    };
    session.set_borders(borders).context("render borders")?;

    let stats = session.last_stats();
    if stats.skipped > 0 {
        eprintln!(
            "skipped {} border(s) that do not fit a {}px canvas",
            stats.skipped,
            doc.canvas_side
        );
    }

    session
        .write_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_defaults(args: DefaultsArgs) -> anyhow::Result<()> {
    let doc = wavyframe::BorderDocument::with_default_borders(args.count);
    println!("{}", doc.to_json_pretty()?);
    Ok(())
}
