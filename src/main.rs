use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use sketchcraft::models::StylizeConfig;
use sketchcraft::{pipeline, server};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sketchcraft", about = "Non-photorealistic image stylization engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default when no subcommand is given).
    Serve,
    /// Stylize a single file on disk and write the result to another.
    Render {
        /// Path to the input image.
        input: String,
        /// Path to write the stylized PNG to.
        output: String,
        #[arg(long, default_value = "line")]
        style: String,
        #[arg(long, default_value = "pencil")]
        art_style: String,
        #[arg(long, default_value = "line")]
        brush: String,
        #[arg(long, default_value_t = 1)]
        stroke: u32,
        #[arg(long, default_value_t = 6)]
        intensity: u32,
        #[arg(long, default_value_t = 0)]
        smoothing: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        colorize: bool,
        #[arg(long)]
        invert: bool,
        #[arg(long, default_value_t = 0)]
        contrast: i32,
        #[arg(long, default_value_t = 0)]
        saturation: i32,
        #[arg(long, default_value_t = 0)]
        hue_shift: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::Render {
            input,
            output,
            style,
            art_style,
            brush,
            stroke,
            intensity,
            smoothing,
            seed,
            colorize,
            invert,
            contrast,
            saturation,
            hue_shift,
        } => render_file(
            input, output, style, art_style, brush, stroke, intensity, smoothing, seed, colorize,
            invert, contrast, saturation, hue_shift,
        ),
    }
}

async fn serve() -> anyhow::Result<()> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5001);

    let app = server::build_router();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "starting sketchcraft server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn render_file(
    input: String,
    output: String,
    style: String,
    art_style: String,
    brush: String,
    stroke: u32,
    intensity: u32,
    smoothing: u32,
    seed: u64,
    colorize: bool,
    invert: bool,
    contrast: i32,
    saturation: i32,
    hue_shift: i32,
) -> anyhow::Result<()> {
    let mut fields = HashMap::new();
    fields.insert("style".to_string(), style);
    fields.insert("artStyle".to_string(), art_style);
    fields.insert("brush".to_string(), brush);
    fields.insert("stroke".to_string(), stroke.to_string());
    fields.insert("intensity".to_string(), intensity.to_string());
    fields.insert("smoothing".to_string(), smoothing.to_string());
    fields.insert("seed".to_string(), seed.to_string());
    fields.insert("colorize".to_string(), colorize.to_string());
    fields.insert("invert".to_string(), invert.to_string());
    fields.insert("contrast".to_string(), contrast.to_string());
    fields.insert("saturation".to_string(), saturation.to_string());
    fields.insert("hueShift".to_string(), hue_shift.to_string());

    let cfg = StylizeConfig::from_fields(&fields);
    let bytes = fs::read(&input)?;
    let img = pipeline::decode(&bytes)?;
    let png = pipeline::stylize(img, &cfg)?;
    fs::write(&output, png)?;

    tracing::info!(input, output, "rendered stylized image");
    Ok(())
}
