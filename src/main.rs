use anyhow::Result;
use clap::Parser;
use logo_recolor::logo_recolor::{
    recolor_logo, Args as RecolorArgs, GLOW_BRIGHTNESS, GLOW_SIGMA, WHITE_THRESHOLD,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "logo-recolor",
    about = "Recolor a logo with a blue gradient, make its white background transparent and add a glow"
)]
struct Args {
    /// Path to the source logo (WebP, PNG or any other format the image crate decodes).
    #[clap(value_name = "INPUT", default_value = "logo.webp")]
    input: PathBuf,

    /// Output file. The extension picks the encoder (.webp or .png).
    #[clap(short, long, value_name = "FILE", default_value = "logo_updated.webp")]
    output: PathBuf,

    /// Gradient color at the top of the logo (CSS color format)
    #[clap(long, default_value = "#005b9f")]
    primary: String,

    /// Gradient color towards the bottom of the logo (CSS color format)
    #[clap(long, default_value = "#00b0ff")]
    secondary: String,

    /// Pixels with red, green and blue all above this value become transparent
    #[clap(long, default_value_t = WHITE_THRESHOLD)]
    white_threshold: u8,

    /// Standard deviation of the glow blur in pixels
    #[clap(long, default_value_t = GLOW_SIGMA)]
    glow_sigma: f32,

    /// Brightness multiplier of the glow layer
    #[clap(long, default_value_t = GLOW_BRIGHTNESS)]
    glow_brightness: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    recolor_logo(RecolorArgs {
        input: args.input,
        output: args.output,
        primary: args.primary,
        secondary: args.secondary,
        white_threshold: args.white_threshold,
        glow_sigma: args.glow_sigma,
        glow_brightness: args.glow_brightness,
    })
}
