use crate::palette::Palette;
use anyhow::{bail, Context, Result};
use image::{
    codecs::{
        png::{CompressionType, FilterType as PngFilterType, PngEncoder},
        webp::WebPEncoder,
    },
    imageops, ColorType, ExtendedColorType, ImageEncoder, ImageFormat, Rgb, Rgba, RgbaImage,
};
use log::{debug, info};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Channels above this value on all of r, g and b count as background
pub const WHITE_THRESHOLD: u8 = 200;

/// Standard deviation of the glow blur, i.e. a 1 pixel blur radius
pub const GLOW_SIGMA: f32 = 1.0;

/// Brightness multiplier applied to the blurred glow layer
pub const GLOW_BRIGHTNESS: f32 = 1.2;

#[derive(Debug)]
pub struct Args {
    pub input: PathBuf,
    pub output: PathBuf,
    pub primary: String,
    pub secondary: String,
    pub white_threshold: u8,
    pub glow_sigma: f32,
    pub glow_brightness: f32,
}

/// How a single pixel is treated by the recolor pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    /// Blue strictly dominates red and green and the pixel is not fully transparent
    BlueIsh,
    /// Red, green and blue all above the white threshold
    NearWhite,
    Other,
}

/// Pixel counts per class for one recolor pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecolorStats {
    pub blue_ish: u64,
    pub near_white: u64,
    pub other: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecolorOptions {
    pub palette: Palette,
    pub white_threshold: u8,
    pub glow_sigma: f32,
    pub glow_brightness: f32,
}

impl Default for RecolorOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            white_threshold: WHITE_THRESHOLD,
            glow_sigma: GLOW_SIGMA,
            glow_brightness: GLOW_BRIGHTNESS,
        }
    }
}

impl RecolorOptions {
    /// Build and validate options from command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        if !args.glow_sigma.is_finite() || args.glow_sigma <= 0.0 {
            bail!("Glow sigma must be a positive number, got {}", args.glow_sigma);
        }
        if !args.glow_brightness.is_finite() || args.glow_brightness < 0.0 {
            bail!(
                "Glow brightness must be zero or greater, got {}",
                args.glow_brightness
            );
        }

        let palette = Palette::from_css(&args.primary, &args.secondary)
            .context("Invalid gradient colors")?;

        Ok(Self {
            palette,
            white_threshold: args.white_threshold,
            glow_sigma: args.glow_sigma,
            glow_brightness: args.glow_brightness,
        })
    }
}

/// Run the whole pipeline: load, recolor, add the glow and save
pub fn recolor_logo(args: Args) -> Result<()> {
    let options = RecolorOptions::from_args(&args)?;

    let mut logo = load_logo(&args.input)?;
    info!(
        "Loaded {} ({}x{})",
        args.input.display(),
        logo.width(),
        logo.height()
    );

    let stats = recolor(&mut logo, &options);
    info!(
        "Recolored {} blue pixels, cleared {} background pixels, kept {} others",
        stats.blue_ish, stats.near_white, stats.other
    );

    let final_logo = composite_with_glow(&logo, &options)?;
    save_logo(&final_logo, &args.output)?;

    println!(
        "✓ Logo has been modified and saved as {}",
        args.output.display()
    );
    Ok(())
}

/// Decode an image and convert it to RGBA, giving opaque sources an alpha of 255
pub fn load_logo(path: &Path) -> Result<RgbaImage> {
    let source = image::open(path)
        .with_context(|| format!("Failed to load image {}", path.display()))?;

    match source.color() {
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => {
            debug!("Source pixel format: {:?}", source.color());
            Ok(source.to_rgba8())
        }
        other => bail!(
            "Unsupported pixel format: {:?} in {} (expected 8 bits per channel)",
            other,
            path.display()
        ),
    }
}

/// Classify a pixel. The blue test is checked first and wins over the white test.
pub fn classify(pixel: &Rgba<u8>, white_threshold: u8) -> PixelClass {
    let [r, g, b, a] = pixel.0;

    if b > r && b > g && a > 0 {
        PixelClass::BlueIsh
    } else if r > white_threshold && g > white_threshold && b > white_threshold {
        PixelClass::NearWhite
    } else {
        PixelClass::Other
    }
}

/// Recolor blue pixels along a vertical gradient and make near-white pixels transparent.
///
/// The gradient factor of a pixel is its row divided by the image height, so
/// the top row gets the primary color exactly and the last row stays just
/// short of the secondary color. Alpha of blue pixels and RGB of white pixels
/// are left untouched.
pub fn recolor(logo: &mut RgbaImage, options: &RecolorOptions) -> RecolorStats {
    let height = logo.height() as f64;
    let mut stats = RecolorStats::default();

    for (_, y, pixel) in logo.enumerate_pixels_mut() {
        match classify(pixel, options.white_threshold) {
            PixelClass::BlueIsh => {
                let Rgb([r, g, b]) = options.palette.gradient_at(y as f64 / height);
                *pixel = Rgba([r, g, b, pixel[3]]);
                stats.blue_ish += 1;
            }
            PixelClass::NearWhite => {
                pixel[3] = 0;
                stats.near_white += 1;
            }
            PixelClass::Other => stats.other += 1,
        }
    }

    stats
}

/// Blur the image and scale the brightness of every pixel.
///
/// RGB channels are multiplied by `brightness`, clamped to 255 and truncated;
/// alpha only goes through the blur.
pub fn glow(logo: &RgbaImage, sigma: f32, brightness: f32) -> RgbaImage {
    let mut glow = imageops::blur(logo, sigma);

    for pixel in glow.pixels_mut() {
        for channel in pixel.0.iter_mut().take(3) {
            *channel = (*channel as f32 * brightness).clamp(0.0, 255.0) as u8;
        }
    }

    glow
}

/// Paste `layer` onto `canvas` using the layer's own alpha as the mask.
///
/// Every channel, alpha included, becomes `src * a + dst * (1 - a)` where
/// `a` is the layer alpha scaled to `[0, 1]`.
pub fn paste_with_alpha_mask(canvas: &mut RgbaImage, layer: &RgbaImage) -> Result<()> {
    if canvas.dimensions() != layer.dimensions() {
        bail!(
            "Layer size {:?} does not match canvas size {:?}",
            layer.dimensions(),
            canvas.dimensions()
        );
    }

    for (dst, src) in canvas.pixels_mut().zip(layer.pixels()) {
        let mask = src[3] as f32 / 255.0;
        for c in 0..4 {
            let blended = src[c] as f32 * mask + dst[c] as f32 * (1.0 - mask);
            dst[c] = blended.round().clamp(0.0, 255.0) as u8;
        }
    }

    Ok(())
}

/// Put a glow layer derived from the recolored logo beneath the sharp logo
pub fn composite_with_glow(logo: &RgbaImage, options: &RecolorOptions) -> Result<RgbaImage> {
    let glow_layer = glow(logo, options.glow_sigma, options.glow_brightness);

    let mut canvas = RgbaImage::from_pixel(logo.width(), logo.height(), Rgba([0, 0, 0, 0]));
    paste_with_alpha_mask(&mut canvas, &glow_layer).context("Failed to paste glow layer")?;
    paste_with_alpha_mask(&mut canvas, logo).context("Failed to paste logo")?;

    Ok(canvas)
}

/// Encode the logo in the format named by the path's extension and write it.
///
/// The image is fully encoded before the file is created, so a failed
/// encode leaves nothing behind.
pub fn save_logo(logo: &RgbaImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path)
        .with_context(|| format!("Can't determine output format of {}", path.display()))?;

    let mut buf = Vec::new();
    match format {
        ImageFormat::WebP => write_webp(logo, &mut buf)?,
        ImageFormat::Png => write_png(logo, &mut buf)?,
        other => bail!(
            "Unsupported output format: {:?} (expected .webp or .png)",
            other
        ),
    }

    std::fs::write(path, &buf).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(
        "Wrote {} bytes of {:?} to {}",
        buf.len(),
        format,
        path.display()
    );
    Ok(())
}

// Lossless WebP keeps the exact recolored values
fn write_webp<W: Write>(logo: &RgbaImage, w: W) -> Result<()> {
    let encoder = WebPEncoder::new_lossless(w);
    encoder
        .write_image(
            logo.as_raw(),
            logo.width(),
            logo.height(),
            ExtendedColorType::Rgba8,
        )
        .context("Failed to encode WebP")?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(logo: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(
            logo.as_raw(),
            logo.width(),
            logo.height(),
            ExtendedColorType::Rgba8,
        )
        .context("Failed to encode PNG")?;
    Ok(())
}
