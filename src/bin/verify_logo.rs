use image::ImageReader;
use logo_recolor::logo_recolor::{classify, PixelClass, WHITE_THRESHOLD};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "logo_updated.webp".to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking recolored logo: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    let mut transparent = 0u64;
    let mut partial = 0u64;
    let mut blue = 0u64;
    let mut leftover_white = 0u64;

    for pixel in rgba_img.pixels() {
        match pixel[3] {
            0 => transparent += 1,
            255 => {}
            _ => partial += 1,
        }

        if pixel[3] == 0 {
            continue;
        }

        match classify(pixel, WHITE_THRESHOLD) {
            PixelClass::BlueIsh => blue += 1,
            PixelClass::NearWhite => leftover_white += 1,
            PixelClass::Other => {}
        }
    }

    let total = u64::from(width) * u64::from(height);
    println!("\nPixel analysis:");
    println!("  {} of {} pixels fully transparent", transparent, total);
    println!("  {} pixels partially transparent (glow)", partial);
    println!("  {} visible blue pixels", blue);
    println!("  {} visible near-white pixels", leftover_white);

    // Sample the middle column from top to bottom to show the gradient
    println!("\nGradient samples (x={}):", width / 2);
    let samples = 5;
    for i in 0..samples {
        let y = height * i / samples;
        let p = rgba_img.get_pixel(width / 2, y);
        println!(
            "  y={:>5}  RGBA: [{}, {}, {}, {}]",
            y, p[0], p[1], p[2], p[3]
        );
    }

    if leftover_white == 0 && transparent > 0 {
        println!("\n✓ White background removed");
    } else {
        println!("\n⚠ White background may not be fully removed");
    }
}
