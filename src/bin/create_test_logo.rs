use image::{Rgba, RgbaImage};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "logo.webp".to_string());

    let size = 128;
    let mut image = RgbaImage::new(size, size);

    // Blue ring on a white background, with a gray outline as an untouched element
    let center = size as f32 / 2.0;
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let distance = (dx * dx + dy * dy).sqrt();

        *pixel = if (30.0..46.0).contains(&distance) {
            let blue = 200 + (55.0 * y as f32 / size as f32) as u8;
            Rgba([20, 60, blue, 255])
        } else if (46.0..48.0).contains(&distance) {
            Rgba([90, 90, 90, 255])
        } else {
            Rgba([250, 250, 250, 255])
        };
    }

    image.save(&path).expect("Failed to save test logo");
    println!("Created test logo at {}", path);
}
