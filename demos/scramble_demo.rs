//! Pixel Scrambling Example
//!
//! Loads an image (or generates one), encrypts it with a key, decrypts it with
//! the right key and with a wrong one, and prints RGB histogram summaries for
//! every stage.
//!
//! Usage: cargo run --example scramble_demo -- [image-path] [key]

use pixel_scrambler::{
    utils::{describe, load_rgb, save_rgb},
    Channel, ChannelHistograms, Key, Rgb, RgbImage, ScrambleConfig, Scrambler,
};
use std::{env, fs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Pixel Scrambling Example");
    println!("========================\n");

    let mut args = env::args().skip(1);
    let image_arg = args.next();
    let key_text = args.next().unwrap_or_else(|| "123".to_string());

    let original = match image_arg {
        Some(path) => {
            let img = load_rgb(&path)?;
            println!("Loaded {}", path);
            img
        }
        None => {
            println!("No image given, generating a gradient");
            create_gradient(64, 48)
        }
    };
    println!("  Size: {}", describe(&original));

    let config = ScrambleConfig::from_key_str(&key_text)?;
    println!("\nConfiguration:");
    println!("  - Key: {}", config.key);
    println!("  - Method: XOR + Pixel Scrambling");

    let scrambler = Scrambler::new(config);

    fs::create_dir_all("assets")?;
    save_rgb(&original, "assets/scramble_original.png")?;

    println!("\nEncrypting...");
    let encrypted = scrambler.encrypt(&original)?;
    save_rgb(&encrypted.image, "assets/scramble_encrypted.png")?;
    println!("Saved assets/scramble_encrypted.png (key {})", encrypted.key);

    println!("\nDecrypting with the same key...");
    let decrypted = scrambler.decrypt(&encrypted)?;
    save_rgb(&decrypted.image, "assets/scramble_decrypted.png")?;
    println!("  Status: {}", decrypted.status);
    println!("  Matches original: {}", decrypted.image == original);

    let wrong_key = Key::new(config.key.value().wrapping_add(1));
    println!("\nDecrypting with key {}...", wrong_key);
    let wrong = Scrambler::new(ScrambleConfig {
        key: wrong_key,
        ..config
    })
    .decrypt(&encrypted)?;
    save_rgb(&wrong.image, "assets/scramble_wrong_key.png")?;
    println!("  Status: {}", wrong.status);

    println!("\nRGB histogram analysis:");
    let stages = [
        ("Original", &original),
        ("Encrypted", &encrypted.image),
        ("Decrypted", &decrypted.image),
    ];
    let mut histograms = Vec::new();
    for (title, img) in stages {
        let hist = scrambler.histograms(img)?;
        println!("  {}: {}", title, hist);
        print_sparkline(&hist);
        histograms.push(hist);
    }

    println!(
        "\n  Encryption changed the histogram: {}",
        histograms[0].differs_from(&histograms[1])
    );
    println!(
        "  Decryption restored the histogram: {}",
        !histograms[0].differs_from(&histograms[2])
    );

    Ok(())
}

fn create_gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width) as u8,
            (y * 255 / height) as u8,
            ((x + y) * 2 % 256) as u8,
        ])
    })
}

/// Print each channel as 32 coarse buckets scaled to the largest bucket
fn print_sparkline(hist: &ChannelHistograms) {
    const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

    for channel in Channel::ALL {
        let buckets: Vec<u64> = hist
            .channel(channel)
            .chunks(8)
            .map(|c| c.iter().sum())
            .collect();
        let max = buckets.iter().copied().max().unwrap_or(0).max(1);
        let line: String = buckets
            .iter()
            .map(|&n| LEVELS[(n * 7 / max) as usize])
            .collect();
        println!("    {:<5} {}", channel.label(), line);
    }
}
