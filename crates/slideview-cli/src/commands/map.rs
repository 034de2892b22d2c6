use anyhow::{ensure, Result};
use clap::Args;
use slideview_core::geometry::{Point, Size};
use slideview_core::viewport::{ViewGeometry, ViewportState};

use super::parse_size;

#[derive(Args)]
pub struct MapArgs {
    /// Screen x coordinate
    #[arg(allow_negative_numbers = true)]
    pub x: i32,
    /// Screen y coordinate
    #[arg(allow_negative_numbers = true)]
    pub y: i32,

    /// Image size, WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub image: Size,

    /// Canvas size, WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size, default_value = "512x512")]
    pub canvas: Size,

    /// Viewport scale
    #[arg(short, long, default_value_t = 1.0)]
    pub scale: f64,

    /// Horizontal viewport offset in image pixels
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset_x: f64,

    /// Vertical viewport offset in image pixels
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset_y: f64,
}

pub fn run(args: &MapArgs) -> Result<()> {
    ensure!(!args.image.is_empty(), "Image size must be non-zero, got {}", args.image);
    ensure!(
        args.scale.is_finite() && args.scale > 0.0,
        "Scale must be > 0, got {}",
        args.scale
    );

    let geometry = ViewGeometry::new(args.canvas, Some(args.image));
    let viewport = ViewportState::new(args.scale, args.offset_x, args.offset_y);

    let screen = Point::new(args.x, args.y);
    let image = geometry.screen_to_image(&viewport, screen);
    let back = geometry.image_to_screen(&viewport, image);

    println!("Screen:      ({}, {})", screen.x, screen.y);
    println!("Image:       ({}, {})", image.x, image.y);
    println!(
        "On image:    {}",
        if geometry.contains_image_point(image) { "yes" } else { "no" }
    );
    println!("Round trip:  ({}, {})", back.x, back.y);
    if let Some(region) = geometry.visible_region(&viewport) {
        println!(
            "Visible:     ({}, {}) .. ({}, {})",
            region.left(),
            region.top(),
            region.right(),
            region.bottom()
        );
    }

    Ok(())
}
