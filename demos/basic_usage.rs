// ============================================================================
// Basic Usage Example
// ============================================================================

use ndscale::prelude::*;
use rust_decimal::Decimal;

const GLYPHS: &[u8] = b" .:-=+*#";

fn print_grid(cells: &[u8], width: usize) {
    for row in cells.chunks(width) {
        let line: String = row.iter().map(|&c| GLYPHS[c as usize] as char).collect();
        println!("  |{}|", line);
    }
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== ndscale Example ===\n");

    // 1-D stretch: every source element lands on two destination cells
    let src: Vec<u32> = (0..10).collect();
    let mut stretched = vec![0u32; 20];
    let config = ScaleConfig::stretch(20, 10);
    scale_with(&config, &mut LinearWrite::new(&mut stretched, &src));
    println!("stretch 10 -> 20: {:?}", stretched);

    // 1-D shrink, mirrored
    let mut shrunk = vec![0u32; 5];
    let config = ScaleConfig::stretch(5, 10).mirrored(0);
    scale_with(&config, &mut LinearWrite::new(&mut shrunk, &src));
    println!("shrink 10 -> 5, mirrored: {:?}", shrunk);

    // 2-D upscale of a small gradient
    let (src_w, src_h) = (4usize, 3usize);
    let image: Vec<u8> = (0..src_w * src_h).map(|i| (i % GLYPHS.len()) as u8).collect();
    let (dst_w, dst_h) = (16usize, 6usize);
    let mut canvas = vec![0u8; dst_w * dst_h];

    let config = ScaleConfig::grid(dst_w as i32, dst_h as i32, src_w as i32, src_h as i32);
    if let Err(e) = config.validate() {
        eprintln!("invalid configuration: {}", e);
        return;
    }

    println!("\nsource {}x{}:", src_w, src_h);
    print_grid(&image, src_w);

    let mut processor = TracingProcessor::new(GridWrite::new(&mut canvas, dst_w, &image, src_w));
    scale_with(&config, &mut processor);
    println!("\nscaled {}x{} ({} visits):", dst_w, dst_h, processor.visits());
    drop(processor);
    print_grid(&canvas, dst_w);

    // The same picture assembled from three horizontal bands, as independent
    // workers would produce it
    let mut banded = vec![0u8; dst_w * dst_h];
    for band in config.destination.bands(1, 3) {
        if let Some(plan) = Plan::new(config.destination, config.source, band) {
            println!("band rows {}..{}: {} visits", band.start[1], band.end[1], plan.visits());
            plan.run(&mut GridWrite::new(&mut banded, dst_w, &image, src_w));
        }
    }
    println!("banded result matches: {}", banded == canvas);

    // Fractional source window using the literal helper
    match (fixed32(2, 5), fixed32(7, 5)) {
        (Ok(lo), Ok(hi)) => {
            let mut window = vec![0u32; 5];
            let area = DstArea::new([0], [5]);
            scale(area, SrcArea::new([lo], [hi]), &mut LinearWrite::new(&mut window, &src), area);
            println!("\nwindow [{}, {}) -> {:?}", lo, hi, window);
        },
        _ => eprintln!("fraction out of range"),
    }

    // The same kind of window read from decimal input, e.g. a config file
    let bounds = (Decimal::new(125, 2), Decimal::new(625, 2));
    match (Fixed32::from_decimal(bounds.0), Fixed32::from_decimal(bounds.1)) {
        (Ok(lo), Ok(hi)) => {
            let mut window = vec![0u32; 10];
            let area = DstArea::new([0], [10]);
            scale(area, SrcArea::new([lo], [hi]), &mut LinearWrite::new(&mut window, &src), area);
            println!(
                "decimal window [{}, {}) -> {:?}",
                lo.to_decimal(),
                hi.to_decimal(),
                window
            );
        },
        (Err(e), _) | (_, Err(e)) => eprintln!("decimal bound rejected: {}", e),
    }
}
