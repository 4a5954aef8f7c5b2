use super::*;
use crate::server::service::banner::{BannerService, BANNER_HEIGHT, BANNER_WIDTH};
use tiny_skia::Pixmap;


/// Decodes a rendered banner and returns the straight-alpha RGBA of one pixel.
fn pixel_at(png: &[u8], x: u32, y: u32) -> [u8; 4] {
    let pixmap = Pixmap::decode_png(png).unwrap();
    let color = pixmap.pixel(x, y).unwrap().demultiply();
    [color.red(), color.green(), color.blue(), color.alpha()]
}

/// Positions inside the given region whose straight-alpha RGBA satisfies `matches`.
fn pixels_where(
    png: &[u8],
    xs: std::ops::Range<u32>,
    ys: std::ops::Range<u32>,
    matches: impl Fn([u8; 4]) -> bool,
) -> Vec<(u32, u32)> {
    let pixmap = Pixmap::decode_png(png).unwrap();

    ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
        .filter(|&(x, y)| {
            let color = pixmap.pixel(x, y).unwrap().demultiply();
            matches([color.red(), color.green(), color.blue(), color.alpha()])
        })
        .collect()
}

fn is_white([r, g, b, _]: [u8; 4]) -> bool {
    r > 245 && g > 245 && b > 245
}

fn is_username_grey([r, g, b, _]: [u8; 4]) -> bool {
    [r, g, b].iter().all(|c| c.abs_diff(0xdd) <= 3)
}
