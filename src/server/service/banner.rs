//! Welcome and leave banner rendering.
//!
//! Banners are 500×300 PNGs: a diagonal two-stop gradient picked by `BannerKind`, the
//! member's avatar clipped to a circle, a title line and the member's username. The
//! avatar download is best-effort; when it fails for any reason a placeholder circle
//! is drawn instead and rendering carries on.

use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use image::imageops::FilterType;
use tiny_skia::{
    Color, ColorU8, FillRule, GradientStop, LinearGradient, Mask, Paint, PathBuilder, Pixmap,
    PixmapPaint, Point, PremultipliedColorU8, Rect, SpreadMode, Stroke, Transform,
};

use crate::server::{
    data::avatar::AvatarSource,
    error::AppError,
    model::{
        banner::{BannerKind, RenderedBanner},
        member::MemberIdentity,
    },
};

pub const BANNER_WIDTH: u32 = 500;
pub const BANNER_HEIGHT: u32 = 300;

const AVATAR_CENTER: (f32, f32) = (250.0, 120.0);
const AVATAR_RADIUS: f32 = 70.0;
const AVATAR_BORDER_WIDTH: f32 = 4.0;
const FALLBACK_BORDER_WIDTH: f32 = 2.0;
const FALLBACK_BORDER_COLOR: [u8; 3] = [0x2c, 0x2f, 0x33];

const TITLE_BASELINE: (f32, f32) = (250.0, 230.0);
const TITLE_SIZE: f32 = 36.0;
const TITLE_SHADOW_OFFSET: f32 = 2.0;
const USERNAME_BASELINE: (f32, f32) = (250.0, 260.0);
const USERNAME_SIZE: f32 = 20.0;

const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const SHADOW: [u8; 4] = [0x00, 0x00, 0x00, 0x80];
const USERNAME_COLOR: [u8; 4] = [0xdd, 0xdd, 0xdd, 0xff];

static BOLD_FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans-Bold.ttf");

pub struct BannerService<'a> {
    avatars: &'a dyn AvatarSource,
}

impl<'a> BannerService<'a> {
    /// Creates a new BannerService instance.
    ///
    /// # Arguments
    /// - `avatars` - Source used to download member avatars
    ///
    /// # Returns
    /// - `BannerService` - New service instance
    pub fn new(avatars: &'a dyn AvatarSource) -> Self {
        Self { avatars }
    }

    /// Renders a banner announcing `member` for the given event kind.
    ///
    /// Fetches the member's avatar once with no retry. Avatar download or decode
    /// failures are logged at debug level and replaced by a placeholder circle.
    ///
    /// # Arguments
    /// - `member` - Member the banner is about
    /// - `kind` - Whether the member joined or left
    ///
    /// # Returns
    /// - `Ok(RenderedBanner)` - Encoded PNG named `welcome.png` or `leave.png`
    /// - `Err(AppError::InternalError)` - Canvas allocation, font loading or PNG encoding failed
    pub async fn render(
        &self,
        member: &MemberIdentity,
        kind: BannerKind,
    ) -> Result<RenderedBanner, AppError> {
        let avatar = match self.load_avatar(&member.avatar_url).await {
            Ok(avatar) => Some(avatar),
            Err(e) => {
                tracing::debug!(
                    "Using placeholder avatar for user {}: {}",
                    member.user_id,
                    e
                );
                None
            }
        };

        let png = draw_banner(kind, avatar.as_ref(), &member.username)?;

        Ok(RenderedBanner {
            file_name: kind.file_name().to_string(),
            png,
        })
    }

    /// Downloads and decodes the avatar, scaled to fill the avatar circle.
    async fn load_avatar(&self, url: &str) -> Result<Pixmap, AppError> {
        let bytes = self.avatars.fetch(url).await?;
        let diameter = (AVATAR_RADIUS * 2.0) as u32;

        let image = image::load_from_memory(&bytes)?
            .resize_to_fill(diameter, diameter, FilterType::Triangle)
            .to_rgba8();

        let mut pixmap = Pixmap::new(image.width(), image.height())
            .ok_or_else(|| AppError::InternalError("Avatar image has no pixels".to_string()))?;

        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }

        Ok(pixmap)
    }
}

/// Paints the full banner and encodes it as PNG.
fn draw_banner(
    kind: BannerKind,
    avatar: Option<&Pixmap>,
    username: &str,
) -> Result<Vec<u8>, AppError> {
    let mut canvas = Pixmap::new(BANNER_WIDTH, BANNER_HEIGHT)
        .ok_or_else(|| AppError::InternalError("Failed to allocate banner canvas".to_string()))?;

    paint_background(&mut canvas, kind)?;

    match avatar {
        Some(avatar) => paint_avatar(&mut canvas, avatar)?,
        None => paint_avatar_placeholder(&mut canvas)?,
    }

    let font = FontArc::try_from_slice(BOLD_FONT)
        .map_err(|e| AppError::InternalError(format!("Failed to load banner font: {}", e)))?;

    let (title_x, title_y) = TITLE_BASELINE;
    draw_centered_text(
        &mut canvas,
        &font,
        kind.title(),
        TITLE_SIZE,
        (title_x + TITLE_SHADOW_OFFSET, title_y + TITLE_SHADOW_OFFSET),
        SHADOW,
    );
    draw_centered_text(&mut canvas, &font, kind.title(), TITLE_SIZE, TITLE_BASELINE, WHITE);
    draw_centered_text(
        &mut canvas,
        &font,
        username,
        USERNAME_SIZE,
        USERNAME_BASELINE,
        USERNAME_COLOR,
    );

    canvas
        .encode_png()
        .map_err(|e| AppError::InternalError(format!("Failed to encode banner: {}", e)))
}

/// Fills the canvas with a top-left to bottom-right gradient.
fn paint_background(canvas: &mut Pixmap, kind: BannerKind) -> Result<(), AppError> {
    let (start, end) = kind.gradient();

    let shader = LinearGradient::new(
        Point::from_xy(0.0, 0.0),
        Point::from_xy(BANNER_WIDTH as f32, BANNER_HEIGHT as f32),
        vec![
            GradientStop::new(0.0, Color::from_rgba8(start[0], start[1], start[2], 0xff)),
            GradientStop::new(1.0, Color::from_rgba8(end[0], end[1], end[2], 0xff)),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    )
    .ok_or_else(|| AppError::InternalError("Invalid background gradient".to_string()))?;

    let paint = Paint {
        shader,
        anti_alias: false,
        ..Default::default()
    };

    let rect = Rect::from_xywh(0.0, 0.0, BANNER_WIDTH as f32, BANNER_HEIGHT as f32)
        .ok_or_else(|| AppError::InternalError("Invalid banner bounds".to_string()))?;
    canvas.fill_rect(rect, &paint, Transform::identity(), None);

    Ok(())
}

fn avatar_circle() -> Result<tiny_skia::Path, AppError> {
    let (cx, cy) = AVATAR_CENTER;
    PathBuilder::from_circle(cx, cy, AVATAR_RADIUS)
        .ok_or_else(|| AppError::InternalError("Invalid avatar circle".to_string()))
}

/// Draws the avatar clipped to the avatar circle, then a white ring around it.
fn paint_avatar(canvas: &mut Pixmap, avatar: &Pixmap) -> Result<(), AppError> {
    let circle = avatar_circle()?;

    let mut clip = Mask::new(BANNER_WIDTH, BANNER_HEIGHT)
        .ok_or_else(|| AppError::InternalError("Failed to allocate avatar mask".to_string()))?;
    clip.fill_path(&circle, FillRule::Winding, true, Transform::identity());

    let (cx, cy) = AVATAR_CENTER;
    canvas.draw_pixmap(
        (cx - avatar.width() as f32 / 2.0) as i32,
        (cy - avatar.height() as f32 / 2.0) as i32,
        avatar.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        Some(&clip),
    );

    stroke_circle(canvas, &circle, [0xff, 0xff, 0xff], AVATAR_BORDER_WIDTH);

    Ok(())
}

/// Draws a filled white circle with a thin dark ring in place of the avatar.
fn paint_avatar_placeholder(canvas: &mut Pixmap) -> Result<(), AppError> {
    let circle = avatar_circle()?;

    let mut fill = Paint::default();
    fill.set_color_rgba8(0xff, 0xff, 0xff, 0xff);
    fill.anti_alias = true;
    canvas.fill_path(&circle, &fill, FillRule::Winding, Transform::identity(), None);

    stroke_circle(canvas, &circle, FALLBACK_BORDER_COLOR, FALLBACK_BORDER_WIDTH);

    Ok(())
}

fn stroke_circle(canvas: &mut Pixmap, circle: &tiny_skia::Path, rgb: [u8; 3], width: f32) {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgb[0], rgb[1], rgb[2], 0xff);
    paint.anti_alias = true;

    let stroke = Stroke {
        width,
        ..Default::default()
    };

    canvas.stroke_path(circle, &paint, &stroke, Transform::identity(), None);
}

/// Draws a single line of text horizontally centered on `baseline.0`.
///
/// Glyph coverage from ab_glyph is blended straight into the canvas pixels.
fn draw_centered_text(
    canvas: &mut Pixmap,
    font: &FontArc,
    text: &str,
    size: f32,
    baseline: (f32, f32),
    rgba: [u8; 4],
) {
    let scaled = font.as_scaled(PxScale::from(size));

    let mut glyphs = Vec::with_capacity(text.len());
    let mut caret = 0.0;
    let mut previous = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(previous) = previous {
            caret += scaled.kern(previous, id);
        }
        glyphs.push((id, caret));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    let origin_x = baseline.0 - caret / 2.0;

    for (id, offset) in glyphs {
        let glyph = id.with_scale_and_position(size, point(origin_x + offset, baseline.1));
        let Some(outlined) = scaled.outline_glyph(glyph) else {
            continue;
        };

        let bounds = outlined.px_bounds();
        outlined.draw(|x, y, coverage| {
            blend_pixel(
                canvas,
                bounds.min.x as i32 + x as i32,
                bounds.min.y as i32 + y as i32,
                rgba,
                coverage,
            );
        });
    }
}

/// Source-over blends one straight-alpha color into a premultiplied canvas pixel.
fn blend_pixel(canvas: &mut Pixmap, x: i32, y: i32, rgba: [u8; 4], coverage: f32) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }

    let index = (y * width + x) as usize;
    let pixels = canvas.pixels_mut();
    let dst = pixels[index];

    let alpha = f32::from(rgba[3]) / 255.0 * coverage.clamp(0.0, 1.0);
    let keep = 1.0 - alpha;

    let out_a = (255.0 * alpha + f32::from(dst.alpha()) * keep).round().min(255.0) as u8;
    let channel = |src: u8, dst: u8| {
        ((f32::from(src) * alpha + f32::from(dst) * keep).round() as u8).min(out_a)
    };

    if let Some(color) = PremultipliedColorU8::from_rgba(
        channel(rgba[0], dst.red()),
        channel(rgba[1], dst.green()),
        channel(rgba[2], dst.blue()),
        out_a,
    ) {
        pixels[index] = color;
    }
}
