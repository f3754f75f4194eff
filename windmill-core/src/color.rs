/// Restrict `value` to `[min, max]`. Assumes `min <= max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// An 8-bit RGBA color. Channels are always in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as `0xAARRGGBB`. The framebuffer ignores the top byte.
    pub fn to_argb_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Scale a normalized channel to a byte, clamping first and truncating after.
fn channel(value: f32) -> u8 {
    clamp(value * 255.0, 0.0, 255.0) as u8
}

/// Opaque color from normalized `[0, 1]` channels.
pub fn solid_color(r: f32, g: f32, b: f32) -> Color {
    Color::rgba(channel(r), channel(g), channel(b), 255)
}

/// Linearly interpolate every channel, alpha included, from `from` to `to`.
///
/// `progress` is not clamped: values outside `[0, 1]` extrapolate and the
/// result saturates at the channel bounds.
pub fn blend_color(from: Color, to: Color, progress: f32) -> Color {
    let lerp = |a: u8, b: u8| {
        let (a, b) = (a as f32, b as f32);
        clamp(a + progress * (b - a), 0.0, 255.0) as u8
    };

    Color::rgba(
        lerp(from.r, to.r),
        lerp(from.g, to.g),
        lerp(from.b, to.b),
        lerp(from.a, to.a),
    )
}
