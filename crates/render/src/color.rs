//! Straight-alpha RGBA colors in the 0-1 range
//!
//! Colors are plain `[f32; 4]` arrays, the same layout the surface stores.

/// RGBA color, straight alpha, components in 0.0..=1.0
pub type Color = [f32; 4];

/// Opaque color from a `0xRRGGBB` literal
pub const fn hex(rgb: u32) -> Color {
    rgba(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
        1.0,
    )
}

/// Color from 8-bit channels and a 0-1 alpha, CSS `rgba()` style
pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a]
}

/// Same color with its alpha replaced
#[inline]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    [color[0], color[1], color[2], alpha.clamp(0.0, 1.0)]
}

/// Component-wise interpolation, `t` clamped to 0..=1
#[inline]
pub fn lerp(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

/// Rec. 601 luma of an 8-bit RGB triple
#[inline]
pub fn luma8(rgb: [u8; 3]) -> f32 {
    0.299 * rgb[0] as f32 + 0.587 * rgb[1] as f32 + 0.114 * rgb[2] as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        let c = hex(0xFF8000);
        assert_eq!(c[0], 1.0);
        assert!((c[1] - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c[2], 0.0);
        assert_eq!(c[3], 1.0);
    }

    #[test]
    fn test_lerp_clamps() {
        let black = hex(0x000000);
        let white = hex(0xFFFFFF);
        assert_eq!(lerp(black, white, 2.0), white);
        assert_eq!(lerp(black, white, -1.0), black);
        assert!((lerp(black, white, 0.5)[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_luma() {
        assert!(luma8([0, 0, 0]) < 1.0);
        assert!(luma8([255, 255, 255]) > 254.0);
    }
}
