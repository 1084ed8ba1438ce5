use serde::{Serialize, Deserialize};

/// RGB color with integer channels.
///
/// Channels are nominally 0-255 but are stored wide so interpolation
/// can overshoot; packing clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Color {
    pub const BLACK: Color = Color { red: 0, green: 0, blue: 0 };
    pub const WHITE: Color = Color { red: 255, green: 255, blue: 255 };

    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Linear interpolation, `t = 0` gives `self` and `t = 1` gives `other`
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let channel = |a: i32, b: i32| a + ((b - a) as f64 * t).round() as i32;
        Self {
            red: channel(self.red, other.red),
            green: channel(self.green, other.green),
            blue: channel(self.blue, other.blue),
        }
    }

    /// Packed `0xRRGGBB` value handed to the rendering backend
    pub fn packed(&self) -> u32 {
        let clamp = |c: i32| c.clamp(0, 255) as u32;
        (clamp(self.red) << 16) | (clamp(self.green) << 8) | clamp(self.blue)
    }

    /// CSS hex form, e.g. `#ff8000`
    pub fn to_css(&self) -> String {
        packed_to_css(self.packed())
    }
}

pub fn packed_to_css(packed: u32) -> String {
    format!("#{:06x}", packed & 0x00FF_FFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_layout() {
        let c = Color::new(0x12, 0x34, 0x56);
        assert_eq!(c.packed(), 0x123456);
        assert_eq!(Color::WHITE.packed(), 0xFFFFFF);
        assert_eq!(Color::BLACK.packed(), 0);
    }

    #[test]
    fn test_packed_clamps_overshoot() {
        let c = Color::new(300, -20, 128);
        assert_eq!(c.packed(), 0xFF0080);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::new(10, 200, 0);
        let b = Color::new(250, 0, 100);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Color::new(0, 100, 255);
        let b = Color::new(100, 0, 255);
        assert_eq!(a.lerp(&b, 0.5), Color::new(50, 50, 255));
    }

    #[test]
    fn test_css() {
        assert_eq!(Color::new(255, 128, 0).to_css(), "#ff8000");
        assert_eq!(Color::BLACK.to_css(), "#000000");
    }
}
