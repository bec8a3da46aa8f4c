use crate::error::{TimelineError, TimelineResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Converts hue (degrees), saturation and lightness (both 0..=1) to opaque RGB.
    #[must_use]
    pub fn from_hsl(hue_deg: f64, saturation: f64, lightness: f64) -> Self {
        let hue = hue_deg.rem_euclid(360.0) / 60.0;
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let second = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
        let (red, green, blue) = match hue as u32 {
            0 => (chroma, second, 0.0),
            1 => (second, chroma, 0.0),
            2 => (0.0, chroma, second),
            3 => (0.0, second, chroma),
            4 => (second, 0.0, chroma),
            _ => (chroma, 0.0, second),
        };
        let offset = lightness - chroma / 2.0;
        Self::rgba(
            (red + offset).clamp(0.0, 1.0),
            (green + offset).clamp(0.0, 1.0),
            (blue + offset).clamp(0.0, 1.0),
            1.0,
        )
    }

    pub fn validate(self) -> TimelineResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TimelineError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn pure_red_and_blue_convert_exactly() {
        let red = Color::from_hsl(0.0, 1.0, 0.5);
        assert_eq!((red.red, red.green, red.blue), (1.0, 0.0, 0.0));
        let blue = Color::from_hsl(240.0, 1.0, 0.5);
        assert_eq!((blue.red, blue.green, blue.blue), (0.0, 0.0, 1.0));
    }
}
