use crate::core::data::colour::Colour;

/// HSB to RGB8 in the classic six-sector form. Only the fractional part of
/// `hue` is used, so hues wrap around the colour wheel; saturation and
/// brightness are expected in `0.0..=1.0`.
#[must_use]
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Colour {
    if saturation == 0.0 {
        let grey = to_channel(brightness);
        return Colour { r: grey, g: grey, b: grey };
    }

    let sector = (hue - hue.floor()) * 6.0;
    let fraction = sector - sector.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * fraction);
    let t = brightness * (1.0 - saturation * (1.0 - fraction));

    let (r, g, b) = match sector as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Colour {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(hsb_to_rgb(0.5, 1.0, 1.0), Colour { r: 0, g: 255, b: 255 });
    }

    #[test]
    fn test_intermediate_hue_rounds_half_up() {
        assert_eq!(hsb_to_rgb(0.25, 1.0, 1.0), Colour { r: 128, g: 255, b: 0 });
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsb_to_rgb(1.25, 1.0, 1.0), hsb_to_rgb(0.25, 1.0, 1.0));
        assert_eq!(hsb_to_rgb(-0.75, 1.0, 1.0), hsb_to_rgb(0.25, 1.0, 1.0));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(hsb_to_rgb(0.7, 0.0, 0.5), Colour { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn test_zero_brightness_is_black() {
        assert_eq!(hsb_to_rgb(0.3, 1.0, 0.0), Colour::BLACK);
    }
}
