use crate::core::data::colour::Colour;

/// Black through red, orange and yellow to white over `t` in `[0, 1]`.
/// Values outside the range are clamped.
#[must_use]
pub fn fire_gradient(t: f64) -> Colour {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let (r, g, b) = if t < 0.25 {
        let local_t = t / 0.25;
        ((local_t * 255.0) as u8, 0, 0)
    } else if t < 0.5 {
        let local_t = (t - 0.25) / 0.25;
        (255, (local_t * 165.0) as u8, 0)
    } else if t < 0.75 {
        let local_t = (t - 0.5) / 0.25;
        (255, (165.0 + local_t * 90.0) as u8, 0)
    } else {
        let local_t = (t - 0.75) / 0.25;
        (255, 255, (local_t * 255.0) as u8)
    };

    Colour { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_black() {
        assert_eq!(fire_gradient(0.0), Colour::BLACK);
    }

    #[test]
    fn test_quarter_is_red() {
        assert_eq!(fire_gradient(0.25), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_half_is_orange() {
        assert_eq!(fire_gradient(0.5), Colour { r: 255, g: 165, b: 0 });
    }

    #[test]
    fn test_three_quarters_is_yellow() {
        assert_eq!(fire_gradient(0.75), Colour { r: 255, g: 255, b: 0 });
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(fire_gradient(7.0), Colour { r: 255, g: 255, b: 255 });
        assert_eq!(fire_gradient(-1.0), Colour::BLACK);
        assert_eq!(fire_gradient(f64::NAN), Colour::BLACK);
    }
}
