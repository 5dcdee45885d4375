mod brightness;
mod color;
mod encoding;
mod input;

pub use brightness::*;
pub use color::*;
pub use encoding::*;
pub use input::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn encoding_display_and_parse() {
        for encoding in Encoding::ALL {
            let parsed: Encoding = encoding.to_string().parse().unwrap();
            assert_eq!(parsed, encoding);
        }
        assert_eq!("RGBA".parse::<Encoding>().unwrap(), Encoding::Rgba);
        assert!("hsl".parse::<Encoding>().is_err());
    }

    #[test]
    fn encoding_serialization() {
        let json = serde_json::to_string(&Encoding::Hex).unwrap();
        assert_eq!(json, "\"hex\"");
        let parsed: Encoding = serde_json::from_str("\"rgba\"").unwrap();
        assert_eq!(parsed, Encoding::Rgba);
    }

    #[test]
    fn brightness_threshold_is_closed_on_dark_side() {
        assert_eq!(Brightness::from_hsp(127.5), Brightness::Dark);
        assert_eq!(Brightness::from_hsp(127.51), Brightness::Light);
        assert_eq!(Brightness::from_hsp(0.0), Brightness::Dark);
    }

    #[test]
    fn brightness_display() {
        assert_eq!(Brightness::Light.to_string(), "light");
        assert_eq!(Brightness::Dark.to_string(), "dark");
        assert!(Brightness::Dark.is_dark());
        assert!(!Brightness::Dark.is_light());
    }

    #[test]
    fn rgb_display() {
        assert_eq!(Rgb::new(10, 20, 30).to_string(), "rgb(10, 20, 30)");
    }

    #[test]
    fn rgba_display_uses_shortest_alpha() {
        assert_eq!(Rgba::new(255, 255, 255, 1.0).to_string(), "rgba(255, 255, 255, 1)");
        assert_eq!(Rgba::new(0, 0, 0, 0.5).to_string(), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn rgb_with_alpha_and_back() {
        let rgb = Rgb::new(1, 2, 3);
        let rgba = rgb.with_alpha(0.25);
        assert_eq!(rgba, Rgba::new(1, 2, 3, 0.25));
        assert_eq!(rgba.rgb(), rgb);
    }

    #[test]
    fn color_serializes_as_plain_values() {
        let hex = Color::Hex("#FF0000".into());
        assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#FF0000\"");

        let rgb = Color::Rgb(Rgb::new(255, 0, 0));
        assert_eq!(serde_json::to_string(&rgb).unwrap(), "[255,0,0]");

        let rgba = Color::Rgba(Rgba::new(255, 0, 0, 0.5));
        assert_eq!(serde_json::to_string(&rgba).unwrap(), "[255,0,0,0.5]");
    }

    #[test]
    fn color_deserializes_by_shape() {
        let c: Color = serde_json::from_str("\"#ABC\"").unwrap();
        assert_eq!(c.encoding(), Encoding::Hex);

        let c: Color = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(c, Color::Rgb(Rgb::new(1, 2, 3)));

        let c: Color = serde_json::from_str("[1,2,3,0.5]").unwrap();
        assert_eq!(c, Color::Rgba(Rgba::new(1, 2, 3, 0.5)));
    }

    #[test]
    fn color_accessors() {
        let c = Color::Rgb(Rgb::new(1, 2, 3));
        assert_eq!(c.as_rgb(), Some(Rgb::new(1, 2, 3)));
        assert!(c.as_hex().is_none());
        assert!(c.as_rgba().is_none());
        assert_eq!(c.to_string(), "rgb(1, 2, 3)");
    }

    #[test]
    fn input_from_color_feeds_back() {
        let hex = Color::Hex("#AABBCC".into());
        assert_eq!(ColorInput::from(&hex), ColorInput::Text("#AABBCC"));

        let rgba = Color::Rgba(Rgba::new(1, 2, 3, 0.5));
        assert_eq!(
            ColorInput::from(&rgba),
            ColorInput::Sequence(Cow::Owned(vec![1.0, 2.0, 3.0, 0.5]))
        );
    }

    #[test]
    fn input_from_arrays() {
        let input = ColorInput::from([255, 0, 0]);
        assert_eq!(input, ColorInput::Sequence(Cow::Owned(vec![255.0, 0.0, 0.0])));

        let input = ColorInput::from([1.0, 2.0, 3.0, 1.0]);
        assert_eq!(input.to_string(), "[1.0, 2.0, 3.0, 1.0]");
    }
}
