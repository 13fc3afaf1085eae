// Color struct for particles and connection lines. Channels are 8 bit,
// alpha is kept as a fraction because canvas fill styles take it that way.

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    // Created from an unsigned 32 representing RRGGBBAA
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color {
            r,
            g,
            b,
            a: a as f64 / 255.0,
        }
    }

    pub fn with_alpha(self, a: f64) -> Color {
        Color {
            a: a.max(0.0).min(1.0),
            ..self
        }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Per-channel `base + rand * spread` sampling band.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorBand {
    pub red: (f64, f64),
    pub green: (f64, f64),
    pub blue: (f64, f64),
    pub alpha: (f64, f64),
}

impl Default for ColorBand {
    // Indigo-ish band used by the hero visual
    fn default() -> Self {
        ColorBand {
            red: (79.0, 50.0),
            green: (70.0, 50.0),
            blue: (229.0, 20.0),
            alpha: (0.2, 0.3),
        }
    }
}

impl ColorBand {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let r = sample_channel(rng, self.red);
        let g = sample_channel(rng, self.green);
        let b = sample_channel(rng, self.blue);
        let (base, spread) = self.alpha;
        let a = base + rng.gen::<f64>() * spread;
        Color::rgb(r, g, b).with_alpha(a)
    }
}

fn sample_channel<R: Rng + ?Sized>(rng: &mut R, (base, spread): (f64, f64)) -> u8 {
    (base + rng.gen::<f64>() * spread).round().max(0.0).min(255.0) as u8
}
