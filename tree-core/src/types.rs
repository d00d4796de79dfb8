use rand::Rng;

/// Solid color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// [`Rgb`] plus an alpha channel, as handed to the host canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns a copy with every channel shifted by a uniform random
    /// amount in `[-spread, spread]`, saturating at the channel bounds.
    pub fn jittered(self, spread: i16, rng: &mut impl Rng) -> Self {
        let shift = |c: u8, d: i16| (c as i16 + d).clamp(0, 255) as u8;
        Self {
            r: shift(self.r, rng.random_range(-spread..=spread)),
            g: shift(self.g, rng.random_range(-spread..=spread)),
            b: shift(self.b, rng.random_range(-spread..=spread)),
        }
    }

    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}
