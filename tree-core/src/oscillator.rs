use rand::Rng;

/// Bounded angular sway source used for the wind jitter.
///
/// `value(t)` is `amplitude * sin(speed * (t + phase))`, with the sine
/// argument in degrees. The phase is drawn once at construction from
/// `[1, 360/speed]` (one full period at the given speed), so every
/// instance sways out of lockstep with its siblings while remaining
/// fully determined by `t`. There is no mutable state after
/// construction.
#[derive(Clone, Copy, Debug)]
pub struct Oscillator {
    speed: f32,
    amplitude: f32,
    phase: f32,
}

impl Oscillator {
    /// ### Parameters
    /// - `speed` - Angular frequency in degrees per time-unit; must be
    ///   positive.
    /// - `amplitude` - Peak angular deflection in degrees.
    /// - `rng` - Source for the one-time random phase.
    pub fn new(speed: f32, amplitude: f32, rng: &mut impl Rng) -> Self {
        debug_assert!(speed > 0.0, "oscillator speed must be positive");
        let phase = rng.random_range(1.0..=360.0 / speed);
        Self {
            speed,
            amplitude,
            phase,
        }
    }

    /// Angular offset in degrees at elapsed time `t`, always within
    /// `[-amplitude, amplitude]`.
    pub fn value(&self, t: f64) -> f32 {
        let angle = self.speed * (t as f32 + self.phase);
        self.amplitude * angle.to_radians().sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn output_is_bounded_by_amplitude() {
        let mut rng = StdRng::seed_from_u64(3);
        let osc = Oscillator::new(0.01, 2.5, &mut rng);

        for i in 0..10_000 {
            let v = osc.value(i as f64 * 7.3);
            assert!(
                v >= -2.5 && v <= 2.5,
                "value {} outside [-2.5, 2.5] at step {}",
                v,
                i
            );
        }
    }

    #[test]
    fn same_time_same_value() {
        let mut rng = StdRng::seed_from_u64(4);
        let osc = Oscillator::new(0.02, 5.0, &mut rng);

        assert_eq!(osc.value(123.0), osc.value(123.0));
    }

    #[test]
    fn distinct_phases_give_distinct_sequences() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = Oscillator::new(0.01, 2.0, &mut rng);
        let b = Oscillator::new(0.01, 2.0, &mut rng);

        // With independent random phases, at least one sample point must
        // differ (equal sequences would need near-identical phases).
        let differs = (0..100).any(|i| {
            let t = i as f64 * 13.0;
            (a.value(t) - b.value(t)).abs() > 1e-6
        });
        assert!(differs, "two oscillators moved in lockstep");
    }
}
