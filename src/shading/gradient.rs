use crate::{akari_error, math::Spectrum};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub t: f32,
    pub color: Spectrum<f32>,
}

/// Piecewise-linear color ramp over `t` in [-1, 1].
#[derive(Clone, Debug)]
pub struct LinearGradient {
    components: Vec<GradientStop>,
}

impl LinearGradient {
    /// Creates a new `LinearGradient` from stops sorted ascending by `t`.
    ///
    /// At least two stops are required.
    pub fn new(components: Vec<GradientStop>) -> Self {
        assert!(
            components.len() >= 2,
            "a gradient needs at least two stops"
        );
        assert!(
            components.windows(2).all(|w| w[0].t <= w[1].t),
            "gradient stops must be sorted ascending by t"
        );
        Self { components }
    }

    /// Samples the color at `ti`, clamping outside the covered range.
    pub fn sample(&self, ti: f32) -> Spectrum<f32> {
        assert!(self.components.len() >= 2);

        let first = &self.components[0];
        let last = &self.components[self.components.len() - 1];
        if ti <= first.t {
            return first.color;
        }
        if ti >= last.t {
            return last.color;
        }

        for w in self.components.windows(2) {
            let (a, b) = (&w[0], &w[1]);
            if a.t <= ti && ti <= b.t {
                return a.color.lerp(b.color, (ti - a.t) / (b.t - a.t));
            }
        }

        // Sorted stops cover [first.t, last.t] so an in-range ti always brackets
        akari_error!("No bracketing gradient stops for t {}", ti);
        unreachable!();
    }
}

impl Default for LinearGradient {
    fn default() -> Self {
        Self::new(vec![
            GradientStop {
                t: 0.1,
                color: Spectrum::new(215.0 / 256.0, 210.0 / 256.0, 203.0 / 256.0),
            },
            GradientStop {
                t: 0.22,
                color: Spectrum::new(250.0 / 256.0, 250.0 / 256.0, 240.0 / 256.0),
            },
            GradientStop {
                t: 0.5,
                color: Spectrum::new(145.0 / 256.0, 170.0 / 256.0, 175.0 / 256.0),
            },
            GradientStop {
                t: 0.78,
                color: Spectrum::new(255.0 / 256.0, 250.0 / 256.0, 205.0 / 256.0),
            },
            GradientStop {
                t: 0.9,
                color: Spectrum::new(170.0 / 256.0, 170.0 / 256.0, 170.0 / 256.0),
            },
        ])
    }
}
