//! Easing curves used by the roll timeline

/// Timing curve applied to a tween's linear progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// cubic-bezier(0.4, 0.0, 0.2, 1.0)
    #[default]
    FastOutSlowIn,
    /// cubic-bezier(0.0, 0.0, 0.2, 1.0), a pure deceleration
    LinearOutSlowIn,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::FastOutSlowIn => CubicBezier::new(0.4, 0.0, 0.2, 1.0).ease(t),
            Easing::LinearOutSlowIn => CubicBezier::new(0.0, 0.0, 0.2, 1.0).ease(t),
        }
    }
}

/// CSS-style cubic bezier with fixed endpoints (0,0) and (1,1).
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const EPSILON: f32 = 1e-5;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn ease(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let s = self.solve_s(x);
        sample(self.y1, self.y2, s)
    }

    // Find the curve parameter whose x equals `x`. Newton first, bisection
    // when the slope is too flat to trust.
    fn solve_s(&self, x: f32) -> f32 {
        let mut s = x;
        for _ in 0..8 {
            let err = sample(self.x1, self.x2, s) - x;
            if err.abs() < Self::EPSILON {
                return s;
            }
            let slope = slope(self.x1, self.x2, s);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = x;
        while hi - lo > Self::EPSILON {
            let v = sample(self.x1, self.x2, s);
            if (v - x).abs() < Self::EPSILON {
                break;
            }
            if v < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

fn sample(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::FastOutSlowIn, Easing::LinearOutSlowIn];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(4.0), 1.0);
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v + 1e-4 >= last, "{easing:?} dipped at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn test_decelerating_curves_lead_linear() {
        // Both material curves are past the linear mark at the halfway point.
        assert!(Easing::FastOutSlowIn.apply(0.5) > 0.5);
        assert!(Easing::LinearOutSlowIn.apply(0.5) > Easing::FastOutSlowIn.apply(0.5));
    }
}
