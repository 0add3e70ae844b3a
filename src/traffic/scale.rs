use serde::Serialize;

/// A square-root scale mapping a station's total traffic onto a marker radius
/// in pixels. Area, not radius, tracks the traffic count, so doubling traffic
/// does not double the circle's diameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadiusScale {
    /// Input domain, always `[0, max total traffic]`.
    pub domain: [f64; 2],
    /// Output radius range in pixels.
    pub range: [f64; 2],
}

impl RadiusScale {
    pub fn sqrt(domain_max: f64, range: [f64; 2]) -> Self {
        RadiusScale {
            domain: [0.0, domain_max],
            range,
        }
    }

    /// Radius for a traffic count. A collapsed domain (every station at zero)
    /// maps everything to the range minimum rather than dividing by zero.
    pub fn radius(&self, total_traffic: u32) -> f64 {
        let [r0, r1] = self.range;
        let max = self.domain[1];
        if max <= 0.0 {
            return r0;
        }
        r0 + (r1 - r0) * (total_traffic as f64 / max).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_at_domain_endpoints() {
        let scale = RadiusScale::sqrt(100.0, [0.0, 25.0]);

        assert_eq!(scale.radius(0), 0.0);
        assert_eq!(scale.radius(100), 25.0);
    }

    #[test]
    fn test_radius_grows_with_square_root() {
        let scale = RadiusScale::sqrt(100.0, [0.0, 25.0]);

        // A quarter of the max traffic gives half the max radius.
        assert!((scale.radius(25) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_nonzero_range_minimum() {
        let scale = RadiusScale::sqrt(16.0, [3.0, 50.0]);

        assert_eq!(scale.radius(0), 3.0);
        assert_eq!(scale.radius(16), 50.0);
        assert!((scale.radius(4) - (3.0 + 47.0 * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_collapsed_domain_maps_to_range_minimum() {
        let scale = RadiusScale::sqrt(0.0, [3.0, 50.0]);

        assert_eq!(scale.radius(0), 3.0);
    }
}
