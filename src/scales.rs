use crate::constants::{RADIUS_RANGE_FILTERED, RADIUS_RANGE_UNFILTERED};
use crate::models::{StationTraffic, TimeFilter};
use crate::traffic::max_total_traffic;

/// Square-root scale from trip counts to marker radius in pixels.
///
/// Marker *area* grows linearly with traffic. Inputs are clamped to the
/// domain so the output never leaves the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeScale {
    domain_max: f64,
    range: (f64, f64),
}

impl SizeScale {
    #[must_use]
    pub fn new(domain_max: u32, range: (f64, f64)) -> Self {
        Self {
            domain_max: f64::from(domain_max),
            range,
        }
    }

    /// Scale for an aggregate: domain `[0, max total traffic]`, range chosen by filter state
    #[must_use]
    pub fn for_aggregate(traffic: &[StationTraffic], filter: TimeFilter) -> Self {
        let range = if filter.is_active() {
            RADIUS_RANGE_FILTERED
        } else {
            RADIUS_RANGE_UNFILTERED
        };
        Self::new(max_total_traffic(traffic), range)
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Radius for a traffic count. A degenerate `[0, 0]` domain maps everything to the minimum.
    #[must_use]
    pub fn radius(&self, traffic: u32) -> f64 {
        let (min, max) = self.range;
        if self.domain_max <= 0.0 {
            return min;
        }
        let t = (f64::from(traffic).sqrt() / self.domain_max.sqrt()).clamp(0.0, 1.0);
        min + t * (max - min)
    }
}

/// Three-step quantization of the departure ratio, used to pick a colour between
/// "mostly arrivals" (0), "balanced" (0.5) and "mostly departures" (1).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowScale;

impl FlowScale {
    const STEPS: [f64; 3] = [0.0, 0.5, 1.0];

    /// Bucket a ratio in `[0, 1]`; undefined (NaN) ratios map to the midpoint
    #[must_use]
    pub fn quantize(self, ratio: f64) -> f64 {
        if ratio.is_nan() {
            return Self::STEPS[1];
        }
        // Equal-width buckets [0, 1/3), [1/3, 2/3), [2/3, 1]
        let bucket = if ratio * 3.0 < 1.0 {
            0
        } else if ratio * 3.0 < 2.0 {
            1
        } else {
            2
        };
        Self::STEPS[bucket]
    }

    /// Quantized departure ratio for a station; stations with no traffic are balanced
    #[must_use]
    pub fn for_station(self, station: &StationTraffic) -> f64 {
        self.quantize(station.departure_ratio().unwrap_or(f64::NAN))
    }
}

/// Both scales derived from one aggregate. Rebuilt, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub size: SizeScale,
    pub flow: FlowScale,
}

impl Scales {
    #[must_use]
    pub fn derive(traffic: &[StationTraffic], filter: TimeFilter) -> Self {
        Self {
            size: SizeScale::for_aggregate(traffic, filter),
            flow: FlowScale,
        }
    }
}
