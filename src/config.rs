/// All classification thresholds in one struct.
/// Adjustable at runtime so alternative tunings can be A/B-tested
/// against the same corpus.
///
/// Lengths are in median units (hanzi-writer uses a 1024-unit em box),
/// angles in degrees, measured counter-clockwise from +x with y pointing up.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    // -- Length gate --
    /// Paths shorter than this are dot candidates regardless of point count.
    pub short_length: f64,
    /// Paths shorter than this are dot candidates when sampled sparsely.
    pub short_length_sparse: f64,
    /// "Sparse" means fewer points than this.
    pub sparse_points: usize,
    /// Curvature ratio above which a short leftward stroke is a 撇, not a 点.
    pub short_pie_curvature: f64,
    /// A short rightward stroke with |dx| > ratio·|dy| is a 横.
    pub short_heng_ratio: f64,

    // -- Direction bins (upper bounds, degrees) --
    /// 横 covers [heng_tail_deg, 360) ∪ [0, heng_max_deg).
    pub heng_max_deg: f64,
    /// 提 covers [heng_max_deg, ti_max_deg).
    pub ti_max_deg: f64,
    /// 撇 covers [ti_max_deg, pie_max_deg).
    pub pie_max_deg: f64,
    /// 竖 covers [pie_max_deg, shu_max_deg), subject to the drift test.
    pub shu_max_deg: f64,
    /// 捺 covers [shu_max_deg, heng_tail_deg).
    pub heng_tail_deg: f64,
    /// Leftward drift (fraction of total path length) that turns a 竖 into a 撇.
    pub drift_ratio: f64,
    /// A single near-vertical leftward run bending more than this is a 撇.
    pub curved_pie_curvature: f64,

    // -- Corner detection --
    /// Deviation coefficient for paths at least `long_path` long.
    pub corner_coeff_long: f64,
    /// Deviation coefficient for paths at least `medium_path` long.
    pub corner_coeff_medium: f64,
    /// Deviation coefficient for anything shorter.
    pub corner_coeff_short: f64,
    pub long_path: f64,
    pub medium_path: f64,
    /// Index ranges with fewer points than this are not split further.
    pub min_corner_span: usize,

    // -- Hook detection --
    /// Fraction of indices at the tail that may start a hook.
    pub hook_tail_fraction: f64,
    /// Minimum body/hook reversal angle.
    pub hook_min_deg: f64,
    /// Maximum body/hook reversal angle (exact retracing is pen noise).
    pub hook_max_deg: f64,
    /// Absolute floor on hook length.
    pub hook_min_length: f64,
    /// Hook length ceiling as a fraction of total path length.
    pub hook_max_ratio: f64,

    // -- Segment merging --
    /// 竖→撇 and 横→捺 merge only when the pair spans more than this
    /// fraction of the path.
    pub merge_span_ratio: f64,

    // -- Taxonomy --
    /// Second run of a 横 fold moving further left than this is a 横撇.
    pub heng_pie_dx: f64,
    /// Tail rise (dy/dx) that turns a 竖折 into a 竖弯钩.
    pub tail_rise_slope: f64,
    /// Body curvature below which a hooked vertical is a 竖钩, not a 弯钩.
    pub straight_body_curvature: f64,
    /// |dx| > ratio·|dy| counts as "flat" for the 卧钩 redirect.
    pub flat_ratio: f64,
}

/// Vertical axis convention of input coordinates.
///
/// The classifier works in y-up space internally; `YDown` input
/// (screen or SVG coordinates) is flipped at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// y grows upward (hanzi-writer medians).
    #[default]
    YUp,
    /// y grows downward (canvas/SVG pixels).
    YDown,
}

impl ClassifierConfig {
    /// Corner deviation threshold for a path of the given length.
    pub fn corner_threshold(&self, length: f64) -> f64 {
        let coeff = if length >= self.long_path {
            self.corner_coeff_long
        } else if length >= self.medium_path {
            self.corner_coeff_medium
        } else {
            self.corner_coeff_short
        };
        length * coeff
    }

    /// Whether a path falls under the short-stroke gate.
    pub fn is_short(&self, length: f64, point_count: usize) -> bool {
        length < self.short_length
            || (length < self.short_length_sparse && point_count < self.sparse_points)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            short_length: 200.0,
            short_length_sparse: 280.0,
            sparse_points: 6,
            short_pie_curvature: 1.15,
            short_heng_ratio: 3.0,
            heng_max_deg: 20.0,
            ti_max_deg: 120.0,
            pie_max_deg: 240.0,
            shu_max_deg: 290.0,
            heng_tail_deg: 345.0,
            drift_ratio: 0.10,
            curved_pie_curvature: 1.10,
            corner_coeff_long: 0.12,
            corner_coeff_medium: 0.10,
            corner_coeff_short: 0.08,
            long_path: 600.0,
            medium_path: 400.0,
            min_corner_span: 3,
            hook_tail_fraction: 0.25,
            hook_min_deg: 95.0,
            hook_max_deg: 175.0,
            hook_min_length: 10.0,
            hook_max_ratio: 0.20,
            merge_span_ratio: 0.5,
            heng_pie_dx: 80.0,
            tail_rise_slope: 0.25,
            straight_body_curvature: 1.08,
            flat_ratio: 2.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_coefficient_shrinks_with_length() {
        let config = ClassifierConfig::default();
        let long = config.corner_threshold(1000.0) / 1000.0;
        let medium = config.corner_threshold(500.0) / 500.0;
        let short = config.corner_threshold(300.0) / 300.0;
        assert!(long >= medium && medium >= short);
    }

    #[test]
    fn sparse_paths_have_a_longer_gate() {
        let config = ClassifierConfig::default();
        assert!(config.is_short(199.0, 10));
        assert!(!config.is_short(250.0, 10));
        assert!(config.is_short(250.0, 5));
        assert!(!config.is_short(280.0, 5));
    }
}
