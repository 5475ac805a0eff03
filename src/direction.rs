//! Direction quantization: displacement vector → one of six stroke directions.
//!
//! Bins run counter-clockwise from +x in y-up space:
//! 横 → 提 → 撇 → 竖 → 捺 → 横. The 竖 bin carries a length-relative
//! drift test so long diagonals are not mistaken for verticals.

use std::fmt;

use kurbo::Vec2;

use crate::config::ClassifierConfig;
use crate::geom::direction_deg;
use crate::label::StrokeLabel;

/// Semantic direction of one run of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 横, rightward.
    Heng,
    /// 竖, downward.
    Shu,
    /// 撇, falling left.
    Pie,
    /// 捺, falling right.
    Na,
    /// 提, rising right.
    Ti,
    /// 点, no usable displacement.
    Dian,
}

impl Direction {
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::Heng => "横",
            Direction::Shu => "竖",
            Direction::Pie => "撇",
            Direction::Na => "捺",
            Direction::Ti => "提",
            Direction::Dian => "点",
        }
    }

    /// The basic stroke with the same name.
    pub fn label(self) -> StrokeLabel {
        match self {
            Direction::Heng => StrokeLabel::Heng,
            Direction::Shu => StrokeLabel::Shu,
            Direction::Pie => StrokeLabel::Pie,
            Direction::Na => StrokeLabel::Na,
            Direction::Ti => StrokeLabel::Ti,
            Direction::Dian => StrokeLabel::Dian,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Classify a displacement. `path_length` is the whole stroke's arc length,
/// against which leftward drift in the vertical band is judged.
pub fn quantize(v: Vec2, path_length: f64, config: &ClassifierConfig) -> Direction {
    if v.hypot() < 1e-9 {
        return Direction::Dian;
    }
    let angle = direction_deg(v);
    if angle >= config.heng_tail_deg || angle < config.heng_max_deg {
        Direction::Heng
    } else if angle < config.ti_max_deg {
        Direction::Ti
    } else if angle < config.pie_max_deg {
        Direction::Pie
    } else if angle < config.shu_max_deg {
        if v.x < 0.0 && -v.x > config.drift_ratio * path_length {
            Direction::Pie
        } else {
            Direction::Shu
        }
    } else {
        Direction::Na
    }
}

/// Render a direction sequence the way the profile table keys it, e.g. "横-竖".
pub fn sequence_key(dirs: &[Direction]) -> String {
    dirs.iter().map(|d| d.symbol()).collect::<Vec<_>>().join("-")
}
