//! The closed stroke-name taxonomy and its coarse families.

use std::fmt;
use std::str::FromStr;

use crate::error::StrokeError;

macro_rules! stroke_labels {
    ($($(#[$attr:meta])* $variant:ident => $name:literal),+ $(,)?) => {
        /// Canonical stroke names of the traditional calligraphy taxonomy.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StrokeLabel {
            $($(#[$attr])* $variant,)+
        }

        impl StrokeLabel {
            /// Every label, in declaration order.
            pub const ALL: &'static [StrokeLabel] = &[$(StrokeLabel::$variant,)+];

            /// The Chinese name, as spoken and displayed.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(StrokeLabel::$variant => $name,)+
                }
            }
        }

        impl FromStr for StrokeLabel {
            type Err = StrokeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($name => Ok(StrokeLabel::$variant),)+
                    other => Err(StrokeError::UnknownLabel(other.to_string())),
                }
            }
        }
    };
}

stroke_labels! {
    Heng => "横",
    Shu => "竖",
    Pie => "撇",
    Na => "捺",
    /// Degenerate input always reads as a dot.
    #[default]
    Dian => "点",
    Ti => "提",
    HengZhe => "横折",
    HengGou => "横钩",
    HengZheGou => "横折钩",
    HengZheTi => "横折提",
    HengZheWan => "横折弯",
    HengZheWanGou => "横折弯钩",
    HengZheZhe => "横折折",
    HengZheZheZhe => "横折折折",
    HengZheZhePie => "横折折撇",
    HengZheZheGou => "横折折钩",
    HengZheZheZheGou => "横折折折钩",
    HengPie => "横撇",
    HengPieWanGou => "横撇弯钩",
    HengXieGou => "横斜钩",
    ShuZhe => "竖折",
    ShuGou => "竖钩",
    ShuTi => "竖提",
    ShuWan => "竖弯",
    ShuWanGou => "竖弯钩",
    ShuZheZhe => "竖折折",
    ShuZheZheGou => "竖折折钩",
    ShuZhePie => "竖折撇",
    ShuPie => "竖撇",
    PieZhe => "撇折",
    PieDian => "撇点",
    WoGou => "卧钩",
    XieGou => "斜钩",
    WanGou => "弯钩",
}

impl fmt::Display for StrokeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse groups of near-synonymous labels, for relaxed comparisons only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeFamily {
    /// 横折系列
    HengZhe,
    /// 钩系列
    Gou,
    /// 竖折系列
    ShuZhe,
    /// 点捺系列
    DianNa,
    /// 撇系列
    Pie,
    /// A label that belongs to no wider group.
    Single(StrokeLabel),
}

impl StrokeFamily {
    pub fn of(label: StrokeLabel) -> Self {
        use StrokeLabel::*;
        match label {
            HengZhe | HengPie | HengGou | HengZheGou | HengZheTi | HengZheWan => StrokeFamily::HengZhe,
            ShuGou | ShuWanGou | XieGou | WoGou | WanGou => StrokeFamily::Gou,
            ShuZhe => StrokeFamily::ShuZhe,
            Dian | Na => StrokeFamily::DianNa,
            Pie | ShuPie => StrokeFamily::Pie,
            other => StrokeFamily::Single(other),
        }
    }

    /// A label standing for the whole family; `of(representative())` is the family again.
    pub fn representative(self) -> StrokeLabel {
        match self {
            StrokeFamily::HengZhe => StrokeLabel::HengZhe,
            StrokeFamily::Gou => StrokeLabel::ShuGou,
            StrokeFamily::ShuZhe => StrokeLabel::ShuZhe,
            StrokeFamily::DianNa => StrokeLabel::Dian,
            StrokeFamily::Pie => StrokeLabel::Pie,
            StrokeFamily::Single(label) => label,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StrokeFamily::HengZhe => "横折系列",
            StrokeFamily::Gou => "钩系列",
            StrokeFamily::ShuZhe => "竖折系列",
            StrokeFamily::DianNa => "点捺系列",
            StrokeFamily::Pie => "撇系列",
            StrokeFamily::Single(label) => label.as_str(),
        }
    }
}

impl fmt::Display for StrokeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collapse a label onto its family's representative.
pub fn normalize(label: StrokeLabel) -> StrokeLabel {
    StrokeFamily::of(label).representative()
}

/// Equality up to family.
pub fn relaxed_eq(a: StrokeLabel, b: StrokeLabel) -> bool {
    StrokeFamily::of(a) == StrokeFamily::of(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for &label in StrokeLabel::ALL {
            assert_eq!(label.as_str().parse::<StrokeLabel>().ok(), Some(label));
        }
    }

    #[test]
    fn default_is_dot() {
        assert_eq!(StrokeLabel::default(), StrokeLabel::Dian);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!("折".parse::<StrokeLabel>(), Err(StrokeError::UnknownLabel(_))));
    }

    #[test]
    fn normalization_is_idempotent() {
        for &label in StrokeLabel::ALL {
            let once = normalize(label);
            assert_eq!(normalize(once), once, "{} normalized twice changed", label);
            let family = StrokeFamily::of(label);
            assert_eq!(StrokeFamily::of(family.representative()), family);
        }
    }

    #[test]
    fn near_synonyms_compare_equal_when_relaxed() {
        assert!(relaxed_eq(StrokeLabel::HengZhe, StrokeLabel::HengPie));
        assert!(relaxed_eq(StrokeLabel::HengZhe, StrokeLabel::HengGou));
        assert_eq!(normalize(StrokeLabel::HengGou), StrokeLabel::HengZhe);
        assert!(relaxed_eq(StrokeLabel::WoGou, StrokeLabel::XieGou));
        assert!(relaxed_eq(StrokeLabel::Dian, StrokeLabel::Na));
        assert!(!relaxed_eq(StrokeLabel::Heng, StrokeLabel::Shu));
        assert_eq!(StrokeFamily::of(StrokeLabel::ShuWanGou).to_string(), "钩系列");
    }
}
