use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter summary of a quality score, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "F")]
    F,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

/// Minimum score for each grade above F, highest first.
const THRESHOLDS: [(u8, Grade); 10] = [
    (90, Grade::APlus),
    (85, Grade::A),
    (80, Grade::AMinus),
    (75, Grade::BPlus),
    (70, Grade::B),
    (65, Grade::BMinus),
    (60, Grade::CPlus),
    (55, Grade::C),
    (50, Grade::CMinus),
    (40, Grade::D),
];

impl Grade {
    pub fn from_score(score: u8) -> Self {
        THRESHOLDS
            .iter()
            .find(|(minimum, _)| score >= *minimum)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::F => "F",
            Grade::D => "D",
            Grade::CMinus => "C-",
            Grade::C => "C",
            Grade::CPlus => "C+",
            Grade::BMinus => "B-",
            Grade::B => "B",
            Grade::BPlus => "B+",
            Grade::AMinus => "A-",
            Grade::A => "A",
            Grade::APlus => "A+",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_map_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::APlus);
        assert_eq!(Grade::from_score(90), Grade::APlus);
        assert_eq!(Grade::from_score(89), Grade::A);
        assert_eq!(Grade::from_score(85), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::AMinus);
        assert_eq!(Grade::from_score(75), Grade::BPlus);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(65), Grade::BMinus);
        assert_eq!(Grade::from_score(60), Grade::CPlus);
        assert_eq!(Grade::from_score(55), Grade::C);
        assert_eq!(Grade::from_score(50), Grade::CMinus);
        assert_eq!(Grade::from_score(49), Grade::D);
        assert_eq!(Grade::from_score(40), Grade::D);
        assert_eq!(Grade::from_score(39), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn grade_never_drops_as_score_rises() {
        let mut previous = Grade::from_score(0);
        for score in 1..=100u8 {
            let grade = Grade::from_score(score);
            assert!(grade >= previous, "grade fell at score {score}");
            previous = grade;
        }
    }

    #[test]
    fn serializes_as_letter_label() {
        let json = serde_json::to_string(&Grade::AMinus).expect("serialize grade");
        assert_eq!(json, "\"A-\"");
        let parsed: Grade = serde_json::from_str("\"C+\"").expect("parse grade");
        assert_eq!(parsed, Grade::CPlus);
        assert_eq!(Grade::BPlus.to_string(), "B+");
    }
}
