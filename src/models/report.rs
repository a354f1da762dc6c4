use serde::{Deserialize, Serialize};

use super::product::Product;

/// A single skin-scan analysis record tied to one patient and one scan date.
/// Externally owned: the backend is the sole source of truth and a record is
/// either fully trusted or fully discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub patient_id: i64,
    /// Raw backend timestamp, reformatted for display at render time.
    pub scan_date: String,
    /// Dryness score on the same 0-100 scale as the parameter scores.
    #[serde(default)]
    pub dryness: Option<f64>,
    #[serde(default)]
    pub top_issue: Option<String>,
    #[serde(default)]
    pub ai_recommendation: Option<String>,
    #[serde(default)]
    pub gpt_care_plan: Option<String>,
    #[serde(default)]
    pub zyla_result: Option<ZylaResult>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Report {
    pub fn score_info(&self) -> Option<&ScoreInfo> {
        self.zyla_result.as_ref().map(|z| &z.score_info)
    }
}

/// Nested analysis result from the upstream Zyla engine. Only the score
/// mapping is consumed; other keys are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ZylaResult {
    #[serde(default)]
    pub score_info: ScoreInfo,
}

/// The 11 fixed named skin-parameter scores. A missing key means "not
/// measured" and renders as the N/A sentinel, never as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreInfo {
    #[serde(default)]
    pub acne_score: Option<f64>,
    #[serde(default)]
    pub pores_score: Option<f64>,
    #[serde(default)]
    pub wrinkle_score: Option<f64>,
    #[serde(default)]
    pub red_spot_score: Option<f64>,
    #[serde(default)]
    pub rough_score: Option<f64>,
    #[serde(default)]
    pub water_score: Option<f64>,
    #[serde(default)]
    pub oily_intensity_score: Option<f64>,
    #[serde(default)]
    pub sensitivity_score: Option<f64>,
    #[serde(default)]
    pub melanin_score: Option<f64>,
    #[serde(default)]
    pub dark_circle_score: Option<f64>,
    #[serde(default)]
    pub blackhead_score: Option<f64>,
}

impl ScoreInfo {
    pub fn score(&self, parameter: SkinParameter) -> Option<f64> {
        match parameter {
            SkinParameter::Acne => self.acne_score,
            SkinParameter::Pores => self.pores_score,
            SkinParameter::Wrinkles => self.wrinkle_score,
            SkinParameter::RedSpots => self.red_spot_score,
            SkinParameter::Roughness => self.rough_score,
            SkinParameter::Water => self.water_score,
            SkinParameter::Oiliness => self.oily_intensity_score,
            SkinParameter::Sensitivity => self.sensitivity_score,
            SkinParameter::Melanin => self.melanin_score,
            SkinParameter::DarkCircles => self.dark_circle_score,
            SkinParameter::Blackheads => self.blackhead_score,
        }
    }
}

/// The fixed set of skin parameters. Every report renders all 11 slots in
/// this order, whether or not a score is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinParameter {
    Acne,
    Pores,
    Wrinkles,
    RedSpots,
    Roughness,
    Water,
    Oiliness,
    Sensitivity,
    Melanin,
    DarkCircles,
    Blackheads,
}

impl SkinParameter {
    pub const ALL: [SkinParameter; 11] = [
        SkinParameter::Acne,
        SkinParameter::Pores,
        SkinParameter::Wrinkles,
        SkinParameter::RedSpots,
        SkinParameter::Roughness,
        SkinParameter::Water,
        SkinParameter::Oiliness,
        SkinParameter::Sensitivity,
        SkinParameter::Melanin,
        SkinParameter::DarkCircles,
        SkinParameter::Blackheads,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkinParameter::Acne => "Acne",
            SkinParameter::Pores => "Pores",
            SkinParameter::Wrinkles => "Wrinkles",
            SkinParameter::RedSpots => "Red Spots",
            SkinParameter::Roughness => "Texture / Roughness",
            SkinParameter::Water => "Dryness / Water",
            SkinParameter::Oiliness => "Oiliness",
            SkinParameter::Sensitivity => "Sensitivity",
            SkinParameter::Melanin => "Pigmentation (Melanin)",
            SkinParameter::DarkCircles => "Dark Circles",
            SkinParameter::Blackheads => "Blackheads",
        }
    }
}
