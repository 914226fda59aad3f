use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "gt")]
    GreaterThan,
    #[serde(rename = "lt")]
    LessThan,
    #[serde(rename = "bt")]
    Between,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    Scalar(f64),
    Range { from: f64, to: f64 },
}

/// A rule exactly as written in offer configuration, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub operator: Operator,
    pub threshold: Threshold,
}

impl RuleSpec {
    pub fn new(operator: Operator, threshold: Threshold) -> Self {
        Self {
            operator,
            threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferRules {
    pub weight: RuleSpec,
    pub distance: RuleSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferSpec {
    pub rules: OfferRules,
    /// Discount percentage.
    pub discount: f64,
    pub title: String,
}

/// A validated discount predicate. Both bounds are inclusive for every variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricingRule {
    GreaterThan(f64),
    LessThan(f64),
    Between { from: f64, to: f64 },
}

impl PricingRule {
    /// `from <= to` is expected for ranges but not checked.
    pub fn try_from_spec(field: &'static str, spec: &RuleSpec) -> Result<Self, ValidationError> {
        match (spec.operator, spec.threshold) {
            (Operator::Between, Threshold::Range { from, to }) => Ok(Self::Between { from, to }),
            (Operator::Between, Threshold::Scalar(_)) => {
                Err(ValidationError::RangeRequired { field })
            }
            (Operator::GreaterThan, Threshold::Scalar(t)) => Ok(Self::GreaterThan(t)),
            (Operator::LessThan, Threshold::Scalar(t)) => Ok(Self::LessThan(t)),
            (_, Threshold::Range { .. }) => Err(ValidationError::ScalarRequired { field }),
        }
    }

    pub fn evaluate(&self, value: f64) -> bool {
        match *self {
            Self::GreaterThan(threshold) => value >= threshold,
            Self::LessThan(threshold) => value <= threshold,
            Self::Between { from, to } => from <= value && value <= to,
        }
    }
}

/// Percentage discount granted only when both the weight and the distance rule hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub title: String,
    pub discount_percent: f64,
    pub weight_rule: PricingRule,
    pub distance_rule: PricingRule,
}

impl Offer {
    pub fn new(
        title: impl Into<String>,
        discount_percent: f64,
        weight_rule: RuleSpec,
        distance_rule: RuleSpec,
    ) -> Result<Self, ValidationError> {
        // distance is validated first so its error wins when both rules are bad
        let distance_rule = PricingRule::try_from_spec("distance", &distance_rule)?;
        let weight_rule = PricingRule::try_from_spec("weight", &weight_rule)?;

        Ok(Self {
            title: title.into(),
            discount_percent,
            weight_rule,
            distance_rule,
        })
    }

    pub fn calculate_discount(&self, weight: f64, distance: f64, total: f64) -> f64 {
        if self.weight_rule.evaluate(weight) && self.distance_rule.evaluate(distance) {
            return (total * self.discount_percent) / 100.0;
        }
        0.0
    }
}

impl TryFrom<OfferSpec> for Offer {
    type Error = ValidationError;

    fn try_from(spec: OfferSpec) -> Result<Self, Self::Error> {
        Offer::new(
            spec.title,
            spec.discount,
            spec.rules.weight,
            spec.rules.distance,
        )
    }
}
