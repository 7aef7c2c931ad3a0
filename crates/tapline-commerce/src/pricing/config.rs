//! Pricing configuration.
//!
//! The business constants are compiled-in defaults, exposed as named
//! parameters rather than scattered literals.

use crate::customer::CustomerRecord;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Case units required before the volume discount applies.
pub const CASE_DISCOUNT_THRESHOLD: i64 = 10;
/// Volume discount rate applied to the subtotal.
pub const CASE_DISCOUNT_RATE: f64 = 0.10;
/// Tax rate for taxable business classifications.
pub const TAX_RATE: f64 = 0.06;
/// Refundable deposit per keg unit, in cents.
pub const KEG_DEPOSIT_CENTS: i64 = 30_00;
/// Business classification subject to tax.
pub const TAXABLE_CLASSIFICATION: &str = "Restaurant";

/// How the taxable classification string is compared.
///
/// The directory data is inconsistent about casing, so this is a
/// configuration knob rather than a hard-coded rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClassificationMatch {
    /// Exact, case-sensitive match.
    #[default]
    Exact,
    /// ASCII case-insensitive match.
    CaseInsensitive,
}

impl ClassificationMatch {
    /// Compare a customer classification against the taxable one.
    pub fn matches(&self, classification: &str, taxable: &str) -> bool {
        match self {
            ClassificationMatch::Exact => classification == taxable,
            ClassificationMatch::CaseInsensitive => {
                classification.eq_ignore_ascii_case(taxable)
            }
        }
    }
}

/// Named pricing parameters for one ordering context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Currency all line items must carry.
    pub currency: Currency,
    /// Case units required before the discount applies.
    pub case_discount_threshold: i64,
    /// Discount rate applied to the subtotal once the threshold is met.
    pub case_discount_rate: f64,
    /// Tax rate for taxable classifications.
    pub tax_rate: f64,
    /// Per-unit keg deposit.
    pub keg_deposit: Money,
    /// Classification subject to tax.
    pub taxable_classification: String,
    /// How classifications are compared.
    pub classification_match: ClassificationMatch,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            case_discount_threshold: CASE_DISCOUNT_THRESHOLD,
            case_discount_rate: CASE_DISCOUNT_RATE,
            tax_rate: TAX_RATE,
            keg_deposit: Money::new(KEG_DEPOSIT_CENTS, Currency::USD),
            taxable_classification: TAXABLE_CLASSIFICATION.to_string(),
            classification_match: ClassificationMatch::default(),
        }
    }
}

impl PricingConfig {
    /// Set the currency, re-denominating the keg deposit.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self.keg_deposit = Money::new(self.keg_deposit.amount_cents, currency);
        self
    }

    /// Set the case discount threshold.
    pub fn with_case_discount_threshold(mut self, threshold: i64) -> Self {
        self.case_discount_threshold = threshold;
        self
    }

    /// Set the case discount rate.
    pub fn with_case_discount_rate(mut self, rate: f64) -> Self {
        self.case_discount_rate = rate;
        self
    }

    /// Set the tax rate.
    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Set the per-unit keg deposit.
    pub fn with_keg_deposit(mut self, deposit: Money) -> Self {
        self.keg_deposit = deposit;
        self
    }

    /// Set the taxable classification string.
    pub fn with_taxable_classification(mut self, classification: impl Into<String>) -> Self {
        self.taxable_classification = classification.into();
        self
    }

    /// Set how classifications are compared.
    pub fn with_classification_match(mut self, mode: ClassificationMatch) -> Self {
        self.classification_match = mode;
        self
    }

    /// Whether tax applies to this customer.
    pub fn is_taxable(&self, customer: &CustomerRecord) -> bool {
        self.classification_match
            .matches(&customer.classification, &self.taxable_classification)
    }
}
