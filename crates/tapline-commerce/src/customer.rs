//! Wholesale customer records.

use serde::{Deserialize, Serialize};

/// Payment terms observed in the customer directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentTerms {
    /// Pays by check on delivery.
    Check,
    /// Pays through the fintech payment platform.
    Fintech,
}

impl PaymentTerms {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentTerms::Check => "Check",
            PaymentTerms::Fintech => "Fintech",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "check" => Some(PaymentTerms::Check),
            "fintech" => Some(PaymentTerms::Fintech),
            _ => None,
        }
    }
}

/// A customer record from the wholesale directory.
///
/// Fetched by name-prefix query, selected once per session, and
/// treated as immutable for the remainder of the flow. The serde
/// aliases cover the field spellings the directory feed has shipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerRecord {
    /// Customer display name.
    #[serde(alias = "name")]
    pub display_name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// State/province.
    #[serde(default, alias = "state")]
    pub region: String,
    /// Postal/ZIP code.
    #[serde(default, alias = "zip")]
    pub postal_code: String,
    /// Business classification (e.g., "Restaurant"), drives tax
    /// treatment.
    #[serde(default, alias = "businessClassification", alias = "business_type")]
    pub classification: String,
    /// Payment terms, where the directory reports them.
    #[serde(default, alias = "paymentTerms")]
    pub payment_terms: Option<PaymentTerms>,
}

impl CustomerRecord {
    /// Create a record with just a name; remaining fields default.
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            address: String::new(),
            city: String::new(),
            region: String::new(),
            postal_code: String::new(),
            classification: String::new(),
            payment_terms: None,
        }
    }

    /// Format as a single display line ("Name — City, Region").
    pub fn one_line(&self) -> String {
        if self.city.is_empty() && self.region.is_empty() {
            return self.display_name.clone();
        }
        format!("{} - {}, {}", self.display_name, self.city, self.region)
    }

    /// Check whether the directory gave us a usable address.
    pub fn has_address(&self) -> bool {
        !self.address.is_empty() && !self.city.is_empty() && !self.postal_code.is_empty()
    }
}
