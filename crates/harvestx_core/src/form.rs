use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

use crate::ledger::CreateOfferRequest;
use crate::ParseEnumError;

/// Inputs of the create-listing form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    ProductName,
    ProductType,
    QualityGrade,
    Description,
    TotalQuantity,
    PricePerKg,
    MinimumInvestment,
    Location,
    HarvestDate,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::ProductName,
        FormField::ProductType,
        FormField::QualityGrade,
        FormField::Description,
        FormField::TotalQuantity,
        FormField::PricePerKg,
        FormField::MinimumInvestment,
        FormField::Location,
        FormField::HarvestDate,
    ];

    /// Field key as submitted by the form.
    pub fn name(self) -> &'static str {
        match self {
            FormField::ProductName => "productName",
            FormField::ProductType => "productType",
            FormField::QualityGrade => "qualityGrade",
            FormField::Description => "description",
            FormField::TotalQuantity => "totalQuantity",
            FormField::PricePerKg => "pricePerKg",
            FormField::MinimumInvestment => "minimumInvestment",
            FormField::Location => "location",
            FormField::HarvestDate => "harvestDate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::ProductName => "Product Name",
            FormField::ProductType => "Product Type",
            FormField::QualityGrade => "Quality Grade",
            FormField::Description => "Description",
            FormField::TotalQuantity => "Total Quantity (kg)",
            FormField::PricePerKg => "Price per kg ($)",
            FormField::MinimumInvestment => "Minimum Investment ($)",
            FormField::Location => "Location",
            FormField::HarvestDate => "Expected Harvest Date",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "form field",
                value: s.to_string(),
            })
    }
}

/// Every listing field is mandatory.
pub const REQUIRED_LISTING_FIELDS: [FormField; 9] = FormField::ALL;

/// Required fields whose value is absent or the empty string.
///
/// Whitespace counts as a value; only the empty string is missing.
pub fn missing_fields(
    values: &BTreeMap<FormField, String>,
    required: &[FormField],
) -> Vec<FormField> {
    required
        .iter()
        .copied()
        .filter(|field| values.get(field).map_or(true, String::is_empty))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Passed,
    Missing(Vec<FormField>),
}

impl Validation {
    pub fn is_passed(&self) -> bool {
        matches!(self, Validation::Passed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required fields: {0:?}")]
    Missing(Vec<FormField>),
    #[error("invalid value `{value}` for {field}: {reason}")]
    Invalid {
        field: FormField,
        value: String,
        reason: String,
    },
}

/// Create-listing form contents, keyed by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingForm {
    values: BTreeMap<FormField, String>,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            values: FormField::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        }
    }
}

impl ListingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &BTreeMap<FormField, String> {
        &self.values
    }

    /// Sets every field back to the empty string.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    pub fn validate(&self) -> Validation {
        let missing = missing_fields(&self.values, &REQUIRED_LISTING_FIELDS);
        if missing.is_empty() {
            Validation::Passed
        } else {
            Validation::Missing(missing)
        }
    }

    /// Parses the form into a ledger request.
    pub fn to_offer_request(&self) -> Result<CreateOfferRequest, FormError> {
        if let Validation::Missing(missing) = self.validate() {
            return Err(FormError::Missing(missing));
        }

        Ok(CreateOfferRequest {
            product_name: self.text_field(FormField::ProductName)?,
            product_type: self.parse_field(FormField::ProductType)?,
            quality_grade: self.parse_field(FormField::QualityGrade)?,
            description: self.text_field(FormField::Description)?,
            total_quantity: self.parse_field(FormField::TotalQuantity)?,
            price_per_kg: self.parse_price()?,
            minimum_investment: self.parse_field(FormField::MinimumInvestment)?,
            location: self.text_field(FormField::Location)?,
            harvest_date: self.parse_date()?,
        })
    }

    /// Free-text value; whitespace passes validation but is not a usable value.
    fn text_field(&self, field: FormField) -> Result<String, FormError> {
        let text = self.get(field).trim();
        if text.is_empty() {
            return Err(FormError::Invalid {
                field,
                value: self.get(field).to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        Ok(text.to_string())
    }

    fn parse_field<T>(&self, field: FormField) -> Result<T, FormError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self.get(field).trim();
        raw.parse::<T>().map_err(|err| FormError::Invalid {
            field,
            value: raw.to_string(),
            reason: err.to_string(),
        })
    }

    fn parse_price(&self) -> Result<f64, FormError> {
        let price: f64 = self.parse_field(FormField::PricePerKg)?;
        if !price.is_finite() || price < 0.0 {
            return Err(FormError::Invalid {
                field: FormField::PricePerKg,
                value: self.get(FormField::PricePerKg).to_string(),
                reason: "price must be a non-negative number".to_string(),
            });
        }
        Ok(price)
    }

    fn parse_date(&self) -> Result<NaiveDate, FormError> {
        let raw = self.get(FormField::HarvestDate).trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|err| FormError::Invalid {
            field: FormField::HarvestDate,
            value: raw.to_string(),
            reason: err.to_string(),
        })
    }
}
