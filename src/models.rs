use crate::errors::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============ Identification ============

/// Kind of identity document accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    /// National ID number.
    Id,
    /// Passport number.
    Passport,
}

impl IdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::Id => "id",
            IdType::Passport => "passport",
        }
    }
}

impl std::str::FromStr for IdType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(IdType::Id),
            "passport" => Ok(IdType::Passport),
            other => Err(Error::Validation(format!(
                "identification type must be 'id' or 'passport', got '{}'",
                other
            ))),
        }
    }
}

/// An identity document in the shape the API wants.
///
/// Validated at construction and immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Identification {
    /// Either 'id' or 'passport'.
    #[serde(rename = "type")]
    id_type: IdType,
    /// The ID or passport number.
    number: String,
    /// ISO Alpha-2 country code of the issuing country.
    country: String,
}

impl Identification {
    /// Build an identification record.
    ///
    /// The country code must be exactly two characters.
    pub fn new(
        id_type: IdType,
        number: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self, Error> {
        let country = country.into();
        if country.chars().count() != 2 {
            return Err(Error::Validation(format!(
                "country must be a two-letter ISO code, got '{}'",
                country
            )));
        }
        Ok(Self {
            id_type,
            number: number.into(),
            country,
        })
    }

    pub fn id_type(&self) -> IdType {
        self.id_type
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

// ============ Person details ============

/// A person's details in the format the API wants for policyholders.
///
/// ID, first name, and last name are always required; everything else is
/// optional. Fields the API grows later can be passed through `extra`.
#[derive(Debug, Clone, Serialize)]
pub struct PersonDetails {
    id: Identification,
    first_name: String,
    last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cellphone: Option<String>,
    /// Forward-compatible extension fields, flattened into the payload.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl PersonDetails {
    pub fn new(
        id: Identification,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: None,
            gender: None,
            email: None,
            cellphone: None,
            extra: Map::new(),
        }
    }

    pub fn with_date_of_birth(mut self, date_of_birth: impl Into<String>) -> Self {
        self.date_of_birth = Some(date_of_birth.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_cellphone(mut self, cellphone: impl Into<String>) -> Self {
        self.cellphone = Some(cellphone.into());
        self
    }

    /// Attach an extension field the API accepts but this struct does not model.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The wire payload for this person.
    pub fn details(&self) -> Value {
        serde_json::to_value(self).expect("person details serialize to JSON")
    }
}

// ============ Beneficiaries ============

/// Tolerance applied when checking that a beneficiary split sums to 100.
/// Exact f64 equality would reject legitimate splits like 3 x 33.33...
const PERCENTAGE_TOLERANCE: f64 = 1e-6;

/// A person entitled to a percentage share of a policy's claim payout.
#[derive(Debug, Clone, Serialize)]
pub struct Beneficiary {
    #[serde(flatten)]
    person: PersonDetails,
    percentage: f64,
}

impl Beneficiary {
    /// Build a beneficiary; the percentage must lie in [0, 100].
    pub fn new(person: PersonDetails, percentage: f64) -> Result<Self, Error> {
        if !(0.0..=100.0).contains(&percentage) || percentage.is_nan() {
            return Err(Error::Validation(format!(
                "beneficiary percentage must be within [0, 100], got {}",
                percentage
            )));
        }
        Ok(Self { person, percentage })
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// The wire payload for this beneficiary.
    pub fn details(&self) -> Value {
        serde_json::to_value(self).expect("beneficiary details serialize to JSON")
    }
}

/// Check that a set of beneficiaries splits a payout completely.
///
/// The sum of percentages must be 100 for the API to accept the update.
pub fn validate_beneficiary_split(beneficiaries: &[Beneficiary]) -> Result<(), Error> {
    let total: f64 = beneficiaries.iter().map(|b| b.percentage).sum();
    if (total - 100.0).abs() > PERCENTAGE_TOLERANCE {
        return Err(Error::Validation(format!(
            "beneficiary percentages must sum to 100, got {}",
            total
        )));
    }
    Ok(())
}

// ============ Gadget catalog ============

/// One entry of the insurable gadget catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GadgetModel {
    /// Manufacturer, e.g. "Apple".
    pub make: String,
    /// Full model name, e.g. "iPhone 6 Plus 128GB LTE".
    pub name: String,
    /// Insured value in cents.
    pub value: i64,
}

// ============ Product modules ============

/// Insurance product modules quotes can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductModule {
    /// Cover for smartphones and other gadgets.
    Gadget,
    /// Term life cover.
    Term,
    /// Funeral cover.
    Funeral,
}

impl ProductModule {
    /// The `type` discriminator the quotes endpoint expects.
    pub fn type_id(&self) -> &'static str {
        match self {
            ProductModule::Gadget => "root_gadgets",
            ProductModule::Term => "root_term",
            ProductModule::Funeral => "root_funeral",
        }
    }

    /// Fields that must be present in a quote request for this module.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            ProductModule::Gadget => &["model_name"],
            ProductModule::Term => &[
                "cover_amount",
                "cover_period",
                "education_status",
                "smoker",
                "gender",
                "age",
                "basic_income_per_month",
            ],
            ProductModule::Funeral => &[
                "cover_amount",
                "has_spouse",
                "number_of_children",
                "extended_family_ages",
            ],
        }
    }

    /// Required fields not present in `data`, in declaration order.
    pub fn missing_fields(&self, data: &Map<String, Value>) -> Vec<String> {
        self.required_fields()
            .iter()
            .filter(|field| !data.contains_key(**field))
            .map(|field| field.to_string())
            .collect()
    }
}
