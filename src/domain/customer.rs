use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier assigned by the remote source. Numbers and strings are both
/// accepted on the wire and kept as an opaque string afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for CustomerId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => CustomerId::from(n),
            RawId::Text(s) => CustomerId(s),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: String,
}

impl Address {
    /// `country, city, street` as shown in the detail dialog.
    pub fn summary(&self) -> String {
        format!("{}, {}, {}", self.country, self.city, self.street)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birthday: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,

    // Display-only values; the source normally omits them
    #[serde(default, rename = "loanType", skip_serializing_if = "Option::is_none")]
    pub loan_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Customer {
    pub fn new(id: impl Into<CustomerId>, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            email: String::new(),
            phone: String::new(),
            gender: String::new(),
            birthday: String::new(),
            website: String::new(),
            address: Address::default(),
            loan_type: None,
            status: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    pub fn field(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::FirstName => &self.firstname,
            CustomerField::LastName => &self.lastname,
            CustomerField::Email => &self.email,
            CustomerField::Phone => &self.phone,
            CustomerField::Birthday => &self.birthday,
            CustomerField::Website => &self.website,
        }
    }

    pub fn set_field(&mut self, field: CustomerField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CustomerField::FirstName => self.firstname = value,
            CustomerField::LastName => self.lastname = value,
            CustomerField::Email => self.email = value,
            CustomerField::Phone => self.phone = value,
            CustomerField::Birthday => self.birthday = value,
            CustomerField::Website => self.website = value,
        }
    }
}

/// Fields exposed on the profile edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    FirstName,
    LastName,
    Email,
    Phone,
    Birthday,
    Website,
}

impl CustomerField {
    pub const EDITABLE: [CustomerField; 6] = [
        CustomerField::FirstName,
        CustomerField::LastName,
        CustomerField::Email,
        CustomerField::Phone,
        CustomerField::Birthday,
        CustomerField::Website,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CustomerField::FirstName => "firstname",
            CustomerField::LastName => "lastname",
            CustomerField::Email => "email",
            CustomerField::Phone => "phone",
            CustomerField::Birthday => "birthday",
            CustomerField::Website => "website",
        }
    }
}

/// Table row values computed at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRow {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub loan_type: String,
    pub outstanding_balance: &'static str,
    pub status: String,
}

impl CustomerRow {
    pub fn is_paid(&self) -> bool {
        self.status == "Paid"
    }

    pub fn badge_class(&self) -> &'static str {
        if self.is_paid() { "badge bg-success" } else { "badge bg-danger" }
    }
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.clone(),
            name: customer.full_name(),
            email: customer.email.clone(),
            loan_type: customer
                .loan_type
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Ongoing".to_string()),
            outstanding_balance: if customer.gender == "female" { "N10.000" } else { "N20.000" },
            status: customer
                .status
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}
