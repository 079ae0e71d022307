//! Restaurant draft validation

use once_cell::sync::Lazy;
use regex::Regex;

use super::validation::{optional, required};
use super::ValidationError;

const MAX_NAME_LEN: usize = 128;
const MAX_ADDRESS_LEN: usize = 256;
const MAX_ZIP_LEN: usize = 16;
const MAX_PHONE_LEN: usize = 32;
const MAX_URL_LEN: usize = 2048;
const MAX_EMAIL_LEN: usize = 254;

static WEBSITE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("invalid website regex"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// A restaurant that has not been stored yet.
///
/// Construct with [`NewRestaurant::new`] and optionally attach a website
/// and email. Storing it through
/// [`RestaurantStore::add`](crate::RestaurantStore::add) yields a
/// [`Restaurant`](crate::Restaurant) carrying the generated id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    name: String,
    address: String,
    zip: String,
    phone: String,
    website: Option<String>,
    email: Option<String>,
}

impl NewRestaurant {
    /// Create a restaurant draft with its required contact fields.
    ///
    /// # Example
    /// ```
    /// use jadle_store::models::NewRestaurant;
    ///
    /// let draft = NewRestaurant::new("Fish Witch", "214 NE Broadway", "97232", "503-402-9874")
    ///     .unwrap()
    ///     .with_website("http://fishwitch.com")
    ///     .unwrap();
    /// assert_eq!(draft.website(), Some("http://fishwitch.com"));
    /// assert!(NewRestaurant::new("", "214 NE Broadway", "97232", "503-402-9874").is_err());
    /// ```
    pub fn new(name: &str, address: &str, zip: &str, phone: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", name, MAX_NAME_LEN)?,
            address: required("address", address, MAX_ADDRESS_LEN)?,
            zip: required("zip", zip, MAX_ZIP_LEN)?,
            phone: required("phone", phone, MAX_PHONE_LEN)?,
            website: None,
            email: None,
        })
    }

    /// Attach a website. Must be an `http://` or `https://` URL.
    pub fn with_website(mut self, website: &str) -> Result<Self, ValidationError> {
        self.website = optional("website", Some(website), MAX_URL_LEN)?;
        if let Some(url) = &self.website {
            if !WEBSITE_RE.is_match(url) {
                return Err(ValidationError::InvalidFormat {
                    field: "website",
                    reason: "must be an http:// or https:// URL",
                });
            }
        }
        Ok(self)
    }

    /// Attach a contact email.
    pub fn with_email(mut self, email: &str) -> Result<Self, ValidationError> {
        self.email = optional("email", Some(email), MAX_EMAIL_LEN)?;
        if let Some(addr) = &self.email {
            if !EMAIL_RE.is_match(addr) {
                return Err(ValidationError::InvalidFormat {
                    field: "email",
                    reason: "must look like name@domain",
                });
            }
        }
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewRestaurant {
        NewRestaurant::new("Fish Omena", "214 NE Ngara", "97232", "254-402-9874").unwrap()
    }

    #[test]
    fn optional_fields_default_to_none() {
        let d = draft();
        assert_eq!(d.name(), "Fish Omena");
        assert_eq!(d.website(), None);
        assert_eq!(d.email(), None);
    }

    #[test]
    fn accepts_website_and_email() {
        let d = draft()
            .with_website("http://fishwitch.com")
            .unwrap()
            .with_email("hellofishy@fishwitch.com")
            .unwrap();
        assert_eq!(d.website(), Some("http://fishwitch.com"));
        assert_eq!(d.email(), Some("hellofishy@fishwitch.com"));
    }

    #[test]
    fn rejects_bad_website() {
        let err = draft().with_website("fishwitch.com").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "website", .. }));
    }

    #[test]
    fn rejects_bad_email() {
        let err = draft().with_email("hellofishy").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "email", .. }));
    }

    #[test]
    fn blank_email_clears_field() {
        let d = draft().with_email("   ").unwrap();
        assert_eq!(d.email(), None);
    }

    #[test]
    fn rejects_missing_phone() {
        let err = NewRestaurant::new("Fish Omena", "214 NE Ngara", "97232", "").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "phone" });
    }
}
