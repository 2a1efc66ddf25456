use crate::domain::a001_account::NewAccountRequest;
use crate::domain::common::{is_valid_secret_key, Network};
use crate::shared::services::KeyGenerator;
use thiserror::Error;

/// Input field a validation error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    SecretKey,
    Password,
    RepeatedPassword,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("No account name has been entered.")]
    MissingName,
    #[error("Invalid secret key.")]
    InvalidSecretKey,
    #[error("No password has been entered.")]
    MissingPassword,
    #[error("Password does not match.")]
    PasswordMismatch,
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            FormError::MissingName => FormField::Name,
            FormError::InvalidSecretKey => FormField::SecretKey,
            FormError::MissingPassword => FormField::Password,
            FormError::PasswordMismatch => FormField::RepeatedPassword,
        }
    }
}

/// Values of the account creation form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountCreationValues {
    pub name: String,
    pub create_new_key: bool,
    /// Generated once when the form is opened
    pub generated_secret_key: String,
    pub imported_secret_key: String,
    pub set_password: bool,
    pub password: String,
    pub repeated_password: String,
}

impl AccountCreationValues {
    /// Initial values. A prefilled secret key switches the form to import mode.
    pub fn new(
        default_name: String,
        prefilled_secret_key: Option<&str>,
        keys: &dyn KeyGenerator,
    ) -> Self {
        Self {
            name: default_name,
            create_new_key: prefilled_secret_key.is_none(),
            generated_secret_key: keys.generate_secret_key(),
            imported_secret_key: prefilled_secret_key.unwrap_or_default().to_string(),
            set_password: false,
            password: String::new(),
            repeated_password: String::new(),
        }
    }

    pub fn secret_key(&self) -> &str {
        if self.create_new_key {
            &self.generated_secret_key
        } else {
            self.imported_secret_key.trim()
        }
    }

    /// Check the values in field order, returning the first error
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if !self.create_new_key && !is_valid_secret_key(self.secret_key()) {
            return Err(FormError::InvalidSecretKey);
        }
        if self.set_password {
            if self.password.is_empty() {
                return Err(FormError::MissingPassword);
            }
            if self.password != self.repeated_password {
                return Err(FormError::PasswordMismatch);
            }
        }
        Ok(())
    }

    pub fn to_request(&self, network: Network) -> Result<NewAccountRequest, FormError> {
        self.validate()?;
        Ok(NewAccountRequest {
            name: self.name.trim().to_string(),
            secret_key: self.secret_key().to_string(),
            password: self.set_password.then(|| self.password.clone()),
            network,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "SBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W";

    struct FixedKey;

    impl KeyGenerator for FixedKey {
        fn generate_secret_key(&self) -> String {
            SECRET.to_string()
        }
    }

    fn values() -> AccountCreationValues {
        AccountCreationValues::new("My Account #1".into(), None, &FixedKey)
    }

    #[test]
    fn test_new_values_generate_key() {
        let values = values();
        assert!(values.create_new_key);
        assert_eq!(values.secret_key(), SECRET);
        assert_eq!(values.validate(), Ok(()));

        let imported = AccountCreationValues::new("x".into(), Some(SECRET), &FixedKey);
        assert!(!imported.create_new_key);
        assert_eq!(imported.secret_key(), SECRET);
    }

    #[test]
    fn test_validation_messages() {
        let mut v = values();
        v.name = "  ".into();
        assert_eq!(v.validate().unwrap_err().to_string(), "No account name has been entered.");
        assert_eq!(v.validate().unwrap_err().field(), FormField::Name);

        let mut v = values();
        v.create_new_key = false;
        v.imported_secret_key = "SNOTAKEY".into();
        assert_eq!(v.validate(), Err(FormError::InvalidSecretKey));
        assert_eq!(FormError::InvalidSecretKey.to_string(), "Invalid secret key.");

        let mut v = values();
        v.set_password = true;
        assert_eq!(v.validate().unwrap_err().to_string(), "No password has been entered.");
        v.password = "hunter2".into();
        v.repeated_password = "hunter3".into();
        assert_eq!(v.validate().unwrap_err().to_string(), "Password does not match.");
        v.repeated_password = "hunter2".into();
        assert_eq!(v.validate(), Ok(()));
    }

    #[test]
    fn test_to_request() {
        let mut v = values();
        v.name = " Savings ".into();
        v.set_password = true;
        v.password = "pw".into();
        v.repeated_password = "pw".into();
        let request = v.to_request(Network::Testnet).unwrap();
        assert_eq!(request.name, "Savings");
        assert_eq!(request.secret_key, SECRET);
        assert_eq!(request.password.as_deref(), Some("pw"));
        assert_eq!(request.network, Network::Testnet);

        v.set_password = false;
        assert_eq!(v.to_request(Network::Mainnet).unwrap().password, None);
    }
}
