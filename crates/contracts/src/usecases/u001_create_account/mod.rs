pub mod flow;
pub mod form;

pub use flow::{CreateAccountFlow, CreationState};
pub use form::{AccountCreationValues, FormError, FormField};

use crate::usecases::common::UseCaseMetadata;

pub struct CreateAccount;

impl UseCaseMetadata for CreateAccount {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "create_account"
    }

    fn display_name() -> &'static str {
        "Add account"
    }

    fn description() -> &'static str {
        "Create a new account from a generated or imported secret key"
    }
}
