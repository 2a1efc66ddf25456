pub mod u001_create_account;
