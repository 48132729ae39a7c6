use folio_contact::{ContactConfig, ContactError};

use crate::exit_codes;

/// `folio env check`: report every missing or invalid variable at once.
pub fn cmd_check() -> anyhow::Result<i32> {
    match ContactConfig::from_env().validate() {
        Ok(()) => {
            println!("All required environment variables are configured");
            Ok(exit_codes::SUCCESS)
        }
        Err(ContactError::Config { missing }) => {
            eprintln!("Missing required environment variables:");
            for key in &missing {
                eprintln!("  - {key}");
            }
            eprintln!("Set them in the environment or your .env file.");
            Ok(exit_codes::CONFIG_ERROR)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(exit_codes::CONFIG_ERROR)
        }
    }
}
