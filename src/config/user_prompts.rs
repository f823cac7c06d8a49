//! User prompts for configuration setup
//!
//! Used when no config file exists and the API token was not supplied
//! through the environment.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for a smash.gg API token and returns the trimmed input.
///
/// # Example
/// ```no_run
/// use smashgg_results::config::user_prompts::prompt_for_api_token;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let token = prompt_for_api_token().await?;
/// println!("Got a token of {} characters", token.len());
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_api_token() -> Result<String, AppError> {
    println!("Please enter your smash.gg API token: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
