//! Connectivity probe
//!
//! Authenticated GET against `/ai/test`. Success is strictly HTTP 200; the
//! response body is printed verbatim (pretty-printed when it is JSON).

use colored::Colorize;

use crate::client::ApiClient;
use crate::common::{Error, Result};

pub async fn run(client: &ApiClient) -> Result<()> {
    println!("\n{}", "Testing AI service connection...".cyan());

    let response = client.get("/ai/test").await?;
    println!("Status Code: {}", response.status);

    if response.status == 200 {
        println!("{}", "Connection successful:".green());
        println!("{}", response.pretty_body());
        Ok(())
    } else {
        println!("{}", "Connection failed:".red());
        println!("{}", response.pretty_body());
        Err(Error::http_status(response.status, response.body))
    }
}
