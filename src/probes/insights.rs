//! Insights probe
//!
//! Posts a request envelope to `/ai/insights` and walks the response
//! defensively: each section renders only if present, tolerating both
//! single-value and sequence shapes.

use colored::Colorize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::common::{Error, Result};
use crate::model::{display, Envelope, Insights, InsightsRequest, OneOrMany, ResponseEnvelope};

pub async fn run(client: &ApiClient, sample_data: bool) -> Result<()> {
    println!("\n{}", "Testing AI insights endpoint...".cyan());

    let payload = if sample_data {
        InsightsRequest::sample()
    } else {
        InsightsRequest::stored()
    };

    let response = client
        .post_json("/ai/insights", &Envelope { data: payload })
        .await?;
    println!("Status Code: {}", response.status);

    if response.status != 200 {
        println!("{}", "Failed to retrieve insights:".red());
        println!("{}", response.pretty_body());
        return Err(Error::http_status(response.status, response.body));
    }

    println!("{}", "Insights retrieved successfully:".green());

    let data = ResponseEnvelope::parse(&response.body);
    if data.is_fallback {
        println!(
            "{}",
            "WARNING: Using fallback insights (AI service might be down)".yellow()
        );
    }

    // Absence of the whole block is not a failure; HTTP 200 already counted
    match &data.insights {
        Some(insights) => render(insights),
        None => println!("No insights data found in the response"),
    }

    Ok(())
}

fn render(insights: &Insights) {
    println!("\n=== INSIGHTS SUMMARY ===");

    if let Some(summary) = &insights.summary {
        println!("\nSummary: {}", display(Some(summary)));
    }

    print_section("Health Impact", insights.health_impact.as_ref());
    print_section("Recommendations", insights.recommendations.as_ref());

    if let Some(steps) = &insights.next_steps {
        if !steps.is_empty() {
            println!("\nNext Steps:");
            for (i, item) in steps.as_slice().iter().enumerate() {
                println!("{}. {}", i + 1, display(Some(item)));
            }
        }
    }
}

fn print_section(title: &str, items: Option<&OneOrMany<Value>>) {
    let Some(items) = items else { return };
    if items.is_empty() {
        return;
    }

    println!("\n{title}:");
    for item in items.as_slice() {
        println!("- {}", display(Some(item)));
    }
}
