//! Predictions probe
//!
//! Posts a request envelope (14-day synthetic history + goals, or empty) to
//! `/ai/predict` and renders goal likelihoods, anomalies, up to 7 days of
//! future projections, and actionable insights. Every nested field access is
//! guarded so a partially populated response degrades to "N/A" or an
//! omitted section.

use colored::Colorize;

use crate::client::ApiClient;
use crate::common::{Error, Result};
use crate::model::{
    display, display_or, Envelope, Predictions, PredictionsRequest, ResponseEnvelope,
};

/// Projections beyond one week are not rendered.
const MAX_PROJECTION_DAYS: usize = 7;

pub async fn run(client: &ApiClient, sample_data: bool) -> Result<()> {
    println!("\n{}", "Testing AI predictions endpoint...".cyan());

    let payload = if sample_data {
        PredictionsRequest::sample()
    } else {
        PredictionsRequest::stored()
    };

    let response = client
        .post_json("/ai/predict", &Envelope { data: payload })
        .await?;
    println!("Status Code: {}", response.status);

    if response.status != 200 {
        println!("{}", "Failed to retrieve predictions:".red());
        println!("{}", response.pretty_body());
        return Err(Error::http_status(response.status, response.body));
    }

    println!("{}", "Predictions retrieved successfully:".green());

    let data = ResponseEnvelope::parse(&response.body);
    if data.is_fallback {
        println!(
            "{}",
            "WARNING: Using fallback predictions (AI service might be down)".yellow()
        );
    }

    match &data.predictions {
        Some(predictions) => render(predictions),
        None => println!("No prediction data found in the response"),
    }

    Ok(())
}

fn render(predictions: &Predictions) {
    println!("\n=== PREDICTIONS SUMMARY ===");

    if let Some(goals) = &predictions.goal_achievement {
        println!("\nGoal Achievement:");
        println!(
            "- Daily Step Goal: {} steps",
            display(goals.daily_step_goal.as_ref())
        );
        println!(
            "- Step Goal Likelihood: {}",
            display(goals.step_goal_likelihood.as_ref())
        );
        println!(
            "- Weekly Active Minutes Goal: {} minutes",
            display(goals.weekly_active_minutes_goal.as_ref())
        );
        println!(
            "- Active Minutes Goal Likelihood: {}",
            display(goals.active_minutes_goal_likelihood.as_ref())
        );
    }

    if let Some(detection) = &predictions.anomaly_detection {
        if let Some(anomalies) = &detection.anomalies {
            if anomalies.is_empty() {
                println!("\nNo anomalies detected");
            } else {
                println!("\nDetected Anomalies:");
                for anomaly in anomalies {
                    println!(
                        "- {}: {} ({} steps)",
                        display(anomaly.date.as_ref()),
                        display(anomaly.reason.as_ref()),
                        display(anomaly.steps.as_ref())
                    );
                }
            }
        }
    }

    if !predictions.future_projections.is_empty() {
        println!("\nActivity Projections for Next 7 Days:");
        for projection in predictions.future_projections.iter().take(MAX_PROJECTION_DAYS) {
            println!(
                "- {} ({}): {} steps, {} active minutes",
                display(projection.date.as_ref()),
                display_or(projection.day_of_week.as_ref(), ""),
                display(projection.projected_steps.as_ref()),
                display(projection.projected_active_minutes.as_ref())
            );
        }
    }

    if let Some(insights) = &predictions.actionable_insights {
        if !insights.is_empty() {
            println!("\nActionable Insights:");
            for item in insights.as_slice() {
                println!("- {}", display(Some(item)));
            }
        }
    }
}
