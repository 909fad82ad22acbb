//! AI daily-sales report boundary.
//!
//! The core passes today's aggregate figures as a natural-language prompt to
//! an external text-generation service and hands the plain-text reply back
//! verbatim. The capability is optional: with no generator configured, with
//! no sales today, or on any call failure the service degrades to a fixed
//! message and never surfaces an error.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, FixedOffset};
use log::{error, info};
use serde_json::json;

use crate::domain::analytics_service::AnalyticsService;
use crate::domain::models::transaction::Transaction;

/// Fallback when no text-generation capability is configured.
pub const FALLBACK_NOT_CONFIGURED: &str =
    "AI reports are unavailable: no API key is configured.";

/// Fallback when the current day has no recorded sales.
pub const FALLBACK_NO_SALES: &str = "No sales recorded today yet - ring up the first order!";

/// Fallback when the outbound call fails for any reason.
pub const FALLBACK_REQUEST_FAILED: &str =
    "Sorry, the sales report could not be generated right now. Please check your network connection.";

/// Abstract text-generation capability. The response is opaque plain text;
/// the core never parses it.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Service producing the operator-facing daily report.
pub struct ReportService {
    generator: Option<Box<dyn TextGenerator>>,
    analytics: AnalyticsService,
}

impl ReportService {
    pub fn new(generator: Option<Box<dyn TextGenerator>>) -> Self {
        Self {
            generator,
            analytics: AnalyticsService::new(),
        }
    }

    /// Build a service from the environment; a missing `GEMINI_API_KEY`
    /// leaves the capability absent rather than failing.
    pub fn from_env() -> Self {
        match GeminiClient::from_env() {
            Some(client) => Self::new(Some(Box::new(client))),
            None => {
                info!("GEMINI_API_KEY not set; daily reports will use the fallback message");
                Self::new(None)
            }
        }
    }

    /// Analyze today's sales. Always returns displayable text.
    pub fn daily_report(
        &self,
        transactions: &[Transaction],
        now: DateTime<FixedOffset>,
    ) -> String {
        let Some(generator) = &self.generator else {
            return FALLBACK_NOT_CONFIGURED.to_string();
        };

        let summary = self.analytics.daily_summary(transactions, now);
        if summary.order_count == 0 {
            return FALLBACK_NO_SALES.to_string();
        }

        let todays: Vec<Transaction> = transactions
            .iter()
            .filter(|t| t.local_day(*now.offset()) == Some(summary.date))
            .cloned()
            .collect();
        let unit_counts = self.analytics.product_unit_counts(&todays);

        let prompt = Self::build_prompt(
            summary.date.format("%Y-%m-%d").to_string(),
            summary.total_sales,
            summary.total_profit,
            &unit_counts,
        );

        match generator.generate(&prompt) {
            Ok(text) => text,
            Err(e) => {
                error!("Daily report generation failed: {:#}", e);
                FALLBACK_REQUEST_FAILED.to_string()
            }
        }
    }

    fn build_prompt(
        date: String,
        total_sales: f64,
        total_profit: f64,
        unit_counts: &[(String, u32)],
    ) -> String {
        let product_lines = unit_counts
            .iter()
            .map(|(name, count)| format!("{}: {}", name, count))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "You are a senior business analyst for a small retail shop.\n\
             Here is today's sales summary:\n\
             - Date: {}\n\
             - Total revenue: ¥{:.2}\n\
             - Total profit: ¥{:.2}\n\
             - Units sold per product: {}\n\
             \n\
             Please provide a short, encouraging and actionable report on today's performance, covering:\n\
             1. Profit margin analysis.\n\
             2. Today's best seller.\n\
             3. One suggestion for tomorrow.\n\
             \n\
             Keep the tone professional but friendly, and format the reply with Markdown bullet points.",
            date, total_sales, total_profit, product_lines
        )
    }
}

/// Blocking client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";

    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: Self::DEFAULT_MODEL.to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Read the API key from `GEMINI_API_KEY`; `None` when unset or empty.
    pub fn from_env() -> Option<Self> {
        std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Self::new)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(Duration::from_secs(30))
            .json(&body)
            .send()
            .context("Failed to reach the text-generation service")?
            .error_for_status()
            .context("Text-generation service returned an error status")?;

        let payload: serde_json::Value = response
            .json()
            .context("Failed to read the text-generation response")?;
        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Text-generation response contained no text candidate"))
    }
}
