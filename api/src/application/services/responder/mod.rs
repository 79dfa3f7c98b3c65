//! Canned chat replies chosen by ordered keyword rules.
//!
//! The rule order is part of the contract: an input mentioning both
//! "appointment" and "pain" gets the scheduling reply.

use serde_json::Value;

pub const GREETING: &str = "Hello! How can I assist you with your healthcare needs today?";
pub const SCHEDULING: &str =
    "I can help you schedule an appointment. What type of appointment do you need?";
pub const SYMPTOM_TRIAGE: &str = "Please describe your symptoms in detail, and I'll help you find appropriate care or suggest when to seek medical attention.";
pub const EMERGENCY: &str =
    "For emergencies, please call 911 immediately. For HealthCare Connect support, call 1-800-HEALTH.";
pub const CRISIS_LINE: &str = "Mental health support is available. You can start an anonymous counseling session or call the Suicide & Crisis Lifeline at 988.";

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid input")]
pub struct InvalidInput;

pub fn respond(input: &str) -> String {
    let lower = input.trim().to_lowercase();

    let reply = if lower == "hello" || lower == "hi" {
        GREETING
    } else if lower.contains("appointment") {
        SCHEDULING
    } else if lower.contains("symptom") || lower.contains("pain") {
        SYMPTOM_TRIAGE
    } else if lower.contains("emergency") {
        EMERGENCY
    } else if ["mental health", "depression", "anxiety"]
        .iter()
        .any(|k| lower.contains(k))
    {
        CRISIS_LINE
    } else {
        return fallback(input);
    };
    reply.to_string()
}

/// Pulls `input` out of a request payload and answers it. Missing, non-string
/// and empty values are rejected.
pub fn respond_to(payload: &Value) -> Result<String, InvalidInput> {
    match payload.get("input") {
        Some(Value::String(s)) if !s.is_empty() => Ok(respond(s)),
        _ => Err(InvalidInput),
    }
}

fn fallback(original: &str) -> String {
    format!(
        "I received your message: \"{}\". How can HealthCare Connect assist you today? You can ask about appointments, symptoms, or general health information.",
        original
    )
}
