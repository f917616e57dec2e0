use serde::Serialize;

use crate::core::campus_data::{latest, EnergyRecord, WasteRecord};

/// Records per dataset included in the chat context.
pub const CHAT_CONTEXT_RECORDS: usize = 7;

pub const CLASSIFY_INSTRUCTION: &str = "Identify this waste item. Which bin does it go in: DRY, WET, or RECYCLABLE? Give a very brief reason. Format: BIN: [Bin Type]. Reason: [Reason].";

pub const HERO_IMAGE_PROMPTS: &[&str] = &[
    "A wide angle, cinematic shot of a futuristic smart university campus with vertical gardens and solar panels, sunny day, lush greens, 4k resolution.",
    "A modern university library where students interact with holographic sustainability data panels showing campus energy trends, soft bokeh lighting, high quality.",
    "A high-tech smart waste station integrated into a beautiful university park walkway, clean design, morning sunlight, professional architectural photography.",
];

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
}

/// System instruction for the assistant, embedding the most recent records.
pub fn chat_context(waste: &[WasteRecord], energy: &[EnergyRecord]) -> String {
    format!(
        "You are the EcoCampus AI Sustainability Assistant.\n\
         You have access to current campus data:\n\
         - Waste Data: {waste}\n\
         - Energy Data: {energy}\n\
         \n\
         Your goal is to help university students and administrative staff optimize sustainability.\n\
         Be concise, actionable, and friendly. Use data from the provided arrays when possible.\n\
         \n\
         Structure your response with bullet points if providing multiple tips.",
        waste = to_json(latest(waste, CHAT_CONTEXT_RECORDS)),
        energy = to_json(latest(energy, CHAT_CONTEXT_RECORDS)),
    )
}

pub fn insight_prompt(waste: &[WasteRecord], energy: &[EnergyRecord]) -> String {
    format!(
        "Analyze this campus data and provide one \"Proactive Insight\" and one \"Action of the Day\". \
         Keep it professional and inspiring. Data: Energy: {}, Waste: {}",
        to_json(energy),
        to_json(waste),
    )
}
