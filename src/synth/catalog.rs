//! Fixed catalogs for synthetic data
//!
//! Model names, inference types, automation genres and the user roster live
//! here as constant sets. [`Catalog`] is the owned, config-overridable form the
//! generators read from, so extending a catalog is a config change.

use serde::{Deserialize, Serialize};

use super::error::SynthError;

/// Models served by the simulated gateway.
pub const AI_MODELS: &[&str] = &[
    "GPT-4",
    "GPT-3.5-Turbo",
    "Claude-3",
    "Gemini-Pro",
    "Llama-2",
    "PaLM-2",
    "Cohere-Command",
    "Anthropic-Claude",
];

/// Inference task categories attached to request events.
pub const INFERENCE_TYPES: &[&str] = &[
    "text-generation",
    "image-processing",
    "code-completion",
    "translation",
    "summarization",
    "question-answering",
    "sentiment-analysis",
    "classification",
];

/// Web automation task genres.
pub const AUTOMATION_GENRES: &[&str] = &[
    "shopping",
    "stocks",
    "research",
    "social-media",
    "news",
    "travel",
    "finance",
    "education",
];

/// Known users; the roster index `i` maps to user id `user_{i + 1}`.
pub const USER_ROSTER: &[&str] = &[
    "Alex Chen",
    "Sarah Johnson",
    "Mike Rodriguez",
    "Emma Wilson",
    "David Park",
    "Lisa Zhang",
    "Tom Anderson",
    "Rachel Green",
    "James Lee",
    "Anna Taylor",
    "Chris Brown",
    "Maya Patel",
];

/// Catalog of categorical values used by the generators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub models: Vec<String>,
    pub inference_types: Vec<String>,
    pub genres: Vec<String>,
    pub users: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            models: owned(AI_MODELS),
            inference_types: owned(INFERENCE_TYPES),
            genres: owned(AUTOMATION_GENRES),
            users: owned(USER_ROSTER),
        }
    }
}

impl Catalog {
    /// Every list must be non-empty and free of duplicates.
    pub fn validate(&self) -> Result<(), SynthError> {
        let lists = [
            ("catalog.models", &self.models),
            ("catalog.inference_types", &self.inference_types),
            ("catalog.genres", &self.genres),
            ("catalog.users", &self.users),
        ];

        for (param, values) in lists {
            if values.is_empty() {
                return Err(SynthError::invalid(param, "cannot be empty"));
            }
            for (i, value) in values.iter().enumerate() {
                if value.trim().is_empty() {
                    return Err(SynthError::invalid(
                        param,
                        format!("entry {} is blank", i),
                    ));
                }
                if values[..i].contains(value) {
                    return Err(SynthError::invalid(
                        param,
                        format!("duplicate entry '{}'", value),
                    ));
                }
            }
        }

        Ok(())
    }

    /// User id for a roster index (`user_1` for index 0).
    pub fn user_id(index: usize) -> String {
        format!("user_{}", index + 1)
    }
}
