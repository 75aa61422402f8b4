//! # Feature: Safety Assistant
//!
//! Keyword-matched answers to common LPG safety questions. The rule table is
//! evaluated top-to-bottom and the first hit wins; anything unmatched gets a
//! generic "consult a technician" fallback. Deliberately not an inference
//! system. Chat history is kept per session so several widgets (or tabs) can
//! talk to one assistant instance.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.1.0: Per-session history via DashMap
//! - 1.0.0: Initial release with three keyword rules and a fallback

use dashmap::DashMap;
use log::debug;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

/// First message every new session sees
const GREETING: &str = "Hello! I'm your LPG Safety Assistant. How can I help you today?";

const FALLBACK: &str = "I understand you have a question about LPG safety. For specific \
     technical issues, please consult a qualified technician. For emergencies, call your \
     local emergency services immediately.";

/// Quick-access prompts surfaced next to the chat box
pub const COMMON_QUESTIONS: &[&str] = &[
    "How do I check for gas leaks?",
    "What should I do if I smell gas?",
    "How often should I replace my gas hose?",
    "What are the signs of a faulty regulator?",
];

/// (keyword alternation, canned response), in evaluation order
const RULES: &[(&str, &str)] = &[
    (
        "leak|smell",
        "If you smell gas or suspect a leak: 1. Turn off the gas supply immediately \
         2. Open windows and doors 3. Don't use electrical switches or phones \
         4. Evacuate the area 5. Call emergency services from a safe location.",
    ),
    (
        "hose|pipe",
        "LPG hoses should be replaced every 2 years or immediately if you notice any \
         cracks, wear, or damage. Always use certified LPG hoses and ensure proper \
         installation with hose clamps.",
    ),
    (
        "regulator",
        "Signs of a faulty regulator include: irregular flame, hissing sounds, gas smell, \
         or frost formation. Replace regulators every 5 years or if you notice any issues.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

pub struct SafetyAssistant {
    rules: Vec<(regex::Regex, &'static str)>,
    sessions: DashMap<String, Vec<ChatMessage>>,
}

impl Default for SafetyAssistant {
    fn default() -> Self {
        Self::new()
    }
}

impl SafetyAssistant {
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .map(|(pattern, response)| {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("rule patterns are valid regexes");
                (regex, *response)
            })
            .collect();

        SafetyAssistant {
            rules,
            sessions: DashMap::new(),
        }
    }

    /// Answer one message, stateless. Rules are tried in table order.
    pub fn respond(&self, message: &str) -> &'static str {
        for (regex, response) in &self.rules {
            if regex.is_match(message) {
                return *response;
            }
        }
        FALLBACK
    }

    /// Greeting shown at the top of every new session
    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    /// Send a message within a session, recording both turns. Whitespace-only
    /// input is ignored and produces no reply.
    pub fn send(&self, session_id: &str, message: &str) -> Option<String> {
        if message.trim().is_empty() {
            debug!("Ignoring empty assistant message in session {}", session_id);
            return None;
        }

        let response = self.respond(message);
        let mut history = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| vec![ChatMessage::assistant(GREETING)]);
        history.push(ChatMessage::user(message));
        history.push(ChatMessage::assistant(response));

        Some(response.to_string())
    }

    /// Transcript of a session, greeting included. A session that never sent
    /// anything has no transcript.
    pub fn history(&self, session_id: &str) -> Vec<ChatMessage> {
        self.sessions
            .get(session_id)
            .map(|h| h.value().clone())
            .unwrap_or_default()
    }
}
