//! Optional text-generation assistant.
//!
//! Requests are stateless and never touch lesson progress; callers show
//! [`AssistError::user_message`] when a call fails.

pub mod prompts;

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use civic_core::model::{AssistSettings, AssistSettingsDraft, AssistSettingsError, Language, Lesson};
use civic_core::toolkit::{BudgetItem, MatrixActivity};
use civic_core::{Library, LibraryItem};

use crate::error::{AssistError, AssistRequestError};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Anything that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns `AssistError::Unavailable` when no backend is configured and
    /// `AssistError::RequestFailed` when the call fails.
    async fn generate(&self, prompt: &str, language: Language) -> Result<String, AssistError>;

    /// # Errors
    ///
    /// See [`TextGenerator::generate`].
    async fn lesson_insight(
        &self,
        lesson: &Lesson,
        language: Language,
    ) -> Result<String, AssistError> {
        self.generate(&prompts::lesson_insight(lesson, language), language)
            .await
    }

    /// # Errors
    ///
    /// See [`TextGenerator::generate`].
    async fn lesson_summary(
        &self,
        lesson: &Lesson,
        language: Language,
    ) -> Result<String, AssistError> {
        self.generate(&prompts::lesson_summary(lesson, language), language)
            .await
    }

    /// # Errors
    ///
    /// See [`TextGenerator::generate`].
    async fn lesson_explanation(
        &self,
        lesson: &Lesson,
        language: Language,
    ) -> Result<String, AssistError> {
        self.generate(&prompts::lesson_explanation(lesson, language), language)
            .await
    }

    /// # Errors
    ///
    /// See [`TextGenerator::generate`].
    async fn chat(&self, message: &str, language: Language) -> Result<String, AssistError> {
        self.generate(&prompts::chat(message, language), language)
            .await
    }

    /// # Errors
    ///
    /// See [`TextGenerator::generate`].
    async fn library_summary(
        &self,
        item: &LibraryItem,
        language: Language,
    ) -> Result<String, AssistError> {
        self.generate(&prompts::library_summary(item, language), language)
            .await
    }

    /// # Errors
    ///
    /// See [`TextGenerator::generate`].
    async fn explain_section(&self, section: &str, language: Language) -> Result<String, AssistError> {
        self.generate(&prompts::section_explanation(section, language), language)
            .await
    }

    /// # Errors
    ///
    /// See [`TextGenerator::generate`].
    async fn ask_library(
        &self,
        library: &Library,
        question: &str,
        language: Language,
    ) -> Result<String, AssistError> {
        self.generate(&prompts::ask_library(library, question, language), language)
            .await
    }

    /// # Errors
    ///
    /// See [`TextGenerator::generate`].
    async fn agenda(&self, objective: &str, language: Language) -> Result<String, AssistError> {
        self.generate(&prompts::agenda(objective, language), language)
            .await
    }

    /// # Errors
    ///
    /// See [`TextGenerator::generate`].
    async fn budget_review(
        &self,
        items: &[BudgetItem],
        language: Language,
    ) -> Result<String, AssistError> {
        self.generate(&prompts::budget_review(items, language), language)
            .await
    }

    /// # Errors
    ///
    /// See [`TextGenerator::generate`].
    async fn priority_matrix(
        &self,
        activities: &[MatrixActivity],
        language: Language,
    ) -> Result<String, AssistError> {
        self.generate(&prompts::priority_matrix(activities, language), language)
            .await
    }

    /// # Errors
    ///
    /// See [`TextGenerator::generate`].
    async fn survey_questions(&self, language: Language) -> Result<String, AssistError> {
        self.generate(&prompts::survey_questions(language), language)
            .await
    }
}

#[derive(Clone, Debug)]
pub struct AssistConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub system_prompt: String,
}

impl AssistConfig {
    /// Fill in defaults for anything the settings leave out. `None` without
    /// an API key.
    #[must_use]
    pub fn from_settings(settings: &AssistSettings) -> Option<Self> {
        let api_key = settings.api_key()?.to_owned();
        Some(Self {
            base_url: settings.base_url().unwrap_or(DEFAULT_BASE_URL).to_owned(),
            api_key,
            model: settings.model().unwrap_or(DEFAULT_MODEL).to_owned(),
            system_prompt: settings
                .system_prompt()
                .unwrap_or(prompts::ACADEMY_SYSTEM_PROMPT)
                .to_owned(),
        })
    }

    /// Read `CIVIC_AI_*` variables.
    ///
    /// # Errors
    ///
    /// Returns `AssistSettingsError` if `CIVIC_AI_BASE_URL` is not a URL.
    pub fn from_env() -> Result<Option<Self>, AssistSettingsError> {
        let settings = AssistSettingsDraft {
            api_key: env::var("CIVIC_AI_API_KEY").ok(),
            model: env::var("CIVIC_AI_MODEL").ok(),
            base_url: env::var("CIVIC_AI_BASE_URL").ok(),
            system_prompt: env::var("CIVIC_AI_SYSTEM_PROMPT").ok(),
        }
        .validate()?;
        Ok(Self::from_settings(&settings))
    }
}

/// Chat-completions client for an OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct AssistService {
    client: Client,
    config: Option<AssistConfig>,
}

impl AssistService {
    #[must_use]
    pub fn new(config: Option<AssistConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None)
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn request(
        &self,
        config: &AssistConfig,
        prompt: &str,
        language: Language,
    ) -> Result<String, AssistRequestError> {
        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest::new(config, prompt);

        debug!(model = %config.model, %language, "sending assistant request");
        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssistRequestError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(AssistRequestError::EmptyResponse)?;

        Ok(content)
    }
}

#[async_trait]
impl TextGenerator for AssistService {
    async fn generate(&self, prompt: &str, language: Language) -> Result<String, AssistError> {
        let config = self.config.as_ref().ok_or(AssistError::Unavailable)?;
        self.request(config, prompt, language).await.map_err(|err| {
            warn!(error = %err, "assistant request failed");
            AssistError::RequestFailed(err)
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

impl ChatRequest {
    /// The prompt builders state the response language, so the system
    /// message is sent as configured.
    fn new(config: &AssistConfig, prompt: &str) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: config.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: 0.2,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records prompts and answers with a canned reply.
    struct Scripted {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for Scripted {
        async fn generate(&self, prompt: &str, _language: Language) -> Result<String, AssistError> {
            self.seen.lock().unwrap().push(prompt.to_owned());
            Ok("ok".into())
        }
    }

    #[tokio::test]
    async fn disabled_service_is_unavailable() {
        let service = AssistService::disabled();
        assert!(!service.enabled());
        let err = service.chat("hello", Language::Ar).await.unwrap_err();
        assert!(matches!(err, AssistError::Unavailable));
        assert_eq!(
            err.user_message(Language::En),
            "⚠️ Assistant key is not configured."
        );
    }

    #[tokio::test]
    async fn lesson_helpers_route_through_generate() {
        let catalog = civic_core::Catalog::builtin();
        let lesson = catalog
            .get_lesson(&civic_core::model::LessonId::new("U1L1"))
            .unwrap();
        let generator = Scripted {
            seen: Mutex::new(Vec::new()),
        };

        generator.lesson_summary(lesson, Language::En).await.unwrap();
        generator.lesson_insight(lesson, Language::En).await.unwrap();

        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains("key takeaways"));
        assert!(seen[1].contains("future-oriented"));
    }

    #[test]
    fn config_requires_a_key_and_fills_defaults() {
        assert!(AssistConfig::from_settings(&AssistSettings::default()).is_none());

        let settings = AssistSettingsDraft {
            api_key: Some("k".into()),
            ..AssistSettingsDraft::default()
        }
        .validate()
        .unwrap();
        let config = AssistConfig::from_settings(&settings).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.system_prompt, prompts::ACADEMY_SYSTEM_PROMPT);
    }

    #[test]
    fn response_language_is_requested_once() {
        let config = AssistConfig {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: "k".into(),
            model: "m".into(),
            system_prompt: prompts::ACADEMY_SYSTEM_PROMPT.into(),
        };
        let request = ChatRequest::new(&config, &prompts::chat("hello", Language::Ar));

        assert_eq!(request.messages[0].content, prompts::ACADEMY_SYSTEM_PROMPT);
        let mentions: usize = request
            .messages
            .iter()
            .map(|m| m.content.matches("Respond in").count())
            .sum();
        assert_eq!(mentions, 1);
    }

    #[tokio::test]
    async fn toolkit_and_library_helpers_route_through_generate() {
        let library = Library::builtin();
        let templates = civic_core::toolkit::Templates::default();
        let generator = Scripted {
            seen: Mutex::new(Vec::new()),
        };

        generator.ask_library(&library, "law 107", Language::En).await.unwrap();
        generator.budget_review(&templates.budget, Language::En).await.unwrap();
        generator.survey_questions(Language::En).await.unwrap();

        let seen = generator.seen.lock().unwrap();
        assert!(seen[0].contains("library of civic resources"));
        assert!(seen[1].contains("community initiative budget"));
        assert!(seen[2].contains("survey questions"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_failure() {
        let service = AssistService::new(Some(AssistConfig {
            base_url: "http://127.0.0.1:9".into(),
            api_key: "k".into(),
            model: "m".into(),
            system_prompt: String::new(),
        }));
        let err = service.generate("hi", Language::En).await.unwrap_err();
        assert!(matches!(err, AssistError::RequestFailed(_)));
        assert_eq!(
            err.user_message(Language::En),
            "Error connecting to the assistant. Please try again."
        );
    }
}
