use thiserror::Error;
use url::Url;

/// Connection settings for the optional text-generation assistant.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AssistSettings {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    system_prompt: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AssistSettingsDraft {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub system_prompt: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssistSettingsError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl AssistSettingsDraft {
    /// Validate and normalize the draft. Blank values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `AssistSettingsError` if the base URL is present but invalid.
    pub fn validate(self) -> Result<AssistSettings, AssistSettingsError> {
        let api_key = normalize_optional(self.api_key);
        let model = normalize_optional(self.model);
        let base_url = normalize_optional(self.base_url);
        let system_prompt = normalize_optional(self.system_prompt);

        if let Some(url) = base_url.as_ref() {
            if Url::parse(url).is_err() {
                return Err(AssistSettingsError::InvalidBaseUrl(url.clone()));
            }
        }

        Ok(AssistSettings {
            api_key,
            model,
            base_url,
            system_prompt,
        })
    }
}

impl AssistSettings {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    #[must_use]
    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_become_none() {
        let settings = AssistSettingsDraft {
            api_key: Some("  ".into()),
            model: Some(" gpt ".into()),
            ..AssistSettingsDraft::default()
        }
        .validate()
        .unwrap();
        assert_eq!(settings.api_key(), None);
        assert_eq!(settings.model(), Some("gpt"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = AssistSettingsDraft {
            base_url: Some("not a url".into()),
            ..AssistSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AssistSettingsError::InvalidBaseUrl(_)));
    }
}
