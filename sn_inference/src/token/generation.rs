use crate::error::{Error, Result};

pub const DEFAULT_MAX_NEW_TOKENS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    max_new_tokens: usize,
    skip_special_tokens: bool,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Result<Self> {
        let prompt = prompt.into();
        if prompt.is_empty() {
            return Err(Error::InvalidRequest("prompt is empty".to_string()));
        }
        Ok(GenerationRequest {
            prompt,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            skip_special_tokens: true,
        })
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: usize) -> Result<Self> {
        if max_new_tokens == 0 {
            return Err(Error::InvalidRequest(
                "max_new_tokens must be greater than zero".to_string(),
            ));
        }
        self.max_new_tokens = max_new_tokens;
        Ok(self)
    }

    pub fn with_skip_special_tokens(mut self, skip_special_tokens: bool) -> Self {
        self.skip_special_tokens = skip_special_tokens;
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn max_new_tokens(&self) -> usize {
        self.max_new_tokens
    }

    pub fn skip_special_tokens(&self) -> bool {
        self.skip_special_tokens
    }
}

/// Decodes a continuation of `request.prompt()`. The returned text includes
/// the prompt, as the tokenizer decodes the whole output sequence.
pub trait TextGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
