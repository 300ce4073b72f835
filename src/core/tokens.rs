//! Tokenization via tiktoken: encoders bound to a model's vocabulary.

use std::sync::Arc;

use tiktoken_rs::CoreBPE;

/// Token identifier within an encoder's vocabulary.
pub type TokenId = u32;

#[derive(Debug, thiserror::Error)]
pub enum TokenizerError {
    #[error("no tokenizer is known for model {model:?}: {reason}")]
    UnknownModel { model: String, reason: String },
}

/// Encoder for one model. Cheap to clone; the vocabulary is shared.
#[derive(Clone)]
pub struct TokenEncoder {
    model: String,
    bpe: Arc<CoreBPE>,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

/// Look up the encoder for `model_name`. Fails for models tiktoken does not know
/// (including non-OpenAI models).
pub fn encoding_for_model(model_name: &str) -> Result<TokenEncoder, TokenizerError> {
    let bpe = tiktoken_rs::get_bpe_from_model(model_name).map_err(|e| {
        log::debug!("Tokenizer lookup failed for {}: {}", model_name, e);
        TokenizerError::UnknownModel {
            model: model_name.to_string(),
            reason: e.to_string(),
        }
    })?;
    Ok(TokenEncoder {
        model: model_name.to_string(),
        bpe: Arc::new(bpe),
    })
}

impl TokenEncoder {
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Encode text into token ids, treating special-token text literally.
    pub fn encode(&self, text: &str) -> Vec<TokenId> {
        self.bpe.encode_ordinary(text)
    }

    /// Text of a single token. Tokens that are not valid UTF-8 on their own
    /// (partial multi-byte characters) come back as U+FFFD.
    pub fn decode_token(&self, token: TokenId) -> String {
        self.bpe
            .decode(vec![token])
            .unwrap_or_else(|_| char::REPLACEMENT_CHARACTER.to_string())
    }
}

/// One row of a token breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPiece {
    pub id: TokenId,
    pub text: String,
}

/// Pair each token with its decoded text, in order.
pub fn analyze(tokens: &[TokenId], encoder: &TokenEncoder) -> Vec<TokenPiece> {
    tokens
        .iter()
        .map(|&id| TokenPiece {
            id,
            text: encoder.decode_token(id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_openai_models_resolve() {
        assert!(encoding_for_model("gpt-3.5-turbo").is_ok());
        assert!(encoding_for_model("gpt-4-turbo").is_ok());
    }

    #[test]
    fn unknown_model_fails() {
        let err = encoding_for_model("not-a-real-model").unwrap_err();
        match err {
            TokenizerError::UnknownModel { model, .. } => assert_eq!(model, "not-a-real-model"),
        }
    }

    #[test]
    fn empty_text_has_no_tokens() {
        let encoder = encoding_for_model("gpt-3.5-turbo").unwrap();
        assert!(encoder.encode("").is_empty());
    }

    #[test]
    fn special_token_text_is_encoded_literally() {
        let encoder = encoding_for_model("gpt-3.5-turbo").unwrap();
        let tokens = encoder.encode("<|endoftext|>");
        assert!(tokens.len() > 1);
        assert!(!tokens.contains(&100257));
        let joined: String = analyze(&tokens, &encoder)
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(joined, "<|endoftext|>");
    }

    #[test]
    fn pieces_reassemble_ascii_text() {
        let encoder = encoding_for_model("gpt-3.5-turbo").unwrap();
        let text = "Hello, world! How are you?";
        let tokens = encoder.encode(text);
        assert!(!tokens.is_empty());
        let pieces = analyze(&tokens, &encoder);
        assert_eq!(pieces.len(), tokens.len());
        let joined: String = pieces.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(joined, text);
    }
}
