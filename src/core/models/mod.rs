//! Model catalog: the `ChatModel` descriptor, builtin catalogs, lookup and filtering.

pub mod builtin;
mod chat_model;

pub use builtin::builtin_models;
pub use chat_model::ChatModel;

use crate::core::util::filter_by_query;

/// Filter models by query (case-insensitive match on name or display name).
pub fn filter_models<'a>(models: &'a [ChatModel], query: &str) -> Vec<&'a ChatModel> {
    filter_by_query(models, query, |m| (m.name(), m.label()))
}

/// First model whose name matches. Earlier entries shadow later ones with the same name.
pub fn find_model<'a>(models: &'a [ChatModel], name: &str) -> Option<&'a ChatModel> {
    models.iter().find(|m| m.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_matches_display_name() {
        let models = builtin_models();
        let out = filter_models(&models, "opus");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name(), "claude-3-opus-20240229");
    }

    #[test]
    fn filter_matches_name() {
        let models = builtin_models();
        let out = filter_models(&models, "GPT-");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn find_model_first_match_wins() {
        let custom = ChatModel::new("gpt-4-turbo")
            .unwrap()
            .with_display_name("My GPT-4");
        let mut models = vec![custom];
        models.extend(builtin_models());
        let found = find_model(&models, "gpt-4-turbo").unwrap();
        assert_eq!(found.label(), "My GPT-4");
    }

    #[test]
    fn find_model_unknown_is_none() {
        assert!(find_model(&builtin_models(), "not-a-real-model").is_none());
    }
}
