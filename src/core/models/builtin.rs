//! Models shipped with the application.

use super::ChatModel;

/// Static row of a builtin catalog.
struct BuiltinModel {
    name: &'static str,
    display_name: &'static str,
    provider: &'static str,
    product: &'static str,
    description: &'static str,
}

const OPENAI_MODELS: &[BuiltinModel] = &[
    BuiltinModel {
        name: "gpt-3.5-turbo",
        display_name: "GPT-3.5 Turbo",
        provider: "OpenAI",
        product: "ChatGPT",
        description: "The fastest ChatGPT model, great for most everyday tasks",
    },
    BuiltinModel {
        name: "gpt-4-turbo",
        display_name: "GPT-4 Turbo",
        provider: "OpenAI",
        product: "ChatGPT",
        description: "The most powerful ChatGPT model, capable of complex tasks \
                      which require advanced reasoning",
    },
];

const ANTHROPIC_MODELS: &[BuiltinModel] = &[
    BuiltinModel {
        name: "claude-3-haiku-20240307",
        display_name: "Claude 3 Haiku",
        provider: "Anthropic",
        product: "Claude 3",
        description: "Fastest and most compact model for near-instant responsiveness",
    },
    BuiltinModel {
        name: "claude-3-sonnet-20240229",
        display_name: "Claude 3 Sonnet",
        provider: "Anthropic",
        product: "Claude 3",
        description: "Ideal balance of intelligence and speed for enterprise workloads",
    },
    BuiltinModel {
        name: "claude-3-opus-20240229",
        display_name: "Claude 3 Opus",
        provider: "Anthropic",
        product: "Claude 3",
        description: "Most powerful model for highly complex tasks",
    },
];

fn to_models(table: &[BuiltinModel]) -> Vec<ChatModel> {
    table
        .iter()
        .map(|row| {
            ChatModel::builtin(row.name)
                .with_display_name(row.display_name)
                .with_provider(row.provider)
                .with_product(row.product)
                .with_description(row.description)
        })
        .collect()
}

/// OpenAI models available out of the box.
pub fn builtin_openai_models() -> Vec<ChatModel> {
    to_models(OPENAI_MODELS)
}

/// Anthropic models available out of the box.
pub fn builtin_anthropic_models() -> Vec<ChatModel> {
    to_models(ANTHROPIC_MODELS)
}

/// All builtin models, OpenAI first.
pub fn builtin_models() -> Vec<ChatModel> {
    let mut models = builtin_openai_models();
    models.extend(builtin_anthropic_models());
    models
}
