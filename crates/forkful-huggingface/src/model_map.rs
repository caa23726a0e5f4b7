use std::borrow::Cow;

use forkful_core::model::{MistralModel, Model};

/// Wire path of the default recipe-generation model.
pub const MISTRAL_7B_INSTRUCT_V0_3: &str = "mistralai/Mistral-7B-Instruct-v0.3";

pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    match model {
        Model::Custom(custom) => Cow::Borrowed(custom),
        Model::Mistral(MistralModel::Mistral7bInstructV03) => {
            Cow::Borrowed(MISTRAL_7B_INSTRUCT_V0_3)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_maps_to_the_mistral_path() {
        assert_eq!(map_model(&Model::default()), MISTRAL_7B_INSTRUCT_V0_3);
    }

    #[test]
    fn custom_paths_pass_through_verbatim() {
        assert_eq!(
            map_model(&Model::Custom("acme/self-hosted")),
            "acme/self-hosted"
        );
    }
}
