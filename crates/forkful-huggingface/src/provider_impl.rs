use std::{future::Future, pin::Pin, sync::Arc};

use forkful_core::{
    error::Result,
    provider::{GenerationParameters, TextGenerationProvider},
};
use tracing::debug;

use crate::{HuggingFaceAdapter, api::TextGenerationRequest, model_map::map_model};

impl TextGenerationProvider for HuggingFaceAdapter {
    fn generate<'p>(
        &'p self,
        params: GenerationParameters,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model_path = map_model(&params.model);
            debug!(model = %model_path, "generating via Hugging Face Inference");

            let request = TextGenerationRequest::from(&params);
            client.text_generation(&model_path, &request).await
        })
    }
}
