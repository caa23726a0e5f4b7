mod adapter;
mod model_map;
mod provider_impl;
mod status;

pub use adapter::{ACCESS_TOKEN_ENV, HuggingFaceAdapter, HuggingFaceAdapterBuilder};
pub use model_map::MISTRAL_7B_INSTRUCT_V0_3;
pub mod api;
mod client;
pub use client::REQUEST_TIMEOUT;
