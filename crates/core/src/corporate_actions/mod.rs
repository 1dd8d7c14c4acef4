//! Corporate actions module - intent models and transaction synthesis.

mod actions_model;
mod synthesizer;


pub use actions_model::{CorporateAction, CorporateActionIntent, NewAssetRef};
pub use synthesizer::CorporateActionSynthesizer;
