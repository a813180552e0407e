pub mod feature_error;

pub use feature_error::FeatureError;
