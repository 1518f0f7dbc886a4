//! Backend Module - Client to Detector API Communication
//!
//! This module handles:
//! - POST /predict requests and their typed responses
//! - GET /model_info requests
//! - Error-body unwrapping and shape validation at the boundary

pub mod client;
pub mod models;

pub use client::{ApiClient, ApiConfig, BackendError};
pub use models::{CheckResult, FeatureImportance, HtmlAnalysis, ModelInfo};
