//! tanya-relay - legal Q&A and farming guide relay
//!
//! Forwards legal questions to an OpenAI-compatible completion API, trying
//! a fixed list of models in order, and answers from static tables when no
//! model responds. Farming questions get a templated guide.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod relay;
pub mod telemetry;
