pub mod app;
pub mod compliance;
pub mod contract;
pub mod metrics;
pub mod negotiation;
pub mod ocr;
pub mod risk;
pub mod screen;
