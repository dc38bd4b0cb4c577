//! Remote pricing service client

pub mod client;

pub use client::PricingClient;
