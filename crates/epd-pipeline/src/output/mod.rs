//! Quantizer output types.

mod quantized;

pub use quantized::QuantizedImage;
