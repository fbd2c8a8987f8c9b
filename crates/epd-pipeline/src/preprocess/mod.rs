//! Raster preprocessing ahead of quantization: orientation, resampling,
//! and tone adjustment. Every function here is pure - raster in, new
//! raster out.

pub mod orient;
pub mod resize;
pub mod tone;
