pub mod color;
pub mod consts;
pub mod error;
pub mod filters;
pub mod io;
pub mod pipeline;
pub mod raster;
pub mod resize;
