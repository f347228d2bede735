pub(crate) mod rasterize;
