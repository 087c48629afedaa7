pub mod quant {
    pub mod footprint;
    pub mod resolve;
}
