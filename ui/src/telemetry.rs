// Browser console logging for `tracing`

/// Routes `tracing` events to the browser console. Does nothing off wasm.
pub fn init_browser_tracing() {
    #[cfg(target_arch = "wasm32")]
    {
        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::DEBUG)
            .build();
        tracing_wasm::set_as_global_default_with_config(config);
    }
}
