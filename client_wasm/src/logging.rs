use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log to the browser console via tracing-wasm and hook panics
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let wasm_layer = tracing_wasm::WASMLayer::new(tracing_wasm::WASMLayerConfig::default());

    // A second game on the same page keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(wasm_layer)
        .try_init();

    // Panics with stacktrace
    console_error_panic_hook::set_once();
}
