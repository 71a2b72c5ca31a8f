//! JavaScript entry points. Thin bridge onto the application layer.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::{default_ceiling, run_browser_benchmark_json};
use crate::domain::benchmark::{Backend, PrimitiveKind};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::rendering::BenchRenderer;

/// Run one capacity search.
///
/// `config_json` is a (possibly partial) benchmark config, for example
/// `{"backend": "webgl", "primitive": "lines"}`. An empty string runs the
/// defaults. Resolves to the status line, rejects with the error text.
#[wasm_bindgen(js_name = runBenchmark)]
pub fn run_benchmark(config_json: String) -> Promise {
    future_to_promise(async move {
        get_logger().info(LogComponent::Presentation("WasmApi"), "🚀 runBenchmark requested");

        match run_browser_benchmark_json(config_json).await {
            Ok(outcome) => Ok(JsValue::from_str(&outcome.status_line())),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    })
}

/// Default search ceiling for a backend/primitive pair, `None` for unknown names.
#[wasm_bindgen(js_name = defaultCeiling)]
pub fn default_ceiling_for(backend: &str, primitive: &str) -> Option<u32> {
    let backend = backend.parse::<Backend>().ok()?;
    let primitive = primitive.parse::<PrimitiveKind>().ok()?;
    Some(default_ceiling(backend, primitive))
}

#[wasm_bindgen(js_name = isWebGpuSupported)]
pub async fn is_webgpu_supported() -> bool {
    BenchRenderer::is_webgpu_supported().await
}
