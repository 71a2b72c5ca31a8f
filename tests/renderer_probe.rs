#![cfg(target_arch = "wasm32")]
use primitive_bench_wasm::domain::benchmark::{Backend, FrameRateProbe, PrimitiveKind, ProbeResult};
use primitive_bench_wasm::infrastructure::rendering::{BenchRenderer, RendererProbe};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn setup_canvas(id: &str, width: u32, height: u32) {
    let document = web_sys::window().unwrap().document().unwrap();
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(width);
    canvas.set_height(height);
    document.body().unwrap().append_child(&canvas).unwrap();
}

async fn probe_for(canvas_id: &str, primitive: PrimitiveKind) -> Option<RendererProbe> {
    if !BenchRenderer::is_webgpu_supported().await {
        web_sys::console::log_1(&"Skipping test: WebGPU not supported".into());
        return None;
    }
    setup_canvas(canvas_id, 320, 240);
    match BenchRenderer::new(canvas_id, Backend::WebGpu, primitive).await {
        Ok(renderer) => Some(RendererProbe::new(Rc::new(RefCell::new(renderer)))),
        Err(e) => {
            web_sys::console::log_1(&format!("Skipping test: {e}").into());
            None
        }
    }
}

#[wasm_bindgen_test]
async fn empty_population_is_not_measured() {
    let Some(mut probe) = probe_for("probe-empty", PrimitiveKind::InstancedCubes).await else {
        return;
    };
    probe.create(0);
    assert_eq!(probe.measure(5).await, ProbeResult::EmptyPopulation);
}

#[wasm_bindgen_test]
async fn measures_every_primitive() {
    for (i, primitive) in [PrimitiveKind::Cubes, PrimitiveKind::InstancedCubes, PrimitiveKind::Lines]
        .into_iter()
        .enumerate()
    {
        let canvas_id = format!("probe-{i}");
        let Some(mut probe) = probe_for(&canvas_id, primitive).await else {
            return;
        };
        probe.create(2000);
        assert_eq!(probe.renderer().borrow().object_count(), 2000);
        let fps = probe.measure(5).await.fps().unwrap_or_default();
        assert!(fps > 0.0, "{primitive}: {fps}");
    }
}

#[wasm_bindgen_test]
async fn missing_canvas_is_an_init_error() {
    let err = BenchRenderer::new("no-such-canvas", Backend::WebGl, PrimitiveKind::Lines).await.err();
    assert_eq!(err.map(|e| e.kind()), Some("backend-init"));
}

#[wasm_bindgen_test]
async fn shrinking_to_nothing_clears_the_canvas() {
    let Some(mut probe) = probe_for("probe-clear", PrimitiveKind::Cubes).await else {
        return;
    };
    probe.create(500);
    assert_eq!(probe.renderer().borrow().object_count(), 500);

    probe.create(0);
    assert_eq!(probe.renderer().borrow().object_count(), 0);
    assert!(probe.population().is_empty());
    // The clearing frame released its borrow; measuring needs none.
    assert!(probe.renderer().try_borrow_mut().is_ok());
    assert_eq!(probe.measure(3).await, ProbeResult::EmptyPopulation);
}
