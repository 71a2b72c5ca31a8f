use primitive_bench_wasm::application::{BenchmarkConfig, default_ceiling};
use primitive_bench_wasm::domain::{
    benchmark::{Backend, PrimitiveKind, SearchRange},
    errors::BenchmarkError,
};
use std::time::Duration;

#[test]
fn parses_partial_json() {
    let config = BenchmarkConfig::from_json(r#"{"backend": "webgl", "primitive": "lines"}"#).unwrap();
    assert_eq!(config.backend, Backend::WebGl);
    assert_eq!(config.primitive, PrimitiveKind::Lines);
    assert_eq!(config.threshold_fps, 60.0);
    assert_eq!(config.search_range(), SearchRange::new(0, 500_000));
}

#[test]
fn explicit_bounds_override_ceiling() {
    let config = BenchmarkConfig::from_json(
        r#"{"primitive": "cubes", "min_objects": 10, "max_objects": 250, "settle_delay_ms": 0}"#,
    )
    .unwrap();
    assert_eq!(config.search_range(), SearchRange::new(10, 250));
    assert_eq!(config.search_settings().settle_delay, Duration::ZERO);
}

#[test]
fn unknown_primitive_is_a_configuration_error() {
    let err = BenchmarkConfig::from_json(r#"{"primitive": "spheres"}"#).unwrap_err();
    assert!(matches!(err, BenchmarkError::Configuration(_)));
}

#[test]
fn rejects_degenerate_settings() {
    for json in [
        r#"{"frames_per_probe": 0}"#,
        r#"{"threshold_fps": 0.0}"#,
        r#"{"threshold_fps": -5.0}"#,
        r#"{"canvas_id": "  "}"#,
    ] {
        let err = BenchmarkConfig::from_json(json).unwrap_err();
        assert_eq!(err.kind(), "configuration", "{json}");
    }
}

#[test]
fn webgl_ceilings_are_below_webgpu() {
    for primitive in [PrimitiveKind::Cubes, PrimitiveKind::InstancedCubes, PrimitiveKind::Lines] {
        assert!(default_ceiling(Backend::WebGl, primitive) < default_ceiling(Backend::WebGpu, primitive));
    }
}

#[test]
fn backend_and_primitive_names_parse() {
    assert_eq!("webgpu".parse::<Backend>().unwrap(), Backend::WebGpu);
    assert_eq!("instanced-cubes".parse::<PrimitiveKind>().unwrap(), PrimitiveKind::InstancedCubes);
    assert!("vulkan".parse::<Backend>().is_err());
    assert_eq!(Backend::WebGl.to_string(), "WebGL");
    assert_eq!(PrimitiveKind::Lines.to_string(), "line segments");
}
