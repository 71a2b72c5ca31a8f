use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{
        BenchmarkConfig, RunTicket, config::DEFAULT_CANVAS_ID, default_ceiling, run_browser_benchmark,
    },
    domain::{
        benchmark::{Backend, PrimitiveKind},
        logging::{LogEntry, Logger},
    },
    global_state::{benchmark_status, is_benchmark_running, last_score, log_lines, push_log_line},
    infrastructure::services::ConsoleLogger,
};

/// 🌉 Bridge logger: console output plus the on-page log list
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl LeptosLogger {
    pub fn new(console: ConsoleLogger) -> Self {
        Self { console }
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        if self.console.accepts(entry.level) {
            push_log_line(entry.format_line());
        }
        self.console.log(entry);
    }
}

/// 🦀 Benchmark page
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .bench-app {
                font-family: -apple-system, BlinkMacSystemFont, sans-serif;
                background: #14171f;
                min-height: 100vh;
                padding: 20px;
                color: #e0e0e0;
            }

            .controls {
                display: flex;
                gap: 12px;
                align-items: center;
                margin-bottom: 12px;
            }

            .controls button {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 6px 14px;
                border-radius: 5px;
                cursor: pointer;
            }

            .controls button:disabled {
                opacity: 0.5;
                cursor: default;
            }

            #bench-canvas {
                width: 100%;
                height: 70vh;
                border: 1px solid #4a5d73;
                border-radius: 8px;
                display: block;
            }

            .status {
                margin: 10px 0;
                color: #72c685;
            }

            .debug-log {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                max-height: 200px;
                overflow-y: auto;
                background: rgba(0, 0, 0, 0.6);
                padding: 10px;
                border-radius: 8px;
            }
            "#}
        </style>
        <div class="bench-app">
            <h1>"Primitive capacity @ 60 FPS"</h1>
            <BenchmarkPanel />
            <DebugConsole />
        </div>
    }
}

#[component]
fn BenchmarkPanel() -> impl IntoView {
    let (backend, set_backend) = create_signal(Backend::default());
    let (primitive, set_primitive) = create_signal(PrimitiveKind::default());

    let start = move |_| {
        if is_benchmark_running().get_untracked() || RunTicket::is_taken() {
            return;
        }
        let config = BenchmarkConfig::new(backend.get_untracked(), primitive.get_untracked());
        spawn_local(async move {
            // Outcome and errors are already on the status board.
            let _ = run_browser_benchmark(config).await;
        });
    };

    let backend_options = Backend::iter()
        .map(|b| {
            let value: &'static str = b.into();
            view! { <option value=value selected=move || backend.get() == b>{b.to_string()}</option> }
        })
        .collect_view();

    let primitive_options = PrimitiveKind::iter()
        .map(|p| {
            let value: &'static str = p.into();
            view! { <option value=value selected=move || primitive.get() == p>{p.to_string()}</option> }
        })
        .collect_view();

    view! {
        <div class="controls">
            <select on:change=move |ev| {
                if let Ok(b) = event_target_value(&ev).parse::<Backend>() {
                    set_backend.set(b);
                }
            }>
                {backend_options}
            </select>
            <select on:change=move |ev| {
                if let Ok(p) = event_target_value(&ev).parse::<PrimitiveKind>() {
                    set_primitive.set(p);
                }
            }>
                {primitive_options}
            </select>
            <span>{move || format!("search 0..={}", default_ceiling(backend.get(), primitive.get()))}</span>
            <button on:click=start disabled=move || is_benchmark_running().get()>
                {move || if is_benchmark_running().get() { "Running..." } else { "Start" }}
            </button>
        </div>
        <canvas id=DEFAULT_CANVAS_ID />
        <div class="status">
            {move || benchmark_status().get()}
            {move || last_score().get().map(|score| format!(" • best {}", score))}
        </div>
    }
}

/// 🐞 Recent log lines
#[component]
fn DebugConsole() -> impl IntoView {
    view! {
        <div class="debug-log">
            {move || log_lines().get().into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
        </div>
    }
}
