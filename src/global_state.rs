use leptos::*;
use once_cell::sync::OnceCell;

/// Most recent log lines kept for the page
pub const LOG_HISTORY: usize = 100;

pub struct Globals {
    pub benchmark_status: RwSignal<String>,
    pub is_benchmark_running: RwSignal<bool>,
    pub last_score: RwSignal<Option<u32>>,
    pub log_lines: RwSignal<Vec<String>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        benchmark_status: create_rw_signal("Idle".to_string()),
        is_benchmark_running: create_rw_signal(false),
        last_score: create_rw_signal(None),
        log_lines: create_rw_signal(Vec::new()),
    })
}

crate::global_signals! {
    pub benchmark_status => benchmark_status: String,
    pub is_benchmark_running => is_benchmark_running: bool,
    pub last_score => last_score: Option<u32>,
    pub log_lines => log_lines: Vec<String>,
}

/// Append a line, dropping the oldest beyond [`LOG_HISTORY`]
pub fn push_log_line(line: String) {
    log_lines().update(|lines| {
        lines.push(line);
        let excess = lines.len().saturating_sub(LOG_HISTORY);
        lines.drain(..excess);
    });
}
