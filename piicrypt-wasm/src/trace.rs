//! Line-oriented diagnostic trace directed at a host-supplied sink.
//!
//! Every exported call logs one line at entry with the input sizes and one at
//! exit with the output size or failure reason. The lines are advisory: the
//! host can drop them without affecting byte outputs or the length
//! side-channel. On wasm targets each formatted line goes to the imported
//! `env.host_trace` function; elsewhere (native test builds) to stderr.

use log::{LevelFilter, Log, Metadata, Record};
use std::sync::Once;

#[cfg(target_arch = "wasm32")]
unsafe extern "C" {
    fn host_trace(ptr: *const u8, len: u32);
}

fn emit(line: &str) {
    #[cfg(target_arch = "wasm32")]
    // Contract: the host reads the range synchronously and does not retain it.
    unsafe {
        host_trace(line.as_ptr(), line.len() as u32);
    }
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{line}");
}

struct HostSink;

impl Log for HostSink {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        emit(&format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static SINK: HostSink = HostSink;
static INIT: Once = Once::new();

/// Installs the host sink as the global logger; idempotent, called on every
/// export entry since the module has no load-time constructor.
pub(crate) fn init() {
    INIT.call_once(|| {
        if log::set_logger(&SINK).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    });
}
