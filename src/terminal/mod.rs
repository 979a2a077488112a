//! Terminal front end
//!
//! - **view**: [`TerminalView`], the dashboard written as text lines
//! - **sparkline**: [`TerminalChart`], the chart drawn as a one-line sparkline
//! - **command**: stdin commands (`24h`, `window <start> <end>`, `apply`, ...)
//!
//! View and chart write through one shared [`Output`] so their lines never
//! interleave mid-line.

pub mod command;
pub mod sparkline;
pub mod view;

pub use command::{Command, CommandError, HELP};
pub use sparkline::{resample, sparkline, SparklineHandle, TerminalChart};
pub use view::TerminalView;

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Line-oriented writer shared by the view and the chart
#[derive(Clone)]
pub struct Output {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Output {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Write one line; write errors are logged and dropped
    pub fn line(&self, text: &str) {
        let Ok(mut writer) = self.writer.lock() else {
            tracing::warn!("Terminal output lock poisoned");
            return;
        };

        if let Err(e) = writeln!(writer, "{}", text).and_then(|_| writer.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// In-memory writer whose contents can be read back
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }

        pub fn lines(&self) -> Vec<String> {
            self.contents().lines().map(str::to_string).collect()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
