use std::io::Write;
use std::sync::Mutex;

const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

/// 下载进度快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadProgress {
    pub label: String,
    pub downloaded: u64,
    /// 0 when the server did not declare a content length.
    pub total: u64,
}

impl DownloadProgress {
    pub fn new(label: impl Into<String>, total: u64) -> Self {
        Self { label: label.into(), downloaded: 0, total }
    }

    pub fn percent(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some((self.downloaded as f64 / self.total as f64) * 100.0)
        }
    }

    pub fn render(&self) -> String {
        match self.percent() {
            Some(percent) => format!(
                "{}: {}/{} [{:.0}%]",
                self.label,
                format_bytes(self.downloaded),
                format_bytes(self.total),
                percent
            ),
            None => format!("{}: {}", self.label, format_bytes(self.downloaded)),
        }
    }
}

/// Formats a byte count with a 1024 divisor, e.g. `1.5MiB`.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{}{}", bytes, UNITS[0])
    } else {
        format!("{:.1}{}", value, UNITS[unit])
    }
}

pub trait ProgressSink: Send + Sync {
    fn update(&self, progress: &DownloadProgress);
    fn finish(&self, progress: &DownloadProgress);
}

/// 在 stderr 上原地刷新的进度条
///
/// 只有显示内容变化时才重绘，相同的百分比和字节数不会重复写入。
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    last_line: Mutex<String>,
}

impl ConsoleProgress {
    fn changed_line(&self, progress: &DownloadProgress) -> Option<String> {
        let line = progress.render();
        let mut last = self.last_line.lock().unwrap_or_else(|e| e.into_inner());
        if *last == line {
            return None;
        }
        last.clone_from(&line);
        Some(line)
    }

    fn reset(&self) {
        self.last_line.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl ProgressSink for ConsoleProgress {
    fn update(&self, progress: &DownloadProgress) {
        if let Some(line) = self.changed_line(progress) {
            let mut stderr = std::io::stderr().lock();
            let _ = write!(stderr, "\r{}", line);
            let _ = stderr.flush();
        }
    }

    fn finish(&self, progress: &DownloadProgress) {
        self.reset();
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "\r{}", progress.render());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn update(&self, _progress: &DownloadProgress) {}

    fn finish(&self, _progress: &DownloadProgress) {}
}
