use crate::get_build_info;
use anyhow::Context;
use build_info::{BuildInfo, VersionControl};
use log::{info, Level, LevelFilter};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Instant, SystemTime};
use tracing::span::{Attributes, Record};
use tracing::{Event, Id, Metadata, Subscriber};

fn format_system_time(system_time: SystemTime) -> String {
    let datetime: chrono::DateTime<chrono::Utc> = system_time.into();
    datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn print_build_info(bi: &BuildInfo) {
    info!(
        "{} v{} started at {}",
        bi.crate_info.name,
        bi.crate_info.version,
        format_system_time(SystemTime::now())
    );
    info!("Build Information:");
    info!("  Timestamp: {}", bi.timestamp);
    info!("  Profile: {}", bi.profile);
    info!("  Target: {}", bi.target);
    info!("  Compiler: {}", bi.compiler);
    if let Some(VersionControl::Git(git)) = &bi.version_control {
        info!("  Commit: {} (dirty: {})", git.commit_id, git.dirty);
    }
}

// Used for logging elapsed time
static START_TIME: OnceLock<Instant> = OnceLock::new();

fn format_inner<'a, F, const COLORED: bool>(
    message: &'a fmt::Arguments<'a>,
    record: &'a log::Record<'a>,
    callback: F,
) where
    F: FnOnce(fmt::Arguments),
{
    let red: &'static str = if COLORED { "\x1B[31m" } else { "" };
    let yellow: &'static str = if COLORED { "\x1B[33m" } else { "" };
    let green: &'static str = if COLORED { "\x1B[32m" } else { "" };
    let blue: &'static str = if COLORED { "\x1B[34m" } else { "" };
    let cyan: &'static str = if COLORED { "\x1B[36m" } else { "" };
    let white: &'static str = if COLORED { "\x1B[37m" } else { "" };
    let reset: &'static str = if COLORED { "\x1B[0m" } else { "" };

    let elapsed = START_TIME
        .get()
        .map(|start| start.elapsed())
        .unwrap_or_default();

    // Only the file name, full paths are too long to be useful
    let file = Path::new(record.file().unwrap_or("unknown"));
    let base = file.file_name().unwrap_or_default().to_string_lossy();
    let location = format!("{}:{}", base, record.line().unwrap_or(0));

    callback(format_args!(
        "[{cyan}{:^10.3}{reset}][{:^20}][{}{:>5}{reset}]: {}",
        elapsed.as_secs_f32(),
        location,
        match record.level() {
            Level::Error => red,
            Level::Warn => yellow,
            Level::Info => green,
            Level::Debug => blue,
            Level::Trace => white,
        },
        record.level(),
        message,
    ))
}

fn format<'a, F>(message: &'a fmt::Arguments<'a>, record: &'a log::Record<'a>, callback: F)
where
    F: FnOnce(fmt::Arguments),
{
    format_inner::<F, false>(message, record, callback);
}

fn format_colored<'a, F>(message: &'a fmt::Arguments<'a>, record: &'a log::Record<'a>, callback: F)
where
    F: FnOnce(fmt::Arguments),
{
    format_inner::<F, true>(message, record, callback);
}

/// Swallows `tracing` events from dependencies; everything here logs via `log`.
struct SilentSubscriber;

impl Subscriber for SilentSubscriber {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        false
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, _event: &Event<'_>) {}

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// Logs go to stderr, stdout is reserved for the report.
pub fn setup_logging(
    level: LevelFilter,
    file_logging: Option<PathBuf>,
    colored: bool,
) -> anyhow::Result<()> {
    START_TIME.set(Instant::now()).ok();

    tracing::subscriber::set_global_default(SilentSubscriber).ok();

    let mut dispatch = fern::Dispatch::new().level(level).chain(std::io::stderr());

    if colored {
        dispatch = dispatch.format(|cb, args, r| format_colored(args, r, |fmt| cb.finish(fmt)));
    } else {
        dispatch = dispatch.format(|cb, args, r| format(args, r, |fmt| cb.finish(fmt)));
    }

    if let Some(path) = file_logging {
        let file = fern::log_file(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Logger is already installed")?;

    print_build_info(&get_build_info());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(colored: bool) -> String {
        let record = log::Record::builder()
            .args(format_args!("Vulkan Version: 1.3.0"))
            .level(Level::Warn)
            .file(Some("src/report/mod.rs"))
            .line(Some(42))
            .build();
        let mut out = String::new();
        if colored {
            format_colored(record.args(), &record, |fmt| out = fmt.to_string());
        } else {
            format(record.args(), &record, |fmt| out = fmt.to_string());
        }
        out
    }

    #[test]
    fn plain_format_has_location_and_level() {
        let line = render(false);
        assert!(line.contains("mod.rs:42"), "{}", line);
        assert!(line.contains(" WARN]"), "{}", line);
        assert!(line.ends_with("]: Vulkan Version: 1.3.0"), "{}", line);
        assert!(!line.contains('\x1B'));
    }

    #[test]
    fn colored_format_marks_level() {
        let line = render(true);
        assert!(line.contains("\x1B[33m WARN\x1B[0m"), "{}", line);
    }

    #[test]
    fn system_time_is_utc() {
        assert_eq!(
            format_system_time(SystemTime::UNIX_EPOCH),
            "1970-01-01 00:00:00 UTC"
        );
    }
}
