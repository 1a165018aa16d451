use {
    crate::prelude::*,
    colored::ColoredString,
    exchange_sdk::serde_parsers::DateSeries,
    std::{
        fmt::Display,
        io::Write,
        sync::{
            atomic::AtomicU8,
            Arc,
        },
        thread,
        time::Duration,
    },
};

/// Print a grey colored line to separate sections
pub(crate) fn separator() -> ColoredString {
    "\n-=-=-=-=-=-=-=-".truecolor(100, 100, 100)
}

/// Print the title of the currently executed command.
#[macro_export]
macro_rules! command_title {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "\n{arrow} {title}{separator}",
                arrow = "▶".bold().purple(),
                title = format!($($args)*).bold(),
                separator = $crate::display::separator()
            );
        }
    };
}

/// Notify the user of a successful operation. Basicaly [`println!`] but
/// includes a not [`JSON_MODE`] check and some success formatting.
#[macro_export]
macro_rules! notify_success {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "[{check}] {msg}",
                check = "✔".green().bold(),
                msg = format!($($args)*)
            );
        }
    };
}

/// Formatted list item.
#[macro_export]
macro_rules! item {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "    {arrow} {item}",
                arrow = "▶".truecolor(100, 100, 100),
                item = format!($($args)*)
            );
        }
    };
}

/// Macro to print a loading state. Accepts a message and returns a
/// [LoadingHandle] to change the state of the loading.
#[macro_export]
macro_rules! loading {
    ($($args:tt)*) => {
        $crate::display::LoadingHandle::start(format!($($args)*))
    };
}

const RUNNING: u8 = 0;
const SUCCESS: u8 = 1;
const ERROR: u8 = 2;

/// Struct helping with handling loading state. The spinner runs on its own
/// thread until [LoadingHandle::success] or [LoadingHandle::error] is called.
pub(crate) struct LoadingHandle {
    state: Arc<AtomicU8>,
    thread: Option<thread::JoinHandle<()>>,
}

impl LoadingHandle {
    pub(crate) fn start(msg: String) -> Self {
        let state = Arc::new(AtomicU8::new(RUNNING));

        if JSON_MODE.load(Ordering::Relaxed) {
            return Self {
                state,
                thread: None,
            };
        }

        let thread = {
            let state = Arc::clone(&state);

            thread::spawn(move || {
                let frames = ["/", "-", "\\", "|"];
                let mut i = 0;

                loop {
                    match state.load(Ordering::Acquire) {
                        SUCCESS => {
                            println!("\r[{check}] {msg}", check = "✔".green().bold());

                            break;
                        }
                        ERROR => {
                            println!("\r[{ballot}] {msg}", ballot = "✘".red().bold());

                            break;
                        }
                        _ => print!("\r[{}] {msg} ", frames[i].purple()),
                    }

                    i = (i + 1) % frames.len();

                    let _ = std::io::stdout().flush();

                    thread::sleep(Duration::from_millis(100));
                }
            })
        };

        Self {
            state,
            thread: Some(thread),
        }
    }

    /// Mark the loading as successful.
    pub(crate) fn success(self) {
        self.finish(SUCCESS);
    }

    /// Mark the loading as errored.
    pub(crate) fn error(self) {
        self.finish(ERROR);
    }

    fn finish(mut self, state: u8) {
        self.state.store(state, Ordering::Release);

        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// If [`JSON_MODE`] is enabled, output the given data as JSON.
pub(crate) fn json_output<T: Serialize>(data: &T) -> AnyResult<(), ExchangeCliError> {
    if !JSON_MODE.load(Ordering::Relaxed) {
        return Ok(());
    }

    match serde_json::to_string_pretty(data) {
        Ok(json) => {
            println!("{}", json);

            Ok(())
        }
        Err(e) => Err(ExchangeCliError::Any(e.into())),
    }
}

/// Format an optional rate for display.
pub(crate) fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{rate:.2} LBP/USD"),
        None => "n/a".truecolor(100, 100, 100).to_string(),
    }
}

/// Print every point of a series as a list item under `title`.
pub(crate) fn print_series<T: Display>(title: &str, series: &DateSeries<T>) {
    if JSON_MODE.load(Ordering::Relaxed) {
        return;
    }

    println!("  {}", title.bold());

    if series.is_empty() {
        crate::item!("{}", "no data".truecolor(100, 100, 100));

        return;
    }

    for point in series {
        crate::item!("{}: {}", point.date, point.value);
    }
}
