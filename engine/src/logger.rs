use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: String,
}

impl Logger {
    fn new(prefix: String) -> Self {
        Self { prefix }
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%H:%M:%S");
        println!("[{}][{}] {}", timestamp, self.prefix, message);
    }
}

pub fn init_logger(prefix: &str) {
    LOGGER.get_or_init(|| Logger::new(prefix.to_string()));
}

/// Messages logged before `init_logger` are printed bare rather than
/// dropped.
pub fn log(message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(message),
        None => println!("{}", message),
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
