//! Command-line configuration for the `shellcfg` binary.

use crate::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "SHELLCFG_LOG";

pub const HELP_TEXT: &str = "shellcfg - manage PATH, aliases, constants and backups

USAGE:
    shellcfg [OPTIONS]

OPTIONS:
    -h, --help              Print this help message and exit
    --tick-ms <N>           Input poll interval in milliseconds (default: 20)
    --no-alt-screen         Draw on the main screen instead of the alternate one
    --log-file <PATH>       Write logs to PATH (filter from SHELLCFG_LOG, default: info)

    --headless-smoke        Drive a scripted session without a TTY and print frame stats
    --headless-size <WxH>   Screen size for headless mode (default: 80x24)
    --fail-bridge           Make every add/delete fail (exercise error paths)

EXAMPLES:
    shellcfg                                # Interactive mode
    shellcfg --log-file /tmp/shellcfg.log   # With logging
    shellcfg --headless-smoke               # CI smoke test
";

/// Parsed command-line configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    pub tick: Duration,
    pub use_alt_screen: bool,
    pub log_file: Option<PathBuf>,
    pub headless_smoke: bool,
    pub headless_size: (u16, u16),
    pub fail_bridge: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(20),
            use_alt_screen: true,
            log_file: None,
            headless_smoke: false,
            headless_size: (80, 24),
            fail_bridge: false,
        }
    }
}

/// Result of CLI parsing.
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Bad argument.
    Error(Error),
}

fn invalid(message: impl Into<String>) -> ParseResult {
    ParseResult::Error(Error::InvalidArgument(message.into()))
}

/// Parse `WxH` with both sides positive.
fn parse_size(value: &str) -> Option<(u16, u16)> {
    let (w, h) = value.split_once(['x', 'X'])?;
    let w = w.trim().parse::<u16>().ok()?;
    let h = h.trim().parse::<u16>().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}

impl Config {
    /// Parse configuration from command-line arguments, program name first.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--tick-ms" => {
                    let Some(value) = args.next() else {
                        return invalid("--tick-ms requires a value");
                    };
                    let value = value.to_string_lossy();
                    match value.parse::<u64>() {
                        Ok(n) if n > 0 => config.tick = Duration::from_millis(n),
                        _ => {
                            return invalid(format!(
                                "--tick-ms must be a positive integer, got {value}"
                            ));
                        }
                    }
                }

                "--no-alt-screen" => config.use_alt_screen = false,

                "--log-file" => {
                    let Some(value) = args.next() else {
                        return invalid("--log-file requires a path");
                    };
                    config.log_file = Some(PathBuf::from(value));
                }

                "--headless-smoke" => config.headless_smoke = true,

                "--headless-size" => {
                    let Some(value) = args.next() else {
                        return invalid("--headless-size requires a value");
                    };
                    let value = value.to_string_lossy();
                    match parse_size(&value) {
                        Some(size) => config.headless_size = size,
                        None => {
                            return invalid(format!(
                                "--headless-size expects WxH, e.g. 80x24, got {value}"
                            ));
                        }
                    }
                }

                "--fail-bridge" => config.fail_bridge = true,

                other => return invalid(format!("unknown option: {other}")),
            }
        }

        ParseResult::Config(config)
    }
}
