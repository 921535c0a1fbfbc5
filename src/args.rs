use crate::counter::{CounterError, CounterResult};
use crate::render::DisplayVariant;
use std::env;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Gui,
    Terminal,
}

#[derive(Debug, PartialEq)]
pub struct Args {
    pub mode: Mode,
    pub variant: DisplayVariant,
    pub debug_mode: bool,
    /// Terminal mode exits after this many lines
    pub max_ticks: Option<u64>,
}

/// What the command line asked for.
#[derive(Debug, PartialEq)]
pub enum Command {
    Run(Args),
    Help,
    Version,
}

impl Args {
    /// Parses the process arguments. Prints help, version or the parse error
    /// and returns `None` when there is nothing to run.
    pub fn parse() -> Option<Self> {
        match Self::parse_from(env::args().skip(1)) {
            Ok(Command::Run(args)) => Some(args),
            Ok(Command::Help) => {
                print_help();
                None
            }
            Ok(Command::Version) => {
                println!("Sober Counter v{}", env!("APP_VERSION_DISPLAY"));
                None
            }
            Err(e) => {
                eprintln!("❌ {e}");
                print_help();
                None
            }
        }
    }

    /// Parses flags (program name already stripped).
    pub fn parse_from<I, S>(args: I) -> CounterResult<Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mode: Option<Mode> = None;
        let mut variant = DisplayVariant::default();
        let mut debug_mode: bool = false;
        let mut max_ticks: Option<u64> = None;

        for arg in args {
            let arg = arg.as_ref();
            if arg == "--help" || arg == "-h" {
                return Ok(Command::Help);
            } else if arg == "--version" || arg == "-v" {
                return Ok(Command::Version);
            } else if arg == "--debug" {
                debug_mode = true;
            } else if arg == "--gui" {
                mode = Some(Mode::Gui);
            } else if arg == "--terminal" || arg == "-t" {
                mode = Some(Mode::Terminal);
            } else if let Some(val) = arg.strip_prefix("--variant=") {
                variant = val.parse()?;
            } else if let Some(val) = arg.strip_prefix("--ticks=") {
                match val.parse::<u64>() {
                    Ok(n) if n > 0 => max_ticks = Some(n),
                    _ => {
                        return Err(CounterError::InvalidArgument {
                            flag: "--ticks",
                            value: val.to_string(),
                        });
                    }
                }
            } else {
                return Err(CounterError::InvalidArgument {
                    flag: "argument",
                    value: arg.to_string(),
                });
            }
        }

        Ok(Command::Run(Args {
            mode: mode.unwrap_or(Mode::Gui),
            variant,
            debug_mode,
            max_ticks,
        }))
    }
}

fn print_help() {
    println!("⏱️ Sober Counter");
    println!();
    println!("USAGE:");
    println!("    sober-counter [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    (no flags)                    Launch GUI window");
    println!("    --gui                         Launch GUI window");
    println!("    --terminal, -t                Print the counter to stdout once per second");
    println!("    --variant=<segmented|prose>   Digital clock or sentence (default: segmented)");
    println!("    --ticks=N                     Terminal mode: exit after N lines");
    println!("    --debug                       Enable debug logging");
    println!("    --help, -h                    Show this help message");
    println!("    --version, -v                 Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    sober-counter");
    println!("    sober-counter --variant=prose");
    println!("    sober-counter --terminal --ticks=5");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Args {
        match Args::parse_from(args).unwrap() {
            Command::Run(a) => a,
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let args = run(&[]);
        assert_eq!(args.mode, Mode::Gui);
        assert_eq!(args.variant, DisplayVariant::Segmented);
        assert!(!args.debug_mode);
        assert_eq!(args.max_ticks, None);
    }

    #[test]
    fn test_terminal_flags() {
        let args = run(&["-t", "--variant=prose", "--ticks=5", "--debug"]);
        assert_eq!(args.mode, Mode::Terminal);
        assert_eq!(args.variant, DisplayVariant::Prose);
        assert!(args.debug_mode);
        assert_eq!(args.max_ticks, Some(5));
    }

    #[test]
    fn test_help_and_version_short_circuit() {
        assert_eq!(Args::parse_from(["--gui", "-h"]).unwrap(), Command::Help);
        assert_eq!(Args::parse_from(["--version", "--bogus"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Args::parse_from(["--ticks=0"]),
            Err(CounterError::InvalidArgument { flag: "--ticks", .. })
        ));
        assert!(matches!(
            Args::parse_from(["--ticks=abc"]),
            Err(CounterError::InvalidArgument { flag: "--ticks", .. })
        ));
        assert!(matches!(
            Args::parse_from(["--variant=neon"]),
            Err(CounterError::InvalidArgument { flag: "--variant", .. })
        ));
        assert!(matches!(
            Args::parse_from(["--frobnicate"]),
            Err(CounterError::InvalidArgument { flag: "argument", .. })
        ));
    }
}
