//! Panic wiring. A panicking draw must not leave the terminal in raw
//! mode, so the hook restores it before any report is printed.

use std::panic;
use std::process;

use better_panic::Settings;
use color_eyre::config::HookBuilder;
use color_eyre::eyre::Result;
use tracing::error;

use crate::infrastructure::tui::real::RealTui;

pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Consider reporting it at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let report = panic_hook.panic_report(panic_info).to_string();

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};
            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
                .homepage(env!("CARGO_PKG_HOMEPAGE"));

            // Friendly summary plus a crash dump file for bug reports
            let file_path = handle_dump(&meta, panic_info);
            print_msg(file_path, &meta)
                .expect("human-panic: printing error message to console failed");
            eprintln!("{report}");
        }

        log::error!("Error: {}", strip_ansi_escapes::strip_str(&report));

        #[cfg(debug_assertions)]
        {
            // Full backtrace in debug builds
            Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

/// Leave the alternate screen and raw mode so the report is readable.
fn restore_terminal() {
    if let Ok(mut t) = RealTui::new() {
        if let Err(r) = t.exit() {
            error!("Unable to exit terminal: {r:?}");
        }
    }
}
