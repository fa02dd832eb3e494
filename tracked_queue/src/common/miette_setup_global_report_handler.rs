// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module is standalone, you can use it any project that uses
//! [miette](https://docs.rs/miette/latest/miette/index.html) for error handling. The
//! `tq_ops_perf` binary uses it so that a [`crate::RingQueueError`] (eg: a zero
//! `--capacity`) is rendered with its diagnostic code and help text.
//!
//! - Miette allows customization how the report is [`miette::Report`] displayed to
//!   terminal output (stdout, stderr), when the global hook is activated, due to a
//!   program "erroring out", when the top-level miette handler in `main() ->
//!   miette::Result<_>` is activated. This hook is only activated at the time that the
//!   error is displayed to terminal output, not when it is registered, it is lazy. So it
//!   is possible to detect the terminal width just before the output is generated.
//! - Using the [`miette::MietteHandlerOpts`] struct you can configure the default
//!   [`miette::MietteHandler`].

use miette::MietteHandlerOpts;
use tracing::debug;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| {
                    usize::from(columns)
                });
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
