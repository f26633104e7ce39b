// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use iced_folio::logging;

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --lang value");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --config-dir value");
            None
        }),
        content_path: args.opt_value_from_str("--content").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --content value");
            None
        }),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --i18n-dir value");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}
