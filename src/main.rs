use std::env;
use std::process::exit;

use log::error;

use qmkit::command::{help_cmd, CommandContext, SelectedArgs};

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let mut context = CommandContext::default();
    let mut args = SelectedArgs::new();

    // The first slice contains the name of the program
    args.scan();
    if !args.has_next() {
        if let Err(e) = help_cmd(&mut context) {
            error!("{}", e);
        }
        return;
    }

    while args.has_next() {
        if let Err(e) = args.parse_next(&mut context) {
            error!("{}", e);
            exit(1);
        }
    }
}
