use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route tracing output to the browser console
pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry().with(fmt_layer).init();
}
