fn main() {
    atm_session::observability::init();

    if let Err(err) = atm_session::app::run(std::env::args()) {
        tracing::error!(%err, "session failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
