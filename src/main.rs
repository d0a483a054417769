use filmee_api::run_with_config;

#[tokio::main]
async fn main() {
    // Startup failures are already logged; exit non-zero so supervisors notice.
    if run_with_config().await.is_err() {
        std::process::exit(1);
    }
}
