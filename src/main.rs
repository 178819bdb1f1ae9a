fn main() {
    nginx_auto_config::app::cli::run();
}
