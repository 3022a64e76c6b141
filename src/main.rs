fn main() {
    jumbo::init_logging();
    jumbo::app::cli::run();
}
