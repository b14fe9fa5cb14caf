fn main() {
    promptsync::app::cli::run();
}
