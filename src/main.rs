fn main() {
    promptspec::app::cli::run();
}
