fn main() {
    std::process::exit(install_mitmf::app::cli::run());
}
