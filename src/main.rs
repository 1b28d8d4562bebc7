fn main() {
    if let Err(err) = jfgrep::run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
