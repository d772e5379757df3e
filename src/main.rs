fn main() {
    if let Err(err) = catamm_layout::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
