fn main() {
    if let Err(err) = weather_charts::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
