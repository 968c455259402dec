fn main() -> Result<(), Box<dyn std::error::Error>> {
    namescope_cli::run()
}
