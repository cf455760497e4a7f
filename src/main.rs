fn main() -> Result<(), Box<dyn std::error::Error>> {
    trackstudio::runtime::run()
}
