use courier::runner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runner::run()
}
