use anyhow::Result;

fn main() -> Result<()> {
    care_journey_timeline::cli::run()
}
