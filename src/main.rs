fn main() -> anyhow::Result<()> {
    ai_activity_digest::cli::commands::run()
}
