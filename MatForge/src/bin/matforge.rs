fn main() -> anyhow::Result<()> {
    matforge::cli::run_cli()
}
