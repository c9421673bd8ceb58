use clap::{Parser, Subcommand};

mod cmd;
mod format;
mod input;
mod tax;

#[derive(Parser, Debug)]
#[command(name = "itax", version, about = "Indian Income Tax Calculator: Old vs. New Regime")]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate tax under one regime with its per-slab breakdown
    Calculate(cmd::calculate::CalculateCommand),
    /// Compare the old and new regimes on the same income
    Compare(cmd::compare::CompareCommand),
    /// Export both regimes' breakdowns as a CSV statement
    Export(cmd::export::ExportCommand),
    /// Show the slab schedule of a regime
    Slabs(cmd::slabs::SlabsCommand),
    /// Compare both regimes for every request in a JSON or CSV file
    Batch(cmd::batch::BatchCommand),
    /// Print the batch input schema
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.command {
        Command::Calculate(calculate) => calculate.exec(),
        Command::Compare(compare) => compare.exec(),
        Command::Export(export) => export.exec(),
        Command::Slabs(slabs) => slabs.exec(),
        Command::Batch(batch) => batch.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
