use clap::Parser;
use std::path::PathBuf;

use overlap_con::assembler::ContigAssembler;
use overlap_con::assembly_config::AssemblyConfigBuilder;
use overlap_con::fasta::{load_collection, save_fasta};
use overlap_con::nucleotide_sequence::reverse_complement_str;

#[derive(Parser)]
#[command(name = "overlap_con")]
#[command(about = "Assembles overlapping reads into a single contig with overlap-layout-consensus", long_about = None)]
#[command(version)]
struct Cli {
    /// Input FASTA file with the fragments to assemble
    #[arg(value_name = "INPUT.FA")]
    input: PathBuf,

    /// Output FASTA file for the contig
    #[arg(long = "out", value_name = "OUT.FA")]
    out: PathBuf,

    /// Output FASTA file for the reverse complement of the contig
    #[arg(long = "out-ic", value_name = "OUT_IC.FA")]
    out_ic: PathBuf,

    /// Header label for the output records (default: input file stem)
    #[arg(long, value_name = "LABEL")]
    label: Option<String>,

    /// Symbols per line in the output FASTA
    #[arg(long, value_name = "INT", default_value = "80")]
    line_width: usize,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AssemblyConfigBuilder::default()
        .fasta_line_width(cli.line_width)
        .build()?;
    let label = cli.label.clone().unwrap_or_else(|| {
        cli.input.file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "contig".to_string())
    });

    log::info!("1. Opening file {:?}", cli.input);
    let collection = load_collection(&cli.input)?;
    log::info!("\tLoaded {} fragments", collection.len());

    log::info!("2. Assembling contig (run with -v for per-stage detail)");
    let assembler = ContigAssembler::with_config(config);
    let contig = assembler.assemble(&collection)?;
    log::info!("\tLayout path: {:?}", contig.path());
    log::info!("\tContig length: {}", contig.len());

    log::info!("3. Saving contig to {:?}", cli.out);
    save_fasta(&cli.out, &label, contig.sequence(), assembler.config().fasta_line_width)?;

    log::info!("4. Saving reverse complement to {:?}", cli.out_ic);
    let contig_ic = reverse_complement_str(contig.sequence())?;
    save_fasta(&cli.out_ic, &label, &contig_ic, assembler.config().fasta_line_width)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run(&cli) {
        log::error!("Assembly failed: {}", e);
        std::process::exit(1);
    }
    log::info!("Done.");
}
