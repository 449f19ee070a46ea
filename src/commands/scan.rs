use std::time::Instant;

use crate::args::ScanArgs;
use crate::errors::*;
use crate::fasta::FastaSource;

pub fn main(args: &ScanArgs) -> Result<()> {
    let source = FastaSource::new(&args.input, args.mode)?;
    info!("{:?} exists.", args.input);

    info!(
        "Identifying possible target sites in {:?} ({} strategy, {} source)",
        args.input,
        args.strategy.name(),
        args.mode.name()
    );

    let timer = Instant::now();
    let state = args
        .strategy
        .scan(&source)
        .chain_err(|| format!("failed to identify target sites in {:?}", args.input))?;
    let seconds = timer.elapsed().as_secs_f64();
    debug!("{}", state.summarize());

    info!("Total time taken: {:.2} seconds", seconds);
    info!("Results:");
    info!("  Candidate guides   : {}", state.candidate_count());
    match state.duplicate_percentage() {
        Some(pct) => info!(
            "  Duplicate guides   : {} ({:.2} %)",
            state.duplicate_count(),
            pct
        ),
        None => info!(
            "  Duplicate guides   : {} (no candidates)",
            state.duplicate_count()
        ),
    }
    info!("  Recorded sequences : {}", state.recorded().len());

    let record = state.into_record();
    record
        .write(&args.output)
        .chain_err(|| format!("failed to write results to {:?}", args.output))?;

    let size = std::fs::metadata(&args.output)
        .chain_err(|| format!("failed to stat output file {:?}", args.output))?
        .len();
    info!("Output written to {:?} ({} bytes)", args.output, size);

    Ok(())
}
