use std::path::Path;

use crate::args::CompareArgs;
use crate::errors::*;
use crate::record::{compare, ResultRecord};

fn load(filename: &str) -> Result<ResultRecord> {
    if !Path::new(filename).is_file() {
        bail!(ErrorKind::MissingInput(filename.into()));
    }

    let record = ResultRecord::read(&filename)?;
    let size = std::fs::metadata(filename)
        .chain_err(|| format!("failed to stat result file {:?}", filename))?
        .len();
    info!("Loaded {:?} ({} bytes)", filename, size);

    Ok(record)
}

pub fn main(args: &CompareArgs) -> Result<()> {
    let first = load(&args.first)?;
    let second = load(&args.second)?;

    for diff in compare(&first, &second) {
        if diff.is_same() {
            info!("{} are the same in both datasets.", diff.field);
            continue;
        }

        warn!("{} are different!", diff.field);
        info!("{:?}: {} entries", args.first, diff.first_count);
        info!("{:?}: {} entries", args.second, diff.second_count);

        warn!(
            "The following items are in {:?} but not {:?}:",
            args.first, args.second
        );
        for item in &diff.only_in_first {
            info!("    {}", item);
        }

        warn!(
            "The following items are in {:?} but not {:?}:",
            args.second, args.first
        );
        for item in &diff.only_in_second {
            info!("    {}", item);
        }
    }

    Ok(())
}
