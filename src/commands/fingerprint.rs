//! `fingerprint` and `canonical` commands.

use super::print_json;
use crate::cli::{CanonicalArgs, FingerprintArgs};
use sqlgrade::canonical::canonicalize;
use sqlgrade::error::Result;
use sqlgrade::fingerprint::fingerprint;
use sqlgrade::table::ResultTable;

pub fn cmd_fingerprint(args: FingerprintArgs) -> Result<()> {
    let table = ResultTable::load(&args.table)?;
    let fp = fingerprint(&table, &args.canonical.to_options());

    if args.json {
        print_json(&fp)
    } else {
        println!("{}", fp.digest);
        Ok(())
    }
}

pub fn cmd_canonical(args: CanonicalArgs) -> Result<()> {
    let table = ResultTable::load(&args.table)?;
    let form = canonicalize(&table, &args.canonical.to_options());
    print!("{}", form.to_csv());
    Ok(())
}
