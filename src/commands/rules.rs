//! `rules` command: check process rules only.

use super::report_verdict;
use crate::cli::RulesArgs;
use sqlgrade::error::Result;
use sqlgrade::validate::check_process_rules;

pub fn cmd_rules(args: RulesArgs) -> Result<()> {
    let query = args.source.read()?;
    let verdict = check_process_rules(&query, &args.require, &args.forbid);
    report_verdict(&verdict, args.json)
}
