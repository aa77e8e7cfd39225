//! `check` command: grade a submission against an exercise.

use super::report_verdict;
use crate::cli::CheckArgs;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlgrade::config::ExerciseConfig;
use sqlgrade::error::Result;
use sqlgrade::table::ResultTable;

pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let exercise = ExerciseConfig::load(&args.exercise)?;
    let table = ResultTable::load(&args.result)?;
    let query = args.source.read()?;

    let verdict = match args.seed {
        Some(seed) => exercise.grade(&query, &table, &mut StdRng::seed_from_u64(seed)),
        None => exercise.grade(&query, &table, &mut rand::thread_rng()),
    };

    report_verdict(&verdict, args.json)
}
