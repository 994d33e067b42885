use anyhow::Result;
use lineup::{group_submissions, Submission};

use crate::IoPipe;

pub fn run(io: IoPipe) -> Result<()> {
    let submissions: Vec<Submission> = io.read_records()?;

    let grouped = group_submissions(&submissions);
    log::info!(
        "grouped {} submissions into {} slots",
        submissions.len(),
        grouped.len()
    );

    io.write_json(&grouped)
}
