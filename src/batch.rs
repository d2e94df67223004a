use crate::dispatch::create_record;
use crate::dlog;
use crate::error::PackageError;
use crate::message::MetricsSummary;
use crate::types::Package;

/// What to do when a package is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log the package, skip it, keep going.
    #[default]
    Continue,
    /// Stop at the first bad package.
    FailFast,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub summaries: Vec<MetricsSummary>,
    pub rejected: Vec<PackageError>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.summaries.len() + self.rejected.len()
    }
}

/// Summarize every package in order. Under `FailFast` the first rejection is
/// returned as the error; otherwise rejections are collected in the report.
pub fn process(packages: &[Package], policy: ErrorPolicy) -> Result<BatchReport, PackageError> {
    let mut report = BatchReport::default();

    for (index, pkg) in packages.iter().enumerate() {
        match create_record(&pkg.code, &pkg.values) {
            Ok(workout) => {
                let summary = workout.summarize();
                dlog!(
                    "summarized index={index} kind={} calories={:.3}",
                    summary.workout_type,
                    summary.calories
                );
                report.summaries.push(summary);
            }
            Err(source) => {
                let err = PackageError {
                    index,
                    code: pkg.code.clone(),
                    source,
                };
                if policy == ErrorPolicy::FailFast {
                    return Err(err);
                }
                tracing::warn!(index, code = %pkg.code, err = %err.source, "skipping package");
                report.rejected.push(err);
            }
        }
    }

    tracing::info!(
        processed = report.summaries.len(),
        rejected = report.rejected.len(),
        "batch done"
    );

    Ok(report)
}
