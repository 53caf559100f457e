// Trim interactor - Applies one trim configuration to every worklist entry

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::app::worklist::Worklist;
use crate::domain::model::*;
use crate::domain::rules::{output_path, plan_trim, requested_seconds};
use crate::error::{FfTrimError, FfTrimResult};
use crate::ports::*;

/// Interactor for the batch trim use case
pub struct TrimInteractor {
    probe_port: Arc<dyn ProbePort>,
    trim_port: Arc<dyn TrimPort>,
    fs_port: Arc<dyn FsPort>,
}

impl TrimInteractor {
    /// Create new trim interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        trim_port: Arc<dyn TrimPort>,
        fs_port: Arc<dyn FsPort>,
    ) -> Self {
        Self {
            probe_port,
            trim_port,
            fs_port,
        }
    }

    /// Trim every file in `worklist`, front to back, one at a time.
    ///
    /// A non-zero trim status marks that file failed and moves on. A trim
    /// longer than a file's duration stops the whole run and is recorded in
    /// [`RunReport::aborted`]. A missing file, a probe failure or a failed
    /// deletion is returned as an error.
    pub async fn run(&self, worklist: &Worklist, config: &TrimConfig) -> FfTrimResult<RunReport> {
        let start = config.start_timecode();
        let mut report = RunReport::default();

        for input in worklist {
            info!("Processing {}", input.display());

            if !self.fs_port.file_exists(input).await? {
                return Err(FfTrimError::not_found(input));
            }

            let duration_seconds = self.probe_port.probe_duration(input).await?;
            let Some(window) = plan_trim(config, duration_seconds) else {
                let reason = AbortReason {
                    input: input.clone(),
                    duration_seconds,
                    requested_seconds: requested_seconds(config),
                };
                error!("Aborting run: {}", reason);
                report.aborted = Some(reason);
                return Ok(report);
            };

            if config.dry_run {
                info!(
                    start = %window.start,
                    duration = %window.duration,
                    "Dry run, not trimming {}",
                    input.display()
                );
                report.files.push(FileReport {
                    input: input.clone(),
                    start,
                    outcome: TrimOutcome::DryRun {
                        duration: window.duration,
                    },
                });
                continue;
            }

            let invocation = TrimInvocation {
                input: input.clone(),
                start: window.start,
                duration: window.duration,
                output: output_path(config, input),
            };

            let status = self.trim_port.trim(&invocation).await?;
            if status != 0 {
                error!("FAILED! Error {} while trimming {}", status, input.display());
                report.files.push(FileReport {
                    input: input.clone(),
                    start,
                    outcome: TrimOutcome::Failed { status },
                });
                continue;
            }

            if config.delete_original {
                self.fs_port.delete_file(input).await?;
                info!("Deleted original {}", input.display());
            }

            report.files.push(FileReport {
                input: invocation.input,
                start,
                outcome: TrimOutcome::Trimmed {
                    output: invocation.output,
                    original_deleted: config.delete_original,
                },
            });
        }

        if report.success() {
            info!("Processed {} file(s)", report.files.len());
        } else {
            warn!(
                "{} of {} file(s) failed to trim",
                report.failed_count(),
                report.files.len()
            );
        }
        Ok(report)
    }
}
