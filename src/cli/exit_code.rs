use super::exit_status::ExitStatus;
use super::run::CommandOutcome;

pub fn exit_status_from_outcome(outcome: &CommandOutcome) -> ExitStatus {
    match outcome {
        CommandOutcome::Init => ExitStatus::Success,
        CommandOutcome::Convert(result) => {
            if result.is_clean() {
                ExitStatus::Success
            } else {
                ExitStatus::Failure
            }
        }
    }
}
