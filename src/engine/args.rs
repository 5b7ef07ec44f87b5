//! Engine argument construction
//!
//! Every operation maps to an explicit argument vector that is handed to the
//! process spawner as-is. Nothing here goes through a shell, so file names with
//! spaces or quotes need no escaping.

use std::path::{Path, PathBuf};

use crate::domain::model::*;
use crate::error::SuperVideoResult;

/// Builds engine invocations for each operation kind
#[derive(Debug, Clone)]
pub struct ArgumentBuilder {
    executable: PathBuf,
}

impl ArgumentBuilder {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Cut one range out of the input.
    ///
    /// Without `render` the streams are copied, so the cut snaps to the nearest
    /// keyframe. With `render` the clip is re-encoded and frame accurate.
    pub fn split(
        &self,
        operation: &Operation,
        entry: &TimeRangeEntry,
    ) -> SuperVideoResult<TranscodeCommand> {
        let mut command = self.command().arg("-i").arg(path_arg(operation.input()?));

        if !operation.render {
            command = command.args(["-vcodec", "copy", "-acodec", "copy"]);
        }

        Ok(command
            .args(["-ss", entry.begin.as_str(), "-to", entry.end.as_str()])
            .arg(entry.filename.as_str()))
    }

    /// Join the files listed in `manifest` into the operation's output
    pub fn concat(
        &self,
        operation: &Operation,
        manifest: &Path,
    ) -> SuperVideoResult<TranscodeCommand> {
        let output = operation.output()?;
        let mut command = self
            .command()
            .args(["-f", "concat", "-safe", "0", "-i"])
            .arg(path_arg(manifest));

        if !operation.render {
            command = command.args(["-c", "copy"]);
        }

        Ok(command.arg(path_arg(output)))
    }

    /// Scale presentation timestamps by `speed`: below 1 plays faster, above 1 slower
    pub fn timelapse(&self, operation: &Operation) -> SuperVideoResult<TranscodeCommand> {
        let input = operation.input()?;
        let output = operation.output()?;

        Ok(self
            .command()
            .arg("-i")
            .arg(path_arg(input))
            .arg("-vf")
            .arg(setpts_filter(operation.speed))
            .arg(path_arg(output)))
    }

    /// Input only; the engine describes the input on stderr and exits
    pub fn info(&self, operation: &Operation) -> SuperVideoResult<TranscodeCommand> {
        Ok(self.command().arg("-i").arg(path_arg(operation.input()?)))
    }

    fn command(&self) -> TranscodeCommand {
        TranscodeCommand::new(&self.executable)
    }
}

/// Filter expression scaling presentation timestamps by `speed`
pub fn setpts_filter(speed: f64) -> String {
    format!("setpts={}*PTS", speed)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ArgumentBuilder {
        ArgumentBuilder::new("ffmpeg")
    }

    fn split_op(render: bool) -> Operation {
        Operation::new(OperationKind::Split, vec!["source.mp4".into()]).with_render(render)
    }

    #[test]
    fn test_split_bounds_and_target() {
        let entry = TimeRangeEntry::new("00:00", "00:10", "a.mp4", 1);
        let cmd = builder().split(&split_op(false), &entry).unwrap();

        assert_eq!(cmd.value_of("-i"), Some("source.mp4"));
        assert_eq!(cmd.value_of("-ss"), Some("00:00"));
        assert_eq!(cmd.value_of("-to"), Some("00:10"));
        assert_eq!(cmd.arguments.last().map(String::as_str), Some("a.mp4"));
    }

    #[test]
    fn test_split_copy_flags_follow_render() {
        let entry = TimeRangeEntry::new("0", "5", "a.mp4", 1);

        let copy = builder().split(&split_op(false), &entry).unwrap();
        assert_eq!(copy.value_of("-vcodec"), Some("copy"));
        assert_eq!(copy.value_of("-acodec"), Some("copy"));

        let render = builder().split(&split_op(true), &entry).unwrap();
        assert!(!render.contains("-vcodec"));
        assert!(!render.contains("-acodec"));
        assert!(!render.contains("copy"));
    }

    #[test]
    fn test_split_keeps_filename_with_spaces_as_one_argument() {
        let entry = TimeRangeEntry::new("0", "5", "it's my clip.mp4", 1);
        let cmd = builder().split(&split_op(false), &entry).unwrap();
        assert_eq!(cmd.arguments.last().unwrap(), "it's my clip.mp4");
    }

    #[test]
    fn test_split_argument_order() {
        let entry = TimeRangeEntry::new("1", "2", "x.mp4", 1);
        let cmd = builder().split(&split_op(false), &entry).unwrap();
        assert_eq!(
            cmd.arguments,
            vec![
                "-i", "source.mp4", "-vcodec", "copy", "-acodec", "copy", "-ss", "1", "-to", "2",
                "x.mp4"
            ]
        );
    }

    #[test]
    fn test_concat_arguments() {
        let op = Operation::new(OperationKind::Concat, vec!["a.mp4".into(), "b.mp4".into()])
            .with_output("out.mp4");
        let cmd = builder().concat(&op, Path::new("list.txt")).unwrap();

        assert_eq!(
            cmd.arguments,
            vec!["-f", "concat", "-safe", "0", "-i", "list.txt", "-c", "copy", "out.mp4"]
        );
    }

    #[test]
    fn test_concat_render_drops_copy() {
        let op = Operation::new(OperationKind::Concat, vec!["a.mp4".into()])
            .with_output("out.mp4")
            .with_render(true);
        let cmd = builder().concat(&op, Path::new("list.txt")).unwrap();

        assert!(!cmd.contains("-c"));
        assert!(!cmd.contains("copy"));
        assert_eq!(cmd.arguments.last().unwrap(), "out.mp4");
    }

    #[test]
    fn test_timelapse_filter_uses_speed() {
        let op = Operation::new(OperationKind::Timelapse, vec!["v.mp4".into()])
            .with_output("fast.mp4")
            .with_speed(0.05);
        let cmd = builder().timelapse(&op).unwrap();
        assert_eq!(
            cmd.arguments,
            vec!["-i", "v.mp4", "-vf", "setpts=0.05*PTS", "fast.mp4"]
        );

        let slow = builder().timelapse(&op.clone().with_speed(2.0)).unwrap();
        assert_eq!(slow.value_of("-vf"), Some("setpts=2*PTS"));
    }

    #[test]
    fn test_info_is_input_only() {
        let op = Operation::new(OperationKind::Info, vec!["clip one.mp4".into()]);
        let cmd = builder().info(&op).unwrap();
        assert_eq!(cmd.executable, PathBuf::from("ffmpeg"));
        assert_eq!(cmd.arguments, vec!["-i", "clip one.mp4"]);
    }

    #[test]
    fn test_missing_output_is_configuration_error() {
        let op = Operation::new(OperationKind::Timelapse, vec!["v.mp4".into()]);
        assert!(builder().timelapse(&op).unwrap_err().is_configuration());
    }
}
