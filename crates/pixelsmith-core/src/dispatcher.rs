//! Line-at-a-time command interpreter.
//!
//! The dispatcher owns the codec and display collaborators and moves through
//! two states: [`DispatcherState::Running`] until `exit` is seen, then
//! [`DispatcherState::Terminated`]. A failing command is reported for that
//! line only; the state stays `Running` and the current image is untouched,
//! because transformations build a new image and only a successful result is
//! published.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::codec::ImageCodec;
use crate::command::Directive;
use crate::display::ImageDisplay;
use crate::error::{EditError, Result};
use crate::transform::Transformation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Running,
    Terminated,
}

/// What a successfully dispatched line did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line, nothing happened.
    Skipped,
    /// An image was decoded and is now current.
    Loaded { width: u32, height: u32 },
    /// A transformation was applied and its result published.
    Applied {
        transformation: &'static str,
        width: u32,
        height: u32,
    },
    /// The current image was written to a path.
    Saved(PathBuf),
    /// The session has ended.
    Exited,
}

/// Totals for a [`CommandDispatcher::run`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines dispatched, including failed ones.
    pub processed: usize,
    pub failed: usize,
}

pub struct CommandDispatcher<C, D> {
    codec: C,
    display: D,
    state: DispatcherState,
}

impl<C: ImageCodec, D: ImageDisplay> CommandDispatcher<C, D> {
    pub fn new(codec: C, display: D) -> Self {
        Self {
            codec,
            display,
            state: DispatcherState::Running,
        }
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DispatcherState::Running
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn codec_mut(&mut self) -> &mut C {
        &mut self.codec
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_parts(self) -> (C, D) {
        (self.codec, self.display)
    }

    /// Interpret one command line.
    ///
    /// Once terminated, further lines are ignored and report
    /// [`Outcome::Exited`].
    pub fn dispatch(&mut self, line: &str) -> Result<Outcome> {
        if !self.is_running() {
            debug!(line, "ignoring command after exit");
            return Ok(Outcome::Exited);
        }

        let Some(directive) = Directive::parse(line)? else {
            return Ok(Outcome::Skipped);
        };
        debug!(?directive, "dispatching");

        match directive {
            Directive::Load(path) => self.load(&path),
            Directive::Save(path) => self.save(&path),
            Directive::Exit => {
                info!("session terminated");
                self.state = DispatcherState::Terminated;
                Ok(Outcome::Exited)
            }
            Directive::Edit => self.edit(line),
        }
    }

    /// Decode `path` and make it the current image.
    pub fn load(&mut self, path: &Path) -> Result<Outcome> {
        let image = self.codec.decode(path)?;
        let (width, height) = image.dimensions();
        info!(path = %path.display(), width, height, "loaded image");
        self.display.show(image);
        Ok(Outcome::Loaded { width, height })
    }

    /// Encode the current image to `path`.
    pub fn save(&mut self, path: &Path) -> Result<Outcome> {
        let image = self.display.current().ok_or(EditError::NoImage)?;
        self.codec.encode(image, path)?;
        info!(path = %path.display(), "saved image");
        Ok(Outcome::Saved(path.to_path_buf()))
    }

    fn edit(&mut self, line: &str) -> Result<Outcome> {
        let transformation = Transformation::parse(line, &self.codec)?;
        let current = self.display.current().ok_or(EditError::NoImage)?;
        let next = transformation.process(current)?;
        let (width, height) = next.dimensions();
        info!(
            transformation = transformation.name(),
            width, height, "published image"
        );
        self.display.show(next);
        Ok(Outcome::Applied {
            transformation: transformation.name(),
            width,
            height,
        })
    }

    /// Dispatch lines until `exit` or end of input.
    ///
    /// Errors are passed to `on_error` with the offending line and never stop
    /// the loop. Lines after `exit` are not consumed.
    pub fn run<I, S, F>(&mut self, lines: I, mut on_error: F) -> RunSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str, &EditError),
    {
        let mut summary = RunSummary::default();
        for line in lines {
            if !self.is_running() {
                break;
            }
            let line = line.as_ref();
            summary.processed += 1;
            if let Err(err) = self.dispatch(line) {
                summary.failed += 1;
                on_error(line, &err);
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::MemoryCodec;
    use crate::color::Color;
    use crate::display::SlotDisplay;
    use crate::raster::Image;

    fn dispatcher() -> CommandDispatcher<MemoryCodec, SlotDisplay> {
        let mut codec = MemoryCodec::new();
        codec.insert("a.png", Image::filled(8, 6, Color::rgb(40, 80, 120)).unwrap());
        CommandDispatcher::new(codec, SlotDisplay::new())
    }

    #[test]
    fn test_initial_state() {
        let d = dispatcher();
        assert_eq!(d.state(), DispatcherState::Running);
        assert!(d.display().current().is_none());
    }

    #[test]
    fn test_load() {
        let mut d = dispatcher();
        let outcome = d.dispatch("load a.png").unwrap();
        assert_eq!(outcome, Outcome::Loaded { width: 8, height: 6 });
        assert_eq!(d.display().published(), 1);
    }

    #[test]
    fn test_blank_line_skipped() {
        let mut d = dispatcher();
        assert_eq!(d.dispatch("   ").unwrap(), Outcome::Skipped);
        assert_eq!(d.display().published(), 0);
    }

    #[test]
    fn test_edit_without_image() {
        let mut d = dispatcher();
        assert!(matches!(d.dispatch("crop 0 0 1 1"), Err(EditError::NoImage)));
        assert!(matches!(d.dispatch("save out.png"), Err(EditError::NoImage)));
        assert!(d.is_running());
    }

    #[test]
    fn test_unknown_command_republishes_unchanged() {
        let mut d = dispatcher();
        d.dispatch("load a.png").unwrap();
        let before = d.display().current().cloned();
        let outcome = d.dispatch("sharpen 3").unwrap();
        assert_eq!(
            outcome,
            Outcome::Applied {
                transformation: "noop",
                width: 8,
                height: 6
            }
        );
        assert_eq!(d.display().current().cloned(), before);
        assert_eq!(d.display().published(), 2);
    }

    #[test]
    fn test_exit_terminates_and_ignores_rest() {
        let mut d = dispatcher();
        assert_eq!(d.dispatch("exit").unwrap(), Outcome::Exited);
        assert_eq!(d.state(), DispatcherState::Terminated);
        assert_eq!(d.dispatch("load a.png").unwrap(), Outcome::Exited);
        assert!(d.display().current().is_none());
    }

    #[test]
    fn test_save_stores_current() {
        let mut d = dispatcher();
        d.dispatch("load a.png").unwrap();
        d.dispatch("crop 1 1 2 2").unwrap();
        assert_eq!(
            d.dispatch("save b.png").unwrap(),
            Outcome::Saved(PathBuf::from("b.png"))
        );
        assert_eq!(d.codec().get("b.png").unwrap().dimensions(), (2, 2));
    }

    #[test]
    fn test_run_counts_failures_and_stops_at_exit() {
        let mut d = dispatcher();
        let mut errors = Vec::new();
        let summary = d.run(
            ["load a.png", "crop x 0 1 1", "crop 0 0 4 4", "exit", "crop 0 0 1 1"],
            |line, err| errors.push((line.to_string(), err.to_string())),
        );
        assert_eq!(summary, RunSummary { processed: 4, failed: 1 });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "crop x 0 1 1");
        assert_eq!(d.display().current().unwrap().dimensions(), (4, 4));
    }
}
