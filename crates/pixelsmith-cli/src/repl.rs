//! The line reader feeding the dispatcher.

use std::io::{BufRead, Write};

use pixelsmith_core::{CommandDispatcher, ImageCodec, ImageDisplay, Outcome};
use tracing::debug;

/// Read commands from `input` until `exit` or end of input.
///
/// Errors and `saved` notices are printed to `report` and the loop
/// continues. When `prompt` is set it is written before every line. Bytes
/// that are not UTF-8 are replaced, so such a line fails like any other
/// malformed command.
pub fn run<C, D, R, W, E>(
    dispatcher: &mut CommandDispatcher<C, D>,
    mut input: R,
    mut prompt: Option<(&str, &mut W)>,
    report: &mut E,
) -> anyhow::Result<()>
where
    C: ImageCodec,
    D: ImageDisplay,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut buf = Vec::new();

    while dispatcher.is_running() {
        if let Some((text, out)) = prompt.as_mut() {
            write!(out, "{text}")?;
            out.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        match dispatcher.dispatch(line) {
            Ok(Outcome::Saved(path)) => writeln!(report, "saved {}", path.display())?,
            Ok(outcome) => debug!(?outcome, "command done"),
            Err(err) => writeln!(report, "error: {err}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelsmith_core::{Color, Image, MemoryCodec, SlotDisplay};

    fn dispatcher() -> CommandDispatcher<MemoryCodec, SlotDisplay> {
        let mut codec = MemoryCodec::new();
        codec.insert("a.png", Image::filled(20, 20, Color::WHITE).unwrap());
        CommandDispatcher::new(codec, SlotDisplay::new())
    }

    #[test]
    fn test_stops_at_exit() {
        let mut d = dispatcher();
        let input = "load a.png\ncrop 0 0 5 5\nexit\ncrop 0 0 1 1\n";
        let mut report = Vec::new();
        run::<_, _, _, Vec<u8>, _>(&mut d, input.as_bytes(), None, &mut report).unwrap();

        assert!(!d.is_running());
        assert_eq!(d.display().current().unwrap().dimensions(), (5, 5));
        assert!(report.is_empty());
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let mut d = dispatcher();
        let input = "load a.png\ncrop -5 0 10 10\nblend missing.png multiply\ncrop 0 0 2 2\n";
        let mut report = Vec::new();
        run::<_, _, _, Vec<u8>, _>(&mut d, input.as_bytes(), None, &mut report).unwrap();

        let report = String::from_utf8(report).unwrap();
        assert_eq!(report.lines().count(), 2);
        assert!(report.lines().all(|l| l.starts_with("error: ")));
        assert!(d.is_running());
        assert_eq!(d.display().current().unwrap().dimensions(), (2, 2));
    }

    #[test]
    fn test_prompt_written_per_line() {
        let mut d = dispatcher();
        let mut prompt_out = Vec::new();
        let mut report = Vec::new();
        run(
            &mut d,
            "load a.png\nexit\n".as_bytes(),
            Some(("> ", &mut prompt_out)),
            &mut report,
        )
        .unwrap();
        assert_eq!(String::from_utf8(prompt_out).unwrap(), "> > ");
    }

    #[test]
    fn test_save_is_reported() {
        let mut d = dispatcher();
        let mut report = Vec::new();
        run::<_, _, _, Vec<u8>, _>(&mut d, "load a.png\nsave b.png\n".as_bytes(), None, &mut report)
            .unwrap();
        assert_eq!(String::from_utf8(report).unwrap(), "saved b.png\n");
    }

    #[test]
    fn test_invalid_utf8_line_is_reported_and_skipped() {
        let mut d = dispatcher();
        let input: &[u8] = b"load a.png\ncrop \xff\xfe 0 1 1\ncrop 0 0 5 5\n";
        let mut report = Vec::new();
        run::<_, _, _, Vec<u8>, _>(&mut d, input, None, &mut report).unwrap();

        let report = String::from_utf8(report).unwrap();
        assert_eq!(report.lines().count(), 1);
        assert!(report.starts_with("error: "));
        assert!(d.is_running());
        assert_eq!(d.display().current().unwrap().dimensions(), (5, 5));
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let mut d = dispatcher();
        let mut report = Vec::new();
        run::<_, _, _, Vec<u8>, _>(&mut d, "load a.png\r\ncrop 0 0 3 3".as_bytes(), None, &mut report)
            .unwrap();
        assert!(report.is_empty());
        assert_eq!(d.display().current().unwrap().dimensions(), (3, 3));
    }
}
