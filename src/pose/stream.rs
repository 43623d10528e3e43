//! Pose input sources.
//!
//! Every source yields complete poses. Partial updates from a control are
//! expressed by the source itself as the previous pose with one field
//! overridden, never as deltas for the renderer to apply.

use std::io::{BufRead, ErrorKind};

use super::{Pose, PoseField};
use crate::error::{HandError, Result};

/// Anything that produces a sequence of complete poses, such as a glove
/// transport or a recorded session.
pub trait PoseSource {
    /// The next pose, `None` once the source is exhausted.
    fn next_pose(&mut self) -> Option<Result<Pose>>;
}

/// Reads one JSON pose object per line.
///
/// Blank lines are skipped. Every frame must carry all eight fields.
pub struct JsonLinesSource<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    fn decode(&self, text: &str) -> Result<Pose> {
        let pose: Pose = serde_json::from_str(text).map_err(|source| HandError::Decode {
            line: self.line,
            source,
        })?;
        if !pose.is_finite() {
            return Err(HandError::NonFinite { line: self.line });
        }
        Ok(pose)
    }
}

impl<R: BufRead> PoseSource for JsonLinesSource<R> {
    fn next_pose(&mut self) -> Option<Result<Pose>> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let text = self.buf.trim();
                    if text.is_empty() {
                        continue;
                    }
                    let frame = self.decode(text);
                    if let Ok(pose) = &frame {
                        log::debug!("frame {}: {:?}", self.line, pose);
                    }
                    return Some(frame);
                }
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    // read_line has consumed the bad bytes; later lines are unaffected
                    self.line += 1;
                    return Some(Err(HandError::InvalidText { line: self.line }));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

impl<R: BufRead> Iterator for JsonLinesSource<R> {
    type Item = Result<Pose>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_pose()
    }
}

/// Applies `field=value` tokens on top of `base`, left to right.
pub fn parse_assignments<'a, I>(base: Pose, tokens: I) -> Result<Pose>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().try_fold(base, |pose, token| {
        let (name, raw) = token
            .split_once('=')
            .ok_or_else(|| HandError::InvalidAssignment(token.to_string()))?;
        let field: PoseField = name.trim().parse()?;
        let value: f32 = raw
            .trim()
            .parse()
            .map_err(|_| HandError::invalid_value(field.name(), raw))?;
        Ok(pose.with(field, value))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const FRAME: &str = concat!(
        r#"{"wristYaw":12,"wristPitch":-5,"wristRoll":3,"#,
        r#""thumb":0,"index":50,"middle":60,"ring":70,"pinky":100}"#
    );

    const OVERFLOWING_FRAME: &str = concat!(
        r#"{"wristYaw":1e39,"wristPitch":0,"wristRoll":0,"#,
        r#""thumb":10,"index":10,"middle":10,"ring":10,"pinky":10}"#
    );

    #[test]
    fn reads_frames_and_skips_blank_lines() {
        let input = format!("{FRAME}\n\n   \n{FRAME}\n");
        let source = JsonLinesSource::new(Cursor::new(input));
        let poses: Vec<Pose> = source.map(|p| p.unwrap()).collect();
        assert_eq!(poses.len(), 2);
        assert_eq!(poses[0].wrist_yaw, 12.0);
        assert_eq!(poses[0].index, 50.0);
        assert_eq!(poses[1], poses[0]);
    }

    #[test]
    fn missing_field_is_a_decode_error_with_line() {
        let input = format!("{FRAME}\n{{\"wristYaw\":1}}\n");
        let mut source = JsonLinesSource::new(Cursor::new(input));
        assert!(source.next_pose().unwrap().is_ok());
        let err = source.next_pose().unwrap().unwrap_err();
        assert!(matches!(err, HandError::Decode { line: 2, .. }));
        assert!(source.next_pose().is_none());
    }

    #[test]
    fn non_finite_frame_is_rejected_and_stream_continues() {
        let input = format!("{OVERFLOWING_FRAME}\n{FRAME}\n");
        let mut source = JsonLinesSource::new(Cursor::new(input));
        let err = source.next_pose().unwrap().unwrap_err();
        assert!(matches!(err, HandError::NonFinite { line: 1 }), "{err:?}");
        let pose = source.next_pose().unwrap().unwrap();
        assert_eq!(pose.wrist_yaw, 12.0);
        assert!(source.next_pose().is_none());
    }

    #[test]
    fn invalid_utf8_line_is_skippable() {
        let mut input = b"{\"wristYaw\":\xff\xfe}\n".to_vec();
        input.extend_from_slice(FRAME.as_bytes());
        input.push(b'\n');
        let mut source = JsonLinesSource::new(Cursor::new(input));
        let err = source.next_pose().unwrap().unwrap_err();
        assert!(matches!(err, HandError::InvalidText { line: 1 }), "{err:?}");
        let pose = source.next_pose().unwrap().unwrap();
        assert_eq!(pose.index, 50.0);
        assert_eq!(source.line(), 2);
    }

    #[test]
    fn garbage_is_rejected() {
        let mut source = JsonLinesSource::new(Cursor::new("not json\n"));
        let err = source.next_pose().unwrap().unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn assignments_override_base() {
        let pose = parse_assignments(Pose::DEFAULT, ["index=80", "wristYaw=-20", "ring = 5"])
            .unwrap();
        assert_eq!(pose.index, 80.0);
        assert_eq!(pose.wrist_yaw, -20.0);
        assert_eq!(pose.ring, 5.0);
        assert_eq!(pose.thumb, 10.0);
    }

    #[test]
    fn later_assignments_win() {
        let pose = parse_assignments(Pose::DEFAULT, ["pinky=1", "pinky=2"]).unwrap();
        assert_eq!(pose.pinky, 2.0);
    }

    #[test]
    fn assignment_errors() {
        assert!(matches!(
            parse_assignments(Pose::DEFAULT, ["index"]),
            Err(HandError::InvalidAssignment(_))
        ));
        assert!(matches!(
            parse_assignments(Pose::DEFAULT, ["elbow=3"]),
            Err(HandError::UnknownField(_))
        ));
        assert!(matches!(
            parse_assignments(Pose::DEFAULT, ["index=lots"]),
            Err(HandError::InvalidValue { .. })
        ));
    }
}
