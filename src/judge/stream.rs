use super::{Judge, ThrowOutcome};
use crate::consts::MAX_AIM_RADIUS;
use crate::error::{DartsError, DartsResult};
use crate::geometry::Point;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

/// Judge spoken to over a line-oriented text protocol.
///
/// Requests are written as `"{n}"` (practice announcement) and `"{x} {y}"`
/// (aim point, six decimals). Each throw is answered with four
/// whitespace-separated tokens `x y multiplier score`, which may span lines.
pub struct StreamJudge<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> StreamJudge<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn next_token(&mut self) -> DartsResult<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(DartsError::JudgeClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.pending.pop_front().ok_or(DartsError::JudgeClosed)
    }

    fn next_value<T: FromStr>(&mut self, what: &str) -> DartsResult<T> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| DartsError::MalformedResponse(format!("{} '{}'", what, token)))
    }
}

impl<R: BufRead, W: Write> Judge for StreamJudge<R, W> {
    fn publish_practicing_darts_count(&mut self, n: u32) -> DartsResult<()> {
        writeln!(self.writer, "{}", n)?;
        self.writer.flush()?;
        Ok(())
    }

    fn throw_dart(&mut self, target: Point) -> DartsResult<ThrowOutcome> {
        if target.norm() > MAX_AIM_RADIUS {
            warn!("Aiming at {} beyond radius {}", target, MAX_AIM_RADIUS);
        }
        writeln!(self.writer, "{:.6} {:.6}", target.x, target.y)?;
        self.writer.flush()?;

        let x: f64 = self.next_value("x coordinate")?;
        let y: f64 = self.next_value("y coordinate")?;
        let multiplier: u8 = self.next_value("multiplier")?;
        let score: u8 = self.next_value("score")?;

        if multiplier > 3 {
            return Err(DartsError::MalformedResponse(format!(
                "multiplier {} out of range",
                multiplier
            )));
        }

        let outcome = ThrowOutcome::new(Point::new(x, y), multiplier, score);
        debug!("Aimed {} -> landed {} ({} x{})", target, outcome.point, score, multiplier);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn judge(input: &str) -> StreamJudge<Cursor<Vec<u8>>, Vec<u8>> {
        StreamJudge::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn writes_announcement_and_aim() {
        let mut j = judge("0.1 -0.2 3 20\n");
        j.publish_practicing_darts_count(164).unwrap();
        let outcome = j.throw_dart(Point::new(0.0, -0.6)).unwrap();

        assert_eq!(outcome, ThrowOutcome::new(Point::new(0.1, -0.2), 3, 20));
        let (_, out) = j.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "164\n0.000000 -0.600000\n");
    }

    #[test]
    fn reply_may_span_lines() {
        let mut j = judge("0.5\n-0.5 1\n\n7\n");
        let outcome = j.throw_dart(Point::ORIGIN).unwrap();
        assert_eq!(outcome.score, 7);
        assert_eq!(outcome.multiplier, 1);
    }

    #[test]
    fn end_of_stream_is_reported() {
        let mut j = judge("0.5 0.5 1");
        assert!(matches!(
            j.throw_dart(Point::ORIGIN),
            Err(DartsError::JudgeClosed)
        ));
    }

    #[test]
    fn garbage_is_malformed() {
        let mut j = judge("0.5 0.5 double 20\n");
        assert!(matches!(
            j.throw_dart(Point::ORIGIN),
            Err(DartsError::MalformedResponse(_))
        ));

        let mut j = judge("0.5 0.5 4 20\n");
        assert!(matches!(
            j.throw_dart(Point::ORIGIN),
            Err(DartsError::MalformedResponse(_))
        ));
    }
}
