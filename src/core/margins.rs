//! Margin extraction
//!
//! Coordinate transforms producing flanking windows around intron
//! boundaries, used to pull sequence context around splice sites.

use crate::core::intron::Intron;
use std::io::{self, Write};

/// Write each intron widened by `margin` on both sides, as
/// `scaffold\tstart\tend`. Starts saturate at 0, ends at `u64::MAX`.
pub fn extend_introns<'a, I, W>(introns: I, margin: u64, writer: &mut W) -> io::Result<usize>
where
    I: IntoIterator<Item = &'a Intron>,
    W: Write,
{
    let mut written = 0;
    for intron in introns {
        writeln!(
            writer,
            "{}\t{}\t{}",
            intron.scaffold,
            intron.start.saturating_sub(margin),
            intron.end.saturating_add(margin)
        )?;
        written += 1;
    }
    Ok(written)
}

/// Write two flanking windows per intron, one around each boundary.
///
/// The start-side window `[start - outer, start + inner]` goes to
/// `start_writer`; the end-side window `[end - inner, end + outer]` goes to
/// `end_writer`. Window starts saturate at 0, ends at `u64::MAX`.
pub fn flank_windows<'a, I, W1, W2>(
    introns: I,
    outer: u64,
    inner: u64,
    start_writer: &mut W1,
    end_writer: &mut W2,
) -> io::Result<usize>
where
    I: IntoIterator<Item = &'a Intron>,
    W1: Write,
    W2: Write,
{
    let mut written = 0;
    for intron in introns {
        writeln!(
            start_writer,
            "{}\t{}\t{}",
            intron.scaffold,
            intron.start.saturating_sub(outer),
            intron.start.saturating_add(inner)
        )?;
        writeln!(
            end_writer,
            "{}\t{}\t{}",
            intron.scaffold,
            intron.end.saturating_sub(inner),
            intron.end.saturating_add(outer)
        )?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intron(scaffold: &str, start: u64, end: u64) -> Intron {
        Intron::new(scaffold, start, end, 1.0).unwrap()
    }

    #[test]
    fn test_extend_introns() {
        let introns = vec![intron("s1", 100, 200), intron("s2", 50, 80)];
        let mut out = Vec::new();
        let n = extend_introns(&introns, 10, &mut out).unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "s1\t90\t210\ns2\t40\t90\n"
        );
    }

    #[test]
    fn test_extend_saturates_at_zero() {
        let introns = vec![intron("s1", 5, 20)];
        let mut out = Vec::new();
        extend_introns(&introns, 10, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "s1\t0\t30\n");
    }

    #[test]
    fn test_extend_saturates_at_max() {
        let introns = vec![Intron::new("s1", u64::MAX - 5, u64::MAX, 1.0).unwrap()];
        let mut out = Vec::new();
        extend_introns(&introns, 10, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("s1\t{}\t{}\n", u64::MAX - 15, u64::MAX)
        );
    }

    #[test]
    fn test_flank_windows() {
        let introns = vec![intron("s1", 100, 200)];
        let mut starts = Vec::new();
        let mut ends = Vec::new();
        let n = flank_windows(&introns, 50, 3, &mut starts, &mut ends).unwrap();
        assert_eq!(n, 1);
        assert_eq!(String::from_utf8(starts).unwrap(), "s1\t50\t103\n");
        assert_eq!(String::from_utf8(ends).unwrap(), "s1\t197\t250\n");
    }

    #[test]
    fn test_flank_windows_saturate_at_max() {
        let introns = vec![Intron::new("s1", u64::MAX - 2, u64::MAX, 1.0).unwrap()];
        let mut starts = Vec::new();
        let mut ends = Vec::new();
        flank_windows(&introns, 50, 30, &mut starts, &mut ends).unwrap();
        assert_eq!(
            String::from_utf8(starts).unwrap(),
            format!("s1\t{}\t{}\n", u64::MAX - 52, u64::MAX)
        );
        assert_eq!(
            String::from_utf8(ends).unwrap(),
            format!("s1\t{}\t{}\n", u64::MAX - 30, u64::MAX)
        );
    }

    #[test]
    fn test_flank_windows_saturate_at_zero() {
        let introns = vec![intron("s1", 10, 15)];
        let mut starts = Vec::new();
        let mut ends = Vec::new();
        flank_windows(&introns, 50, 30, &mut starts, &mut ends).unwrap();
        assert_eq!(String::from_utf8(starts).unwrap(), "s1\t0\t40\n");
        assert_eq!(String::from_utf8(ends).unwrap(), "s1\t0\t65\n");
    }
}
