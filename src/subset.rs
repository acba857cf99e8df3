use std::io::{self, BufRead, Write};

/// Copies the first `k` lines of `input` to `output`.
///
/// Stops after `k` lines or when the input is exhausted, whichever comes
/// first, and returns the number of lines copied. Lines are handled as
/// raw bytes: only a terminating `\n` is recognized, everything else
/// (carriage returns, non-UTF-8 data) passes through untouched. Each
/// copied line is written with a trailing newline regardless of how the
/// input ended.
pub fn copy_lines<R: BufRead, W: Write>(k: u64, mut input: R, output: &mut W) -> io::Result<u64> {
    let mut line = Vec::new();
    let mut copied = 0;
    while copied < k {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        output.write_all(&line)?;
        output.write_all(b"\n")?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn copies_exactly_k_lines() {
        let input = Cursor::new("one\ntwo\nthree\n");
        let mut output = Vec::new();
        let copied = copy_lines(2, input, &mut output).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(output, b"one\ntwo\n");
    }

    #[test]
    fn stops_at_end_of_input() {
        let input = Cursor::new("one\ntwo\n");
        let mut output = Vec::new();
        let copied = copy_lines(10, input, &mut output).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(output, b"one\ntwo\n");
    }

    #[test]
    fn zero_lines_reads_nothing() {
        let input = Cursor::new("one\n");
        let mut output = Vec::new();
        let copied = copy_lines(0, input, &mut output).unwrap();
        assert_eq!(copied, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn missing_trailing_newline_is_added() {
        let input = Cursor::new("one\ntwo");
        let mut output = Vec::new();
        let copied = copy_lines(5, input, &mut output).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(output, b"one\ntwo\n");
    }

    #[test]
    fn carriage_returns_pass_through() {
        let input = Cursor::new(b"one\r\ntwo\r\n".to_vec());
        let mut output = Vec::new();
        let copied = copy_lines(2, input, &mut output).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(output, b"one\r\ntwo\r\n");
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let input = Cursor::new(vec![0xff, 0xfe, b'\n', b'x', 0x80, b'\n']);
        let mut output = Vec::new();
        let copied = copy_lines(5, input, &mut output).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(output, vec![0xff, 0xfe, b'\n', b'x', 0x80, b'\n']);
    }
}
